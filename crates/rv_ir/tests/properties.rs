//! Property-based tests for expression construction.
//!
//! Generates random trees over a small pool of variable names and checks:
//! 1. `unique_vars` of a node is the union of its operands' sets
//! 2. every variable in a tree appears exactly once in `unique_vars`
//! 3. equal variables hash equally

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use proptest::prelude::*;
use rustc_hash::FxHasher;
use rv_ir::{BinaryOp, Expr, ExprKind, Operand, Variable};
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

// -- Strategies --

fn variable_strategy() -> impl Strategy<Value = Variable> {
    (prop::sample::select(vec!["X", "Y", "Z"]), any::<bool>()).prop_map(|(name, normal)| {
        if normal {
            Variable::normal(name)
        } else {
            Variable::uniform(name)
        }
    })
}

fn operand_strategy() -> impl Strategy<Value = Operand> {
    let leaf = prop_oneof![
        variable_strategy().prop_map(Operand::from),
        (-10i32..10).prop_map(Operand::from),
    ];
    leaf.prop_recursive(4, 32, 2, |inner| {
        (prop::sample::select(BinaryOp::ALL.to_vec()), inner.clone(), inner)
            .prop_map(|(op, l, r)| Operand::Node(Expr::binary(op, l, r)))
    })
}

fn expr_strategy() -> impl Strategy<Value = Expr> {
    (
        prop::sample::select(BinaryOp::ALL.to_vec()),
        operand_strategy(),
        operand_strategy(),
    )
        .prop_map(|(op, l, r)| Expr::binary(op, l, r))
}

fn fx_hash(var: &Variable) -> u64 {
    let mut hasher = FxHasher::default();
    var.hash(&mut hasher);
    hasher.finish()
}

/// Every variable leaf, with repetition.
fn collect_leaves(operand: &Operand, out: &mut Vec<Variable>) {
    let Some(expr) = operand.as_expr() else {
        return;
    };
    match expr.kind() {
        ExprKind::Variable(var) => out.push(var.clone()),
        ExprKind::Binary { left, right, .. }
        | ExprKind::Given {
            clause: left,
            condition: right,
        } => {
            collect_leaves(left, out);
            collect_leaves(right, out);
        }
    }
}

proptest! {
    #[test]
    fn unique_vars_is_union_of_operands(expr in expr_strategy()) {
        let ExprKind::Binary { left, right, .. } = expr.kind() else {
            return Ok(());
        };
        let mut expected = BTreeSet::new();
        for side in [left, right] {
            if let Some(vars) = side.unique_vars() {
                expected.extend(vars.iter().cloned());
            }
        }
        prop_assert_eq!(expr.unique_vars(), &expected);
    }

    #[test]
    fn unique_vars_lists_each_leaf_once(expr in expr_strategy()) {
        let mut leaves = Vec::new();
        collect_leaves(&Operand::from(&expr), &mut leaves);
        let distinct: BTreeSet<_> = leaves.into_iter().collect();
        prop_assert_eq!(expr.unique_vars().len(), distinct.len());
        for var in &distinct {
            prop_assert!(expr.unique_vars().contains(var));
        }
    }

    #[test]
    fn equal_variables_hash_equally(a in variable_strategy(), b in variable_strategy()) {
        if a == b {
            prop_assert_eq!(fx_hash(&a), fx_hash(&b));
        }
        prop_assert_eq!(a == b, a.cmp(&b) == std::cmp::Ordering::Equal);
    }

    #[test]
    fn display_is_fully_parenthesized(expr in expr_strategy()) {
        let text = expr.to_string();
        prop_assert!(text.starts_with('('));
        prop_assert!(text.ends_with(')'));
        let opens = text.matches('(').count();
        let closes = text.matches(')').count();
        prop_assert_eq!(opens, closes);
    }
}
