//! Property-based tests for substitution and sampling.
//!
//! Generates random trees over a small pool of variables and checks:
//! 1. Substituting the same bindings twice changes nothing the second time
//! 2. Binding every variable resolves any non-failing tree to a scalar
//! 3. `e - e` samples to zero for any arithmetic tree `e`

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use proptest::prelude::*;
use rv_eval::{resolve, substitute, substitute_operand, Bindings, Sampler};
use rv_ir::{BinaryOp, Expr, Operand, Scalar, Variable};

// -- Strategies --

const NAMES: [&str; 3] = ["X", "Y", "Z"];

fn arithmetic_op() -> impl Strategy<Value = BinaryOp> {
    prop::sample::select(vec![BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul])
}

fn arithmetic_operand() -> impl Strategy<Value = Operand> {
    let leaf = prop_oneof![
        prop::sample::select(NAMES.to_vec()).prop_map(|n| Operand::from(Variable::normal(n))),
        (-5i32..5).prop_map(Operand::from),
    ];
    leaf.prop_recursive(4, 24, 2, |inner| {
        (arithmetic_op(), inner.clone(), inner)
            .prop_map(|(op, l, r)| Operand::Node(Expr::binary(op, l, r)))
    })
}

fn arithmetic_expr() -> impl Strategy<Value = Expr> {
    (arithmetic_op(), arithmetic_operand(), arithmetic_operand())
        .prop_map(|(op, l, r)| Expr::binary(op, l, r))
}

fn partial_bindings() -> impl Strategy<Value = Bindings> {
    prop::collection::vec((prop::sample::select(NAMES.to_vec()), -3.0f64..3.0), 0..3).prop_map(
        |pairs| {
            pairs
                .into_iter()
                .map(|(name, value)| (Variable::normal(name), Operand::from(value)))
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn substitution_is_idempotent(expr in arithmetic_expr(), bindings in partial_bindings()) {
        let once = substitute(&expr, &bindings).unwrap();
        let twice = substitute_operand(&once, &bindings).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn full_bindings_resolve(expr in arithmetic_expr(), values in prop::array::uniform3(-3.0f64..3.0)) {
        let bindings: Bindings = NAMES
            .iter()
            .zip(values)
            .map(|(name, value)| (Variable::normal(*name), Operand::from(value)))
            .collect();
        let resolved = resolve(substitute(&expr, &bindings).unwrap());
        prop_assert!(matches!(resolved, Ok(Scalar::Float(_))));
    }

    #[test]
    fn self_difference_is_zero(expr in arithmetic_expr(), seed in any::<u64>()) {
        let mut sampler = Sampler::seeded(seed);
        let value = sampler.sample(&(&expr - &expr)).unwrap();
        // IEEE: x - x is 0 for finite x
        if let Scalar::Float(x) = value {
            prop_assert!(x == 0.0 || x.is_nan());
        }
    }

    #[test]
    fn residual_vars_are_the_unbound_ones(expr in arithmetic_expr(), bindings in partial_bindings()) {
        let result = substitute(&expr, &bindings).unwrap();
        if let Some(residual) = result.as_expr() {
            for var in residual.unique_vars() {
                prop_assert!(!bindings.contains(var));
            }
        }
    }
}
