//! Immutable expression nodes.
//!
//! An `Expr` is a cheap handle (`Arc`) to a node that never changes after it
//! is built. Trees are built bottom-up, so they are acyclic, and any subtree
//! can be shared between many parents and across samples.
//!
//! # Conditional nodes
//!
//! `Given` is kept at the root of a tree by construction:
//! - a `Given` clause or condition that is itself a `Given` is flattened,
//!   conjoining the conditions;
//! - applying any operator to a `Given` distributes the operator over the
//!   clause and conjoins the conditions.
//!
//! Both rules live in `Expr::given` and `Expr::binary`, which every public
//! constructor and operator goes through.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::operators::BinaryOp;
use crate::scalar::{Operand, Scalar};
use crate::stack::ensure_sufficient_stack;
use crate::variable::Variable;

/// Deduplicated variables reachable from a node, in identity order.
pub type VarSet = BTreeSet<Variable>;

/// Node variants.
#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    /// A random leaf.
    Variable(Variable),
    /// An operator applied to two operand slots.
    Binary {
        op: BinaryOp,
        left: Operand,
        right: Operand,
    },
    /// `clause` conditioned on `condition` holding.
    Given { clause: Operand, condition: Operand },
}

struct Node {
    kind: ExprKind,
    unique_vars: VarSet,
}

/// Tears a tree down with a worklist instead of one stack frame per level.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        take_children(&mut self.kind, &mut pending);
        while let Some(child) = pending.pop() {
            // shared subtrees only lose a reference
            if let Ok(mut node) = Arc::try_unwrap(child.0) {
                take_children(&mut node.kind, &mut pending);
            }
        }
    }
}

fn take_children(kind: &mut ExprKind, pending: &mut Vec<Expr>) {
    if let ExprKind::Binary { left, right, .. }
    | ExprKind::Given {
        clause: left,
        condition: right,
    } = kind
    {
        for slot in [left, right] {
            let taken = std::mem::replace(slot, Operand::Literal(Scalar::Bool(false)));
            if let Operand::Node(child) = taken {
                pending.push(child);
            }
        }
    }
}

/// Shared handle to an immutable expression node.
#[derive(Clone)]
pub struct Expr(Arc<Node>);

impl Expr {
    fn from_kind(kind: ExprKind) -> Self {
        let unique_vars = match &kind {
            ExprKind::Variable(var) => BTreeSet::from([var.clone()]),
            ExprKind::Binary { left, right, .. }
            | ExprKind::Given {
                clause: left,
                condition: right,
            } => merge_vars(left, right),
        };
        Self(Arc::new(Node { kind, unique_vars }))
    }

    pub fn variable(var: Variable) -> Self {
        Self::from_kind(ExprKind::Variable(var))
    }

    pub fn uniform(name: impl Into<Arc<str>>) -> Self {
        Self::variable(Variable::uniform(name))
    }

    pub fn normal(name: impl Into<Arc<str>>) -> Self {
        Self::variable(Variable::normal(name))
    }

    pub fn symbol(name: impl Into<Arc<str>>) -> Self {
        Self::variable(Variable::symbol(name))
    }

    /// Apply `op` to two operands.
    ///
    /// Operand order is kept as given (`1 + X` is `Add(1, X)`). When either
    /// side is a `Given`, the operator is applied to its clause instead and
    /// the conditions are conjoined.
    pub fn binary(op: BinaryOp, left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        let (left, right) = (left.into(), right.into());
        match (given_parts(&left), given_parts(&right)) {
            (Some((a, b)), Some((c, d))) => {
                Self::given(Self::binary(op, a, c), Self::binary(BinaryOp::And, b, d))
            }
            (Some((a, b)), None) => Self::given(Self::binary(op, a, right), b),
            (None, Some((c, d))) => Self::given(Self::binary(op, left, c), d),
            (None, None) => Self::from_kind(ExprKind::Binary { op, left, right }),
        }
    }

    /// `clause` conditioned on `condition`.
    ///
    /// `Given(Given(A, B), C)` becomes `Given(A, B & C)` and
    /// `Given(A, Given(B, C))` becomes `Given(A, B & C)`.
    pub fn given(clause: impl Into<Operand>, condition: impl Into<Operand>) -> Self {
        let (clause, condition) = (clause.into(), condition.into());
        let condition = match given_parts(&condition) {
            Some((inner, inner_condition)) => {
                Operand::Node(Self::binary(BinaryOp::And, inner, inner_condition))
            }
            None => condition,
        };
        match given_parts(&clause) {
            Some((inner, outer)) => Self::from_kind(ExprKind::Given {
                clause: inner,
                condition: Operand::Node(Self::binary(BinaryOp::And, outer, condition)),
            }),
            None => Self::from_kind(ExprKind::Given { clause, condition }),
        }
    }

    pub fn pow(&self, exponent: impl Into<Operand>) -> Self {
        Self::binary(BinaryOp::Pow, self, exponent)
    }

    /// `base ** self`.
    pub fn rpow(&self, base: impl Into<Operand>) -> Self {
        Self::binary(BinaryOp::Pow, base, self)
    }

    pub fn lt(&self, rhs: impl Into<Operand>) -> Self {
        Self::binary(BinaryOp::Lt, self, rhs)
    }

    pub fn gt(&self, rhs: impl Into<Operand>) -> Self {
        Self::binary(BinaryOp::Gt, self, rhs)
    }

    pub fn kind(&self) -> &ExprKind {
        &self.0.kind
    }

    /// The deduplicated variables reachable from this node.
    ///
    /// Computed once when the node was built.
    pub fn unique_vars(&self) -> &VarSet {
        &self.0.unique_vars
    }

    pub fn as_variable(&self) -> Option<&Variable> {
        match self.kind() {
            ExprKind::Variable(var) => Some(var),
            _ => None,
        }
    }

    /// `(clause, condition)` if this is a `Given`.
    pub fn as_given(&self) -> Option<(&Operand, &Operand)> {
        match self.kind() {
            ExprKind::Given { clause, condition } => Some((clause, condition)),
            _ => None,
        }
    }

    pub fn is_given(&self) -> bool {
        self.as_given().is_some()
    }

    /// Whether both handles point at the same allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

fn merge_vars(left: &Operand, right: &Operand) -> VarSet {
    let mut vars = left.unique_vars().cloned().unwrap_or_default();
    if let Some(right_vars) = right.unique_vars() {
        vars.extend(right_vars.iter().cloned());
    }
    vars
}

fn given_parts(operand: &Operand) -> Option<(Operand, Operand)> {
    operand
        .as_expr()
        .and_then(Expr::as_given)
        .map(|(clause, condition)| (clause.clone(), condition.clone()))
}

impl From<Variable> for Expr {
    fn from(var: Variable) -> Self {
        Self::variable(var)
    }
}

/// Structural equality. Variables compare by kind and name.
impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || ensure_sufficient_stack(|| self.kind() == other.kind())
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| fmt::Debug::fmt(self.kind(), f))
    }
}

/// Fully parenthesized infix form, e.g. `((X + Y) * 2)`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self.kind() {
            ExprKind::Variable(var) => fmt::Display::fmt(var, f),
            ExprKind::Binary { op, left, right } => write!(f, "({left} {op} {right})"),
            ExprKind::Given { clause, condition } => write!(f, "{{ {clause} ; {condition} }}"),
        })
    }
}
