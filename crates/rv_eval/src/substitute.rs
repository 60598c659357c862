//! Substitution engine.
//!
//! Replaces bound variables throughout a tree. Nodes whose operands all
//! resolve to scalars are evaluated; nodes with an unbound variable below
//! them are rebuilt with the partially substituted operands, producing a
//! simplified residual expression.

use rv_ir::{ensure_sufficient_stack, Expr, ExprKind, Operand, Scalar};

use crate::bindings::Bindings;
use crate::errors::{unresolved_expression, EvalResult};
use crate::operators::evaluate_binary;

/// Substitute `bindings` into `expr`.
///
/// - A variable resolves to its binding, or to itself when unbound.
/// - A binary node with two scalar operands is evaluated; otherwise a new
///   node of the same operator wraps the substituted operands.
/// - A conditional node is rebuilt around its substituted clause and
///   condition. Conditioning is resolved by the sampler, not here.
pub fn substitute(expr: &Expr, bindings: &Bindings) -> EvalResult<Operand> {
    ensure_sufficient_stack(|| match expr.kind() {
        ExprKind::Variable(var) => Ok(bindings
            .get(var)
            .cloned()
            .unwrap_or_else(|| Operand::Node(expr.clone()))),
        ExprKind::Binary { op, left, right } => {
            let left = substitute_operand(left, bindings)?;
            let right = substitute_operand(right, bindings)?;
            match (&left, &right) {
                (Operand::Literal(a), Operand::Literal(b)) => {
                    evaluate_binary(*a, *b, *op).map(Operand::Literal)
                }
                _ => Ok(Operand::Node(Expr::binary(*op, left, right))),
            }
        }
        ExprKind::Given { clause, condition } => {
            let clause = substitute_operand(clause, bindings)?;
            let condition = substitute_operand(condition, bindings)?;
            Ok(Operand::Node(Expr::given(clause, condition)))
        }
    })
}

/// Substitute into an operand slot. Literals are already concrete.
pub fn substitute_operand(operand: &Operand, bindings: &Bindings) -> EvalResult<Operand> {
    match operand {
        Operand::Literal(_) => Ok(operand.clone()),
        Operand::Node(expr) => substitute(expr, bindings),
    }
}

/// Require a fully resolved operand.
pub fn resolve(operand: Operand) -> EvalResult<Scalar> {
    match operand {
        Operand::Literal(scalar) => Ok(scalar),
        Operand::Node(residual) => Err(unresolved_expression(residual)),
    }
}
