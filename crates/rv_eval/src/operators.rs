//! Binary operator implementations for the evaluator.
//!
//! Provides direct enum-based dispatch over the two scalar kinds. The operator
//! set is fixed, so pattern matching is preferred over trait objects for
//! exhaustiveness checking.

use std::cmp::Ordering;

use rv_ir::{BinaryOp, Scalar};

use crate::errors::{division_by_zero, invalid_operand_for, EvalResult};

/// Evaluate a binary operation on two concrete scalars.
///
/// Kind errors are reported at evaluation time: arithmetic and comparisons
/// need floats, `&` and `|` need booleans, and mixed operands are rejected.
pub fn evaluate_binary(left: Scalar, right: Scalar, op: BinaryOp) -> EvalResult {
    match (left, right) {
        (Scalar::Float(a), Scalar::Float(b)) => eval_float_binary(a, b, op),
        (Scalar::Bool(a), Scalar::Bool(b)) => eval_bool_binary(a, b, op),
        (Scalar::Float(_), Scalar::Bool(_)) | (Scalar::Bool(_), Scalar::Float(_)) => {
            let expected = if op.is_logical() { "bool" } else { "float" };
            let got = if left.type_name() == expected {
                right.type_name()
            } else {
                left.type_name()
            };
            Err(invalid_operand_for(op, expected, got))
        }
    }
}

/// Binary operations on floats.
///
/// IEEE 754 throughout, except that dividing by an exact zero is an error.
fn eval_float_binary(a: f64, b: f64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(Scalar::Float(a + b)),
        BinaryOp::Sub => Ok(Scalar::Float(a - b)),
        BinaryOp::Mul => Ok(Scalar::Float(a * b)),
        BinaryOp::Div if b == 0.0 => Err(division_by_zero()),
        BinaryOp::Div => Ok(Scalar::Float(a / b)),
        BinaryOp::Pow => Ok(Scalar::Float(a.powf(b))),
        // NaN compares as neither less nor greater
        BinaryOp::Lt => Ok(Scalar::Bool(a.partial_cmp(&b) == Some(Ordering::Less))),
        BinaryOp::Gt => Ok(Scalar::Bool(a.partial_cmp(&b) == Some(Ordering::Greater))),
        BinaryOp::Or | BinaryOp::And => Err(invalid_operand_for(op, "bool", "float")),
    }
}

/// Binary operations on booleans.
fn eval_bool_binary(a: bool, b: bool, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Or => Ok(Scalar::Bool(a | b)),
        BinaryOp::And => Ok(Scalar::Bool(a & b)),
        _ => Err(invalid_operand_for(op, "float", "bool")),
    }
}
