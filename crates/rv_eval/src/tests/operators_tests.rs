//! Tests for scalar operator evaluation.

use crate::errors::EvalErrorKind;
use crate::operators::evaluate_binary;
use rv_ir::{BinaryOp, Scalar};

fn float(x: f64) -> Scalar {
    Scalar::Float(x)
}

fn kind_of(result: crate::EvalResult) -> EvalErrorKind {
    match result {
        Ok(value) => panic!("expected an error, got {value}"),
        Err(err) => err.kind,
    }
}

#[test]
fn test_float_arithmetic() {
    assert_eq!(
        evaluate_binary(float(2.0), float(3.0), BinaryOp::Add).unwrap(),
        float(5.0)
    );
    assert_eq!(
        evaluate_binary(float(5.0), float(3.0), BinaryOp::Sub).unwrap(),
        float(2.0)
    );
    assert_eq!(
        evaluate_binary(float(2.0), float(3.0), BinaryOp::Mul).unwrap(),
        float(6.0)
    );
    assert_eq!(
        evaluate_binary(float(7.0), float(2.0), BinaryOp::Div).unwrap(),
        float(3.5)
    );
    assert_eq!(
        evaluate_binary(float(2.0), float(10.0), BinaryOp::Pow).unwrap(),
        float(1024.0)
    );
}

#[test]
fn test_division_by_zero() {
    assert_eq!(
        kind_of(evaluate_binary(float(1.0), float(0.0), BinaryOp::Div)),
        EvalErrorKind::DivisionByZero
    );
    assert_eq!(
        kind_of(evaluate_binary(float(1.0), float(-0.0), BinaryOp::Div)),
        EvalErrorKind::DivisionByZero
    );
}

#[test]
fn test_comparisons() {
    assert_eq!(
        evaluate_binary(float(2.0), float(3.0), BinaryOp::Lt).unwrap(),
        Scalar::Bool(true)
    );
    assert_eq!(
        evaluate_binary(float(2.0), float(3.0), BinaryOp::Gt).unwrap(),
        Scalar::Bool(false)
    );
    assert_eq!(
        evaluate_binary(float(f64::NAN), float(0.0), BinaryOp::Lt).unwrap(),
        Scalar::Bool(false)
    );
}

#[test]
fn test_logical_operations() {
    let t = Scalar::Bool(true);
    let f = Scalar::Bool(false);
    assert_eq!(evaluate_binary(t, f, BinaryOp::Or).unwrap(), t);
    assert_eq!(evaluate_binary(t, f, BinaryOp::And).unwrap(), f);
    assert_eq!(evaluate_binary(t, t, BinaryOp::And).unwrap(), t);
}

#[test]
fn test_logical_on_floats_is_kind_error() {
    assert_eq!(
        kind_of(evaluate_binary(float(1.0), float(0.0), BinaryOp::And)),
        EvalErrorKind::InvalidOperandKind {
            context: "operator `&`".to_string(),
            expected: "bool",
            got: "float",
        }
    );
}

#[test]
fn test_arithmetic_on_bools_is_kind_error() {
    assert_eq!(
        kind_of(evaluate_binary(
            Scalar::Bool(true),
            Scalar::Bool(true),
            BinaryOp::Add
        )),
        EvalErrorKind::InvalidOperandKind {
            context: "operator `+`".to_string(),
            expected: "float",
            got: "bool",
        }
    );
}

#[test]
fn test_mixed_operands() {
    let err = evaluate_binary(float(1.0), Scalar::Bool(true), BinaryOp::Mul).unwrap_err();
    assert_eq!(err.to_string(), "operator `*` expects float, got bool");
    let err = evaluate_binary(float(1.0), Scalar::Bool(true), BinaryOp::Or).unwrap_err();
    assert_eq!(err.to_string(), "operator `|` expects bool, got float");
}
