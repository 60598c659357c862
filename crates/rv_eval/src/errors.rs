//! Error types for substitution and sampling.
//!
//! # Structured Error Categories
//!
//! `EvalErrorKind` is the typed category callers match on. `EvalError` pairs
//! it with the rendered message. Errors are only built through the factory
//! functions below (`division_by_zero()`, `sampling_exhausted(n)`, ...), which
//! keeps every message in one place.

use rv_ir::{BinaryOp, Scalar};

/// Result of evaluation.
pub type EvalResult<T = Scalar> = Result<T, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    /// An operation was requested on a node that has no implementation for
    /// it, e.g. sampling a `Symbol` variable. Indicates a construction bug.
    #[error("`{operation}` is not implemented for `{node}`")]
    NotImplemented {
        operation: &'static str,
        node: String,
    },

    /// A conditional expression hit its rejection bound.
    #[error("condition not satisfied after {trials} trials")]
    SamplingExhausted { trials: u64 },

    /// An operand had the wrong kind for where it was used.
    #[error("{context} expects {expected}, got {got}")]
    InvalidOperandKind {
        context: String,
        expected: &'static str,
        got: &'static str,
    },

    #[error("division by zero")]
    DivisionByZero,

    /// Substitution left a symbolic residual where a scalar was required.
    #[error("expression did not resolve to a scalar: {residual}")]
    UnresolvedExpression { residual: String },

    #[error("cannot estimate from zero samples")]
    EmptyEstimate,
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable message, equal to `kind.to_string()`.
    pub message: String,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }
}

// Construction Errors

/// Operation without an implementation for the node it was invoked on.
#[cold]
pub fn not_implemented(operation: &'static str, node: impl ToString) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotImplemented {
        operation,
        node: node.to_string(),
    })
}

// Sampling Errors

/// Rejection sampling gave up after `trials` attempts.
#[cold]
pub fn sampling_exhausted(trials: u64) -> EvalError {
    EvalError::from_kind(EvalErrorKind::SamplingExhausted { trials })
}

/// A residual expression where a scalar was required.
#[cold]
pub fn unresolved_expression(residual: impl ToString) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnresolvedExpression {
        residual: residual.to_string(),
    })
}

/// An estimator was asked for zero samples.
#[cold]
pub fn empty_estimate() -> EvalError {
    EvalError::from_kind(EvalErrorKind::EmptyEstimate)
}

// Operand Kind Errors

/// Operator applied to an operand of the wrong kind.
#[cold]
pub fn invalid_operand_for(op: BinaryOp, expected: &'static str, got: &'static str) -> EvalError {
    invalid_operand_kind(format!("operator `{}`", op.as_symbol()), expected, got)
}

/// A conditional whose condition is not a boolean.
#[cold]
pub fn non_boolean_condition(got: &'static str) -> EvalError {
    invalid_operand_kind("condition", "bool", got)
}

/// Operand kind mismatch in a named context.
#[cold]
pub fn invalid_operand_kind(
    context: impl Into<String>,
    expected: &'static str,
    got: &'static str,
) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidOperandKind {
        context: context.into(),
        expected,
        got,
    })
}

// Arithmetic Errors

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}
