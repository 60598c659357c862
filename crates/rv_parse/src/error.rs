//! Parse errors.

use std::ops::Range;

/// Byte range into the source text.
pub type Span = Range<usize>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unrecognized input `{text}` at {}..{}", .span.start, .span.end)]
    InvalidToken { text: String, span: Span },

    #[error("unexpected `{found}` at {}..{}, expected {expected}", .span.start, .span.end)]
    UnexpectedToken {
        found: String,
        expected: &'static str,
        span: Span,
    },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    /// The whole input was a literal, which is a value, not an expression.
    #[error("`{text}` has no variable or operator")]
    BareLiteral { text: String },
}

impl ParseError {
    /// Location of the error in the source, if it has one.
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::InvalidToken { span, .. } | Self::UnexpectedToken { span, .. } => {
                Some(span.clone())
            }
            Self::UnexpectedEnd { .. } | Self::BareLiteral { .. } => None,
        }
    }
}
