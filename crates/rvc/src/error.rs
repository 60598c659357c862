use std::io;

use rv_eval::EvalError;
use rv_parse::ParseError;

/// Anything that stops a command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl CliError {
    #[cold]
    pub(crate) fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    /// Usage errors print the usage text after the message.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}
