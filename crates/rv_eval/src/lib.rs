//! RV Eval - substitution and sampling for random-variable expressions.
//!
//! # Architecture
//!
//! - `evaluate_binary`: direct enum-based operator dispatch on scalars
//! - `Bindings`: variable-to-operand map keyed by variable identity
//! - `substitute`: resolves bindings through a tree, leaving a symbolic
//!   residual where variables stay unbound
//! - `Sampler`: draws one value per unique variable and substitutes;
//!   rejection-samples conditional roots under an optional trial bound
//! - `estimate_*`: Monte-Carlo mean and probability, sequential or on `rayon`
//!
//! # Re-exports
//!
//! Error constructors live in [`errors`]; the types callers need most are
//! re-exported here.

mod bindings;
pub mod errors;
mod operators;
mod sampler;
mod stats;
mod substitute;

pub use bindings::Bindings;
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use operators::evaluate_binary;
pub use sampler::{sample, Sample, Sampler, SamplerConfig};
pub use stats::{estimate_mean, estimate_probability, par_estimate_mean, par_estimate_probability};
pub use substitute::{resolve, substitute, substitute_operand};

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
