//! Sampling driver.
//!
//! A sample of an expression binds every unique variable to exactly one fresh
//! draw and substitutes the bindings through the tree. Because bindings are
//! keyed by variable identity, repeated occurrences of a variable see the same
//! draw: `X - X` always samples to `0`.
//!
//! Conditional roots use rejection sampling: draw a binding for every
//! variable of the clause and the condition together, keep the clause value
//! if the condition holds, otherwise draw again.

use rand::rngs::StdRng;
use rand::{thread_rng, RngCore, SeedableRng};
use rv_ir::{Expr, Operand, Scalar, VarSet, Variable};
use tracing::{debug, trace, warn};

use crate::bindings::Bindings;
use crate::errors::{non_boolean_condition, not_implemented, sampling_exhausted, EvalResult};
use crate::substitute::{resolve, substitute, substitute_operand};

/// Sampler configuration.
///
/// The rejection bound defaults to unbounded, which keeps conditional
/// samples exact for any condition with non-zero probability.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SamplerConfig {
    max_trials: Option<u64>,
    seed: Option<u64>,
}

impl SamplerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Give up on a conditional sample after `trials` rejected draws.
    #[must_use]
    pub fn with_max_trials(mut self, trials: u64) -> Self {
        self.max_trials = Some(trials);
        self
    }

    /// Retry conditional samples forever.
    #[must_use]
    pub fn unbounded(mut self) -> Self {
        self.max_trials = None;
        self
    }

    /// Seed the generator for reproducible draws.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn max_trials(&self) -> Option<u64> {
        self.max_trials
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// One accepted sample together with what produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    pub value: Scalar,
    /// The draws the value was computed from.
    pub bindings: Bindings,
    /// Draws attempted, including the accepted one. Always 1 for
    /// unconditional expressions.
    pub trials: u64,
}

/// Draws samples from expressions using a random number generator `R`.
pub struct Sampler<R = StdRng> {
    rng: R,
    config: SamplerConfig,
}

impl Sampler<StdRng> {
    /// Build a sampler, seeding from `config` or from OS entropy.
    pub fn new(config: SamplerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        debug!(seed = ?config.seed, max_trials = ?config.max_trials, "sampler created");
        Self { rng, config }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(SamplerConfig::new().with_seed(seed))
    }
}

impl<R: RngCore> Sampler<R> {
    pub fn with_rng(rng: R, config: SamplerConfig) -> Self {
        Self { rng, config }
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Draw one value for `var`.
    pub fn draw(&mut self, var: &Variable) -> EvalResult {
        var.distribution()
            .draw(&mut self.rng)
            .map(Scalar::Float)
            .ok_or_else(|| not_implemented("sample", var))
    }

    /// Draw one fresh value for each variable.
    pub fn draw_bindings(&mut self, vars: &VarSet) -> EvalResult<Bindings> {
        let mut bindings = Bindings::with_capacity(vars.len());
        for var in vars {
            let value = self.draw(var)?;
            bindings.bind(var.clone(), value);
        }
        Ok(bindings)
    }

    /// Sample `expr` once.
    pub fn sample(&mut self, expr: &Expr) -> EvalResult {
        self.sample_traced(expr).map(|sample| sample.value)
    }

    /// Sample `expr` `n` times.
    pub fn sample_n(&mut self, expr: &Expr, n: usize) -> EvalResult<Vec<Scalar>> {
        (0..n).map(|_| self.sample(expr)).collect()
    }

    /// Sample `expr` once, keeping the accepted bindings.
    pub fn sample_traced(&mut self, expr: &Expr) -> EvalResult<Sample> {
        match expr.as_given() {
            Some((clause, condition)) => self.sample_given(expr.unique_vars(), clause, condition),
            None => {
                let bindings = self.draw_bindings(expr.unique_vars())?;
                let value = resolve(substitute(expr, &bindings)?)?;
                Ok(Sample {
                    value,
                    bindings,
                    trials: 1,
                })
            }
        }
    }

    /// Rejection loop for a conditional root.
    ///
    /// `vars` covers both the clause and the condition, so variables they
    /// share are bound to the same draw within a trial.
    fn sample_given(
        &mut self,
        vars: &VarSet,
        clause: &Operand,
        condition: &Operand,
    ) -> EvalResult<Sample> {
        let mut trials = 0u64;
        loop {
            if let Some(max) = self.config.max_trials {
                if trials >= max {
                    warn!(trials, "rejection bound reached");
                    return Err(sampling_exhausted(trials));
                }
            }
            trials += 1;

            let bindings = self.draw_bindings(vars)?;
            let holds = match resolve(substitute_operand(condition, &bindings)?)? {
                Scalar::Bool(holds) => holds,
                other @ Scalar::Float(_) => return Err(non_boolean_condition(other.type_name())),
            };
            if holds {
                let value = resolve(substitute_operand(clause, &bindings)?)?;
                return Ok(Sample {
                    value,
                    bindings,
                    trials,
                });
            }
            trace!(trials, "condition rejected draw");
        }
    }
}

/// Sample `expr` once with the thread-local generator and no rejection bound.
pub fn sample(expr: &Expr) -> EvalResult {
    Sampler::with_rng(thread_rng(), SamplerConfig::new()).sample(expr)
}
