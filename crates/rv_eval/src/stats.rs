//! Monte-Carlo estimators.
//!
//! Each estimate is the average over `n` independent samples. Samples share
//! nothing but the immutable tree, so the `par_*` variants split the draws
//! into fixed-size chunks and give every chunk its own generator on a
//! `rayon` worker. With a seed in the config, chunk `i` is seeded from
//! `seed + i`, which makes parallel estimates reproducible regardless of
//! scheduling.

use rand::RngCore;
use rayon::prelude::*;
use rv_ir::{Expr, Scalar};
use tracing::debug;

use crate::errors::{empty_estimate, invalid_operand_kind, EvalResult};
use crate::sampler::{Sampler, SamplerConfig};

/// Draws per parallel work item.
const CHUNK_SIZE: usize = 4096;

/// Sample mean of `expr` over `n` draws.
///
/// Booleans count as indicators (`true` is 1), so the mean of an event is
/// its probability.
pub fn estimate_mean<R: RngCore>(sampler: &mut Sampler<R>, expr: &Expr, n: usize) -> EvalResult<f64> {
    if n == 0 {
        return Err(empty_estimate());
    }
    debug!(%expr, n, "estimating mean");
    let total = sum_draws(sampler, expr, n, indicator_value)?;
    Ok(total / n as f64)
}

/// Fraction of `n` draws in which the boolean `expr` is true.
pub fn estimate_probability<R: RngCore>(
    sampler: &mut Sampler<R>,
    expr: &Expr,
    n: usize,
) -> EvalResult<f64> {
    if n == 0 {
        return Err(empty_estimate());
    }
    debug!(%expr, n, "estimating probability");
    let hits = sum_draws(sampler, expr, n, event_value)?;
    Ok(hits / n as f64)
}

/// [`estimate_mean`] spread over the `rayon` pool.
pub fn par_estimate_mean(expr: &Expr, n: usize, config: SamplerConfig) -> EvalResult<f64> {
    if n == 0 {
        return Err(empty_estimate());
    }
    debug!(%expr, n, "estimating mean in parallel");
    let total = par_sum_draws(expr, n, config, indicator_value)?;
    Ok(total / n as f64)
}

/// [`estimate_probability`] spread over the `rayon` pool.
pub fn par_estimate_probability(expr: &Expr, n: usize, config: SamplerConfig) -> EvalResult<f64> {
    if n == 0 {
        return Err(empty_estimate());
    }
    debug!(%expr, n, "estimating probability in parallel");
    let hits = par_sum_draws(expr, n, config, event_value)?;
    Ok(hits / n as f64)
}

fn indicator_value(value: Scalar) -> EvalResult<f64> {
    Ok(match value {
        Scalar::Float(x) => x,
        Scalar::Bool(b) => f64::from(u8::from(b)),
    })
}

fn event_value(value: Scalar) -> EvalResult<f64> {
    match value {
        Scalar::Bool(b) => Ok(f64::from(u8::from(b))),
        Scalar::Float(_) => Err(invalid_operand_kind(
            "probability estimate",
            "bool",
            value.type_name(),
        )),
    }
}

fn sum_draws<R: RngCore>(
    sampler: &mut Sampler<R>,
    expr: &Expr,
    n: usize,
    value_of: fn(Scalar) -> EvalResult<f64>,
) -> EvalResult<f64> {
    let mut total = 0.0;
    for _ in 0..n {
        total += value_of(sampler.sample(expr)?)?;
    }
    Ok(total)
}

fn par_sum_draws(
    expr: &Expr,
    n: usize,
    config: SamplerConfig,
    value_of: fn(Scalar) -> EvalResult<f64>,
) -> EvalResult<f64> {
    let chunks = n.div_ceil(CHUNK_SIZE);
    let partials: Vec<f64> = (0..chunks)
        .into_par_iter()
        .map(|chunk| {
            let len = CHUNK_SIZE.min(n - chunk * CHUNK_SIZE);
            let chunk_config = match config.seed() {
                Some(seed) => config.with_seed(seed.wrapping_add(chunk as u64)),
                None => config,
            };
            let mut sampler = Sampler::new(chunk_config);
            sum_draws(&mut sampler, expr, len, value_of)
        })
        .collect::<EvalResult<_>>()?;
    // summed in chunk order so the result does not depend on scheduling
    Ok(partials.iter().sum())
}
