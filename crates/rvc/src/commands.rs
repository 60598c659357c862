//! Command implementations.
//!
//! Every command writes its result to the given writer, so the binary passes
//! stdout and tests pass a buffer.

use std::io::Write;

use rv_eval::{
    estimate_mean, estimate_probability, par_estimate_mean, par_estimate_probability, Sampler,
};
use rv_ir::Expr;
use tracing::debug;

use crate::error::CliError;
use crate::options::{Command, Options};

/// Parse the expression in `options` and run its command.
pub fn run(options: &Options, out: &mut dyn Write) -> Result<(), CliError> {
    let expr = rv_parse::parse(&options.source, &options.declarations)?;
    debug!(command = ?options.command, %expr, "running command");
    match options.command {
        Command::Show => writeln!(out, "{expr}")?,
        Command::Vars => list_vars(&expr, out)?,
        Command::Sample => print_samples(&expr, options, out)?,
        Command::Mean => {
            let mean = if options.parallel {
                par_estimate_mean(&expr, options.draws, options.config)?
            } else {
                estimate_mean(&mut Sampler::new(options.config), &expr, options.draws)?
            };
            writeln!(out, "{mean}")?;
        }
        Command::Prob => {
            let probability = if options.parallel {
                par_estimate_probability(&expr, options.draws, options.config)?
            } else {
                estimate_probability(&mut Sampler::new(options.config), &expr, options.draws)?
            };
            writeln!(out, "{probability}")?;
        }
    }
    Ok(())
}

/// One `name: kind` line per variable, in identity order.
fn list_vars(expr: &Expr, out: &mut dyn Write) -> Result<(), CliError> {
    for var in expr.unique_vars() {
        writeln!(out, "{var}: {}", var.distribution().kind_name())?;
    }
    Ok(())
}

fn print_samples(expr: &Expr, options: &Options, out: &mut dyn Write) -> Result<(), CliError> {
    let mut sampler = Sampler::new(options.config);
    for _ in 0..options.draws {
        let value = sampler.sample(expr)?;
        writeln!(out, "{value}")?;
    }
    Ok(())
}
