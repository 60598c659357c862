//! Library side of the `rv` command-line tool.
//!
//! `main.rs` only collects arguments, installs logging and reports errors;
//! option parsing and the commands live here so they can be tested without a
//! process.

mod commands;
mod error;
pub mod options;

use std::io::Write;
use std::sync::Once;

pub use commands::run;
pub use error::CliError;
pub use options::{parse_args, Command, Options};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RV_LOG`.
///
/// Does nothing when `RV_LOG` is unset, and only runs once per process.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RV_LOG").is_ok() {
            let filter = EnvFilter::from_env("RV_LOG");
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}

/// Parse `args` (without the program name) and run the command.
pub fn run_args(args: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let options = parse_args(args)?;
    run(&options, out)?;
    out.flush()?;
    Ok(())
}

pub const USAGE: &str = "\
Usage: rv <command> <expr> [options]

Commands:
  show     Print the fully parenthesized expression
  vars     List the unique variables
  sample   Print samples (default 1)
  mean     Monte-Carlo mean (default 10000 draws)
  prob     Monte-Carlo probability of a boolean expression

Options:
  -n <N>              Number of samples or draws
  --seed <S>          Seed the generator
  --max-trials <T>    Give up on a conditional sample after T rejections
  --parallel          Spread estimates over all cores
  --uniform <NAME>    Declare NAME ~ Uniform(0, 1)
  --normal <NAME>     Declare NAME ~ Normal(0, 1)
  --symbol <NAME>     Declare NAME as a symbol with no distribution

Expressions use + - * / ** < > & | ( ) true false and `given`.
Undeclared names are symbols. Set RV_LOG=debug for logging.";
