//! Command-line option parsing.
//!
//! Options are parsed by hand: `--flag value` and `--flag=value` are both
//! accepted, and flags may appear before or after the expression.

use std::str::FromStr;

use rv_eval::SamplerConfig;
use rv_ir::Distribution;
use rv_parse::Declarations;

use crate::error::CliError;

/// Samples printed by `rv sample` when `-n` is absent.
pub const DEFAULT_SAMPLES: usize = 1;
/// Draws behind `rv mean` and `rv prob` when `-n` is absent.
pub const DEFAULT_ESTIMATE_DRAWS: usize = 10_000;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Show,
    Vars,
    Sample,
    Mean,
    Prob,
}

impl Command {
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "show" => Self::Show,
            "vars" => Self::Vars,
            "sample" => Self::Sample,
            "mean" => Self::Mean,
            "prob" => Self::Prob,
            _ => return None,
        })
    }

    fn default_draws(self) -> usize {
        match self {
            Self::Sample => DEFAULT_SAMPLES,
            Self::Show | Self::Vars | Self::Mean | Self::Prob => DEFAULT_ESTIMATE_DRAWS,
        }
    }
}

/// A fully parsed invocation.
#[derive(Clone, Debug)]
pub struct Options {
    pub command: Command,
    pub source: String,
    pub draws: usize,
    pub parallel: bool,
    pub config: SamplerConfig,
    pub declarations: Declarations,
}

/// Parse the arguments after the program name.
pub fn parse_args(args: &[String]) -> Result<Options, CliError> {
    let Some((name, rest)) = args.split_first() else {
        return Err(CliError::usage("missing command"));
    };
    let command =
        Command::from_name(name).ok_or_else(|| CliError::usage(format!("unknown command `{name}`")))?;

    let mut source: Option<String> = None;
    let mut draws = None;
    let mut parallel = false;
    let mut config = SamplerConfig::new();
    let mut declarations = Declarations::new();

    let mut i = 0;
    while i < rest.len() {
        let arg = rest[i].as_str();
        i += 1;

        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with('-') => (flag, Some(value)),
            _ => (arg, None),
        };
        // value for flags that take one, either inline or the next argument
        let mut value = |flag: &str| -> Result<String, CliError> {
            if let Some(value) = inline {
                return Ok(value.to_string());
            }
            let value = rest
                .get(i)
                .ok_or_else(|| CliError::usage(format!("`{flag}` needs a value")))?;
            i += 1;
            Ok(value.clone())
        };

        match flag {
            "-n" | "--samples" => draws = Some(parse_number::<usize>(flag, &value(flag)?)?),
            "--seed" => config = config.with_seed(parse_number(flag, &value(flag)?)?),
            "--max-trials" => config = config.with_max_trials(parse_number(flag, &value(flag)?)?),
            "--parallel" => parallel = true,
            "--uniform" => {
                declarations.declare(value(flag)?, Distribution::Uniform);
            }
            "--normal" => {
                declarations.declare(value(flag)?, Distribution::Normal);
            }
            "--symbol" => {
                declarations.declare(value(flag)?, Distribution::Symbol);
            }
            _ if flag.starts_with("--") => {
                return Err(CliError::usage(format!("unknown option `{flag}`")));
            }
            _ if source.is_none() => source = Some(arg.to_string()),
            _ => return Err(CliError::usage(format!("unexpected argument `{arg}`"))),
        }
    }

    let source = source.ok_or_else(|| CliError::usage("missing expression"))?;
    Ok(Options {
        command,
        source,
        draws: draws.unwrap_or_else(|| command.default_draws()),
        parallel,
        config,
        declarations,
    })
}

fn parse_number<T: FromStr>(flag: &str, text: &str) -> Result<T, CliError> {
    text.parse()
        .map_err(|_| CliError::usage(format!("`{flag}` expects a non-negative integer, got `{text}`")))
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests {
    use super::{parse_args, Command, DEFAULT_ESTIMATE_DRAWS};
    use rv_ir::Distribution;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn flags_in_any_position() {
        let opts = parse_args(&args(&[
            "mean", "--normal", "X", "X ** 2", "-n", "500", "--seed=7", "--parallel",
        ]))
        .unwrap();
        assert_eq!(opts.command, Command::Mean);
        assert_eq!(opts.source, "X ** 2");
        assert_eq!(opts.draws, 500);
        assert_eq!(opts.config.seed(), Some(7));
        assert!(opts.parallel);
        assert_eq!(opts.declarations.get("X"), Some(&Distribution::Normal));
    }

    #[test]
    fn defaults() {
        let opts = parse_args(&args(&["prob", "X > 0"])).unwrap();
        assert_eq!(opts.draws, DEFAULT_ESTIMATE_DRAWS);
        assert_eq!(opts.config.max_trials(), None);
        assert!(!opts.parallel);
        assert!(opts.declarations.is_empty());
    }

    #[test]
    fn rejection_bound() {
        let opts = parse_args(&args(&["sample", "X", "--max-trials", "20"])).unwrap();
        assert_eq!(opts.config.max_trials(), Some(20));
        assert_eq!(opts.draws, 1);
    }

    #[test]
    fn usage_errors() {
        for bad in [
            &["frobnicate", "X"][..],
            &["show"],
            &["show", "X", "Y"],
            &["mean", "X", "-n"],
            &["mean", "X", "-n", "many"],
            &["show", "X", "--verbose"],
        ] {
            let err = parse_args(&args(bad)).unwrap_err();
            assert!(err.is_usage(), "{bad:?} gave {err}");
        }
    }
}
