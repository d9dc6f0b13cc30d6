use crate::cli::{Args, Command, LogFormat};
use crate::parse::{BoundsPolicy, ParseStrategy};
use crate::units::TimeFormat;

/// Default filter when neither `--log-filter` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "clock_interval=warn";

/// Which conversion a run performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Format { units: TimeFormat },
    Parse { strategy: ParseStrategy, humanize: bool },
}

/// Flattened runtime configuration, built once from the command line.
#[derive(Clone, Debug)]
pub struct Config {
    pub mode:       Mode,
    /// Inputs given on the command line; empty means "read stdin".
    pub values:     Vec<String>,
    pub json:       bool,
    pub verbose:    bool,
    pub log_filter: String,
    pub log_format: LogFormat,
}

impl Config {
    /// Resolves the log filter: explicit flag, then `RUST_LOG`, then a default
    /// that is one step louder under `--verbose`.
    fn resolve_log_filter(flag: Option<&str>, env: Option<String>, verbose: bool) -> String {
        flag.map(str::to_string)
            .or(env)
            .unwrap_or_else(|| {
                if verbose {
                    "clock_interval=debug".to_string()
                } else {
                    DEFAULT_LOG_FILTER.to_string()
                }
            })
    }

    pub fn reads_stdin(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<&Args> for Config {
    fn from(a: &Args) -> Self {
        let (mode, values) = match &a.command {
            Command::Format { units, values } => (Mode::Format { units: *units }, values.clone()),
            Command::Parse {
                strict,
                humanize,
                values,
            } => {
                let bounds = if *strict {
                    BoundsPolicy::Strict
                } else {
                    BoundsPolicy::Permissive
                };
                (
                    Mode::Parse {
                        strategy: ParseStrategy::new(bounds),
                        humanize: *humanize,
                    },
                    values.clone(),
                )
            }
        };

        Self {
            mode,
            values,
            json:       a.json,
            verbose:    a.verbose,
            log_filter: Self::resolve_log_filter(
                a.log_filter.as_deref(),
                std::env::var("RUST_LOG").ok(),
                a.verbose,
            ),
            log_format: a.log_format,
        }
    }
}
