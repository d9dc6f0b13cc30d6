use crate::units::TimeFormat;
use clap::{Parser, Subcommand, ValueEnum};

/// Convert between second counts and clock-style strings such as 2:33:29.632 or -01:04.
/// Values come from the command line, or one per line from stdin when none are given.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Emit one JSON object per input on stdout instead of plain text.
    #[arg(long, global = true, action = clap::ArgAction::SetTrue)]
    pub json: bool,

    /// Enable verbose logging (debug level, with targets).
    #[arg(short, long, global = true, action = clap::ArgAction::SetTrue)]
    pub verbose: bool,

    /// Log filter directive, e.g. "clock_interval=debug". Overrides RUST_LOG.
    #[arg(long, global = true, value_name = "DIRECTIVE")]
    pub log_filter: Option<String>,

    /// Format of log lines written to stderr.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Render second counts (e.g. 37489.632) as clock strings.
    Format {
        /// Fields to include in the output.
        #[arg(short, long, value_enum, default_value_t = TimeFormat::HourMinSec)]
        units: TimeFormat,

        /// Seconds to format, e.g. 37489.632 or -65.
        #[arg(value_name = "SECONDS", allow_negative_numbers = true)]
        values: Vec<String>,
    },
    /// Read clock strings (e.g. 10:24:49.632) back into seconds.
    Parse {
        /// Reject minutes/seconds above 59 outside the leading field.
        #[arg(long, action = clap::ArgAction::SetTrue)]
        strict: bool,

        /// Also print the value as a human-readable duration (e.g. "1h 2m 3s").
        #[arg(long, action = clap::ArgAction::SetTrue)]
        humanize: bool,

        /// Clock strings to parse. Negative ones go after `--`, e.g. `parse -- -01:05`.
        #[arg(value_name = "TEXT")]
        values: Vec<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Parses command line arguments using clap.
pub fn parse_args() -> Args {
    Args::parse()
}
