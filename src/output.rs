//! Per-input conversion results for the command-line tool, and how they are
//! written to stdout (plain text or one JSON object per line).

use crate::config::Mode;
use crate::format::format;
use crate::parse::ParseStrategy;
use crate::units::TimeFormat;
use crate::util;
use serde::Serialize;
use std::io::{self, Write};

/// Outcome of converting one input value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Record {
    /// Seconds rendered as a clock string.
    Formatted {
        input: String,
        seconds: f64,
        text: String,
    },
    /// Clock string read back into seconds.
    Parsed {
        input: String,
        seconds: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        human: Option<String>,
    },
    /// Blank input; reported as an absent value, not as a failure.
    Absent { input: String },
    Error { input: String, error: String },
}

impl Record {
    pub fn input(&self) -> &str {
        match self {
            Record::Formatted { input, .. }
            | Record::Parsed { input, .. }
            | Record::Absent { input }
            | Record::Error { input, .. } => input,
        }
    }

    /// Writes the record as a single line. In text mode errors write nothing
    /// (they are reported on stderr by the caller) and absent values write an
    /// empty line.
    pub fn write_to(&self, mut w: impl Write, json: bool) -> io::Result<()> {
        if json {
            serde_json::to_writer(&mut w, self)?;
            return writeln!(w);
        }
        match self {
            Record::Formatted { text, .. } => writeln!(w, "{text}"),
            Record::Parsed {
                seconds,
                human: Some(human),
                ..
            } => writeln!(w, "{seconds}\t{human}"),
            Record::Parsed { seconds, .. } => writeln!(w, "{seconds}"),
            Record::Absent { .. } => writeln!(w),
            Record::Error { .. } => Ok(()),
        }
    }
}

/// Converts one raw input according to `mode`. Surrounding whitespace is
/// ignored; a blank input is [`Record::Absent`].
pub fn convert(mode: Mode, raw: &str) -> Record {
    let input = raw.trim();
    if input.is_empty() {
        return Record::Absent {
            input: input.to_string(),
        };
    }
    match mode {
        Mode::Format { units } => format_input(input, units),
        Mode::Parse { strategy, humanize } => parse_input(input, strategy, humanize),
    }
}

fn format_input(input: &str, units: TimeFormat) -> Record {
    match input.parse::<f64>() {
        Ok(seconds) => Record::Formatted {
            input: input.to_string(),
            seconds,
            text: format(seconds, units),
        },
        Err(e) => Record::Error {
            input: input.to_string(),
            error: format!("not a number of seconds: {e}"),
        },
    }
}

fn parse_input(input: &str, strategy: ParseStrategy, humanize: bool) -> Record {
    match strategy.parse(input) {
        Ok(seconds) => Record::Parsed {
            input: input.to_string(),
            seconds,
            human: if humanize {
                util::humanize_seconds(seconds)
            } else {
                None
            },
        },
        Err(e) => Record::Error {
            input: input.to_string(),
            error: e.to_string(),
        },
    }
}
