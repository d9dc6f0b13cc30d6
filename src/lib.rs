// Module declarations for the library crate.
//
// The core is two pure functions over `f64` seconds: `format` and `parse`.
// `cli`, `config`, `output`, `telemetry` and `util` exist for the binary.

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod output;
pub mod parse;
pub mod telemetry;
pub mod units;
pub mod util;

pub use error::{ParseError, Result};
pub use format::{display, format, format_optional, Clock, FormatStyle, SecondsExt};
pub use parse::{parse, parse_optional, try_parse, BoundsPolicy, ParseStrategy};
pub use units::{TimeFormat, Unit};
