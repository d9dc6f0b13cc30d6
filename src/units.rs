//! Field selection for clock strings.
//!
//! [`TimeFormat`] decides which fields a formatted string carries.
//! [`Unit`] names a single field and knows its weight in seconds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const SECONDS_PER_HOUR: f64 = 3600.0;
pub const MILLISECONDS_PER_SECOND: f64 = 1000.0;

/// Which fields appear in a formatted clock string.
///
/// Parsing never needs this: the parser infers the fields from the text.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum TimeFormat {
    /// `10:04:09`
    #[default]
    HourMinSec,
    /// `604:09` (minutes keep counting past the hour)
    MinSec,
    /// `10:04:09.689`
    HourMinSecMs,
    /// `604:09.689`
    MinSecMs,
}

impl TimeFormat {
    pub const ALL: [TimeFormat; 4] = [
        TimeFormat::HourMinSec,
        TimeFormat::MinSec,
        TimeFormat::HourMinSecMs,
        TimeFormat::MinSecMs,
    ];

    /// Builds a selector from the two independent field switches.
    #[must_use]
    pub const fn from_flags(show_hours: bool, show_milliseconds: bool) -> Self {
        match (show_hours, show_milliseconds) {
            (true, false) => TimeFormat::HourMinSec,
            (false, false) => TimeFormat::MinSec,
            (true, true) => TimeFormat::HourMinSecMs,
            (false, true) => TimeFormat::MinSecMs,
        }
    }

    #[inline]
    #[must_use]
    pub const fn shows_hours(self) -> bool {
        matches!(self, TimeFormat::HourMinSec | TimeFormat::HourMinSecMs)
    }

    #[inline]
    #[must_use]
    pub const fn shows_milliseconds(self) -> bool {
        matches!(self, TimeFormat::HourMinSecMs | TimeFormat::MinSecMs)
    }

    /// The serialized tag, e.g. `"hour_min_sec_ms"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TimeFormat::HourMinSec => "hour_min_sec",
            TimeFormat::MinSec => "min_sec",
            TimeFormat::HourMinSecMs => "hour_min_sec_ms",
            TimeFormat::MinSecMs => "min_sec_ms",
        }
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known [`TimeFormat`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown time format {0:?} (expected one of hour_min_sec, min_sec, hour_min_sec_ms, min_sec_ms)")]
pub struct UnknownTimeFormat(pub String);

impl FromStr for TimeFormat {
    type Err = UnknownTimeFormat;

    /// Accepts the serialized tag; `-` may stand in for `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        TimeFormat::ALL
            .into_iter()
            .find(|fmt| fmt.as_str() == normalized)
            .ok_or_else(|| UnknownTimeFormat(s.to_string()))
    }
}

/// One field of a clock string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Hours,
    Minutes,
    Seconds,
    Milliseconds,
}

impl Unit {
    /// Colon-separated units, smallest first, as the parser walks them.
    pub(crate) const WHOLE_FROM_RIGHT: [Unit; 3] = [Unit::Seconds, Unit::Minutes, Unit::Hours];

    /// Weight of one unit in seconds.
    #[must_use]
    pub const fn seconds(self) -> f64 {
        match self {
            Unit::Hours => SECONDS_PER_HOUR,
            Unit::Minutes => SECONDS_PER_MINUTE,
            Unit::Seconds => 1.0,
            Unit::Milliseconds => 1.0 / MILLISECONDS_PER_SECOND,
        }
    }

    /// Largest value the field may hold under strict parsing. Hours are unbounded.
    #[must_use]
    pub const fn max_value(self) -> Option<u32> {
        match self {
            Unit::Hours => None,
            Unit::Minutes | Unit::Seconds => Some(59),
            Unit::Milliseconds => Some(999),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Unit::Hours => "hours",
            Unit::Minutes => "minutes",
            Unit::Seconds => "seconds",
            Unit::Milliseconds => "milliseconds",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
