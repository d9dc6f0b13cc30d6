//! Rendering second counts as clock strings.
//!
//! The sign is printed once in front; every field is derived from the
//! magnitude. The leading field (hours, or total minutes for the
//! minute-based formats) is never wrapped, the trailing fields are
//! zero-padded to two digits (three for milliseconds).

use crate::parse::ParseStrategy;
use crate::units::{TimeFormat, MILLISECONDS_PER_SECOND, SECONDS_PER_MINUTE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How many ULPs a scaled value may sit off a whole millisecond and still count as it.
const SNAP_ULPS: f64 = 4.0;

/// A non-negative magnitude split into clock fields.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fields {
    /// Whole hours; unbounded.
    pub hours: f64,
    /// Minutes within the current hour (0..=59).
    pub minutes: u32,
    /// Whole minutes without wrapping at the hour; used when hours are not shown.
    pub total_minutes: f64,
    /// Seconds within the current minute (0..=59).
    pub seconds: u32,
    /// Milliseconds within the current second (0..=999), truncated.
    pub milliseconds: u32,
}

impl Fields {
    /// Splits `magnitude` (seconds, expected `>= 0` and finite).
    #[must_use]
    pub fn from_seconds(magnitude: f64) -> Self {
        let scaled = magnitude * MILLISECONDS_PER_SECOND;
        let (total_secs, milliseconds) = if scaled.is_finite() {
            let total_ms = whole_milliseconds(scaled);
            (
                (total_ms / MILLISECONDS_PER_SECOND).floor(),
                total_ms % MILLISECONDS_PER_SECOND,
            )
        } else {
            // Past f64::MAX / 1000 every value is a whole number of seconds.
            (magnitude.floor(), 0.0)
        };
        let total_minutes = (total_secs / SECONDS_PER_MINUTE).floor();

        Fields {
            hours: (total_minutes / 60.0).floor(),
            minutes: (total_minutes % 60.0) as u32,
            total_minutes,
            seconds: (total_secs % SECONDS_PER_MINUTE) as u32,
            milliseconds: milliseconds as u32,
        }
    }
}

/// Truncates a millisecond count to a whole number.
///
/// `x * 1000.0` can land a hair below the integer it denotes (`268434.274`
/// scales to `268434273.99999997`), so products within a few ULPs of an
/// integer snap to it instead of flooring.
fn whole_milliseconds(scaled: f64) -> f64 {
    let nearest = scaled.round();
    if (scaled - nearest).abs() <= scaled * SNAP_ULPS * f64::EPSILON {
        nearest
    } else {
        scaled.floor()
    }
}

/// Lazily formatted clock string; see [`display`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Clock {
    secs: f64,
    time_format: TimeFormat,
}

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // inf, -inf and NaN pass through as Rust prints them.
        if !self.secs.is_finite() {
            return write!(f, "{}", self.secs);
        }

        let sign = if self.secs < 0.0 { "-" } else { "" };
        let Fields {
            hours,
            minutes,
            total_minutes,
            seconds,
            milliseconds,
        } = Fields::from_seconds(self.secs.abs());

        match self.time_format {
            TimeFormat::HourMinSec => write!(f, "{sign}{hours:.0}:{minutes:02}:{seconds:02}"),
            TimeFormat::MinSec => write!(f, "{sign}{total_minutes:02.0}:{seconds:02}"),
            TimeFormat::HourMinSecMs => write!(
                f,
                "{sign}{hours:.0}:{minutes:02}:{seconds:02}.{milliseconds:03}"
            ),
            TimeFormat::MinSecMs => {
                write!(f, "{sign}{total_minutes:02.0}:{seconds:02}.{milliseconds:03}")
            }
        }
    }
}

/// Returns a [`fmt::Display`] adapter that renders `secs` without allocating.
#[inline]
#[must_use]
pub fn display(secs: f64, time_format: TimeFormat) -> Clock {
    Clock { secs, time_format }
}

/// Formats `secs` as a clock string, e.g. `10:24:49.632` or `-01:05`.
///
/// Fields are truncated, not rounded, but a value within a few ULPs of a
/// whole millisecond counts as that millisecond for every selector, so
/// `59.99999999999999` renders as `0:01:00` even without milliseconds.
#[must_use]
pub fn format(secs: f64, time_format: TimeFormat) -> String {
    display(secs, time_format).to_string()
}

/// Like [`format`], but an absent value becomes the empty string.
#[must_use]
pub fn format_optional(secs: Option<f64>, time_format: TimeFormat) -> String {
    secs.map(|secs| format(secs, time_format)).unwrap_or_default()
}

/// A reusable formatter paired with the parser that reads its output back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormatStyle {
    pub time_format: TimeFormat,
}

impl FormatStyle {
    #[must_use]
    pub const fn time_interval(time_format: TimeFormat) -> Self {
        FormatStyle { time_format }
    }

    #[must_use]
    pub fn format(&self, secs: f64) -> String {
        format(secs, self.time_format)
    }

    #[must_use]
    pub fn format_optional(&self, secs: Option<f64>) -> String {
        format_optional(secs, self.time_format)
    }

    /// The parser for this style's output. Parsing is format-agnostic, so
    /// every style hands back the same permissive strategy.
    #[must_use]
    pub fn parse_strategy(&self) -> ParseStrategy {
        ParseStrategy::default()
    }
}

/// `secs.clock(fmt)` sugar for [`display`].
pub trait SecondsExt {
    fn clock(self, time_format: TimeFormat) -> Clock;
}

impl SecondsExt for f64 {
    #[inline]
    fn clock(self, time_format: TimeFormat) -> Clock {
        display(self, time_format)
    }
}
