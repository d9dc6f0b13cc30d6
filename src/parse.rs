//! Reading clock strings back into seconds.
//!
//! The parser needs no [`TimeFormat`](crate::TimeFormat): it reads up to four
//! fields separated by `:` and `.`, right to left. A final field after a `.`
//! (or the fourth field) is milliseconds and is normalized to exactly three
//! digits by padding or truncating. The remaining fields are seconds,
//! minutes and hours.

use crate::error::{ParseError, Result};
use crate::units::Unit;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::trace;

/// hours, minutes, seconds, milliseconds
const MAX_FIELDS: usize = 4;
const MILLISECOND_DIGITS: usize = 3;

/// What to do with sub-fields beyond their unit's range, e.g. `2:75:00`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundsPolicy {
    /// Out-of-range fields are folded in arithmetically: `0:75:00` == `1:15:00`.
    #[default]
    Permissive,
    /// Minutes and seconds above 59 are rejected, except in the leading field.
    Strict,
}

/// Parser for clock strings.
///
/// The leading field is the largest unit present and is never bounded, so
/// `62:03` (62 minutes) parses under either policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParseStrategy {
    pub bounds: BoundsPolicy,
}

impl ParseStrategy {
    #[must_use]
    pub const fn new(bounds: BoundsPolicy) -> Self {
        ParseStrategy { bounds }
    }

    #[must_use]
    pub const fn strict() -> Self {
        ParseStrategy::new(BoundsPolicy::Strict)
    }

    /// Parses `text` into signed seconds.
    ///
    /// # Errors
    /// [`ParseError::TooManyFields`] for more than four fields,
    /// [`ParseError::MisplacedSeparator`] for a `.` that does not introduce the
    /// final field, [`ParseError::UnparseableComponent`] for an empty or
    /// non-digit field or one whose value overflows `f64`, and
    /// [`ParseError::OutOfRange`] under [`BoundsPolicy::Strict`].
    pub fn parse(&self, text: &str) -> Result<f64> {
        let (sign, body) = match text.strip_prefix('-') {
            Some(rest) => (-1.0, rest),
            None => (1.0, text),
        };

        let fields: Vec<&str> = body.split([':', '.']).collect();
        if fields.len() > MAX_FIELDS {
            return Err(ParseError::TooManyFields {
                found: fields.len(),
            });
        }
        check_fraction_separator(body, text.len() - body.len())?;

        let has_millis = body.contains('.') || fields.len() == MAX_FIELDS;
        let (whole, millis) = match fields.split_last() {
            Some((last, rest)) if has_millis => (rest, Some(*last)),
            _ => (fields.as_slice(), None),
        };

        let mut total = 0.0;
        if let Some(raw) = millis {
            let unit = Unit::Milliseconds;
            let value = parse_digits(unit, &normalize_millis(ascii_digits(unit, raw)?))?;
            self.check_bounds(unit, value, false)?;
            total = accumulate(total, unit, value, raw)?;
        }

        // `whole` holds at most three fields once milliseconds are split off.
        let leading = whole.len().saturating_sub(1);
        for (idx, (raw, unit)) in whole
            .iter()
            .rev()
            .zip(Unit::WHOLE_FROM_RIGHT)
            .enumerate()
        {
            let value = parse_digits(unit, ascii_digits(unit, raw)?)?;
            self.check_bounds(unit, value, idx == leading)?;
            total = accumulate(total, unit, value, raw)?;
        }

        Ok(total * sign)
    }

    /// [`parse`](Self::parse), with every failure (and empty input) mapped to `None`.
    #[must_use]
    pub fn parse_optional(&self, text: &str) -> Option<f64> {
        if text.is_empty() {
            return None;
        }
        match self.parse(text) {
            Ok(secs) => Some(secs),
            Err(err) => {
                trace!(input = text, error = %err, "treating unparseable clock string as absent");
                None
            }
        }
    }

    fn check_bounds(&self, unit: Unit, value: f64, leading: bool) -> Result<()> {
        if self.bounds == BoundsPolicy::Permissive || leading {
            return Ok(());
        }
        match unit.max_value() {
            Some(max) if value > f64::from(max) => Err(ParseError::OutOfRange { unit, value, max }),
            _ => Ok(()),
        }
    }
}

/// At most one `.`, and nothing but the final field after it.
fn check_fraction_separator(body: &str, offset: usize) -> Result<()> {
    let mut dots = body.match_indices('.').map(|(idx, _)| idx);
    let Some(first) = dots.next() else {
        return Ok(());
    };
    if let Some(second) = dots.next() {
        return Err(ParseError::MisplacedSeparator {
            position: offset + second,
        });
    }
    if body[first..].contains(':') {
        return Err(ParseError::MisplacedSeparator {
            position: offset + first,
        });
    }
    Ok(())
}

fn ascii_digits(unit: Unit, raw: &str) -> Result<&str> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::UnparseableComponent {
            unit,
            text: raw.to_string(),
        });
    }
    Ok(raw)
}

/// Digit runs past ~309 places read as `inf`, which is rejected like any
/// other unreadable field.
fn parse_digits(unit: Unit, digits: &str) -> Result<f64> {
    match digits.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseError::UnparseableComponent {
            unit,
            text: digits.to_string(),
        }),
    }
}

/// Adds `value` of `unit` to `total`, failing on the field whose weight
/// pushes the sum past `f64::MAX`.
fn accumulate(total: f64, unit: Unit, value: f64, raw: &str) -> Result<f64> {
    let sum = total + value * unit.seconds();
    if sum.is_finite() {
        Ok(sum)
    } else {
        Err(ParseError::UnparseableComponent {
            unit,
            text: raw.to_string(),
        })
    }
}

/// Pads with trailing zeros or truncates (never rounds) to three digits.
/// Input is ASCII, so byte slicing is safe.
fn normalize_millis(digits: &str) -> Cow<'_, str> {
    if digits.len() >= MILLISECOND_DIGITS {
        Cow::Borrowed(&digits[..MILLISECOND_DIGITS])
    } else {
        Cow::Owned(format!("{digits:0<width$}", width = MILLISECOND_DIGITS))
    }
}

/// Parses permissively, surfacing the error.
///
/// # Errors
/// See [`ParseStrategy::parse`].
pub fn try_parse(text: &str) -> Result<f64> {
    ParseStrategy::default().parse(text)
}

/// Parses permissively, falling back to `0.0` on failure.
///
/// Use [`try_parse`] or [`parse_optional`] to tell "zero" from "unparseable".
#[must_use]
pub fn parse(text: &str) -> f64 {
    try_parse(text).unwrap_or_else(|err| {
        trace!(input = text, error = %err, "unparseable clock string, falling back to 0");
        0.0
    })
}

/// Parses permissively; empty or malformed input yields `None`.
#[must_use]
pub fn parse_optional(text: &str) -> Option<f64> {
    ParseStrategy::default().parse_optional(text)
}
