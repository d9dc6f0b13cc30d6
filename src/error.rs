//! Errors produced while parsing clock strings.

use crate::units::Unit;
use thiserror::Error;

/// Result alias for the fallible parsing entry points.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Why a clock string could not be turned into seconds.
///
/// Formatting has no error path; only parsing reports these.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ParseError {
    /// More than four `:`/`.` separated fields.
    #[error("too many fields: found {found}, at most 4 are allowed (hours:minutes:seconds.milliseconds)")]
    TooManyFields { found: usize },

    /// A field is empty or contains something other than ASCII digits.
    #[error("{unit} field {text:?} is not a number")]
    UnparseableComponent { unit: Unit, text: String },

    /// Strict parsing only: a non-leading field exceeds its unit's maximum.
    #[error("{unit} value {value} is out of range (maximum {max})")]
    OutOfRange { unit: Unit, value: f64, max: u32 },

    /// A `.` appears anywhere other than directly before the final field.
    #[error("unexpected '.' at byte {position}: only the final field may follow a '.'")]
    MisplacedSeparator { position: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_field() {
        let err = ParseError::UnparseableComponent {
            unit: Unit::Minutes,
            text: "x1".into(),
        };
        assert_eq!(err.to_string(), "minutes field \"x1\" is not a number");

        let err = ParseError::OutOfRange {
            unit: Unit::Seconds,
            value: 75.0,
            max: 59,
        };
        assert_eq!(err.to_string(), "seconds value 75 is out of range (maximum 59)");
    }
}
