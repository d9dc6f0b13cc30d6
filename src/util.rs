//! Utility functions shared across modules.

use std::time::Duration;

/// Converts signed seconds to a `Duration` of the same magnitude, rounded to
/// the nearest millisecond. `None` for NaN, infinities and values too large
/// for a `u64` millisecond count.
pub fn magnitude_to_duration(secs: f64) -> Option<Duration> {
    let millis = (secs.abs() * 1000.0).round();
    if !millis.is_finite() || millis >= u64::MAX as f64 {
        return None;
    }
    Some(Duration::from_millis(millis as u64))
}

/// Formats a `std::time::Duration` into a human-readable string using `humantime`.
#[inline]
pub fn format_duration(duration: Duration) -> String {
    humantime::format_duration(duration).to_string()
}

/// Human-readable rendering of signed seconds, e.g. `-1m 5s`.
pub fn humanize_seconds(secs: f64) -> Option<String> {
    let duration = magnitude_to_duration(secs)?;
    let sign = if secs < 0.0 && !duration.is_zero() { "-" } else { "" };
    Some(format!("{sign}{}", format_duration(duration)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humanizes_signed_values() {
        assert_eq!(humanize_seconds(3723.4).as_deref(), Some("1h 2m 3s 400ms"));
        assert_eq!(humanize_seconds(-65.0).as_deref(), Some("-1m 5s"));
        assert_eq!(humanize_seconds(0.0).as_deref(), Some("0s"));
        assert_eq!(humanize_seconds(-0.0).as_deref(), Some("0s"));
    }

    #[test]
    fn non_finite_values_have_no_duration() {
        assert_eq!(magnitude_to_duration(f64::NAN), None);
        assert_eq!(magnitude_to_duration(f64::INFINITY), None);
        assert_eq!(magnitude_to_duration(1e300), None);
    }
}
