//! Common helper functions for tests and benchmarks.
use clock_interval::TimeFormat;

// --- Constants ---
/// Tolerance for comparing parsed seconds.
pub const EPS: f64 = 1e-9;
/// 100 hours; the upper bound of the round-trip property.
pub const ROUND_TRIP_LIMIT_SECS: f64 = 360_000.0;
/// Same bound as a whole number of milliseconds.
pub const ROUND_TRIP_LIMIT_MS: u64 = 360_000_000;

/// A known value with its rendering under one selector.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub seconds: f64,
    pub format: TimeFormat,
    pub text: &'static str,
}

/// Hand-checked renderings; every one parses back to `seconds`.
pub const SCENARIOS: &[Scenario] = &[
    Scenario { seconds: 37489.632, format: TimeFormat::HourMinSecMs, text: "10:24:49.632" },
    Scenario { seconds: 37489.0, format: TimeFormat::HourMinSec, text: "10:24:49" },
    Scenario { seconds: -65.0, format: TimeFormat::MinSec, text: "-01:05" },
    Scenario { seconds: 3723.0, format: TimeFormat::MinSec, text: "62:03" },
    Scenario { seconds: 3723.25, format: TimeFormat::MinSecMs, text: "62:03.250" },
    Scenario { seconds: 9209.632, format: TimeFormat::HourMinSecMs, text: "2:33:29.632" },
    Scenario { seconds: -64.0, format: TimeFormat::MinSec, text: "-01:04" },
    Scenario { seconds: 0.0, format: TimeFormat::HourMinSec, text: "0:00:00" },
    Scenario { seconds: 0.001, format: TimeFormat::MinSecMs, text: "00:00.001" },
];

// --- Assertions ---

/// Asserts two second counts agree within [`EPS`].
#[track_caller]
pub fn assert_secs_eq(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {expected} s, got {actual} s (diff {})",
        (actual - expected).abs()
    );
}

/// Seconds for a whole number of milliseconds, the way a caller would write it.
pub fn ms(count: u64) -> f64 {
    count as f64 / 1000.0
}
