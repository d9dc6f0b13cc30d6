// fuzz/fuzz_targets/fuzz_format.rs
#![no_main]

use arbitrary::Arbitrary;
use clock_interval::{format, try_parse, TimeFormat};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    secs: f64,
    format_idx: u8,
}

fuzz_target!(|input: Input| {
    let fmt = TimeFormat::ALL[usize::from(input.format_idx) % TimeFormat::ALL.len()];
    let text = format(input.secs, fmt);

    // Every finite value with headroom below f64::MAX must render as
    // something the parser accepts; near the top the hours term overflows.
    if input.secs.is_finite() && input.secs.abs() <= 1e300 {
        assert!(
            try_parse(&text).is_ok(),
            "{} formatted as {text:?} did not parse",
            input.secs
        );
    } else if !input.secs.is_finite() {
        assert!(try_parse(&text).is_err());
    }
});
