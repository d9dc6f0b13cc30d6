// fuzz/fuzz_targets/fuzz_parse.rs
#![no_main]

use clock_interval::{parse, parse_optional, try_parse, ParseStrategy};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // The parser takes text; skip byte strings that are not UTF-8.
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // None of the entry points may panic, and they must agree with each other.
    let permissive = try_parse(text);
    let strict = ParseStrategy::strict().parse(text);
    if let Ok(secs) = strict {
        assert_eq!(permissive, Ok(secs));
    }
    assert_eq!(parse_optional(text), permissive.clone().ok());
    assert_eq!(parse(text), permissive.unwrap_or(0.0));
});
