//! Fuzz target for textual capture import.
//!
//! Arbitrary text must either parse or produce an error, never panic.

#![no_main]

use bus65c02::CapturedTrace;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (String, u8)| {
    let (text, channels) = data;
    if text.len() > 1 << 20 {
        return;
    }

    if let Ok(trace) = CapturedTrace::parse(&text, channels as usize) {
        assert!(trace.len() <= text.lines().count());
    }
});
