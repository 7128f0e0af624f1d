//! Fuzz target for the bus decoder.
//!
//! Feeds arbitrary raw frames to the decoder, clock line included, to find
//! sequences that break event ordering or instruction bookkeeping.

#![no_main]

use arbitrary::Arbitrary;
use bus65c02::{decode_trace, lookup, BusEvent, CapturedTrace, DecoderOptions, Frame, PinMap};
use libfuzzer_sys::fuzz_target;

/// One raw sample: level and assigned masks for the 27 default channels
#[derive(Debug, Arbitrary)]
struct FuzzFrame {
    levels: u32,
    assigned: u32,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    frames: Vec<FuzzFrame>,
    annotate_cycle_kinds: bool,
}

fuzz_target!(|input: FuzzInput| {
    // Limit input size to prevent OOM
    if input.frames.len() > 65536 {
        return;
    }

    let mut trace = CapturedTrace::new(PinMap::DEFAULT_CHANNELS).unwrap();
    for raw in &input.frames {
        let mut frame = Frame::unassigned();
        for channel in 0..PinMap::DEFAULT_CHANNELS {
            if raw.assigned & (1 << channel) != 0 {
                frame.set(channel, Some(raw.levels & (1 << channel) != 0));
            }
        }
        trace.push_frame(frame);
    }

    let options = DecoderOptions {
        annotate_cycle_kinds: input.annotate_cycle_kinds,
        ..DecoderOptions::default()
    };

    // The default layout always fits a 27-channel trace
    let events = decode_trace(&mut trace, options).unwrap();

    // Verify invariants
    let mut last_end = 0;
    for event in &events {
        assert!(event.start_sample() < event.end_sample());
        assert!(event.end_sample() >= last_end);
        assert!(event.end_sample() < input.frames.len() as u64);
        last_end = event.end_sample();

        if let BusEvent::InstructionDecoded {
            opcode,
            mnemonic,
            length,
            ..
        } = *event
        {
            assert_eq!(lookup(opcode).mnemonic, mnemonic);
            assert_eq!(lookup(opcode).length, length);
        }
    }
});
