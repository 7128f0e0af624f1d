//! Property-based tests for bus reconstruction and instruction boundaries.
//!
//! These tests generate random cycle sequences, synthesize a capture for
//! them and check that the decoder recovers exactly what was put on the bus.

use bus65c02::{
    decode_trace, lookup, BusCycle, BusEvent, CapturedTrace, DecoderOptions, PinMap,
    SampleSource, TraceBuilder,
};
use proptest::prelude::*;

fn quiet_options() -> DecoderOptions {
    DecoderOptions {
        annotate_cycle_kinds: false,
        ..DecoderOptions::default()
    }
}

/// A cycle whose buses may independently float.
fn arb_cycle() -> impl Strategy<Value = BusCycle> {
    (
        proptest::option::weighted(0.8, any::<u16>()),
        proptest::option::weighted(0.8, any::<u8>()),
        any::<bool>(),
        proptest::option::weighted(0.9, any::<bool>()),
    )
        .prop_map(|(address, data, sync, read)| BusCycle {
            address,
            data,
            sync,
            read,
        })
}

/// Number of not-asserted to asserted SYNC transitions that have a later
/// transition after them, where the earlier fetch had a known opcode.
fn expected_instructions(cycles: &[BusCycle]) -> Vec<(u8, u8)> {
    let mut expected = Vec::new();
    let mut previous_sync = false;
    let mut pending: Option<Option<u8>> = None;

    for cycle in cycles {
        if cycle.sync && !previous_sync {
            if let Some(Some(opcode)) = pending.take() {
                expected.push((opcode, lookup(opcode).length));
            }
            pending = Some(cycle.data);
        }
        previous_sync = cycle.sync;
    }

    expected
}

proptest! {
    /// Fully assigned buses reconstruct to exactly the driven values
    #[test]
    fn prop_reconstruction_is_exact(address in any::<u16>(), data in any::<u8>()) {
        let mut builder = TraceBuilder::new();
        builder.cycle(BusCycle::read(address, data)).close();
        let mut trace = builder.build();

        let events = decode_trace(&mut trace, quiet_options()).unwrap();

        prop_assert_eq!(
            events,
            vec![
                BusEvent::AddressCycle { start_sample: 1, end_sample: 5, value: address },
                BusEvent::DataCycle { start_sample: 1, end_sample: 5, value: data },
            ]
        );
    }

    /// `levels` reads bit i from line i
    #[test]
    fn prop_levels_little_endian(address in any::<u16>()) {
        let pins = PinMap::default();
        let mut builder = TraceBuilder::new();
        builder.cycle(BusCycle::read(address, 0));
        let mut trace: CapturedTrace = builder.build();

        trace.wait(pins.clock, bus65c02::Edge::Rising).unwrap();
        prop_assert_eq!(trace.levels(&pins.address), Some(u32::from(address)));
    }

    /// Any single unassigned line blanks its whole bus
    #[test]
    fn prop_single_unassigned_line_suppresses_group(
        address in any::<u16>(),
        data in any::<u8>(),
        line in 0usize..24,
    ) {
        let pins = PinMap::default();
        let missing = if line < 16 { pins.address[line] } else { pins.data[line - 16] };

        let mut trace = CapturedTrace::new(PinMap::DEFAULT_CHANNELS).unwrap();
        for (index, clock) in [true, false, true, false].into_iter().enumerate() {
            let mut levels = vec![Some(false); PinMap::DEFAULT_CHANNELS];
            for (bit, &channel) in pins.address.iter().enumerate() {
                levels[channel] = Some(address & (1 << bit) != 0);
            }
            for (bit, &channel) in pins.data.iter().enumerate() {
                levels[channel] = Some(data & (1 << bit) != 0);
            }
            levels[pins.clock] = Some(clock);
            if index == 2 {
                levels[missing] = None;
            }
            trace.push(&levels);
        }

        let events = decode_trace(&mut trace, quiet_options()).unwrap();

        let has_address = events.iter().any(|e| matches!(e, BusEvent::AddressCycle { .. }));
        let has_data = events.iter().any(|e| matches!(e, BusEvent::DataCycle { .. }));
        prop_assert_eq!(has_address, line >= 16);
        prop_assert_eq!(has_data, line < 16);
    }

    /// One instruction per resolved SYNC rise, with the table length
    #[test]
    fn prop_one_instruction_per_sync_rise(cycles in proptest::collection::vec(arb_cycle(), 0..60)) {
        let mut builder = TraceBuilder::new();
        builder.cycles(cycles.iter().copied()).close();
        let mut trace = builder.build();

        let events = decode_trace(&mut trace, quiet_options()).unwrap();
        let decoded: Vec<(u8, u8)> = events
            .iter()
            .filter_map(|event| match *event {
                BusEvent::InstructionDecoded { opcode, length, .. } => Some((opcode, length)),
                _ => None,
            })
            .collect();

        prop_assert_eq!(decoded, expected_instructions(&cycles));
    }

    /// Events come out in non-decreasing end order and never repeat a span
    #[test]
    fn prop_events_are_ordered(cycles in proptest::collection::vec(arb_cycle(), 0..60)) {
        let mut builder = TraceBuilder::new();
        builder.cycles(cycles.iter().copied()).close();
        let mut trace = builder.build();

        let events = decode_trace(&mut trace, DecoderOptions::default()).unwrap();

        let mut last_end = 0;
        let mut instruction_starts = Vec::new();
        for event in &events {
            prop_assert!(event.start_sample() < event.end_sample());
            prop_assert!(event.end_sample() >= last_end);
            last_end = event.end_sample();

            if let BusEvent::InstructionDecoded { start_sample, .. } = event {
                prop_assert!(!instruction_starts.contains(start_sample));
                instruction_starts.push(*start_sample);
            }
        }
    }
}
