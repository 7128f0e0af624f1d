//! # Bus Cycle Decoder
//!
//! Walks a 65C02 logic capture clock edge by clock edge and reconstructs the
//! bus cycles it contains.
//!
//! ## Timing
//!
//! A cycle begins at a falling PHI2 edge. The address and data buses are
//! sampled at the following rising edge, where the CPU guarantees they are
//! stable. The cycle is only retired (emitted) at the *next* falling edge,
//! because that is the first point where both its span and its values are
//! known.
//!
//! ## Instruction boundaries
//!
//! SYNC rising from low to high at a sampling edge marks an opcode fetch.
//! The fetched byte is held as a pending instruction and resolved against
//! the opcode table when the next fetch begins, so that the emitted
//! instruction spans every cycle it used.
//!
//! ```
//! use bus65c02::{BusCycle, BusDecoder, BusEvent, DecoderOptions, TraceBuilder};
//!
//! let mut builder = TraceBuilder::new();
//! builder
//!     .cycle(BusCycle::fetch(0x8000, 0xEA)) // NOP
//!     .cycle(BusCycle::read(0x8001, 0x4C))
//!     .cycle(BusCycle::fetch(0x8001, 0x4C)) // JMP
//!     .close();
//! let mut trace = builder.build();
//!
//! let decoder = BusDecoder::new(DecoderOptions::default());
//! let events = decoder.decode_all(&mut trace).unwrap();
//!
//! let decoded: Vec<&str> = events
//!     .iter()
//!     .filter_map(|event| match event {
//!         BusEvent::InstructionDecoded { mnemonic, .. } => Some(*mnemonic),
//!         _ => None,
//!     })
//!     .collect();
//! assert_eq!(decoded, vec!["NOP"]);
//! ```

pub mod event;
pub mod formatter;
pub mod options;

pub use event::{Annotation, BusEvent, Category, CycleKind, EventSink, Payload};
pub use options::{BusLine, DecoderOptions, PinMap};

use crate::error::DecodeError;
use crate::opcodes::lookup;
use crate::signal::{Edge, SampleIndex, SampleSource};

/// The cycle currently being assembled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BusSnapshot {
    /// Address bus value, `None` if any address line was unassigned.
    pub address: Option<u16>,

    /// Data bus value, `None` if any data line was unassigned.
    pub data: Option<u8>,

    /// Fetch/read/write classification, `None` if R/W was unassigned.
    pub access: Option<CycleKind>,

    /// Falling clock edge that began the cycle.
    pub cycle_start_sample: Option<SampleIndex>,
}

impl BusSnapshot {
    fn begin(start: SampleIndex) -> Self {
        Self {
            cycle_start_sample: Some(start),
            ..Self::default()
        }
    }

    /// Emits the known parts of this cycle, spanning up to `end_sample`.
    fn retire<K: EventSink>(&self, end_sample: SampleIndex, with_kind: bool, sink: &mut K) {
        let Some(start_sample) = self.cycle_start_sample else {
            return;
        };

        log::trace!(
            "cycle {}..{} addr={:04X?} data={:02X?} {:?}",
            start_sample,
            end_sample,
            self.address,
            self.data,
            self.access
        );

        if let Some(value) = self.address {
            sink.put(BusEvent::AddressCycle {
                start_sample,
                end_sample,
                value,
            });
        }
        if let Some(value) = self.data {
            sink.put(BusEvent::DataCycle {
                start_sample,
                end_sample,
                value,
            });
        }
        if let (true, Some(kind)) = (with_kind, self.access) {
            sink.put(BusEvent::CycleKind {
                start_sample,
                end_sample,
                kind,
            });
        }
    }
}

/// Tracks the opcode fetch that has been seen but not yet resolved.
///
/// At most one fetch is pending. Resolving it clears the state before the
/// next fetch is recorded, so no fetch is ever reported twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstructionFetchState {
    pending_instruction_start_sample: Option<SampleIndex>,
    opcode: Option<u8>,
}

impl InstructionFetchState {
    /// Whether a fetch is waiting to be resolved.
    pub fn awaiting_resolution(&self) -> bool {
        self.pending_instruction_start_sample.is_some()
    }

    fn begin(&mut self, start_sample: SampleIndex, opcode: Option<u8>) {
        self.pending_instruction_start_sample = Some(start_sample);
        self.opcode = opcode;
    }

    /// Resolves the pending fetch, if any, ending it at `end_sample`.
    ///
    /// The state is cleared either way. A fetch whose opcode byte was never
    /// known yields no event.
    fn resolve(&mut self, end_sample: SampleIndex) -> Option<BusEvent> {
        let start_sample = self.pending_instruction_start_sample.take()?;
        let Some(opcode) = self.opcode.take() else {
            log::warn!(
                "opcode fetch at sample {} had an unassigned data bus, dropping it",
                start_sample
            );
            return None;
        };

        let entry = lookup(opcode);
        log::debug!(
            "instruction {}..{}: {:02X} {} ({} bytes)",
            start_sample,
            end_sample,
            opcode,
            entry.mnemonic,
            entry.length
        );

        Some(BusEvent::InstructionDecoded {
            start_sample,
            end_sample,
            opcode,
            mnemonic: entry.mnemonic,
            length: entry.length,
        })
    }
}

/// Everything a single decode run owns.
#[derive(Debug, Default)]
struct DecodeState {
    snapshot: BusSnapshot,
    fetch: InstructionFetchState,
    sync_prev: Option<bool>,
    cycles: u64,
    instructions: u64,
}

/// 65C02 bus-cycle decoder.
///
/// Holds only configuration. Every call to [`decode`](Self::decode) starts
/// from fresh state, so one decoder can be reused across captures.
#[derive(Debug, Clone, Default)]
pub struct BusDecoder {
    options: DecoderOptions,
}

impl BusDecoder {
    pub fn new(options: DecoderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DecoderOptions {
        &self.options
    }

    /// Decodes `source` from its current position to the end, handing each
    /// event to `sink` as soon as it is known.
    ///
    /// Events come out in non-decreasing order of `end_sample`. A cycle that
    /// is still open when the capture ends, and a fetch that is still
    /// pending, are dropped.
    ///
    /// # Errors
    ///
    /// Fails before reading any sample if the pin map does not fit the
    /// source's channels.
    pub fn decode<S, K>(&self, source: &mut S, sink: &mut K) -> Result<(), DecodeError>
    where
        S: SampleSource,
        K: EventSink,
    {
        let pins = &self.options.pins;
        pins.validate(source.channel_count())?;

        log::debug!("decoding capture with {} channels", source.channel_count());

        let mut state = DecodeState::default();

        // Each falling edge is a cycle boundary.
        while let Some(falling) = source.wait(pins.clock, Edge::Falling) {
            if state.snapshot.cycle_start_sample.is_some() {
                state
                    .snapshot
                    .retire(falling, self.options.annotate_cycle_kinds, sink);
                state.cycles += 1;
            }
            state.snapshot = BusSnapshot::begin(falling);

            // Buses are stable from here on.
            let Some(rising) = source.wait(pins.clock, Edge::Rising) else {
                break;
            };

            state.snapshot.address = source.levels(&pins.address).map(|value| value as u16);
            state.snapshot.data = source.levels(&pins.data).map(|value| value as u8);

            let sync = source.level(pins.sync);
            let fetch = sync == Some(true) && state.sync_prev != Some(true);

            if fetch {
                log::trace!("opcode fetch at sample {}", rising);
                if let Some(event) = state.fetch.resolve(falling) {
                    sink.put(event);
                    state.instructions += 1;
                }
                state.fetch.begin(falling, state.snapshot.data);
            }

            state.snapshot.access = if fetch {
                Some(CycleKind::Fetch)
            } else {
                source.level(pins.rw).map(|read| {
                    if read {
                        CycleKind::Read
                    } else {
                        CycleKind::Write
                    }
                })
            };

            state.sync_prev = sync;
        }

        log::debug!(
            "decode finished: {} cycles, {} instructions",
            state.cycles,
            state.instructions
        );
        Ok(())
    }

    /// Decodes `source` and collects every event.
    pub fn decode_all<S: SampleSource>(
        &self,
        source: &mut S,
    ) -> Result<Vec<BusEvent>, DecodeError> {
        let mut events = Vec::new();
        self.decode(source, &mut events)?;
        Ok(events)
    }
}

/// Decodes a whole capture with the given options.
pub fn decode_trace<S: SampleSource>(
    source: &mut S,
    options: DecoderOptions,
) -> Result<Vec<BusEvent>, DecodeError> {
    BusDecoder::new(options).decode_all(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::{BusCycle, TraceBuilder};

    fn instructions(events: &[BusEvent]) -> Vec<(SampleIndex, SampleIndex, &'static str, u8)> {
        events
            .iter()
            .filter_map(|event| match *event {
                BusEvent::InstructionDecoded {
                    start_sample,
                    end_sample,
                    mnemonic,
                    length,
                    ..
                } => Some((start_sample, end_sample, mnemonic, length)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_fetch_state_resolve_clears() {
        let mut fetch = InstructionFetchState::default();
        fetch.begin(5, Some(0xEA));
        assert!(fetch.awaiting_resolution());
        assert_eq!(fetch.pending_instruction_start_sample, Some(5));
        assert_eq!(fetch.opcode, Some(0xEA));

        let event = fetch.resolve(9).unwrap();
        assert_eq!(
            event,
            BusEvent::InstructionDecoded {
                start_sample: 5,
                end_sample: 9,
                opcode: 0xEA,
                mnemonic: "NOP",
                length: 1,
            }
        );
        assert!(!fetch.awaiting_resolution());
        assert_eq!(fetch.resolve(12), None);
    }

    #[test]
    fn test_fetch_state_unknown_opcode_is_dropped() {
        let mut fetch = InstructionFetchState::default();
        fetch.begin(5, None);
        assert_eq!(fetch.resolve(9), None);
        assert!(!fetch.awaiting_resolution());
    }

    #[test]
    fn test_snapshot_retire_skips_unknown_groups() {
        let snapshot = BusSnapshot {
            address: Some(0x1234),
            data: None,
            access: None,
            cycle_start_sample: Some(3),
        };

        let mut events = Vec::new();
        snapshot.retire(7, true, &mut events);
        assert_eq!(
            events,
            vec![BusEvent::AddressCycle {
                start_sample: 3,
                end_sample: 7,
                value: 0x1234,
            }]
        );
    }

    #[test]
    fn test_cycles_retire_at_next_falling_edge() {
        let mut builder = TraceBuilder::new();
        builder
            .cycle(BusCycle::read(0x0200, 0x11))
            .cycle(BusCycle::write(0x0201, 0x22))
            .close();
        let mut trace = builder.build();

        let options = DecoderOptions {
            annotate_cycle_kinds: false,
            ..DecoderOptions::default()
        };
        let events = decode_trace(&mut trace, options).unwrap();

        assert_eq!(
            events,
            vec![
                BusEvent::AddressCycle {
                    start_sample: 1,
                    end_sample: 5,
                    value: 0x0200
                },
                BusEvent::DataCycle {
                    start_sample: 1,
                    end_sample: 5,
                    value: 0x11
                },
                BusEvent::AddressCycle {
                    start_sample: 5,
                    end_sample: 9,
                    value: 0x0201
                },
                BusEvent::DataCycle {
                    start_sample: 5,
                    end_sample: 9,
                    value: 0x22
                },
            ]
        );
    }

    #[test]
    fn test_instruction_spans_until_next_fetch() {
        let mut builder = TraceBuilder::new();
        builder
            .cycle(BusCycle::fetch(0x8000, 0xA9)) // LDA #
            .cycle(BusCycle::read(0x8001, 0x42))
            .cycle(BusCycle::fetch(0x8002, 0xEA))
            .cycle(BusCycle::read(0x8003, 0xEA))
            .cycle(BusCycle::fetch(0x8003, 0xEA));
        let mut trace = builder.build();

        let events = BusDecoder::default().decode_all(&mut trace).unwrap();
        assert_eq!(
            instructions(&events),
            vec![(1, 9, "LDA", 2), (9, 17, "NOP", 1)]
        );
    }

    #[test]
    fn test_cycle_kinds() {
        let mut builder = TraceBuilder::new();
        builder
            .cycle(BusCycle::fetch(0x8000, 0x8D)) // STA abs
            .cycle(BusCycle::read(0x8001, 0x00))
            .cycle(BusCycle::read(0x8002, 0x02))
            .cycle(BusCycle::write(0x0200, 0x55))
            .cycle(BusCycle::read(0x0200, 0x55).with_address(None))
            .cycle(BusCycle {
                read: None,
                ..BusCycle::read(0x8003, 0x00)
            })
            .close();
        let mut trace = builder.build();

        let events = BusDecoder::default().decode_all(&mut trace).unwrap();
        let kinds: Vec<CycleKind> = events
            .iter()
            .filter_map(|event| match *event {
                BusEvent::CycleKind { kind, .. } => Some(kind),
                _ => None,
            })
            .collect();

        assert_eq!(
            kinds,
            vec![
                CycleKind::Fetch,
                CycleKind::Read,
                CycleKind::Read,
                CycleKind::Write,
                CycleKind::Read,
            ]
        );
    }

    #[test]
    fn test_sync_held_high_labels_read() {
        let mut builder = TraceBuilder::new();
        builder
            .cycle(BusCycle::fetch(0x8000, 0xEA))
            .cycle(BusCycle::fetch(0x8001, 0xEA))
            .close();
        let mut trace = builder.build();

        let events = BusDecoder::default().decode_all(&mut trace).unwrap();
        let kinds: Vec<CycleKind> = events
            .iter()
            .filter_map(|event| match *event {
                BusEvent::CycleKind { kind, .. } => Some(kind),
                _ => None,
            })
            .collect();

        assert_eq!(kinds, vec![CycleKind::Fetch, CycleKind::Read]);
    }

    #[test]
    fn test_options_are_kept() {
        let options = DecoderOptions {
            annotate_cycle_kinds: false,
            ..DecoderOptions::default()
        };
        let decoder = BusDecoder::new(options);
        assert_eq!(decoder.options(), &options);
        assert!(BusDecoder::default().options().annotate_cycle_kinds);
    }

    #[test]
    fn test_pin_map_must_fit_source() {
        let mut trace = crate::signal::CapturedTrace::new(8).unwrap();
        let result = BusDecoder::default().decode_all(&mut trace);
        assert!(matches!(result, Err(DecodeError::ChannelOutOfRange { .. })));
    }
}
