//! # WDC 65C02 Bus Decoder
//!
//! Reconstructs the bus activity of a WDC 65C02 from a logic analyzer
//! capture: the address and data value of every clock cycle, which cycles
//! were opcode fetches, and the instruction each fetch started.
//!
//! The decoder needs the 16 address lines, the 8 data lines, PHI2, SYNC and
//! R/W. Lines the analyzer did not record are tolerated: a bus with any
//! unassigned line simply produces no value for that cycle.
//!
//! ## Quick Start
//!
//! ```rust
//! use bus65c02::{BusCycle, BusDecoder, BusEvent, DecoderOptions, TraceBuilder};
//!
//! // Synthesize a capture: JMP $8000 followed by the next fetch
//! let mut builder = TraceBuilder::new();
//! builder
//!     .cycle(BusCycle::fetch(0x8000, 0x4C))
//!     .cycle(BusCycle::read(0x8001, 0x00))
//!     .cycle(BusCycle::read(0x8002, 0x80))
//!     .cycle(BusCycle::fetch(0x8000, 0x4C))
//!     .close();
//! let mut trace = builder.build();
//!
//! let decoder = BusDecoder::new(DecoderOptions::default());
//! let events = decoder.decode_all(&mut trace).unwrap();
//!
//! assert!(events.contains(&BusEvent::InstructionDecoded {
//!     start_sample: 1,
//!     end_sample: 13,
//!     opcode: 0x4C,
//!     mnemonic: "JMP",
//!     length: 3,
//! }));
//! ```
//!
//! ## Modules
//!
//! - `signal` - SampleSource trait, in-memory captures and trace synthesis
//! - `decoder` - Bus cycle state machine, events and formatting
//! - `opcodes` - 65C02 opcode table
//! - `addressing` - Addressing mode enumeration
//! - `error` - Configuration and capture import errors

pub mod addressing;
pub mod decoder;
pub mod error;
pub mod opcodes;
pub mod signal;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::AddressingMode;
pub use decoder::formatter::{format_event, format_payload};
pub use decoder::{
    decode_trace, Annotation, BusDecoder, BusEvent, BusLine, BusSnapshot, Category, CycleKind,
    DecoderOptions, EventSink, InstructionFetchState, Payload, PinMap,
};
pub use error::{DecodeError, TraceError};
pub use opcodes::{is_reserved, lookup, OpcodeEntry, OPCODE_TABLE};
pub use signal::{
    BusCycle, CapturedTrace, Edge, Frame, SampleIndex, SampleSource, TraceBuilder, MAX_CHANNELS,
};
