//! Decoder output: typed events, host-facing annotations and sinks

use crate::decoder::formatter::format_payload;
use crate::signal::SampleIndex;

/// Classification of a bus cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CycleKind {
    /// Opcode fetch (SYNC rose at this cycle).
    ///
    /// Only the cycle where SYNC goes from low to high is a fetch. If SYNC
    /// stays high into the following cycle, that cycle is labeled from R/W
    /// like any other, so the row always agrees with the instruction row.
    Fetch,
    /// Any other read cycle.
    Read,
    /// Write cycle.
    Write,
}

impl CycleKind {
    pub fn label(self) -> &'static str {
        match self {
            CycleKind::Fetch => "Fetch",
            CycleKind::Read => "Read",
            CycleKind::Write => "Write",
        }
    }
}

/// One decoded event.
///
/// Spans are half-open: `start_sample` is the falling clock edge that began
/// the cycle, `end_sample` the falling edge that began the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusEvent {
    /// Address bus value of a retired cycle.
    AddressCycle {
        start_sample: SampleIndex,
        end_sample: SampleIndex,
        value: u16,
    },

    /// Data bus value of a retired cycle.
    DataCycle {
        start_sample: SampleIndex,
        end_sample: SampleIndex,
        value: u8,
    },

    /// An opcode fetch resolved against the opcode table.
    ///
    /// The span runs from the cycle that fetched the opcode up to the start
    /// of the cycle that fetched the next one.
    InstructionDecoded {
        start_sample: SampleIndex,
        end_sample: SampleIndex,
        opcode: u8,
        mnemonic: &'static str,
        length: u8,
    },

    /// Fetch/read/write classification of a retired cycle.
    CycleKind {
        start_sample: SampleIndex,
        end_sample: SampleIndex,
        kind: CycleKind,
    },
}

impl BusEvent {
    pub fn start_sample(&self) -> SampleIndex {
        match *self {
            BusEvent::AddressCycle { start_sample, .. }
            | BusEvent::DataCycle { start_sample, .. }
            | BusEvent::InstructionDecoded { start_sample, .. }
            | BusEvent::CycleKind { start_sample, .. } => start_sample,
        }
    }

    pub fn end_sample(&self) -> SampleIndex {
        match *self {
            BusEvent::AddressCycle { end_sample, .. }
            | BusEvent::DataCycle { end_sample, .. }
            | BusEvent::InstructionDecoded { end_sample, .. }
            | BusEvent::CycleKind { end_sample, .. } => end_sample,
        }
    }

    /// Annotation row this event belongs to.
    pub fn category(&self) -> Category {
        match self {
            BusEvent::AddressCycle { .. } => Category::Address,
            BusEvent::DataCycle { .. } => Category::Data,
            BusEvent::InstructionDecoded { .. } => Category::Instruction,
            BusEvent::CycleKind { .. } => Category::Cycle,
        }
    }

    /// Converts the event into a host-facing emission record.
    pub fn to_annotation(&self) -> Annotation {
        let payload = match *self {
            BusEvent::InstructionDecoded {
                mnemonic, length, ..
            } => Payload::Instruction { mnemonic, length },
            _ => Payload::Text(format_payload(self)),
        };

        Annotation {
            start_sample: self.start_sample(),
            end_sample: self.end_sample(),
            category: self.category(),
            payload,
        }
    }
}

/// Annotation row of an emitted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Address,
    Data,
    Instruction,
    Cycle,
}

impl Category {
    /// Row identifier for hosts that group annotations by name.
    pub fn id(self) -> &'static str {
        match self {
            Category::Address => "addrbus",
            Category::Data => "databus",
            Category::Instruction => "insname",
            Category::Cycle => "cycles",
        }
    }
}

/// Formatted content of an annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Hex value (`"8000h"`, `"EAh"`) or cycle kind label.
    Text(String),
    /// Decoded opcode.
    Instruction { mnemonic: &'static str, length: u8 },
}

/// Emission record handed to a host: a sample range, a row and a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub start_sample: SampleIndex,
    pub end_sample: SampleIndex,
    pub category: Category,
    pub payload: Payload,
}

/// Receiver of decoded events, in emission order.
pub trait EventSink {
    fn put(&mut self, event: BusEvent);
}

impl EventSink for Vec<BusEvent> {
    fn put(&mut self, event: BusEvent) {
        self.push(event);
    }
}

impl<F> EventSink for F
where
    F: FnMut(BusEvent),
{
    fn put(&mut self, event: BusEvent) {
        self(event)
    }
}
