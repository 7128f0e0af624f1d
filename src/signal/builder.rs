//! Synthetic 65C02 bus traces
//!
//! Generates what a logic analyzer would record from a 65C02: the clock
//! runs low for the first half of every cycle and high for the second half,
//! and the buses, SYNC and R/W hold their values for the whole cycle.

use crate::decoder::PinMap;
use crate::error::TraceError;
use crate::signal::trace::{CapturedTrace, Frame};
use crate::signal::SampleIndex;

/// Bus state for one synthesized clock cycle.
///
/// `None` on a bus leaves every line of that bus unassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusCycle {
    pub address: Option<u16>,
    pub data: Option<u8>,
    /// SYNC level; high during opcode fetches.
    pub sync: bool,
    /// R/W level, `Some(true)` for read.
    pub read: Option<bool>,
}

impl BusCycle {
    /// An opcode fetch: SYNC high, read cycle.
    pub const fn fetch(address: u16, opcode: u8) -> Self {
        Self {
            address: Some(address),
            data: Some(opcode),
            sync: true,
            read: Some(true),
        }
    }

    /// A plain read cycle (operand or data read).
    pub const fn read(address: u16, data: u8) -> Self {
        Self {
            address: Some(address),
            data: Some(data),
            sync: false,
            read: Some(true),
        }
    }

    /// A write cycle.
    pub const fn write(address: u16, data: u8) -> Self {
        Self {
            address: Some(address),
            data: Some(data),
            sync: false,
            read: Some(false),
        }
    }

    /// A cycle in which nothing but the clock was recorded.
    pub const fn floating() -> Self {
        Self {
            address: None,
            data: None,
            sync: false,
            read: None,
        }
    }

    /// Replaces the data bus value.
    pub fn with_data(mut self, data: Option<u8>) -> Self {
        self.data = data;
        self
    }

    /// Replaces the address bus value.
    pub fn with_address(mut self, address: Option<u16>) -> Self {
        self.address = address;
        self
    }
}

/// Builds a [`CapturedTrace`] cycle by cycle.
///
/// The trace opens with a single idle sample (clock high) so that the first
/// cycle begins with a falling edge.
///
/// ```
/// use bus65c02::{BusCycle, TraceBuilder};
///
/// let mut builder = TraceBuilder::new();
/// builder.cycle(BusCycle::fetch(0x8000, 0xEA)).close();
/// let trace = builder.build();
/// assert_eq!(trace.len(), 1 + 4 + 1);
/// ```
#[derive(Debug, Clone)]
pub struct TraceBuilder {
    pins: PinMap,
    half_period: usize,
    cycles: usize,
    trace: CapturedTrace,
}

impl TraceBuilder {
    /// Builder using the default channel layout and two samples per clock
    /// half.
    pub fn new() -> Self {
        let pins = PinMap::default();
        let trace = CapturedTrace::with_channels(pins.channel_count());
        Self::start(pins, trace)
    }

    /// Builder for a custom channel layout.
    ///
    /// # Errors
    ///
    /// Fails if the layout needs more channels than a frame can hold.
    pub fn with_pins(pins: PinMap) -> Result<Self, TraceError> {
        let trace = CapturedTrace::new(pins.channel_count())?;
        Ok(Self::start(pins, trace))
    }

    fn start(pins: PinMap, mut trace: CapturedTrace) -> Self {
        let mut idle = Frame::unassigned();
        idle.set(pins.clock, Some(true));
        idle.set(pins.sync, Some(false));
        trace.push_frame(idle);

        Self {
            pins,
            half_period: 2,
            cycles: 0,
            trace,
        }
    }

    /// Sets how many samples each clock half lasts (at least one).
    ///
    /// Takes effect for cycles added afterwards.
    pub fn half_period(&mut self, samples: usize) -> &mut Self {
        self.half_period = samples.max(1);
        self
    }

    /// Appends one full clock cycle.
    pub fn cycle(&mut self, cycle: BusCycle) -> &mut Self {
        let mut frame = self.bus_frame(&cycle);

        frame.set(self.pins.clock, Some(false));
        for _ in 0..self.half_period {
            self.trace.push_frame(frame);
        }

        frame.set(self.pins.clock, Some(true));
        for _ in 0..self.half_period {
            self.trace.push_frame(frame);
        }

        self.cycles += 1;
        self
    }

    /// Appends several cycles in order.
    pub fn cycles<I>(&mut self, cycles: I) -> &mut Self
    where
        I: IntoIterator<Item = BusCycle>,
    {
        for cycle in cycles {
            self.cycle(cycle);
        }
        self
    }

    /// Appends a final falling clock edge with nothing else recorded, which
    /// lets a decoder retire the last full cycle.
    pub fn close(&mut self) -> &mut Self {
        let mut frame = Frame::unassigned();
        frame.set(self.pins.clock, Some(false));
        frame.set(self.pins.sync, Some(false));
        self.trace.push_frame(frame);
        self
    }

    /// Number of full cycles appended so far.
    pub fn cycle_count(&self) -> usize {
        self.cycles
    }

    /// Index of the next sample to be appended.
    ///
    /// Right after [`cycle`](Self::cycle) or [`close`](Self::close) this is
    /// where the following falling edge will land.
    pub fn next_sample(&self) -> SampleIndex {
        self.trace.len() as SampleIndex
    }

    pub fn build(self) -> CapturedTrace {
        self.trace
    }

    fn bus_frame(&self, cycle: &BusCycle) -> Frame {
        let mut frame = Frame::unassigned();

        for (bit, &channel) in self.pins.address.iter().enumerate() {
            frame.set(channel, cycle.address.map(|value| value & (1 << bit) != 0));
        }
        for (bit, &channel) in self.pins.data.iter().enumerate() {
            frame.set(channel, cycle.data.map(|value| value & (1 << bit) != 0));
        }
        frame.set(self.pins.sync, Some(cycle.sync));
        frame.set(self.pins.rw, cycle.read);

        frame
    }
}

impl Default for TraceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::{Edge, SampleSource};

    #[test]
    fn test_cycle_layout() {
        let mut builder = TraceBuilder::new();
        builder.cycle(BusCycle::read(0x1234, 0x56));
        let mut trace = builder.build();

        assert_eq!(trace.len(), 5);
        assert_eq!(trace.wait(8, Edge::Falling), Some(1));
        assert_eq!(trace.wait(8, Edge::Rising), Some(3));
    }

    #[test]
    fn test_bus_lines_follow_pin_map() {
        let pins = PinMap::default();
        let mut builder = TraceBuilder::new();
        builder.cycle(BusCycle::write(0x8001, 0x80));
        let trace = builder.build();

        let frame = trace.frame(1).copied().unwrap();
        assert_eq!(frame.get(pins.address[0]), Some(true));
        assert_eq!(frame.get(pins.address[1]), Some(false));
        assert_eq!(frame.get(pins.address[15]), Some(true));
        assert_eq!(frame.get(pins.data[7]), Some(true));
        assert_eq!(frame.get(pins.rw), Some(false));
        assert_eq!(frame.get(pins.clock), Some(false));
    }

    #[test]
    fn test_floating_cycle_leaves_buses_unassigned() {
        let pins = PinMap::default();
        let mut builder = TraceBuilder::new();
        builder.cycle(BusCycle::floating());
        let trace = builder.build();

        let frame = trace.frame(3).copied().unwrap();
        assert_eq!(frame.get(pins.address[0]), None);
        assert_eq!(frame.get(pins.data[0]), None);
        assert_eq!(frame.get(pins.clock), Some(true));
    }

    #[test]
    fn test_half_period_and_next_sample() {
        let mut builder = TraceBuilder::new();
        builder.half_period(3);
        assert_eq!(builder.next_sample(), 1);
        builder.cycle(BusCycle::floating());
        assert_eq!(builder.next_sample(), 7);
        assert_eq!(builder.cycle_count(), 1);
    }
}
