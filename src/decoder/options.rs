//! Channel layout and decoder options

use crate::error::DecodeError;
use std::fmt;

/// A single 65C02 bus line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BusLine {
    /// Data bus line D0-D7.
    Data(u8),
    /// PHI2 system clock.
    Clock,
    /// SYNC, high during opcode fetch cycles.
    Sync,
    /// R/W, high for read cycles.
    ReadWrite,
    /// Address bus line A0-A15.
    Address(u8),
}

impl fmt::Display for BusLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BusLine::Data(bit) => write!(f, "D{}", bit),
            BusLine::Clock => write!(f, "CLK"),
            BusLine::Sync => write!(f, "SYNC"),
            BusLine::ReadWrite => write!(f, "RW"),
            BusLine::Address(bit) => write!(f, "A{}", bit),
        }
    }
}

/// Which capture channel carries each bus line.
///
/// The default layout is D0-D7 on channels 0-7, CLK on 8, SYNC on 9, RW on
/// 10 and A0-A15 on 11-26.
///
/// # Examples
///
/// ```
/// use bus65c02::PinMap;
///
/// let pins = PinMap::default();
/// assert_eq!(pins.clock, 8);
/// assert_eq!(pins.address[15], 26);
/// assert_eq!(pins.channel_count(), 27);
/// assert!(pins.validate(27).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinMap {
    pub data: [usize; 8],
    pub clock: usize,
    pub sync: usize,
    pub rw: usize,
    pub address: [usize; 16],
}

impl PinMap {
    /// Channel count of the default layout.
    pub const DEFAULT_CHANNELS: usize = 27;

    /// Smallest channel count that covers every mapped line.
    pub fn channel_count(&self) -> usize {
        self.lines()
            .map(|(_, channel)| channel + 1)
            .max()
            .unwrap_or(0)
    }

    /// Every line with its channel: data, clock, sync, R/W, then address.
    pub fn lines(&self) -> impl Iterator<Item = (BusLine, usize)> + '_ {
        let data = self
            .data
            .iter()
            .enumerate()
            .map(|(bit, &channel)| (BusLine::Data(bit as u8), channel));
        let control = [
            (BusLine::Clock, self.clock),
            (BusLine::Sync, self.sync),
            (BusLine::ReadWrite, self.rw),
        ];
        let address = self
            .address
            .iter()
            .enumerate()
            .map(|(bit, &channel)| (BusLine::Address(bit as u8), channel));

        data.chain(control).chain(address)
    }

    /// Checks that every line fits in `available` channels and that no two
    /// lines share a channel.
    ///
    /// # Errors
    ///
    /// Returns the first offending line in [`lines`](Self::lines) order.
    pub fn validate(&self, available: usize) -> Result<(), DecodeError> {
        let mut owners: Vec<Option<BusLine>> = vec![None; available];

        for (line, channel) in self.lines() {
            let owner = owners
                .get_mut(channel)
                .ok_or(DecodeError::ChannelOutOfRange {
                    line,
                    channel,
                    available,
                })?;

            if let Some(first) = *owner {
                return Err(DecodeError::DuplicateChannel {
                    channel,
                    first,
                    second: line,
                });
            }
            *owner = Some(line);
        }

        Ok(())
    }
}

impl Default for PinMap {
    fn default() -> Self {
        let mut address = [0; 16];
        for (bit, channel) in address.iter_mut().enumerate() {
            *channel = 11 + bit;
        }

        Self {
            data: [0, 1, 2, 3, 4, 5, 6, 7],
            clock: 8,
            sync: 9,
            rw: 10,
            address,
        }
    }
}

/// Options controlling a decode run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderOptions {
    /// Channel layout of the capture.
    pub pins: PinMap,

    /// Whether to emit a fetch/read/write classification for every retired
    /// cycle.
    pub annotate_cycle_kinds: bool,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            pins: PinMap::default(),
            annotate_cycle_kinds: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_is_contiguous() {
        let pins = PinMap::default();
        let mut channels: Vec<usize> = pins.lines().map(|(_, c)| c).collect();
        channels.sort_unstable();
        assert_eq!(channels, (0..27).collect::<Vec<_>>());
    }

    #[test]
    fn test_validate_out_of_range() {
        let pins = PinMap::default();
        assert_eq!(
            pins.validate(20),
            Err(DecodeError::ChannelOutOfRange {
                line: BusLine::Address(9),
                channel: 20,
                available: 20,
            })
        );
    }

    #[test]
    fn test_validate_duplicate() {
        let mut pins = PinMap::default();
        pins.sync = pins.clock;
        assert_eq!(
            pins.validate(27),
            Err(DecodeError::DuplicateChannel {
                channel: 8,
                first: BusLine::Clock,
                second: BusLine::Sync,
            })
        );
    }

    #[test]
    fn test_line_names() {
        assert_eq!(BusLine::Data(3).to_string(), "D3");
        assert_eq!(BusLine::Address(15).to_string(), "A15");
        assert_eq!(BusLine::ReadWrite.to_string(), "RW");
    }
}
