//! Error types for decoder configuration and capture import.
//!
//! Running out of samples and unassigned bus lines are not errors; the
//! decoder handles both locally. What remains is misconfiguration (a pin map
//! that does not fit the capture) and malformed capture text.

use crate::decoder::BusLine;
use thiserror::Error;

/// Errors raised before decoding starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A bus line is mapped to a channel the sample source does not have.
    #[error("{line} is mapped to channel {channel}, but the capture only has {available} channels")]
    ChannelOutOfRange {
        line: BusLine,
        channel: usize,
        available: usize,
    },

    /// Two bus lines are mapped to the same channel.
    #[error("channel {channel} is assigned to both {first} and {second}")]
    DuplicateChannel {
        channel: usize,
        first: BusLine,
        second: BusLine,
    },
}

/// Errors raised while importing a textual capture.
///
/// Line numbers are 1-based and count every line of the input, including
/// comments and blank lines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceError {
    /// A sample line has the wrong number of channel columns.
    #[error("line {line}: expected {expected} channel columns, found {found}")]
    ColumnCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A column holds something other than `0`, `1` or an unassigned marker.
    #[error("line {line}, column {column}: invalid level {token:?}")]
    InvalidLevel {
        line: usize,
        column: usize,
        token: String,
    },

    /// More channels were requested than a captured frame can hold.
    #[error("captures support at most {max} channels, requested {requested}")]
    TooManyChannels { requested: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DecodeError::ChannelOutOfRange {
            line: BusLine::Address(15),
            channel: 30,
            available: 27,
        };
        assert_eq!(
            err.to_string(),
            "A15 is mapped to channel 30, but the capture only has 27 channels"
        );

        let err = TraceError::InvalidLevel {
            line: 4,
            column: 2,
            token: "z".to_string(),
        };
        assert_eq!(err.to_string(), "line 4, column 2: invalid level \"z\"");
    }
}
