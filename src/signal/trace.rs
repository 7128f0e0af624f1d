//! In-memory capture buffer

use crate::error::TraceError;
use crate::signal::{Edge, SampleIndex, SampleSource};

/// Maximum number of channels a [`Frame`] can hold.
pub const MAX_CHANNELS: usize = 32;

/// Levels of every channel at one sample.
///
/// Stored as two masks: bit *c* of `assigned` says whether channel *c* was
/// recorded, bit *c* of `levels` holds its level when it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Frame {
    levels: u32,
    assigned: u32,
}

impl Frame {
    /// A frame with every channel unassigned.
    pub const fn unassigned() -> Self {
        Self {
            levels: 0,
            assigned: 0,
        }
    }

    /// Builds a frame from per-channel levels, channel 0 first.
    ///
    /// Entries past [`MAX_CHANNELS`] are ignored.
    pub fn from_levels(levels: &[Option<bool>]) -> Self {
        let mut frame = Self::unassigned();
        for (channel, &level) in levels.iter().enumerate().take(MAX_CHANNELS) {
            frame.set(channel, level);
        }
        frame
    }

    /// Level of a channel, `None` if unassigned or out of range.
    pub fn get(&self, channel: usize) -> Option<bool> {
        if channel >= MAX_CHANNELS || self.assigned & (1 << channel) == 0 {
            return None;
        }
        Some(self.levels & (1 << channel) != 0)
    }

    /// Sets or clears a channel. Out-of-range channels are ignored.
    pub fn set(&mut self, channel: usize, level: Option<bool>) {
        if channel >= MAX_CHANNELS {
            return;
        }

        let bit = 1u32 << channel;
        match level {
            Some(high) => {
                self.assigned |= bit;
                if high {
                    self.levels |= bit;
                } else {
                    self.levels &= !bit;
                }
            }
            None => {
                self.assigned &= !bit;
                self.levels &= !bit;
            }
        }
    }
}

/// A pre-captured logic trace held in memory.
///
/// Samples are addressed by index; the cursor used by [`SampleSource::wait`]
/// is a plain index into the frame buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedTrace {
    channels: usize,
    frames: Vec<Frame>,
    cursor: usize,
}

impl CapturedTrace {
    /// Creates an empty trace with the given channel count.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::TooManyChannels`] if `channels` exceeds
    /// [`MAX_CHANNELS`].
    pub fn new(channels: usize) -> Result<Self, TraceError> {
        if channels > MAX_CHANNELS {
            return Err(TraceError::TooManyChannels {
                requested: channels,
                max: MAX_CHANNELS,
            });
        }
        Ok(Self::with_channels(channels))
    }

    pub(crate) fn with_channels(channels: usize) -> Self {
        Self {
            channels: channels.min(MAX_CHANNELS),
            frames: Vec::new(),
            cursor: 0,
        }
    }

    /// Parses a textual capture.
    ///
    /// One sample per line. Columns are separated by commas and/or
    /// whitespace, one column per channel: `0` or `1` for a recorded level,
    /// `x`, `X` or `-` for an unassigned channel. Blank lines and lines
    /// starting with `#` are skipped.
    ///
    /// ```
    /// use bus65c02::{CapturedTrace, SampleSource};
    ///
    /// let trace = CapturedTrace::parse("# clk, sync\n1, 0\n0, x\n", 2).unwrap();
    /// assert_eq!(trace.len(), 2);
    /// assert_eq!(trace.channel_count(), 2);
    /// ```
    pub fn parse(text: &str, channels: usize) -> Result<Self, TraceError> {
        let mut trace = Self::new(channels)?;

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let content = raw.trim();
            if content.is_empty() || content.starts_with('#') {
                continue;
            }

            let tokens: Vec<&str> = content
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|token| !token.is_empty())
                .collect();

            if tokens.len() != channels {
                return Err(TraceError::ColumnCount {
                    line,
                    expected: channels,
                    found: tokens.len(),
                });
            }

            let mut frame = Frame::unassigned();
            for (channel, token) in tokens.iter().enumerate() {
                let level = match *token {
                    "0" => Some(false),
                    "1" => Some(true),
                    "x" | "X" | "-" => None,
                    other => {
                        return Err(TraceError::InvalidLevel {
                            line,
                            column: channel + 1,
                            token: other.to_string(),
                        })
                    }
                };
                frame.set(channel, level);
            }
            trace.frames.push(frame);
        }

        log::debug!(
            "parsed capture with {} samples on {} channels",
            trace.frames.len(),
            channels
        );
        Ok(trace)
    }

    /// Appends a sample given as per-channel levels.
    pub fn push(&mut self, levels: &[Option<bool>]) {
        self.push_frame(Frame::from_levels(&levels[..levels.len().min(self.channels)]));
    }

    /// Appends a prepared frame.
    pub fn push_frame(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Number of samples in the trace.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The frame at a given sample index.
    pub fn frame(&self, sample: SampleIndex) -> Option<&Frame> {
        usize::try_from(sample)
            .ok()
            .and_then(|index| self.frames.get(index))
    }

    /// Current cursor position.
    pub fn position(&self) -> SampleIndex {
        self.cursor as SampleIndex
    }

    /// Moves the cursor back to the first sample.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }
}

impl SampleSource for CapturedTrace {
    fn channel_count(&self) -> usize {
        self.channels
    }

    fn wait(&mut self, channel: usize, edge: Edge) -> Option<SampleIndex> {
        let start = self.cursor + 1;
        for index in start..self.frames.len() {
            let previous = self.frames[index - 1].get(channel);
            let current = self.frames[index].get(channel);
            if edge.matches(previous, current) {
                self.cursor = index;
                return Some(index as SampleIndex);
            }
        }

        self.cursor = self.frames.len().saturating_sub(1);
        None
    }

    fn level(&self, channel: usize) -> Option<bool> {
        if channel >= self.channels {
            return None;
        }
        self.frames.get(self.cursor).and_then(|frame| frame.get(channel))
    }
}
