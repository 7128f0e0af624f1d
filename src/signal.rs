//! # Sampled Signal Model
//!
//! The decoder does not own the capture. It only needs two things from
//! whatever holds the samples: "advance to the next transition of channel
//! *c* in direction *d*, or tell me the capture is exhausted", and "what
//! level does channel *c* have at the position you stopped at".
//! [`SampleSource`] is that seam.
//!
//! [`CapturedTrace`] implements it over an in-memory sample buffer, and
//! [`TraceBuilder`] synthesizes 65C02 bus traces for tests and demos.

pub mod builder;
pub mod trace;

pub use builder::{BusCycle, TraceBuilder};
pub use trace::{CapturedTrace, Frame, MAX_CHANNELS};

/// Position of a sample within a capture.
pub type SampleIndex = u64;

/// Direction of a transition on a single channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Low to high.
    Rising,
    /// High to low.
    Falling,
}

impl Edge {
    /// Whether the pair of consecutive levels forms this edge.
    ///
    /// An unassigned level on either side never forms an edge.
    pub fn matches(self, previous: Option<bool>, current: Option<bool>) -> bool {
        matches!(
            (self, previous, current),
            (Edge::Rising, Some(false), Some(true)) | (Edge::Falling, Some(true), Some(false))
        )
    }
}

/// Pull-based access to a multi-channel logic capture.
///
/// Implementations move a single cursor forward through the capture. The
/// cursor never moves backwards during a decode run.
///
/// # Examples
///
/// ```
/// use bus65c02::{CapturedTrace, Edge, SampleSource};
///
/// let mut trace = CapturedTrace::parse("0\n1\n0\n", 1).unwrap();
/// assert_eq!(trace.wait(0, Edge::Rising), Some(1));
/// assert_eq!(trace.level(0), Some(true));
/// assert_eq!(trace.wait(0, Edge::Rising), None);
/// ```
pub trait SampleSource {
    /// Number of channels every sample carries.
    fn channel_count(&self) -> usize;

    /// Advances to the next sample at which `channel` transitions in the
    /// given direction and returns its index.
    ///
    /// Returns `None` once no such sample remains. Running out of samples is
    /// the normal way a decode run ends.
    fn wait(&mut self, channel: usize, edge: Edge) -> Option<SampleIndex>;

    /// Level of `channel` at the current position, or `None` if the channel
    /// is unassigned there.
    fn level(&self, channel: usize) -> Option<bool>;

    /// Reads a group of channels at the current position as one
    /// little-endian value: bit *i* of the result is the level of
    /// `channels[i]`.
    ///
    /// Returns `None` if any channel of the group is unassigned, or if the
    /// group has more than 32 channels.
    fn levels(&self, channels: &[usize]) -> Option<u32> {
        if channels.len() > u32::BITS as usize {
            return None;
        }

        channels
            .iter()
            .enumerate()
            .try_fold(0u32, |value, (bit, &channel)| {
                self.level(channel)
                    .map(|high| value | (u32::from(high) << bit))
            })
    }
}
