//! Sequencer: partitions the composition's frame range into contiguous sequence windows.

use crate::foundation::core::FrameIndex;
use crate::foundation::error::{KineoError, KineoResult};

/// One contiguous, fixed-duration window of the timeline.
///
/// Immutable once declared; owned by the [`Timeline`] in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Sequence {
    /// Position in the timeline, starting at 0.
    pub order: usize,
    /// Window length in frames, always > 0.
    pub duration_frames: u64,
}

/// The resolution of a global frame against a timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ResolvedFrame {
    /// Index of the sequence whose window contains the global frame.
    pub active_index: usize,
    /// Frame offset within the active sequence, in `[0, duration_frames)`.
    pub local_frame: u64,
}

/// Ordered list of sequences whose windows partition `[0, total_frames)`.
///
/// Start of sequence `i` is the sum of the durations before it; there are no gaps and no overlaps,
/// so exactly one sequence is active for every in-range frame.
#[derive(Clone, Debug)]
pub struct Timeline {
    sequences: Vec<Sequence>,
    starts: Vec<u64>, // starts[i] = sum of durations before sequence i
    total_frames: u64,
}

impl Timeline {
    /// Build a timeline from per-sequence durations.
    pub fn new(durations: &[u64]) -> KineoResult<Self> {
        let mut sequences = Vec::with_capacity(durations.len());
        let mut starts = Vec::with_capacity(durations.len());
        let mut total: u64 = 0;
        for (order, &duration_frames) in durations.iter().enumerate() {
            if duration_frames == 0 {
                return Err(KineoError::validation(format!(
                    "sequence {order} has zero duration; durations must be positive"
                )));
            }
            sequences.push(Sequence {
                order,
                duration_frames,
            });
            starts.push(total);
            total = total.checked_add(duration_frames).ok_or_else(|| {
                KineoError::validation("total timeline duration overflows u64")
            })?;
        }
        Ok(Self {
            sequences,
            starts,
            total_frames: total,
        })
    }

    /// Total duration: the sum of all sequence durations.
    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    /// Number of sequences.
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    /// Return `true` when the timeline has no sequences.
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Declared sequences in timeline order.
    pub fn sequences(&self) -> &[Sequence] {
        &self.sequences
    }

    /// First global frame of sequence `index`.
    pub fn start_of(&self, index: usize) -> Option<FrameIndex> {
        self.starts.get(index).copied().map(FrameIndex)
    }

    /// Resolve a global frame to its active sequence and local offset.
    ///
    /// Frames at or beyond the total duration are a caller error, answered with an explicit
    /// out-of-range condition instead of an extrapolated result.
    pub fn resolve(&self, global_frame: FrameIndex) -> KineoResult<ResolvedFrame> {
        let f = global_frame.0;
        if f >= self.total_frames {
            return Err(KineoError::FrameOutOfRange {
                frame: f,
                duration: self.total_frames,
            });
        }
        // starts is sorted; the active window is the last one starting at or before f.
        let active_index = self.starts.partition_point(|&s| s <= f) - 1;
        Ok(ResolvedFrame {
            active_index,
            local_frame: f - self.starts[active_index],
        })
    }
}
