//! Temporal keypoint tracker: a fixed-capacity ring buffer of recent
//! per-frame keypoint sets.
//!
//! Each [`PointTracker::push`] advances a circular write cursor — the
//! oldest slot is overwritten once the ring is full — and stores the frame's
//! keypoints, truncating to the per-slot capacity with a non-fatal warning.
//! [`PointTracker::extract`] filters the most-recently-written slot by
//! score. Older slots are retained in memory but extraction never reads
//! them; widening the read window over the buffered history is the obvious
//! next step for hysteresis-style tracking.

use log::warn;

use crate::types::Keypoint;

/// Ring capacity ceiling.
pub const MAX_FRAMES: usize = 10;
/// Per-slot keypoint ceiling.
pub const MAX_POINTS_PER_FRAME: usize = 1000;

/// Ring buffer of the last `nframes` keypoint sets.
#[derive(Clone, Debug)]
pub struct PointTracker {
    slots: Vec<Vec<Keypoint>>,
    /// Index of the most-recently-written slot.
    cursor: usize,
}

impl PointTracker {
    /// Create a tracker holding up to `nframes` frames.
    ///
    /// # Panics
    /// If `nframes` is zero or exceeds [`MAX_FRAMES`].
    pub fn new(nframes: usize) -> Self {
        assert!(nframes >= 1 && nframes <= MAX_FRAMES);
        Self {
            slots: vec![Vec::new(); nframes],
            cursor: 0,
        }
    }

    /// Number of ring slots.
    pub fn nframes(&self) -> usize {
        self.slots.len()
    }

    /// Store one frame's keypoints, overwriting the oldest slot.
    pub fn push(&mut self, keypoints: &[Keypoint]) {
        let mut n = keypoints.len();
        if n > MAX_POINTS_PER_FRAME {
            warn!(
                "tracker got {} points but the slot capacity is {}",
                n, MAX_POINTS_PER_FRAME
            );
            n = MAX_POINTS_PER_FRAME;
        }
        self.cursor = (self.cursor + 1) % self.slots.len();
        let slot = &mut self.slots[self.cursor];
        slot.clear();
        slot.extend_from_slice(&keypoints[..n]);
    }

    /// Keypoints of the latest frame whose score exceeds `threshold`.
    pub fn extract(&self, threshold: f32) -> Vec<Keypoint> {
        self.slots[self.cursor]
            .iter()
            .filter(|kp| kp.score > threshold)
            .copied()
            .collect()
    }
}
