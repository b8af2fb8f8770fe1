#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod image;
pub mod ransac;
pub mod tracker;
pub mod types;

// “Expert” modules – still public, but considered unstable internals.
pub mod geometry;
pub mod pyramid;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{CornerDetector, DetectionReport, DetectorParams};
pub use crate::types::{Keypoint, Line};

// Robust line fitting on top of the detected points.
pub use crate::ransac::{fit_line, LineFit, RansacOptions};

// Temporal buffering of per-frame keypoint sets.
pub use crate::tracker::PointTracker;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use corner_detector::prelude::*;
///
/// # fn main() {
/// let (w, h) = (640usize, 480usize);
/// let img = GrayF32::new(w, h);
///
/// let det = CornerDetector::new(DetectorParams::default());
/// let report = det.process(&img);
/// println!(
///     "keypoints={} latency_ms={:.3}",
///     report.keypoints.len(),
///     report.latency_ms
/// );
/// # }
/// ```
pub mod prelude {
    pub use crate::image::GrayF32;
    pub use crate::ransac::{fit_line, LineFit, RansacOptions};
    pub use crate::{CornerDetector, DetectionReport, DetectorParams, Keypoint, Line, PointTracker};
}
