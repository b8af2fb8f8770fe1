//! Multiscale Harris-Hessian corner detector.
//!
//! Pipeline per frame
//! - Build a Gaussian pyramid (fixed inter-level σ, tunable pre-smoothing).
//! - Scan every level for Hessian candidates with subpixel refinement.
//! - Validate each candidate's scale across three octaves with a pyramidal
//!   Laplacian and rescale to level-0 coordinates.
//! - Drop redundant multiscale detections.
//!
//! Modules
//! - [`params`] – the `DetectorParams` tunables.
//! - `level` – single-level candidate scan and `parabolic_minimum`.
//! - `multiscale` – pyramid orchestration and cross-octave validation.
//! - `redundancy` – asymmetric multiscale de-duplication.
//!
//! The detector holds no per-frame state; one `process` call runs the whole
//! pipeline to completion and releases every intermediate buffer before it
//! returns.

pub mod level;
pub mod multiscale;
pub mod params;
pub mod redundancy;

use log::debug;
use serde::Serialize;
use std::time::Instant;

use crate::image::GrayF32;
use crate::types::Keypoint;

pub use multiscale::detect_multiscale;
pub use params::DetectorParams;
pub use redundancy::remove_redundant;

/// Detection outcome of one frame.
#[derive(Clone, Debug, Serialize)]
pub struct DetectionReport {
    /// Surviving keypoints, coarse-first, level-0 coordinates.
    pub keypoints: Vec<Keypoint>,
    /// Count before redundancy removal.
    pub raw_count: usize,
    /// Wall-clock cost of the frame in milliseconds.
    pub latency_ms: f64,
}

/// Front door tying the multiscale scan and the redundancy filter together.
#[derive(Clone, Debug, Default)]
pub struct CornerDetector {
    params: DetectorParams,
}

impl CornerDetector {
    pub fn new(params: DetectorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &DetectorParams {
        &self.params
    }

    /// Tunables may change between any two frames.
    pub fn params_mut(&mut self) -> &mut DetectorParams {
        &mut self.params
    }

    /// Detect keypoints in one luminance frame.
    pub fn process(&self, image: &GrayF32) -> DetectionReport {
        let start = Instant::now();
        let raw = detect_multiscale(image, &self.params);
        let raw_count = raw.len();
        let keypoints = remove_redundant(&raw);
        let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "corner detector: {} raw -> {} unique in {:.3} ms",
            raw_count,
            keypoints.len(),
            latency_ms
        );
        DetectionReport {
            keypoints,
            raw_count,
            latency_ms,
        }
    }
}
