//! Detector configuration.
//!
//! All tunables live in one plain struct passed into every call; nothing is
//! cached across frames, so callers may mutate any field between two
//! invocations. Defaults match the demo front end.

use crate::pyramid::StencilSize;
use serde::{Deserialize, Serialize};

/// Tunables of the multiscale Harris-Hessian detector.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct DetectorParams {
    /// Pre-smoothing σ applied to the input before pyramid construction.
    pub sigma: f32,
    /// Polarity and strength parameter: κ > 0 detects dark features,
    /// κ < 0 bright ones; |κ| weighs the trace in the acceptance test.
    pub kappa: f32,
    /// Trace threshold τ: candidates need a Hessian trace above this.
    pub tau: f32,
    /// Maximum number of emitted keypoints; excess is truncated with a
    /// non-fatal warning.
    pub max_points: usize,
    /// Gaussian stencil footprint for the smoothing passes.
    pub stencil: StencilSize,
}

impl Default for DetectorParams {
    fn default() -> Self {
        Self {
            sigma: 1.0,
            kappa: 0.04,
            tau: 20.0,
            max_points: 1000,
            stencil: StencilSize::Three,
        }
    }
}
