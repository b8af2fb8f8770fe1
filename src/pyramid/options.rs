use super::filters::StencilSize;
use serde::{Deserialize, Serialize};

/// Options controlling pyramid construction.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PyramidOptions {
    /// Pre-smoothing σ applied to level 0; values <= 0 keep the input as-is.
    pub sigma_pre: f32,
    /// Inter-level smoothing σ applied before each decimation.
    ///
    /// A negative value requests a "skeleton" pyramid: all levels zeroed but
    /// with the same shape chain, for allocation-only callers.
    pub sigma_pyr: f32,
    /// Gaussian stencil footprint used by both smoothing passes.
    pub stencil: StencilSize,
}

impl Default for PyramidOptions {
    fn default() -> Self {
        Self {
            sigma_pre: 1.0,
            sigma_pyr: 1.4,
            stencil: StencilSize::Three,
        }
    }
}

impl PyramidOptions {
    pub fn with_sigma_pre(mut self, sigma_pre: f32) -> Self {
        self.sigma_pre = sigma_pre;
        self
    }

    pub fn with_sigma_pyr(mut self, sigma_pyr: f32) -> Self {
        self.sigma_pyr = sigma_pyr;
        self
    }

    pub fn with_stencil(mut self, stencil: StencilSize) -> Self {
        self.stencil = stencil;
        self
    }
}
