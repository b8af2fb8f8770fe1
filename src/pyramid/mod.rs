//! Grayscale image pyramid with Gaussian smoothing and 2× decimation.
//!
//! Level 0 is the (optionally pre-smoothed) input; every subsequent level is
//! the previous one smoothed by `sigma_pyr` and nearest-neighbor downsampled
//! by two with replicate addressing. Dimensions follow `ceil(prev / 2)` and
//! construction stops once both dimensions of the next level would be ≤ 1 or
//! the hard 20-level cap is hit. The pyramid lives only as long as the call
//! that built it; nothing is cached across frames.
//!
//! The module also hosts the pyramidal Laplacian used by the multiscale
//! orchestrator to compare a detection's response across adjacent octaves.

pub mod filters;
mod options;

use crate::image::GrayF32;
use filters::smooth;

pub use filters::StencilSize;
pub use options::PyramidOptions;

/// Hard cap on the number of pyramid levels.
pub const MAX_LEVELS: usize = 20;

#[derive(Clone, Debug)]
pub struct Pyramid {
    /// Levels from finest (index 0) to coarsest.
    pub levels: Vec<GrayF32>,
}

impl Pyramid {
    /// Build a pyramid from a luminance buffer using the provided options.
    pub fn build(image: &GrayF32, options: &PyramidOptions) -> Self {
        if options.sigma_pyr < 0.0 {
            return Self::skeleton(image.w, image.h);
        }

        let level0 = if options.sigma_pre > 0.0 {
            smooth(image, options.sigma_pre, options.stencil)
        } else {
            image.clone()
        };

        let mut levels = Vec::with_capacity(8);
        levels.push(level0);
        while levels.len() < MAX_LEVELS {
            let prev = levels.last().expect("previous level available");
            let (nw, nh) = (prev.w.div_ceil(2), prev.h.div_ceil(2));
            if nw <= 1 && nh <= 1 {
                break;
            }
            let blurred = smooth(prev, options.sigma_pyr, options.stencil);
            levels.push(downsample_by_two(&blurred, nw, nh));
        }

        Self { levels }
    }

    /// Build an all-zero pyramid with the shape chain `image` would produce.
    pub fn skeleton(w: usize, h: usize) -> Self {
        let mut levels = vec![GrayF32::new(w, h)];
        while levels.len() < MAX_LEVELS {
            let (pw, ph) = {
                let prev = levels.last().expect("previous level available");
                (prev.w, prev.h)
            };
            let (nw, nh) = (pw.div_ceil(2), ph.div_ceil(2));
            if nw <= 1 && nh <= 1 {
                break;
            }
            levels.push(GrayF32::new(nw, nh));
        }
        Self { levels }
    }

    /// Averaged discrete Laplacian response at `(x, y)` of the given octave.
    ///
    /// Evaluates the 5-point stencil `(4·L(0,0) + L(±1,0) + L(0,±1)) / 8`
    /// where each `L` is the clamped-boundary discrete Laplacian at the
    /// rounded position. An out-of-range octave yields `-∞`; callers take
    /// the magnitude, so responses beyond the pyramid read as infinitely
    /// strong and reject the candidate.
    pub fn laplacian(&self, octave: i32, x: f32, y: f32) -> f32 {
        if octave < 0 || octave as usize >= self.levels.len() {
            return f32::NEG_INFINITY;
        }
        let img = &self.levels[octave as usize];
        let at = |dx: f32, dy: f32| {
            discrete_laplacian(img, (x + dx).round() as i64, (y + dy).round() as i64)
        };
        (4.0 * at(0.0, 0.0) + at(1.0, 0.0) + at(0.0, 1.0) + at(-1.0, 0.0) + at(0.0, -1.0)) / 8.0
    }
}

/// `-4c + n + s + e + w` with replicate boundary.
#[inline]
fn discrete_laplacian(img: &GrayF32, i: i64, j: i64) -> f32 {
    -4.0 * img.get_clamped(i, j)
        + img.get_clamped(i + 1, j)
        + img.get_clamped(i, j + 1)
        + img.get_clamped(i - 1, j)
        + img.get_clamped(i, j - 1)
}

/// Nearest-neighbor decimation by two with replicate addressing.
fn downsample_by_two(src: &GrayF32, nw: usize, nh: usize) -> GrayF32 {
    let mut out = GrayF32::new(nw, nh);
    for y in 0..nh {
        let sy = (2 * y).min(src.h - 1);
        let src_row = src.row(sy);
        let dst_row = out.row_mut(y);
        for (x, dst) in dst_row.iter_mut().enumerate() {
            let sx = (2 * x).min(src.w - 1);
            *dst = src_row[sx];
        }
    }
    out
}
