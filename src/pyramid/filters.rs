//! Hand-built Gaussian smoothing stencils.
//!
//! Weights are `exp(-d² / 2σ²)` sampled at integer stencil offsets and
//! normalized by their sum, so a vanishing σ degenerates to the identity.
//! Only interior pixels are convolved (margin 1 for 3×3, 2 for 5×5); border
//! pixels are copied through from the input unchanged, which keeps the
//! result deterministic at every size.

use crate::image::GrayF32;
use serde::{Deserialize, Serialize};

/// Stencil footprint used for the Gaussian smoothing passes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StencilSize {
    /// 3×3 window, margin 1
    #[default]
    Three,
    /// 5×5 window, margin 2
    Five,
}

/// Smooth `src` with a Gaussian stencil of the requested footprint.
pub fn smooth(src: &GrayF32, sigma: f32, stencil: StencilSize) -> GrayF32 {
    match stencil {
        StencilSize::Three => smooth_3x3(src, sigma),
        StencilSize::Five => smooth_5x5(src, sigma),
    }
}

/// 3×3 Gaussian smoothing with copy-through borders.
pub fn smooth_3x3(src: &GrayF32, sigma: f32) -> GrayF32 {
    let mut out = src.clone();
    if src.w < 3 || src.h < 3 {
        return out;
    }

    let (k, kn) = build_stencil::<3>(sigma);
    for y in 1..src.h - 1 {
        for x in 1..src.w - 1 {
            let mut acc = 0.0;
            for (dy, krow) in k.iter().enumerate() {
                let row = src.row(y + dy - 1);
                for (dx, &kw) in krow.iter().enumerate() {
                    acc += kw * row[x + dx - 1];
                }
            }
            out.set(x, y, acc / kn);
        }
    }
    out
}

/// 5×5 Gaussian smoothing with copy-through borders.
pub fn smooth_5x5(src: &GrayF32, sigma: f32) -> GrayF32 {
    let mut out = src.clone();
    if src.w < 5 || src.h < 5 {
        return out;
    }

    let (k, kn) = build_stencil::<5>(sigma);
    for y in 2..src.h - 2 {
        for x in 2..src.w - 2 {
            let mut acc = 0.0;
            for (dy, krow) in k.iter().enumerate() {
                let row = src.row(y + dy - 2);
                for (dx, &kw) in krow.iter().enumerate() {
                    acc += kw * row[x + dx - 2];
                }
            }
            out.set(x, y, acc / kn);
        }
    }
    out
}

/// Build an `N×N` stencil of unnormalized Gaussian weights and their sum.
fn build_stencil<const N: usize>(sigma: f32) -> ([[f32; N]; N], f32) {
    let half = (N / 2) as i32;
    let inv = 1.0 / (2.0 * sigma * sigma);
    let mut k = [[0.0f32; N]; N];
    let mut kn = 0.0;
    for dy in 0..N {
        for dx in 0..N {
            let dd = ((dx as i32 - half).pow(2) + (dy as i32 - half).pow(2)) as f32;
            // dd == 0 avoids 0·∞ when σ → 0, where the stencil degenerates
            // to the identity
            let w = if dd == 0.0 { 1.0 } else { (-dd * inv).exp() };
            k[dy][dx] = w;
            kn += w;
        }
    }
    (k, kn)
}
