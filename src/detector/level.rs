//! Single-level Harris-Hessian candidate scan with subpixel refinement.
//!
//! Scans interior pixels (margin 2) in row-major order. The polarity sign is
//! applied to the whole 3×3 neighborhood up front: κ > 0 selects dark
//! features, κ < 0 bright ones, and κ is used as |κ| afterwards. A pixel
//! survives only if no signed neighbor falls below the signed center (ties
//! survive here and die at the trace threshold on flat patches). Acceptance
//! requires `T = dxx + dyy > τ` and `D - κ·T² > 0`.
//!
//! When the output capacity is reached the scan stops early, so completeness
//! under saturation is scan-order-dependent. That is a documented property
//! of the detector, not a bug.

use crate::image::GrayF32;

/// A candidate in level-local (subpixel) coordinates.
#[derive(Clone, Copy, Debug)]
pub struct LevelCandidate {
    pub x: f32,
    pub y: f32,
    /// Hessian trace at the detection
    pub score: f32,
}

/// Scan one pyramid level, returning at most `max_points` candidates.
pub fn detect_level(img: &GrayF32, kappa: f32, tau: f32, max_points: usize) -> Vec<LevelCandidate> {
    let mut out = Vec::new();
    if img.w < 5 || img.h < 5 || max_points == 0 {
        return out;
    }

    let sign = if kappa > 0.0 { 1.0 } else { -1.0 };
    let kappa = kappa.abs();

    'scan: for j in 2..img.h - 2 {
        let row_m = img.row(j - 1);
        let row_0 = img.row(j);
        let row_p = img.row(j + 1);
        for i in 2..img.w - 2 {
            // vmm v0m vpm
            // vm0 v00 vp0
            // vmp v0p vpp
            let vmm = sign * row_m[i - 1];
            let v0m = sign * row_m[i];
            let vpm = sign * row_m[i + 1];
            let vm0 = sign * row_0[i - 1];
            let v00 = sign * row_0[i];
            let vp0 = sign * row_0[i + 1];
            let vmp = sign * row_p[i - 1];
            let v0p = sign * row_p[i];
            let vpp = sign * row_p[i + 1];

            if v0m < v00
                || vm0 < v00
                || v0p < v00
                || vp0 < v00
                || vmm < v00
                || vpp < v00
                || vmp < v00
                || vpm < v00
            {
                continue;
            }

            let dxx = vm0 - 2.0 * v00 + vp0;
            let dyy = v0m - 2.0 * v00 + v0p;
            // Known directional aliasing in these two schemes; kept as-is.
            let dxy = (vpp + vmm - vpm - vmp) / 4.0;
            let dyx = -(vpm + vmp - vpp - vmm) / 4.0;

            let trace = dxx + dyy;
            let det = dxx * dyy - dxy * dyx;
            if trace > tau && det - kappa * trace * trace > 0.0 {
                out.push(LevelCandidate {
                    x: i as f32 + parabolic_minimum(vm0, v00, vp0),
                    y: j as f32 + parabolic_minimum(v0m, v00, v0p),
                    score: trace,
                });
                if out.len() >= max_points {
                    break 'scan;
                }
            }
        }
    }
    out
}

/// Vertex offset of a parabola through samples at offsets −1, 0, +1 of a
/// presumed-unimodal quantity.
///
/// With three finite samples the fit returns `0.5·(p−r) / ((p+r)/2 − q)`;
/// a degenerate or non-concave vertex (|R| > 0.5, including the NaN from an
/// all-equal triple) falls back to a direct comparison of `p` and `r`.
/// Partially-finite inputs resolve by comparing the finite samples:
/// `(p, q)` finite → `p < q ? −1 : 0`; `(q, r)` finite → `q < r ? 0 : 1`;
/// only `q` → 0; only `p` → −1; only `r` → +1; none finite → NaN.
pub fn parabolic_minimum(p: f32, q: f32, r: f32) -> f32 {
    match (p.is_finite(), q.is_finite(), r.is_finite()) {
        (true, true, true) => {
            let alpha = (p + r) / 2.0 - q;
            let beta = (p - r) / 2.0;
            let vertex = 0.5 * beta / alpha;
            if vertex.abs() <= 0.5 {
                vertex
            } else if p < r {
                -1.0
            } else if r < p {
                1.0
            } else {
                0.0
            }
        }
        (true, true, false) => {
            if p < q {
                -1.0
            } else {
                0.0
            }
        }
        (false, true, true) => {
            if q < r {
                0.0
            } else {
                1.0
            }
        }
        (false, true, false) => 0.0,
        (true, false, false) => -1.0,
        (false, false, true) => 1.0,
        _ => f32::NAN,
    }
}
