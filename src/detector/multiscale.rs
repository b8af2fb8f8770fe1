//! Multiscale orchestration: per-level detection plus cross-octave scale
//! validation.
//!
//! Levels are processed coarsest → finest and positions rescaled to level-0
//! coordinates by `2^level`, so the output is coarse-first with per-level
//! scan order preserved — the redundancy filter depends on that ordering.
//!
//! Scale validation is a local 3-octave check, not an exhaustive scale-space
//! search: a candidate survives only if its own-level Laplacian magnitude is
//! not exceeded by the coarser octave's, nor (except at the finest level) by
//! the finer octave's. Octaves beyond the pyramid read as infinitely strong
//! (see [`Pyramid::laplacian`]), which silently rejects every candidate on
//! the coarsest level.

use log::{debug, warn};

use super::level::{detect_level, parabolic_minimum};
use super::params::DetectorParams;
use crate::image::GrayF32;
use crate::pyramid::{Pyramid, PyramidOptions};
use crate::types::Keypoint;

/// Inter-level smoothing σ of the detection pyramid (half of 2.8).
const PYRAMID_SIGMA: f32 = 1.4;

/// Detect keypoints at every pyramid level with cross-octave validation.
///
/// Returns at most `params.max_points` keypoints; saturation is logged as a
/// non-fatal warning and truncates the finer levels.
pub fn detect_multiscale(image: &GrayF32, params: &DetectorParams) -> Vec<Keypoint> {
    let options = PyramidOptions::default()
        .with_sigma_pre(params.sigma)
        .with_sigma_pyr(PYRAMID_SIGMA)
        .with_stencil(params.stencil);
    let pyramid = Pyramid::build(image, &options);

    let mut out: Vec<Keypoint> = Vec::with_capacity(params.max_points.min(1024));
    for level in (0..pyramid.levels.len()).rev() {
        let budget = params.max_points - out.len();
        if budget == 0 {
            warn!(
                "multiscale detector: capacity {} exhausted before level {}, truncating",
                params.max_points, level
            );
            break;
        }

        let candidates = detect_level(&pyramid.levels[level], params.kappa, params.tau, budget);
        if candidates.len() == budget {
            warn!(
                "multiscale detector: capacity {} reached at level {}, output truncated",
                params.max_points, level
            );
        }

        let octave = level as i32;
        let factor = (1usize << level) as f32;
        let mut kept = 0usize;
        for cand in &candidates {
            let coarser = pyramid.laplacian(octave + 1, cand.x / 2.0, cand.y / 2.0).abs();
            let own = pyramid.laplacian(octave, cand.x, cand.y).abs();
            let finer = pyramid
                .laplacian(octave - 1, cand.x * 2.0, cand.y * 2.0)
                .abs();
            if level > 0 && finer > own {
                continue;
            }
            if coarser > own {
                continue;
            }

            // Sub-octave scale refinement hook; currently weighted to zero,
            // so the emitted scale stays exactly 2^level.
            let shift = 0.0 * parabolic_minimum(-coarser, -own, -finer);
            let scale = factor * (3.0 * shift + 4.0) / 4.0;

            out.push(Keypoint {
                x: factor * cand.x,
                y: factor * cand.y,
                scale,
                score: cand.score,
            });
            kept += 1;
        }
        debug!(
            "multiscale detector: level {} kept {}/{} candidates",
            level,
            kept,
            candidates.len()
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::params::DetectorParams;

    /// Dark 3×3 square centered at (cx, cy) on a bright background.
    fn dark_square(w: usize, h: usize, cx: usize, cy: usize) -> GrayF32 {
        let mut img = GrayF32::from_vec(w, h, vec![200.0; w * h]);
        for dy in 0..3 {
            for dx in 0..3 {
                img.set(cx - 1 + dx, cy - 1 + dy, 0.0);
            }
        }
        img
    }

    #[test]
    fn output_is_capped_and_ordered_coarse_to_fine() {
        let img = dark_square(64, 64, 32, 32);
        let params = DetectorParams::default();
        let found = detect_multiscale(&img, &params);
        assert!(found.len() <= params.max_points);
        for pair in found.windows(2) {
            assert!(
                pair[0].scale >= pair[1].scale,
                "coarse-first ordering violated: {pair:?}"
            );
        }
    }

    #[test]
    fn positions_are_rescaled_to_level_zero() {
        let img = dark_square(64, 64, 32, 32);
        let found = detect_multiscale(&img, &DetectorParams::default());
        assert!(!found.is_empty());
        for kp in &found {
            assert!(
                (kp.x - 32.0).abs() <= kp.scale.max(2.0) && (kp.y - 32.0).abs() <= kp.scale.max(2.0),
                "detection far from the only structure: {kp:?}"
            );
            assert!(kp.score > 0.0);
        }
    }

    #[test]
    fn emitted_scale_is_a_power_of_two() {
        let img = dark_square(64, 64, 32, 32);
        let found = detect_multiscale(&img, &DetectorParams::default());
        for kp in &found {
            let l = kp.scale.log2();
            assert_eq!(l, l.round(), "hook must not alter the octave scale");
        }
    }

    #[test]
    fn max_points_zero_yields_nothing() {
        let img = dark_square(64, 64, 32, 32);
        let params = DetectorParams {
            max_points: 0,
            ..DetectorParams::default()
        };
        assert!(detect_multiscale(&img, &params).is_empty());
    }
}
