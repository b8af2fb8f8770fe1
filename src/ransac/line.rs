//! Straight-line plugins for the robust estimator.
//!
//! Model generation builds the line through a pair of points with its
//! normal — the 90°-rotated direction vector — kept at unit length, and
//! reports degeneracy for coincident points. Scoring normalizes `(a, b)`
//! again before taking `|a·x + b·y + c|`, so it is meaningful for any
//! non-degenerate line regardless of origin.

use super::{ransac_fit, Estimator, RansacFit, RansacOptions};
use crate::types::Line;

/// Point-pair → line generation and point → line-distance scoring.
pub struct LineEstimator;

impl Estimator for LineEstimator {
    type Datum = [f32; 2];
    type Model = Line;

    const MIN_SAMPLES: usize = 2;

    fn generate(data: &[[f32; 2]], sample_indices: &[usize]) -> Option<Line> {
        let [ax, ay] = data[sample_indices[0]];
        let [bx, by] = data[sample_indices[1]];
        line_through_two_points([ax, ay], [bx, by])
    }

    fn residual(model: &Line, datum: &[f32; 2]) -> f32 {
        point_to_line_distance(model, *datum)
    }
}

/// Unit-normal line through two points; `None` when they coincide.
pub fn line_through_two_points(p: [f32; 2], q: [f32; 2]) -> Option<Line> {
    let n = (q[0] - p[0]).hypot(q[1] - p[1]);
    if n == 0.0 {
        return None;
    }
    let a = -(q[1] - p[1]) / n;
    let b = (q[0] - p[0]) / n;
    Some(Line {
        a,
        b,
        c: -(a * p[0] + b * p[1]),
    })
}

/// Distance from a point to a line after normalizing `(a, b)` to unit
/// length.
pub fn point_to_line_distance(line: &Line, point: [f32; 2]) -> f32 {
    let n = line.a.hypot(line.b);
    (line.eval(point[0], point[1]) / n).abs()
}

/// Result of a robust line fit.
#[derive(Clone, Debug)]
pub struct LineFit {
    pub line: Line,
    /// One flag per input point, aligned by index.
    pub inlier_mask: Vec<bool>,
    pub num_inliers: usize,
}

/// Fit the dominant line through a point set.
///
/// Returns `None` when fewer than two points exist or every trial drew a
/// degenerate sample. The minimum-inlier gate is the caller's business.
pub fn fit_line(points: &[[f32; 2]], options: &RansacOptions) -> Option<LineFit> {
    ransac_fit::<LineEstimator>(points, options).map(
        |RansacFit {
             model,
             inlier_mask,
             num_inliers,
             ..
         }| LineFit {
            line: model,
            inlier_mask,
            num_inliers,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn line_passes_through_its_generating_points() {
        let p = [1.0, 2.0];
        let q = [4.0, 6.0];
        let line = line_through_two_points(p, q).expect("distinct points");
        assert_relative_eq!(point_to_line_distance(&line, p), 0.0, epsilon = 1e-5);
        assert_relative_eq!(point_to_line_distance(&line, q), 0.0, epsilon = 1e-5);
        assert_relative_eq!(line.a.hypot(line.b), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn coincident_points_are_degenerate() {
        assert!(line_through_two_points([3.0, 3.0], [3.0, 3.0]).is_none());
    }

    #[test]
    fn distance_is_invariant_to_line_scaling() {
        let line = Line {
            a: 0.0,
            b: 2.0,
            c: -8.0,
        }; // y = 4, scaled by 2
        assert_relative_eq!(point_to_line_distance(&line, [0.0, 7.0]), 3.0, epsilon = 1e-6);
    }

    #[test]
    fn recovers_a_planted_line_among_outliers() {
        // y = 0.5 x + 10, x = 0..30, plus outliers at least 3px off the line
        let mut points: Vec<[f32; 2]> =
            (0..30).map(|i| [i as f32, 0.5 * i as f32 + 10.0]).collect();
        let planted = points.len();
        points.extend([
            [2.0, 40.0],
            [25.0, 1.0],
            [9.0, 30.0],
            [14.0, 2.0],
            [28.0, 45.0],
            [1.0, 0.0],
        ]);

        let options = RansacOptions {
            trials: 500,
            inlier_threshold: 1.5,
            seed: 7,
        };
        let fit = fit_line(&points, &options).expect("fit should succeed");
        assert_eq!(fit.num_inliers, planted);
        assert!(fit.inlier_mask[..planted].iter().all(|&m| m));
        assert!(!fit.inlier_mask[planted..].iter().any(|&m| m));
        for p in &points[..planted] {
            assert!(point_to_line_distance(&fit.line, *p) < 1.5);
        }
    }

    #[test]
    fn single_point_reports_failure() {
        let options = RansacOptions::default();
        assert!(fit_line(&[[1.0, 1.0]], &options).is_none());
    }
}
