//! Shared record types and the flat-array compatibility layout.

use serde::{Deserialize, Serialize};

/// A scale-characterized keypoint in level-0 pixel coordinates.
///
/// `scale` is the characteristic pixel radius (`2^level` of the detecting
/// pyramid level); `score` is the Hessian trace at detection.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub score: f32,
}

impl Keypoint {
    #[inline]
    pub fn position(&self) -> [f32; 2] {
        [self.x, self.y]
    }
}

/// A straight line `a·x + b·y + c = 0`.
///
/// The line-fitting plugins keep `(a, b)` at unit length; nothing else in
/// the crate assumes a particular normalization.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl Line {
    #[inline]
    /// Signed algebraic residual of a point against the line.
    pub fn eval(&self, x: f32, y: f32) -> f32 {
        self.a * x + self.b * y + self.c
    }
}

/// Flatten keypoints into the stride-4 `[x, y, scale, score]` layout that
/// external collaborators consume. Field order is a compatibility surface
/// and must not change.
pub fn keypoints_to_flat(points: &[Keypoint]) -> Vec<f32> {
    let mut out = Vec::with_capacity(4 * points.len());
    for p in points {
        out.extend_from_slice(&[p.x, p.y, p.scale, p.score]);
    }
    out
}

/// Inverse of [`keypoints_to_flat`]. The buffer length must be a multiple
/// of four (programming error otherwise).
pub fn keypoints_from_flat(flat: &[f32]) -> Vec<Keypoint> {
    assert!(
        flat.len() % 4 == 0,
        "flat keypoint buffer length {} is not a multiple of 4",
        flat.len()
    );
    flat.chunks_exact(4)
        .map(|c| Keypoint {
            x: c[0],
            y: c[1],
            scale: c[2],
            score: c[3],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_layout_preserves_field_order() {
        let kp = Keypoint {
            x: 1.0,
            y: 2.0,
            scale: 4.0,
            score: 8.0,
        };
        let flat = keypoints_to_flat(&[kp]);
        assert_eq!(flat, vec![1.0, 2.0, 4.0, 8.0]);
        let back = keypoints_from_flat(&flat);
        assert_eq!(back, vec![kp]);
    }

    #[test]
    #[should_panic(expected = "not a multiple of 4")]
    fn ragged_flat_buffer_is_a_programming_error() {
        keypoints_from_flat(&[1.0, 2.0, 3.0]);
    }
}
