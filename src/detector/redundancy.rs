//! Multiscale redundancy removal.
//!
//! The input is assumed approximately scale-descending (coarse first), as
//! produced by the multiscale orchestrator; the precondition is not
//! verified. Entry `i` is dropped when ANY later entry `j` lies within two
//! octaves (`|log2 sᵢ − log2 sⱼ| < 3`) and closer than the larger of the two
//! scales. Only earlier entries can be dropped, so of a redundant
//! coarse/fine pair the finer one survives. This is deliberately not
//! score-based non-maximum suppression.

use crate::types::Keypoint;

/// Keep the subset of `points` that no later entry makes redundant. O(n²).
pub fn remove_redundant(points: &[Keypoint]) -> Vec<Keypoint> {
    let mut out = Vec::with_capacity(points.len());
    for (i, a) in points.iter().enumerate() {
        let shadowed = points[i + 1..].iter().any(|b| is_redundant(a, b));
        if !shadowed {
            out.push(*a);
        }
    }
    out
}

#[inline]
fn is_redundant(a: &Keypoint, b: &Keypoint) -> bool {
    let d = (a.x - b.x).hypot(a.y - b.y);
    let s = a.scale.max(b.scale);
    (a.scale.log2() - b.scale.log2()).abs() < 3.0 && d < s
}
