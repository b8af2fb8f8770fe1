//! Projective geometry primitives: line/segment/rectangle intersection and
//! pixel-segment traversal.
//!
//! Lines and points are handled in homogeneous coordinates (`f64`,
//! [`nalgebra::Vector3`]); intersections are cross products projected back
//! to affine coordinates. The affine division is deliberately unguarded —
//! parallel-at-infinity or otherwise ill-conditioned input yields Inf/NaN
//! components, which downstream consumers must tolerate (the rectangle clip
//! simply fails to find two finite crossings in that case).

use crate::types::Line;
use nalgebra::Vector3;

/// Lift a line `a·x + b·y + c = 0` into homogeneous coordinates.
#[inline]
pub fn line_homogeneous(line: &Line) -> Vector3<f64> {
    Vector3::new(line.a as f64, line.b as f64, line.c as f64)
}

#[inline]
fn point_homogeneous(p: [f64; 2]) -> Vector3<f64> {
    Vector3::new(p[0], p[1], 1.0)
}

/// Crossing point of a line with the segment `p`–`q`, if the segment's
/// endpoints lie strictly on opposite sides of the line.
///
/// The crossing is the cross product of the segment's own line with the
/// query line; the division by the homogeneous coordinate is unguarded.
pub fn intersect_line_segment(
    line: &Vector3<f64>,
    p: [f64; 2],
    q: [f64; 2],
) -> Option<[f64; 2]> {
    let pp = point_homogeneous(p);
    let qq = point_homogeneous(q);

    // sides of the line the two endpoints fall on
    let sp = pp.dot(line);
    let sq = qq.dot(line);
    if sp * sq >= 0.0 {
        return None;
    }

    let pq = pp.cross(&qq);
    let ii = pq.cross(line);
    Some([ii.x / ii.z, ii.y / ii.z])
}

/// Crossing point of two lines. Unguarded: parallel lines yield Inf/NaN.
pub fn intersect_lines(l: &Vector3<f64>, m: &Vector3<f64>) -> [f64; 2] {
    let p = l.cross(m);
    [p.x / p.z, p.y / p.z]
}

/// Clip a line to an axis-aligned rectangle spanning `min`..`max`.
///
/// Walks the four edges in cyclic order and succeeds iff exactly two edge
/// crossings exist. Any other count — the line missing the rectangle,
/// grazing a corner exactly, or collinear with an edge — reports no
/// segment rather than disambiguating.
pub fn clip_line_to_rect(
    line: &Line,
    min: [f64; 2],
    max: [f64; 2],
) -> Option<([f64; 2], [f64; 2])> {
    let l = line_homogeneous(line);
    let corners = [
        [min[0], min[1]],
        [max[0], min[1]],
        [max[0], max[1]],
        [min[0], max[1]],
    ];

    let mut hits: Vec<[f64; 2]> = Vec::with_capacity(4);
    for i in 0..4 {
        if let Some(p) = intersect_line_segment(&l, corners[i], corners[(i + 1) % 4]) {
            hits.push(p);
        }
    }
    (hits.len() == 2).then(|| (hits[0], hits[1]))
}

/// Whether integer pixel `(i, j)` lies inside a `w × h` raster.
#[inline]
pub fn inside(w: i32, h: i32, i: i32, j: i32) -> bool {
    i >= 0 && j >= 0 && i < w && j < h
}

/// Visit the integer pixels between two endpoints.
///
/// Steps along the majority axis with a float slope, rounding the minor
/// coordinate. Endpoints are swapped once so stepping always increases
/// `x + y`; the horizontal branch excludes the far endpoint while the
/// vertical branch includes it, matching the legacy traversal pixel for
/// pixel. A zero-length segment invokes the callback exactly once.
pub fn traverse_segment(p: [i32; 2], q: [i32; 2], mut visit: impl FnMut(i32, i32)) {
    if p == q {
        visit(p[0], p[1]);
        return;
    }
    let (p, q) = if q[0] + q[1] < p[0] + p[1] { (q, p) } else { (p, q) };
    let [px, py] = p;
    let [qx, qy] = q;

    if qx - px > qy - py || px - qx > qy - py {
        // horizontal-ish
        let slope = (qy - py) as f32 / (qx - px) as f32;
        for i in 0..qx - px {
            visit(px + i, (py as f32 + i as f32 * slope).round() as i32);
        }
    } else {
        // vertical-ish
        let slope = (qx - px) as f32 / (qy - py) as f32;
        for j in 0..=qy - py {
            visit((px as f32 + j as f32 * slope).round() as i32, py + j);
        }
    }
}
