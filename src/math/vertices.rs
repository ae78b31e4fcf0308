//! Vertex ring helpers: convexity/winding validation, area and centroid.
//!
//! Polygons are expected in counter-clockwise order. The outward normal of an
//! edge `e` in such a ring is the right-hand perpendicular `(e.y, -e.x)`.

use std::f32::consts::TAU;

use glam::Vec2;

/// Tolerance on the total turning angle of a ring.
const TURNING_TOLERANCE: f32 = 1e-3;

/// Check that `vertices` form a simple convex polygon wound counter-clockwise.
///
/// Fails for fewer than three vertices, any reflex or collinear corner,
/// clockwise winding, and rings that wind more than once (star polygons).
pub fn validate_polygon(vertices: &[Vec2]) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }

    let mut turning = 0.0f32;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        let c = vertices[(i + 2) % n];
        let ab = b - a;
        let bc = c - b;

        let cross = ab.perp_dot(bc);
        if cross <= 0.0 {
            return false;
        }
        turning += ab.angle_to(bc);
    }

    (turning - TAU).abs() < TURNING_TOLERANCE
}

/// Shoelace area. Positive for counter-clockwise rings.
pub fn signed_area(vertices: &[Vec2]) -> f32 {
    let n = vertices.len();
    let twice: f32 = (0..n)
        .map(|i| vertices[i].perp_dot(vertices[(i + 1) % n]))
        .sum();
    twice * 0.5
}

/// Area-weighted centroid. `None` when the ring has no area.
pub fn centroid(vertices: &[Vec2]) -> Option<Vec2> {
    let area = signed_area(vertices);
    if area.abs() <= f32::EPSILON {
        return None;
    }

    let n = vertices.len();
    let sum: Vec2 = (0..n)
        .map(|i| {
            let a = vertices[i];
            let b = vertices[(i + 1) % n];
            (a + b) * a.perp_dot(b)
        })
        .sum();
    Some(sum / (6.0 * area))
}

/// Outward normal of the edge `a -> b` in a counter-clockwise ring.
///
/// Zero for a degenerate (zero-length) edge.
#[inline]
pub(crate) fn edge_normal(a: Vec2, b: Vec2) -> Vec2 {
    let edge = b - a;
    Vec2::new(edge.y, -edge.x).normalize_or_zero()
}
