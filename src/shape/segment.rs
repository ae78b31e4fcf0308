//! Line segment with a radius (a capsule), optionally chained into a polyline.

use glam::Vec2;

use crate::error::CollisionError;
use crate::math::{Aabb, Transform2d};
use crate::shape::ShapeType;

/// Segment from `a` to `b`, thickened by `radius`.
///
/// The local normal is derived whenever the endpoints change, never during
/// [`SegmentShape::update`].
#[derive(Debug, Clone, Default)]
pub struct SegmentShape {
    a: Vec2,
    b: Vec2,
    radius: f32,
    normal: Vec2,
    world_a: Vec2,
    world_b: Vec2,
    world_normal: Vec2,
    start_tangent: Vec2,
    end_tangent: Vec2,
}

impl SegmentShape {
    /// Zero-length segments are accepted and behave as a circle of `radius`.
    pub fn new(a: Vec2, b: Vec2, radius: f32) -> Self {
        let mut segment = Self {
            radius,
            ..Self::default()
        };
        segment.set_endpoints(a, b);
        segment.world_a = a;
        segment.world_b = b;
        segment.world_normal = segment.normal;
        segment
    }

    /// Move the endpoints and recompute the local normal.
    ///
    /// World-space fields keep their old values until the next update.
    pub fn set_endpoints(&mut self, a: Vec2, b: Vec2) {
        self.a = a;
        self.b = b;
        self.normal = (b - a).normalize_or_zero().perp();
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
    }

    /// Record the neighbouring chain vertices: the vertex before `a` and the
    /// vertex after `b`.
    pub fn set_neighbors(&mut self, prev: Vec2, next: Vec2) {
        self.start_tangent = prev - self.a;
        self.end_tangent = next - self.b;
    }

    /// Recompute world endpoints and normal, returning the world bounding box.
    pub fn update(&mut self, xf: &Transform2d) -> Aabb {
        self.world_a = xf.transform_vector(self.a);
        self.world_b = xf.transform_vector(self.b);
        self.world_normal = xf.rotate_vector(self.normal);

        Aabb::new(
            self.world_a.min(self.world_b),
            self.world_a.max(self.world_b),
        )
        .expanded(self.radius)
    }

    /// Segments have no point test.
    pub fn test_point(&self, _point: Vec2) -> Result<bool, CollisionError> {
        Err(CollisionError::PointTestUnsupported(ShapeType::Segment))
    }

    #[inline]
    pub fn a(&self) -> Vec2 {
        self.a
    }

    #[inline]
    pub fn b(&self) -> Vec2 {
        self.b
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Left-hand unit normal of `b - a` in local space.
    pub fn normal(&self) -> Vec2 {
        self.normal
    }

    pub fn world_a(&self) -> Vec2 {
        self.world_a
    }

    pub fn world_b(&self) -> Vec2 {
        self.world_b
    }

    pub fn world_normal(&self) -> Vec2 {
        self.world_normal
    }

    pub fn start_tangent(&self) -> Vec2 {
        self.start_tangent
    }

    pub fn end_tangent(&self) -> Vec2 {
        self.end_tangent
    }
}

/// Link consecutive segments of a polyline through their tangents.
///
/// The first segment's start and the last segment's end keep a zero tangent.
pub fn link_chain(segments: &mut [SegmentShape]) {
    let n = segments.len();
    for i in 0..n {
        let prev = if i > 0 {
            segments[i - 1].a
        } else {
            segments[i].a
        };
        let next = if i + 1 < n {
            segments[i + 1].b
        } else {
            segments[i].b
        };
        segments[i].set_neighbors(prev, next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_segment_aabb() {
        let mut seg = SegmentShape::new(Vec2::ZERO, Vec2::new(4.0, 0.0), 1.0);
        let aabb = seg.update(&Transform2d::IDENTITY);
        assert_eq!(aabb.lower, Vec2::new(-1.0, -1.0));
        assert_eq!(aabb.upper, Vec2::new(5.0, 1.0));
    }

    #[test]
    fn test_normal_computed_on_construction() {
        let seg = SegmentShape::new(Vec2::ZERO, Vec2::new(4.0, 0.0), 0.5);
        assert_eq!(seg.normal(), Vec2::Y);
        assert_eq!(seg.world_normal(), Vec2::Y);
    }

    #[test]
    fn test_update_leaves_local_fields() {
        let mut seg = SegmentShape::new(Vec2::new(1.0, 1.0), Vec2::new(1.0, 3.0), 0.0);
        let xf = Transform2d::new(Vec2::new(5.0, 0.0), 0.3);
        seg.update(&xf);
        seg.update(&xf);
        assert_eq!(seg.a(), Vec2::new(1.0, 1.0));
        assert_eq!(seg.b(), Vec2::new(1.0, 3.0));
        assert_eq!(seg.normal(), Vec2::NEG_X);
    }

    #[test]
    fn test_rotated_update() {
        let mut seg = SegmentShape::new(Vec2::ZERO, Vec2::new(2.0, 0.0), 0.25);
        let aabb = seg.update(&Transform2d::new(Vec2::new(1.0, 1.0), FRAC_PI_2));

        let eps = 1e-5;
        assert!((seg.world_a() - Vec2::new(1.0, 1.0)).length() < eps);
        assert!((seg.world_b() - Vec2::new(1.0, 3.0)).length() < eps);
        assert!((seg.world_normal() - Vec2::NEG_X).length() < eps);
        assert!((aabb.lower - Vec2::new(0.75, 0.75)).length() < eps);
        assert!((aabb.upper - Vec2::new(1.25, 3.25)).length() < eps);
    }

    #[test]
    fn test_degenerate_segment_is_a_circle() {
        let mut seg = SegmentShape::new(Vec2::ONE, Vec2::ONE, 2.0);
        assert_eq!(seg.normal(), Vec2::ZERO);
        let aabb = seg.update(&Transform2d::IDENTITY);
        assert_eq!(aabb.lower, Vec2::new(-1.0, -1.0));
        assert_eq!(aabb.upper, Vec2::new(3.0, 3.0));
    }

    #[test]
    fn test_point_unsupported() {
        let seg = SegmentShape::new(Vec2::ZERO, Vec2::X, 1.0);
        assert_eq!(
            seg.test_point(Vec2::ZERO),
            Err(CollisionError::PointTestUnsupported(ShapeType::Segment))
        );
    }

    #[test]
    fn test_link_chain() {
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(4.0, 1.0),
            Vec2::new(6.0, 1.0),
        ];
        let mut chain: Vec<SegmentShape> = points
            .windows(2)
            .map(|w| SegmentShape::new(w[0], w[1], 0.1))
            .collect();
        link_chain(&mut chain);

        assert_eq!(chain[0].start_tangent(), Vec2::ZERO);
        assert_eq!(chain[0].end_tangent(), Vec2::new(2.0, 1.0));
        assert_eq!(chain[1].start_tangent(), Vec2::new(-2.0, 0.0));
        assert_eq!(chain[1].end_tangent(), Vec2::new(2.0, 0.0));
        assert_eq!(chain[2].start_tangent(), Vec2::new(-2.0, -1.0));
        assert_eq!(chain[2].end_tangent(), Vec2::ZERO);
    }
}
