//! Circle shape.

use glam::Vec2;

use crate::math::{Aabb, Transform2d};

#[derive(Debug, Clone, Copy, Default)]
pub struct CircleShape {
    center: Vec2,
    radius: f32,
    world_center: Vec2,
}

impl CircleShape {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self {
            center,
            radius,
            world_center: center,
        }
    }

    pub fn update(&mut self, xf: &Transform2d) -> Aabb {
        self.world_center = xf.transform_vector(self.center);
        Aabb::new(self.world_center, self.world_center).expanded(self.radius)
    }

    /// True if `point` is inside or on the circle.
    #[inline]
    pub fn test_point(&self, point: Vec2) -> bool {
        self.world_center.distance_squared(point) <= self.radius * self.radius
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn world_center(&self) -> Vec2 {
        self.world_center
    }
}
