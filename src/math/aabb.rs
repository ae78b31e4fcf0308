//! Axis-aligned bounding box handed to the broad-phase after each update.

use glam::Vec2;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub lower: Vec2,
    pub upper: Vec2,
}

impl Aabb {
    /// Empty box that any `include` call will snap onto the first point.
    pub const INVERTED: Self = Self {
        lower: Vec2::INFINITY,
        upper: Vec2::NEG_INFINITY,
    };

    pub fn new(lower: Vec2, upper: Vec2) -> Self {
        Self { lower, upper }
    }

    /// Smallest box containing every point. `INVERTED` for an empty iterator.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Vec2>,
    {
        points
            .into_iter()
            .fold(Self::INVERTED, |aabb, p| aabb.include(p))
    }

    /// Grow the box to contain `point`.
    #[inline]
    pub fn include(self, point: Vec2) -> Self {
        Self {
            lower: self.lower.min(point),
            upper: self.upper.max(point),
        }
    }

    /// Minkowski sum with a square of half-extent `radius`.
    #[inline]
    pub fn expanded(self, radius: f32) -> Self {
        let r = Vec2::splat(radius);
        Self {
            lower: self.lower - r,
            upper: self.upper + r,
        }
    }

    /// Test whether two boxes overlap. Touching boxes count as overlapping.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.lower.x <= other.upper.x
            && self.upper.x >= other.lower.x
            && self.lower.y <= other.upper.y
            && self.upper.y >= other.lower.y
    }

    #[inline]
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.cmpge(self.lower).all() && point.cmple(self.upper).all()
    }

    pub fn center(&self) -> Vec2 {
        (self.lower + self.upper) * 0.5
    }

    /// Half the size of the box on each axis.
    pub fn extents(&self) -> Vec2 {
        (self.upper - self.lower) * 0.5
    }

    /// `lower <= upper` on both axes.
    pub fn is_valid(&self) -> bool {
        self.lower.cmple(self.upper).all()
    }
}
