//! Collision shapes and the tagged wrapper the rest of the engine stores.
//!
//! # Per-step flow
//!
//! 1. The stepping loop computes a body transform
//! 2. [`Shape::update`] refreshes the world-space caches of the payload
//! 3. The returned [`Aabb`] goes to the broad-phase
//! 4. Narrow-phase code reads axes/vertices through [`Shape::as_polygon`]
//!
//! Queries issued before the first update, or after the body moved without
//! an update, read stale geometry. Each shape owns all of its caches, so
//! distinct shapes can be updated in parallel by an external scheduler.

pub mod circle;
pub mod polygon;
pub mod segment;

use glam::Vec2;

use crate::error::CollisionError;
use crate::math::{Aabb, Transform2d};

pub use circle::CircleShape;
pub use polygon::{PolygonAxis, PolygonShape};
pub use segment::{link_chain, SegmentShape};

/// Discriminator of a [`Shape`] payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeType {
    Circle,
    Segment,
    Polygon,
}

/// Concrete shape payload.
#[derive(Debug, Clone)]
pub enum ShapeKind {
    Circle(CircleShape),
    Segment(SegmentShape),
    Polygon(PolygonShape),
}

impl ShapeKind {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            ShapeKind::Circle(_) => ShapeType::Circle,
            ShapeKind::Segment(_) => ShapeType::Segment,
            ShapeKind::Polygon(_) => ShapeType::Polygon,
        }
    }

    /// Refresh the payload's world-space caches.
    #[inline]
    pub fn update(&mut self, xf: &Transform2d) -> Aabb {
        match self {
            ShapeKind::Circle(circle) => circle.update(xf),
            ShapeKind::Segment(segment) => segment.update(xf),
            ShapeKind::Polygon(poly) => poly.update(xf),
        }
    }

    pub fn test_point(&self, point: Vec2) -> Result<bool, CollisionError> {
        match self {
            ShapeKind::Circle(circle) => Ok(circle.test_point(point)),
            ShapeKind::Segment(segment) => segment.test_point(point),
            ShapeKind::Polygon(poly) => Ok(poly.test_point(point)),
        }
    }
}

/// Per-shape behaviour switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShapeConfig {
    /// Re-run the last update after local geometry is replaced through the
    /// wrapper. Default: false, callers update explicitly.
    pub auto_update: bool,
}

/// A collision shape: one payload plus the results of its latest update.
#[derive(Debug, Clone)]
pub struct Shape {
    kind: ShapeKind,
    aabb: Aabb,
    transform: Option<Transform2d>,
    config: ShapeConfig,
}

impl Shape {
    pub fn from_kind(kind: ShapeKind) -> Self {
        Self {
            kind,
            aabb: Aabb::INVERTED,
            transform: None,
            config: ShapeConfig::default(),
        }
    }

    /// Polygon from `vertices` shifted by `offset`. Fails on an empty list.
    pub fn polygon(vertices: &[Vec2], offset: Vec2) -> Result<Self, CollisionError> {
        PolygonShape::new(vertices, offset).map(|poly| Self::from_kind(ShapeKind::Polygon(poly)))
    }

    /// Axis-aligned box polygon centred on `offset`.
    pub fn new_box(size: Vec2, offset: Vec2) -> Result<Self, CollisionError> {
        PolygonShape::new_box(size, offset).map(|poly| Self::from_kind(ShapeKind::Polygon(poly)))
    }

    pub fn segment(a: Vec2, b: Vec2, radius: f32) -> Self {
        Self::from_kind(ShapeKind::Segment(SegmentShape::new(a, b, radius)))
    }

    pub fn circle(center: Vec2, radius: f32) -> Self {
        Self::from_kind(ShapeKind::Circle(CircleShape::new(center, radius)))
    }

    pub fn with_config(mut self, config: ShapeConfig) -> Self {
        self.config = config;
        self
    }

    #[inline]
    pub fn shape_type(&self) -> ShapeType {
        self.kind.shape_type()
    }

    /// Apply `xf`, cache it and the resulting bounding box, and return the box.
    pub fn update(&mut self, xf: &Transform2d) -> Aabb {
        self.aabb = self.kind.update(xf);
        self.transform = Some(*xf);
        self.aabb
    }

    /// Point containment in world space.
    ///
    /// Returns [`CollisionError::PointTestUnsupported`] for segments.
    pub fn test_point(&self, point: Vec2) -> Result<bool, CollisionError> {
        self.kind.test_point(point)
    }

    /// Box from the most recent update; [`Aabb::INVERTED`] before the first.
    pub fn aabb(&self) -> Aabb {
        self.aabb
    }

    /// Transform passed to the most recent update.
    pub fn transform(&self) -> Option<&Transform2d> {
        self.transform.as_ref()
    }

    pub fn config(&self) -> &ShapeConfig {
        &self.config
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    pub fn as_polygon(&self) -> Option<&PolygonShape> {
        match &self.kind {
            ShapeKind::Polygon(poly) => Some(poly),
            _ => None,
        }
    }

    pub fn as_segment(&self) -> Option<&SegmentShape> {
        match &self.kind {
            ShapeKind::Segment(segment) => Some(segment),
            _ => None,
        }
    }

    pub fn as_circle(&self) -> Option<&CircleShape> {
        match &self.kind {
            ShapeKind::Circle(circle) => Some(circle),
            _ => None,
        }
    }

    /// Replace a polygon's vertex ring.
    ///
    /// Empty input leaves the shape untouched and returns
    /// [`CollisionError::NoVertices`].
    pub fn set_polygon_vertices(
        &mut self,
        vertices: &[Vec2],
        offset: Vec2,
    ) -> Result<(), CollisionError> {
        let found = self.shape_type();
        let ShapeKind::Polygon(poly) = &mut self.kind else {
            return Err(CollisionError::ShapeMismatch {
                expected: ShapeType::Polygon,
                found,
            });
        };
        poly.set_vertices(vertices, offset)?;
        self.refresh();
        Ok(())
    }

    /// Move a segment's endpoints.
    pub fn set_segment_endpoints(&mut self, a: Vec2, b: Vec2) -> Result<(), CollisionError> {
        self.segment_mut()?.set_endpoints(a, b);
        self.refresh();
        Ok(())
    }

    pub fn set_segment_radius(&mut self, radius: f32) -> Result<(), CollisionError> {
        self.segment_mut()?.set_radius(radius);
        self.refresh();
        Ok(())
    }

    /// Record a segment's chain neighbours. See [`SegmentShape::set_neighbors`].
    pub fn set_segment_neighbors(&mut self, prev: Vec2, next: Vec2) -> Result<(), CollisionError> {
        self.segment_mut()?.set_neighbors(prev, next);
        self.refresh();
        Ok(())
    }

    fn segment_mut(&mut self) -> Result<&mut SegmentShape, CollisionError> {
        let found = self.shape_type();
        match &mut self.kind {
            ShapeKind::Segment(segment) => Ok(segment),
            _ => Err(CollisionError::ShapeMismatch {
                expected: ShapeType::Segment,
                found,
            }),
        }
    }

    fn refresh(&mut self) {
        if !self.config.auto_update {
            return;
        }
        if let Some(xf) = self.transform {
            self.aabb = self.kind.update(&xf);
        }
    }
}

impl From<PolygonShape> for Shape {
    fn from(poly: PolygonShape) -> Self {
        Self::from_kind(ShapeKind::Polygon(poly))
    }
}

impl From<SegmentShape> for Shape {
    fn from(segment: SegmentShape) -> Self {
        Self::from_kind(ShapeKind::Segment(segment))
    }
}

impl From<CircleShape> for Shape {
    fn from(circle: CircleShape) -> Self {
        Self::from_kind(ShapeKind::Circle(circle))
    }
}
