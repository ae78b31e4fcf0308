//! Convex polygon shape with cached separating axes.
//!
//! Local vertices and axes are authoritative and only change through
//! [`PolygonShape::set_vertices`]. The world-space copies are overwritten in
//! place by every [`PolygonShape::update`] and are only as fresh as the last
//! transform passed in.
//!
//! The SAT queries ([`PolygonShape::contains_vertex`],
//! [`PolygonShape::contains_vertex_partial`], [`PolygonShape::value_on_axis`])
//! are exact for convex, counter-clockwise rings. For rings that failed
//! validation they still return a value but it carries no geometric meaning.

use glam::Vec2;

use crate::error::CollisionError;
use crate::math::vertices::{edge_normal, validate_polygon};
use crate::math::{Aabb, Transform2d};

/// Half-plane `dot(normal, p) <= offset` bounding one polygon edge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PolygonAxis {
    /// Outward unit normal of the edge.
    pub normal: Vec2,
    /// Distance of the edge line from the origin along `normal`.
    pub offset: f32,
}

impl PolygonAxis {
    /// Signed distance of `point` from the edge line. Positive outside.
    #[inline]
    pub fn distance(&self, point: Vec2) -> f32 {
        self.normal.dot(point) - self.offset
    }
}

/// Convex polygon. Axis `i` belongs to the edge from vertex `i` to `i + 1`.
///
/// Always holds at least one vertex: the only constructors are the fallible
/// [`PolygonShape::new`] and [`PolygonShape::new_box`].
#[derive(Debug, Clone)]
pub struct PolygonShape {
    vertices: Vec<Vec2>,
    world_vertices: Vec<Vec2>,
    axes: Vec<PolygonAxis>,
    world_axes: Vec<PolygonAxis>,
    valid: bool,
}

impl PolygonShape {
    /// Build a polygon from `vertices`, each shifted by `offset`.
    ///
    /// Fails only on an empty vertex list. Non-convex or clockwise input is
    /// accepted with a warning; see [`PolygonShape::is_valid`].
    pub fn new(vertices: &[Vec2], offset: Vec2) -> Result<Self, CollisionError> {
        let mut poly = Self {
            vertices: Vec::with_capacity(vertices.len()),
            world_vertices: Vec::new(),
            axes: Vec::with_capacity(vertices.len()),
            world_axes: Vec::new(),
            valid: false,
        };
        poly.set_vertices(vertices, offset)?;
        Ok(poly)
    }

    /// Axis-aligned rectangle of the given size centred on `offset`.
    pub fn new_box(size: Vec2, offset: Vec2) -> Result<Self, CollisionError> {
        let h = size * 0.5;
        let corners = [
            Vec2::new(-h.x, -h.y),
            Vec2::new(h.x, -h.y),
            Vec2::new(h.x, h.y),
            Vec2::new(-h.x, h.y),
        ];
        Self::new(&corners, offset)
    }

    /// Replace the vertex ring and re-derive the axes.
    ///
    /// On an empty list the shape is left untouched. Existing storage is
    /// reused when the vertex count shrinks.
    pub fn set_vertices(&mut self, vertices: &[Vec2], offset: Vec2) -> Result<(), CollisionError> {
        if vertices.is_empty() {
            tracing::error!("no vertices passed to polygon");
            return Err(CollisionError::NoVertices);
        }

        self.valid = validate_polygon(vertices);
        if !self.valid {
            tracing::warn!(
                vertex_count = vertices.len(),
                "polygon vertices are not convex and counter-clockwise"
            );
        }

        let n = vertices.len();
        self.vertices.clear();
        self.vertices.extend(vertices.iter().map(|&v| offset + v));

        self.axes.clear();
        self.axes.extend((0..n).map(|i| {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            let normal = edge_normal(a, b);
            PolygonAxis {
                normal,
                offset: normal.dot(a),
            }
        }));

        // Until the first update the world caches mirror local space.
        self.world_vertices.clone_from(&self.vertices);
        self.world_axes.clone_from(&self.axes);
        Ok(())
    }

    /// Recompute world vertices and axes, returning the world bounding box.
    pub fn update(&mut self, xf: &Transform2d) -> Aabb {
        for (dst, src) in self.world_axes.iter_mut().zip(&self.axes) {
            let normal = xf.rotate_vector(src.normal);
            dst.normal = normal;
            dst.offset = xf.position.dot(normal) + src.offset;
        }

        let mut aabb = Aabb::INVERTED;
        for (dst, src) in self.world_vertices.iter_mut().zip(&self.vertices) {
            let v = xf.transform_vector(*src);
            *dst = v;
            aabb = aabb.include(v);
        }
        aabb
    }

    /// Same as [`PolygonShape::contains_vertex`].
    #[inline]
    pub fn test_point(&self, point: Vec2) -> bool {
        self.contains_vertex(point)
    }

    /// True if `point` lies inside or on every world-space half-plane.
    pub fn contains_vertex(&self, point: Vec2) -> bool {
        self.world_axes.iter().all(|axis| axis.distance(point) <= 0.0)
    }

    /// Like [`PolygonShape::contains_vertex`], but axes facing away from
    /// `normal` (negative dot product) cannot reject the point.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn contains_vertex_partial(&self, point: Vec2, normal: Vec2) -> bool {
        // A NaN dot product keeps the axis.
        self.world_axes
            .iter()
            .filter(|axis| !(axis.normal.dot(normal) < 0.0))
            .all(|axis| axis.distance(point) <= 0.0)
    }

    /// Minimum projection of the world vertices onto `normal`, minus `offset`.
    ///
    /// Negative values mean the polygon reaches past the half-plane
    /// `dot(normal, p) <= offset`.
    pub fn value_on_axis(&self, normal: Vec2, offset: f32) -> f32 {
        let min = self
            .world_vertices
            .iter()
            .map(|v| normal.dot(*v))
            .fold(f32::INFINITY, f32::min);
        min - offset
    }

    /// Local-space vertices, offset already applied.
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn world_vertices(&self) -> &[Vec2] {
        &self.world_vertices
    }

    pub fn axes(&self) -> &[PolygonAxis] {
        &self.axes
    }

    pub fn world_axes(&self) -> &[PolygonAxis] {
        &self.world_axes
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the last vertex ring passed validation.
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}
