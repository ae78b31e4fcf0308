//! 2D math used by the shapes: rigid transforms, bounding boxes and vertex
//! ring validation. Vector arithmetic comes from `glam`.

pub mod aabb;
pub mod transform;
pub mod vertices;

pub use aabb::Aabb;
pub use transform::Transform2d;
pub use vertices::{centroid, signed_area, validate_polygon};
