//! Error types for shape construction and queries.

use thiserror::Error;

use crate::shape::ShapeType;

/// Errors reported by the shape layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollisionError {
    /// A polygon was built or replaced from an empty vertex list.
    #[error("no vertices passed")]
    NoVertices,
    /// The shape kind has no point test. Calling it is a programming error.
    #[error("point test is not implemented for {0:?} shapes")]
    PointTestUnsupported(ShapeType),
    /// A kind-specific edit was issued against a different kind of shape.
    #[error("expected a {expected:?} shape, found {found:?}")]
    ShapeMismatch {
        expected: ShapeType,
        found: ShapeType,
    },
}
