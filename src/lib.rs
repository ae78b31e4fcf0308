//! collide2d
//!
//! Narrow-phase collision geometry for a 2D physics engine.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! 1. **math** - Rigid transforms, AABBs, vertex ring validation
//! 2. **shape** - Polygon, segment and circle shapes behind a tagged [`Shape`]
//! 3. **console** - Save/load console commands (feature = "console")
//!
//! Each step the owner of a shape calls [`Shape::update`] with the body's
//! transform. The returned [`Aabb`] feeds the broad-phase; the refreshed
//! world-space axes and vertices feed SAT tests through
//! [`PolygonShape::value_on_axis`], [`PolygonShape::contains_vertex`] and
//! [`PolygonShape::contains_vertex_partial`].

pub mod error;
pub mod math;
pub mod shape;

#[cfg(feature = "console")]
pub mod console;

pub use error::CollisionError;

pub use math::{Aabb, Transform2d};

pub use shape::{
    link_chain, CircleShape, PolygonAxis, PolygonShape, SegmentShape, Shape, ShapeConfig,
    ShapeKind, ShapeType,
};

#[cfg(feature = "console")]
pub use console::{Command, CommandOutcome, ConsoleError, ConsoleSession, SceneStore};

// Re-export glam for convenience
pub use glam;
