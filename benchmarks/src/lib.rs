//! Shared setup helpers for collide2d benchmarks.
//!
//! ## Running
//!
//! Wall-clock (criterion):
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench shapes
//!
//! iai-callgrind (instruction counts, requires valgrind):
//!   cargo install iai-callgrind-runner
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench shapes_iai
//!
//! Filter by group:
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench shapes -- update

use std::f32::consts::TAU;

use collide2d::{Shape, Transform2d};
use glam::Vec2;

/// Counter-clockwise regular polygon with `sides` vertices.
pub fn regular_polygon(sides: usize, radius: f32) -> Vec<Vec2> {
    (0..sides)
        .map(|i| Vec2::from_angle(i as f32 * TAU / sides as f32) * radius)
        .collect()
}

/// `n` shapes cycling through box, hexagon, segment and circle.
pub fn setup_mixed_shapes(n: usize) -> Vec<Shape> {
    let hexagon = regular_polygon(6, 0.5);
    (0..n)
        .map(|i| match i % 4 {
            0 => Shape::new_box(Vec2::ONE, Vec2::ZERO),
            1 => Shape::polygon(&hexagon, Vec2::ZERO),
            2 => Ok(Shape::segment(Vec2::new(-0.5, 0.0), Vec2::new(0.5, 0.0), 0.1)),
            _ => Ok(Shape::circle(Vec2::ZERO, 0.5)),
        })
        .collect::<Result<_, _>>()
        .expect("mixed shape setup")
}

/// `n` identical polygons with `sides` vertices each.
pub fn setup_polygons(n: usize, sides: usize) -> Vec<Shape> {
    let verts = regular_polygon(sides, 1.0);
    (0..n)
        .map(|_| Shape::polygon(&verts, Vec2::ZERO).expect("polygon setup"))
        .collect()
}

/// One transform per shape, laid out on a grid with varying rotation.
pub fn grid_transforms(n: usize) -> Vec<Transform2d> {
    let cols = (n as f32).sqrt().ceil() as usize;
    (0..n)
        .map(|i| {
            let pos = Vec2::new((i % cols) as f32 * 1.5, (i / cols) as f32 * 1.5);
            Transform2d::new(pos, i as f32 * 0.1)
        })
        .collect()
}

/// Apply one transform per shape, as a stepping loop would.
pub fn update_all(shapes: &mut [Shape], transforms: &[Transform2d]) {
    for (shape, xf) in shapes.iter_mut().zip(transforms) {
        shape.update(xf);
    }
}
