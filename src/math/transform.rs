//! Rigid 2D transform applied to shapes each simulation step.

use glam::{Affine2, Vec2};

/// Position plus rotation. The rotation is stored as a unit complex number
/// `(cos, sin)` so rotating a vector is a single complex multiply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2d {
    pub position: Vec2,
    rotation: Vec2,
}

impl Transform2d {
    /// No translation, no rotation.
    pub const IDENTITY: Self = Self {
        position: Vec2::ZERO,
        rotation: Vec2::X,
    };

    /// Create a transform from a position and an angle in radians.
    pub fn new(position: Vec2, angle: f32) -> Self {
        Self {
            position,
            rotation: Vec2::from_angle(angle),
        }
    }

    /// Create a pure translation.
    pub fn from_position(position: Vec2) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Create a pure rotation about the origin.
    pub fn from_angle(angle: f32) -> Self {
        Self::new(Vec2::ZERO, angle)
    }

    /// Rotation angle in radians, in `(-PI, PI]`.
    pub fn angle(&self) -> f32 {
        self.rotation.to_angle()
    }

    pub fn set_angle(&mut self, angle: f32) {
        self.rotation = Vec2::from_angle(angle);
    }

    /// Rotation as `(cos, sin)`.
    #[inline]
    pub fn rotation(&self) -> Vec2 {
        self.rotation
    }

    /// Rotate a direction. Translation is ignored.
    #[inline]
    pub fn rotate_vector(&self, v: Vec2) -> Vec2 {
        self.rotation.rotate(v)
    }

    /// Rotate then translate a point.
    #[inline]
    pub fn transform_vector(&self, v: Vec2) -> Vec2 {
        self.position + self.rotation.rotate(v)
    }

    /// Map a world-space point back into local space.
    #[inline]
    pub fn inverse_transform_vector(&self, v: Vec2) -> Vec2 {
        let conjugate = Vec2::new(self.rotation.x, -self.rotation.y);
        conjugate.rotate(v - self.position)
    }

    /// Convert to a glam affine (rotation then translation).
    pub fn to_affine(&self) -> Affine2 {
        Affine2::from_angle_translation(self.angle(), self.position)
    }

    /// Decompose an affine into a rigid transform.
    ///
    /// Scale and shear are discarded; only the angle and translation survive.
    pub fn from_affine(affine: Affine2) -> Self {
        let (_, angle, position) = affine.to_scale_angle_translation();
        Self::new(position, angle)
    }
}

impl Default for Transform2d {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_identity() {
        let t = Transform2d::IDENTITY;
        let p = Vec2::new(3.0, -2.0);
        assert_eq!(t.transform_vector(p), p);
        assert_eq!(t.rotate_vector(p), p);
        assert_eq!(t.angle(), 0.0);
    }

    #[test]
    fn test_rotate_ignores_translation() {
        let t = Transform2d::new(Vec2::new(10.0, 5.0), FRAC_PI_2);
        let eps = 1e-5;
        assert!((t.rotate_vector(Vec2::X) - Vec2::Y).length() < eps);
        assert!((t.transform_vector(Vec2::X) - Vec2::new(10.0, 6.0)).length() < eps);
    }

    #[test]
    fn test_inverse_transform() {
        let t = Transform2d::new(Vec2::new(-4.0, 2.5), 0.7);
        let p = Vec2::new(1.25, -3.0);
        let back = t.inverse_transform_vector(t.transform_vector(p));
        assert!((back - p).length() < 1e-5);
    }

    #[test]
    fn test_set_angle() {
        let mut t = Transform2d::from_position(Vec2::new(1.0, 1.0));
        t.set_angle(FRAC_PI_2);
        assert!((t.angle() - FRAC_PI_2).abs() < 1e-5);
        assert_eq!(t.position, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_affine_roundtrip() {
        let original = Transform2d::new(Vec2::new(1.0, 2.0), 0.3);
        let affine = original.to_affine();
        let p = Vec2::new(0.5, -1.5);

        let eps = 1e-5;
        assert!((affine.transform_point2(p) - original.transform_vector(p)).length() < eps);
        assert!((affine.transform_vector2(p) - original.rotate_vector(p)).length() < eps);

        let recovered = Transform2d::from_affine(affine);
        assert!((recovered.position - original.position).length() < eps);
        assert!((recovered.angle() - original.angle()).abs() < eps);
    }

    #[test]
    fn test_default_is_identity() {
        assert_eq!(Transform2d::default(), Transform2d::IDENTITY);
    }
}
