//! Object transform as position, orientation and scale
//!
//! The gizmo never introduces shear, so every transform it produces is
//! losslessly representable as a scale/rotation/translation triple.

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// A decomposed rigid transform with per-axis scale.
///
/// Invariants: `orientation` is unit length and every `scale` component is
/// positive. Owned by the external caller between drags and exclusively by
/// the gizmo controller while a drag is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// World-space position
    pub position: Vec3,
    /// World-space orientation (unit quaternion)
    pub orientation: Quat,
    /// Per-axis scale (all components positive)
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// The identity transform
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        orientation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Create a transform from its components, renormalizing the orientation
    pub fn new(position: Vec3, orientation: Quat, scale: Vec3) -> Self {
        Self {
            position,
            orientation: orientation.normalize(),
            scale,
        }
    }

    /// Create a transform at a position with identity orientation and scale
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Compose into a homogeneous 4x4 matrix
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.orientation, self.position)
    }

    /// Decompose a homogeneous matrix.
    ///
    /// Assumes the matrix carries no shear, which holds for every matrix
    /// this crate produces.
    pub fn from_matrix(matrix: Mat4) -> Self {
        let (scale, orientation, position) = matrix.to_scale_rotation_translation();
        Self {
            position,
            orientation,
            scale,
        }
    }

    /// Copy with a different position
    pub fn with_position(&self, position: Vec3) -> Self {
        Self { position, ..*self }
    }

    /// Copy with a different orientation
    pub fn with_orientation(&self, orientation: Quat) -> Self {
        Self {
            orientation: orientation.normalize(),
            ..*self
        }
    }

    /// Whether all components are finite, the orientation is unit length
    /// and scale components are positive
    pub fn is_valid(&self) -> bool {
        self.position.is_finite()
            && self.orientation.is_finite()
            && self.scale.is_finite()
            && (self.orientation.length_squared() - 1.0).abs() < 1e-4
            && self.scale.cmpgt(Vec3::ZERO).all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_3;

    #[test]
    fn test_matrix_round_trip() {
        let transform = Transform::new(
            Vec3::new(12.0, -3.5, 700.0),
            Quat::from_axis_angle(Vec3::new(0.3, 0.9, -0.2).normalize(), FRAC_PI_3),
            Vec3::new(2.0, 2.0, 2.0),
        );

        let recomposed = Transform::from_matrix(transform.to_matrix());

        assert!(transform.position.distance(recomposed.position) < 1e-4);
        // q and -q describe the same rotation
        assert!(transform.orientation.dot(recomposed.orientation).abs() > 1.0 - 1e-5);
        assert!(transform.scale.distance(recomposed.scale) < 1e-4);
    }

    #[test]
    fn test_identity_matrix() {
        assert_eq!(Transform::IDENTITY.to_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn test_new_normalizes_orientation() {
        let transform = Transform::new(
            Vec3::ZERO,
            Quat::from_xyzw(0.0, 2.0, 0.0, 0.0),
            Vec3::ONE,
        );
        assert!((transform.orientation.length() - 1.0).abs() < 1e-6);
        assert!(transform.is_valid());
    }

    #[test]
    fn test_invalid_scale_detected() {
        let transform = Transform::new(Vec3::ZERO, Quat::IDENTITY, Vec3::new(1.0, -1.0, 1.0));
        assert!(!transform.is_valid());
    }
}
