//! Projection context and pointer-ray resolution
//!
//! A gizmo overlaid on a map cannot rely on standard camera unprojection:
//! the map engine drives the scene with its own projection-view matrix,
//! which encodes altitude- and projection-dependent skew that a plain
//! perspective camera cannot represent. The map-override path here
//! unprojects directly through that matrix instead.

use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::error::PickError;
use crate::ray::Ray;

/// Smallest matrix determinant treated as invertible
const MIN_DETERMINANT: f32 = 1e-12;

/// Smallest homogeneous w treated as a valid perspective divide
const MIN_W: f32 = 1e-12;

/// The camera-like context rays are resolved against.
///
/// Read-only to this crate; the host refreshes it every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectionContext {
    /// A standard perspective/orthographic camera
    Camera {
        /// Camera world position (ray origin)
        position: Vec3,
        /// Projection matrix
        proj: Mat4,
        /// View matrix
        view: Mat4,
    },
    /// Inverse projection-view matrix supplied by the external map engine
    MapOverride {
        /// `(proj * view)⁻¹` for the current frame
        proj_view_inv: Mat4,
    },
}

impl ProjectionContext {
    /// Build a map-override context from the forward projection-view
    /// matrix, inverting it here.
    pub fn from_proj_view(proj_view: Mat4) -> Result<Self, PickError> {
        Ok(Self::MapOverride {
            proj_view_inv: invert(proj_view)?,
        })
    }

    /// Resolve an NDC pointer position into a world-space ray.
    ///
    /// The returned direction is always unit length. Fails with
    /// [`PickError::DegenerateProjection`] when the projection cannot be
    /// inverted or the unprojection produces non-finite components;
    /// callers skip the pick for that frame.
    pub fn resolve_ray(&self, ndc: Vec2) -> Result<Ray, PickError> {
        match *self {
            Self::MapOverride { proj_view_inv } => {
                // The map engine encodes its camera position at NDC depth -1
                let origin = unproject(proj_view_inv, Vec3::new(0.0, 0.0, -1.0))?;
                let far = unproject(proj_view_inv, ndc.extend(1.0))?;
                finish_ray(origin, far)
            }
            Self::Camera {
                position,
                proj,
                view,
            } => {
                let proj_view_inv = invert(proj * view)?;
                let far = unproject(proj_view_inv, ndc.extend(1.0))?;
                finish_ray(position, far)
            }
        }
    }
}

/// Invert a matrix, rejecting singular or non-finite input
fn invert(matrix: Mat4) -> Result<Mat4, PickError> {
    let det = matrix.determinant();
    if !det.is_finite() || det.abs() < MIN_DETERMINANT {
        return Err(PickError::DegenerateProjection);
    }
    let inverse = matrix.inverse();
    if !inverse.is_finite() {
        return Err(PickError::DegenerateProjection);
    }
    Ok(inverse)
}

/// Unproject an NDC point through an inverse projection-view matrix,
/// applying the perspective divide
fn unproject(proj_view_inv: Mat4, ndc: Vec3) -> Result<Vec3, PickError> {
    let clip = proj_view_inv * Vec4::new(ndc.x, ndc.y, ndc.z, 1.0);
    if !clip.is_finite() || clip.w.abs() < MIN_W {
        return Err(PickError::DegenerateProjection);
    }
    Ok(clip.truncate() / clip.w)
}

fn finish_ray(origin: Vec3, far: Vec3) -> Result<Ray, PickError> {
    let direction = far - origin;
    if !direction.is_finite() || direction.length_squared() < MIN_W {
        return Err(PickError::DegenerateProjection);
    }
    Ok(Ray::new(origin, direction))
}
