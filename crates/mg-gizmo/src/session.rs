//! Drag sessions
//!
//! A [`DragSession`] is one continuous pointer-down-to-pointer-up
//! manipulation of a single handle. It captures the transform and pointer
//! ray at drag start and turns each subsequent ray into a fresh transform.
//!
//! Translation is resolved as the change of the ray direction's component
//! along the drag axis rather than a ray/plane intersection, which stays
//! stable when the axis is nearly parallel to the view direction.

use glam::Quat;
use mg_core::{GizmoConfig, PointerSample, Ray, Transform};

use crate::handle::{HandleId, HandleKind};

/// Projected directions shorter than this are treated as degenerate
const MIN_PROJECTED_LENGTH_SQ: f32 = 1e-12;

/// `acos` with the dot product clamped into [-1, 1].
///
/// Float drift can push a dot product of two unit vectors slightly outside
/// the valid range, which would otherwise produce NaN.
pub fn clamped_acos(dot: f32) -> f32 {
    dot.clamp(-1.0, 1.0).acos()
}

/// An in-progress drag of one handle.
///
/// At most one session exists at a time; the controller enforces
/// single-handle exclusivity.
#[derive(Debug, Clone)]
pub struct DragSession {
    /// The handle being dragged
    pub handle: HandleId,
    /// Pointer sample captured at drag start
    pub start_sample: PointerSample,
    /// Picking ray captured at drag start
    pub start_ray: Ray,
    /// Transform snapshot captured at drag start
    pub start_transform: Transform,
    /// Live rotation angle in radians (rotation drags only)
    pub current_angle: f32,
}

impl DragSession {
    /// Open a session for `handle`, snapshotting the live transform
    pub fn new(
        handle: HandleId,
        start_sample: PointerSample,
        start_ray: Ray,
        start_transform: Transform,
    ) -> Self {
        Self {
            handle,
            start_sample,
            start_ray,
            start_transform,
            current_angle: 0.0,
        }
    }

    /// Compute the transform for the current pointer ray.
    ///
    /// Deltas are always taken against the drag-start snapshot, never
    /// accumulated move-to-move, so a noisy frame cannot compound.
    pub fn update(&mut self, current_ray: &Ray, scale: f32, config: &GizmoConfig) -> Transform {
        let q0 = self.start_transform.orientation;
        let axis = (q0 * self.handle.axis.direction()).normalize();

        match self.handle.kind {
            HandleKind::Translate => {
                let proj0 = self.start_ray.direction.dot(axis);
                let proj1 = current_ray.direction.dot(axis);
                let delta = (proj1 - proj0) * scale * config.translate_sensitivity;

                self.start_transform
                    .with_position(self.start_transform.position + axis * delta)
            }
            HandleKind::Rotate => {
                // Project both ray directions onto the plane perpendicular
                // to the rotation axis
                let u0 = self.start_ray.direction
                    - axis * self.start_ray.direction.dot(axis);
                let u1 = current_ray.direction - axis * current_ray.direction.dot(axis);

                if u0.length_squared() < MIN_PROJECTED_LENGTH_SQ
                    || u1.length_squared() < MIN_PROJECTED_LENGTH_SQ
                {
                    // Ray almost parallel to the rotation axis
                    return self.start_transform;
                }

                let u0 = u0.normalize();
                let u1 = u1.normalize();

                let mut angle = clamped_acos(u0.dot(u1));
                // acos only yields magnitude; the cross product fixes the sign
                if u0.cross(u1).dot(axis) < 0.0 {
                    angle = -angle;
                }
                self.current_angle = angle;

                // Pre-multiply: rotate in world space about the ring the
                // user is looking at, not the object's local frame
                let orientation = Quat::from_axis_angle(axis, angle) * q0;
                self.start_transform.with_orientation(orientation)
            }
        }
    }
}
