//! Gizmo axis handles

use glam::{Quat, Vec3};
use mg_core::{GizmoConfig, Ray};

use crate::collision;

/// A gizmo axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// X axis
    X,
    /// Y axis
    Y,
    /// Z axis
    Z,
}

impl Axis {
    /// All three axes
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Axis index, 0..3
    pub fn index(&self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Unit direction in gizmo-local space
    pub fn direction(&self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }
}

/// What a handle manipulates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleKind {
    /// Translation arrow along an axis
    Translate,
    /// Rotation ring around an axis
    Rotate,
}

/// Identifies one of the six handles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandleId {
    /// What the handle manipulates
    pub kind: HandleKind,
    /// Which axis it is constrained to
    pub axis: Axis,
}

impl HandleId {
    /// All six handles, translation arrows first
    pub const ALL: [HandleId; 6] = [
        HandleId {
            kind: HandleKind::Translate,
            axis: Axis::X,
        },
        HandleId {
            kind: HandleKind::Translate,
            axis: Axis::Y,
        },
        HandleId {
            kind: HandleKind::Translate,
            axis: Axis::Z,
        },
        HandleId {
            kind: HandleKind::Rotate,
            axis: Axis::X,
        },
        HandleId {
            kind: HandleKind::Rotate,
            axis: Axis::Y,
        },
        HandleId {
            kind: HandleKind::Rotate,
            axis: Axis::Z,
        },
    ];
}

/// One interactive handle with its cosmetic hover/active state.
///
/// Created once per gizmo instance and mutated on hover/drag events; the
/// visual state never affects the drag math.
#[derive(Debug, Clone, Copy)]
pub struct AxisHandle {
    /// Which handle this is
    pub id: HandleId,
    /// Base color (RGBA)
    pub color: [f32; 4],
    /// Pointer is over this handle
    pub hovered: bool,
    /// This handle is being dragged
    pub active: bool,
}

impl AxisHandle {
    /// Create a handle with the configured base color for its axis
    pub fn new(id: HandleId, config: &GizmoConfig) -> Self {
        Self {
            id,
            color: config.axis_colors[id.axis.index()],
            hovered: false,
            active: false,
        }
    }

    /// Update the cosmetic state
    pub fn set_visual_state(&mut self, hovered: bool, active: bool) {
        self.hovered = hovered;
        self.active = active;
    }

    /// Color to render with, accounting for hover/active highlight
    pub fn display_color(&self, config: &GizmoConfig) -> [f32; 4] {
        if self.hovered || self.active {
            config.highlight_color
        } else {
            self.color
        }
    }

    /// Whether picking is enabled for this handle under `config`
    pub fn is_enabled(&self, config: &GizmoConfig) -> bool {
        let kind_enabled = match self.id.kind {
            HandleKind::Translate => config.enable_translation,
            HandleKind::Rotate => config.enable_rotation,
        };
        kind_enabled && config.active_axes[self.id.axis.index()]
    }

    /// Test a picking ray against this handle's geometry.
    ///
    /// The handle is anchored at `origin` and oriented by the gizmo's
    /// `orientation`; all sizes and tolerances scale with `scale`. Returns
    /// the ray parameter of the hit.
    pub fn hit_test(
        &self,
        ray: &Ray,
        origin: Vec3,
        orientation: Quat,
        scale: f32,
        config: &GizmoConfig,
    ) -> Option<f32> {
        let world_axis = (orientation * self.id.axis.direction()).normalize();
        match self.id.kind {
            HandleKind::Translate => {
                let end = origin + world_axis * config.handle_length * scale;
                collision::ray_segment_cylinder(
                    ray,
                    origin,
                    end,
                    config.pick_radius_multiplier * scale,
                )
            }
            HandleKind::Rotate => collision::ray_ring(
                ray,
                origin,
                world_axis,
                config.ring_radius * scale,
                config.ring_pick_thickness * scale,
            ),
        }
    }
}
