//! Global constants for mg-core
//!
//! Geometry values are in gizmo-local units and are multiplied by the
//! externally supplied scale factor before use.

/// Length of a translation arrow handle
pub const ARROW_LENGTH: f32 = 1.0;

/// Radius of the visible arrow shaft
pub const ARROW_THICKNESS: f32 = 0.015;

/// Radius of the arrow head cone
pub const ARROW_HEAD_SIZE: f32 = 0.05;

/// Radius of a rotation ring handle
pub const RING_RADIUS: f32 = 0.8;

/// Radius of the visible ring tube
pub const RING_THICKNESS: f32 = 0.03;

/// Pick radius around a translation arrow, as a multiple of scale
pub const PICK_RADIUS_MULTIPLIER: f32 = 0.08;

/// Hit tolerance around a rotation ring, as a multiple of scale
pub const RING_PICK_THICKNESS: f32 = 0.08;

/// Translation drag sensitivity.
///
/// Relates the change in the projected ray-direction component along the
/// drag axis to world-unit displacement. Calibrated so a full-width pointer
/// sweep moves the handle roughly one gizmo-scale unit; tune against the
/// target rendering scale rather than deriving analytically.
pub const TRANSLATE_SENSITIVITY: f32 = 2.0;

/// Default X axis color (red, RGBA)
pub const X_AXIS_COLOR: [f32; 4] = [1.0, 0.2, 0.2, 1.0];

/// Default Y axis color (green, RGBA)
pub const Y_AXIS_COLOR: [f32; 4] = [0.2, 1.0, 0.2, 1.0];

/// Default Z axis color (blue, RGBA)
pub const Z_AXIS_COLOR: [f32; 4] = [0.2, 0.2, 1.0, 1.0];

/// Hover/active highlight color (RGBA)
pub const HIGHLIGHT_COLOR: [f32; 4] = [1.0, 1.0, 0.2, 1.0];

/// Margin allowed outside the [-1, 1] NDC square before a pointer sample
/// is rejected as invalid
pub const NDC_MARGIN: f32 = 4.0;
