//! Gizmo configuration
//!
//! Serializable settings for handle geometry, pick tolerances, colors and
//! drag sensitivity. Loaded and saved as RON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::ConfigError;

/// Gizmo configuration.
///
/// Geometry and tolerance values are in gizmo-local units; the controller
/// multiplies them by the externally supplied scale factor, so the gizmo
/// stays equally grabbable at any scale. Screen-space size compensation is
/// the host's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GizmoConfig {
    /// Translation arrow length
    pub handle_length: f32,
    /// Visible arrow shaft radius
    pub arrow_thickness: f32,
    /// Arrow head cone radius
    pub arrow_head_size: f32,
    /// Rotation ring radius
    pub ring_radius: f32,
    /// Visible ring tube radius
    pub ring_thickness: f32,
    /// Pick radius around a translation arrow
    pub pick_radius_multiplier: f32,
    /// Hit tolerance around a rotation ring
    pub ring_pick_thickness: f32,
    /// Translation sensitivity constant K (calibrated, see constants)
    pub translate_sensitivity: f32,
    /// X/Y/Z axis colors (RGBA)
    pub axis_colors: [[f32; 4]; 3],
    /// Hover/active highlight color (RGBA)
    pub highlight_color: [f32; 4],
    /// Which axes respond to picking
    pub active_axes: [bool; 3],
    /// Whether translation arrows are enabled
    pub enable_translation: bool,
    /// Whether rotation rings are enabled
    pub enable_rotation: bool,
}

impl Default for GizmoConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl GizmoConfig {
    /// The calibrated default configuration
    pub fn standard() -> Self {
        Self {
            handle_length: constants::ARROW_LENGTH,
            arrow_thickness: constants::ARROW_THICKNESS,
            arrow_head_size: constants::ARROW_HEAD_SIZE,
            ring_radius: constants::RING_RADIUS,
            ring_thickness: constants::RING_THICKNESS,
            pick_radius_multiplier: constants::PICK_RADIUS_MULTIPLIER,
            ring_pick_thickness: constants::RING_PICK_THICKNESS,
            translate_sensitivity: constants::TRANSLATE_SENSITIVITY,
            axis_colors: [
                constants::X_AXIS_COLOR,
                constants::Y_AXIS_COLOR,
                constants::Z_AXIS_COLOR,
            ],
            highlight_color: constants::HIGHLIGHT_COLOR,
            active_axes: [true; 3],
            enable_translation: true,
            enable_rotation: true,
        }
    }

    /// Translation-only preset
    pub fn translate_only() -> Self {
        Self {
            enable_rotation: false,
            ..Self::standard()
        }
    }

    /// Rotation-only preset
    pub fn rotate_only() -> Self {
        Self {
            enable_translation: false,
            ..Self::standard()
        }
    }

    /// Save configuration to a RON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::write(path.as_ref(), content).map_err(|e| ConfigError::Io(e.to_string()))?;
        Ok(())
    }

    /// Load configuration from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
        ron::from_str(&content).map_err(|e| ConfigError::Deserialize(e.to_string()))
    }
}
