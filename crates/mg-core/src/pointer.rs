//! Pointer samples and screen -> NDC conversion

use glam::Vec2;

use crate::constants::NDC_MARGIN;
use crate::error::PickError;

/// Canvas bounding rectangle in client coordinates, supplied per frame by
/// the host renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    /// Left edge in client coordinates
    pub left: f32,
    /// Top edge in client coordinates
    pub top: f32,
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl ScreenRect {
    /// Rectangle anchored at the client origin
    pub fn from_size(width: f32, height: f32) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width,
            height,
        }
    }
}

/// A pointer event position, in both screen and normalized device
/// coordinates. Derived per event and never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Client X coordinate
    pub screen_x: f32,
    /// Client Y coordinate
    pub screen_y: f32,
    /// Normalized device coordinates, [-1, 1] on each axis inside the canvas
    pub ndc: Vec2,
}

impl PointerSample {
    /// Convert a client-coordinate pointer position into a sample.
    ///
    /// NDC X grows rightward, NDC Y grows upward (screen Y is flipped).
    /// Rejects non-finite input, a degenerate rectangle, and positions far
    /// outside the canvas.
    pub fn from_screen(
        screen_x: f32,
        screen_y: f32,
        rect: ScreenRect,
    ) -> Result<Self, PickError> {
        if !screen_x.is_finite()
            || !screen_y.is_finite()
            || !rect.width.is_finite()
            || !rect.height.is_finite()
            || rect.width <= 0.0
            || rect.height <= 0.0
        {
            return Err(PickError::InvalidPointerSample);
        }

        let ndc = Vec2::new(
            (screen_x - rect.left) / rect.width * 2.0 - 1.0,
            1.0 - (screen_y - rect.top) / rect.height * 2.0,
        );

        if !ndc.is_finite() || ndc.x.abs() > NDC_MARGIN || ndc.y.abs() > NDC_MARGIN {
            return Err(PickError::InvalidPointerSample);
        }

        Ok(Self {
            screen_x,
            screen_y,
            ndc,
        })
    }
}
