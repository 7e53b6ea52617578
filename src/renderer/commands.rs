//! Draw command definitions for the display list.

use crate::widgets::{Color, Rect};

/// A single draw operation in surface coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Draw a rounded rectangle.
    RoundedRect {
        /// Rectangle bounds
        rect: Rect,
        /// Fill color
        color: Color,
        /// Corner radius in logical pixels
        radius: f32,
    },

    /// Draw a filled circle.
    Circle {
        /// Center point
        center: (f32, f32),
        /// Radius in logical pixels
        radius: f32,
        /// Fill color
        color: Color,
    },
}

impl DrawCommand {
    /// Create a simple rounded rectangle.
    pub fn rounded_rect(rect: Rect, color: Color, radius: f32) -> Self {
        Self::RoundedRect {
            rect,
            color,
            radius,
        }
    }

    /// Create a circle.
    pub fn circle(center: (f32, f32), radius: f32, color: Color) -> Self {
        Self::Circle {
            center,
            radius,
            color,
        }
    }

    /// Axis-aligned bounds covered by the command.
    pub fn bounds(&self) -> Rect {
        match self {
            DrawCommand::RoundedRect { rect, .. } => *rect,
            DrawCommand::Circle {
                center: (cx, cy),
                radius,
                ..
            } => Rect::new(cx - radius, cy - radius, radius * 2.0, radius * 2.0),
        }
    }
}
