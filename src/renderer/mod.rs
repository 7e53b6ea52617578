//! Display-list rendering.
//!
//! Widgets paint into a [`PaintContext`], which records [`DrawCommand`]s in
//! paint order. A backend (GPU, software rasterizer, or a test) consumes the
//! list afterwards.

pub mod commands;

pub use commands::DrawCommand;

use crate::widgets::{Color, Rect};

#[derive(Debug, Default)]
pub struct PaintContext {
    commands: Vec<DrawCommand>,
}

impl PaintContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new PaintContext with pre-allocated capacity to avoid per-frame allocations
    pub fn with_capacity(commands: usize) -> Self {
        Self {
            commands: Vec::with_capacity(commands),
        }
    }

    /// Clear the list for reuse, preserving allocated capacity
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.draw_rounded_rect(rect, color, 0.0);
    }

    pub fn draw_rounded_rect(&mut self, rect: Rect, color: Color, radius: f32) {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return;
        }
        self.commands
            .push(DrawCommand::rounded_rect(rect, color, radius));
    }

    pub fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        if radius <= 0.0 {
            return;
        }
        self.commands
            .push(DrawCommand::circle((cx, cy), radius, color));
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
