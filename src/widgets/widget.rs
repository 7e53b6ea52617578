use std::time::Duration;

use crate::invalidation::ChangeFlags;
use crate::layout::{Constraints, Size};
use crate::renderer::PaintContext;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Left and top edges are inside, right and bottom are not.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Pointer input, in surface coordinates.
///
/// Touch screens and mice both produce these; a finger lifting maps to
/// [`Event::PointerUp`], and the platform stealing the gesture (system
/// swipe, pointer leaving the surface mid-drag) maps to
/// [`Event::PointerCancel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Finger/button went down
    PointerDown { x: f32, y: f32 },
    /// Pointer moved (with or without contact)
    PointerMove { x: f32, y: f32 },
    /// Finger/button released
    PointerUp { x: f32, y: f32 },
    /// Gesture terminated by the platform; its coordinates are not trustworthy
    PointerCancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    Ignored,
    Handled,
}

pub trait Widget {
    /// Advance animations to clock time `now`.
    /// Returns true if any animations are still active and need another frame.
    /// Called once per frame before layout.
    fn advance_animations(&mut self, now: Duration) -> bool {
        let _ = now;
        false
    }

    fn layout(&mut self, constraints: Constraints) -> Size;
    fn set_origin(&mut self, x: f32, y: f32);
    fn bounds(&self) -> Rect;
    fn paint(&self, ctx: &mut PaintContext);
    fn event(&mut self, event: &Event) -> EventResponse {
        let _ = event;
        EventResponse::Ignored
    }

    /// Called once when the widget enters the tree.
    fn mount(&mut self, now: Duration) {
        let _ = now;
    }

    /// Called once when the widget leaves the tree.
    fn unmount(&mut self) {}

    fn mark_dirty(&mut self, flags: ChangeFlags);
    fn needs_layout(&self) -> bool;
    fn needs_paint(&self) -> bool;
    fn clear_dirty(&mut self);
}

impl Widget for Box<dyn Widget> {
    fn advance_animations(&mut self, now: Duration) -> bool {
        (**self).advance_animations(now)
    }
    fn layout(&mut self, constraints: Constraints) -> Size {
        (**self).layout(constraints)
    }
    fn set_origin(&mut self, x: f32, y: f32) {
        (**self).set_origin(x, y)
    }
    fn bounds(&self) -> Rect {
        (**self).bounds()
    }
    fn paint(&self, ctx: &mut PaintContext) {
        (**self).paint(ctx)
    }
    fn event(&mut self, event: &Event) -> EventResponse {
        (**self).event(event)
    }
    fn mount(&mut self, now: Duration) {
        (**self).mount(now)
    }
    fn unmount(&mut self) {
        (**self).unmount()
    }
    fn mark_dirty(&mut self, flags: ChangeFlags) {
        (**self).mark_dirty(flags)
    }
    fn needs_layout(&self) -> bool {
        (**self).needs_layout()
    }
    fn needs_paint(&self) -> bool {
        (**self).needs_paint()
    }
    fn clear_dirty(&mut self) {
        (**self).clear_dirty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_hex_colors() {
        let indigo = Color::from_hex(0x3F51B5);
        assert_eq!(indigo.r, 63.0 / 255.0);
        assert_eq!(indigo.g, 81.0 / 255.0);
        assert_eq!(indigo.b, 181.0 / 255.0);
        assert_eq!(indigo.a, 1.0);
    }

    #[test]
    fn test_slider_bounds_hit() {
        let bounds = Rect::new(0.0, 0.0, 200.0, 60.0);
        assert!(bounds.contains(0.0, 0.0));
        assert!(bounds.contains(199.5, 59.5));
        assert!(!bounds.contains(200.0, 30.0));
        assert!(!bounds.contains(100.0, -0.1));
        assert!(!Rect::default().contains(0.0, 0.0));
    }

    struct Fixed {
        bounds: Rect,
        dirty_flags: ChangeFlags,
    }

    impl Widget for Fixed {
        fn layout(&mut self, constraints: Constraints) -> Size {
            let size = constraints.constrain(Size::new(50.0, 10.0));
            self.bounds.width = size.width;
            self.bounds.height = size.height;
            size
        }
        fn set_origin(&mut self, x: f32, y: f32) {
            self.bounds.x = x;
            self.bounds.y = y;
        }
        fn bounds(&self) -> Rect {
            self.bounds
        }
        fn paint(&self, ctx: &mut PaintContext) {
            ctx.draw_rect(self.bounds, Color::BLACK);
        }
        crate::widgets::impl_dirty_flags!();
    }

    #[test]
    fn test_boxed_widget_forwards() {
        let mut widget: Box<dyn Widget> = Box::new(Fixed {
            bounds: Rect::default(),
            dirty_flags: ChangeFlags::NEEDS_LAYOUT,
        });
        assert!(widget.needs_layout());
        assert_eq!(
            widget.layout(Constraints::loose(Size::new(20.0, 20.0))),
            Size::new(20.0, 10.0)
        );
        widget.set_origin(5.0, 5.0);
        assert_eq!(widget.bounds(), Rect::new(5.0, 5.0, 20.0, 10.0));
        assert_eq!(widget.event(&Event::PointerCancel), EventResponse::Ignored);
        assert!(!widget.advance_animations(Duration::ZERO));

        widget.mark_dirty(ChangeFlags::NEEDS_PAINT);
        assert!(widget.needs_paint());
        widget.clear_dirty();
        assert!(!widget.needs_paint() && !widget.needs_layout());
    }
}
