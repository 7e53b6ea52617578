//! Pan gesture recognition.
//!
//! A [`PanResponder`] turns raw pointer [`Event`]s into a grant/move/end
//! sequence measured relative to the point where the gesture was granted.
//! Once granted, a responder keeps the gesture until it is released or
//! cancelled; it never hands it to another responder.

use super::Event;

/// Messages emitted by a [`PanResponder`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanGesture {
    /// Gesture started at frame-relative `x`
    Grant { x: f32 },
    /// Pointer moved; `dx` is the total horizontal travel since the grant
    Move { dx: f32 },
    /// Pointer lifted after travelling `dx`
    Release { dx: f32 },
    /// Gesture taken away; `dx` is the last travel that was reported
    Terminate { dx: f32 },
}

#[derive(Debug, Default, Clone)]
pub struct PanResponder {
    active: bool,
    start_x: f32,
    last_dx: f32,
}

impl PanResponder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Feed one pointer event.
    ///
    /// `origin_x` is the surface x of the responder's frame; `hit` decides
    /// whether a pointer-down at a surface point starts a gesture.
    pub fn handle(
        &mut self,
        event: &Event,
        origin_x: f32,
        hit: impl FnOnce(f32, f32) -> bool,
    ) -> Option<PanGesture> {
        match *event {
            Event::PointerDown { x, y } => {
                if self.active || !hit(x, y) {
                    return None;
                }
                self.active = true;
                self.start_x = x - origin_x;
                self.last_dx = 0.0;
                Some(PanGesture::Grant { x: self.start_x })
            }
            Event::PointerMove { x, .. } => {
                if !self.active {
                    return None;
                }
                self.last_dx = x - origin_x - self.start_x;
                Some(PanGesture::Move { dx: self.last_dx })
            }
            Event::PointerUp { x, .. } => {
                if !self.active {
                    return None;
                }
                self.active = false;
                self.last_dx = x - origin_x - self.start_x;
                Some(PanGesture::Release { dx: self.last_dx })
            }
            Event::PointerCancel => self.terminate(),
        }
    }

    /// End an active gesture without trusting any new coordinate.
    pub fn terminate(&mut self) -> Option<PanGesture> {
        if !self.active {
            return None;
        }
        self.active = false;
        Some(PanGesture::Terminate { dx: self.last_dx })
    }
}
