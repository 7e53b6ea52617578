//! The draggable circular handle of a [`Slider`](super::Slider).
//!
//! A thumb owns two animated scalars, its left offset and its scale, and
//! nothing else. It has no notion of the slider's value: the owner drives it
//! exclusively through [`ThumbCommand`]s sent to a [`ThumbHandle`], and the
//! thumb reports gestures that start on it back as [`PanGesture`] messages.

use std::time::Duration;

use crate::animation::{AnimationState, Transition};
use crate::geometry::ThumbGeometry;
use crate::invalidation::ChangeFlags;
use crate::renderer::PaintContext;
use crate::theme::Theme;

use super::gesture::{PanGesture, PanResponder};
use super::{Color, Event};

/// Scale while the thumb is being dragged
pub const THUMB_SCALE_RATIO: f32 = 1.3;
/// Scale of a minimized thumb
pub const THUMB_SMALL_SCALE_RATIO: f32 = 1.0 / 6.0;
/// Width of the ring drawn around the thumb
pub const THUMB_BORDER_WIDTH: f32 = 0.0;

const MOVE_SCALE_DURATION_MS: f32 = 100.0;
const CONFIRM_DURATION_MS: f32 = 100.0;

/// Operations a thumb understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThumbCommand {
    /// Follow a drag to track position `x`, growing to the interactive scale.
    MoveTo { x: f32, track_length: f32 },
    /// Jump to track position `x` without touching the scale.
    MoveToProg { x: f32, track_length: f32 },
    /// Shrink to the minimal scale over `duration_ms` (0 = immediately).
    Minimize { duration_ms: f32 },
    /// Grow back to full size over `duration_ms`; only acts when shrunk.
    Maximize { duration_ms: f32 },
    /// Settle at rest. `Some(x)` re-derives the resting position from `x`,
    /// `None` keeps the one computed by the last move.
    ConfirmMoveTo { x: Option<f32> },
    /// New radius or colour from the owner.
    Configure { radius: f32, enabled_color: Color },
}

/// Owned handle to a thumb.
///
/// [`Thumb`] is the real implementation; a slider can be built over any
/// other implementation (a recorder in tests, a remote proxy) because it
/// never touches the thumb except through this trait.
pub trait ThumbHandle {
    fn send(&mut self, command: ThumbCommand);

    /// Offer a pointer event; returns the gesture to delegate to the owner.
    fn gesture(&mut self, event: &Event) -> Option<PanGesture> {
        let _ = event;
        None
    }

    /// True while a gesture granted by [`gesture`](Self::gesture) is in progress.
    fn has_gesture(&self) -> bool {
        false
    }

    /// Where the track sits on the surface: its left edge and vertical centre.
    fn set_track_origin(&mut self, x: f32, center_y: f32) {
        let _ = (x, center_y);
    }

    /// Returns true while an animation is still running.
    fn advance_animations(&mut self, now: Duration) -> bool {
        let _ = now;
        false
    }

    fn paint(&self, ctx: &mut PaintContext) {
        let _ = ctx;
    }

    fn mount(&mut self, now: Duration) {
        let _ = now;
    }

    fn unmount(&mut self) {}
}

/// Whether the thumb sits on the lowest value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbPhase {
    Lowest,
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbConfig {
    pub radius: f32,
    /// Colour while the thumb holds a value
    pub enabled_color: Color,
    /// Colour on the lowest value; `None` keeps `enabled_color`
    pub lowest_color: Option<Color>,
}

impl Default for ThumbConfig {
    fn default() -> Self {
        Self {
            radius: 6.0,
            enabled_color: Theme::MATERIAL.slider_style.lower_track_color,
            lowest_color: None,
        }
    }
}

pub struct Thumb {
    config: ThumbConfig,
    geometry: ThumbGeometry,
    /// Last track position requested by the owner
    x: f32,
    /// Resting left offset for `x`, used when a move is confirmed
    stable_left: f32,
    track_length: f32,
    left: AnimationState<f32>,
    scale: AnimationState<f32>,
    /// Clock time of the last tick; animations started by commands begin here
    now: Duration,
    /// Position listener attached (between mount and unmount)
    listening: bool,
    phase: ThumbPhase,
    color: Color,
    track_origin: (f32, f32),
    pan: PanResponder,
    dirty_flags: ChangeFlags,
}

impl Thumb {
    pub fn new(config: ThumbConfig) -> Self {
        Self {
            geometry: ThumbGeometry::new(config.radius, THUMB_BORDER_WIDTH),
            color: config.lowest_color.unwrap_or(config.enabled_color),
            config,
            x: 0.0,
            stable_left: 0.0,
            track_length: 0.0,
            left: AnimationState::new(0.0, Transition::instant()),
            scale: AnimationState::new(1.0, Transition::instant()),
            now: Duration::ZERO,
            listening: false,
            phase: ThumbPhase::Lowest,
            track_origin: (0.0, 0.0),
            pan: PanResponder::new(),
            dirty_flags: ChangeFlags::NEEDS_PAINT,
        }
    }

    pub fn config(&self) -> &ThumbConfig {
        &self.config
    }

    pub fn geometry(&self) -> &ThumbGeometry {
        &self.geometry
    }

    /// Last track position the thumb was moved to.
    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn track_length(&self) -> f32 {
        self.track_length
    }

    /// Resting left offset that a confirm would settle on.
    pub fn stable_left(&self) -> f32 {
        self.stable_left
    }

    /// Current scale factor.
    pub fn scale(&self) -> f32 {
        *self.scale.current()
    }

    /// Left offset as rendered, re-clamped for the current scale.
    pub fn left(&self) -> f32 {
        self.geometry
            .clamp_left(*self.left.current(), self.scale(), self.track_length)
    }

    /// Track position of the rendered centre.
    pub fn center(&self) -> f32 {
        self.geometry.center_of(self.left())
    }

    /// Horizontal extent of the visible circle in track space.
    pub fn visible_span(&self) -> (f32, f32) {
        self.geometry.visible_span(self.left(), self.scale())
    }

    pub fn phase(&self) -> ThumbPhase {
        self.phase
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_mounted(&self) -> bool {
        self.listening
    }

    pub fn is_animating(&self) -> bool {
        self.left.is_animating() || self.scale.is_animating()
    }

    pub fn needs_paint(&self) -> bool {
        self.dirty_flags.contains(ChangeFlags::NEEDS_PAINT)
    }

    pub fn clear_dirty(&mut self) {
        self.dirty_flags = ChangeFlags::empty();
    }

    fn place(&mut self, x: f32, track_length: f32) {
        self.x = x;
        self.track_length = track_length;
        self.stable_left = self.geometry.resting_left(x, track_length);
    }

    fn move_to(&mut self, x: f32, track_length: f32, programmatic: bool) {
        self.place(x, track_length);
        if !programmatic {
            self.scale.animate_with(
                THUMB_SCALE_RATIO,
                Transition::timed(MOVE_SCALE_DURATION_MS),
                self.now,
            );
        }
        let left = self.geometry.left_for(x, self.scale(), track_length);
        self.left.animate_with(left, Transition::instant(), self.now);
        self.on_sliding();
    }

    fn minimize(&mut self, duration_ms: f32) {
        let left = self
            .geometry
            .left_for(self.x, THUMB_SMALL_SCALE_RATIO, self.track_length);
        self.animate_both(THUMB_SMALL_SCALE_RATIO, left, duration_ms);
    }

    fn maximize(&mut self, duration_ms: f32) {
        if self.scale() >= 1.0 {
            log::trace!("Thumb: maximize ignored at scale {}", self.scale());
            return;
        }
        let left = self.geometry.resting_left(self.x, self.track_length);
        self.animate_both(1.0, left, duration_ms);
    }

    fn confirm_move_to(&mut self, x: Option<f32>) {
        if let Some(x) = x {
            self.place(x, self.track_length);
        }
        self.animate_both(1.0, self.stable_left, CONFIRM_DURATION_MS);
    }

    /// Scale and position animate in lockstep so the visible circle stays
    /// between its start and end bounds for the whole transition.
    fn animate_both(&mut self, scale: f32, left: f32, duration_ms: f32) {
        let transition = Transition::timed(duration_ms);
        self.scale.animate_with(scale, transition.clone(), self.now);
        self.left.animate_with(left, transition, self.now);
        self.on_sliding();
    }

    fn configure(&mut self, radius: f32, enabled_color: Color) {
        if radius != self.config.radius {
            self.config.radius = radius;
            self.geometry = ThumbGeometry::new(radius, THUMB_BORDER_WIDTH);
            self.stable_left = self.geometry.resting_left(self.x, self.track_length);
            if !self.left.is_animating() {
                let left = self.geometry.left_for(self.x, self.scale(), self.track_length);
                self.left.set_immediate(left);
            }
        }
        if enabled_color != self.config.enabled_color {
            self.config.enabled_color = enabled_color;
            self.color = self.phase_color();
        }
    }

    fn phase_color(&self) -> Color {
        match self.phase {
            ThumbPhase::Active => self.config.enabled_color,
            ThumbPhase::Lowest => self
                .config
                .lowest_color
                .unwrap_or(self.config.enabled_color),
        }
    }

    /// Position listener: runs whenever the left offset may have changed.
    fn on_sliding(&mut self) {
        self.dirty_flags |= ChangeFlags::NEEDS_PAINT;
        if !self.listening {
            return;
        }

        let phase = if self.x <= 0.0 {
            ThumbPhase::Lowest
        } else {
            ThumbPhase::Active
        };
        if phase == self.phase {
            return;
        }

        match phase {
            ThumbPhase::Active => log::debug!("Thumb: leaving lowest value, exploding"),
            ThumbPhase::Lowest => log::debug!("Thumb: reached lowest value, collapsing"),
        }
        self.phase = phase;
        self.color = self.phase_color();
    }
}

impl Default for Thumb {
    fn default() -> Self {
        Self::new(ThumbConfig::default())
    }
}

impl ThumbHandle for Thumb {
    fn send(&mut self, command: ThumbCommand) {
        log::trace!("Thumb: {:?}", command);
        match command {
            ThumbCommand::MoveTo { x, track_length } => self.move_to(x, track_length, false),
            ThumbCommand::MoveToProg { x, track_length } => self.move_to(x, track_length, true),
            ThumbCommand::Minimize { duration_ms } => self.minimize(duration_ms),
            ThumbCommand::Maximize { duration_ms } => self.maximize(duration_ms),
            ThumbCommand::ConfirmMoveTo { x } => self.confirm_move_to(x),
            ThumbCommand::Configure {
                radius,
                enabled_color,
            } => self.configure(radius, enabled_color),
        }
    }

    fn gesture(&mut self, event: &Event) -> Option<PanGesture> {
        let (origin_x, center_y) = self.track_origin;
        let cx = origin_x + self.center();
        // Never let the touch target shrink below the full-size circle
        let reach = self.geometry.container_radius() * self.scale().max(1.0);
        self.pan.handle(event, origin_x, |x, y| {
            let dx = x - cx;
            let dy = y - center_y;
            dx * dx + dy * dy <= reach * reach
        })
    }

    fn has_gesture(&self) -> bool {
        self.pan.is_active()
    }

    fn set_track_origin(&mut self, x: f32, center_y: f32) {
        if self.track_origin != (x, center_y) {
            self.track_origin = (x, center_y);
            self.dirty_flags |= ChangeFlags::NEEDS_PAINT;
        }
    }

    fn advance_animations(&mut self, now: Duration) -> bool {
        self.now = now;
        if self.scale.advance(now).is_changed() {
            self.dirty_flags |= ChangeFlags::NEEDS_PAINT;
        }
        if self.left.advance(now).is_changed() {
            self.on_sliding();
        }
        self.is_animating()
    }

    fn paint(&self, ctx: &mut PaintContext) {
        let (origin_x, center_y) = self.track_origin;
        let radius = self.geometry.container_radius() * self.scale();
        ctx.draw_circle(origin_x + self.center(), center_y, radius, self.color);
    }

    fn mount(&mut self, now: Duration) {
        self.now = now;
        self.listening = true;
        self.send(ThumbCommand::Minimize { duration_ms: 0.0 });
    }

    fn unmount(&mut self) {
        self.listening = false;
        self.left.stop();
        self.scale.stop();
        self.pan.terminate();
    }
}
