//! The slider track and its touch state machine.
//!
//! A [`Slider`] owns the authoritative value and the measured track length.
//! Touches are translated into track positions, track positions into values,
//! and the thumb is told where to go through its [`ThumbHandle`].

use std::sync::Arc;
use std::time::Duration;

use crate::error::ConfigError;
use crate::geometry::{TrackGeometry, ValueRange};
use crate::invalidation::ChangeFlags;
use crate::layout::{Constraints, Size};
use crate::renderer::PaintContext;
use crate::theme::Theme;

use super::gesture::{PanGesture, PanResponder};
use super::thumb::{Thumb, ThumbCommand, ThumbConfig, ThumbHandle};
use super::{impl_dirty_flags, Color, Event, EventResponse, Rect, Widget};

/// Half the height reserved above and below the track centre
const BASIC_HEIGHT_V: f32 = 25.0;
/// Extra vertical room enlarging the touchable area
const TRACK_EXTRA_MARGIN_V: f32 = 5.0;
/// Used when the parent does not bound the width
const DEFAULT_WIDTH: f32 = 200.0;
const THUMB_TOGGLE_DURATION_MS: f32 = 350.0;

pub type ValueCallback = Arc<dyn Fn(f32) + Send + Sync>;

/// Input to the slider's touch state machine, in track coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    Down { x: f32 },
    Move { x: f32 },
    Up { x: f32 },
    /// The gesture was cancelled; no coordinate can be trusted.
    Cancel,
}

/// Plain configuration for [`Slider::from_config`].
#[derive(Debug, Clone, PartialEq)]
pub struct SliderConfig {
    pub min: f32,
    pub max: f32,
    pub value: f32,
    /// Thickness of the track
    pub track_size: f32,
    pub thumb_radius: f32,
    /// Filled segment and thumb; theme colour when `None`
    pub lower_track_color: Option<Color>,
    /// Unfilled segment; theme colour when `None`
    pub upper_track_color: Option<Color>,
    pub theme: Theme,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            value: 0.0,
            track_size: 2.0,
            thumb_radius: 6.0,
            lower_track_color: None,
            upper_track_color: None,
            theme: Theme::default(),
        }
    }
}

impl SliderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("min", self.min),
            ("max", self.max),
            ("value", self.value),
            ("track_size", self.track_size),
            ("thumb_radius", self.thumb_radius),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        if self.min >= self.max {
            return Err(ConfigError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        if self.track_size <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "track_size",
                value: self.track_size,
            });
        }
        if self.thumb_radius <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "thumb_radius",
                value: self.thumb_radius,
            });
        }
        Ok(())
    }
}

pub struct Slider<H: ThumbHandle = Thumb> {
    range: ValueRange,
    value: f32,
    /// Value requested through the builder, re-clamped whenever the range changes
    initial_value: Option<f32>,
    track_size: f32,
    thumb_radius: f32,
    lower_track_color: Option<Color>,
    upper_track_color: Option<Color>,
    theme: Theme,
    on_change: Option<ValueCallback>,
    on_confirm: Option<ValueCallback>,
    track: TrackGeometry,
    /// Width of the filled segment
    lower_track_length: f32,
    /// Pointer x at the start of the gesture, committed again on release
    prev_pointer_x: f32,
    is_user_using_bar: bool,
    pan: PanResponder,
    thumb: H,
    bounds: Rect,
    dirty_flags: ChangeFlags,
}

/// Create a slider with default range `0..=100` and the default thumb.
pub fn slider() -> Slider {
    Slider::new()
}

impl Slider<Thumb> {
    pub fn new() -> Self {
        Self::with_thumb(Thumb::new(ThumbConfig::default()))
    }

    /// Build a slider from a checked configuration.
    pub fn from_config(config: SliderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let range = ValueRange::new(config.min, config.max);
        let value = range.clamp(config.value);
        if value != config.value {
            log::warn!(
                "Slider: initial value {} outside {}..={}, clamped to {}",
                config.value,
                config.min,
                config.max,
                value
            );
        }

        let mut slider = Self::new();
        slider.range = range;
        slider.value = value;
        slider.track_size = config.track_size;
        slider.thumb_radius = config.thumb_radius;
        slider.lower_track_color = config.lower_track_color;
        slider.upper_track_color = config.upper_track_color;
        slider.theme = config.theme;
        slider.sync_thumb_config();
        Ok(slider)
    }
}

impl Default for Slider<Thumb> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: ThumbHandle> Slider<H> {
    /// Create a slider that drives the given thumb handle.
    pub fn with_thumb(thumb: H) -> Self {
        let defaults = SliderConfig::default();
        let mut slider = Self {
            range: ValueRange::new(defaults.min, defaults.max),
            value: defaults.value,
            initial_value: None,
            track_size: defaults.track_size,
            thumb_radius: defaults.thumb_radius,
            lower_track_color: defaults.lower_track_color,
            upper_track_color: defaults.upper_track_color,
            theme: defaults.theme,
            on_change: None,
            on_confirm: None,
            track: TrackGeometry::default(),
            lower_track_length: 0.0,
            prev_pointer_x: 0.0,
            is_user_using_bar: false,
            pan: PanResponder::new(),
            thumb,
            bounds: Rect::default(),
            dirty_flags: ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT,
        };
        slider.sync_thumb_config();
        slider
    }

    // Builder methods. The range is not validated; the value is kept inside
    // it regardless of the order the builders are called in.

    pub fn min(mut self, min: f32) -> Self {
        self.range.min = min;
        self.reapply_value();
        self
    }

    pub fn max(mut self, max: f32) -> Self {
        self.range.max = max;
        self.reapply_value();
        self
    }

    /// Initial value, clamped to the range.
    pub fn value(mut self, value: f32) -> Self {
        self.initial_value = Some(value);
        self.reapply_value();
        self
    }

    pub fn track_size(mut self, track_size: f32) -> Self {
        self.track_size = track_size;
        self.dirty_flags |= ChangeFlags::NEEDS_LAYOUT;
        self
    }

    pub fn thumb_radius(mut self, radius: f32) -> Self {
        self.thumb_radius = radius;
        self.sync_thumb_config();
        self
    }

    pub fn lower_track_color(mut self, color: Color) -> Self {
        self.lower_track_color = Some(color);
        self.sync_thumb_config();
        self
    }

    pub fn upper_track_color(mut self, color: Color) -> Self {
        self.upper_track_color = Some(color);
        self.dirty_flags |= ChangeFlags::NEEDS_PAINT;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self.sync_thumb_config();
        self
    }

    /// Called with every live value update during a drag.
    pub fn on_change<F: Fn(f32) + Send + Sync + 'static>(mut self, callback: F) -> Self {
        self.on_change = Some(Arc::new(callback));
        self
    }

    /// Called once with the final value when a drag ends.
    pub fn on_confirm<F: Fn(f32) + Send + Sync + 'static>(mut self, callback: F) -> Self {
        self.on_confirm = Some(Arc::new(callback));
        self
    }

    // Accessors

    /// Last known logical value.
    pub fn get_value(&self) -> f32 {
        self.value
    }

    /// Set the value from outside.
    ///
    /// Ignored while the user is dragging. Otherwise the value is clamped to
    /// the range and stored without firing `on_change`, and the thumb jumps
    /// to the matching position.
    pub fn set_value(&mut self, value: f32) {
        if self.is_user_using_bar {
            log::debug!("Slider: set_value({}) ignored during drag", value);
            return;
        }
        self.value = self.range.clamp(value);
        self.ani_update_value(self.value);
    }

    pub fn range(&self) -> ValueRange {
        self.range
    }

    pub fn track_length(&self) -> f32 {
        self.track.length
    }

    pub fn lower_track_length(&self) -> f32 {
        self.lower_track_length
    }

    pub fn is_user_using_bar(&self) -> bool {
        self.is_user_using_bar
    }

    pub fn thumb(&self) -> &H {
        &self.thumb
    }

    pub fn thumb_mut(&mut self) -> &mut H {
        &mut self.thumb
    }

    fn resolved_lower_color(&self) -> Color {
        self.lower_track_color
            .unwrap_or(self.theme.slider_style.lower_track_color)
    }

    fn resolved_upper_color(&self) -> Color {
        self.upper_track_color
            .unwrap_or(self.theme.slider_style.upper_track_color)
    }

    fn sync_thumb_config(&mut self) {
        self.thumb.send(ThumbCommand::Configure {
            radius: self.thumb_radius,
            enabled_color: self.resolved_lower_color(),
        });
        self.dirty_flags |= ChangeFlags::NEEDS_PAINT;
    }

    fn reapply_value(&mut self) {
        self.value = self.range.clamp(self.initial_value.unwrap_or(self.value));
        if self.track.is_measured() {
            self.ani_update_value(self.value);
        }
    }

    /// Track layout measured `width`; re-derive the thumb from the value.
    pub fn on_track_layout(&mut self, width: f32) {
        if self.track.length != width {
            log::debug!(
                "Slider: track length {} -> {}",
                self.track.length,
                width
            );
            self.track = TrackGeometry::new(width);
            self.ani_update_value(self.value);
        }
    }

    pub fn maximize_thumb(&mut self) {
        self.thumb.send(ThumbCommand::Maximize {
            duration_ms: THUMB_TOGGLE_DURATION_MS,
        });
    }

    pub fn minimize_thumb(&mut self) {
        self.thumb.send(ThumbCommand::Minimize {
            duration_ms: THUMB_TOGGLE_DURATION_MS,
        });
    }

    /// Drive the touch state machine directly.
    pub fn handle_touch(&mut self, event: TouchEvent) {
        self.is_user_using_bar = false;
        match event {
            TouchEvent::Down { x } | TouchEvent::Move { x } => {
                self.update_value_by_touch(x);
                self.is_user_using_bar = true;
            }
            TouchEvent::Up { x } => self.confirm_update_value_by_touch(Some(x)),
            // A cancelled event's coordinate is not trustworthy
            TouchEvent::Cancel => self.confirm_update_value_by_touch(None),
        }
    }

    fn handle_pan(&mut self, gesture: PanGesture) {
        match gesture {
            PanGesture::Grant { x } => {
                self.prev_pointer_x = x;
                self.handle_touch(TouchEvent::Down { x });
            }
            PanGesture::Move { dx } => {
                self.handle_touch(TouchEvent::Move {
                    x: self.prev_pointer_x + dx,
                });
            }
            PanGesture::Release { dx } => {
                self.prev_pointer_x += dx;
                self.handle_touch(TouchEvent::Up {
                    x: self.prev_pointer_x,
                });
            }
            PanGesture::Terminate { .. } => self.handle_touch(TouchEvent::Cancel),
        }
    }

    fn internal_set_value(&mut self, value: f32) {
        self.value = value;
        self.emit_change(value);
    }

    fn emit_change(&self, value: f32) {
        log::trace!("Slider: change {}", value);
        if let Some(ref callback) = self.on_change {
            callback(value);
        }
    }

    fn emit_confirm(&self) {
        log::debug!("Slider: confirm {}", self.value);
        if let Some(ref callback) = self.on_confirm {
            callback(self.value);
        }
    }

    fn ani_update_value(&mut self, value: f32) {
        if !self.track.is_measured() {
            return;
        }
        let x = self
            .track
            .position_of(self.range.clamp(value), &self.range);
        self.move_thumb(x, true);
    }

    fn update_value_by_touch(&mut self, x: f32) {
        let touch = self.track.touch(x);
        let value = self.range.value_at(touch.ratio);
        // Reported in real time
        self.internal_set_value(value);
        self.move_thumb(touch.x, false);
    }

    fn confirm_update_value_by_touch(&mut self, x: Option<f32>) {
        match x {
            Some(x) => {
                let touch = self.track.touch(x);
                let value = self.range.value_at(touch.ratio);
                if value != self.value {
                    self.internal_set_value(value);
                    self.lower_track_length = touch.x;
                }
                self.thumb
                    .send(ThumbCommand::ConfirmMoveTo { x: Some(touch.x) });
            }
            None => self.thumb.send(ThumbCommand::ConfirmMoveTo { x: None }),
        }
        self.dirty_flags |= ChangeFlags::NEEDS_PAINT;
        self.emit_confirm();
    }

    fn move_thumb(&mut self, x: f32, programmatic: bool) {
        let track_length = self.track.length;
        self.thumb.send(if programmatic {
            ThumbCommand::MoveToProg { x, track_length }
        } else {
            ThumbCommand::MoveTo { x, track_length }
        });
        self.lower_track_length = x;
        self.dirty_flags |= ChangeFlags::NEEDS_PAINT;
    }

    /// Distance from the slider's top edge to the track's top edge.
    fn track_margin_v(&self) -> f32 {
        BASIC_HEIGHT_V + TRACK_EXTRA_MARGIN_V - self.track_size / 2.0
    }

    /// Track bounds in surface coordinates.
    pub fn track_rect(&self) -> Rect {
        Rect::new(
            self.bounds.x,
            self.bounds.y + self.track_margin_v(),
            self.track.length,
            self.track_size,
        )
    }

    fn track_center_y(&self) -> f32 {
        self.bounds.y + BASIC_HEIGHT_V + TRACK_EXTRA_MARGIN_V
    }
}

impl<H: ThumbHandle> Widget for Slider<H> {
    fn advance_animations(&mut self, now: Duration) -> bool {
        let animating = self.thumb.advance_animations(now);
        if animating {
            self.dirty_flags |= ChangeFlags::NEEDS_PAINT;
        }
        animating
    }

    fn layout(&mut self, constraints: Constraints) -> Size {
        let width = constraints.max_width_or(DEFAULT_WIDTH);
        let height = (BASIC_HEIGHT_V + TRACK_EXTRA_MARGIN_V) * 2.0;
        let size = constraints.constrain(Size::new(width, height));
        self.bounds.width = size.width;
        self.bounds.height = size.height;
        self.on_track_layout(size.width);
        self.dirty_flags.remove(ChangeFlags::NEEDS_LAYOUT);
        size
    }

    fn set_origin(&mut self, x: f32, y: f32) {
        self.bounds.x = x;
        self.bounds.y = y;
        let center_y = self.track_center_y();
        self.thumb.set_track_origin(x, center_y);
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn paint(&self, ctx: &mut PaintContext) {
        let track = self.track_rect();
        ctx.draw_rect(track, self.resolved_upper_color());
        ctx.draw_rect(
            Rect {
                width: self.lower_track_length,
                ..track
            },
            self.resolved_lower_color(),
        );
        self.thumb.paint(ctx);
    }

    fn event(&mut self, event: &Event) -> EventResponse {
        if !self.pan.is_active() {
            if let Some(gesture) = self.thumb.gesture(event) {
                self.handle_pan(gesture);
                return EventResponse::Handled;
            }
            // The thumb keeps its gesture until release or cancel
            if self.thumb.has_gesture() {
                return EventResponse::Ignored;
            }
        }

        let bounds = self.bounds;
        match self
            .pan
            .handle(event, bounds.x, |x, y| bounds.contains(x, y))
        {
            Some(gesture) => {
                self.handle_pan(gesture);
                EventResponse::Handled
            }
            None => EventResponse::Ignored,
        }
    }

    fn mount(&mut self, now: Duration) {
        self.thumb.mount(now);
    }

    fn unmount(&mut self) {
        if self.pan.terminate().is_some() || self.thumb.has_gesture() {
            self.is_user_using_bar = false;
        }
        self.thumb.unmount();
    }

    impl_dirty_flags!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingThumb {
        commands: Vec<ThumbCommand>,
    }

    impl ThumbHandle for RecordingThumb {
        fn send(&mut self, command: ThumbCommand) {
            self.commands.push(command);
        }
    }

    fn recorded(track_length: f32) -> Slider<RecordingThumb> {
        let mut slider = Slider::with_thumb(RecordingThumb::default());
        slider.layout(Constraints::loose(Size::new(track_length, 100.0)));
        slider.thumb_mut().commands.clear();
        slider
    }

    fn record_values() -> (Arc<Mutex<Vec<f32>>>, impl Fn(f32) + Send + Sync + 'static) {
        let values = Arc::new(Mutex::new(Vec::new()));
        let sink = values.clone();
        (values, move |v| sink.lock().unwrap().push(v))
    }

    #[test]
    fn test_touch_down_sets_value_and_moves_thumb() {
        let mut slider = recorded(200.0);
        slider.handle_touch(TouchEvent::Down { x: 50.0 });

        assert_eq!(slider.get_value(), 25.0);
        assert!(slider.is_user_using_bar());
        assert_eq!(slider.lower_track_length(), 50.0);
        assert_eq!(
            slider.thumb().commands,
            vec![ThumbCommand::MoveTo {
                x: 50.0,
                track_length: 200.0
            }]
        );
    }

    #[test]
    fn test_move_past_end_clamps_to_max() {
        let mut slider = recorded(200.0);
        slider.handle_touch(TouchEvent::Down { x: 100.0 });
        slider.handle_touch(TouchEvent::Move { x: 250.0 });
        assert_eq!(slider.get_value(), 100.0);
        assert_eq!(slider.lower_track_length(), 200.0);
    }

    #[test]
    fn test_up_confirms_and_ends_drag() {
        let (confirmed, sink) = record_values();
        let mut slider = recorded(200.0).on_confirm(sink);

        slider.handle_touch(TouchEvent::Down { x: 80.0 });
        slider.handle_touch(TouchEvent::Up { x: 80.0 });

        assert!(!slider.is_user_using_bar());
        assert_eq!(*confirmed.lock().unwrap(), vec![40.0]);
        assert_eq!(
            slider.thumb().commands.last(),
            Some(&ThumbCommand::ConfirmMoveTo { x: Some(80.0) })
        );
    }

    #[test]
    fn test_up_at_new_position_updates_value() {
        let (changes, sink) = record_values();
        let mut slider = recorded(200.0).on_change(sink);

        slider.handle_touch(TouchEvent::Down { x: 80.0 });
        slider.handle_touch(TouchEvent::Up { x: 100.0 });

        assert_eq!(slider.get_value(), 50.0);
        assert_eq!(*changes.lock().unwrap(), vec![40.0, 50.0]);
    }

    #[test]
    fn test_cancel_keeps_last_committed_position() {
        let (confirmed, sink) = record_values();
        let mut slider = recorded(200.0).on_confirm(sink);

        slider.handle_touch(TouchEvent::Down { x: 20.0 });
        slider.handle_touch(TouchEvent::Move { x: 80.0 });
        slider.handle_touch(TouchEvent::Cancel);

        assert_eq!(slider.get_value(), 40.0);
        assert_eq!(*confirmed.lock().unwrap(), vec![40.0]);
        assert_eq!(
            slider.thumb().commands.last(),
            Some(&ThumbCommand::ConfirmMoveTo { x: None })
        );
    }

    #[test]
    fn test_set_value_is_silent_and_programmatic() {
        let (changes, sink) = record_values();
        let mut slider = recorded(200.0).on_change(sink);

        slider.set_value(10.0);

        assert_eq!(slider.get_value(), 10.0);
        assert!(changes.lock().unwrap().is_empty());
        assert_eq!(
            slider.thumb().commands,
            vec![ThumbCommand::MoveToProg {
                x: 20.0,
                track_length: 200.0
            }]
        );
    }

    #[test]
    fn test_set_value_ignored_during_drag() {
        let mut slider = recorded(200.0);
        slider.handle_touch(TouchEvent::Down { x: 100.0 });
        slider.set_value(10.0);
        assert_eq!(slider.get_value(), 50.0);
    }

    #[test]
    fn test_set_value_clamps() {
        let mut slider = recorded(200.0);
        slider.set_value(150.0);
        assert_eq!(slider.get_value(), 100.0);
    }

    #[test]
    fn test_set_value_before_layout_only_stores() {
        let mut slider = Slider::with_thumb(RecordingThumb::default());
        slider.thumb_mut().commands.clear();
        slider.set_value(30.0);
        assert_eq!(slider.get_value(), 30.0);
        assert!(slider.thumb().commands.is_empty());
    }

    #[test]
    fn test_track_layout_reapplies_value() {
        let mut slider = Slider::with_thumb(RecordingThumb::default()).value(25.0);
        slider.thumb_mut().commands.clear();

        slider.on_track_layout(200.0);
        slider.on_track_layout(200.0);
        slider.on_track_layout(400.0);

        assert_eq!(
            slider.thumb().commands,
            vec![
                ThumbCommand::MoveToProg {
                    x: 50.0,
                    track_length: 200.0
                },
                ThumbCommand::MoveToProg {
                    x: 100.0,
                    track_length: 400.0
                },
            ]
        );
    }

    #[test]
    fn test_thumb_radius_is_forwarded() {
        let slider = Slider::with_thumb(RecordingThumb::default())
            .lower_track_color(Color::BLACK)
            .thumb_radius(9.0);
        assert_eq!(
            slider.thumb().commands.last(),
            Some(&ThumbCommand::Configure {
                radius: 9.0,
                enabled_color: Color::BLACK
            })
        );
    }

    #[test]
    fn test_toggle_thumb_size() {
        let mut slider = recorded(200.0);
        slider.maximize_thumb();
        slider.minimize_thumb();
        assert_eq!(
            slider.thumb().commands,
            vec![
                ThumbCommand::Maximize { duration_ms: 350.0 },
                ThumbCommand::Minimize { duration_ms: 350.0 },
            ]
        );
    }

    #[test]
    fn test_pointer_events_drive_gesture() {
        let mut slider = recorded(200.0);
        slider.set_origin(10.0, 0.0);

        assert_eq!(
            slider.event(&Event::PointerDown { x: 30.0, y: 30.0 }),
            EventResponse::Handled
        );
        assert_eq!(slider.get_value(), 10.0);

        slider.event(&Event::PointerMove { x: 110.0, y: 80.0 });
        assert_eq!(slider.get_value(), 50.0);

        slider.event(&Event::PointerUp { x: 150.0, y: 80.0 });
        assert_eq!(slider.get_value(), 70.0);
        assert!(!slider.is_user_using_bar());
    }

    #[test]
    fn test_second_press_during_thumb_drag_is_ignored() {
        let mut slider = Slider::new();
        slider.layout(Constraints::loose(Size::new(200.0, 100.0)));
        slider.set_origin(0.0, 0.0);
        slider.mount(Duration::ZERO);
        slider.set_value(50.0);

        // Thumb centre sits at (100, 30)
        assert_eq!(
            slider.event(&Event::PointerDown { x: 100.0, y: 30.0 }),
            EventResponse::Handled
        );
        assert!(slider.thumb().has_gesture());

        assert_eq!(
            slider.event(&Event::PointerDown { x: 20.0, y: 30.0 }),
            EventResponse::Ignored
        );
        assert_eq!(slider.get_value(), 50.0);

        // The original drag carries on from where it started
        slider.event(&Event::PointerMove { x: 140.0, y: 30.0 });
        assert_eq!(slider.get_value(), 70.0);
        slider.event(&Event::PointerUp { x: 140.0, y: 30.0 });
        assert!(!slider.thumb().has_gesture());
        assert!(!slider.is_user_using_bar());
    }

    #[test]
    fn test_pointer_outside_is_ignored() {
        let mut slider = recorded(200.0);
        assert_eq!(
            slider.event(&Event::PointerDown { x: 50.0, y: 500.0 }),
            EventResponse::Ignored
        );
        assert_eq!(
            slider.event(&Event::PointerMove { x: 50.0, y: 30.0 }),
            EventResponse::Ignored
        );
    }

    #[test]
    fn test_layout_size() {
        let mut slider = Slider::with_thumb(RecordingThumb::default());
        let size = slider.layout(Constraints::unbounded());
        assert_eq!(size, Size::new(200.0, 60.0));
        assert_eq!(slider.track_length(), 200.0);
        assert!(!slider.needs_layout());
    }

    #[test]
    fn test_paint_track_segments() {
        let mut slider = recorded(200.0)
            .track_size(4.0)
            .lower_track_color(Color::BLACK)
            .upper_track_color(Color::WHITE);
        slider.set_value(50.0);

        let mut ctx = PaintContext::new();
        slider.paint(&mut ctx);
        assert_eq!(
            ctx.commands(),
            &[
                crate::renderer::DrawCommand::rounded_rect(
                    Rect::new(0.0, 28.0, 200.0, 4.0),
                    Color::WHITE,
                    0.0
                ),
                crate::renderer::DrawCommand::rounded_rect(
                    Rect::new(0.0, 28.0, 100.0, 4.0),
                    Color::BLACK,
                    0.0
                ),
            ]
        );
    }

    #[test]
    fn test_builder_value_is_clamped() {
        assert_eq!(slider().value(500.0).get_value(), 100.0);
        assert_eq!(slider().value(-5.0).get_value(), 0.0);

        // Order of range and value builders does not matter
        assert_eq!(slider().value(500.0).max(1000.0).get_value(), 500.0);
        assert_eq!(slider().max(1000.0).value(500.0).get_value(), 500.0);
        assert_eq!(slider().value(5.0).min(10.0).max(20.0).get_value(), 10.0);
    }

    #[test]
    fn test_config_validation() {
        assert!(SliderConfig::default().validate().is_ok());

        let inverted = SliderConfig {
            min: 10.0,
            max: 0.0,
            ..Default::default()
        };
        assert_eq!(
            inverted.validate(),
            Err(ConfigError::InvalidRange { min: 10.0, max: 0.0 })
        );

        let nan = SliderConfig {
            value: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            nan.validate(),
            Err(ConfigError::NonFinite { field: "value", .. })
        ));

        let flat = SliderConfig {
            track_size: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            flat.validate(),
            Err(ConfigError::NonPositive {
                field: "track_size",
                ..
            })
        ));
    }

    #[test]
    fn test_from_config_clamps_initial_value() {
        let slider = Slider::from_config(SliderConfig {
            value: 500.0,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(slider.get_value(), 100.0);
    }
}
