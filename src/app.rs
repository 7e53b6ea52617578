//! Headless frame driver.
//!
//! [`App`] owns a root widget and a [`Clock`]. Each call to [`App::frame`]
//! runs one frame: advance animations to the clock's time, lay out, paint.
//! The resulting display list is handed back instead of being sent to a GPU.

use std::time::Duration;

use crate::clock::{Clock, ManualClock, SystemClock};
use crate::layout::{Constraints, Size};
use crate::renderer::PaintContext;
use crate::widgets::{Event, EventResponse, Widget};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: 320.0,
            height: 60.0,
        }
    }
}

/// A callback that gets called each frame before animations are advanced.
pub type UpdateCallback = Box<dyn FnMut()>;

pub struct App<W: Widget, C: Clock = SystemClock> {
    config: AppConfig,
    root: W,
    clock: C,
    on_update: Option<UpdateCallback>,
    paint_ctx: PaintContext,
    mounted: bool,
    animating: bool,
    frames: u64,
}

impl<W: Widget> App<W> {
    pub fn new(root: W) -> Self {
        Self::with_config(root, AppConfig::default())
    }

    pub fn with_config(root: W, config: AppConfig) -> Self {
        Self::with_clock(root, config, SystemClock::new())
    }
}

impl<W: Widget, C: Clock> App<W, C> {
    pub fn with_clock(root: W, config: AppConfig, clock: C) -> Self {
        Self {
            config,
            root,
            clock,
            on_update: None,
            paint_ctx: PaintContext::new(),
            mounted: false,
            animating: false,
            frames: 0,
        }
    }

    pub fn width(mut self, width: f32) -> Self {
        self.config.width = width;
        self.root.mark_dirty(crate::invalidation::ChangeFlags::NEEDS_LAYOUT);
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.config.height = height;
        self.root.mark_dirty(crate::invalidation::ChangeFlags::NEEDS_LAYOUT);
        self
    }

    /// Set a callback that gets called each frame before animations advance.
    pub fn on_update<F: FnMut() + 'static>(mut self, callback: F) -> Self {
        self.on_update = Some(Box::new(callback));
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn root(&self) -> &W {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut W {
        &mut self.root
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Number of frames produced so far.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// True if the last frame left an animation running.
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    fn ensure_mounted(&mut self) {
        if !self.mounted {
            let now = self.clock.now();
            log::debug!("App: mounting root at {:?}", now);
            self.root.mount(now);
            self.mounted = true;
            self.layout();
        }
    }

    fn layout(&mut self) -> Size {
        let constraints = Constraints::loose(Size::new(self.config.width, self.config.height));
        let size = self.root.layout(constraints);
        self.root.set_origin(0.0, 0.0);
        size
    }

    /// Deliver one input event to the root.
    ///
    /// Animations are brought up to date first so anything the event starts
    /// begins at the current time.
    pub fn dispatch(&mut self, event: &Event) -> EventResponse {
        self.ensure_mounted();
        self.animating = self.root.advance_animations(self.clock.now());
        let response = self.root.event(event);
        log::trace!("App: {:?} -> {:?}", event, response);
        response
    }

    /// Run one frame and return its display list.
    pub fn frame(&mut self) -> &PaintContext {
        self.ensure_mounted();
        if let Some(ref mut callback) = self.on_update {
            callback();
        }

        let now = self.clock.now();
        self.animating = self.root.advance_animations(now);
        self.layout();

        self.paint_ctx.clear();
        self.root.paint(&mut self.paint_ctx);
        self.root.clear_dirty();
        self.frames += 1;

        log::trace!(
            "App: frame {} at {:?}, {} commands, animating={}",
            self.frames,
            now,
            self.paint_ctx.len(),
            self.animating
        );
        &self.paint_ctx
    }

    /// Display list of the last frame.
    pub fn last_frame(&self) -> &PaintContext {
        &self.paint_ctx
    }

    /// Unmount the root. A later frame or event mounts it again.
    pub fn close(&mut self) {
        if self.mounted {
            log::debug!("App: unmounting root");
            self.root.unmount();
            self.mounted = false;
            self.animating = false;
        }
    }
}

impl<W: Widget> App<W, ManualClock> {
    /// Step the clock by `frame_step` and render until no animation is running.
    ///
    /// Stops after `max_frames` frames. Returns the number of frames rendered.
    pub fn run_until_idle(&mut self, max_frames: usize, frame_step: Duration) -> usize {
        let mut rendered = 0;
        self.frame();
        rendered += 1;
        while self.animating && rendered < max_frames {
            self.clock.advance(frame_step);
            self.frame();
            rendered += 1;
        }
        if self.animating {
            log::warn!("App: still animating after {} frames", rendered);
        }
        rendered
    }
}
