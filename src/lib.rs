pub mod animation;
pub mod app;
pub mod clock;
pub mod error;
pub mod geometry;
pub mod invalidation;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod widgets;

pub use app::{App, AppConfig, UpdateCallback};
pub use error::ConfigError;

pub mod prelude {
    pub use crate::animation::{Animatable, AnimationState, TimingFunction, Transition};
    pub use crate::clock::{Clock, ManualClock, SystemClock};
    pub use crate::geometry::{ThumbGeometry, TrackGeometry, ValueRange};
    pub use crate::invalidation::ChangeFlags;
    pub use crate::layout::{Constraints, Size};
    pub use crate::renderer::{DrawCommand, PaintContext};
    pub use crate::theme::{SliderStyle, Theme};
    pub use crate::widgets::{
        slider, Color, Event, EventResponse, Rect, Slider, SliderConfig, Thumb, ThumbCommand,
        ThumbConfig, ThumbHandle, ThumbPhase, TouchEvent, Widget,
    };
    pub use crate::{App, AppConfig, ConfigError};
}
