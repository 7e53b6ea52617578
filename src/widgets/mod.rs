pub mod gesture;
pub mod slider;
pub mod thumb;
pub mod widget;

/// Macro to implement common dirty flag methods for simple widgets.
macro_rules! impl_dirty_flags {
    () => {
        fn mark_dirty(&mut self, flags: crate::invalidation::ChangeFlags) {
            self.dirty_flags |= flags;
        }
        fn needs_layout(&self) -> bool {
            self.dirty_flags
                .contains(crate::invalidation::ChangeFlags::NEEDS_LAYOUT)
        }
        fn needs_paint(&self) -> bool {
            self.dirty_flags
                .contains(crate::invalidation::ChangeFlags::NEEDS_PAINT)
        }
        fn clear_dirty(&mut self) {
            self.dirty_flags = crate::invalidation::ChangeFlags::empty();
        }
    };
}
pub(crate) use impl_dirty_flags;

pub use gesture::{PanGesture, PanResponder};
pub use slider::{slider, Slider, SliderConfig, TouchEvent, ValueCallback};
pub use thumb::{
    Thumb, ThumbCommand, ThumbConfig, ThumbHandle, ThumbPhase, THUMB_BORDER_WIDTH,
    THUMB_SCALE_RATIO, THUMB_SMALL_SCALE_RATIO,
};
pub use widget::{Color, Event, EventResponse, Rect, Widget};
