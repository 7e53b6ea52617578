use std::time::Duration;

use super::{Animatable, Transition};

/// Result of advancing an animation, indicating whether the value changed
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceResult<T> {
    /// Value did not change (animation not running or same value)
    NoChange,
    /// Value changed to a new value
    Changed(T),
}

impl<T> AdvanceResult<T> {
    /// Returns true if the value changed
    pub fn is_changed(&self) -> bool {
        matches!(self, AdvanceResult::Changed(_))
    }
}

/// Interpolation state for a single animated scalar (or colour).
///
/// The state never looks at a clock on its own: every operation that depends
/// on time takes `now`, measured from the epoch of whatever [`Clock`] drives
/// the widget tree. Feeding the same sequence of times always produces the
/// same sequence of values.
///
/// [`Clock`]: crate::clock::Clock
pub struct AnimationState<T: Animatable> {
    /// Current interpolated value
    current: T,
    /// Value the animation is heading to
    target: T,
    /// Value when animation started
    start: T,
    /// Clock time when animation started
    start_time: Duration,
    /// Transition configuration
    transition: Transition,
    running: bool,
}

impl<T: Animatable> AnimationState<T> {
    pub fn new(initial_value: T, transition: Transition) -> Self {
        Self {
            current: initial_value.clone(),
            target: initial_value.clone(),
            start: initial_value,
            start_time: Duration::ZERO,
            transition,
            running: false,
        }
    }

    /// Start animating to a new target value.
    ///
    /// The animation restarts from the current (possibly mid-flight) value.
    /// Retargeting to the target that is already in flight is a no-op.
    pub fn animate_to(&mut self, new_target: T, now: Duration) {
        if self.transition.is_instant() {
            self.set_immediate(new_target);
            return;
        }

        if self.running && new_target == self.target {
            return;
        }
        if !self.running && new_target == self.current {
            return;
        }

        self.start = self.current.clone();
        self.target = new_target;
        self.start_time = now;
        self.running = true;
    }

    /// Replace the transition, then animate to `new_target`.
    ///
    /// A running animation whose transition changes restarts from its
    /// current value at `now`, even when the target stays the same.
    pub fn animate_with(&mut self, new_target: T, transition: Transition, now: Duration) {
        if self.running && transition != self.transition {
            self.start = self.current.clone();
            self.start_time = now;
        }
        self.transition = transition;
        self.animate_to(new_target, now);
    }

    /// Advance the animation to `now` and return whether the value changed
    pub fn advance(&mut self, now: Duration) -> AdvanceResult<T> {
        if !self.running {
            return AdvanceResult::NoChange;
        }

        let elapsed = now.saturating_sub(self.start_time).as_micros() as f32 / 1000.0;
        let adjusted_elapsed = elapsed - self.transition.delay_ms;

        if adjusted_elapsed <= 0.0 {
            // Still in delay period
            return AdvanceResult::NoChange;
        }

        let t = (adjusted_elapsed / self.transition.duration_ms).min(1.0);
        let new_value = if t >= 1.0 {
            self.running = false;
            self.target.clone()
        } else {
            T::lerp(&self.start, &self.target, self.transition.timing.evaluate(t))
        };

        if new_value == self.current {
            return AdvanceResult::NoChange;
        }
        self.current = new_value.clone();
        AdvanceResult::Changed(new_value)
    }

    /// Freeze the animation at its current value.
    pub fn stop(&mut self) {
        self.running = false;
        self.start = self.current.clone();
        self.target = self.current.clone();
    }

    /// Check if animation is still running
    pub fn is_animating(&self) -> bool {
        self.running
    }

    /// Get current value
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Get target value
    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    /// Set value immediately without animation
    pub fn set_immediate(&mut self, value: T) {
        self.current = value.clone();
        self.target = value.clone();
        self.start = value;
        self.running = false;
    }
}

impl<T: Animatable + std::fmt::Debug> std::fmt::Debug for AnimationState<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationState")
            .field("current", &self.current)
            .field("target", &self.target)
            .field("running", &self.running)
            .finish()
    }
}
