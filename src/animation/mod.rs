mod animatable;
mod state;
mod timing;

pub use animatable::Animatable;
pub use state::{AdvanceResult, AnimationState};
pub use timing::TimingFunction;

/// Configuration for how a property should animate when it changes
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    /// Duration of the animation in milliseconds
    pub duration_ms: f32,
    /// Timing function controlling the animation curve
    pub timing: TimingFunction,
    /// Delay before animation starts in milliseconds
    pub delay_ms: f32,
}

impl Transition {
    /// Create a new transition with the given duration and timing function
    pub fn new(duration_ms: f32, timing: TimingFunction) -> Self {
        Self {
            duration_ms,
            timing,
            delay_ms: 0.0,
        }
    }

    /// A transition that jumps straight to its target.
    pub fn instant() -> Self {
        Self::new(0.0, TimingFunction::Linear)
    }

    /// Platform-style timed transition (`EaseInOut`) over `duration_ms`.
    pub fn timed(duration_ms: f32) -> Self {
        Self::new(duration_ms, TimingFunction::EaseInOut)
    }

    /// Set the delay before the animation starts
    pub fn delay(mut self, delay_ms: f32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Set the duration of the animation
    pub fn duration(mut self, duration_ms: f32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Set the timing function
    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }

    /// True when the transition has no duration and no delay.
    pub fn is_instant(&self) -> bool {
        self.duration_ms <= 0.0 && self.delay_ms <= 0.0
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::instant()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timed_uses_ease_in_out() {
        let transition = Transition::timed(100.0);
        assert_eq!(transition.duration_ms, 100.0);
        assert!(matches!(transition.timing, TimingFunction::EaseInOut));
        assert!(!transition.is_instant());
    }

    #[test]
    fn test_instant() {
        assert!(Transition::instant().is_instant());
        assert!(!Transition::instant().delay(10.0).is_instant());
    }
}
