//! Easing curves for thumb animations.
//!
//! A timing function maps normalized elapsed time to an interpolation
//! factor, both in `0.0..=1.0`.

use std::fmt;
use std::sync::Arc;

#[derive(Clone, Default)]
pub enum TimingFunction {
    Linear,
    /// Quadratic acceleration
    EaseIn,
    /// Quadratic deceleration
    EaseOut,
    /// Accelerate through the first half, decelerate through the second
    #[default]
    EaseInOut,
    Custom(Arc<dyn Fn(f32) -> f32 + Send + Sync>),
}

impl TimingFunction {
    /// Evaluate at `t`, which is clamped to `0.0..=1.0` first.
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            TimingFunction::Linear => t,
            TimingFunction::EaseIn => t * t,
            TimingFunction::EaseOut => {
                let rest = 1.0 - t;
                1.0 - rest * rest
            }
            TimingFunction::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let rest = 1.0 - t;
                    1.0 - 2.0 * rest * rest
                }
            }
            TimingFunction::Custom(curve) => curve(t),
        }
    }

    pub fn custom<F>(curve: F) -> Self
    where
        F: Fn(f32) -> f32 + Send + Sync + 'static,
    {
        TimingFunction::Custom(Arc::new(curve))
    }
}

impl PartialEq for TimingFunction {
    /// Custom curves are equal only when they share the same closure.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TimingFunction::Linear, TimingFunction::Linear)
            | (TimingFunction::EaseIn, TimingFunction::EaseIn)
            | (TimingFunction::EaseOut, TimingFunction::EaseOut)
            | (TimingFunction::EaseInOut, TimingFunction::EaseInOut) => true,
            (TimingFunction::Custom(a), TimingFunction::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for TimingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimingFunction::Linear => "Linear",
            TimingFunction::EaseIn => "EaseIn",
            TimingFunction::EaseOut => "EaseOut",
            TimingFunction::EaseInOut => "EaseInOut",
            TimingFunction::Custom(_) => "Custom",
        };
        f.write_str(name)
    }
}
