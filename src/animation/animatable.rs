/// A value an [`AnimationState`](super::AnimationState) can interpolate.
pub trait Animatable: Clone + PartialEq + Send + Sync + 'static {
    /// `t = 0.0` yields `from`, `t = 1.0` yields `to`.
    fn lerp(from: &Self, to: &Self, t: f32) -> Self;
}

impl Animatable for f32 {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        if t >= 1.0 {
            return *to;
        }
        from + (to - from) * t
    }
}
