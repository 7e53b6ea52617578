//! Coordinate bookkeeping between value space, track space and thumb space.
//!
//! - *Value space* is `min..=max` of a [`ValueRange`].
//! - *Track space* is `0..=length` pixels along a [`TrackGeometry`].
//! - *Thumb space* is the left offset of the thumb's unscaled box. The thumb
//!   is scaled around its centre, so for a scale `s` its visible circle is
//!   centred at `left + R` with half-extent `R * s`, where `R` is the
//!   container radius (radius plus border).

/// The numeric range a slider selects from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f32,
    pub max: f32,
}

impl ValueRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// Clamp `value` into the range.
    ///
    /// Unlike `f32::clamp` this never panics; an inverted range simply
    /// resolves to `max`.
    pub fn clamp(&self, value: f32) -> f32 {
        value.max(self.min).min(self.max)
    }

    /// Normalized position of `value` in the range.
    pub fn ratio_of(&self, value: f32) -> f32 {
        let span = self.span();
        if span == 0.0 {
            return 0.0;
        }
        (value - self.min) / span
    }

    /// Value at normalized position `ratio`.
    pub fn value_at(&self, ratio: f32) -> f32 {
        ratio * self.span() + self.min
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::new(0.0, 100.0)
    }
}

/// A touch position after clamping to the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackTouch {
    /// Track-relative x in `[0, length]`
    pub x: f32,
    /// `x / length`, or 0 for an unmeasured track
    pub ratio: f32,
}

/// The measured track.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackGeometry {
    pub length: f32,
}

impl TrackGeometry {
    pub const fn new(length: f32) -> Self {
        Self { length }
    }

    /// Layout has produced a usable length.
    pub fn is_measured(&self) -> bool {
        self.length > 0.0
    }

    /// Clamp a raw track-relative x and derive its ratio.
    pub fn touch(&self, x: f32) -> TrackTouch {
        let x = x.max(0.0).min(self.length);
        let ratio = if self.is_measured() {
            x / self.length
        } else {
            0.0
        };
        TrackTouch { x, ratio }
    }

    /// Track position of `value`.
    pub fn position_of(&self, value: f32, range: &ValueRange) -> f32 {
        range.ratio_of(value) * self.length
    }

    /// Value under track position `x` (clamped to the track first).
    pub fn value_at(&self, x: f32, range: &ValueRange) -> f32 {
        range.value_at(self.touch(x).ratio)
    }
}

/// Dimensions of the circular thumb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbGeometry {
    pub radius: f32,
    pub border_width: f32,
}

impl ThumbGeometry {
    pub const fn new(radius: f32, border_width: f32) -> Self {
        Self {
            radius,
            border_width,
        }
    }

    pub fn diameter(&self) -> f32 {
        self.radius * 2.0
    }

    /// Radius including the border (`R`).
    pub fn container_radius(&self) -> f32 {
        self.radius + self.border_width
    }

    pub fn container_diameter(&self) -> f32 {
        self.container_radius() * 2.0
    }

    /// Range the thumb centre may occupy at `scale` on a track of `track_length`.
    ///
    /// When the scaled thumb is wider than the track the centre pins to the
    /// middle of the track.
    pub fn center_bounds(&self, scale: f32, track_length: f32) -> (f32, f32) {
        let extent = self.container_radius() * scale;
        if track_length >= extent * 2.0 {
            (extent, track_length - extent)
        } else {
            let mid = track_length / 2.0;
            (mid, mid)
        }
    }

    /// Centre for track position `x` such that the visible circle stays on the track.
    pub fn center_for(&self, x: f32, scale: f32, track_length: f32) -> f32 {
        let (lo, hi) = self.center_bounds(scale, track_length);
        x.max(lo).min(hi)
    }

    /// Left offset of the unscaled box for track position `x` at `scale`.
    pub fn left_for(&self, x: f32, scale: f32, track_length: f32) -> f32 {
        self.center_for(x, scale, track_length) - self.container_radius()
    }

    /// Left offset for the thumb at rest (scale 1).
    pub fn resting_left(&self, x: f32, track_length: f32) -> f32 {
        self.left_for(x, 1.0, track_length)
    }

    pub fn center_of(&self, left: f32) -> f32 {
        left + self.container_radius()
    }

    /// Re-clamp an arbitrary left offset for the given scale.
    pub fn clamp_left(&self, left: f32, scale: f32, track_length: f32) -> f32 {
        self.left_for(self.center_of(left), scale, track_length)
    }

    /// Horizontal extent `(start, end)` of the visible circle.
    pub fn visible_span(&self, left: f32, scale: f32) -> (f32, f32) {
        let center = self.center_of(left);
        let extent = self.container_radius() * scale;
        (center - extent, center + extent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_touch_maps_to_value() {
        let range = ValueRange::new(0.0, 100.0);
        let track = TrackGeometry::new(200.0);
        let touch = track.touch(50.0);
        assert_eq!(touch.x, 50.0);
        assert_eq!(touch.ratio, 0.25);
        assert_eq!(track.value_at(50.0, &range), 25.0);
    }

    #[test]
    fn test_touch_clamps_past_track_end() {
        let range = ValueRange::new(0.0, 100.0);
        let track = TrackGeometry::new(200.0);
        assert_eq!(track.touch(250.0).x, 200.0);
        assert_eq!(track.value_at(250.0, &range), 100.0);
        assert_eq!(track.value_at(-30.0, &range), 0.0);
    }

    #[test]
    fn test_unmeasured_track_has_zero_ratio() {
        let track = TrackGeometry::default();
        assert!(!track.is_measured());
        assert_eq!(track.touch(40.0), TrackTouch { x: 0.0, ratio: 0.0 });
    }

    #[test]
    fn test_position_of_offset_range() {
        let range = ValueRange::new(-50.0, 50.0);
        let track = TrackGeometry::new(300.0);
        assert!((track.position_of(0.0, &range) - 150.0).abs() < EPS);
        assert!((track.value_at(150.0, &range) - 0.0).abs() < EPS);
    }

    #[test]
    fn test_degenerate_range() {
        let range = ValueRange::new(5.0, 5.0);
        assert_eq!(range.ratio_of(5.0), 0.0);
        assert_eq!(range.value_at(0.7), 5.0);
    }

    #[test]
    fn test_inverted_range_clamp_does_not_panic() {
        let range = ValueRange::new(10.0, 0.0);
        assert_eq!(range.clamp(5.0), 0.0);
    }

    #[test]
    fn test_thumb_dimensions() {
        let thumb = ThumbGeometry::new(6.0, 1.0);
        assert_eq!(thumb.diameter(), 12.0);
        assert_eq!(thumb.container_radius(), 7.0);
        assert_eq!(thumb.container_diameter(), 14.0);
    }

    #[test]
    fn test_centered_thumb_left() {
        let thumb = ThumbGeometry::new(6.0, 0.0);
        // Away from the edges the centre follows x exactly
        assert_eq!(thumb.left_for(50.0, 1.3, 200.0), 44.0);
        assert_eq!(thumb.center_of(44.0), 50.0);
    }

    #[test]
    fn test_enlarged_thumb_stays_on_track_at_edges() {
        let thumb = ThumbGeometry::new(6.0, 0.0);

        let left = thumb.left_for(0.0, 1.3, 200.0);
        let (start, _) = thumb.visible_span(left, 1.3);
        assert!(start.abs() < EPS);

        let left = thumb.left_for(200.0, 1.3, 200.0);
        let (_, end) = thumb.visible_span(left, 1.3);
        assert!((end - 200.0).abs() < EPS);
    }

    #[test]
    fn test_resting_left_clamps_at_scale_one() {
        let thumb = ThumbGeometry::new(6.0, 0.0);
        assert_eq!(thumb.resting_left(0.0, 200.0), 0.0);
        assert_eq!(thumb.resting_left(200.0, 200.0), 188.0);
        assert_eq!(thumb.resting_left(80.0, 200.0), 74.0);
    }

    #[test]
    fn test_short_track_pins_center() {
        let thumb = ThumbGeometry::new(6.0, 0.0);
        assert_eq!(thumb.center_for(3.0, 1.0, 10.0), 5.0);
    }

    #[test]
    fn test_clamp_left_for_growing_scale() {
        let thumb = ThumbGeometry::new(10.0, 0.0);
        // Resting at the origin, then grown to 1.3 without moving
        let left = thumb.resting_left(0.0, 100.0);
        let clamped = thumb.clamp_left(left, 1.3, 100.0);
        assert!((clamped - 3.0).abs() < EPS);
    }
}
