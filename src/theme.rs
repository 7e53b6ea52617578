//! Default colours for the slider.

use crate::widgets::Color;

/// Colours of the two track segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderStyle {
    /// Filled segment (`min..value`); also the thumb colour
    pub lower_track_color: Color,
    /// Unfilled segment (`value..max`)
    pub upper_track_color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub primary_color: Color,
    pub slider_style: SliderStyle,
}

impl Theme {
    /// Indigo primary with a light grey rail.
    pub const MATERIAL: Theme = Theme {
        primary_color: Color::from_hex(0x3F51B5),
        slider_style: SliderStyle {
            lower_track_color: Color::from_hex(0x3F51B5),
            upper_track_color: Color::from_hex(0xCCCCCC),
        },
    };

    /// Theme derived from a single primary colour.
    pub fn from_primary(primary_color: Color) -> Self {
        Self {
            primary_color,
            slider_style: SliderStyle {
                lower_track_color: primary_color,
                ..Self::MATERIAL.slider_style
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::MATERIAL
    }
}
