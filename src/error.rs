use thiserror::Error;

/// Rejected slider configuration.
///
/// Only [`Slider::from_config`](crate::widgets::Slider::from_config) checks
/// configuration; the builder methods accept anything.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid range: min ({min}) must be less than max ({max})")]
    InvalidRange { min: f32, max: f32 },
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
}
