//! Gallery error types

use thiserror::Error;

/// Gallery construction errors
///
/// Runtime failures (image loads, degenerate geometry) are logged and
/// absorbed; only invalid configuration is reported to the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GalleryError {
    #[error("scroll ease must be in (0, 1], got {0}")]
    InvalidEase(f32),

    #[error("border radius must be in [0, 0.5], got {0}")]
    InvalidBorderRadius(f32),

    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    #[error("invalid text color {0:?}, expected #rgb, #rrggbb or #rrggbbaa")]
    InvalidColor(String),

    #[error("invalid caption font {0:?}, expected e.g. \"bold 30px Figtree\"")]
    InvalidFont(String),
}

/// Result type for gallery operations
pub type Result<T> = std::result::Result<T, GalleryError>;
