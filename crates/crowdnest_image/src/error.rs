//! Image error types

use std::path::PathBuf;

use thiserror::Error;

/// Image loading and probing errors
#[derive(Error, Debug)]
pub enum ImageError {
    /// Failed to read an image file
    #[error("Failed to read image file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read image bytes
    #[error("Failed to read image data: {0}")]
    Read(#[from] std::io::Error),

    /// Invalid base64 payload
    #[error("Invalid base64 image data: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Data URI without a base64 payload
    #[error("Malformed data URI: {0}")]
    DataUri(String),

    /// Bytes could not be decoded as a supported image
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// Remote URLs are resolved by the host, not in-process
    #[error("Remote image must be fetched by the host: {0}")]
    Remote(String),
}

/// Result type for image operations
pub type Result<T> = std::result::Result<T, ImageError>;
