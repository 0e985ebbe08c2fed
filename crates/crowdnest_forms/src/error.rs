//! Form error types

use std::path::PathBuf;

use thiserror::Error;

use crate::field::Field;

/// Registration form errors.
///
/// The upload variants render as the message shown under the field.
#[derive(Error, Debug)]
pub enum FormError {
    #[error("Please upload a valid image file (JPG, PNG, or GIF)")]
    UnsupportedFileType { mime: String },

    #[error("File size must be less than 5MB")]
    FileTooLarge { size: u64 },

    /// Failed to read an upload from disk
    #[error("Failed to read upload {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown form field: {0}")]
    UnknownField(String),

    #[error("{0} does not take text input")]
    NotTextField(Field),

    #[error("Unknown event mode: {0}")]
    UnknownMode(String),
}

/// Result type for form operations
pub type Result<T> = std::result::Result<T, FormError>;
