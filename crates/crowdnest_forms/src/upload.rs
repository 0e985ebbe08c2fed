//! Image uploads
//!
//! An upload is accepted only with an image MIME type the form allows and a
//! size of at most 5 MiB. Accepted files keep a data URI preview.

use std::path::Path;

use crowdnest_image::{to_data_uri, ImageFormat};
use serde::Serialize;

use crate::error::{FormError, Result};

/// Largest accepted upload in bytes
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// MIME types accepted for logos and banners
pub const ACCEPTED_MIME_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/gif"];

const UNKNOWN_MIME: &str = "application/octet-stream";

/// A file picked by the user, before validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    /// Read a file from disk, guessing the MIME type from its extension
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| FormError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mime = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(ImageFormat::from_extension)
            .map_or(UNKNOWN_MIME, |format| format.mime());
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(name, mime, bytes))
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Check type, then size
    pub fn check(&self) -> Result<()> {
        let accepted = ACCEPTED_MIME_TYPES
            .iter()
            .any(|mime| mime.eq_ignore_ascii_case(&self.mime));
        if !accepted {
            return Err(FormError::UnsupportedFileType {
                mime: self.mime.clone(),
            });
        }
        if self.size() > MAX_UPLOAD_BYTES {
            return Err(FormError::FileTooLarge { size: self.size() });
        }
        Ok(())
    }
}

/// An accepted upload with its preview
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadedImage {
    pub name: String,
    pub mime: String,
    pub size: u64,
    /// `data:<mime>;base64,...`
    #[serde(skip)]
    pub preview: String,
}

impl UploadedImage {
    pub fn accept(file: &UploadFile) -> Result<Self> {
        file.check()?;
        Ok(Self {
            name: file.name.clone(),
            mime: file.mime.clone(),
            size: file.size(),
            preview: to_data_uri(&file.mime, &file.bytes),
        })
    }
}
