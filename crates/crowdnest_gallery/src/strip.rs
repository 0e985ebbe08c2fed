//! Gallery items and the doubled strip

use serde::{Deserialize, Serialize};

use crowdnest_image::ImageSource;

use crate::defaults::default_items;

/// One picture and its caption
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    /// URL, file path or `data:` URI
    pub image: String,
    #[serde(alias = "text")]
    pub caption: String,
}

impl GalleryItem {
    pub fn new(image: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            caption: caption.into(),
        }
    }

    pub fn source(&self) -> ImageSource {
        ImageSource::from_uri(&self.image)
    }
}

/// Items as they appear on the strip: the configured list (or the
/// built-in defaults when empty) followed by itself once more.
pub fn build_strip(items: &[GalleryItem]) -> Vec<GalleryItem> {
    let base = if items.is_empty() {
        default_items()
    } else {
        items.to_vec()
    };
    let mut strip = Vec::with_capacity(base.len() * 2);
    strip.extend_from_slice(&base);
    strip.extend(base);
    strip
}
