//! Crowdnest Image
//!
//! Image handling for the gallery and the upload previews.
//!
//! # Features
//!
//! - Parse image references: file paths, URLs, and base64 data URIs
//! - Probe dimensions for PNG, JPEG, GIF, WebP and BMP without full decode
//! - Fire-and-forget loading through the [`ImageLoader`] seam
//! - Data URI previews for uploaded files
//! - Cover-fit UV ratios matching the media fragment shader
//!
//! # Example
//!
//! ```ignore
//! use crowdnest_image::{ImageInfo, ImageSource};
//!
//! let info = ImageInfo::probe(&ImageSource::from_uri("data:image/png;base64,iVBORw0KGgo..."))?;
//! println!("{}x{}", info.width, info.height);
//! ```

mod error;
mod loader;
mod preview;
mod source;

pub use error::{ImageError, Result};
pub use loader::{ImageInfo, ImageLoader, InlineLoader, LoadCallback, ThreadedLoader};
pub use preview::{decode_data_uri, to_data_uri};
pub use source::{ImageFormat, ImageSource};

// ============================================================================
// Cover fit (CSS object-fit: cover, in UV space)
// ============================================================================

/// UV scale that crops an image to cover a plane while keeping its aspect.
///
/// Returns `[ratio_x, ratio_y]`; the sampled UV is
/// `uv * ratio + (1 - ratio) * 0.5`. An image or plane with a zero
/// dimension (not loaded yet) samples the full texture.
pub fn cover_uv_ratio(plane_size: [f32; 2], image_size: [f32; 2]) -> [f32; 2] {
    let [pw, ph] = plane_size;
    let [iw, ih] = image_size;
    if pw <= 0.0 || ph <= 0.0 || iw <= 0.0 || ih <= 0.0 {
        return [1.0, 1.0];
    }
    [
        ((pw / ph) / (iw / ih)).min(1.0),
        ((ph / pw) / (ih / iw)).min(1.0),
    ]
}
