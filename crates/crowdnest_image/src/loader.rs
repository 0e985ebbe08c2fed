//! Image probing and loading

use std::io::Cursor;
use std::sync::Arc;

use crate::error::{ImageError, Result};
use crate::preview::decode_data_uri;
use crate::source::{ImageFormat, ImageSource};

/// Metadata of a loaded image. The gallery only needs natural dimensions
/// to compute cover-fit UVs; pixel upload is the renderer's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub format: Option<ImageFormat>,
}

impl ImageInfo {
    /// Read the image header of `source` and report its dimensions
    pub fn probe(source: &ImageSource) -> Result<Self> {
        let (bytes, hint) = match source {
            ImageSource::File(path) => {
                let bytes = std::fs::read(path).map_err(|e| ImageError::Io {
                    path: path.clone(),
                    source: e,
                })?;
                let hint = path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .and_then(ImageFormat::from_extension);
                (bytes, hint)
            }
            ImageSource::Url(url) => return Err(ImageError::Remote(url.clone())),
            ImageSource::Base64(data) => {
                let (mime, bytes) = decode_data_uri(data)?;
                (bytes, mime.as_deref().and_then(ImageFormat::from_mime))
            }
            ImageSource::Bytes { data, format } => (data.clone(), *format),
        };
        Self::probe_bytes(&bytes, hint)
    }

    /// Probe raw bytes, trusting the content over the format hint
    pub fn probe_bytes(bytes: &[u8], hint: Option<ImageFormat>) -> Result<Self> {
        let mut reader = image::ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
        if reader.format().is_none() {
            if let Some(hint) = hint {
                reader.set_format(hint.to_image_crate());
            }
        }
        let format = reader.format().and_then(ImageFormat::from_image_crate);
        let (width, height) = reader.into_dimensions()?;
        Ok(Self {
            width,
            height,
            format,
        })
    }

    pub fn size(&self) -> [f32; 2] {
        [self.width as f32, self.height as f32]
    }
}

/// Completion callback for [`ImageLoader::load`]
pub type LoadCallback = Box<dyn FnOnce(Result<ImageInfo>) + Send>;

/// Fire-and-forget image loading.
///
/// Implementations call `on_done` exactly once, on any thread, whenever the
/// image resolves. Hosts with network access plug in their own loader for
/// [`ImageSource::Url`].
pub trait ImageLoader: Send + Sync {
    fn load(&self, source: ImageSource, on_done: LoadCallback);
}

impl<L: ImageLoader + ?Sized> ImageLoader for Arc<L> {
    fn load(&self, source: ImageSource, on_done: LoadCallback) {
        (**self).load(source, on_done)
    }
}

/// Probes on the calling thread before returning
#[derive(Debug, Default, Clone, Copy)]
pub struct InlineLoader;

impl ImageLoader for InlineLoader {
    fn load(&self, source: ImageSource, on_done: LoadCallback) {
        on_done(ImageInfo::probe(&source));
    }
}

/// Probes each image on its own short-lived worker thread
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadedLoader;

impl ImageLoader for ThreadedLoader {
    fn load(&self, source: ImageSource, on_done: LoadCallback) {
        let label = source.describe();
        let spawned = std::thread::Builder::new()
            .name("crowdnest-image".into())
            .spawn(move || on_done(ImageInfo::probe(&source)));
        if let Err(e) = spawned {
            // The callback went down with the closure; the image stays unset.
            tracing::warn!(source = %label, error = %e, "failed to spawn image loader thread");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::to_data_uri;
    use std::sync::mpsc;
    use std::time::Duration;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        image::RgbaImage::new(width, height)
            .write_to(&mut out, image::ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    #[test]
    fn test_probe_data_uri() {
        let uri = to_data_uri("image/png", &png_bytes(3, 2));
        let info = ImageInfo::probe(&ImageSource::from_uri(&uri)).unwrap();
        assert_eq!((info.width, info.height), (3, 2));
        assert_eq!(info.format, Some(ImageFormat::Png));
        assert_eq!(info.size(), [3.0, 2.0]);
    }

    #[test]
    fn test_probe_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.png");
        std::fs::write(&path, png_bytes(8, 5)).unwrap();

        let info = ImageInfo::probe(&ImageSource::file(&path)).unwrap();
        assert_eq!((info.width, info.height), (8, 5));
    }

    #[test]
    fn test_probe_errors() {
        assert!(matches!(
            ImageInfo::probe(&ImageSource::url("https://example.com/a.png")),
            Err(ImageError::Remote(_))
        ));
        assert!(matches!(
            ImageInfo::probe(&ImageSource::file("/definitely/not/here.png")),
            Err(ImageError::Io { .. })
        ));
        assert!(ImageInfo::probe(&ImageSource::bytes(b"not an image".to_vec())).is_err());
    }

    #[test]
    fn test_threaded_loader_reports_back() {
        let (tx, rx) = mpsc::channel();
        ThreadedLoader.load(
            ImageSource::bytes(png_bytes(4, 4)),
            Box::new(move |result| {
                let _ = tx.send(result.map(|info| info.width));
            }),
        );
        let width = rx.recv_timeout(Duration::from_secs(5)).unwrap().unwrap();
        assert_eq!(width, 4);
    }
}
