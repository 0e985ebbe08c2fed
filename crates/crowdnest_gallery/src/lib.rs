//! Crowdnest Circular Gallery
//!
//! An endlessly looping strip of image planes bent along a circular arc.
//! Dragging or wheeling moves a single eased scroll position; items that
//! leave the viewport on the trailing side are moved one loop width ahead,
//! so the strip never runs out.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use crowdnest_core::{FrameLoop, InputEvent, InputHub, PointerKind};
//! use crowdnest_gallery::{CircularGallery, GalleryConfig, RecordingRenderer};
//! use crowdnest_image::InlineLoader;
//!
//! let mut input = InputHub::new();
//! let mut frames = FrameLoop::new();
//! let mut gallery = CircularGallery::builder(GalleryConfig::default())
//!     .renderer(RecordingRenderer::new())
//!     .loader(Arc::new(InlineLoader))
//!     .mount(1200, 800, &mut input, &mut frames)?;
//!
//! input.dispatch(&InputEvent::pointer_down(600.0, 400.0, PointerKind::Mouse, 0));
//! input.dispatch(&InputEvent::pointer_move(400.0, 400.0, PointerKind::Mouse, 8));
//! input.dispatch(&InputEvent::pointer_up(16));
//! for frame in 1..=240 {
//!     frames.pump(16 + frame * 16);
//! }
//!
//! let scroll = gallery.scroll();
//! assert!((scroll.current - gallery.item_width()).abs() < 1e-2);
//! gallery.teardown(&mut input);
//! # Ok::<(), crowdnest_gallery::GalleryError>(())
//! ```

pub mod caption;
pub mod carousel;
pub mod config;
pub mod controller;
pub mod curvature;
mod defaults;
pub mod error;
pub mod layout;
pub mod media;
pub mod recycler;
pub mod renderer;
pub mod shaders;
pub mod strip;
pub mod uniforms;
pub mod viewport;

pub use caption::{
    CaptionMesh, CaptionStyle, CaptionTexture, EstimatedTextMeasurer, FontSpec, Rgba,
    TextMeasurer,
};
pub use carousel::{CircularGallery, GalleryBuilder, GallerySnapshot, GalleryStats};
pub use config::GalleryConfig;
pub use controller::ScrollController;
pub use curvature::Curvature;
pub use defaults::default_items;
pub use error::{GalleryError, Result};
pub use layout::StripLayout;
pub use media::MediaInstance;
pub use recycler::{Offscreen, Recycle};
pub use renderer::{
    NullRenderer, RecordedPlane, RecordingRenderer, RenderLog, SceneFrame, SceneRenderer,
};
pub use strip::{build_strip, GalleryItem};
pub use uniforms::{CaptionUniforms, MediaUniforms};
pub use viewport::{Camera, Viewport, ViewportMetrics};
