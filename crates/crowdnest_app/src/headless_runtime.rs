//! Headless gallery runtime
//!
//! Mounts a carousel against an in-memory input hub, frame loop and
//! recording renderer, and advances it on a logical clock. Images resolve
//! inline, so a run is deterministic for a fixed seed.

use std::sync::{Arc, Mutex, PoisonError};

use anyhow::{bail, Context, Result};
use crowdnest_core::{FrameLoop, InputEvent, InputHub, PointerKind};
use crowdnest_gallery::{
    CircularGallery, GalleryConfig, GallerySnapshot, RecordingRenderer, RenderLog,
};
use crowdnest_image::InlineLoader;
use serde::{Deserialize, Serialize};

/// Configuration for deterministic headless frame execution (`[headless]`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct HeadlessRunConfig {
    /// Logical viewport width
    #[serde(default = "default_width")]
    pub width: u32,
    /// Logical viewport height
    #[serde(default = "default_height")]
    pub height: u32,
    /// Logical milliseconds between frames
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Invariant sampling interval in frames (1 = every frame)
    #[serde(default = "default_probe_every_frames")]
    pub probe_every_frames: u32,
    /// Seed for the initial wave phases
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_width() -> u32 {
    1200
}

fn default_height() -> u32 {
    800
}

fn default_tick_ms() -> u64 {
    16
}

fn default_probe_every_frames() -> u32 {
    4
}

impl Default for HeadlessRunConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            tick_ms: default_tick_ms(),
            probe_every_frames: default_probe_every_frames(),
            seed: None,
        }
    }
}

/// Clock position after a headless frame
#[derive(Debug, Clone, Copy)]
pub struct HeadlessContext {
    pub frame_index: u64,
    pub elapsed_ms: u64,
}

/// A mounted gallery driven by a logical clock
pub struct HeadlessRuntime {
    cfg: HeadlessRunConfig,
    input: InputHub,
    frames: FrameLoop,
    gallery: CircularGallery,
    render_log: Arc<Mutex<RenderLog>>,
    elapsed_frames: u64,
    elapsed_ms: u64,
}

impl HeadlessRuntime {
    pub fn mount(gallery: GalleryConfig, cfg: HeadlessRunConfig) -> Result<Self> {
        if cfg.width == 0 || cfg.height == 0 {
            bail!("headless dimensions must be non-zero");
        }
        if cfg.tick_ms == 0 {
            bail!("headless tick_ms must be > 0");
        }

        let mut input = InputHub::new();
        let mut frames = FrameLoop::new();
        let renderer = RecordingRenderer::new();
        let render_log = renderer.log();

        let mut builder = CircularGallery::builder(gallery)
            .renderer(renderer)
            .loader(Arc::new(InlineLoader));
        if let Some(seed) = cfg.seed {
            builder = builder.seed(seed);
        }
        let gallery = builder
            .mount(cfg.width, cfg.height, &mut input, &mut frames)
            .context("Failed to mount gallery")?;

        Ok(Self {
            cfg,
            input,
            frames,
            gallery,
            render_log,
            elapsed_frames: 0,
            elapsed_ms: 0,
        })
    }

    pub fn config(&self) -> &HeadlessRunConfig {
        &self.cfg
    }

    pub fn gallery(&self) -> &CircularGallery {
        &self.gallery
    }

    pub fn snapshot(&self) -> GallerySnapshot {
        self.gallery.snapshot()
    }

    pub fn render_log(&self) -> RenderLog {
        self.render_log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn elapsed_frames(&self) -> u64 {
        self.elapsed_frames
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Deliver an event stamped with the current logical time
    pub fn send(&mut self, make: impl FnOnce(u64) -> InputEvent) {
        let event = make(self.elapsed_ms);
        self.input.dispatch(&event);
    }

    pub fn pointer_down(&mut self, x: f32, y: f32, kind: PointerKind) {
        self.send(|now| InputEvent::pointer_down(x, y, kind, now));
    }

    pub fn pointer_move(&mut self, x: f32, y: f32, kind: PointerKind) {
        self.send(|now| InputEvent::pointer_move(x, y, kind, now));
    }

    pub fn pointer_up(&mut self) {
        self.send(InputEvent::pointer_up);
    }

    pub fn wheel(&mut self, delta_y: f32) {
        self.send(|now| InputEvent::wheel(delta_y, now));
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.send(|now| InputEvent::resize(width, height, now));
    }

    /// Run one frame `step_ms` after the previous one
    pub fn frame(&mut self, step_ms: u64) -> HeadlessContext {
        self.elapsed_ms = self.elapsed_ms.saturating_add(step_ms);
        self.elapsed_frames = self.elapsed_frames.saturating_add(1);
        self.frames.pump(self.elapsed_ms);
        HeadlessContext {
            frame_index: self.elapsed_frames,
            elapsed_ms: self.elapsed_ms,
        }
    }

    /// Stop the gallery and hand back the final render log
    pub fn teardown(mut self) -> RenderLog {
        self.gallery.teardown(&mut self.input);
        self.render_log()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_tick() {
        let cfg = HeadlessRunConfig {
            tick_ms: 0,
            ..Default::default()
        };
        assert!(HeadlessRuntime::mount(GalleryConfig::default(), cfg).is_err());
    }

    #[test]
    fn test_invalid_gallery_config_is_reported() {
        let error = HeadlessRuntime::mount(
            GalleryConfig::default().scroll_ease(2.0),
            HeadlessRunConfig::default(),
        )
        .err()
        .unwrap();
        assert!(format!("{error:#}").contains("Failed to mount gallery"));
    }

    #[test]
    fn test_clock_advances_per_frame() {
        let mut runtime =
            HeadlessRuntime::mount(GalleryConfig::default(), HeadlessRunConfig::default())
                .unwrap();
        let tick = runtime.config().tick_ms;
        let seen: Vec<_> = (0..3)
            .map(|_| runtime.frame(tick))
            .map(|ctx| (ctx.frame_index, ctx.elapsed_ms))
            .collect();

        assert_eq!(seen, vec![(1, 16), (2, 32), (3, 48)]);
        assert_eq!(runtime.elapsed_ms(), 48);

        let log = runtime.teardown();
        // The mount frame plus three ticks
        assert_eq!(log.frames, 4);
        assert!(log.detached);
    }
}
