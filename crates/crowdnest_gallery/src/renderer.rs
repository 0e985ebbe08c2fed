//! Rendering seam
//!
//! The gallery owns no GPU state. It hands each frame's uniforms to a
//! [`SceneRenderer`] supplied by the host: a wgpu/WebGL backend in an app,
//! or a [`RecordingRenderer`] in headless runs and tests.

use std::sync::{Arc, Mutex, PoisonError};

use crate::media::MediaInstance;
use crate::viewport::ViewportMetrics;

/// Everything a backend needs to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct SceneFrame<'a> {
    pub frame_index: u64,
    pub viewport: &'a ViewportMetrics,
    pub media: &'a [MediaInstance],
    pub border_radius: f32,
    pub text_color: [f32; 4],
}

/// Host rendering surface
pub trait SceneRenderer: Send {
    /// Create the surface inside the host container
    fn attach(&mut self, width: u32, height: u32);

    fn resize(&mut self, width: u32, height: u32);

    /// Draw one frame with a transparent clear
    fn render(&mut self, frame: &SceneFrame<'_>);

    /// Release the surface and remove it from the container
    fn detach(&mut self);
}

/// Renderer that draws nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl SceneRenderer for NullRenderer {
    fn attach(&mut self, _width: u32, _height: u32) {}
    fn resize(&mut self, _width: u32, _height: u32) {}
    fn render(&mut self, _frame: &SceneFrame<'_>) {}
    fn detach(&mut self) {}
}

/// Placement of one plane in a recorded frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordedPlane {
    pub index: usize,
    pub x: f32,
    pub y: f32,
    pub rotation_z: f32,
}

/// What a [`RecordingRenderer`] has seen so far
#[derive(Debug, Clone, Default)]
pub struct RenderLog {
    pub surface_size: Option<(u32, u32)>,
    pub attached: bool,
    pub detached: bool,
    pub resizes: u32,
    pub frames: u64,
    /// Planes of the most recent frame
    pub last_frame: Vec<RecordedPlane>,
}

/// Renderer that records frames into a shared [`RenderLog`]
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    log: Arc<Mutex<RenderLog>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the log that stays valid after the renderer moves into a gallery
    pub fn log(&self) -> Arc<Mutex<RenderLog>> {
        self.log.clone()
    }

    fn with_log(&self, f: impl FnOnce(&mut RenderLog)) {
        let mut log = self.log.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut log);
    }
}

impl SceneRenderer for RecordingRenderer {
    fn attach(&mut self, width: u32, height: u32) {
        self.with_log(|log| {
            log.attached = true;
            log.surface_size = Some((width, height));
        });
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.with_log(|log| {
            log.resizes += 1;
            log.surface_size = Some((width, height));
        });
    }

    fn render(&mut self, frame: &SceneFrame<'_>) {
        self.with_log(|log| {
            log.frames += 1;
            log.last_frame.clear();
            log.last_frame
                .extend(frame.media.iter().map(|media| RecordedPlane {
                    index: media.index,
                    x: media.position,
                    y: media.curvature.y,
                    rotation_z: media.curvature.rotation_z,
                }));
        });
    }

    fn detach(&mut self) {
        self.with_log(|log| {
            log.detached = true;
            log.surface_size = None;
        });
    }
}
