//! Per-slot runtime state

use crowdnest_animation::TravelDirection;
use crowdnest_image::ImageInfo;

use crate::caption::{CaptionMesh, CaptionTexture};
use crate::curvature::{self, Curvature};
use crate::layout::StripLayout;
use crate::recycler::{Offscreen, Recycle};
use crate::uniforms::{CaptionUniforms, MediaUniforms};

/// Wave phase advance per frame
pub const TIME_STEP: f32 = 0.04;

/// Inputs shared by every instance for one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    pub current: f32,
    pub velocity: f32,
    pub direction: TravelDirection,
    pub viewport_half_width: f32,
    pub bend: f32,
}

/// One slot of the strip
#[derive(Debug, Clone)]
pub struct MediaInstance {
    pub index: usize,
    pub caption: String,
    /// Slot x at rest, `item_width * index`
    pub base_position: f32,
    /// Loop corrections, always a whole number of loop widths
    pub extra_offset: f32,
    /// Rendered x, `base_position - current - extra_offset`
    pub position: f32,
    pub curvature: Curvature,
    pub offscreen: Offscreen,
    pub plane_size: [f32; 2],
    /// Natural image size, zero until the image resolves
    pub image_size: [f32; 2],
    pub time: f32,
    pub speed: f32,
    pub caption_texture: CaptionTexture,
    pub caption_mesh: CaptionMesh,
    loop_width: f32,
}

impl MediaInstance {
    pub fn new(
        index: usize,
        caption: impl Into<String>,
        caption_texture: CaptionTexture,
        time: f32,
        layout: &StripLayout,
    ) -> Self {
        let mut media = Self {
            index,
            caption: caption.into(),
            base_position: 0.0,
            extra_offset: 0.0,
            position: 0.0,
            curvature: Curvature::default(),
            offscreen: Offscreen::default(),
            plane_size: [0.0, 0.0],
            image_size: [0.0, 0.0],
            time,
            speed: 0.0,
            caption_texture,
            caption_mesh: CaptionMesh::default(),
            loop_width: 0.0,
        };
        media.apply_layout(layout);
        media
    }

    /// Adopt a new layout at scroll position `current`.
    ///
    /// The extra offset is reset to the whole number of loops that puts the
    /// item closest to the viewport centre, so a viewport narrower than the
    /// loop is always covered after a resize.
    pub fn resize(&mut self, layout: &StripLayout, current: f32) {
        self.apply_layout(layout);
        self.extra_offset = if self.loop_width > 0.0 {
            ((self.base_position - current) / self.loop_width).round() * self.loop_width
        } else {
            0.0
        };
    }

    fn apply_layout(&mut self, layout: &StripLayout) {
        self.loop_width = layout.loop_width();
        self.base_position = layout.base_position(self.index);
        self.plane_size = layout.plane_size();
        self.caption_mesh = CaptionMesh::fit(&self.caption_texture, layout.plane_height);
    }

    /// Place the item for scroll position `current` without recycling
    pub fn project(&mut self, current: f32, bend: f32, viewport_half_width: f32) {
        self.position = self.base_position - current - self.extra_offset;
        self.curvature = curvature::project(bend, viewport_half_width, self.position);
    }

    /// Per-frame update: position, bend, shader state, then recycling.
    ///
    /// A wrapped item is re-projected immediately so its rendered position
    /// always matches its extra offset.
    pub fn update(&mut self, frame: &FrameContext) -> Recycle {
        self.project(frame.current, frame.bend, frame.viewport_half_width);

        self.speed = frame.velocity;
        self.time += TIME_STEP;

        let offscreen = Offscreen::classify(
            self.position,
            self.plane_size[0] / 2.0,
            frame.viewport_half_width,
        );
        let recycle = Recycle::decide(frame.direction, offscreen);
        if recycle.is_wrap() && self.loop_width > 0.0 {
            self.extra_offset += recycle.extra_offset_delta(self.loop_width);
            self.offscreen = Offscreen::default();
            self.project(frame.current, frame.bend, frame.viewport_half_width);
            tracing::trace!(
                index = self.index,
                ?recycle,
                extra_offset = self.extra_offset,
                "media recycled"
            );
            recycle
        } else {
            self.offscreen = offscreen;
            Recycle::Stay
        }
    }

    pub fn set_image(&mut self, info: &ImageInfo) {
        self.image_size = info.size();
    }

    pub fn is_image_loaded(&self) -> bool {
        self.image_size[0] > 0.0 && self.image_size[1] > 0.0
    }

    pub fn loop_width(&self) -> f32 {
        self.loop_width
    }

    pub fn uniforms(&self, border_radius: f32) -> MediaUniforms {
        MediaUniforms {
            transform: [
                self.position,
                self.curvature.y,
                0.0,
                self.curvature.rotation_z,
            ],
            plane_size: self.plane_size,
            image_size: self.image_size,
            time: self.time,
            speed: self.speed,
            border_radius,
            _padding: 0.0,
        }
    }

    pub fn caption_uniforms(&self, color: [f32; 4]) -> CaptionUniforms {
        CaptionUniforms {
            parent_transform: [
                self.position,
                self.curvature.y,
                0.0,
                self.curvature.rotation_z,
            ],
            mesh: [
                self.caption_mesh.width,
                self.caption_mesh.height,
                self.caption_mesh.offset_y,
                0.0,
            ],
            color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::{Camera, ViewportMetrics};

    fn layout() -> StripLayout {
        let viewport = ViewportMetrics::from_screen(&Camera::default(), 1200, 800).unwrap();
        StripLayout::compute(&viewport, 12)
    }

    fn frame(current: f32, velocity: f32, direction: TravelDirection) -> FrameContext {
        FrameContext {
            current,
            velocity,
            direction,
            viewport_half_width: 12.426407,
            bend: 3.0,
        }
    }

    #[test]
    fn test_update_places_item() {
        let layout = layout();
        let mut media = MediaInstance::new(2, "GDG", CaptionTexture::default(), 0.0, &layout);
        let recycle = media.update(&frame(5.0, 0.25, TravelDirection::Right));

        assert_eq!(recycle, Recycle::Stay);
        assert!((media.position - (layout.item_width * 2.0 - 5.0)).abs() < 1e-4);
        assert!(media.curvature.y < 0.0);
        assert_eq!(media.speed, 0.25);
        assert!((media.time - TIME_STEP).abs() < 1e-6);
    }

    #[test]
    fn test_trailing_item_wraps_to_end() {
        let layout = layout();
        let mut media = MediaInstance::new(0, "TinkerHub", CaptionTexture::default(), 0.0, &layout);

        // 20 units of rightward travel puts slot 0 well past the left edge
        let recycle = media.update(&frame(20.0, 1.0, TravelDirection::Right));
        assert_eq!(recycle, Recycle::WrapToEnd);
        assert!((media.extra_offset + layout.loop_width()).abs() < 1e-3);
        assert!((media.position - (layout.loop_width() - 20.0)).abs() < 1e-3);
        assert_eq!(media.offscreen, Offscreen::default());
    }

    #[test]
    fn test_leading_item_does_not_wrap() {
        let layout = layout();
        let mut media = MediaInstance::new(11, "IEDC", CaptionTexture::default(), 0.0, &layout);
        assert_eq!(media.update(&frame(1.0, 1.0, TravelDirection::Right)), Recycle::Stay);
        assert!(media.offscreen.after);
    }

    #[test]
    fn test_resize_recentres_on_viewport() {
        let layout = layout();
        let l = layout.loop_width();
        let mut far = MediaInstance::new(11, "IEDC", CaptionTexture::default(), 0.0, &layout);
        assert_eq!(far.extra_offset, 0.0);
        far.resize(&layout, 0.0);
        assert!((far.extra_offset - l).abs() < 1e-3);

        let mut media = MediaInstance::new(0, "IEEE", CaptionTexture::default(), 0.0, &layout);
        media.extra_offset = -3.0 * l;

        let viewport = ViewportMetrics::from_screen(&Camera::default(), 600, 900).unwrap();
        let resized = StripLayout::compute(&viewport, 12);
        let current = 2.5 * resized.loop_width();
        media.resize(&resized, current);
        media.project(current, 3.0, viewport.half_width());

        let loops = media.extra_offset / resized.loop_width();
        assert!((loops - loops.round()).abs() < 1e-4);
        assert!(media.position.abs() <= resized.loop_width() / 2.0 + 1e-3);
        assert_eq!(media.plane_size, resized.plane_size());
    }

    #[test]
    fn test_uniforms_reflect_state() {
        let layout = layout();
        let mut media = MediaInstance::new(1, "IEEE", CaptionTexture::default(), 42.0, &layout);
        assert!(!media.is_image_loaded());
        media.set_image(&ImageInfo {
            width: 800,
            height: 600,
            format: None,
        });
        assert!(media.is_image_loaded());

        let uniforms = media.uniforms(0.05);
        assert_eq!(uniforms.image_size, [800.0, 600.0]);
        assert_eq!(uniforms.time, 42.0);
        assert_eq!(uniforms.border_radius, 0.05);
        assert_eq!(uniforms.plane_size, layout.plane_size());
    }
}
