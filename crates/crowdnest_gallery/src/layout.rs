//! Item strip layout
//!
//! Planes are sized from a 700x900 px design reference scaled to the
//! screen height, then placed edge to edge with a fixed world-space gap.

use crate::viewport::ViewportMetrics;

/// Screen height the design reference sizes are scaled against
pub const REFERENCE_SCREEN_HEIGHT: f32 = 1500.0;
/// Plane width in reference pixels
pub const PLANE_WIDTH_PX: f32 = 700.0;
/// Plane height in reference pixels
pub const PLANE_HEIGHT_PX: f32 = 900.0;
/// World-space gap between neighbouring planes
pub const ITEM_PADDING: f32 = 2.0;

/// Geometry shared by every slot of the strip
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StripLayout {
    pub scale: f32,
    pub plane_width: f32,
    pub plane_height: f32,
    /// Plane width plus padding; the distance between neighbouring slots
    pub item_width: f32,
    pub item_count: usize,
}

impl StripLayout {
    /// Lay out `item_count` slots for the given viewport.
    ///
    /// An empty viewport yields an all-zero layout so nothing divides by zero.
    pub fn compute(viewport: &ViewportMetrics, item_count: usize) -> Self {
        if viewport.is_empty() {
            return Self {
                item_count,
                ..Self::default()
            };
        }
        let scale = viewport.screen_height / REFERENCE_SCREEN_HEIGHT;
        let plane_height =
            viewport.world_height * (PLANE_HEIGHT_PX * scale) / viewport.screen_height;
        let plane_width = viewport.world_width * (PLANE_WIDTH_PX * scale) / viewport.screen_width;
        Self {
            scale,
            plane_width,
            plane_height,
            item_width: plane_width + ITEM_PADDING,
            item_count,
        }
    }

    /// Resting x of slot `index` before any scrolling
    pub fn base_position(&self, index: usize) -> f32 {
        self.item_width * index as f32
    }

    /// Distance after which the strip repeats
    pub fn loop_width(&self) -> f32 {
        self.item_width * self.item_count as f32
    }

    pub fn plane_size(&self) -> [f32; 2] {
        [self.plane_width, self.plane_height]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::{Camera, ViewportMetrics};

    #[test]
    fn test_layout_for_desktop_screen() {
        let viewport = ViewportMetrics::from_screen(&Camera::default(), 1200, 800).unwrap();
        let layout = StripLayout::compute(&viewport, 12);

        assert!((layout.scale - 800.0 / 1500.0).abs() < 1e-6);
        // 900 * (800 / 1500) / 800 of the visible height
        assert!((layout.plane_height - viewport.world_height * 0.6).abs() < 1e-4);
        assert!((layout.plane_width - 7.732209).abs() < 1e-4);
        assert!((layout.item_width - 9.732209).abs() < 1e-4);
        assert!((layout.loop_width() - layout.item_width * 12.0).abs() < 1e-4);
        assert!((layout.base_position(3) - layout.item_width * 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_empty_viewport_layout_is_zero() {
        let layout = StripLayout::compute(&ViewportMetrics::default(), 6);
        assert_eq!(layout.item_width, 0.0);
        assert_eq!(layout.loop_width(), 0.0);
        assert_eq!(layout.item_count, 6);
    }
}
