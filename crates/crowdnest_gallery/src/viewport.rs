//! Camera and visible world-space extents

/// Vertical field of view of the gallery camera, in degrees
pub const FIELD_OF_VIEW_DEG: f32 = 45.0;

/// Distance from the camera to the item plane, in world units
pub const CAMERA_DISTANCE: f32 = 20.0;

/// Perspective camera looking down -z at the item strip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub fov_deg: f32,
    pub distance: f32,
}

impl Camera {
    /// World-space height visible at the item plane
    pub fn visible_height(&self) -> f32 {
        2.0 * (self.fov_deg.to_radians() / 2.0).tan() * self.distance
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov_deg: FIELD_OF_VIEW_DEG,
            distance: CAMERA_DISTANCE,
        }
    }
}

/// Screen size and the matching visible world extents
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportMetrics {
    pub screen_width: f32,
    pub screen_height: f32,
    pub world_width: f32,
    pub world_height: f32,
}

impl ViewportMetrics {
    /// Metrics for a screen of `width` x `height` pixels.
    ///
    /// Returns `None` for a zero-sized screen.
    pub fn from_screen(camera: &Camera, width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        let (screen_width, screen_height) = (width as f32, height as f32);
        let world_height = camera.visible_height();
        Some(Self {
            screen_width,
            screen_height,
            world_width: world_height * (screen_width / screen_height),
            world_height,
        })
    }

    pub fn half_width(&self) -> f32 {
        self.world_width / 2.0
    }

    /// True until the first non-zero resize
    pub fn is_empty(&self) -> bool {
        self.screen_width <= 0.0 || self.screen_height <= 0.0
    }
}

/// Tracks the host container size and keeps the metrics current
#[derive(Debug, Clone, Default)]
pub struct Viewport {
    camera: Camera,
    metrics: ViewportMetrics,
}

impl Viewport {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            metrics: ViewportMetrics::default(),
        }
    }

    /// Recompute metrics for a new container size.
    ///
    /// A zero-sized container leaves the previous metrics in place.
    pub fn resize(&mut self, width: u32, height: u32) -> ViewportMetrics {
        match ViewportMetrics::from_screen(&self.camera, width, height) {
            Some(metrics) => {
                tracing::debug!(
                    width,
                    height,
                    world_width = metrics.world_width,
                    world_height = metrics.world_height,
                    "viewport resized"
                );
                self.metrics = metrics;
            }
            None => tracing::debug!(width, height, "ignoring zero-sized viewport"),
        }
        self.metrics
    }

    pub fn metrics(&self) -> &ViewportMetrics {
        &self.metrics
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_extents() {
        let metrics = ViewportMetrics::from_screen(&Camera::default(), 1200, 800).unwrap();
        // 2 * tan(22.5deg) * 20
        assert!((metrics.world_height - 16.568542).abs() < 1e-4);
        assert!((metrics.world_width - 24.852814).abs() < 1e-4);
        assert!((metrics.half_width() - 12.426407).abs() < 1e-4);
    }

    #[test]
    fn test_zero_size_keeps_previous_metrics() {
        let mut viewport = Viewport::default();
        assert!(viewport.metrics().is_empty());

        let first = viewport.resize(800, 600);
        assert!(!first.is_empty());
        assert_eq!(viewport.resize(0, 600), first);
        assert_eq!(viewport.resize(800, 0), first);
    }
}
