//! GPU uniform layouts
//!
//! All structures use `#[repr(C)]` and implement `bytemuck::Pod` so a
//! renderer can copy them straight into uniform buffers. Field order and
//! padding must match the bindings in [`crate::shaders`].

/// Plane tessellation used for the wave displacement
pub const PLANE_WIDTH_SEGMENTS: u32 = 100;
pub const PLANE_HEIGHT_SEGMENTS: u32 = 50;

/// Per-item media plane uniforms
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MediaUniforms {
    /// (x, y, z, rotation_z) of the plane centre in world space
    pub transform: [f32; 4],
    /// Plane size in world units
    pub plane_size: [f32; 2],
    /// Natural image size in pixels, (0, 0) until loaded
    pub image_size: [f32; 2],
    /// Wave phase
    pub time: f32,
    /// Scroll velocity this frame
    pub speed: f32,
    /// Corner radius in UV units
    pub border_radius: f32,
    pub _padding: f32,
}

/// Per-item caption plane uniforms
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CaptionUniforms {
    /// (x, y, z, rotation_z) of the owning plane
    pub parent_transform: [f32; 4],
    /// (width, height, offset_y, 0) relative to the owning plane
    pub mesh: [f32; 4],
    /// Text color, straight alpha
    pub color: [f32; 4],
}

/// Vertex counts for a plane of `w` x `h` segments
pub fn plane_vertex_count(width_segments: u32, height_segments: u32) -> u32 {
    (width_segments + 1) * (height_segments + 1)
}

pub fn plane_index_count(width_segments: u32, height_segments: u32) -> u32 {
    width_segments * height_segments * 6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_sizes_are_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<MediaUniforms>(), 48);
        assert_eq!(std::mem::size_of::<CaptionUniforms>(), 48);
        assert_eq!(std::mem::size_of::<MediaUniforms>() % 16, 0);
    }

    #[test]
    fn test_uniform_bytes() {
        let uniforms = MediaUniforms {
            time: 1.5,
            ..Default::default()
        };
        let bytes: &[u8] = bytemuck::bytes_of(&uniforms);
        assert_eq!(bytes.len(), 48);
        assert_eq!(&bytes[32..36], &1.5f32.to_ne_bytes());
    }

    #[test]
    fn test_plane_tessellation() {
        assert_eq!(
            plane_vertex_count(PLANE_WIDTH_SEGMENTS, PLANE_HEIGHT_SEGMENTS),
            101 * 51
        );
        assert_eq!(
            plane_index_count(PLANE_WIDTH_SEGMENTS, PLANE_HEIGHT_SEGMENTS),
            30_000
        );
    }
}
