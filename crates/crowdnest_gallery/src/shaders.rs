//! WGSL shaders for the gallery planes
//!
//! These shaders render:
//! - Media planes with a speed-driven wave, cover-fit sampling and
//!   rounded corners
//! - Caption planes with alpha-tested text

/// Shared camera bindings
pub const CAMERA_BINDINGS: &str = r#"
struct Camera {
    view_proj: mat4x4<f32>,
}

@group(0) @binding(0) var<uniform> camera: Camera;

fn plane_model(transform: vec4<f32>, scale: vec2<f32>, p: vec3<f32>) -> vec4<f32> {
    let c = cos(transform.w);
    let s = sin(transform.w);
    let scaled = vec2<f32>(p.x * scale.x, p.y * scale.y);
    let rotated = vec2<f32>(scaled.x * c - scaled.y * s, scaled.x * s + scaled.y * c);
    return vec4<f32>(rotated + transform.xy, p.z + transform.z, 1.0);
}
"#;

/// Media plane shader. Pair with [`CAMERA_BINDINGS`] and
/// [`crate::uniforms::MediaUniforms`].
pub const MEDIA_SHADER: &str = r#"
struct Media {
    transform: vec4<f32>,
    plane_size: vec2<f32>,
    image_size: vec2<f32>,
    time: f32,
    speed: f32,
    border_radius: f32,
    _padding: f32,
}

@group(1) @binding(0) var<uniform> media: Media;
@group(1) @binding(1) var media_texture: texture_2d<f32>;
@group(1) @binding(2) var media_sampler: sampler;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) uv: vec2<f32>,
}

struct VertexOutput {
    @builtin(position) clip: vec4<f32>,
    @location(0) uv: vec2<f32>,
}

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var p = in.position;
    p.z = (sin(p.x * 4.0 + media.time) * 1.5 + cos(p.y * 2.0 + media.time) * 1.5)
        * (0.1 + media.speed * 0.5);

    var out: VertexOutput;
    out.clip = camera.view_proj * plane_model(media.transform, media.plane_size, p);
    out.uv = in.uv;
    return out;
}

fn rounded_box_sdf(p: vec2<f32>, b: vec2<f32>, r: f32) -> f32 {
    let d = abs(p) - b;
    return length(max(d, vec2<f32>(0.0))) + min(max(d.x, d.y), 0.0) - r;
}

fn cover_ratio(plane: vec2<f32>, image: vec2<f32>) -> vec2<f32> {
    if (image.x <= 0.0 || image.y <= 0.0 || plane.x <= 0.0 || plane.y <= 0.0) {
        return vec2<f32>(1.0);
    }
    return vec2<f32>(
        min((plane.x / plane.y) / (image.x / image.y), 1.0),
        min((plane.y / plane.x) / (image.y / image.x), 1.0),
    );
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let ratio = cover_ratio(media.plane_size, media.image_size);
    let uv = in.uv * ratio + (vec2<f32>(1.0) - ratio) * 0.5;
    let color = textureSample(media_texture, media_sampler, uv);

    let d = rounded_box_sdf(in.uv - 0.5, vec2<f32>(0.5 - media.border_radius), media.border_radius);
    if (d > 0.0) {
        discard;
    }
    return vec4<f32>(color.rgb, 1.0);
}
"#;

/// Caption plane shader. Pair with [`CAMERA_BINDINGS`] and
/// [`crate::uniforms::CaptionUniforms`].
pub const CAPTION_SHADER: &str = r#"
struct Caption {
    parent_transform: vec4<f32>,
    mesh: vec4<f32>,
    color: vec4<f32>,
}

@group(1) @binding(0) var<uniform> caption: Caption;
@group(1) @binding(1) var caption_texture: texture_2d<f32>;
@group(1) @binding(2) var caption_sampler: sampler;

struct VertexOutput {
    @builtin(position) clip: vec4<f32>,
    @location(0) uv: vec2<f32>,
}

@vertex
fn vs_main(@location(0) position: vec3<f32>, @location(1) uv: vec2<f32>) -> VertexOutput {
    // Caption hangs below the plane centre and inherits its roll
    let local = vec3<f32>(
        position.x * caption.mesh.x,
        position.y * caption.mesh.y + caption.mesh.z,
        position.z,
    );
    var out: VertexOutput;
    out.clip = camera.view_proj * plane_model(caption.parent_transform, vec2<f32>(1.0), local);
    out.uv = uv;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let texel = textureSample(caption_texture, caption_sampler, in.uv);
    if (texel.a < 0.1) {
        discard;
    }
    return texel;
}
"#;

/// Full media shader module source
pub fn media_module() -> String {
    format!("{CAMERA_BINDINGS}{MEDIA_SHADER}")
}

/// Full caption shader module source
pub fn caption_module() -> String {
    format!("{CAMERA_BINDINGS}{CAPTION_SHADER}")
}
