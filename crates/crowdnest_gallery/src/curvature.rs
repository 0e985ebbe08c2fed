//! Cylindrical bend projection
//!
//! Items sit on a circular arc through the viewport edges and a sagitta of
//! `|bend|` at the centre. A positive bend curves the strip downwards at
//! the edges, a negative bend upwards.

/// Vertical offset and roll of one item on the arc
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Curvature {
    pub y: f32,
    pub rotation_z: f32,
}

/// Project an item at horizontal offset `x` onto the bend arc.
///
/// Offsets beyond `half_width` are clamped to the viewport edge, so the
/// asin argument never leaves [-1, 1].
pub fn project(bend: f32, half_width: f32, x: f32) -> Curvature {
    if bend == 0.0 {
        return Curvature::default();
    }

    let effective_x = x.abs().min(half_width);
    if effective_x == 0.0 {
        return Curvature::default();
    }

    // (h² + b²) / 2b, split so neither square can overflow
    let bend_abs = bend.abs();
    let radius = half_width * (half_width / (2.0 * bend_abs)) + bend_abs * 0.5;
    let ratio = (effective_x / radius).clamp(0.0, 1.0);

    // r - sqrt(r² - x²), rewritten as x² / (r (1 + sqrt(1 - (x/r)²)))
    let denominator = radius * (1.0 + (1.0 - ratio * ratio).sqrt());
    let arc = if denominator > 0.0 {
        effective_x * (effective_x / denominator)
    } else {
        0.0
    };
    let angle = ratio.asin();
    let side = sign(x);

    if bend > 0.0 {
        Curvature {
            y: -arc,
            rotation_z: -side * angle,
        }
    } else {
        Curvature {
            y: arc,
            rotation_z: side * angle,
        }
    }
}

/// Sign with 0 for 0 (`f32::signum` maps 0.0 to 1.0)
fn sign(x: f32) -> f32 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}
