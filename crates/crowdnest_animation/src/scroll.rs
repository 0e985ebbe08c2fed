//! Eased scroll state
//!
//! A single scalar scroll position that closes a fixed fraction of the
//! remaining distance to its target every frame:
//!
//! `current' = current + (target - current) * ease`
//!
//! The target is unbounded in both directions; looping content is expected
//! to handle wrap-around itself.

use crate::easing::lerp;

/// Smallest accepted ease factor. Anything lower would never visibly move.
pub const MIN_EASE: f32 = 1e-4;

/// Direction the content is travelling this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelDirection {
    /// Scroll position increased; content moves toward negative x
    Right,
    /// Scroll position decreased or stayed put
    Left,
}

/// Scroll position with per-frame easing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    /// Eased position used for rendering
    pub current: f32,
    /// Position input is steering toward
    pub target: f32,
    /// `current` as of the end of the previous frame
    pub last: f32,
    ease: f32,
}

impl ScrollState {
    /// Create a resting scroll state at 0. `ease` is clamped into (0, 1].
    pub fn new(ease: f32) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            last: 0.0,
            ease: ease.clamp(MIN_EASE, 1.0),
        }
    }

    pub fn ease(&self) -> f32 {
        self.ease
    }

    /// Advance `current` one ease step toward `target`
    pub fn step(&mut self) -> f32 {
        self.current = lerp(self.current, self.target, self.ease);
        self.current
    }

    /// Distance travelled since the previous frame
    pub fn velocity(&self) -> f32 {
        self.current - self.last
    }

    pub fn direction(&self) -> TravelDirection {
        if self.current > self.last {
            TravelDirection::Right
        } else {
            TravelDirection::Left
        }
    }

    /// Close the frame: remember `current` for the next velocity sample
    pub fn commit_frame(&mut self) {
        self.last = self.current;
    }

    /// Whether `current` is within `epsilon` of `target`
    pub fn is_settled(&self, epsilon: f32) -> bool {
        (self.target - self.current).abs() <= epsilon
    }

    /// Snap the target to the nearest multiple of `item_width`
    pub fn snap_target(&mut self, item_width: f32) -> f32 {
        self.target = snap_to_item(self.target, item_width);
        self.target
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(0.05)
    }
}

/// Round `value` to the nearest multiple of `item_width`, symmetric around 0.
///
/// `sign(value) * round(|value| / item_width) * item_width`. A non-positive
/// or non-finite width leaves the value unchanged.
pub fn snap_to_item(value: f32, item_width: f32) -> f32 {
    if !(item_width.is_finite() && item_width > 0.0) {
        return value;
    }
    let snapped = (value.abs() / item_width).round() * item_width;
    if value < 0.0 {
        -snapped
    } else {
        snapped
    }
}

/// Frames needed for the ease to bring a gap of `distance` within `epsilon`.
///
/// The gap shrinks by `(1 - ease)` per frame, so this is
/// `ceil(ln(epsilon / distance) / ln(1 - ease))`, which grows like `1/ease`.
pub fn steps_to_settle(distance: f32, ease: f32, epsilon: f32) -> u32 {
    let distance = distance.abs();
    if distance <= epsilon || epsilon <= 0.0 {
        return 0;
    }
    let ease = ease.clamp(MIN_EASE, 1.0);
    if ease >= 1.0 {
        return 1;
    }
    let steps = ((epsilon / distance).ln() / (1.0 - ease).ln()).ceil();
    steps.max(1.0) as u32
}
