//! Infinite-loop recycling
//!
//! An item that has left the viewport on the trailing side of travel jumps
//! one loop width to the leading side. Because every jump is a whole loop
//! width, each item's position stays congruent to `base - current` modulo
//! the loop width and the strip never shows a gap or an overlap.

use crowdnest_animation::TravelDirection;

/// Whether an item lies completely outside the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Offscreen {
    /// Right edge is left of the viewport
    pub before: bool,
    /// Left edge is right of the viewport
    pub after: bool,
}

impl Offscreen {
    pub fn classify(position: f32, half_plane_width: f32, viewport_half_width: f32) -> Self {
        Self {
            before: position + half_plane_width < -viewport_half_width,
            after: position - half_plane_width > viewport_half_width,
        }
    }
}

/// Outcome of the recycle check for one item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recycle {
    Stay,
    /// Scrolled off the left edge while travelling right; reappear at the right end
    WrapToEnd,
    /// Scrolled off the right edge while travelling left; reappear at the left end
    WrapToStart,
}

impl Recycle {
    pub fn decide(direction: TravelDirection, offscreen: Offscreen) -> Self {
        match direction {
            TravelDirection::Right if offscreen.before => Self::WrapToEnd,
            TravelDirection::Left if offscreen.after => Self::WrapToStart,
            _ => Self::Stay,
        }
    }

    /// Change to apply to the item's extra offset.
    ///
    /// The rendered position is `base - current - extra`, so lowering the
    /// extra offset moves the item right.
    pub fn extra_offset_delta(self, loop_width: f32) -> f32 {
        match self {
            Self::Stay => 0.0,
            Self::WrapToEnd => -loop_width,
            Self::WrapToStart => loop_width,
        }
    }

    pub fn is_wrap(self) -> bool {
        self != Self::Stay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_bounds() {
        // viewport [-10, 10], plane half-width 2
        assert_eq!(Offscreen::classify(0.0, 2.0, 10.0), Offscreen::default());
        assert!(Offscreen::classify(-12.5, 2.0, 10.0).before);
        // still touching the left edge
        assert!(!Offscreen::classify(-11.5, 2.0, 10.0).before);
        assert!(Offscreen::classify(12.5, 2.0, 10.0).after);
        assert!(!Offscreen::classify(11.5, 2.0, 10.0).after);
    }

    #[test]
    fn test_only_trailing_side_wraps() {
        let before = Offscreen {
            before: true,
            after: false,
        };
        let after = Offscreen {
            before: false,
            after: true,
        };
        assert_eq!(Recycle::decide(TravelDirection::Right, before), Recycle::WrapToEnd);
        assert_eq!(Recycle::decide(TravelDirection::Left, before), Recycle::Stay);
        assert_eq!(Recycle::decide(TravelDirection::Left, after), Recycle::WrapToStart);
        assert_eq!(Recycle::decide(TravelDirection::Right, after), Recycle::Stay);
    }

    #[test]
    fn test_wrap_moves_one_loop_width() {
        let loop_width = 116.8;
        let base_minus_current = -70.0;
        let extra = 0.0;

        let delta = Recycle::WrapToEnd.extra_offset_delta(loop_width);
        let moved = base_minus_current - (extra + delta);
        assert!((moved - (base_minus_current + loop_width)).abs() < 1e-4);

        assert_eq!(Recycle::Stay.extra_offset_delta(loop_width), 0.0);
        assert_eq!(Recycle::WrapToStart.extra_offset_delta(loop_width), loop_width);
    }
}
