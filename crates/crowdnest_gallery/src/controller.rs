//! Pointer and wheel input mapped onto the scroll target

use crowdnest_animation::ScrollState;
use crowdnest_core::DelayedAction;

/// Drag sensitivity per unit of scroll speed
pub const DRAG_FACTOR: f32 = 0.025;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    start_x: f32,
    start_scroll: f32,
}

/// Owns the scroll state and turns raw input into scroll targets.
///
/// Snaps are debounced with [`DelayedAction`]s polled from the frame loop,
/// so input handlers never block and all mutation stays on one thread.
#[derive(Debug, Clone)]
pub struct ScrollController {
    scroll: ScrollState,
    scroll_speed: f32,
    drag: Option<Drag>,
    wheel_snap: DelayedAction,
    release_snap: DelayedAction,
}

impl ScrollController {
    pub fn new(scroll_ease: f32, scroll_speed: f32, wheel_settle_ms: u64, release_settle_ms: u64) -> Self {
        Self {
            scroll: ScrollState::new(scroll_ease),
            scroll_speed,
            drag: None,
            wheel_snap: DelayedAction::new(wheel_settle_ms),
            release_snap: DelayedAction::new(release_settle_ms),
        }
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn scroll_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn sensitivity(&self) -> f32 {
        self.scroll_speed * DRAG_FACTOR
    }

    /// Start a drag. Pending snaps are superseded by the new gesture.
    pub fn pointer_down(&mut self, x: f32) {
        self.drag = Some(Drag {
            start_x: x,
            start_scroll: self.scroll.current,
        });
        self.wheel_snap.cancel();
        self.release_snap.cancel();
    }

    /// Follow the pointer. Ignored unless a drag is in progress.
    pub fn pointer_move(&mut self, x: f32) {
        if let Some(drag) = self.drag {
            let distance = (drag.start_x - x) * self.sensitivity();
            self.scroll.target = drag.start_scroll + distance;
        }
    }

    /// End the drag and schedule a snap to the nearest item
    pub fn pointer_up(&mut self, now_ms: u64) {
        self.drag = None;
        self.release_snap.schedule(now_ms);
    }

    /// Step the target by one scroll speed in the wheel's direction
    pub fn wheel(&mut self, delta: f32, now_ms: u64) {
        if delta > 0.0 {
            self.scroll.target += self.scroll_speed;
        } else if delta < 0.0 {
            self.scroll.target -= self.scroll_speed;
        } else {
            return;
        }
        self.wheel_snap.schedule(now_ms);
    }

    /// Fire any due snap. Returns true if the target was snapped.
    pub fn poll_snap(&mut self, now_ms: u64, item_width: f32) -> bool {
        let release = self.release_snap.poll(now_ms);
        let wheel = self.wheel_snap.poll(now_ms);
        if release || wheel {
            let before = self.scroll.target;
            let after = self.scroll.snap_target(item_width);
            tracing::debug!(before, after, item_width, "scroll target snapped");
            true
        } else {
            false
        }
    }

    pub fn has_pending_snap(&self) -> bool {
        self.wheel_snap.is_pending() || self.release_snap.is_pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> ScrollController {
        ScrollController::new(0.05, 2.0, 200, 0)
    }

    #[test]
    fn test_drag_maps_pixels_to_target() {
        let mut c = controller();
        c.scroll_mut().current = 4.0;
        c.pointer_down(500.0);
        c.pointer_move(300.0);
        // (500 - 300) * 2 * 0.025
        assert!((c.scroll().target - 14.0).abs() < 1e-5);

        c.pointer_move(600.0);
        assert!((c.scroll().target - (4.0 - 5.0)).abs() < 1e-5);
    }

    #[test]
    fn test_move_without_drag_is_ignored() {
        let mut c = controller();
        c.pointer_move(100.0);
        assert_eq!(c.scroll().target, 0.0);
    }

    #[test]
    fn test_release_snaps_on_next_poll() {
        let mut c = controller();
        c.pointer_down(0.0);
        c.pointer_move(130.0);
        c.pointer_up(1_000);
        assert!(!c.is_dragging());
        assert!(c.has_pending_snap());

        assert!(c.poll_snap(1_016, 5.0));
        assert_eq!(c.scroll().target, -5.0);
        assert!(!c.has_pending_snap());
    }

    #[test]
    fn test_wheel_steps_and_debounces() {
        let mut c = controller();
        c.wheel(120.0, 0);
        c.wheel(3.0, 100);
        c.wheel(-1.0, 150);
        assert_eq!(c.scroll().target, 2.0);

        // Each event pushes the deadline out
        assert!(!c.poll_snap(300, 9.7));
        assert!(c.poll_snap(350, 9.7));
        assert_eq!(c.scroll().target, 0.0);
    }

    #[test]
    fn test_zero_wheel_delta_is_ignored() {
        let mut c = controller();
        c.wheel(0.0, 0);
        assert_eq!(c.scroll().target, 0.0);
        assert!(!c.has_pending_snap());
    }

    #[test]
    fn test_new_drag_cancels_pending_wheel_snap() {
        let mut c = controller();
        c.wheel(1.0, 0);
        c.pointer_down(10.0);
        assert!(!c.has_pending_snap());
        assert!(!c.poll_snap(1_000, 9.7));
    }
}
