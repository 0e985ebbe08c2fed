//! Frame scheduling
//!
//! A repeating callback runs once per display refresh until its
//! [`FrameToken`] is cancelled. The token is the only way to stop a
//! callback; callbacks never deregister themselves.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle for a registered frame callback
    pub struct FrameCallbackId;
}

/// Timing information for the frame being produced
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInfo {
    /// Number of frames pumped before this one
    pub frame_index: u64,
    /// Host clock in milliseconds
    pub time_ms: u64,
    /// Milliseconds since the previous frame (0 for the first)
    pub delta_ms: u64,
}

/// Per-frame callback
pub type FrameCallback = Box<dyn FnMut(&FrameInfo) + Send>;

/// Cancellation token for a scheduled frame callback
#[derive(Clone, Debug)]
pub struct FrameToken {
    id: FrameCallbackId,
    cancelled: Arc<AtomicBool>,
}

impl FrameToken {
    pub fn id(&self) -> FrameCallbackId {
        self.id
    }

    /// Stop the callback. Takes effect before the next frame.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Capability to run a callback once per display refresh
pub trait FrameScheduler {
    /// Schedule `callback` for every frame until the token is cancelled
    fn request_frames(&mut self, callback: FrameCallback) -> FrameToken;
}

struct Registered {
    callback: FrameCallback,
    cancelled: Arc<AtomicBool>,
}

/// Frame scheduler pumped by the host's refresh loop (or a headless clock)
pub struct FrameLoop {
    callbacks: SlotMap<FrameCallbackId, Registered>,
    frame_index: u64,
    last_time_ms: Option<u64>,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            callbacks: SlotMap::with_key(),
            frame_index: 0,
            last_time_ms: None,
        }
    }

    /// Produce one frame: drop cancelled callbacks, then run the rest.
    ///
    /// Returns the number of callbacks that ran.
    pub fn pump(&mut self, time_ms: u64) -> usize {
        self.callbacks.retain(|id, entry| {
            let keep = !entry.cancelled.load(Ordering::Acquire);
            if !keep {
                tracing::debug!(?id, "frame callback cancelled");
            }
            keep
        });

        let info = FrameInfo {
            frame_index: self.frame_index,
            time_ms,
            delta_ms: self
                .last_time_ms
                .map_or(0, |last| time_ms.saturating_sub(last)),
        };

        let mut ran = 0;
        for (_, entry) in self.callbacks.iter_mut() {
            // A callback earlier in this frame may have cancelled a later one
            if entry.cancelled.load(Ordering::Acquire) {
                continue;
            }
            (entry.callback)(&info);
            ran += 1;
        }

        tracing::trace!(frame = info.frame_index, time_ms, ran, "frame pumped");
        self.frame_index += 1;
        self.last_time_ms = Some(time_ms);
        ran
    }

    /// Number of callbacks that will run on the next frame
    pub fn active_count(&self) -> usize {
        self.callbacks
            .iter()
            .filter(|(_, entry)| !entry.cancelled.load(Ordering::Acquire))
            .count()
    }

    /// Frames pumped so far
    pub fn frame_count(&self) -> u64 {
        self.frame_index
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler for FrameLoop {
    fn request_frames(&mut self, callback: FrameCallback) -> FrameToken {
        let cancelled = Arc::new(AtomicBool::new(false));
        let id = self.callbacks.insert(Registered {
            callback,
            cancelled: cancelled.clone(),
        });
        tracing::debug!(?id, "frame callback scheduled");
        FrameToken { id, cancelled }
    }
}
