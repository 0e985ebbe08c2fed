//! Crowdnest Core Runtime
//!
//! Host-facing primitives shared by the interactive front-end components:
//!
//! - **Input Events**: Platform-agnostic pointer, wheel and resize events
//! - **Input Sources**: Injected listener registry replacing window-level handlers
//! - **Frame Scheduling**: "Run once per display refresh until cancelled"
//! - **Delayed Actions**: Inactivity debouncing driven by an explicit clock
//!
//! # Example
//!
//! ```rust
//! use crowdnest_core::frame::{FrameLoop, FrameScheduler};
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use std::sync::Arc;
//!
//! let mut frames = FrameLoop::new();
//! let count = Arc::new(AtomicU32::new(0));
//! let counter = count.clone();
//!
//! let token = frames.request_frames(Box::new(move |_frame| {
//!     counter.fetch_add(1, Ordering::Relaxed);
//! }));
//!
//! frames.pump(16);
//! frames.pump(32);
//! token.cancel();
//! frames.pump(48);
//!
//! assert_eq!(count.load(Ordering::Relaxed), 2);
//! ```

pub mod events;
pub mod frame;
pub mod input;
pub mod timer;

pub use events::{EventData, EventType, InputEvent, PointerKind};
pub use frame::{FrameCallback, FrameInfo, FrameLoop, FrameScheduler, FrameToken};
pub use input::{InputHandler, InputHub, InputSource, ListenerId, ListenerStatus};
pub use timer::DelayedAction;
