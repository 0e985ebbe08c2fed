//! Injected input sources
//!
//! Components never register on a global window object. The host owns an
//! [`InputSource`] and routes window-level events into it; components
//! subscribe once at mount and unsubscribe at teardown with the returned
//! [`ListenerId`]. A handler whose owner is gone returns
//! [`ListenerStatus::Detach`] and is dropped by the source.

use slotmap::{new_key_type, SlotMap};

use crate::events::InputEvent;

new_key_type! {
    /// Handle for a registered input listener
    pub struct ListenerId;
}

/// What a listener wants after handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerStatus {
    Keep,
    Detach,
}

/// Input listener callback
pub type InputHandler = Box<dyn FnMut(&InputEvent) -> ListenerStatus + Send>;

/// Capability to deliver pointer, wheel and resize events to listeners
pub trait InputSource {
    /// Register a listener for every event the source emits
    fn subscribe(&mut self, handler: InputHandler) -> ListenerId;

    /// Remove a listener. Returns false if it was already removed.
    fn unsubscribe(&mut self, id: ListenerId) -> bool;
}

/// In-process input source fed by the host's event loop
pub struct InputHub {
    listeners: SlotMap<ListenerId, InputHandler>,
}

impl InputHub {
    pub fn new() -> Self {
        Self {
            listeners: SlotMap::with_key(),
        }
    }

    /// Deliver an event to every listener, returning how many received it.
    /// Listeners answering [`ListenerStatus::Detach`] are removed.
    pub fn dispatch(&mut self, event: &InputEvent) -> usize {
        let delivered = self.listeners.len();
        self.listeners.retain(|id, handler| {
            let keep = handler(event) == ListenerStatus::Keep;
            if !keep {
                tracing::debug!(?id, "input listener detached itself");
            }
            keep
        });
        delivered
    }

    /// Get the number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Default for InputHub {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for InputHub {
    fn subscribe(&mut self, handler: InputHandler) -> ListenerId {
        let id = self.listeners.insert(handler);
        tracing::debug!(?id, "input listener attached");
        id
    }

    fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let removed = self.listeners.remove(id).is_some();
        if removed {
            tracing::debug!(?id, "input listener detached");
        }
        removed
    }
}
