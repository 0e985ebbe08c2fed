//! Input event model
//!
//! Unified pointer, wheel and resize events routed from the host window.
//! Mouse and touch input share one pointer representation; the host picks
//! the first touch point for touch events.

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_MOVE: EventType = 3;
    /// Mouse wheel or trackpad scroll
    pub const WHEEL: EventType = 30;
    /// Host container changed its pixel size
    pub const RESIZE: EventType = 40;
}

/// Device that produced a pointer event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PointerKind {
    #[default]
    Mouse,
    Touch,
}

/// An input event with associated data
#[derive(Clone, Debug, PartialEq)]
pub struct InputEvent {
    pub event_type: EventType,
    pub data: EventData,
    /// Milliseconds on the same clock the frame scheduler is pumped with
    pub timestamp: u64,
}

/// Event-specific data
#[derive(Clone, Debug, PartialEq)]
pub enum EventData {
    Pointer {
        x: f32,
        y: f32,
        kind: PointerKind,
    },
    Wheel {
        delta_x: f32,
        delta_y: f32,
    },
    Resize {
        width: u32,
        height: u32,
    },
    /// Events without a payload (touch end has no coordinates)
    None,
}

impl InputEvent {
    pub fn pointer_down(x: f32, y: f32, kind: PointerKind, timestamp: u64) -> Self {
        Self {
            event_type: event_types::POINTER_DOWN,
            data: EventData::Pointer { x, y, kind },
            timestamp,
        }
    }

    pub fn pointer_move(x: f32, y: f32, kind: PointerKind, timestamp: u64) -> Self {
        Self {
            event_type: event_types::POINTER_MOVE,
            data: EventData::Pointer { x, y, kind },
            timestamp,
        }
    }

    pub fn pointer_up(timestamp: u64) -> Self {
        Self {
            event_type: event_types::POINTER_UP,
            data: EventData::None,
            timestamp,
        }
    }

    pub fn wheel(delta_y: f32, timestamp: u64) -> Self {
        Self {
            event_type: event_types::WHEEL,
            data: EventData::Wheel {
                delta_x: 0.0,
                delta_y,
            },
            timestamp,
        }
    }

    pub fn resize(width: u32, height: u32, timestamp: u64) -> Self {
        Self {
            event_type: event_types::RESIZE,
            data: EventData::Resize { width, height },
            timestamp,
        }
    }

    /// Horizontal pointer coordinate, if this event carries one
    pub fn pointer_x(&self) -> Option<f32> {
        match self.data {
            EventData::Pointer { x, .. } => Some(x),
            _ => None,
        }
    }

    /// Vertical wheel delta, if this is a wheel event
    pub fn wheel_delta(&self) -> Option<f32> {
        match self.data {
            EventData::Wheel { delta_y, .. } => Some(delta_y),
            _ => None,
        }
    }
}
