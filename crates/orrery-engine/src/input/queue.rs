use crate::api::types::EntityId;

/// Input event types the engine understands.
/// Generic, no game-specific semantics. Pointer targets are resolved by the
/// host's picking pass; `None` means the pointer struck empty space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The pointer entered an object.
    PointerOver { target: Option<EntityId> },
    /// The pointer left an object.
    PointerOut { target: Option<EntityId> },
    /// A click landed on an object, or on the background when `target` is `None`.
    Click { target: Option<EntityId> },
    /// Camera drag delta in pixels. Left button orbits, right button pans.
    Drag { dx: f32, dy: f32, pan: bool },
    /// Scroll wheel. Positive zooms in.
    Wheel { delta: f32 },
    /// Canvas resized (CSS pixels).
    Resize { width: f32, height: f32 },
    /// A custom event from the UI layer (React buttons, sliders, etc.).
    /// `kind` identifies the event type; `a`, `b`, `c` carry arbitrary data.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

impl InputEvent {
    /// Events consumed by the camera controls rather than the game.
    pub fn is_camera_control(&self) -> bool {
        matches!(
            self,
            InputEvent::Drag { .. } | InputEvent::Wheel { .. } | InputEvent::Resize { .. }
        )
    }
}

/// A queue of input events.
/// JS writes events into the queue; Rust reads and drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events in receipt order without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain_keeps_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerOver { target: Some(EntityId(3)) });
        q.push(InputEvent::Click { target: None });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events[0], InputEvent::PointerOver { target: Some(EntityId(3)) });
        assert_eq!(events[1], InputEvent::Click { target: None });
        assert!(q.is_empty());
    }

    #[test]
    fn custom_event() {
        let mut q = InputQueue::new();
        q.push(InputEvent::Custom { kind: 7, a: 1.5, b: 2.5, c: 3.5 });
        let events = q.drain();
        assert_eq!(events.len(), 1);
        match events[0] {
            InputEvent::Custom { kind, a, b, c } => {
                assert_eq!(kind, 7);
                assert_eq!(a, 1.5);
                assert_eq!(b, 2.5);
                assert_eq!(c, 3.5);
            }
            _ => panic!("Expected Custom event"),
        }
    }

    #[test]
    fn camera_control_classification() {
        assert!(InputEvent::Wheel { delta: 1.0 }.is_camera_control());
        assert!(InputEvent::Drag { dx: 0.1, dy: 0.0, pan: false }.is_camera_control());
        assert!(!InputEvent::Click { target: None }.is_camera_control());
        assert!(!InputEvent::Custom { kind: 1, a: 0.0, b: 0.0, c: 0.0 }.is_camera_control());
    }
}
