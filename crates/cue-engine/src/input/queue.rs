use glam::Vec2;

/// Input event types the engine understands.
/// Generic: no game-specific semantics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The primary pointer button went down at world coordinates (x, y).
    PointerDown { x: f32, y: f32 },
    /// The primary pointer button went up at world coordinates (x, y).
    PointerUp { x: f32, y: f32 },
    /// The pointer moved to world coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// A key was pressed.
    KeyDown { key_code: u32 },
    /// A key was released.
    KeyUp { key_code: u32 },
    /// A custom event from the UI layer (buttons outside the canvas).
    /// `kind` identifies the event type; `a`, `b`, `c` carry arbitrary data.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// A queue of input events.
/// The host writes events into the queue; the game reads them once per frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
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

/// Edge-triggered view of the primary pointer button.
///
/// Fold every event of a frame into the state with [`PointerState::apply`],
/// then read `pressed`/`released` (edges seen this frame) and `held`
/// (level after the last event). Call [`PointerState::begin_frame`] before
/// the next batch so edges never leak into a later frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub pos: Vec2,
    pub held: bool,
    pub pressed: bool,
    pub released: bool,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the per-frame edges. Position and held level persist.
    pub fn begin_frame(&mut self) {
        self.pressed = false;
        self.released = false;
    }

    /// Fold one event into the state. Returns true if it was a pointer event.
    pub fn apply(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::PointerDown { x, y } => {
                self.pos = Vec2::new(x, y);
                self.held = true;
                self.pressed = true;
                true
            }
            InputEvent::PointerUp { x, y } => {
                self.pos = Vec2::new(x, y);
                self.held = false;
                self.released = true;
                true
            }
            InputEvent::PointerMove { x, y } => {
                self.pos = Vec2::new(x, y);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 10.0, y: 20.0 });
        q.push(InputEvent::KeyDown { key_code: 82 });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn pointer_edges_and_level() {
        let mut p = PointerState::new();
        p.apply(&InputEvent::PointerDown { x: 5.0, y: 6.0 });
        assert!(p.pressed && p.held && !p.released);
        assert_eq!(p.pos, Vec2::new(5.0, 6.0));

        p.begin_frame();
        assert!(!p.pressed && p.held);

        p.apply(&InputEvent::PointerMove { x: 7.0, y: 8.0 });
        p.apply(&InputEvent::PointerUp { x: 9.0, y: 1.0 });
        assert!(p.released && !p.held);
        assert_eq!(p.pos, Vec2::new(9.0, 1.0));
    }

    #[test]
    fn click_within_one_frame_reports_both_edges() {
        let mut p = PointerState::new();
        p.apply(&InputEvent::PointerDown { x: 0.0, y: 0.0 });
        p.apply(&InputEvent::PointerUp { x: 0.0, y: 0.0 });
        assert!(p.pressed && p.released && !p.held);
    }

    #[test]
    fn key_events_are_not_pointer_events() {
        let mut p = PointerState::new();
        assert!(!p.apply(&InputEvent::KeyDown { key_code: 82 }));
        assert!(!p.pressed);
    }
}
