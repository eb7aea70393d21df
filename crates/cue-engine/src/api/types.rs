use bytemuck::{Pod, Zeroable};

/// A sound cue emitted by the game logic.
/// The numeric value maps to a game-defined sample on the host side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct SoundEvent(pub u32);

/// A game event handed to the host UI (scoreboard, banners).
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    pub fn new(kind: f32, a: f32, b: f32, c: f32) -> Self {
        Self { kind, a, b, c }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_event_packs_as_four_floats() {
        let events = [GameEvent::new(1.0, 2.0, 3.0, 4.0), GameEvent::new(5.0, 0.0, 0.0, 0.0)];
        let floats: &[f32] = bytemuck::cast_slice(&events);
        assert_eq!(floats.len(), 2 * GameEvent::FLOATS);
        assert_eq!(floats[4], 5.0);
    }
}
