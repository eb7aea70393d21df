use crate::api::types::{GameEvent, SoundEvent};
use crate::input::queue::InputQueue;
use crate::systems::draw::DrawList;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// World width in game units.
    pub world_width: f32,
    /// World height in game units.
    pub world_height: f32,
    /// Maximum draw commands per frame (default: 512).
    pub max_draw_commands: usize,
    /// Maximum number of sound events per frame (default: 32).
    pub max_sounds: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            world_width: 800.0,
            world_height: 600.0,
            max_draw_commands: 512,
            max_sounds: 32,
            max_events: 32,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One fixed tick: consume input, advance the simulation, describe the frame.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Apply host-provided settings (JSON). Games without settings ignore it.
    fn load_settings(&mut self, _json: &str) {}
}

/// Mutable per-frame output, passed to Game::init and Game::update.
pub struct EngineContext {
    pub draw: DrawList,
    pub sounds: Vec<SoundEvent>,
    pub events: Vec<GameEvent>,
    max_sounds: usize,
    max_events: usize,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::from_config(&GameConfig::default())
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            draw: DrawList::new(config.max_draw_commands),
            sounds: Vec::with_capacity(config.max_sounds),
            events: Vec::with_capacity(config.max_events),
            max_sounds: config.max_sounds,
            max_events: config.max_events,
        }
    }

    /// Emit a sound cue. Extra sounds past the per-frame cap are dropped.
    pub fn emit_sound(&mut self, event: SoundEvent) {
        if self.sounds.len() < self.max_sounds {
            self.sounds.push(event);
        }
    }

    /// Emit a game event. Extra events past the per-frame cap are dropped.
    pub fn emit_event(&mut self, event: GameEvent) {
        if self.events.len() < self.max_events {
            self.events.push(event);
        } else {
            log::warn!("game event dropped (cap {}): kind={}", self.max_events, event.kind);
        }
    }

    /// Emit a game event that replaces any event of the same kind already
    /// emitted this frame. For state snapshots that only the latest value of
    /// matters, so repeated fixed steps do not fill the event cap.
    pub fn set_event(&mut self, event: GameEvent) {
        match self.events.iter_mut().find(|e| e.kind == event.kind) {
            Some(slot) => *slot = event,
            None => self.emit_event(event),
        }
    }

    /// Clear sounds and events. The draw list is left for the game, which
    /// redraws it on every update, so a frame with no fixed step keeps the
    /// previous picture.
    pub fn clear_events(&mut self) {
        self.sounds.clear();
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}
