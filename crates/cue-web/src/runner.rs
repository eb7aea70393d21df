use cue_engine::{EngineContext, FixedTimestep, Game, GameConfig, InputEvent, InputQueue};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    /// Handed to every fixed step after the first in a frame.
    idle: InputQueue,
    timestep: FixedTimestep,
    config: GameConfig,
    initialized: bool,
    /// Flat buffer of sound event IDs for SharedArrayBuffer reads.
    sound_buffer: Vec<u8>,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        Self {
            ctx: EngineContext::from_config(&config),
            input: InputQueue::new(),
            idle: InputQueue::new(),
            timestep: FixedTimestep::new(config.fixed_dt),
            sound_buffer: Vec::with_capacity(config.max_sounds),
            config,
            initialized: false,
            game,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.game.config();
        self.ctx = EngineContext::from_config(&self.config);
        self.timestep = FixedTimestep::new(self.config.fixed_dt);
        self.game.init(&mut self.ctx);
        self.ctx.draw.pack();
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one display frame: zero or more fixed updates, then pack output.
    ///
    /// Queued input goes to the first fixed step only, so a press is seen
    /// once no matter how many steps the frame needs. A frame with no step
    /// keeps the input for the next one.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_events();

        let steps = self.timestep.accumulate(dt);
        for step in 0..steps {
            let input = if step == 0 { &self.input } else { &self.idle };
            self.game.update(&mut self.ctx, input);
        }
        if steps > 0 {
            self.input.drain();
        }

        self.ctx.draw.pack();
        if self.ctx.draw.dropped() > 0 {
            log::warn!(
                "draw list full: {} commands dropped (cap {})",
                self.ctx.draw.dropped(),
                self.config.max_draw_commands
            );
        }

        // Pack sound events into flat buffer
        self.sound_buffer.clear();
        for sound in &self.ctx.sounds {
            self.sound_buffer.push(sound.0 as u8);
        }
    }

    /// Forward settings JSON to the game and pick up its new configuration.
    pub fn load_settings(&mut self, json: &str) {
        self.game.load_settings(json);
        self.config = self.game.config();
        self.timestep.reset();
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn draw_ptr(&self) -> *const f32 {
        self.ctx.draw.packed_ptr()
    }

    pub fn draw_count(&self) -> u32 {
        self.ctx.draw.packed().len() as u32
    }

    pub fn sound_events_ptr(&self) -> *const u8 {
        self.sound_buffer.as_ptr()
    }

    pub fn sound_events_len(&self) -> u32 {
        self.sound_buffer.len() as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_draw_commands(&self) -> u32 {
        self.config.max_draw_commands as u32
    }

    pub fn max_sounds(&self) -> u32 {
        self.config.max_sounds as u32
    }

    pub fn max_events(&self) -> u32 {
        self.config.max_events as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cue_engine::{Color, GameEvent, SoundEvent};
    use glam::Vec2;

    #[derive(Default)]
    struct Probe {
        updates: u32,
        inputs_seen: usize,
        settings: Option<String>,
    }

    impl Game for Probe {
        fn config(&self) -> GameConfig {
            let width = if self.settings.is_some() { 400.0 } else { 200.0 };
            GameConfig {
                fixed_dt: 0.25,
                world_width: width,
                world_height: 100.0,
                max_sounds: 2,
                ..GameConfig::default()
            }
        }

        fn init(&mut self, ctx: &mut EngineContext) {
            ctx.draw.fill_circle(Vec2::ZERO, 1.0, Color::WHITE);
        }

        fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
            self.updates += 1;
            self.inputs_seen += input.len();
            ctx.emit_sound(SoundEvent(7));
            ctx.emit_event(GameEvent::new(1.0, self.updates as f32, 0.0, 0.0));
            ctx.draw.clear();
            ctx.draw.fill_circle(Vec2::ONE, 2.0, Color::BLACK);
            ctx.draw.line(Vec2::ZERO, Vec2::ONE, 1.0, Color::GRAY);
        }

        fn load_settings(&mut self, json: &str) {
            self.settings = Some(json.to_string());
        }
    }

    fn runner() -> GameRunner<Probe> {
        let mut runner = GameRunner::new(Probe::default());
        runner.init();
        runner
    }

    #[test]
    fn tick_before_init_is_ignored() {
        let mut runner = GameRunner::new(Probe::default());
        runner.tick(1.0);
        assert_eq!(runner.game().updates, 0);
    }

    #[test]
    fn input_reaches_only_the_first_step() {
        let mut runner = runner();
        runner.push_input(InputEvent::PointerDown { x: 1.0, y: 2.0 });
        runner.push_input(InputEvent::PointerUp { x: 1.0, y: 2.0 });
        runner.tick(0.8);
        assert_eq!(runner.game().updates, 3);
        assert_eq!(runner.game().inputs_seen, 2);
    }

    #[test]
    fn input_waits_for_a_step() {
        let mut runner = runner();
        runner.push_input(InputEvent::KeyDown { key_code: 82 });
        runner.tick(0.125);
        assert_eq!(runner.game().updates, 0);
        runner.tick(0.125);
        assert_eq!(runner.game().updates, 1);
        assert_eq!(runner.game().inputs_seen, 1);
    }

    #[test]
    fn outputs_are_packed_per_frame() {
        let mut runner = runner();
        assert_eq!(runner.draw_count(), 1);

        runner.tick(0.8);
        assert_eq!(runner.draw_count(), 2);
        assert!(!runner.draw_ptr().is_null());
        // Three steps, sound cap of two.
        assert_eq!(runner.sound_events_len(), 2);
        assert_eq!(runner.game_events_len(), 3);

        // No step this frame: events cleared, picture kept.
        runner.tick(0.1);
        assert_eq!(runner.sound_events_len(), 0);
        assert_eq!(runner.game_events_len(), 0);
        assert_eq!(runner.draw_count(), 2);
    }

    #[test]
    fn settings_are_forwarded_and_config_refreshed() {
        let mut runner = runner();
        assert_eq!(runner.world_width(), 200.0);
        runner.load_settings("{\"x\":1}");
        assert_eq!(runner.game().settings.as_deref(), Some("{\"x\":1}"));
        assert_eq!(runner.world_width(), 400.0);
    }
}
