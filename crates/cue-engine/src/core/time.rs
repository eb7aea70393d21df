/// Fixed timestep accumulator.
/// Game logic (and the physics coupled to it) runs at a constant tick rate
/// regardless of how irregular the host's frame deltas are.
pub struct FixedTimestep {
    dt: f32,
    accumulator: f32,
    max_steps: u32,
}

impl FixedTimestep {
    /// Default cap on ticks per frame, so a stalled tab does not replay seconds of play.
    pub const DEFAULT_MAX_STEPS: u32 = 10;

    pub fn new(dt: f32) -> Self {
        Self::with_max_steps(dt, Self::DEFAULT_MAX_STEPS)
    }

    pub fn with_max_steps(dt: f32, max_steps: u32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            max_steps: max_steps.max(1),
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed ticks to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        if !(frame_dt > 0.0) || !(self.dt > 0.0) {
            return 0;
        }
        self.accumulator = (self.accumulator + frame_dt).min(self.dt * self.max_steps as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// Drop any banked time, e.g. after a restart.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
