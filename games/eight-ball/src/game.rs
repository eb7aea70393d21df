//! Eight-ball: two players, solids and stripes, cue ball in hand after a scratch.
//! Physics, rules and the aim preview run headless; the frame is described as
//! a draw list plus scoreboard events.

use cue_engine::{
    Color, EngineContext, Game, GameConfig, GameEvent, InputEvent, InputQueue, PointerState,
    SoundEvent,
};
use glam::Vec2;

use crate::balls::{new_roster, Ball, BALL_COUNT, CUE_ID};
use crate::config::PoolConfig;
use crate::physics::{self, TickReport};
use crate::predictor::{self, AimOverlay, HitKind};
use crate::rules::{MatchState, Phase, ShotOutcome};
use crate::table::Table;
use crate::view::{group_code, phase_code, BallView, FrameView, Scoreboard};

const FIXED_DT: f32 = 1.0 / 60.0;
const KEY_R: u32 = 82;

const CUE: usize = CUE_ID as usize;

// Drawing, nominal units
const CUSHION_WIDTH: f32 = 4.0;
const AIM_DASH: f32 = 10.0;
const AIM_GAP: f32 = 6.0;
const AIM_WIDTH: f32 = 1.5;
const CUE_LENGTH: f32 = 180.0;
const CUE_WIDTH: f32 = 5.0;
const CUE_MAX_RETRACT: f32 = 60.0;

const RAIL_COLOR: Color = Color::rgb(0.12, 0.06, 0.02);
const POCKET_COLOR: Color = Color::rgb(0.02, 0.02, 0.02);
const CUE_COLOR: Color = Color::rgb(0.55, 0.35, 0.15);
const AIM_COLOR: Color = Color::WHITE.with_alpha(0.55);
const GHOST_COLOR: Color = Color::WHITE.with_alpha(0.3);

/// Custom event kinds from the host UI
mod events {
    pub const RESET: u32 = 1;
}

/// Game event kinds to the host UI
pub mod game_events {
    /// a = player 1 score, b = player 2 score, c = current player (1 or 2).
    pub const SCORES: f32 = 1.0;
    /// a, b = group of player 1 and 2 (0 open, 1 solids, 2 stripes).
    pub const GROUPS: f32 = 2.0;
    /// a = phase (0 aiming, 1 ball in hand, 2 in flight, 3 over), b = charge 0..1.
    pub const PHASE: f32 = 3.0;
    /// a = winning player.
    pub const GAME_OVER: f32 = 4.0;
}

/// Sound cue ids
pub mod sounds {
    pub const CUE_STRIKE: u32 = 1;
    pub const BALL_HIT: u32 = 2;
    pub const CUSHION: u32 = 3;
    pub const POCKET: u32 = 4;
    pub const FOUL: u32 = 5;
}

pub struct EightBallGame {
    config: PoolConfig,
    table: Table,
    balls: [Ball; BALL_COUNT],
    state: MatchState,
    pointer: PointerState,
    overlay: Option<AimOverlay>,
    /// Seconds every ball has been slower than `settle.slow_speed`.
    slow_timer: f32,
}

impl EightBallGame {
    pub fn new() -> Self {
        Self::with_config(PoolConfig::default())
    }

    pub fn with_config(config: PoolConfig) -> Self {
        let table = Table::from_config(&config.table);
        let balls = new_roster(table.cue_spot, table.rack_apex, table.ball_radius);
        Self {
            config,
            table,
            balls,
            state: MatchState::new(),
            pointer: PointerState::new(),
            overlay: None,
            slow_timer: 0.0,
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn balls(&self) -> &[Ball; BALL_COUNT] {
        &self.balls
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn overlay(&self) -> Option<&AimOverlay> {
        self.overlay.as_ref()
    }

    /// Everything a renderer needs for the current frame.
    pub fn frame(&self) -> FrameView<'_> {
        FrameView {
            balls: self.balls.iter().map(BallView::from).collect(),
            pockets: &self.table.pockets,
            cushions: &self.table.cushions,
            overlay: self.overlay.as_ref(),
            scoreboard: Scoreboard::new(&self.state, self.config.cue.max_power),
        }
    }

    /// Re-rack and start a new match. Roster and match state are replaced
    /// together.
    pub fn reset(&mut self) {
        self.balls = new_roster(self.table.cue_spot, self.table.rack_apex, self.table.ball_radius);
        self.state = MatchState::new();
        self.overlay = None;
        self.slow_timer = 0.0;
        log::info!("new rack, player 1 to break");
    }

    fn handle_pointer(&mut self, ctx: &mut EngineContext) {
        match self.state.phase {
            Phase::BallInHand => {
                if self.pointer.pressed {
                    self.place_cue(self.pointer.pos);
                }
            }
            Phase::Aiming => {
                if self.pointer.pressed {
                    self.state.start_charge();
                }
                if self.pointer.held {
                    self.state.charge(self.config.cue.charge_rate, self.config.cue.max_power);
                }
                if self.pointer.released && self.state.charging {
                    self.fire(ctx);
                }
            }
            Phase::ShotInFlight | Phase::GameOver => {}
        }
    }

    fn place_cue(&mut self, pos: Vec2) {
        let margin = self.config.cue.placement_margin;
        match self.state.try_place(&self.balls, &self.table, pos, margin) {
            Ok(pos) => {
                let cue = &mut self.balls[CUE];
                cue.pos = pos;
                cue.vel = Vec2::ZERO;
                cue.active = true;
            }
            Err(err) => log::debug!("placement rejected: {}", err),
        }
    }

    /// Shoot away from the pointer with the charged power.
    fn fire(&mut self, ctx: &mut EngineContext) {
        let power = self.state.release();
        let cue = &mut self.balls[CUE];
        let dir = (cue.pos - self.pointer.pos).normalize_or_zero();
        if dir == Vec2::ZERO || power <= 0.0 {
            log::debug!("shot cancelled (power {:.2})", power);
            return;
        }

        cue.vel = dir * power;
        self.state.begin_shot();
        self.slow_timer = 0.0;
        ctx.emit_sound(SoundEvent(sounds::CUE_STRIKE));
    }

    fn step_physics(&mut self, ctx: &mut EngineContext) {
        let report = physics::step(&mut self.balls, &self.table, &self.config.physics);
        emit_tick_sounds(ctx, &report);
        if let Some(outcome) = self.state.record_captures(&report.pocketed, &self.balls) {
            self.apply_outcome(ctx, outcome);
        }
    }

    /// End the shot once everything has stopped, or has crawled for too long.
    fn settle(&mut self, ctx: &mut EngineContext, dt: f32) {
        if !self.state.shot_in_progress() {
            return;
        }
        if physics::all_stopped(&self.balls, self.config.physics.min_velocity) {
            self.finish_shot(ctx);
            return;
        }

        let slow = self.config.settle.slow_speed;
        if self.balls.iter().filter(|b| b.active).all(|b| b.speed() < slow) {
            self.slow_timer += dt;
            if self.slow_timer >= self.config.settle.slow_time {
                log::info!("balls crawling for {:.1}s, stopping them", self.slow_timer);
                for ball in self.balls.iter_mut() {
                    ball.vel = Vec2::ZERO;
                }
                self.finish_shot(ctx);
            }
        } else {
            self.slow_timer = 0.0;
        }
    }

    fn finish_shot(&mut self, ctx: &mut EngineContext) {
        self.slow_timer = 0.0;
        if let Some(outcome) = self.state.end_shot() {
            self.apply_outcome(ctx, outcome);
        }
    }

    fn apply_outcome(&mut self, ctx: &mut EngineContext, outcome: ShotOutcome) {
        match outcome {
            ShotOutcome::Foul => {
                let cue = &mut self.balls[CUE];
                cue.pos = self.table.cue_spot;
                cue.vel = Vec2::ZERO;
                cue.active = true;
                ctx.emit_sound(SoundEvent(sounds::FOUL));
            }
            ShotOutcome::GameOver { .. } => {
                self.slow_timer = 0.0;
            }
            ShotOutcome::KeepTurn | ShotOutcome::TurnPassed => {}
        }
    }

    fn describe(&self, ctx: &mut EngineContext) {
        let s = self.table.scale;
        let r = self.table.ball_radius;

        ctx.draw.clear();
        for pocket in &self.table.pockets {
            ctx.draw.fill_circle(pocket.center, pocket.radius, POCKET_COLOR);
        }
        for seg in &self.table.cushions {
            ctx.draw.line(seg.a, seg.b, CUSHION_WIDTH * s, RAIL_COLOR);
        }
        for ball in self.balls.iter().filter(|b| b.active) {
            if ball.kind.is_striped() {
                ctx.draw.banded_circle(ball.pos, r, ball.kind.color());
            } else {
                ctx.draw.fill_circle(ball.pos, r, ball.kind.color());
            }
        }

        match self.state.phase {
            Phase::BallInHand => ctx.draw.fill_circle(self.pointer.pos, r, GHOST_COLOR),
            Phase::Aiming => self.draw_cue_stick(ctx),
            Phase::ShotInFlight | Phase::GameOver => {}
        }

        if let Some(overlay) = &self.overlay {
            for (a, b) in overlay.dashes(AIM_DASH * s, AIM_GAP * s) {
                ctx.draw.line(a, b, AIM_WIDTH * s, AIM_COLOR);
            }
            if let HitKind::Ball(_) = overlay.hit {
                ctx.draw.fill_circle(overlay.end(), r, GHOST_COLOR);
            }
        }

        let st = &self.state;
        ctx.set_event(GameEvent::new(
            game_events::SCORES,
            st.scores[0] as f32,
            st.scores[1] as f32,
            st.current.number() as f32,
        ));
        ctx.set_event(GameEvent::new(
            game_events::GROUPS,
            group_code(st.groups[0]),
            group_code(st.groups[1]),
            0.0,
        ));
        let board = Scoreboard::new(st, self.config.cue.max_power);
        ctx.set_event(GameEvent::new(game_events::PHASE, phase_code(st.phase), board.power, 0.0));
        if let Some(winner) = st.winner {
            ctx.set_event(GameEvent::new(game_events::GAME_OVER, winner.number() as f32, 0.0, 0.0));
        }
    }

    /// Cue stick behind the cue ball, pulled back with the charge.
    fn draw_cue_stick(&self, ctx: &mut EngineContext) {
        let cue_pos = self.balls[CUE].pos;
        let aim_dir = (self.pointer.pos - cue_pos).normalize_or_zero();
        if aim_dir == Vec2::ZERO {
            return;
        }
        let s = self.table.scale;
        let max_power = self.config.cue.max_power;
        let charge = if max_power > 0.0 { self.state.power / max_power } else { 0.0 };
        let retract = CUE_MAX_RETRACT * s * charge;

        let tip = cue_pos + aim_dir * (self.table.ball_radius + 3.0 * s + retract);
        let butt = tip + aim_dir * CUE_LENGTH * s;
        ctx.draw.line(tip, butt, CUE_WIDTH * s, CUE_COLOR);
    }
}

fn emit_tick_sounds(ctx: &mut EngineContext, report: &TickReport) {
    if report.ball_contacts > 0 {
        ctx.emit_sound(SoundEvent(sounds::BALL_HIT));
    }
    if report.cushion_contacts > 0 {
        ctx.emit_sound(SoundEvent(sounds::CUSHION));
    }
    for _ in &report.pocketed {
        ctx.emit_sound(SoundEvent(sounds::POCKET));
    }
}

impl Default for EightBallGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for EightBallGame {
    fn config(&self) -> GameConfig {
        GameConfig {
            fixed_dt: FIXED_DT,
            world_width: self.table.world_size.x,
            world_height: self.table.world_size.y,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.reset();
        self.describe(ctx);
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        self.pointer.begin_frame();
        let mut reset = false;
        for event in input.iter() {
            if self.pointer.apply(event) {
                continue;
            }
            match *event {
                InputEvent::KeyDown { key_code: KEY_R } => reset = true,
                InputEvent::Custom { kind: events::RESET, .. } => reset = true,
                _ => {}
            }
        }

        if reset {
            self.reset();
            self.pointer.begin_frame();
        } else {
            self.handle_pointer(ctx);
            let moving = !physics::all_stopped(&self.balls, self.config.physics.min_velocity);
            if self.state.shot_in_progress() || moving {
                self.step_physics(ctx);
            }
            self.settle(ctx, FIXED_DT);
        }

        self.overlay = if self.state.phase == Phase::Aiming {
            predictor::predict(
                &self.balls,
                &self.table,
                self.balls[CUE].pos,
                self.pointer.pos,
                &self.config.predictor,
            )
        } else {
            None
        };

        self.describe(ctx);
    }

    fn load_settings(&mut self, json: &str) {
        match PoolConfig::from_json(json) {
            Ok(config) => {
                self.table = Table::from_config(&config.table);
                self.config = config;
                self.reset();
                log::info!("settings applied (scale {})", self.table.scale);
            }
            Err(err) => log::warn!("ignoring invalid settings: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balls::{Group, EIGHT_ID};
    use crate::rules::Player;

    fn started() -> (EightBallGame, EngineContext) {
        let mut game = EightBallGame::new();
        let mut ctx = EngineContext::from_config(&game.config());
        game.init(&mut ctx);
        (game, ctx)
    }

    fn tick(game: &mut EightBallGame, ctx: &mut EngineContext, events: &[InputEvent]) {
        let mut input = InputQueue::new();
        for event in events {
            input.push(*event);
        }
        ctx.clear_events();
        game.update(ctx, &input);
    }

    /// Press at `at`, hold for `held` more ticks, release at `at`.
    fn shoot(game: &mut EightBallGame, ctx: &mut EngineContext, at: Vec2, held: usize) {
        tick(game, ctx, &[InputEvent::PointerDown { x: at.x, y: at.y }]);
        for _ in 0..held {
            tick(game, ctx, &[]);
        }
        tick(game, ctx, &[InputEvent::PointerUp { x: at.x, y: at.y }]);
    }

    fn run_until_settled(game: &mut EightBallGame, ctx: &mut EngineContext, max: usize) -> usize {
        for n in 0..max {
            if !game.state.shot_in_progress() {
                return n;
            }
            tick(game, ctx, &[]);
        }
        panic!("shot still running after {max} ticks");
    }

    fn clear_object_balls(game: &mut EightBallGame) {
        for ball in game.balls.iter_mut().skip(1) {
            ball.active = false;
        }
    }

    #[test]
    fn init_racks_and_describes_the_table() {
        let (game, ctx) = started();
        assert!(game.balls().iter().all(|b| b.active));
        assert_eq!(game.balls()[CUE].pos, game.table().cue_spot);
        assert!(!ctx.draw.is_empty());
        assert!(ctx.events.iter().any(|e| e.kind == game_events::SCORES));

        let frame = game.frame();
        assert_eq!(frame.balls.len(), BALL_COUNT);
        assert_eq!(frame.pockets.len(), 6);
        assert_eq!(frame.scoreboard.phase, Phase::Aiming);
    }

    #[test]
    fn world_size_follows_the_table() {
        let game = EightBallGame::new();
        let config = game.config();
        assert_eq!(config.world_width, 1000.0);
        assert_eq!(config.world_height, 650.0);
    }

    #[test]
    fn holding_charges_and_release_fires_away_from_pointer() {
        let (mut game, mut ctx) = started();
        let behind = game.table().cue_spot - Vec2::new(20.0, 0.0);
        tick(&mut game, &mut ctx, &[InputEvent::PointerDown { x: behind.x, y: behind.y }]);
        for _ in 0..4 {
            tick(&mut game, &mut ctx, &[]);
        }
        assert!(game.state().charging);
        assert!((game.state().power - 2.0).abs() < 1e-4);
        assert!((game.frame().scoreboard.power - 0.1).abs() < 1e-4);

        tick(&mut game, &mut ctx, &[InputEvent::PointerUp { x: behind.x, y: behind.y }]);
        assert!(game.state().shot_in_progress());
        assert!(!game.state().charging);
        assert_eq!(game.state().power, 0.0);
        let vel = game.balls()[CUE].vel;
        assert!(vel.x > 1.9 && vel.y == 0.0, "cue velocity {vel:?}");
        assert!(ctx.sounds.contains(&SoundEvent(sounds::CUE_STRIKE)));
        assert!(game.overlay().is_none());
    }

    #[test]
    fn power_is_capped() {
        let (mut game, mut ctx) = started();
        let behind = game.table().cue_spot - Vec2::new(20.0, 0.0);
        tick(&mut game, &mut ctx, &[InputEvent::PointerDown { x: behind.x, y: behind.y }]);
        for _ in 0..200 {
            tick(&mut game, &mut ctx, &[]);
        }
        assert_eq!(game.state().power, 20.0);
    }

    #[test]
    fn release_on_the_cue_cancels() {
        let (mut game, mut ctx) = started();
        let cue = game.table().cue_spot;
        shoot(&mut game, &mut ctx, cue, 3);
        assert_eq!(game.state().phase, Phase::Aiming);
        assert_eq!(game.state().power, 0.0);
        assert_eq!(game.balls()[CUE].vel, Vec2::ZERO);
    }

    #[test]
    fn break_shot_settles_with_consistent_groups() {
        let (mut game, mut ctx) = started();
        let start: Vec<Vec2> = game.balls().iter().map(|b| b.pos).collect();
        let behind = game.table().cue_spot - Vec2::new(30.0, 0.0);
        shoot(&mut game, &mut ctx, behind, 60);
        run_until_settled(&mut game, &mut ctx, 5000);

        let moved = game.balls()[1..]
            .iter()
            .zip(&start[1..])
            .filter(|(b, s)| !b.active || b.pos.distance(**s) > 1.0)
            .count();
        assert!(moved >= 3);
        match game.state().groups {
            [None, None] => {}
            [Some(a), Some(b)] => assert_eq!(a.other(), b),
            groups => panic!("one-sided groups {groups:?}"),
        }
    }

    #[test]
    fn scratch_gives_opponent_ball_in_hand() {
        let (mut game, mut ctx) = started();
        clear_object_balls(&mut game);
        game.balls[CUE].pos = Vec2::new(500.0, 100.0);
        shoot(&mut game, &mut ctx, Vec2::new(500.0, 130.0), 4);
        run_until_settled(&mut game, &mut ctx, 600);

        assert!(game.state().waiting_placement());
        assert_eq!(game.state().current, Player::Two);
        assert_eq!(game.state().scores, [0, 0]);
        assert_eq!(game.balls()[CUE].pos, game.table().cue_spot);
        assert!(game.balls()[CUE].active);
        assert!(game.overlay().is_none());
    }

    #[test]
    fn ball_in_hand_placement() {
        let (mut game, mut ctx) = started();
        game.state.phase = Phase::BallInHand;

        let apex = game.table().rack_apex;
        tick(&mut game, &mut ctx, &[InputEvent::PointerDown { x: apex.x, y: apex.y }]);
        assert!(game.state().waiting_placement());
        tick(&mut game, &mut ctx, &[InputEvent::PointerUp { x: apex.x, y: apex.y }]);

        tick(&mut game, &mut ctx, &[InputEvent::PointerDown { x: 300.0, y: 200.0 }]);
        assert_eq!(game.state().phase, Phase::Aiming);
        assert_eq!(game.balls()[CUE].pos, Vec2::new(300.0, 200.0));
        assert!(!game.state().charging);

        // Still holding the placing press: no charge, no shot on release.
        tick(&mut game, &mut ctx, &[InputEvent::PointerMove { x: 320.0, y: 200.0 }]);
        assert_eq!(game.state().power, 0.0);
        tick(&mut game, &mut ctx, &[InputEvent::PointerUp { x: 320.0, y: 200.0 }]);
        assert_eq!(game.state().phase, Phase::Aiming);
    }

    #[test]
    fn reset_by_key_mid_shot() {
        let (mut game, mut ctx) = started();
        let behind = game.table().cue_spot - Vec2::new(30.0, 0.0);
        shoot(&mut game, &mut ctx, behind, 30);
        for _ in 0..20 {
            tick(&mut game, &mut ctx, &[]);
        }
        tick(&mut game, &mut ctx, &[InputEvent::KeyDown { key_code: KEY_R }]);

        assert_eq!(game.state(), &MatchState::new());
        let table = game.table();
        let fresh = new_roster(table.cue_spot, table.rack_apex, table.ball_radius);
        assert_eq!(game.balls(), &fresh);
    }

    #[test]
    fn reset_by_ui_event() {
        let (mut game, mut ctx) = started();
        game.state.scores = [3, 1];
        game.balls[4].active = false;
        tick(
            &mut game,
            &mut ctx,
            &[InputEvent::Custom { kind: events::RESET, a: 0.0, b: 0.0, c: 0.0 }],
        );
        assert_eq!(game.state().scores, [0, 0]);
        assert!(game.balls()[4].active);
    }

    #[test]
    fn crawling_balls_are_stopped_after_slow_time() {
        let mut config = PoolConfig::default();
        config.physics.friction = 1.0;
        let mut game = EightBallGame::with_config(config);
        let mut ctx = EngineContext::new();
        game.init(&mut ctx);
        clear_object_balls(&mut game);
        game.balls[CUE].pos = Vec2::new(400.0, 300.0);
        game.balls[CUE].vel = Vec2::new(0.1, 0.0);
        game.state.begin_shot();

        let ticks = run_until_settled(&mut game, &mut ctx, 1000);
        assert!((235..=245).contains(&ticks), "ended after {ticks} ticks");
        assert_eq!(game.balls()[CUE].vel, Vec2::ZERO);
        assert_eq!(game.state().current, Player::Two);
    }

    #[test]
    fn potting_the_eight_ends_the_game() {
        let (mut game, mut ctx) = started();
        clear_object_balls(&mut game);
        let eight = &mut game.balls[EIGHT_ID as usize];
        eight.active = true;
        eight.pos = Vec2::new(500.0, 100.0);
        game.balls[CUE].pos = Vec2::new(500.0, 140.0);

        shoot(&mut game, &mut ctx, Vec2::new(500.0, 170.0), 4);
        for _ in 0..300 {
            if game.state().phase == Phase::GameOver {
                break;
            }
            tick(&mut game, &mut ctx, &[]);
        }
        assert_eq!(game.state().phase, Phase::GameOver);
        // Open table: the shooter loses.
        assert_eq!(game.state().winner, Some(Player::Two));
        tick(&mut game, &mut ctx, &[]);
        assert!(ctx
            .events
            .iter()
            .any(|e| e.kind == game_events::GAME_OVER && e.a == 2.0));
    }

    #[test]
    fn settings_rebuild_the_table() {
        let (mut game, _) = started();
        game.load_settings("{ not json");
        assert_eq!(game.config().world_width, 1000.0);

        game.load_settings(r#"{ "table": { "scale": 0.5 } }"#);
        assert_eq!(game.config().world_width, 500.0);
        assert_eq!(game.table().ball_radius, 6.0);
        assert_eq!(game.balls()[CUE].pos, game.table().cue_spot);
    }

    #[test]
    fn preview_only_while_aiming() {
        let (mut game, mut ctx) = started();
        let behind = game.table().cue_spot - Vec2::new(30.0, 0.0);
        tick(&mut game, &mut ctx, &[InputEvent::PointerMove { x: behind.x, y: behind.y }]);
        assert!(game.overlay().is_some());

        game.state.phase = Phase::BallInHand;
        tick(&mut game, &mut ctx, &[]);
        assert!(game.overlay().is_none());
    }

    #[test]
    fn legal_pot_keeps_the_table() {
        let (mut game, mut ctx) = started();
        clear_object_balls(&mut game);
        let three = &mut game.balls[3];
        three.active = true;
        three.pos = Vec2::new(500.0, 100.0);
        game.balls[CUE].pos = Vec2::new(500.0, 140.0);

        shoot(&mut game, &mut ctx, Vec2::new(500.0, 170.0), 4);
        run_until_settled(&mut game, &mut ctx, 600);
        assert!(!game.balls()[3].active);
        assert_eq!(game.state().current, Player::One);
        assert_eq!(game.state().groups, [Some(Group::Solids), Some(Group::Stripes)]);
        assert_eq!(game.state().scores, [1, 0]);
    }

    #[test]
    fn many_steps_in_one_frame_keep_one_scoreboard() {
        let (mut game, mut ctx) = started();
        game.state.phase = Phase::GameOver;
        game.state.winner = Some(Player::Two);

        // A stalled frame: many fixed steps, events cleared only once.
        ctx.clear_events();
        let input = InputQueue::new();
        for _ in 0..12 {
            game.update(&mut ctx, &input);
        }
        assert_eq!(ctx.events.len(), 4);
        assert!(ctx
            .events
            .iter()
            .any(|e| e.kind == game_events::GAME_OVER && e.a == 2.0));
    }

    #[test]
    fn zero_march_step_setting_still_previews() {
        let (mut game, mut ctx) = started();
        game.load_settings(r#"{ "predictor": { "step_fraction": 0.0 } }"#);
        let behind = game.table().cue_spot - Vec2::new(30.0, 0.0);
        tick(&mut game, &mut ctx, &[InputEvent::PointerMove { x: behind.x, y: behind.y }]);
        assert!(game.overlay().is_some());
    }
}
