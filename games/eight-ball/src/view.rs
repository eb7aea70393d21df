//! Plain-data snapshot of a frame for whoever draws it.

use cue_engine::{Color, Segment};
use glam::Vec2;

use crate::balls::{Ball, Group};
use crate::predictor::AimOverlay;
use crate::rules::{MatchState, Phase, Player};
use crate::table::Pocket;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallView {
    pub id: u8,
    pub pos: Vec2,
    pub active: bool,
    pub color: Color,
    pub striped: bool,
}

impl From<&Ball> for BallView {
    fn from(ball: &Ball) -> Self {
        Self {
            id: ball.id(),
            pos: ball.pos,
            active: ball.active,
            color: ball.kind.color(),
            striped: ball.kind.is_striped(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scoreboard {
    pub current: Player,
    pub scores: [u32; 2],
    pub groups: [Option<Group>; 2],
    /// Charge as a fraction of max power.
    pub power: f32,
    pub phase: Phase,
    pub winner: Option<Player>,
}

impl Scoreboard {
    pub fn new(state: &MatchState, max_power: f32) -> Self {
        let power = if max_power > 0.0 { state.power / max_power } else { 0.0 };
        Self {
            current: state.current,
            scores: state.scores,
            groups: state.groups,
            power: power.clamp(0.0, 1.0),
            phase: state.phase,
            winner: state.winner,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FrameView<'a> {
    pub balls: Vec<BallView>,
    pub pockets: &'a [Pocket],
    pub cushions: &'a [Segment],
    pub overlay: Option<&'a AimOverlay>,
    pub scoreboard: Scoreboard,
}

/// Wire codes used in game events.
pub fn group_code(group: Option<Group>) -> f32 {
    match group {
        None => 0.0,
        Some(Group::Solids) => 1.0,
        Some(Group::Stripes) => 2.0,
    }
}

pub fn phase_code(phase: Phase) -> f32 {
    match phase {
        Phase::Aiming => 0.0,
        Phase::BallInHand => 1.0,
        Phase::ShotInFlight => 2.0,
        Phase::GameOver => 3.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balls::BallKind;

    #[test]
    fn ball_view_carries_render_data() {
        let view = BallView::from(&Ball::new(BallKind::Stripe(12), Vec2::new(1.0, 2.0)));
        assert_eq!(view.id, 12);
        assert!(view.striped && view.active);
        assert_eq!(view.color, BallKind::Solid(4).color());
    }

    #[test]
    fn scoreboard_reports_power_fraction() {
        let mut state = MatchState::new();
        state.power = 5.0;
        let board = Scoreboard::new(&state, 20.0);
        assert_eq!(board.power, 0.25);
        assert_eq!(board.current, Player::One);
        assert_eq!(Scoreboard::new(&state, 0.0).power, 0.0);
    }
}
