//! Turn, foul, group and win bookkeeping.
//!
//! Captures are accumulated across the whole shot and judged once the balls
//! stop, except the 8-ball, which ends the game the tick it drops.

use glam::Vec2;

use crate::balls::{Ball, BallKind, Group, CUE_ID, EIGHT_ID};
use crate::error::PlacementError;
use crate::table::Table;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Index into per-player arrays.
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// 1 or 2, as shown to players.
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Free aiming, possibly charging.
    Aiming,
    /// The current player must place the cue ball.
    BallInHand,
    ShotInFlight,
    GameOver,
}

/// How a finished shot was judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Own-group ball pocketed without a foul.
    KeepTurn,
    /// Nothing of the shooter's pocketed.
    TurnPassed,
    /// Cue ball pocketed. The opponent now has ball in hand.
    Foul,
    GameOver { winner: Player },
}

/// Whole match state. Replaced wholesale on restart.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchState {
    pub current: Player,
    pub groups: [Option<Group>; 2],
    pub scores: [u32; 2],
    pub phase: Phase,
    pub charging: bool,
    pub power: f32,
    pub winner: Option<Player>,
    /// Ball numbers captured since the shot was fired.
    shot: Vec<u8>,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    pub fn new() -> Self {
        Self {
            current: Player::One,
            groups: [None, None],
            scores: [0, 0],
            phase: Phase::Aiming,
            charging: false,
            power: 0.0,
            winner: None,
            shot: Vec::new(),
        }
    }

    pub fn shot_in_progress(&self) -> bool {
        self.phase == Phase::ShotInFlight
    }

    pub fn waiting_placement(&self) -> bool {
        self.phase == Phase::BallInHand
    }

    pub fn group_of(&self, player: Player) -> Option<Group> {
        self.groups[player.index()]
    }

    // -- Cue gesture --------------------------------------------------------

    /// Begin charging. Only possible while aiming.
    pub fn start_charge(&mut self) -> bool {
        if self.phase != Phase::Aiming || self.charging {
            return false;
        }
        self.charging = true;
        self.power = 0.0;
        true
    }

    /// One tick of held button.
    pub fn charge(&mut self, rate: f32, max_power: f32) {
        if self.charging {
            self.power = (self.power + rate).clamp(0.0, max_power.max(0.0));
        }
    }

    /// Stop charging and hand back the accumulated power.
    pub fn release(&mut self) -> f32 {
        let power = if self.charging { self.power } else { 0.0 };
        self.charging = false;
        self.power = 0.0;
        power
    }

    /// Enter flight. Clears the capture list for the new shot.
    pub fn begin_shot(&mut self) {
        self.charging = false;
        self.power = 0.0;
        self.shot.clear();
        self.phase = Phase::ShotInFlight;
        log::info!("player {} shoots", self.current.number());
    }

    // -- Ball in hand -------------------------------------------------------

    /// Validate a ball-in-hand click and, if legal, return to aiming.
    /// The caller moves the cue ball to the returned position.
    pub fn try_place(
        &mut self,
        balls: &[Ball],
        table: &Table,
        pos: Vec2,
        margin: f32,
    ) -> Result<Vec2, PlacementError> {
        if !self.waiting_placement() {
            return Err(PlacementError::NotInHand);
        }
        validate_placement(balls, table, pos, margin)?;
        self.phase = Phase::Aiming;
        self.charging = false;
        self.power = 0.0;
        log::info!("player {} placed the cue ball at {:?}", self.current.number(), pos);
        Ok(pos)
    }

    // -- Shot evaluation ----------------------------------------------------

    /// Record one tick's captures. Returns the outcome if the 8-ball dropped.
    /// `balls` must already reflect the captures.
    pub fn record_captures(&mut self, pocketed: &[u8], balls: &[Ball]) -> Option<ShotOutcome> {
        if !self.shot_in_progress() || pocketed.is_empty() {
            return None;
        }
        self.shot.extend_from_slice(pocketed);
        if pocketed.contains(&EIGHT_ID) {
            Some(self.finish_on_eight(balls))
        } else {
            None
        }
    }

    /// Judge the shot once every ball has stopped.
    pub fn end_shot(&mut self) -> Option<ShotOutcome> {
        if !self.shot_in_progress() {
            return None;
        }
        let shot = std::mem::take(&mut self.shot);
        let foul = shot.contains(&CUE_ID);
        if !foul {
            self.assign_groups_from(&shot);
        }
        let own = self.score_own_balls(&shot);
        let shooter = self.current.number();

        let outcome = if foul {
            let idx = self.current.index();
            self.scores[idx] = self.scores[idx].saturating_sub(1);
            self.current = self.current.other();
            self.phase = Phase::BallInHand;
            log::info!(
                "foul by player {}: cue ball pocketed, player {} has ball in hand",
                shooter,
                self.current.number()
            );
            ShotOutcome::Foul
        } else if own > 0 {
            self.phase = Phase::Aiming;
            log::info!("player {} pocketed {} and keeps the table", shooter, own);
            ShotOutcome::KeepTurn
        } else {
            self.current = self.current.other();
            self.phase = Phase::Aiming;
            log::info!("turn passes to player {}", self.current.number());
            ShotOutcome::TurnPassed
        };
        Some(outcome)
    }

    fn finish_on_eight(&mut self, balls: &[Ball]) -> ShotOutcome {
        let shot = std::mem::take(&mut self.shot);
        if !shot.contains(&CUE_ID) {
            self.assign_groups_from(&shot);
        }
        self.score_own_balls(&shot);

        let cleared = self.group_of(self.current).is_some_and(|group| {
            !balls
                .iter()
                .any(|b| b.active && b.kind.group() == Some(group))
        });
        let winner = if cleared { self.current } else { self.current.other() };

        self.winner = Some(winner);
        self.phase = Phase::GameOver;
        self.charging = false;
        self.power = 0.0;
        log::info!(
            "8-ball pocketed by player {}: player {} wins",
            self.current.number(),
            winner.number()
        );
        ShotOutcome::GameOver { winner }
    }

    /// First numbered ball of an open-table shot decides the groups.
    fn assign_groups_from(&mut self, shot: &[u8]) {
        if self.group_of(self.current).is_some() {
            return;
        }
        let first = shot
            .iter()
            .filter_map(|&id| BallKind::from_id(id).and_then(BallKind::group))
            .next();
        if let Some(group) = first {
            self.groups[self.current.index()] = Some(group);
            self.groups[self.current.other().index()] = Some(group.other());
            log::info!("player {} takes {:?}", self.current.number(), group);
        }
    }

    /// Add one point per own-group ball in `shot`; returns how many.
    fn score_own_balls(&mut self, shot: &[u8]) -> u32 {
        let Some(group) = self.group_of(self.current) else {
            return 0;
        };
        let own = shot
            .iter()
            .filter(|&&id| BallKind::from_id(id).and_then(BallKind::group) == Some(group))
            .count() as u32;
        self.scores[self.current.index()] += own;
        own
    }
}

/// Where the cue ball may be dropped: fully on the cloth and at least
/// `2R + margin` from every other ball on the table.
pub fn validate_placement(
    balls: &[Ball],
    table: &Table,
    pos: Vec2,
    margin: f32,
) -> Result<(), PlacementError> {
    if !table.contains_ball(pos) {
        return Err(PlacementError::OutsidePlayfield { x: pos.x, y: pos.y });
    }
    let clearance = table.ball_radius * 2.0 + margin.max(0.0);
    match balls
        .iter()
        .find(|b| b.active && !b.is_cue() && b.pos.distance(pos) < clearance)
    {
        Some(blocker) => Err(PlacementError::Overlaps { ball: blocker.id() }),
        None => Ok(()),
    }
}
