//! Pool ball identity, colours and rack positions.

use cue_engine::Color;
use glam::Vec2;

/// Number of balls on the table: cue + 15 numbered.
pub const BALL_COUNT: usize = 16;
pub const CUE_ID: u8 = 0;
pub const EIGHT_ID: u8 = 8;

/// Solids or stripes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    Solids,
    Stripes,
}

impl Group {
    pub fn other(self) -> Self {
        match self {
            Group::Solids => Group::Stripes,
            Group::Stripes => Group::Solids,
        }
    }
}

/// What a ball is, derived once from its number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BallKind {
    Cue,
    /// 1-7
    Solid(u8),
    Eight,
    /// 9-15
    Stripe(u8),
}

// Red, orange, gold, blue, purple, dark green, maroon. 1-7 and 9-15 share them.
const PALETTE: [Color; 7] = [
    Color::rgb(0.90, 0.16, 0.22),
    Color::rgb(1.0, 0.63, 0.0),
    Color::rgb(1.0, 0.80, 0.0),
    Color::rgb(0.0, 0.47, 0.95),
    Color::rgb(0.78, 0.48, 1.0),
    Color::rgb(0.0, 0.46, 0.17),
    Color::rgb(0.75, 0.13, 0.22),
];

impl BallKind {
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            CUE_ID => Some(BallKind::Cue),
            1..=7 => Some(BallKind::Solid(id)),
            EIGHT_ID => Some(BallKind::Eight),
            9..=15 => Some(BallKind::Stripe(id)),
            _ => None,
        }
    }

    pub fn id(self) -> u8 {
        match self {
            BallKind::Cue => CUE_ID,
            BallKind::Eight => EIGHT_ID,
            BallKind::Solid(n) | BallKind::Stripe(n) => n,
        }
    }

    /// Group membership; `None` for the cue ball and the 8-ball.
    pub fn group(self) -> Option<Group> {
        match self {
            BallKind::Solid(_) => Some(Group::Solids),
            BallKind::Stripe(_) => Some(Group::Stripes),
            BallKind::Cue | BallKind::Eight => None,
        }
    }

    pub fn color(self) -> Color {
        match self {
            BallKind::Cue => Color::WHITE,
            BallKind::Eight => Color::rgb(0.04, 0.04, 0.04),
            BallKind::Solid(n) => PALETTE[(n as usize - 1) % PALETTE.len()],
            BallKind::Stripe(n) => PALETTE[(n as usize - 9) % PALETTE.len()],
        }
    }

    pub fn is_striped(self) -> bool {
        matches!(self, BallKind::Stripe(_))
    }
}

/// One ball on the roster. The roster never shrinks; pocketed object balls
/// are only flagged inactive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub kind: BallKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub active: bool,
}

impl Ball {
    pub fn new(kind: BallKind, pos: Vec2) -> Self {
        Self {
            kind,
            pos,
            vel: Vec2::ZERO,
            active: true,
        }
    }

    pub fn id(&self) -> u8 {
        self.kind.id()
    }

    pub fn is_cue(&self) -> bool {
        self.kind == BallKind::Cue
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// Rack order, apex first, row by row. The 8-ball sits in the middle of row 2.
const RACK_ORDER: [u8; 15] = [1, 15, 2, 9, 8, 3, 10, 4, 11, 5, 12, 6, 13, 7, 14];

/// Tight triangle rack. The apex points LEFT toward the cue ball and rows
/// spread RIGHT; within a row balls are listed top to bottom.
///
/// ```text
///  1                <- apex (row 0)
///  15  2            <- row 1
///  9   8   3        <- row 2
///  10  4   11  5    <- row 3
///  12  6   13  7  14 <- row 4
/// ```
/// Returns `(ball_number, position)` pairs in rack order.
pub fn rack_positions(apex: Vec2, ball_radius: f32) -> [(u8, Vec2); 15] {
    // Diameter plus a hair so the rack starts without overlap.
    let gap = ball_radius * 2.0 + ball_radius / 8.0;
    let row_offset = gap * 0.866; // sqrt(3)/2

    let mut out = [(0u8, Vec2::ZERO); 15];
    let mut slot = 0;
    for row in 0..5 {
        let x = apex.x + row as f32 * row_offset;
        let top = apex.y - row as f32 * gap / 2.0;
        for i in 0..=row {
            out[slot] = (RACK_ORDER[slot], Vec2::new(x, top + i as f32 * gap));
            slot += 1;
        }
    }
    out
}

/// Fresh roster indexed by ball number: cue on its spot, 1-15 racked.
pub fn new_roster(cue_spot: Vec2, rack_apex: Vec2, ball_radius: f32) -> [Ball; BALL_COUNT] {
    let mut roster = [Ball::new(BallKind::Cue, cue_spot); BALL_COUNT];
    for (number, pos) in rack_positions(rack_apex, ball_radius) {
        if let Some(kind) = BallKind::from_id(number) {
            roster[number as usize] = Ball::new(kind, pos);
        }
    }
    roster
}
