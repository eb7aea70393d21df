//! Aim preview: where the cue ball will go if the shot is released now.
//!
//! Pockets are tested analytically, balls and cushions by fixed-step
//! marching. At most one cushion bounce is traced.

use cue_engine::{dash_segments, march_circle, march_segment, project_onto_ray, reflect, Segment};
use glam::Vec2;

use crate::balls::Ball;
use crate::config::PredictorConfig;
use crate::table::Table;

/// What stopped the last leg of the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitKind {
    /// The ray ran out of length.
    None,
    /// Pocket index into `Table::pockets`.
    Pocket(usize),
    /// Ball number.
    Ball(u8),
    /// Cushion index into `Table::cushions`. Only ever ends a first leg.
    Cushion(usize),
}

/// One or two straight legs plus the final hit.
#[derive(Debug, Clone, PartialEq)]
pub struct AimOverlay {
    pub legs: Vec<Segment>,
    pub hit: HitKind,
    /// Cushion the first leg bounced off, if there is a second leg.
    pub bounce: Option<usize>,
}

impl AimOverlay {
    /// Final point of the preview.
    pub fn end(&self) -> Vec2 {
        self.legs.last().map(|leg| leg.b).unwrap_or(Vec2::ZERO)
    }

    /// Dash pieces for every leg, in order.
    pub fn dashes(&self, dash: f32, gap: f32) -> Vec<(Vec2, Vec2)> {
        self.legs
            .iter()
            .flat_map(|leg| dash_segments(leg.a, leg.b, dash, gap))
            .collect()
    }
}

/// Smallest march step, as a fraction of the ball radius.
const MIN_STEP_FRACTION: f32 = 0.05;

/// Trace the shot that would follow from the cue at `cue` with the pointer
/// at `pointer`. Returns `None` when the pointer sits on the cue centre.
///
/// The first leg is drawn from one radius behind the cue ball, but hits are
/// searched from the cue centre onwards in the direction of travel.
pub fn predict(
    balls: &[Ball],
    table: &Table,
    cue: Vec2,
    pointer: Vec2,
    config: &PredictorConfig,
) -> Option<AimOverlay> {
    let dir = (cue - pointer).normalize_or_zero();
    if dir == Vec2::ZERO {
        return None;
    }

    let radius = table.ball_radius;
    let step = radius * config.step_fraction.max(MIN_STEP_FRACTION);
    let max_dist = config.max_distance * table.scale;
    if !(max_dist > radius) || !max_dist.is_finite() {
        return None;
    }
    let tail = cue - dir * radius;
    let reach = max_dist - radius;

    let (t, hit) = cast(balls, table, cue, dir, reach, step, true);
    let first_end = cue + dir * t;
    let first = Segment::new(tail, first_end);

    let HitKind::Cushion(idx) = hit else {
        return Some(AimOverlay { legs: vec![first], hit, bounce: None });
    };

    let normal = table.cushions[idx].normal_facing(dir);
    let bounced = reflect(dir, normal).normalize_or_zero();
    let remaining = reach - t;
    if bounced == Vec2::ZERO || remaining <= 0.0 {
        return Some(AimOverlay { legs: vec![first], hit, bounce: None });
    }

    let (t2, hit2) = cast(balls, table, first_end, bounced, remaining, step, false);
    let second = Segment::new(first_end, first_end + bounced * t2);
    Some(AimOverlay {
        legs: vec![first, second],
        hit: hit2,
        bounce: Some(idx),
    })
}

/// Nearest hit ahead of `origin` along one leg. Ties keep the category
/// tested first. Balls behind `origin` and rails the ray is leaving are
/// skipped, since the cue ball moves away from them.
fn cast(
    balls: &[Ball],
    table: &Table,
    origin: Vec2,
    dir: Vec2,
    max_dist: f32,
    step: f32,
    with_cushions: bool,
) -> (f32, HitKind) {
    let mut best = (max_dist, HitKind::None);

    for (i, pocket) in table.pockets.iter().enumerate() {
        if let Some((t, perp)) = project_onto_ray(origin, dir, pocket.center) {
            if perp <= pocket.capture_radius && t < best.0 {
                best = (t, HitKind::Pocket(i));
            }
        }
    }

    // A ball is struck once the centres are within a diameter.
    let contact = table.ball_radius * 2.0;
    let ahead = balls
        .iter()
        .filter(|b| b.active && !b.is_cue() && (b.pos - origin).dot(dir) > 0.0);
    for ball in ahead {
        if let Some(t) = march_circle(origin, dir, ball.pos, contact, best.0, step) {
            if t < best.0 {
                best = (t, HitKind::Ball(ball.id()));
            }
        }
    }

    if with_cushions {
        for (i, seg) in table.cushions.iter().enumerate() {
            if dir.dot(table.inward_normal(seg)) >= 0.0 {
                continue;
            }
            if let Some(t) = march_segment(origin, dir, seg, table.ball_radius, best.0, step) {
                if t < best.0 {
                    best = (t, HitKind::Cushion(i));
                }
            }
        }
    }

    best
}
