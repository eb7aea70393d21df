//! Ball physics: one fixed explicit-Euler tick per frame.
//!
//! Order inside [`step`]: integrate, rails, ball-ball contacts, pocket
//! capture. Rule evaluation reads the capture list afterwards, so every
//! capture is attributed exactly once.

use cue_engine::{reflect, Segment};
use glam::Vec2;

use crate::balls::{Ball, BALL_COUNT};
use crate::config::{CushionModel, PhysicsConfig};
use crate::table::Table;

/// Separation below which two centres are treated as coincident.
const COINCIDENT: f32 = 1e-4;

/// What happened during one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Ball numbers captured this tick, in capture order.
    pub pocketed: Vec<u8>,
    pub ball_contacts: u32,
    pub cushion_contacts: u32,
}

/// Advance the whole roster by one tick.
pub fn step(balls: &mut [Ball; BALL_COUNT], table: &Table, params: &PhysicsConfig) -> TickReport {
    let mut report = TickReport::default();

    integrate(balls, params);

    for ball in balls.iter_mut().filter(|b| b.active) {
        let hit = match table.cushion_model {
            CushionModel::Segments => table.cushions.iter().fold(false, |hit, seg| {
                let inward = table.inward_normal(seg);
                resolve_cushion_collision(ball, seg, inward, table.ball_radius, params.cushion_restitution)
                    || hit
            }),
            CushionModel::Box => resolve_box_rails(ball, table),
        };
        if hit {
            report.cushion_contacts += 1;
        }
    }

    for i in 0..BALL_COUNT {
        for j in (i + 1)..BALL_COUNT {
            let (left, right) = balls.split_at_mut(j);
            if resolve_ball_collision(&mut left[i], &mut right[0], table.ball_radius, params.restitution) {
                report.ball_contacts += 1;
            }
        }
    }

    report.pocketed = capture_pockets(balls, table);
    report
}

/// `pos += vel`, `vel *= friction`, then snap each slow axis to zero.
pub fn integrate(balls: &mut [Ball], params: &PhysicsConfig) {
    for ball in balls.iter_mut().filter(|b| b.active) {
        ball.pos += ball.vel;
        ball.vel *= params.friction;
        if ball.vel.x.abs() < params.min_velocity {
            ball.vel.x = 0.0;
        }
        if ball.vel.y.abs() < params.min_velocity {
            ball.vel.y = 0.0;
        }
    }
}

/// Equal-mass contact between two balls of `radius`.
///
/// Overlap is split evenly between the two balls along the contact normal.
/// The impulse is applied only while the balls approach each other.
/// Returns true if the balls were in contact.
pub fn resolve_ball_collision(a: &mut Ball, b: &mut Ball, radius: f32, restitution: f32) -> bool {
    if !a.active || !b.active {
        return false;
    }
    let delta = b.pos - a.pos;
    let dist = delta.length();
    let min_dist = radius * 2.0;
    if dist >= min_dist || dist < COINCIDENT {
        return false;
    }

    let normal = delta / dist;
    let correction = normal * ((min_dist - dist) * 0.5);
    a.pos -= correction;
    b.pos += correction;

    let vel_along_normal = (b.vel - a.vel).dot(normal);
    if vel_along_normal > 0.0 {
        return true;
    }
    let j = -(1.0 + restitution) * vel_along_normal / 2.0;
    let impulse = normal * j;
    a.vel -= impulse;
    b.vel += impulse;
    true
}

/// Push a ball off a rail segment and mirror its velocity about the contact
/// normal, keeping `restitution` of the speed. `inward` is the rail's unit
/// normal pointing onto the cloth. Returns true on contact.
pub fn resolve_cushion_collision(
    ball: &mut Ball,
    seg: &Segment,
    inward: Vec2,
    radius: f32,
    restitution: f32,
) -> bool {
    if !ball.active {
        return false;
    }
    let closest = seg.closest_point(ball.pos);
    let offset = ball.pos - closest;
    let dist = offset.length();
    if dist >= radius {
        return false;
    }

    // A centre on or behind the rail line, level with the rail, crossed it
    // during this tick and goes back onto the cloth.
    let crossed = offset.dot(inward) <= 0.0 && seg.spans(ball.pos);
    let normal = if crossed || dist < COINCIDENT {
        inward
    } else {
        offset / dist
    };
    ball.pos = closest + normal * radius;
    if ball.vel.dot(normal) < 0.0 {
        ball.vel = reflect(ball.vel, normal) * restitution;
    }
    true
}

/// Axis-aligned rails: clamp to the interior and flip the crossing axis.
/// Balls entering a pocket mouth are left alone.
pub fn resolve_box_rails(ball: &mut Ball, table: &Table) -> bool {
    if !ball.active || table.near_pocket(ball.pos) {
        return false;
    }
    let lo = table.min + Vec2::splat(table.ball_radius);
    let hi = table.max - Vec2::splat(table.ball_radius);
    let mut hit = false;
    if ball.pos.x < lo.x {
        ball.pos.x = lo.x;
        ball.vel.x = ball.vel.x.abs();
        hit = true;
    } else if ball.pos.x > hi.x {
        ball.pos.x = hi.x;
        ball.vel.x = -ball.vel.x.abs();
        hit = true;
    }
    if ball.pos.y < lo.y {
        ball.pos.y = lo.y;
        ball.vel.y = ball.vel.y.abs();
        hit = true;
    } else if ball.pos.y > hi.y {
        ball.pos.y = hi.y;
        ball.vel.y = -ball.vel.y.abs();
        hit = true;
    }
    hit
}

/// Capture every active ball inside a pocket, or that has left the table.
///
/// Object balls go inactive. The cue ball stays active and is parked on the
/// cue spot with no velocity; the rules decide where it goes next.
pub fn capture_pockets(balls: &mut [Ball], table: &Table) -> Vec<u8> {
    let mut pocketed = Vec::new();
    for ball in balls.iter_mut().filter(|b| b.active) {
        let pocket = match table.capturing_pocket(ball.pos) {
            Some(idx) => idx,
            None if table.is_outside(ball.pos) => {
                let idx = table.nearest_pocket(ball.pos);
                log::warn!("ball {} escaped at {:?}, pocketing into {}", ball.id(), ball.pos, idx);
                idx
            }
            None => continue,
        };

        pocketed.push(ball.id());
        if ball.is_cue() {
            log::info!("cue ball pocketed into pocket {}", pocket);
            ball.pos = table.cue_spot;
            ball.vel = Vec2::ZERO;
        } else {
            log::info!("ball {} pocketed into pocket {}", ball.id(), pocket);
            ball.pos = table.pockets[pocket].center;
            ball.vel = Vec2::ZERO;
            ball.active = false;
        }
    }
    pocketed
}

/// True once no active ball has an axis moving at `min_velocity` or more.
pub fn all_stopped(balls: &[Ball], min_velocity: f32) -> bool {
    balls
        .iter()
        .filter(|b| b.active)
        .all(|b| b.vel.x.abs() < min_velocity && b.vel.y.abs() < min_velocity)
}
