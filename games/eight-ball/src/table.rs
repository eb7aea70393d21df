//! Static table model: playing interior, pockets and pocket-gapped cushions.
//!
//! Built once from [`TableConfig`]; every nominal length is multiplied by
//! `scale`, so the whole table resizes proportionally.

use cue_engine::Segment;
use glam::Vec2;

use crate::config::{CushionModel, TableConfig};

// Nominal layout (scale 1.0). The interior sits inside an 80 unit frame.
const FRAME: f32 = 80.0;
const INTERIOR_W: f32 = 840.0;
const INTERIOR_H: f32 = 490.0;
const WORLD_W: f32 = INTERIOR_W + 2.0 * FRAME; // 1000
const WORLD_H: f32 = INTERIOR_H + 2.0 * FRAME; // 650

// Cue spot from the head rail, rack apex from the foot rail.
const CUE_SPOT_INSET: f32 = 140.0;
const RACK_APEX_INSET: f32 = 160.0;

// Rail length removed at each corner and on each side of a side pocket,
// as multiples of the visual pocket radius.
const CORNER_GAP_RATIO: f32 = 1.5;
const SIDE_GAP_RATIO: f32 = 1.0;

/// A pocket. Balls are captured inside `capture_radius`, which is smaller
/// than the drawn `radius` so a ball must be well inside the mouth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pocket {
    pub center: Vec2,
    pub radius: f32,
    pub capture_radius: f32,
}

#[derive(Debug, Clone)]
pub struct Table {
    /// Effective scale applied to every nominal length.
    pub scale: f32,
    /// Top-left corner of the playing interior (the cushion line).
    pub min: Vec2,
    /// Bottom-right corner of the playing interior.
    pub max: Vec2,
    pub world_size: Vec2,
    pub ball_radius: f32,
    pub pockets: [Pocket; 6],
    pub cushions: Vec<Segment>,
    pub cushion_model: CushionModel,
    pub cue_spot: Vec2,
    pub rack_apex: Vec2,
    /// Anything whose centre leaves this box has left the table.
    outer_min: Vec2,
    outer_max: Vec2,
}

impl Table {
    pub fn from_config(config: &TableConfig) -> Self {
        let s = if config.scale > 0.0 {
            config.scale
        } else {
            log::warn!("table scale {} is not positive, using 1.0", config.scale);
            1.0
        };

        let min = Vec2::splat(FRAME) * s;
        let max = Vec2::new(FRAME + INTERIOR_W, FRAME + INTERIOR_H) * s;
        let mid_x = (min.x + max.x) / 2.0;
        let mid_y = (min.y + max.y) / 2.0;

        let ball_radius = config.ball_radius * s;
        let pocket_radius = config.pocket_radius * s;
        let capture_radius = pocket_radius * config.capture_ratio.clamp(0.0, 1.0);
        let off = config.pocket_offset * s;

        let pocket = |center: Vec2| Pocket {
            center,
            radius: pocket_radius,
            capture_radius,
        };
        let pockets = [
            pocket(Vec2::new(min.x - off, min.y - off)),
            pocket(Vec2::new(mid_x, min.y - off)),
            pocket(Vec2::new(max.x + off, min.y - off)),
            pocket(Vec2::new(min.x - off, max.y + off)),
            pocket(Vec2::new(mid_x, max.y + off)),
            pocket(Vec2::new(max.x + off, max.y + off)),
        ];

        let corner_gap = pocket_radius * CORNER_GAP_RATIO;
        let side_gap = pocket_radius * SIDE_GAP_RATIO;
        let rails = [
            // top, split by the side pocket
            (Vec2::new(min.x + corner_gap, min.y), Vec2::new(mid_x - side_gap, min.y)),
            (Vec2::new(mid_x + side_gap, min.y), Vec2::new(max.x - corner_gap, min.y)),
            // bottom
            (Vec2::new(min.x + corner_gap, max.y), Vec2::new(mid_x - side_gap, max.y)),
            (Vec2::new(mid_x + side_gap, max.y), Vec2::new(max.x - corner_gap, max.y)),
            // left and right, gapped only at the corners
            (Vec2::new(min.x, min.y + corner_gap), Vec2::new(min.x, max.y - corner_gap)),
            (Vec2::new(max.x, min.y + corner_gap), Vec2::new(max.x, max.y - corner_gap)),
        ];
        let cushions = rails
            .iter()
            .filter(|(a, b)| a.distance(*b) > 0.0 && (*b - *a).cmpge(Vec2::ZERO).all())
            .map(|&(a, b)| Segment::new(a, b))
            .collect();

        let reach = Vec2::splat(off + pocket_radius);

        Self {
            scale: s,
            min,
            max,
            world_size: Vec2::new(WORLD_W, WORLD_H) * s,
            ball_radius,
            pockets,
            cushions,
            cushion_model: config.cushion_model,
            cue_spot: Vec2::new(min.x + CUE_SPOT_INSET * s, mid_y),
            rack_apex: Vec2::new(max.x - RACK_APEX_INSET * s, mid_y),
            outer_min: min - reach,
            outer_max: max + reach,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    /// Unit normal of a rail pointing onto the cloth.
    pub fn inward_normal(&self, seg: &Segment) -> Vec2 {
        seg.normal_facing((seg.a + seg.b) / 2.0 - self.center())
    }

    /// Whether a ball centred at `p` lies fully on the cloth.
    pub fn contains_ball(&self, p: Vec2) -> bool {
        let r = Vec2::splat(self.ball_radius);
        p.cmpge(self.min + r).all() && p.cmple(self.max - r).all()
    }

    /// Index of the pocket whose capture radius contains `p`.
    pub fn capturing_pocket(&self, p: Vec2) -> Option<usize> {
        self.pockets
            .iter()
            .position(|pk| p.distance(pk.center) < pk.capture_radius)
    }

    /// Whether a ball at `p` is entering a pocket mouth, so the rail it is
    /// passing through must not bounce it back.
    pub fn near_pocket(&self, p: Vec2) -> bool {
        self.pockets
            .iter()
            .any(|pk| p.distance(pk.center) < pk.radius + self.ball_radius)
    }

    pub fn nearest_pocket(&self, p: Vec2) -> usize {
        let mut best = 0;
        let mut best_d = f32::INFINITY;
        for (i, pk) in self.pockets.iter().enumerate() {
            let d = p.distance_squared(pk.center);
            if d < best_d {
                best = i;
                best_d = d;
            }
        }
        best
    }

    /// Whether `p` has left the table entirely.
    pub fn is_outside(&self, p: Vec2) -> bool {
        !(p.cmpge(self.outer_min).all() && p.cmple(self.outer_max).all())
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::from_config(&TableConfig::default())
    }
}
