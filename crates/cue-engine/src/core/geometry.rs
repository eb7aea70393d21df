//! 2D geometry helpers: closest points, reflection and ray marching.
//!
//! Degenerate inputs (zero-length segments or directions) never panic; they
//! fall back to the nearest meaningful answer or report no hit.

use glam::Vec2;

/// Squared length below which a vector is treated as zero.
const DEGENERATE_SQ: f32 = 1e-8;

/// A line segment from `a` to `b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
}

impl Segment {
    pub const fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    pub fn length(&self) -> f32 {
        self.a.distance(self.b)
    }

    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        closest_point_on_segment(p, self.a, self.b)
    }

    pub fn distance_to(&self, p: Vec2) -> f32 {
        p.distance(self.closest_point(p))
    }

    /// Unit normal (left-hand perpendicular of `b - a`), zero for a point segment.
    pub fn normal(&self) -> Vec2 {
        (self.b - self.a).perp().normalize_or_zero()
    }

    /// Unit normal flipped, if needed, to face against `incoming`.
    pub fn normal_facing(&self, incoming: Vec2) -> Vec2 {
        let n = self.normal();
        if n.dot(incoming) > 0.0 {
            -n
        } else {
            n
        }
    }

    /// Whether the perpendicular foot of `p` falls strictly between the ends.
    pub fn spans(&self, p: Vec2) -> bool {
        let ab = self.b - self.a;
        let len_sq = ab.length_squared();
        if len_sq < DEGENERATE_SQ {
            return false;
        }
        let t = (p - self.a).dot(ab) / len_sq;
        t > 0.0 && t < 1.0
    }
}

/// Closest point to `p` on the segment `a..b`.
pub fn closest_point_on_segment(p: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq < DEGENERATE_SQ {
        return a;
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

/// Distance from `p` to the segment `a..b`.
pub fn point_segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    p.distance(closest_point_on_segment(p, a, b))
}

/// Mirror `v` about the unit normal `n`: `v - 2(v·n)n`.
pub fn reflect(v: Vec2, n: Vec2) -> Vec2 {
    v - 2.0 * v.dot(n) * n
}

/// Analytic projection of `point` onto the ray `origin + dir·t`.
///
/// Returns `(t, perpendicular_distance)` when the point lies ahead of the
/// origin. `dir` must be a unit vector.
pub fn project_onto_ray(origin: Vec2, dir: Vec2, point: Vec2) -> Option<(f32, f32)> {
    if dir.length_squared() < DEGENERATE_SQ {
        return None;
    }
    let t = (point - origin).dot(dir);
    if t < 0.0 {
        return None;
    }
    let foot = origin + dir * t;
    Some((t, foot.distance(point)))
}

/// Walk the ray in fixed steps and return the first distance at which `hit`
/// accepts the sample point. The final sample lands exactly on `max_dist`.
/// The sample count is fixed up front, so a step too small to move `t` still
/// terminates.
pub fn march_ray(
    origin: Vec2,
    dir: Vec2,
    max_dist: f32,
    step: f32,
    mut hit: impl FnMut(Vec2) -> bool,
) -> Option<f32> {
    if dir.length_squared() < DEGENERATE_SQ
        || !(step > 0.0)
        || !(max_dist > 0.0)
        || !max_dist.is_finite()
    {
        return None;
    }
    let samples = (max_dist / step).ceil() as usize;
    (0..=samples)
        .map(|i| (i as f32 * step).min(max_dist))
        .find(|&t| hit(origin + dir * t))
}

/// Ray-marched hit against a circle of `radius` around `center`.
pub fn march_circle(
    origin: Vec2,
    dir: Vec2,
    center: Vec2,
    radius: f32,
    max_dist: f32,
    step: f32,
) -> Option<f32> {
    let r_sq = radius * radius;
    march_ray(origin, dir, max_dist, step, |p| p.distance_squared(center) <= r_sq)
}

/// Ray-marched hit against a segment thickened by `radius`.
pub fn march_segment(
    origin: Vec2,
    dir: Vec2,
    segment: &Segment,
    radius: f32,
    max_dist: f32,
    step: f32,
) -> Option<f32> {
    march_ray(origin, dir, max_dist, step, |p| segment.distance_to(p) <= radius)
}
