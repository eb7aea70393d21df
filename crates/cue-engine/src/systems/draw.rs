//! Plain-data draw list.
//!
//! Games describe each frame as a list of circles and line strokes. The host
//! renderer reads the packed [`DrawPrimitive`] buffer; nothing here talks to
//! a graphics API.
//!
//! ```ignore
//! ctx.draw.fill_circle(ball_pos, 12.0, Color::WHITE);
//! for (a, b) in dash_segments(from, to, 10.0, 6.0) {
//!     ctx.draw.line(a, b, 1.5, Color::WHITE.with_alpha(0.6));
//! }
//! ```

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// RGBA color (0.0 - 1.0 per channel).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const GRAY: Self = Self::rgb(0.5, 0.5, 0.5);
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// One drawable shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Filled disc. `banded` asks the renderer for a white band (striped balls).
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
        banded: bool,
    },
    /// Straight stroke from `from` to `to`.
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    },
}

/// Packed form of a [`DrawCommand`], 10 floats = 40 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct DrawPrimitive {
    /// 0 = circle, 1 = banded circle, 2 = line.
    pub kind: f32,
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    /// Radius for circles, stroke width for lines.
    pub size: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl DrawPrimitive {
    pub const FLOATS: usize = 10;
    pub const KIND_CIRCLE: f32 = 0.0;
    pub const KIND_BANDED: f32 = 1.0;
    pub const KIND_LINE: f32 = 2.0;
}

impl From<&DrawCommand> for DrawPrimitive {
    fn from(cmd: &DrawCommand) -> Self {
        match *cmd {
            DrawCommand::Circle { center, radius, color, banded } => Self {
                kind: if banded { Self::KIND_BANDED } else { Self::KIND_CIRCLE },
                x0: center.x,
                y0: center.y,
                x1: center.x,
                y1: center.y,
                size: radius,
                r: color.r,
                g: color.g,
                b: color.b,
                a: color.a,
            },
            DrawCommand::Line { from, to, width, color } => Self {
                kind: Self::KIND_LINE,
                x0: from.x,
                y0: from.y,
                x1: to.x,
                y1: to.y,
                size: width,
                r: color.r,
                g: color.g,
                b: color.b,
                a: color.a,
            },
        }
    }
}

/// Per-frame list of draw commands with a fixed capacity.
pub struct DrawList {
    commands: Vec<DrawCommand>,
    packed: Vec<DrawPrimitive>,
    max_commands: usize,
    dropped: usize,
}

impl DrawList {
    pub fn new(max_commands: usize) -> Self {
        Self {
            commands: Vec::with_capacity(max_commands),
            packed: Vec::with_capacity(max_commands),
            max_commands,
            dropped: 0,
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.dropped = 0;
    }

    /// Commands beyond capacity are counted and discarded.
    pub fn push(&mut self, cmd: DrawCommand) {
        if self.commands.len() >= self.max_commands {
            self.dropped += 1;
            return;
        }
        self.commands.push(cmd);
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.push(DrawCommand::Circle { center, radius, color, banded: false });
    }

    pub fn banded_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.push(DrawCommand::Circle { center, radius, color, banded: true });
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.push(DrawCommand::Line { from, to, width, color });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Rebuild the packed buffer from the current commands.
    pub fn pack(&mut self) -> &[DrawPrimitive] {
        self.packed.clear();
        self.packed.extend(self.commands.iter().map(DrawPrimitive::from));
        &self.packed
    }

    pub fn packed(&self) -> &[DrawPrimitive] {
        &self.packed
    }

    pub fn packed_ptr(&self) -> *const f32 {
        self.packed.as_ptr() as *const f32
    }
}

/// Split `from..to` into dash sub-segments. The last dash is clipped at `to`.
pub fn dash_segments(from: Vec2, to: Vec2, dash: f32, gap: f32) -> Vec<(Vec2, Vec2)> {
    let total = from.distance(to);
    if total <= 0.0 || dash <= 0.0 {
        return Vec::new();
    }
    let dir = (to - from) / total;
    let period = dash + gap.max(0.0);
    let mut out = Vec::with_capacity((total / period) as usize + 1);
    let mut t = 0.0;
    while t < total {
        let end = (t + dash).min(total);
        out.push((from + dir * t, from + dir * end));
        t += period;
    }
    out
}
