//! Recoverable, user-facing rejections.

use std::fmt;

/// Why a ball-in-hand click did not place the cue ball. The player simply
/// clicks again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacementError {
    /// The cue ball would not lie fully inside the cushions.
    OutsidePlayfield {
        x: f32,
        y: f32,
    },

    /// The cue ball would touch, or come too close to, another ball.
    Overlaps {
        /// Number of the ball in the way.
        ball: u8,
    },

    /// The current phase does not allow placing the cue ball.
    NotInHand,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutsidePlayfield { x, y } => {
                write!(f, "cue ball at ({:.1}, {:.1}) is outside the playfield", x, y)
            }
            PlacementError::Overlaps { ball } => {
                write!(f, "cue ball would overlap ball {}", ball)
            }
            PlacementError::NotInHand => write!(f, "cue ball is not in hand"),
        }
    }
}

impl std::error::Error for PlacementError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(
            PlacementError::Overlaps { ball: 7 }.to_string(),
            "cue ball would overlap ball 7"
        );
        assert!(PlacementError::OutsidePlayfield { x: 1.0, y: 2.0 }
            .to_string()
            .contains("(1.0, 2.0)"));
    }
}
