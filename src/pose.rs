//! Rover pose and the operations an instruction can trigger.

use crate::board::Board;
use crate::error::{Result, ValidationError, integer, tokens};
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pose used when no starting position is supplied.
pub const DEFAULT_POSITION: &str = "0 0 N";

/// Cardinal direction the rover is facing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    #[default]
    North,
    East,
    South,
    West,
}

impl Heading {
    /// All headings in clockwise order. Turning is index arithmetic over this array.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    fn index(self) -> usize {
        match self {
            Heading::North => 0,
            Heading::East => 1,
            Heading::South => 2,
            Heading::West => 3,
        }
    }

    /// Heading after a 90 degree counter-clockwise turn.
    pub fn left(self) -> Self {
        // +3 is -1 mod 4 without going negative.
        Self::ALL[(self.index() + 3) % 4]
    }

    /// Heading after a 90 degree clockwise turn.
    pub fn right(self) -> Self {
        Self::ALL[(self.index() + 1) % 4]
    }

    /// Unit step on the grid. North is `+Y`.
    pub fn step(self) -> IVec2 {
        match self {
            Heading::North => IVec2::Y,
            Heading::East => IVec2::X,
            Heading::South => IVec2::NEG_Y,
            Heading::West => IVec2::NEG_X,
        }
    }

    /// Single uppercase letter for this heading.
    pub fn letter(self) -> char {
        match self {
            Heading::North => 'N',
            Heading::East => 'E',
            Heading::South => 'S',
            Heading::West => 'W',
        }
    }

    /// Parses a one-letter direction, ignoring case.
    pub fn from_letter(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        let letter = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|h| h.letter() == letter.to_ascii_uppercase())
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Position and heading of a rover.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pose {
    pub position: IVec2,
    pub heading: Heading,
}

impl Pose {
    pub fn new(x: i32, y: i32, heading: Heading) -> Self {
        Self {
            position: IVec2::new(x, y),
            heading,
        }
    }

    /// Parses `"X Y D"` and checks the position lies on `board`.
    ///
    /// Checks run in a fixed order and the first failure is reported:
    /// token count, integer parsing, direction letter, x range, y range.
    pub fn parse_on(s: &str, board: &Board) -> Result<Self> {
        let parts = tokens("position", s, 3)?;
        let x = integer("x", parts[0])?;
        let y = integer("y", parts[1])?;
        let heading = Heading::from_letter(parts[2]).ok_or_else(|| {
            ValidationError::InvalidDirection {
                value: parts[2].to_string(),
            }
        })?;

        if !(0..=board.max.x).contains(&x) {
            return Err(ValidationError::OutOfBounds {
                field: "x",
                value: x,
                max: board.max.x,
            });
        }
        if !(0..=board.max.y).contains(&y) {
            return Err(ValidationError::OutOfBounds {
                field: "y",
                value: y,
                max: board.max.y,
            });
        }

        Ok(Self::new(x, y, heading))
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.position.x, self.position.y, self.heading)
    }
}

/// Operations a single instruction character can trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoverOp {
    /// Step one cell forward (`M`).
    Move,
    /// Rotate 90 degrees counter-clockwise (`L`).
    TurnLeft,
    /// Rotate 90 degrees clockwise (`R`).
    TurnRight,
    /// No-op. The character has no registered meaning.
    Ignore,
}

impl RoverOp {
    /// Maps an (already uppercased) instruction character to its operation.
    pub fn from_instruction(c: char) -> Self {
        match c {
            'M' => RoverOp::Move,
            'L' => RoverOp::TurnLeft,
            'R' => RoverOp::TurnRight,
            _ => RoverOp::Ignore,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_cycle() {
        for start in Heading::ALL {
            let mut h = start;
            for _ in 0..4 {
                h = h.left();
            }
            assert_eq!(h, start);

            for _ in 0..4 {
                h = h.right();
            }
            assert_eq!(h, start);
        }
        assert_eq!(Heading::North.left(), Heading::West);
        assert_eq!(Heading::West.right(), Heading::North);
    }

    #[test]
    fn test_from_letter() {
        assert_eq!(Heading::from_letter("n"), Some(Heading::North));
        assert_eq!(Heading::from_letter("W"), Some(Heading::West));
        assert_eq!(Heading::from_letter("North"), None);
        assert_eq!(Heading::from_letter("X"), None);
        assert_eq!(Heading::from_letter(""), None);
    }

    #[test]
    fn test_parse_pose() {
        let board = Board {
            max: IVec2::new(5, 5),
        };
        let pose = Pose::parse_on("1 2 s", &board).unwrap();
        assert_eq!(pose, Pose::new(1, 2, Heading::South));
        assert_eq!(pose.to_string(), "1 2 S");
        assert_eq!(
            Pose::parse_on(DEFAULT_POSITION, &Board::default()).unwrap(),
            Pose::default()
        );
    }

    #[test]
    fn test_parse_pose_validation_order() {
        let board = Board {
            max: IVec2::new(5, 5),
        };
        assert!(matches!(
            Pose::parse_on("1 2", &board),
            Err(ValidationError::TokenCount { .. })
        ));
        // Bad numbers are reported before a bad direction.
        assert!(matches!(
            Pose::parse_on("a b Q", &board),
            Err(ValidationError::NotANumber { field: "x", .. })
        ));
        assert!(matches!(
            Pose::parse_on("1 b N", &board),
            Err(ValidationError::NotANumber { field: "y", .. })
        ));
        // Bad direction is reported before out-of-range coordinates.
        assert!(matches!(
            Pose::parse_on("9 9 Q", &board),
            Err(ValidationError::InvalidDirection { .. })
        ));
        assert!(matches!(
            Pose::parse_on("9 9 N", &board),
            Err(ValidationError::OutOfBounds { field: "x", .. })
        ));
        assert!(matches!(
            Pose::parse_on("-1 0 N", &board),
            Err(ValidationError::OutOfBounds { field: "x", .. })
        ));
        assert!(matches!(
            Pose::parse_on("0 6 N", &board),
            Err(ValidationError::OutOfBounds { field: "y", .. })
        ));
    }

    #[test]
    fn test_instruction_dispatch() {
        assert_eq!(RoverOp::from_instruction('M'), RoverOp::Move);
        assert_eq!(RoverOp::from_instruction('L'), RoverOp::TurnLeft);
        assert_eq!(RoverOp::from_instruction('R'), RoverOp::TurnRight);
        assert_eq!(RoverOp::from_instruction('m'), RoverOp::Ignore);
        assert_eq!(RoverOp::from_instruction(' '), RoverOp::Ignore);
    }
}
