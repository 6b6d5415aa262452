//! Rectangular grid the rover explores.

use crate::error::{Result, ValidationError, integer, tokens};
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Grid size used when no board is supplied.
pub const DEFAULT_BOARD: &str = "1 1";

/// Inclusive bounds of the plateau.
///
/// The bottom-left corner is always `(0, 0)`; `max` is the top-right corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub max: IVec2,
}

impl Default for Board {
    fn default() -> Self {
        Self { max: IVec2::ONE }
    }
}

impl Board {
    /// Returns true when `cell` lies on the board, edges included.
    pub fn contains(&self, cell: IVec2) -> bool {
        cell.cmpge(IVec2::ZERO).all() && cell.cmple(self.max).all()
    }

    /// Pulls `cell` back onto the board.
    pub fn clamp(&self, cell: IVec2) -> IVec2 {
        cell.clamp(IVec2::ZERO, self.max)
    }
}

impl FromStr for Board {
    type Err = ValidationError;

    /// Parses `"X Y"`, both non-negative integers.
    fn from_str(s: &str) -> Result<Self> {
        let parts = tokens("board coordinates", s, 2)?;
        let x = integer("board x", parts[0])?;
        let y = integer("board y", parts[1])?;
        if x < 0 {
            return Err(ValidationError::Negative {
                field: "board x",
                value: x,
            });
        }
        if y < 0 {
            return Err(ValidationError::Negative {
                field: "board y",
                value: y,
            });
        }
        Ok(Self {
            max: IVec2::new(x, y),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_board() {
        let board: Board = "5 7".parse().unwrap();
        assert_eq!(board.max, IVec2::new(5, 7));
        assert_eq!(DEFAULT_BOARD.parse::<Board>().unwrap(), Board::default());

        // A single-cell board is valid.
        assert_eq!("0 0".parse::<Board>().unwrap().max, IVec2::ZERO);
    }

    #[test]
    fn test_parse_board_errors() {
        assert!(matches!(
            "5".parse::<Board>(),
            Err(ValidationError::TokenCount { found: 1, .. })
        ));
        assert!(matches!(
            "5 5 5".parse::<Board>(),
            Err(ValidationError::TokenCount { found: 3, .. })
        ));
        assert!(matches!(
            "five 5".parse::<Board>(),
            Err(ValidationError::NotANumber { field: "board x", .. })
        ));
        assert_eq!(
            "5 -1".parse::<Board>(),
            Err(ValidationError::Negative {
                field: "board y",
                value: -1
            })
        );
    }

    #[test]
    fn test_contains_and_clamp() {
        let board = Board {
            max: IVec2::new(3, 2),
        };
        assert!(board.contains(IVec2::new(0, 0)));
        assert!(board.contains(IVec2::new(3, 2)));
        assert!(!board.contains(IVec2::new(4, 2)));
        assert!(!board.contains(IVec2::new(0, -1)));
        assert_eq!(board.clamp(IVec2::new(7, 1)), IVec2::new(3, 1));
    }
}
