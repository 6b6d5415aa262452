//! The rover state machine.
//!
//! A [`Rover`] owns its [`Board`] and [`Pose`]. Grid and pose are replaced through
//! validating setters; instructions are interpreted by [`Rover::explore`], which walks
//! the instruction string in order and dispatches each character to its [`RoverOp`].

use crate::board::{Board, DEFAULT_BOARD};
use crate::error::Result;
use crate::pose::{DEFAULT_POSITION, Pose, RoverOp};
use tracing::{debug, trace};

/// A rover on a rectangular plateau.
///
/// The pose is always on the board: moves that would leave it are dropped and
/// shrinking the board pulls the pose back onto it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rover {
    board: Board,
    pose: Pose,
}

impl Rover {
    /// Creates a rover on the board `"X Y"`, starting at the default pose (`0 0 N`).
    pub fn new(board: &str) -> Result<Self> {
        let board: Board = board.parse()?;
        debug!(max = %board.max, "rover created with default pose");
        Ok(Self {
            board,
            pose: Pose::default(),
        })
    }

    /// Creates a rover on the board `"X Y"` at the pose `"X Y D"`.
    ///
    /// The pose is validated against the supplied board.
    pub fn with_position(board: &str, position: &str) -> Result<Self> {
        let mut rover = Self::new(board)?;
        rover.set_position(position)?;
        Ok(rover)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    /// Replaces the board with `"X Y"`.
    ///
    /// On error the rover is left untouched. If the current pose falls outside the
    /// new board it is clamped onto it.
    pub fn set_board_coordinates(&mut self, spec: &str) -> Result<()> {
        let board: Board = spec.parse().inspect_err(|e| {
            debug!(input = spec, error = %e, "rejected board coordinates");
        })?;

        let clamped = board.clamp(self.pose.position);
        if clamped != self.pose.position {
            trace!(from = %self.pose.position, to = %clamped, "pose clamped onto smaller board");
            self.pose.position = clamped;
        }
        self.board = board;
        debug!(max = %board.max, "board coordinates set");
        Ok(())
    }

    /// Replaces the pose with `"X Y D"`.
    ///
    /// The direction letter is case-insensitive. On error the rover is left untouched.
    pub fn set_position(&mut self, spec: &str) -> Result<()> {
        self.pose = Pose::parse_on(spec, &self.board).inspect_err(|e| {
            debug!(input = spec, error = %e, "rejected position");
        })?;
        debug!(pose = %self.pose, "position set");
        Ok(())
    }

    /// Turns left on `'L'` and right on `'R'`. Anything else is ignored.
    pub fn turn(&mut self, cmd: char) {
        match cmd {
            'L' => self.pose.heading = self.pose.heading.left(),
            'R' => self.pose.heading = self.pose.heading.right(),
            other => trace!(cmd = %other, "unknown turn ignored"),
        }
    }

    /// Steps one cell in the current heading. Does nothing at the edge of the board.
    pub fn move_forward(&mut self) {
        // Saturating so a board reaching i32::MAX cannot overflow.
        let next = self.pose.position.saturating_add(self.pose.heading.step());
        if next != self.pose.position && self.board.contains(next) {
            self.pose.position = next;
        } else {
            trace!(pose = %self.pose, "move blocked by board edge");
        }
    }

    /// Follows `instructions` in order.
    ///
    /// The string is uppercased first. `M` moves, `L` and `R` turn, and every other
    /// character is skipped.
    pub fn explore(&mut self, instructions: &str) {
        for c in instructions.to_uppercase().chars() {
            match RoverOp::from_instruction(c) {
                RoverOp::Move => self.move_forward(),
                RoverOp::TurnLeft => self.turn('L'),
                RoverOp::TurnRight => self.turn('R'),
                RoverOp::Ignore => trace!(instruction = %c, "instruction ignored"),
            }
        }
        debug!(pose = %self.pose, "exploration finished");
    }

    /// Current pose formatted as `"X Y D"`.
    pub fn current_position(&self) -> String {
        self.pose.to_string()
    }
}

/// Builds a rover from optional arguments.
///
/// Omitted arguments fall back to [`DEFAULT_BOARD`] and [`DEFAULT_POSITION`]. Supplied
/// arguments are always validated, even when malformed.
pub fn rover_from_args(board: Option<&str>, position: Option<&str>) -> Result<Rover> {
    Rover::with_position(
        board.unwrap_or(DEFAULT_BOARD),
        position.unwrap_or(DEFAULT_POSITION),
    )
}
