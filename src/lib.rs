//! # mars-rover
//!
//! A grid-bound rover that follows move/turn instruction strings.
//!
//! The core is [`Rover`]: it owns a rectangular [`Board`] with `(0, 0)` at the bottom-left
//! and a [`Pose`] (position plus cardinal [`Heading`]). Instructions `M`, `L` and `R` move
//! and turn it; any other character is ignored, and moves off the board are dropped.
//! [`Explorer`] wraps the rover in the interactive prompt loop used by the
//! `rover-explorer` binary.

pub mod board;
pub mod error;
pub mod explorer;
#[cfg(feature = "cli")]
pub mod logger;
pub mod pose;
pub mod rover;

pub use board::*;
pub use error::{Result, ValidationError};
pub use explorer::*;
pub use pose::*;
pub use rover::*;
