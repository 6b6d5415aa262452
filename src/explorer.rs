//! Interactive exploration loop.
//!
//! Prompts for a plateau, then for one rover at a time: its starting pose and
//! its instructions. Works over any reader/writer pair so it can be driven
//! from a terminal or from memory.

use crate::error::ValidationError;
use crate::pose::Pose;
use crate::rover::Rover;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

const WELCOME: &str = "Welcome to the rover explorer. We are trying to collect data on the Mars \
plateau where our rovers have landed. Please provide the coordinates for the upper right corner \
of the plateau as a string in the form 'x-coordinate y-coordinate' (e.g. 4 5)";
const PLATEAU_PROMPT: &str = "Upper right corner of the plateau: ";
const POSITION_PROMPT: &str = "Please provide the starting coordinates for the rover in the form \
'x-coordinate y-coordinate direction' (e.g. 1 1 N): ";
const INSTRUCTIONS_PROMPT: &str = "Please provide a string of instructions for the rover. The \
string should consist of L R and M (any other characters will simply be ignored) and not have \
any spaces (e.g. LLMLLMMR): ";
const AGAIN_PROMPT: &str = "Do you want to explore with another rover? (y/n) ";
const NEW_PLATEAU_PROMPT: &str =
    "Do you want to explore a plateau with different coordinates for the upper right position? (y/n) ";
const FAREWELL: &str = "Thank you for exploring the Mars plateau!";

/// Drives rovers from user input.
pub struct Explorer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Explorer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Gives back the writer, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs sessions until the user stops or input runs out.
    ///
    /// `plateau` skips the first plateau prompt. Returns the final pose of every
    /// rover that completed its run. A rejected plateau or position ends only that
    /// rover's session.
    pub fn run(&mut self, plateau: Option<String>) -> io::Result<Vec<Pose>> {
        let mut finished = Vec::new();
        let mut plateau = plateau;

        loop {
            let board = match plateau.take() {
                Some(board) => board,
                None => {
                    writeln!(self.output, "{WELCOME}")?;
                    match self.prompt(PLATEAU_PROMPT)? {
                        Some(board) => board,
                        None => break,
                    }
                }
            };

            writeln!(self.output, "Thank you. Let's get started with our first rover.")?;
            match self.navigate(&board)? {
                Session::Finished(pose) => finished.push(pose),
                Session::Rejected => {}
                Session::Closed => break,
            }

            if !self.confirm(AGAIN_PROMPT)? {
                break;
            }
            if !self.confirm(NEW_PLATEAU_PROMPT)? {
                plateau = Some(board);
            }
        }

        writeln!(self.output, "{FAREWELL}")?;
        info!(rovers = finished.len(), "exploration complete");
        Ok(finished)
    }

    fn navigate(&mut self, board: &str) -> io::Result<Session> {
        let mut rover = match Rover::new(board) {
            Ok(rover) => rover,
            Err(e) => return self.reject(e),
        };

        let Some(position) = self.prompt(POSITION_PROMPT)? else {
            return Ok(Session::Closed);
        };
        if let Err(e) = rover.set_position(&position) {
            return self.reject(e);
        }

        let Some(instructions) = self.prompt(INSTRUCTIONS_PROMPT)? else {
            return Ok(Session::Closed);
        };
        rover.explore(&instructions);

        writeln!(
            self.output,
            "After exploring, the rover ended up at {}.",
            rover.current_position()
        )?;
        info!(pose = %rover.pose(), "rover finished");
        Ok(Session::Finished(*rover.pose()))
    }

    fn reject(&mut self, e: ValidationError) -> io::Result<Session> {
        warn!(field = e.field(), error = %e, "rover session aborted");
        writeln!(self.output, "Error: {e}")?;
        Ok(Session::Rejected)
    }

    /// Prints `text` and reads one line. `None` means end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn confirm(&mut self, text: &str) -> io::Result<bool> {
        Ok(self
            .prompt(text)?
            .is_some_and(|answer| answer.eq_ignore_ascii_case("y")))
    }
}

enum Session {
    Finished(Pose),
    Rejected,
    Closed,
}
