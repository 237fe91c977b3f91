//! Parsed commands and the dispatch from token sequences.

use crate::direction::Direction;
use crate::error::CommandError;
use serde::{Deserialize, Serialize};

pub const PLACE: &str = "PLACE";
pub const MOVE: &str = "MOVE";
pub const LEFT: &str = "LEFT";
pub const RIGHT: &str = "RIGHT";
pub const REPORT: &str = "REPORT";

/// A single instruction for the robot, produced fresh from one input line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Put the robot on the table at `(x, y)` facing `facing` (`PLACE X,Y,F`).
    Place { x: i32, y: i32, facing: Direction },
    /// Step one unit forward (`MOVE`).
    Move,
    /// Quarter turn counter-clockwise (`LEFT`).
    TurnLeft,
    /// Quarter turn clockwise (`RIGHT`).
    TurnRight,
    /// Print the current position and facing (`REPORT`).
    Report,
    /// Unknown name, or a known name with the wrong number of arguments.
    Unrecognized { name: String, arity: usize },
}

impl Command {
    /// Parses a non-empty, already normalized token sequence.
    ///
    /// Dispatch is on the `(name, argument count)` pair. Only `PLACE` can fail,
    /// when one of its three arguments does not parse; an arity mismatch is
    /// reported as [`Command::Unrecognized`] instead.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self, CommandError> {
        let Some((name, args)) = tokens.split_first() else {
            return Ok(Command::Unrecognized {
                name: String::new(),
                arity: 0,
            });
        };

        let command = match (name.as_ref(), args) {
            (MOVE, []) => Command::Move,
            (LEFT, []) => Command::TurnLeft,
            (RIGHT, []) => Command::TurnRight,
            (REPORT, []) => Command::Report,
            (PLACE, [x, y, facing]) => Command::Place {
                x: parse_coordinate(x.as_ref())?,
                y: parse_coordinate(y.as_ref())?,
                facing: Direction::from_name(facing.as_ref())?,
            },
            (other, _) => Command::Unrecognized {
                name: other.to_string(),
                arity: args.len(),
            },
        };
        Ok(command)
    }

    /// The keyword this command was parsed from.
    pub fn name(&self) -> &str {
        match self {
            Command::Place { .. } => PLACE,
            Command::Move => MOVE,
            Command::TurnLeft => LEFT,
            Command::TurnRight => RIGHT,
            Command::Report => REPORT,
            Command::Unrecognized { name, .. } => name,
        }
    }
}

/// Reads the leading base-10 integer of `token`, ignoring whatever follows it,
/// so `1.5` is 1 and `3abc` is 3.
///
/// Fails when there are no leading digits or the value does not fit in an `i32`.
fn parse_coordinate(token: &str) -> Result<i32, CommandError> {
    let invalid = || CommandError::InvalidIntegerArgument(token.to_string());
    let unsigned = token.strip_prefix(['+', '-']).unwrap_or(token);
    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return Err(invalid());
    }
    let sign = token.len() - unsigned.len();
    token[..sign + digits].parse().map_err(|_| invalid())
}
