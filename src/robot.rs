//! Robot state and its pure transitions.

use crate::direction::Direction;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A grid coordinate. Unbounded; the table decides what is valid.
pub type Position = IVec2;

/// Canonical "not yet placed" position. Guaranteed to be off any table.
pub const OFF_TABLE: Position = IVec2::new(-1, -1);

/// Where the robot is and which way it faces.
///
/// Transitions never judge bounds. They return a candidate state and leave
/// commit or rollback to the interpreter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotState {
    /// Current grid position. Anything outside the table means "not placed".
    pub position: Position,

    /// Current facing.
    pub facing: Direction,
}

impl Default for RobotState {
    fn default() -> Self {
        Self {
            position: OFF_TABLE,
            facing: Direction::North,
        }
    }
}

impl RobotState {
    pub fn new(x: i32, y: i32, facing: Direction) -> Self {
        Self {
            position: IVec2::new(x, y),
            facing,
        }
    }

    pub fn x(&self) -> i32 {
        self.position.x
    }

    pub fn y(&self) -> i32 {
        self.position.y
    }

    /// One unit forward along the current facing.
    pub fn moved(&self) -> Self {
        Self {
            position: self.position + self.facing.step(),
            ..*self
        }
    }

    /// Quarter turn counter-clockwise, in place.
    pub fn turned_left(&self) -> Self {
        Self {
            facing: self.facing.left(),
            ..*self
        }
    }

    /// Quarter turn clockwise, in place.
    pub fn turned_right(&self) -> Self {
        Self {
            facing: self.facing.right(),
            ..*self
        }
    }

    /// Unconditionally relocates and reorients the robot.
    pub fn placed(&self, x: i32, y: i32, facing: Direction) -> Self {
        Self::new(x, y, facing)
    }

    /// Canonical `x,y,DIRECTION` report line.
    pub fn report(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RobotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.position.x, self.position.y, self.facing)
    }
}
