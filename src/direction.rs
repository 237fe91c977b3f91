//! Compass facings and the degree arithmetic between them.

use crate::error::CommandError;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Distance in degrees between neighbouring compass points.
pub const QUARTER_TURN: i32 = 90;

/// A full revolution; equivalent to zero degrees.
pub const FULL_TURN: i32 = 360;

/// One of the four compass points the robot can face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    #[default]
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All facings in clockwise order, starting at North.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Compass bearing in degrees: 0, 90, 180 or 270.
    pub fn degrees(self) -> i32 {
        match self {
            Direction::North => 0,
            Direction::East => 90,
            Direction::South => 180,
            Direction::West => 270,
        }
    }

    /// Maps a bearing back to its compass point.
    ///
    /// Any multiple of 90 is accepted, negative values included; the angle is
    /// normalized into `[0, 360)` first. Returns `None` for bearings that fall
    /// between compass points.
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        match degrees.rem_euclid(FULL_TURN) {
            0 => Some(Direction::North),
            90 => Some(Direction::East),
            180 => Some(Direction::South),
            270 => Some(Direction::West),
            _ => None,
        }
    }

    /// Uppercase name as used on the command line and in reports.
    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "NORTH",
            Direction::East => "EAST",
            Direction::South => "SOUTH",
            Direction::West => "WEST",
        }
    }

    /// Looks up a direction by its uppercase name.
    ///
    /// Tokens reach this already normalized to uppercase, so the match is exact.
    pub fn from_name(name: &str) -> Result<Self, CommandError> {
        Self::ALL
            .into_iter()
            .find(|dir| dir.name() == name)
            .ok_or_else(|| CommandError::InvalidDirectionName(name.to_string()))
    }

    /// Rotates by `delta` degrees (positive is clockwise).
    ///
    /// `delta` must be a multiple of 90; anything else leaves the facing unchanged.
    pub fn turn(self, delta: i32) -> Self {
        debug_assert_eq!(delta % QUARTER_TURN, 0, "turns must be quarter turns");
        let mut angle = self.degrees() + delta % FULL_TURN;
        if angle < 0 {
            angle += FULL_TURN;
        }
        Self::from_degrees(angle % FULL_TURN).unwrap_or(self)
    }

    /// Quarter turn counter-clockwise.
    pub fn left(self) -> Self {
        self.turn(-QUARTER_TURN)
    }

    /// Quarter turn clockwise.
    pub fn right(self) -> Self {
        self.turn(QUARTER_TURN)
    }

    /// Unit offset of one step taken in this direction. North is `+y`.
    pub fn step(self) -> IVec2 {
        match self {
            Direction::North => IVec2::Y,
            Direction::East => IVec2::X,
            Direction::South => IVec2::NEG_Y,
            Direction::West => IVec2::NEG_X,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_name(dir.name()), Ok(dir));
        }
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        assert_eq!(
            Direction::from_name("NORTHX"),
            Err(CommandError::InvalidDirectionName("NORTHX".into()))
        );
        // Normalization happens in the tokenizer, not here.
        assert!("north".parse::<Direction>().is_err());
        assert!(Direction::from_name("").is_err());
    }

    #[test]
    fn test_turn_wraps_both_ways() {
        assert_eq!(Direction::North.left(), Direction::West);
        assert_eq!(Direction::West.right(), Direction::North);
        assert_eq!(Direction::East.left(), Direction::North);
        assert_eq!(Direction::South.turn(-180), Direction::North);
        assert_eq!(Direction::North.turn(-450), Direction::West);
    }

    #[test]
    fn test_four_turns_restore_facing() {
        for dir in Direction::ALL {
            let right = (0..4).fold(dir, |d, _| d.right());
            let left = (0..4).fold(dir, |d, _| d.left());
            assert_eq!(right, dir);
            assert_eq!(left, dir);
        }
    }

    #[test]
    fn test_from_degrees_normalizes() {
        assert_eq!(Direction::from_degrees(360), Some(Direction::North));
        assert_eq!(Direction::from_degrees(-90), Some(Direction::West));
        assert_eq!(Direction::from_degrees(45), None);
    }
}
