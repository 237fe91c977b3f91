//! # toy-robot
//!
//! A simulator for a toy robot moving on a square table, driven by a
//! line-oriented command stream (`PLACE X,Y,F`, `MOVE`, `LEFT`, `RIGHT`, `REPORT`).
//!
//! It separates *mechanism* from *policy*: [`RobotState`] transitions are pure and
//! know nothing about the table, while [`RobotInterpreter`] owns the table bounds
//! and decides whether each candidate state is committed or rolled back.

pub mod command;
pub mod direction;
pub mod error;
pub mod interpreter;
pub mod reader;
pub mod robot;

pub use command::*;
pub use direction::*;
pub use error::*;
pub use interpreter::*;
pub use reader::*;
pub use robot::*;
