//! Interpreter that drives a [`RobotState`] from a stream of text commands.
//!
//! The entry point is [`RobotInterpreter`]. Configure it with a [`RobotConfig`],
//! then either feed it token sequences one at a time with
//! [`RobotInterpreter::execute`] or hand it a reader and a writer with
//! [`RobotInterpreter::run`].

use crate::command::{Command, PLACE};
use crate::error::{CommandError, ConfigError};
use crate::reader::CommandReader;
use crate::robot::{Position, RobotState};
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Configuration for robot interpretation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotConfig {
    /// Side length of the square table, in units. Default: 5.
    pub table_size: i32,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self { table_size: 5 }
    }
}

impl RobotConfig {
    /// Parses a TOML document such as `table_size = 7`. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects tables that could never hold the robot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.table_size < 1 {
            return Err(ConfigError::InvalidTableSize(self.table_size));
        }
        Ok(())
    }

    pub fn table(&self) -> Table {
        Table::new(self.table_size)
    }
}

/// The square region `[0, size)²` the robot must stay on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Table {
    size: i32,
}

impl Table {
    pub fn new(size: i32) -> Self {
        Self { size }
    }

    /// True when `position` lies on the table.
    pub fn contains(&self, position: Position) -> bool {
        (0..self.size).contains(&position.x) && (0..self.size).contains(&position.y)
    }
}

/// Reads commands, applies them to a single robot and produces output lines.
#[derive(Debug)]
pub struct RobotInterpreter {
    config: RobotConfig,
    table: Table,
    state: RobotState,
}

impl RobotInterpreter {
    /// Creates an interpreter with the robot off the table, facing North.
    pub fn new(config: RobotConfig) -> Self {
        Self {
            table: config.table(),
            config,
            state: RobotState::default(),
        }
    }

    pub fn config(&self) -> &RobotConfig {
        &self.config
    }

    /// Snapshot of the current robot state.
    pub fn state(&self) -> RobotState {
        self.state
    }

    /// True once a `PLACE` has put the robot on the table.
    pub fn is_placed(&self) -> bool {
        self.table.contains(self.state.position)
    }

    /// Processes one tokenized command and returns the line to emit, if any.
    ///
    /// Until the robot has been placed, everything except `PLACE` is dropped
    /// without output. Every error is absorbed here; the interpreter is always
    /// ready for the next command afterwards.
    pub fn execute<S: AsRef<str>>(&mut self, tokens: &[S]) -> Option<String> {
        let name = tokens.first()?.as_ref();
        if !self.is_placed() && name != PLACE {
            debug!(command = name, "robot not placed, ignoring command");
            return None;
        }

        match Command::parse(tokens).and_then(|command| self.apply(command)) {
            Ok(output) => output,
            Err(err) => {
                debug!(error = %err, "command rejected");
                err.user_message().map(str::to_string)
            }
        }
    }

    /// Applies a parsed command against the current state.
    ///
    /// MOVE and PLACE are computed as candidates and only committed when the
    /// candidate stays on the table; otherwise the prior state is kept.
    pub fn apply(&mut self, command: Command) -> Result<Option<String>, CommandError> {
        debug!(command = command.name(), "applying command");
        match command {
            Command::Move => self.commit(self.state.moved()).map(|_| None),
            Command::TurnLeft => {
                self.state = self.state.turned_left();
                Ok(None)
            }
            Command::TurnRight => {
                self.state = self.state.turned_right();
                Ok(None)
            }
            Command::Report => Ok(Some(self.state.report())),
            Command::Place { x, y, facing } => {
                self.commit(self.state.placed(x, y, facing)).map(|_| None)
            }
            Command::Unrecognized { name, arity } => {
                Err(CommandError::UnrecognizedCommand { name, arity })
            }
        }
    }

    /// Drives the read-evaluate loop until `input` is exhausted.
    ///
    /// Each emitted line is flushed immediately so interactive sessions see
    /// output in step with their commands. Returns the number of commands read.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<usize> {
        let mut reader = CommandReader::new(input);
        let mut processed = 0;
        loop {
            let tokens = reader.read_command()?;
            if tokens.is_empty() {
                break;
            }
            processed += 1;
            if let Some(line) = self.execute(&tokens) {
                writeln!(output, "{line}")?;
                output.flush()?;
            }
        }
        debug!(processed, "input exhausted");
        Ok(processed)
    }

    fn commit(&mut self, candidate: RobotState) -> Result<(), CommandError> {
        if !self.table.contains(candidate.position) {
            debug!(
                x = candidate.x(),
                y = candidate.y(),
                "candidate off table, rolling back"
            );
            return Err(CommandError::OffTableAfterTransition {
                x: candidate.x(),
                y: candidate.y(),
            });
        }
        self.state = candidate;
        Ok(())
    }
}
