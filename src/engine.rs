//! The game engine: owns the grid and the robot, and applies instructions.
//!
//! The entry point is [`Game`]. Build it from a [`GameConfig`] (or use
//! [`Game::default`] for the standard 6 × 6 table), then feed it command lines
//! with [`Game::process`]. Typed callers can skip the parser and call
//! [`Game::execute`] with an [`Instruction`] directly.

use crate::config::{GameConfig, PlaceBounds};
use crate::error::{GameError, ParseError};
use crate::grid::Grid;
use crate::parser::{self, Instruction};
use crate::robot::{Bearing, Position, Robot};
use serde::{Deserialize, Serialize};

/// Lifecycle of a game. Moves from `Uninitialized` to `Placed` once and never back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No robot yet; only `PLACE` is accepted and it must name a bearing.
    #[default]
    Uninitialized,
    /// A robot is on the grid; every command is accepted.
    Placed,
}

/// Outcome of one [`Game::process`] call.
///
/// Exactly one of `message` / `error_message` is non-empty, selected by `success`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProcessingResult {
    pub success: bool,
    pub message: String,
    pub error_message: String,
}

impl ProcessingResult {
    pub fn ok(message: String) -> Self {
        Self {
            success: true,
            message,
            error_message: String::new(),
        }
    }

    pub fn failed(error_message: String) -> Self {
        Self {
            success: false,
            message: String::new(),
            error_message,
        }
    }

    /// The text a console should show for this result.
    pub fn text(&self) -> &str {
        if self.success {
            &self.message
        } else {
            &self.error_message
        }
    }
}

impl From<Result<String, GameError>> for ProcessingResult {
    fn from(result: Result<String, GameError>) -> Self {
        match result {
            Ok(message) => Self::ok(message),
            Err(err) => Self::failed(err.to_string()),
        }
    }
}

/// A single toy robot game on a fixed grid.
///
/// The game is not internally synchronized; every mutating call takes
/// `&mut self`, so one instruction is processed at a time.
#[derive(Clone, Debug, Default)]
pub struct Game {
    config: GameConfig,
    robot: Option<Robot>,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            robot: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.config.grid
    }

    /// The placed robot, if any.
    pub fn robot(&self) -> Option<&Robot> {
        self.robot.as_ref()
    }

    pub fn phase(&self) -> Phase {
        match self.robot {
            Some(_) => Phase::Placed,
            None => Phase::Uninitialized,
        }
    }

    /// Parses and executes one command line.
    ///
    /// Never fails outright: rejections come back as an unsuccessful
    /// [`ProcessingResult`] and leave the game untouched.
    pub fn process(&mut self, line: &str) -> ProcessingResult {
        let result = parser::parse(line, self.phase())
            .map_err(GameError::from)
            .and_then(|instruction| self.execute(instruction));

        match &result {
            Err(err) if err.is_boundary() => {
                log::info!("Blocked at the grid edge {:?}: {}", line.trim(), err)
            }
            Err(err) => log::debug!("Rejected {:?}: {}", line.trim(), err),
            Ok(_) => {}
        }
        result.into()
    }

    /// Executes an already parsed instruction, returning the success message.
    pub fn execute(&mut self, instruction: Instruction) -> Result<String, GameError> {
        log::debug!("Executing {:?} in phase {:?}", instruction, self.phase());

        match instruction {
            Instruction::Place { x, y, bearing } => self.place(x, y, bearing),
            Instruction::Move => self.advance(),
            Instruction::Rotate(rotation) => {
                let robot = self.placed_robot()?;
                robot.rotate(rotation);
                Ok(format!(
                    "Robot rotated successfully. {}",
                    location(&robot.position())
                ))
            }
            Instruction::Report => Ok(self.placed_robot()?.position().to_string()),
        }
    }

    fn placed_robot(&mut self) -> Result<&mut Robot, GameError> {
        self.robot.as_mut().ok_or(GameError::NotPlaced)
    }

    fn place(&mut self, x: i32, y: i32, bearing: Option<Bearing>) -> Result<String, GameError> {
        // A re-placement without a bearing keeps the current one.
        let bearing = bearing
            .or_else(|| self.robot.as_ref().map(|r| r.position().bearing))
            .ok_or(ParseError::BearingRequired)?;
        let position = Position::new(x, y, bearing);
        self.check_placement(&position)?;

        match self.robot.as_mut() {
            Some(robot) => robot.relocate(position),
            None => {
                log::info!("Robot placed at {position}");
                self.robot = Some(Robot::new(position));
            }
        }

        Ok(format!("Robot placed successfully. {}", location(&position)))
    }

    fn advance(&mut self) -> Result<String, GameError> {
        let grid = self.config.grid;
        let robot = self.placed_robot()?;
        let target = robot
            .position()
            .advanced()
            .filter(|target| grid.contains(target.cell))
            .ok_or(GameError::WouldFall)?;
        robot.relocate(target);
        Ok(format!("Robot moved successfully. {}", location(&target)))
    }

    fn check_placement(&self, position: &Position) -> Result<(), GameError> {
        let grid = &self.config.grid;
        if position.x() > grid.max().x {
            return Err(GameError::BeyondMaxX { max: grid.max().x });
        }
        if position.y() > grid.max().y {
            return Err(GameError::BeyondMaxY { max: grid.max().y });
        }
        if self.config.place_bounds == PlaceBounds::Full {
            if position.x() < grid.min().x {
                return Err(GameError::BelowMinX { min: grid.min().x });
            }
            if position.y() < grid.min().y {
                return Err(GameError::BelowMinY { min: grid.min().y });
            }
        }
        Ok(())
    }
}

/// `Location - x, y, Bearing`, the suffix of every success message except reports.
fn location(position: &Position) -> String {
    format!(
        "Location - {}, {}, {}",
        position.x(),
        position.y(),
        position.bearing
    )
}
