//! Error types for command parsing, game rules and configuration.
//!
//! The `Display` text of each variant is the message shown to the player.

use glam::IVec2;
use std::path::PathBuf;
use thiserror::Error;

/// A command line that does not fit any accepted command shape.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(
        "Input is in incorrect format. A command can only be in the form of numbers and letters and one of the following :\n\
         To place the robot : Place 3,2,North\n\
         To move the robot : move\n\
         To rotate the robot to the left: left\n\
         To rotate the robot to the right: right\n\
         To get the current location of the robot: report"
    )]
    Unrecognized,

    #[error(
        "Robot place command is in incorrect format. Please enter command as {{X Position}},{{Y Position}},{{Direction - North/West/East/South}}. Eg : 1,2,North"
    )]
    PlaceFormat,

    #[error("X coordinate is entered in an incorrect format. It can only be a whole number")]
    InvalidX,

    #[error("Y coordinate is entered in an incorrect format. It can only be a whole number")]
    InvalidY,

    #[error(
        "Incorrect direction entered. Direction can only be entered as one of the following : North, East, West or South"
    )]
    InvalidBearing,

    #[error(
        "A direction is required when placing the robot for the first time. Eg : Place 1,2,North"
    )]
    BearingRequired,

    #[error("Move command is in incorrect format. Please ensure the command is in the format : 'MOVE'")]
    MoveFormat,

    #[error(
        "Rotate left command is in incorrect format. Please ensure the command is in the format : 'LEFT'"
    )]
    LeftFormat,

    #[error(
        "Rotate right command is in incorrect format. Please ensure the command is in the format : 'RIGHT'"
    )]
    RightFormat,

    #[error(
        "Report command is in incorrect format. Please ensure the command is in the format : 'REPORT'"
    )]
    ReportFormat,
}

/// Why the engine rejected a line. The game state is unchanged in every case.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(
        "A robot must be placed first before executing any other command. Eg : Place 3,2,North"
    )]
    NotPlaced,

    #[error("Robot's X co-ordinate must be less than the grid width - {max}")]
    BeyondMaxX { max: i32 },

    #[error("Robot's Y co-ordinate must be less than the grid height - {max}")]
    BeyondMaxY { max: i32 },

    #[error("Robot's X co-ordinate must not be less than the grid minimum - {min}")]
    BelowMinX { min: i32 },

    #[error("Robot's Y co-ordinate must not be less than the grid minimum - {min}")]
    BelowMinY { min: i32 },

    #[error(
        "Moving from current location will push the robot over the grid, try changing direction using LEFT, RIGHT or Move the robot to a new location using PLACE X,Y,Direction"
    )]
    WouldFall,
}

impl GameError {
    /// True for rejections caused by the grid edges rather than the input text or ordering.
    pub fn is_boundary(&self) -> bool {
        matches!(
            self,
            GameError::BeyondMaxX { .. }
                | GameError::BeyondMaxY { .. }
                | GameError::BelowMinX { .. }
                | GameError::BelowMinY { .. }
                | GameError::WouldFall
        )
    }
}

/// Problems loading a [`GameConfig`](crate::config::GameConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Grid minimum {min} must not exceed maximum {max} on either axis")]
    InvalidGrid { min: IVec2, max: IVec2 },
}
