//! # toy-robot
//!
//! A text-command interpreter that drives a single toy robot across a bounded
//! rectangular grid.
//!
//! Lines such as `PLACE 0,0,NORTH`, `MOVE`, `LEFT`, `RIGHT` and `REPORT` are
//! parsed into [`Instruction`]s and applied by a [`Game`], which refuses any
//! command that would drop the robot off the table or act on a robot that has
//! not been placed yet.
//!
//! ```
//! use toy_robot::Game;
//!
//! let mut game = Game::default();
//! game.process("PLACE 0,0,NORTH");
//! game.process("MOVE");
//! assert_eq!(game.process("REPORT").message, "0,1,North");
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod parser;
pub mod robot;

pub use config::*;
pub use engine::*;
pub use error::*;
pub use grid::*;
pub use parser::*;
pub use robot::*;
