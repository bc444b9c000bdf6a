//! Robot state: bearing, position and the rotation/relocation operations.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The compass direction the robot faces.
///
/// Bearings form a clockwise cycle: North → East → South → West → North.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bearing {
    North,
    East,
    South,
    West,
}

impl Bearing {
    /// All bearings in clockwise order, starting at North.
    pub const ALL: [Bearing; 4] = [Bearing::North, Bearing::East, Bearing::South, Bearing::West];

    /// Returns the unit step taken when moving one cell in this bearing.
    pub fn step(self) -> IVec2 {
        match self {
            Bearing::North => IVec2::Y,
            Bearing::East => IVec2::X,
            Bearing::South => IVec2::NEG_Y,
            Bearing::West => IVec2::NEG_X,
        }
    }

    /// The next bearing clockwise.
    pub fn clockwise(self) -> Bearing {
        match self {
            Bearing::North => Bearing::East,
            Bearing::East => Bearing::South,
            Bearing::South => Bearing::West,
            Bearing::West => Bearing::North,
        }
    }

    /// The next bearing counter-clockwise.
    pub fn counter_clockwise(self) -> Bearing {
        match self {
            Bearing::North => Bearing::West,
            Bearing::West => Bearing::South,
            Bearing::South => Bearing::East,
            Bearing::East => Bearing::North,
        }
    }

    /// Applies a single quarter turn.
    pub fn turned(self, rotation: Rotation) -> Bearing {
        match rotation {
            Rotation::Left => self.counter_clockwise(),
            Rotation::Right => self.clockwise(),
        }
    }

    /// Looks a bearing up by name, ignoring ASCII case (`"north"`, `"NORTH"`, ...).
    pub fn from_name(name: &str) -> Option<Bearing> {
        Bearing::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(name))
    }

    /// Canonical name as printed in reports.
    pub fn name(self) -> &'static str {
        match self {
            Bearing::North => "North",
            Bearing::East => "East",
            Bearing::South => "South",
            Bearing::West => "West",
        }
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A quarter turn requested by `LEFT` or `RIGHT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rotation {
    Left,
    Right,
}

/// Where the robot stands and which way it faces.
///
/// A `Position` says nothing about grid validity; the engine checks a candidate
/// against its [`Grid`](crate::grid::Grid) before adopting it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Cell coordinates, `x` growing East and `y` growing North.
    pub cell: IVec2,
    pub bearing: Bearing,
}

impl Position {
    pub fn new(x: i32, y: i32, bearing: Bearing) -> Self {
        Self {
            cell: IVec2::new(x, y),
            bearing,
        }
    }

    pub fn x(&self) -> i32 {
        self.cell.x
    }

    pub fn y(&self) -> i32 {
        self.cell.y
    }

    /// The position one cell ahead, keeping the bearing. `None` when the
    /// step would leave the `i32` coordinate range.
    pub fn advanced(&self) -> Option<Position> {
        let step = self.bearing.step();
        Some(Position {
            cell: IVec2::new(
                self.cell.x.checked_add(step.x)?,
                self.cell.y.checked_add(step.y)?,
            ),
            bearing: self.bearing,
        })
    }
}

/// Formats as `x,y,Bearing`, the report format.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.cell.x, self.cell.y, self.bearing)
    }
}

/// The toy robot. Exists only once it has been placed on the grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Robot {
    position: Position,
}

impl Robot {
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Overwrites the current position. Bounds are the caller's business.
    pub fn relocate(&mut self, position: Position) {
        self.position = position;
    }

    /// Turns the robot a quarter turn in place.
    pub fn rotate(&mut self, rotation: Rotation) {
        self.position.bearing = self.position.bearing.turned(rotation);
    }
}
