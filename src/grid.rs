//! Grid bounds: the inclusive rectangle of cells the robot may occupy.

use crate::error::ConfigError;
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// The rectangular table the robot moves on.
///
/// Both corners are inclusive: the default grid spans `0..=5` on each axis,
/// giving 6 × 6 cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridBounds")]
pub struct Grid {
    /// Lowest legal cell (South-West corner).
    min: IVec2,
    /// Highest legal cell (North-East corner).
    max: IVec2,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            min: IVec2::ZERO,
            max: IVec2::splat(5),
        }
    }
}

impl Grid {
    /// Builds a grid from its inclusive corners. Fails when `min > max` on either axis.
    pub fn new(min: IVec2, max: IVec2) -> Result<Self, ConfigError> {
        if !min.cmple(max).all() {
            return Err(ConfigError::InvalidGrid { min, max });
        }
        Ok(Self { min, max })
    }

    /// A grid anchored at the origin reaching `max_x`, `max_y` inclusive.
    pub fn with_max(max_x: i32, max_y: i32) -> Result<Self, ConfigError> {
        Self::new(IVec2::ZERO, IVec2::new(max_x, max_y))
    }

    pub fn min(&self) -> IVec2 {
        self.min
    }

    pub fn max(&self) -> IVec2 {
        self.max
    }

    /// Whether `cell` lies on the grid.
    pub fn contains(&self, cell: IVec2) -> bool {
        self.min.cmple(cell).all() && cell.cmple(self.max).all()
    }
}

/// Unchecked corners as they appear in a config file.
#[derive(Deserialize)]
#[serde(default)]
struct GridBounds {
    min: IVec2,
    max: IVec2,
}

impl Default for GridBounds {
    fn default() -> Self {
        let grid = Grid::default();
        Self {
            min: grid.min,
            max: grid.max,
        }
    }
}

impl TryFrom<GridBounds> for Grid {
    type Error = ConfigError;

    fn try_from(bounds: GridBounds) -> Result<Self, Self::Error> {
        Grid::new(bounds.min, bounds.max)
    }
}
