//! Game configuration, optionally loaded from a TOML file.
//!
//! ```toml
//! place_bounds = "upper-only"
//!
//! [grid]
//! min = [0, 0]
//! max = [9, 4]
//! ```
//!
//! Every key is optional; missing ones take their [`Default`] value.

use crate::error::ConfigError;
use crate::grid::Grid;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which grid edges a `PLACE` command is checked against.
///
/// `Move` is always checked against all four edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlaceBounds {
    /// Reject placements beyond any edge.
    #[default]
    Full,
    /// Only reject placements beyond the maximum X/Y. Coordinates below the
    /// minimum are accepted, as the first toy robot releases did.
    UpperOnly,
}

/// Configuration for a [`Game`](crate::engine::Game).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// The table the robot moves on. Default: `0..=5` on both axes.
    pub grid: Grid,
    /// Edge checks applied to `PLACE`. Default: [`PlaceBounds::Full`].
    pub place_bounds: PlaceBounds,
}

impl GameConfig {
    /// Parses a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}
