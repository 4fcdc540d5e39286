//! Generation errors
//!
//! Only layout failure and bad configuration abort a level. Junction
//! mismatches and placement exhaustion are handled in place.

use thiserror::Error;

use crate::consts::ROOM_MIN;

/// Configuration rejected by `GeneratorConfig::validate`
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("boss interval must be at least 1")]
    ZeroBossInterval,

    #[error("level {width}x{height} is too small to hold a room")]
    LevelTooSmall { width: i32, height: i32 },

    #[error("probability {0} is outside [0, 1]")]
    InvalidProbability(f64),

    #[error("room size range {min}..={max} is invalid (minimum is {})", ROOM_MIN)]
    InvalidRoomSize { min: i32, max: i32 },

    #[error("could not parse configuration: {0}")]
    Parse(String),
}

/// Failure to produce a level
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    #[error("no legal layout with {rooms} rooms for level {level}")]
    Layout { level: u32, rooms: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
