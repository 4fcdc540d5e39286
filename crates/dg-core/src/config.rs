//! Generator configuration
//!
//! Every tunable of the pipeline in one serde-friendly struct. Missing fields
//! fall back to the values in `consts`.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Tunables for `DungeonGenerator`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub width: i32,
    pub height: i32,
    pub boss_interval: u32,
    pub monster_base: u32,
    pub drop_base: u32,
    pub monster_attempts: u32,
    pub boss_attempts: u32,
    pub drop_attempts: u32,
    pub floor_variety_chance: f64,
    pub wall_feature_chance: f64,
    pub room_min: i32,
    pub room_max: i32,
    pub layout_attempts: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: LEVEL_WIDTH,
            height: LEVEL_HEIGHT,
            boss_interval: BOSS_INTERVAL,
            monster_base: MONSTER_BASE,
            drop_base: DROP_BASE,
            monster_attempts: MONSTER_ATTEMPTS,
            boss_attempts: BOSS_ATTEMPTS,
            drop_attempts: DROP_ATTEMPTS,
            floor_variety_chance: FLOOR_VARIETY_CHANCE,
            wall_feature_chance: WALL_FEATURE_CHANCE,
            room_min: ROOM_MIN,
            room_max: ROOM_MAX,
            layout_attempts: LAYOUT_ATTEMPTS,
        }
    }
}

impl GeneratorConfig {
    /// Check the config for values the pipeline cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.boss_interval == 0 {
            return Err(ConfigError::ZeroBossInterval);
        }
        if self.room_min < ROOM_MIN || self.room_max < self.room_min {
            return Err(ConfigError::InvalidRoomSize {
                min: self.room_min,
                max: self.room_max,
            });
        }
        // room plus its wall rows plus the border margin
        let min_side = self.room_max + 6;
        if self.width < min_side || self.height < min_side {
            return Err(ConfigError::LevelTooSmall {
                width: self.width,
                height: self.height,
            });
        }
        for p in [self.floor_variety_chance, self.wall_feature_chance] {
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::InvalidProbability(p));
            }
        }
        Ok(())
    }

    /// Regular monsters requested for a level
    pub fn monster_count(&self, level: u32) -> u32 {
        self.monster_base + level
    }

    /// Drops requested for a level
    pub fn drop_count(&self, level: u32) -> u32 {
        self.drop_base + level
    }

    /// Rooms requested from the layout provider
    pub fn room_count(&self, level: u32) -> usize {
        1 + level as usize
    }

    pub fn is_boss_level(&self, level: u32) -> bool {
        self.boss_interval != 0 && level % self.boss_interval == 0
    }
}
