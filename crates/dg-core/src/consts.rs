//! Generation constants
//!
//! Defaults for `GeneratorConfig`; the generator itself reads the config.

/// Level dimensions
pub const LEVEL_WIDTH: i32 = 200;
pub const LEVEL_HEIGHT: i32 = 200;

/// Every Nth level hosts a boss in its last room
pub const BOSS_INTERVAL: u32 = 5;

/// Entity counts grow by one per level on top of these
pub const MONSTER_BASE: u32 = 3;
pub const DROP_BASE: u32 = 5;

/// Rejection sampling budgets
pub const MONSTER_ATTEMPTS: u32 = 10;
pub const BOSS_ATTEMPTS: u32 = 10;
pub const DROP_ATTEMPTS: u32 = 64;

/// Probability that a decoration pass rewrites an eligible tile
pub const FLOOR_VARIETY_CHANCE: f64 = 0.2;
pub const WALL_FEATURE_CHANCE: f64 = 0.2;

/// Room size limits used by the tunneling layout
pub const ROOM_MIN: i32 = 7;
pub const ROOM_MAX: i32 = 13;

/// Corridor limits used by the tunneling layout
pub const CORRIDOR_H_LENGTH: (i32, i32) = (2, 8);
pub const CORRIDOR_H_THICKNESS: (i32, i32) = (2, 3);
pub const CORRIDOR_V_LENGTH: (i32, i32) = (4, 8);
pub const CORRIDOR_V_THICKNESS: (i32, i32) = (1, 2);

/// Failed candidate rooms tolerated before the layout gives up
pub const LAYOUT_ATTEMPTS: u32 = 400;
