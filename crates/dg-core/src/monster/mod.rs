//! Monsters placed by the generator
//!
//! Level-owned records. The occupancy grid refers to them by `MonsterId`,
//! which is the index into `Level::monsters`.

use serde::{Deserialize, Serialize};

/// Regular monster names, picked uniformly
pub const MONSTER_NAMES: [&str; 8] = [
    "tiny_zombie",
    "goblin",
    "imp",
    "skelet",
    "muddy",
    "swampy",
    "zombie",
    "ice_zombie",
];

/// Boss names, cycled by level depth
pub const BOSS_NAMES: [&str; 3] = ["big_zombie", "ogre", "big_demon"];

/// Index into `Level::monsters`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonsterId(pub usize);

/// A regular monster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    pub id: MonsterId,
    pub name: String,
    pub x: i32,
    pub y: i32,
}

/// The level boss
///
/// Drawn over a 2×2 block whose bottom-left cell is the anchor; only the
/// anchor is recorded in the occupancy grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boss {
    pub name: String,
    pub x: i32,
    pub y: i32,
}

impl Boss {
    /// Offsets from the anchor that must be free to place a boss
    pub const FOOTPRINT: [(i32, i32); 4] = [(0, 0), (1, 0), (0, -1), (1, -1)];

    /// All cells the boss covers on screen, anchor first
    pub fn footprint(&self) -> [(i32, i32); 4] {
        Self::FOOTPRINT.map(|(dx, dy)| (self.x + dx, self.y + dy))
    }
}

/// Boss name for a level: cycles through `BOSS_NAMES` every `interval` levels
pub fn boss_name(level: u32, interval: u32) -> &'static str {
    let slot = (level / interval.max(1)) as usize % BOSS_NAMES.len();
    BOSS_NAMES[slot]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boss_name_cycles() {
        assert_eq!(boss_name(5, 5), "ogre");
        assert_eq!(boss_name(10, 5), "big_demon");
        assert_eq!(boss_name(15, 5), "big_zombie");
        assert_eq!(boss_name(20, 5), "ogre");
    }

    #[test]
    fn test_footprint() {
        let boss = Boss {
            name: "ogre".to_string(),
            x: 10,
            y: 6,
        };
        assert_eq!(boss.footprint(), [(10, 6), (11, 6), (10, 5), (11, 5)]);
    }
}
