//! Monster, boss and drop placement
//!
//! Every entity is placed by rejection sampling: pick a room, pick a cell in
//! it, accept if the cell passes the entity's footprint check. When the
//! attempt budget runs out the entity is skipped; a crowded level just ends
//! up with fewer entities.

use super::level::Level;
use crate::config::GeneratorConfig;
use crate::monster::{boss_name, Boss, MONSTER_NAMES};
use crate::object::DropKind;
use crate::rng::GameRng;

/// Counts actually placed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Population {
    pub monsters: u32,
    pub boss: bool,
    pub drops: u32,
}

/// Place the monsters, boss and drops a level index calls for
pub fn populate(level: &mut Level, config: &GeneratorConfig, rng: &mut GameRng) -> Population {
    let index = level.index;
    // the boss never shares the entry room
    let is_boss = config.is_boss_level(index) && level.rooms.len() > 1;
    let mut placed = Population::default();

    for _ in 0..config.monster_count(index) {
        if place_monster(level, is_boss, config.monster_attempts, rng) {
            placed.monsters += 1;
        }
    }
    if is_boss {
        placed.boss = place_boss(level, config, rng);
    }
    for _ in 0..config.drop_count(index) {
        if place_drop(level, config.drop_attempts, rng) {
            placed.drops += 1;
        }
    }

    log::debug!(
        "level {}: placed {}/{} monsters, boss {}, {}/{} drops",
        index,
        placed.monsters,
        config.monster_count(index),
        placed.boss,
        placed.drops,
        config.drop_count(index)
    );
    placed
}

/// Place one monster on a free cell of a room other than the entry room
///
/// On boss levels the last room is kept for the boss.
pub fn place_monster(level: &mut Level, is_boss: bool, attempts: u32, rng: &mut GameRng) -> bool {
    let max_room = level.rooms.len().saturating_sub(usize::from(is_boss));
    if max_room <= 1 {
        return false;
    }
    let room = level.rooms[rng.range(1, max_room as i32) as usize];
    for _ in 0..attempts {
        let x = room.x + rng.range(0, room.w);
        let y = room.y + rng.range(0, room.h);
        if level.occupants.is_empty_at(x, y) {
            let name = rng.choose(&MONSTER_NAMES).copied().unwrap_or(MONSTER_NAMES[0]);
            return level.add_monster(name, x, y).is_some();
        }
    }
    log::trace!("no free cell for a monster after {attempts} attempts");
    false
}

/// Place the boss in the last room
///
/// The anchor keeps one cell of margin from the room edges and needs itself,
/// the cell to its right and the two cells above those free.
pub fn place_boss(level: &mut Level, config: &GeneratorConfig, rng: &mut GameRng) -> bool {
    let Some(room) = level.rooms.last().copied() else {
        return false;
    };
    for _ in 0..config.boss_attempts {
        let x = room.x + rng.range(1, room.w - 1);
        let y = room.y + rng.range(1, room.h - 1);
        let free = Boss::FOOTPRINT
            .iter()
            .all(|(dx, dy)| level.occupants.is_empty_at(x + dx, y + dy));
        if free {
            level.set_boss(boss_name(level.index, config.boss_interval), x, y);
            return true;
        }
    }
    log::trace!("no free footprint for the boss after {} attempts", config.boss_attempts);
    false
}

/// Place one drop on a cell of a random room that holds no drop yet
pub fn place_drop(level: &mut Level, attempts: u32, rng: &mut GameRng) -> bool {
    let Some(room) = rng.choose(&level.rooms).copied() else {
        return false;
    };
    for _ in 0..attempts {
        let x = room.x + rng.range(0, room.w);
        let y = room.y + rng.range(0, room.h);
        if !level.has_drop(x, y) {
            let kind = rng.choose(&DropKind::POOL).copied().unwrap_or(DropKind::Coins);
            return level.add_drop(kind, x, y).is_some();
        }
    }
    log::trace!("no free cell for a drop after {attempts} attempts");
    false
}
