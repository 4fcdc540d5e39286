//! Level structure
//!
//! The level owns every layer and every entity record. Layers refer to
//! entities by index, so nothing in here points back at the level.

use serde::{Deserialize, Serialize};

use super::grid::TileGrid;
use super::rect::Rect;
use super::stitch::StitchDiagnostic;
use super::tile::{FloorTile, WallTile};
use crate::monster::{Boss, Monster, MonsterId};
use crate::object::{Drop, DropId, DropKind};

/// Cell coordinates, `(x, y)`
pub type Point = (i32, i32);

/// What stands on a cell of the occupancy grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupant {
    Hero,
    Monster(MonsterId),
    Boss,
}

/// Complete level structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// Level index (depth), starting at 1
    pub index: u32,

    pub width: i32,
    pub height: i32,

    /// Floor layer
    pub floor: TileGrid<FloorTile>,

    /// Wall layer, drawn over the floor
    pub walls: TileGrid<WallTile>,

    /// Hero, monsters and boss anchor
    pub occupants: TileGrid<Occupant>,

    /// Drop at each cell
    pub drop_map: TileGrid<DropId>,

    /// Rooms; index 0 is the entry room, the last one holds the exit
    pub rooms: Vec<Rect>,

    pub corridors_h: Vec<Rect>,
    pub corridors_v: Vec<Rect>,

    pub monsters: Vec<Monster>,
    pub boss: Option<Boss>,
    pub drops: Vec<Drop>,

    /// Hero start cell, set once generation finishes
    pub hero: Option<Point>,

    /// Junctions the stitcher could not match
    pub diagnostics: Vec<StitchDiagnostic>,
}

impl Level {
    /// Create a new empty level
    pub fn new(index: u32, width: i32, height: i32) -> Self {
        Self {
            index,
            width,
            height,
            floor: TileGrid::new(width, height),
            walls: TileGrid::new(width, height),
            occupants: TileGrid::new(width, height),
            drop_map: TileGrid::new(width, height),
            rooms: Vec::new(),
            corridors_h: Vec::new(),
            corridors_v: Vec::new(),
            monsters: Vec::new(),
            boss: None,
            drops: Vec::new(),
            hero: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.floor.in_bounds(x, y)
    }

    pub fn floor_at(&self, x: i32, y: i32) -> Option<FloorTile> {
        self.floor.get(x, y)
    }

    pub fn wall_at(&self, x: i32, y: i32) -> Option<WallTile> {
        self.walls.get(x, y)
    }

    pub fn occupant_at(&self, x: i32, y: i32) -> Option<Occupant> {
        self.occupants.get(x, y)
    }

    pub fn set_floor(&mut self, x: i32, y: i32, tile: FloorTile) {
        self.floor.set(x, y, Some(tile));
    }

    /// Write a wall tile, or clear the cell with `None`
    pub fn set_wall(&mut self, x: i32, y: i32, tile: Option<WallTile>) {
        self.walls.set(x, y, tile);
    }

    pub fn has_drop(&self, x: i32, y: i32) -> bool {
        !self.drop_map.is_empty_at(x, y)
    }

    pub fn drop_at(&self, x: i32, y: i32) -> Option<&Drop> {
        self.drop_map.get(x, y).map(|id| &self.drops[id.0])
    }

    /// Add a monster on an empty cell
    ///
    /// Returns `None` and leaves the level untouched if the cell is taken.
    pub fn add_monster(&mut self, name: &str, x: i32, y: i32) -> Option<MonsterId> {
        if !self.in_bounds(x, y) || !self.occupants.is_empty_at(x, y) {
            return None;
        }
        let id = MonsterId(self.monsters.len());
        self.monsters.push(Monster {
            id,
            name: name.to_string(),
            x,
            y,
        });
        self.occupants.set(x, y, Some(Occupant::Monster(id)));
        Some(id)
    }

    pub fn monster(&self, id: MonsterId) -> Option<&Monster> {
        self.monsters.get(id.0)
    }

    /// Add a drop on a cell without one
    pub fn add_drop(&mut self, kind: DropKind, x: i32, y: i32) -> Option<DropId> {
        if !self.in_bounds(x, y) || self.has_drop(x, y) {
            return None;
        }
        let id = DropId(self.drops.len());
        self.drops.push(Drop { id, kind, x, y });
        self.drop_map.set(x, y, Some(id));
        Some(id)
    }

    /// Put the boss on its anchor cell
    pub fn set_boss(&mut self, name: &str, x: i32, y: i32) {
        self.boss = Some(Boss {
            name: name.to_string(),
            x,
            y,
        });
        self.occupants.set(x, y, Some(Occupant::Boss));
    }

    /// Move the hero to a cell, clearing the previous one
    pub fn place_hero(&mut self, x: i32, y: i32) {
        if let Some((hx, hy)) = self.hero.take()
            && self.occupants.get(hx, hy) == Some(Occupant::Hero)
        {
            self.occupants.set(hx, hy, None);
        }
        self.hero = Some((x, y));
        self.occupants.set(x, y, Some(Occupant::Hero));
    }

    pub fn entry_room(&self) -> Option<&Rect> {
        self.rooms.first()
    }

    pub fn exit_room(&self) -> Option<&Rect> {
        self.rooms.last()
    }

    /// Center of room 0, where the hero starts
    pub fn hero_spawn(&self) -> Option<Point> {
        self.entry_room().map(Rect::center)
    }

    /// Location of every ladder tile
    pub fn ladders(&self) -> Vec<Point> {
        self.floor
            .iter()
            .filter(|(_, _, t)| t.is_ladder())
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    /// The exit ladder, if exactly one exists
    pub fn ladder_position(&self) -> Option<Point> {
        match self.ladders().as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    pub fn count_floor(&self, tile: FloorTile) -> usize {
        self.floor.iter().filter(|(_, _, t)| *t == tile).count()
    }

    pub fn count_wall(&self, tile: WallTile) -> usize {
        self.walls.iter().filter(|(_, _, t)| *t == tile).count()
    }

    /// Monsters standing inside a room
    pub fn monsters_in(&self, room: &Rect) -> usize {
        self.monsters
            .iter()
            .filter(|m| room.contains(m.x, m.y))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_level_is_empty() {
        let level = Level::new(1, 30, 20);
        assert_eq!(level.floor.count(), 0);
        assert_eq!(level.walls.count(), 0);
        assert!(level.hero.is_none());
        assert!(level.hero_spawn().is_none());
        assert!(level.ladder_position().is_none());
    }

    #[test]
    fn test_add_monster_rejects_occupied() {
        let mut level = Level::new(1, 10, 10);
        let id = level.add_monster("imp", 3, 3).unwrap();
        assert_eq!(id, MonsterId(0));
        assert_eq!(level.occupant_at(3, 3), Some(Occupant::Monster(id)));
        assert!(level.add_monster("goblin", 3, 3).is_none());
        assert!(level.add_monster("goblin", 30, 3).is_none());
        assert_eq!(level.monsters.len(), 1);
        assert_eq!(level.monster(id).unwrap().name, "imp");
    }

    #[test]
    fn test_add_drop_rejects_duplicates() {
        let mut level = Level::new(1, 10, 10);
        assert!(level.add_drop(DropKind::Coins, 2, 2).is_some());
        assert!(level.add_drop(DropKind::Axe, 2, 2).is_none());
        assert_eq!(level.drop_at(2, 2).unwrap().kind, DropKind::Coins);
        // a drop does not block monsters
        assert!(level.add_monster("imp", 2, 2).is_some());
    }

    #[test]
    fn test_place_hero_moves() {
        let mut level = Level::new(1, 10, 10);
        level.place_hero(1, 1);
        level.place_hero(4, 5);
        assert_eq!(level.hero, Some((4, 5)));
        assert_eq!(level.occupant_at(1, 1), None);
        assert_eq!(level.occupant_at(4, 5), Some(Occupant::Hero));
    }

    #[test]
    fn test_ladder_position_requires_single() {
        let mut level = Level::new(1, 10, 10);
        level.set_floor(2, 2, FloorTile::Ladder);
        assert_eq!(level.ladder_position(), Some((2, 2)));
        level.set_floor(3, 2, FloorTile::Ladder);
        assert_eq!(level.ladder_position(), None);
        assert_eq!(level.ladders().len(), 2);
    }
}
