//! Dungeon levels
//!
//! Level structure, tile vocabulary, layout providers and the generation
//! pipeline that turns a layout into a playable level.

mod decorate;
mod fill;
mod generation;
mod grid;
mod layout;
mod level;
mod populate;
mod rect;
mod stitch;
mod tile;

pub use decorate::{
    add_wall_features, place_ladder, vary_floor, BOTTOM_WALL_FEATURES, TOP_WALL_FEATURES,
};
pub use fill::{fill_corridor_h, fill_corridor_v, fill_level, fill_room};
pub use generation::DungeonGenerator;
pub use grid::TileGrid;
pub use layout::{joins_h, joins_v, FixedLayout, Layout, LayoutProvider, TunnelingLayout};
pub use level::{Level, Occupant, Point};
pub use populate::{place_boss, place_drop, place_monster, populate, Population};
pub use rect::Rect;
pub use stitch::{
    stitch_corridor_h, stitch_corridor_v, transition, Junction, StitchDiagnostic, Transition,
};
pub use tile::{FloorTile, WallTile};
