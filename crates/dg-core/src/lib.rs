//! dg-core: procedural dungeon generation
//!
//! Builds tile-based dungeon levels from a seed and a level index. Rooms and
//! corridors come from a `LayoutProvider`; the generator fills them with
//! floor and walls, stitches corridor ends into room walls, places monsters,
//! a boss and drops, decorates, and drops the exit ladder.
//!
//! Nothing here touches the filesystem or the terminal.

pub mod config;
pub mod consts;
pub mod dungeon;
pub mod error;
pub mod monster;
pub mod object;
pub mod rng;

pub use config::GeneratorConfig;
pub use dungeon::{DungeonGenerator, Level};
pub use error::{ConfigError, GenerationError};
pub use rng::GameRng;
