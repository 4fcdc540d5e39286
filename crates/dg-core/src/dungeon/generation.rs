//! Level generation
//!
//! Runs the whole pipeline for one level: layout, fill and stitch, entity
//! placement, decoration, ladder, hero. Random draws happen in that order,
//! so a seed plus a level index always gives the same level.

use super::decorate::{add_wall_features, place_ladder, vary_floor};
use super::fill::fill_level;
use super::layout::{LayoutProvider, TunnelingLayout};
use super::level::Level;
use super::populate::populate;
use crate::config::GeneratorConfig;
use crate::error::GenerationError;
use crate::rng::GameRng;

/// Builds levels from a config and a layout provider
pub struct DungeonGenerator<L = TunnelingLayout> {
    config: GeneratorConfig,
    layout: L,
}

impl DungeonGenerator<TunnelingLayout> {
    /// Generator with the default tunneling layout
    pub fn new(config: GeneratorConfig) -> Self {
        let layout = TunnelingLayout::from_config(&config);
        Self { config, layout }
    }
}

impl Default for DungeonGenerator<TunnelingLayout> {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl<L: LayoutProvider> DungeonGenerator<L> {
    pub fn with_layout(config: GeneratorConfig, layout: L) -> Self {
        Self { config, layout }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate level `index` (1-based)
    pub fn generate(&mut self, index: u32, rng: &mut GameRng) -> Result<Level, GenerationError> {
        self.config.validate()?;
        let config = &self.config;
        let rooms = config.room_count(index);

        let layout = self
            .layout
            .generate(rooms, config.width, config.height, rng)
            .ok_or(GenerationError::Layout {
                level: index,
                rooms,
            })?;
        log::debug!(
            "level {index}: layout with {} rooms, {} horizontal and {} vertical corridors",
            layout.rooms.len(),
            layout.corridors_h.len(),
            layout.corridors_v.len()
        );

        let mut level = Level::new(index, config.width, config.height);
        level.rooms = layout.rooms;
        level.corridors_h = layout.corridors_h;
        level.corridors_v = layout.corridors_v;

        fill_level(&mut level);
        if !level.diagnostics.is_empty() {
            log::warn!(
                "level {index}: {} junctions left unstitched",
                level.diagnostics.len()
            );
        }

        populate(&mut level, config, rng);

        let varied = vary_floor(&mut level, config.floor_variety_chance, rng);
        let features = add_wall_features(&mut level, config.wall_feature_chance, rng);
        log::trace!("level {index}: {varied} floor variants, {features} wall features");

        place_ladder(&mut level);
        if let Some((x, y)) = level.hero_spawn() {
            level.place_hero(x, y);
        }

        Ok(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::layout::{FixedLayout, Layout};
    use crate::dungeon::rect::Rect;
    use crate::dungeon::tile::FloorTile;
    use crate::error::ConfigError;

    fn small_config() -> GeneratorConfig {
        GeneratorConfig {
            width: 120,
            height: 120,
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn test_generate_level_one() {
        let mut generator = DungeonGenerator::new(small_config());
        let mut rng = GameRng::new(42);
        let level = generator.generate(1, &mut rng).unwrap();

        assert_eq!(level.index, 1);
        assert_eq!(level.rooms.len(), 2);
        assert_eq!(level.hero, level.hero_spawn());
        assert_eq!(level.ladder_position(), Some(level.rooms[1].center()));
        assert!(level.boss.is_none());
        assert!(level.diagnostics.is_empty());
    }

    #[test]
    fn test_same_seed_same_level() {
        let mut a = DungeonGenerator::new(small_config());
        let mut b = DungeonGenerator::new(small_config());
        let la = a.generate(3, &mut GameRng::new(7)).unwrap();
        let lb = b.generate(3, &mut GameRng::new(7)).unwrap();
        assert_eq!(la, lb);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GeneratorConfig {
            boss_interval: 0,
            ..GeneratorConfig::default()
        };
        let mut generator = DungeonGenerator::new(config);
        let err = generator.generate(1, &mut GameRng::new(1)).unwrap_err();
        assert_eq!(err, GenerationError::Config(ConfigError::ZeroBossInterval));
    }

    #[test]
    fn test_layout_failure_surfaces() {
        let mut generator =
            DungeonGenerator::with_layout(small_config(), FixedLayout::new(Layout::default()));
        let err = generator.generate(2, &mut GameRng::new(1)).unwrap_err();
        assert_eq!(err, GenerationError::Layout { level: 2, rooms: 3 });
    }

    #[test]
    fn test_single_room_level() {
        let room = Rect::new(20, 20, 9, 9);
        let layout = Layout {
            rooms: vec![room],
            ..Layout::default()
        };
        let mut generator = DungeonGenerator::with_layout(small_config(), FixedLayout::new(layout));
        let level = generator.generate(5, &mut GameRng::new(3)).unwrap();

        // entry and exit coincide, hero stands on the ladder
        assert_eq!(level.hero, Some(room.center()));
        assert_eq!(level.ladder_position(), Some(room.center()));
        assert_eq!(level.floor_at(24, 24), Some(FloorTile::Ladder));
        assert!(level.monsters.is_empty());
        assert!(level.boss.is_none());
    }
}
