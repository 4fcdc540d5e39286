//! Cosmetic passes over a finished, stitched level
//!
//! Floor variety swaps plain floor for one of the textured variants. Wall
//! features swap plain wall faces for holes, banners, ooze and fountains;
//! some features also draw into the cells above and below. The ladder goes
//! down last so nothing paints over it.

use super::level::{Level, Point};
use super::tile::{FloorTile, WallTile};
use crate::rng::GameRng;

/// Features for a wall face with floor below it
pub const TOP_WALL_FEATURES: [WallTile; 9] = [
    WallTile::Hole1,
    WallTile::Hole2,
    WallTile::BannerRed,
    WallTile::BannerBlue,
    WallTile::BannerGreen,
    WallTile::BannerYellow,
    WallTile::Goo,
    WallTile::FountainMidRed,
    WallTile::FountainMidBlue,
];

/// Features for a wall face with nothing below it
pub const BOTTOM_WALL_FEATURES: [WallTile; 2] = [WallTile::Hole1, WallTile::Hole2];

/// Swap floor cells for a random variant with probability `chance`
pub fn vary_floor(level: &mut Level, chance: f64, rng: &mut GameRng) -> usize {
    let mut replaced = 0;
    for y in 0..level.height {
        for x in 0..level.width {
            if level.floor_at(x, y).is_some()
                && rng.chance(chance)
                && let Some(&tile) = rng.choose(&FloorTile::VARIANTS)
            {
                level.set_floor(x, y, tile);
                replaced += 1;
            }
        }
    }
    replaced
}

/// Cells a wall feature writes, checked before anything is drawn
struct FeatureStamp {
    above: Option<WallTile>,
    wall: WallTile,
    below: Option<FloorTile>,
}

impl FeatureStamp {
    fn for_feature(feature: WallTile) -> Self {
        let (above, below) = match feature {
            WallTile::Goo => (None, Some(FloorTile::GooBase)),
            WallTile::FountainMidRed => {
                (Some(WallTile::FountainTop), Some(FloorTile::FountainBasinRed))
            }
            WallTile::FountainMidBlue => {
                (Some(WallTile::FountainTop), Some(FloorTile::FountainBasinBlue))
            }
            _ => (None, None),
        };
        Self {
            above,
            wall: feature,
            below,
        }
    }

    /// Draw the whole feature, or nothing if part of it falls off the level
    fn apply(&self, level: &mut Level, x: i32, y: i32) -> bool {
        let fits = (self.above.is_none() || level.in_bounds(x, y - 1))
            && (self.below.is_none() || level.in_bounds(x, y + 1));
        if !fits {
            return false;
        }
        if let Some(top) = self.above {
            level.set_wall(x, y - 1, Some(top));
        }
        level.set_wall(x, y, Some(self.wall));
        if let Some(base) = self.below {
            level.set_floor(x, y + 1, base);
        }
        true
    }
}

/// Swap plain wall faces for features with probability `chance`
///
/// A face with floor directly below it faces into a room or corridor and
/// draws from the full palette; other faces only get holes.
pub fn add_wall_features(level: &mut Level, chance: f64, rng: &mut GameRng) -> usize {
    let mut placed = 0;
    for y in 0..level.height {
        for x in 0..level.width {
            if level.wall_at(x, y) != Some(WallTile::Mid) || !rng.chance(chance) {
                continue;
            }
            let palette: &[WallTile] = if level.floor_at(x, y + 1).is_some() {
                &TOP_WALL_FEATURES
            } else {
                &BOTTOM_WALL_FEATURES
            };
            let Some(&feature) = rng.choose(palette) else {
                continue;
            };
            if FeatureStamp::for_feature(feature).apply(level, x, y) {
                placed += 1;
            }
        }
    }
    placed
}

/// Put the exit ladder on the center of the last room
pub fn place_ladder(level: &mut Level) -> Option<Point> {
    let (x, y) = level.exit_room()?.center();
    level.set_floor(x, y, FloorTile::Ladder);
    Some((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::fill::fill_room;
    use crate::dungeon::rect::Rect;

    fn filled(room: Rect) -> Level {
        let mut level = Level::new(1, 40, 40);
        level.rooms.push(room);
        fill_room(&mut level, &room);
        level
    }

    #[test]
    fn test_floor_pass_zero_chance_is_noop() {
        let mut level = filled(Rect::new(5, 5, 8, 8));
        let before = level.clone();
        let mut rng = GameRng::new(1);
        assert_eq!(vary_floor(&mut level, 0.0, &mut rng), 0);
        assert_eq!(level, before);
    }

    #[test]
    fn test_floor_pass_full_chance_replaces_every_floor() {
        let room = Rect::new(5, 5, 8, 8);
        let mut level = filled(room);
        let mut rng = GameRng::new(1);
        assert_eq!(vary_floor(&mut level, 1.0, &mut rng), 64);
        assert_eq!(level.count_floor(FloorTile::Floor1), 0);
        for (x, y) in room.cells() {
            assert!(FloorTile::VARIANTS.contains(&level.floor_at(x, y).unwrap()));
        }
        // structure untouched
        assert_eq!(level.walls, filled(room).walls);
    }

    #[test]
    fn test_wall_pass_only_touches_plain_faces() {
        let room = Rect::new(5, 5, 8, 8);
        let mut level = filled(room);
        let before = level.clone();
        let mut rng = GameRng::new(3);
        add_wall_features(&mut level, 1.0, &mut rng);

        for (x, y, tile) in before.walls.iter() {
            if tile != WallTile::Mid && tile != WallTile::TopMid {
                assert_eq!(level.wall_at(x, y), Some(tile), "({x}, {y})");
            }
        }
        assert_eq!(level.count_wall(WallTile::Mid), 0);
    }

    #[test]
    fn test_bottom_faces_only_get_holes() {
        let room = Rect::new(5, 5, 8, 8);
        let mut level = filled(room);
        let mut rng = GameRng::new(5);
        add_wall_features(&mut level, 1.0, &mut rng);
        for x in 6..12 {
            let tile = level.wall_at(x, room.bottom()).unwrap();
            assert!(BOTTOM_WALL_FEATURES.contains(&tile), "{tile}");
        }
    }

    #[test]
    fn test_fountain_draws_all_three_cells() {
        let mut level = Level::new(1, 10, 10);
        level.set_wall(4, 4, Some(WallTile::Mid));
        level.set_floor(4, 5, FloorTile::Floor1);
        assert!(FeatureStamp::for_feature(WallTile::FountainMidBlue).apply(&mut level, 4, 4));
        assert_eq!(level.wall_at(4, 3), Some(WallTile::FountainTop));
        assert_eq!(level.wall_at(4, 4), Some(WallTile::FountainMidBlue));
        assert_eq!(level.floor_at(4, 5), Some(FloorTile::FountainBasinBlue));
    }

    #[test]
    fn test_ooze_draws_base() {
        let mut level = Level::new(1, 10, 10);
        level.set_wall(4, 4, Some(WallTile::Mid));
        level.set_floor(4, 5, FloorTile::Floor1);
        assert!(FeatureStamp::for_feature(WallTile::Goo).apply(&mut level, 4, 4));
        assert_eq!(level.wall_at(4, 3), None);
        assert_eq!(level.wall_at(4, 4), Some(WallTile::Goo));
        assert_eq!(level.floor_at(4, 5), Some(FloorTile::GooBase));
    }

    #[test]
    fn test_feature_off_the_edge_draws_nothing() {
        let mut level = Level::new(1, 10, 10);
        level.set_wall(4, 0, Some(WallTile::Mid));
        assert!(!FeatureStamp::for_feature(WallTile::FountainMidRed).apply(&mut level, 4, 0));
        assert_eq!(level.wall_at(4, 0), Some(WallTile::Mid));
        assert_eq!(level.floor_at(4, 1), None);
        assert_eq!(level.walls.count(), 1);
    }

    #[test]
    fn test_ladder_on_last_room_center() {
        let mut level = Level::new(1, 60, 40);
        level.rooms = vec![Rect::new(3, 3, 7, 7), Rect::new(30, 10, 9, 8)];
        assert_eq!(place_ladder(&mut level), Some((34, 14)));
        assert_eq!(level.ladder_position(), Some((34, 14)));
        assert_eq!(Level::new(1, 5, 5).exit_room(), None);
    }
}
