//! ASCII rendering of a generated level

use dg_core::Level;
use dg_core::dungeon::{Occupant, Rect};

/// Glyph for one cell; entities win over tiles, walls over floor
pub fn glyph(level: &Level, x: i32, y: i32) -> char {
    match level.occupant_at(x, y) {
        Some(Occupant::Hero) => return '@',
        Some(Occupant::Boss) => return 'B',
        Some(Occupant::Monster(_)) => return 'm',
        None => {}
    }
    if level.has_drop(x, y) {
        return '*';
    }
    if level.wall_at(x, y).is_some() {
        return '#';
    }
    match level.floor_at(x, y) {
        Some(tile) if tile.is_ladder() => '>',
        Some(_) => '.',
        None => ' ',
    }
}

/// Smallest rectangle holding every room and corridor with their walls
fn extent(level: &Level) -> Option<Rect> {
    let bounds = level
        .rooms
        .iter()
        .map(Rect::room_bounds)
        .chain(level.corridors_h.iter().map(Rect::corridor_h_bounds))
        .chain(level.corridors_v.iter().map(Rect::corridor_v_bounds));

    let mut extent: Option<(i32, i32, i32, i32)> = None;
    for b in bounds {
        let (x0, y0, x1, y1) = extent.unwrap_or((b.x, b.y, b.right(), b.bottom()));
        extent = Some((
            x0.min(b.x),
            y0.min(b.y),
            x1.max(b.right()),
            y1.max(b.bottom()),
        ));
    }
    let (x0, y0, x1, y1) = extent?;
    let x0 = x0.max(0);
    let y0 = y0.max(0);
    let area = Rect::new(x0, y0, x1.min(level.width) - x0, y1.min(level.height) - y0);
    // nothing drawn inside the level
    (!area.is_empty()).then_some(area)
}

/// Render the used part of the level, one line per row
pub fn render_ascii(level: &Level) -> String {
    let Some(area) = extent(level) else {
        return String::new();
    };
    let mut out = String::with_capacity(((area.w + 1) * area.h) as usize);
    for y in area.y..area.bottom() {
        let row: String = (area.x..area.right()).map(|x| glyph(level, x, y)).collect();
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}

/// One-line description of what was generated
pub fn summary(level: &Level, seed: u64) -> String {
    let boss = level.boss.as_ref().map_or("none", |b| b.name.as_str());
    let ladder = level
        .ladder_position()
        .map_or_else(|| "none".to_string(), |(x, y)| format!("({x}, {y})"));
    format!(
        "level {} seed {}: {} rooms, {} monsters, boss {}, {} drops, ladder {}",
        level.index,
        seed,
        level.rooms.len(),
        level.monsters.len(),
        boss,
        level.drops.len(),
        ladder
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use dg_core::dungeon::{FixedLayout, FloorTile, Layout, WallTile};
    use dg_core::object::DropKind;
    use dg_core::{DungeonGenerator, GameRng, GeneratorConfig};

    fn level() -> Level {
        let layout = Layout {
            rooms: vec![Rect::new(10, 10, 8, 8), Rect::new(40, 10, 8, 8)],
            ..Layout::default()
        };
        let config = GeneratorConfig {
            width: 60,
            height: 40,
            ..GeneratorConfig::default()
        };
        let mut generator = DungeonGenerator::with_layout(config, FixedLayout::new(layout));
        generator.generate(1, &mut GameRng::new(5)).unwrap()
    }

    #[test]
    fn test_glyph_priority() {
        let mut level = Level::new(1, 10, 10);
        level.set_floor(1, 1, FloorTile::Floor1);
        level.set_floor(2, 1, FloorTile::Ladder);
        level.set_floor(3, 1, FloorTile::Floor1);
        level.set_wall(3, 1, Some(WallTile::SideMidLeft));
        level.set_floor(4, 1, FloorTile::Floor1);
        level.add_drop(DropKind::Coins, 4, 1);
        level.add_drop(DropKind::Axe, 5, 1);
        level.add_monster("imp", 5, 1);
        level.place_hero(6, 1);

        let row: String = (0..8).map(|x| glyph(&level, x, 1)).collect();
        assert_eq!(row, " .>#*m@ ");
    }

    #[test]
    fn test_ascii_is_cropped() {
        let level = level();
        let ascii = render_ascii(&level);
        // room bounds span rows 8..=18
        assert_eq!(ascii.lines().count(), 11);
        assert_eq!(ascii.matches('@').count(), 1);
        assert!(ascii.lines().all(|l| l.len() <= 38));
        assert_eq!(ascii.matches('m').count(), level.monsters.len());
    }

    #[test]
    fn test_summary_line() {
        let level = level();
        let line = summary(&level, 5);
        assert!(line.starts_with("level 1 seed 5: 2 rooms"));
        assert!(line.contains("boss none"));
        assert!(line.ends_with("ladder (44, 14)"));
    }

    #[test]
    fn test_empty_level_renders_nothing() {
        assert_eq!(render_ascii(&Level::new(1, 10, 10)), "");
    }

    #[test]
    fn test_rooms_outside_level_render_nothing() {
        let mut level = Level::new(1, 10, 10);
        level.rooms = vec![Rect::new(30, 30, 7, 7), Rect::new(50, 40, 7, 7)];
        assert_eq!(render_ascii(&level), "");
    }
}
