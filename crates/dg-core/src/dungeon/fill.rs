//! Room and corridor filling
//!
//! Rooms get floor plus a full wall perimeter. Corridors get floor, then
//! their ends are stitched into the rooms already drawn, then the sides
//! that face open space get plain walls.

use super::level::Level;
use super::rect::Rect;
use super::stitch::{stitch_corridor_h, stitch_corridor_v};
use super::tile::{FloorTile, WallTile};

/// Fill every room, then every horizontal and vertical corridor
pub fn fill_level(level: &mut Level) {
    let rooms = level.rooms.clone();
    for room in &rooms {
        fill_room(level, room);
    }
    let corridors_h = level.corridors_h.clone();
    for corridor in &corridors_h {
        fill_corridor_h(level, corridor);
    }
    let corridors_v = level.corridors_v.clone();
    for corridor in &corridors_v {
        fill_corridor_v(level, corridor);
    }
}

fn fill_floor(level: &mut Level, rect: &Rect) {
    for (x, y) in rect.cells() {
        level.set_floor(x, y, FloorTile::Floor1);
    }
}

/// Lay down a room's floor and wall perimeter
///
/// Top walls take the two rows above the floor, bottom walls the last floor
/// row and the one below it, and side walls overlay the outer floor columns.
/// A one-wide room gets only its left corner caps.
pub fn fill_room(level: &mut Level, room: &Rect) {
    let Rect { x, y, w, h } = *room;

    fill_floor(level, room);

    // top wall
    level.set_wall(x, y - 2, Some(WallTile::CornerTopLeft));
    level.set_wall(x, y - 1, Some(WallTile::CornerLeft));
    if w > 1 {
        for rx in x + 1..x + w - 1 {
            level.set_wall(rx, y - 2, Some(WallTile::TopMid));
            level.set_wall(rx, y - 1, Some(WallTile::Mid));
        }
        level.set_wall(x + w - 1, y - 2, Some(WallTile::CornerTopRight));
        level.set_wall(x + w - 1, y - 1, Some(WallTile::CornerRight));
    }

    // bottom wall
    level.set_wall(x, y + h - 1, Some(WallTile::CornerBottomLeft));
    level.set_wall(x, y + h, Some(WallTile::Left));
    if w > 1 {
        for rx in x + 1..x + w - 1 {
            level.set_wall(rx, y + h - 1, Some(WallTile::TopMid));
            level.set_wall(rx, y + h, Some(WallTile::Mid));
        }
        level.set_wall(x + w - 1, y + h - 1, Some(WallTile::CornerBottomRight));
        level.set_wall(x + w - 1, y + h, Some(WallTile::Right));

        // side walls
        for ry in y..y + h - 1 {
            level.set_wall(x, ry, Some(WallTile::SideMidRight));
            level.set_wall(x + w - 1, ry, Some(WallTile::SideMidLeft));
        }
    }
}

/// Lay down a horizontal corridor between a room on its left and one on its right
pub fn fill_corridor_h(level: &mut Level, corridor: &Rect) {
    let Rect { x, y, w, h } = *corridor;

    fill_floor(level, corridor);
    stitch_corridor_h(level, corridor);

    for rx in x..x + w {
        level.set_wall(rx, y - 2, Some(WallTile::TopMid));
        level.set_wall(rx, y - 1, Some(WallTile::Mid));
        level.set_wall(rx, y + h - 1, Some(WallTile::TopMid));
        level.set_wall(rx, y + h, Some(WallTile::Mid));
    }
}

/// Lay down a vertical corridor between a room above and one below
///
/// The corridor spans from the upper room's bottom face row down to the
/// lower room's top face row.
pub fn fill_corridor_v(level: &mut Level, corridor: &Rect) {
    let Rect { x, y, w, h } = *corridor;

    fill_floor(level, corridor);
    stitch_corridor_v(level, corridor);

    for ry in y + 1..y + h - 2 {
        level.set_wall(x - 1, ry, Some(WallTile::SideMidLeft));
        level.set_wall(x + w, ry, Some(WallTile::SideMidRight));
    }
}
