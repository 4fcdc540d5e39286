//! Room and corridor layout
//!
//! The generator only consumes rectangles. A `LayoutProvider` proposes them:
//! non-overlapping rooms plus the horizontal and vertical corridors joining
//! them, or `None` when no arrangement fits.
//!
//! `TunnelingLayout` grows a level outward from a central room. Each step
//! picks a placed room and a direction, digs a corridor out of that room and
//! puts a new room at its far end. Corridor geometry is constrained so each
//! end lands on room walls the stitcher has rules for:
//!
//! - horizontal corridors start at least two rows below the top of both
//!   rooms and end at least two rows above their bottoms;
//! - vertical corridors run from the upper room's bottom face row to the
//!   lower room's top face row and stay clear of both rooms' corner columns.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::GeneratorConfig;
use crate::consts::{
    CORRIDOR_H_LENGTH, CORRIDOR_H_THICKNESS, CORRIDOR_V_LENGTH, CORRIDOR_V_THICKNESS,
};
use crate::rng::GameRng;

/// Rooms and corridors for one level
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Entry room first, exit room last
    pub rooms: Vec<Rect>,
    pub corridors_h: Vec<Rect>,
    pub corridors_v: Vec<Rect>,
}

/// Source of level layouts
pub trait LayoutProvider {
    /// Propose `rooms` rooms inside a `width × height` level
    fn generate(
        &mut self,
        rooms: usize,
        width: i32,
        height: i32,
        rng: &mut GameRng,
    ) -> Option<Layout>;
}

/// Replays a layout fixed up front, ignoring the requested room count
#[derive(Debug, Clone)]
pub struct FixedLayout {
    layout: Layout,
}

impl FixedLayout {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }
}

impl LayoutProvider for FixedLayout {
    fn generate(
        &mut self,
        _rooms: usize,
        _width: i32,
        _height: i32,
        _rng: &mut GameRng,
    ) -> Option<Layout> {
        if self.layout.rooms.is_empty() {
            None
        } else {
            Some(self.layout.clone())
        }
    }
}

/// Whether a horizontal corridor joins `left` to `right` on stitchable walls
pub fn joins_h(left: &Rect, right: &Rect, corridor: &Rect) -> bool {
    corridor.w >= 1
        && corridor.h >= 1
        && corridor.x == left.right()
        && corridor.right() == right.x
        && [left, right]
            .iter()
            .all(|r| corridor.y >= r.y + 2 && corridor.bottom() <= r.bottom() - 2)
}

/// Whether a vertical corridor joins `upper` to `lower` on stitchable walls
pub fn joins_v(upper: &Rect, lower: &Rect, corridor: &Rect) -> bool {
    corridor.w >= 1
        && corridor.h >= 4
        && corridor.y == upper.bottom()
        && corridor.bottom() == lower.y
        && [upper, lower]
            .iter()
            .all(|r| corridor.x >= r.x + 2 && corridor.right() <= r.right() - 2)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    East,
    West,
    South,
    North,
}

impl Direction {
    const ALL: [Direction; 4] = [
        Direction::East,
        Direction::West,
        Direction::South,
        Direction::North,
    ];
}

#[derive(Debug, Clone, Copy)]
enum Corridor {
    Horizontal(Rect),
    Vertical(Rect),
}

/// Grows a level room by room from the center
#[derive(Debug, Clone)]
pub struct TunnelingLayout {
    room_min: i32,
    room_max: i32,
    attempts: u32,
}

impl Default for TunnelingLayout {
    fn default() -> Self {
        Self::from_config(&GeneratorConfig::default())
    }
}

impl TunnelingLayout {
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            room_min: config.room_min,
            room_max: config.room_max,
            attempts: config.layout_attempts,
        }
    }

    fn room_size(&self, rng: &mut GameRng) -> (i32, i32) {
        let w = rng.range(self.room_min, self.room_max + 1);
        let h = rng.range(self.room_min, self.room_max + 1);
        (w, h)
    }

    /// Propose a new room and its corridor off `from`
    fn propose(&self, from: &Rect, dir: Direction, rng: &mut GameRng) -> Option<(Rect, Corridor)> {
        let (nw, nh) = self.room_size(rng);
        match dir {
            Direction::East | Direction::West => {
                let len = rng.range(CORRIDOR_H_LENGTH.0, CORRIDOR_H_LENGTH.1 + 1);
                let thick = rng.range(CORRIDOR_H_THICKNESS.0, CORRIDOR_H_THICKNESS.1 + 1);
                let cy = rng.range(from.y + 2, from.bottom() - 2 - thick + 1);
                let ny = rng.range(cy + thick + 2 - nh, cy - 2 + 1);
                let (room, corridor) = if dir == Direction::East {
                    let cx = from.right();
                    (Rect::new(cx + len, ny, nw, nh), Rect::new(cx, cy, len, thick))
                } else {
                    let nx = from.x - len - nw;
                    (Rect::new(nx, ny, nw, nh), Rect::new(nx + nw, cy, len, thick))
                };
                let (left, right) = if dir == Direction::East {
                    (from, &room)
                } else {
                    (&room, from)
                };
                joins_h(left, right, &corridor).then_some((room, Corridor::Horizontal(corridor)))
            }
            Direction::South | Direction::North => {
                let len = rng.range(CORRIDOR_V_LENGTH.0, CORRIDOR_V_LENGTH.1 + 1);
                let thick = rng.range(CORRIDOR_V_THICKNESS.0, CORRIDOR_V_THICKNESS.1 + 1);
                let cx = rng.range(from.x + 2, from.right() - 2 - thick + 1);
                let nx = rng.range(cx + thick + 2 - nw, cx - 2 + 1);
                let (room, corridor) = if dir == Direction::South {
                    let cy = from.bottom();
                    (Rect::new(nx, cy + len, nw, nh), Rect::new(cx, cy, thick, len))
                } else {
                    let cy = from.y - len;
                    (Rect::new(nx, cy - nh, nw, nh), Rect::new(cx, cy, thick, len))
                };
                let (upper, lower) = if dir == Direction::South {
                    (from, &room)
                } else {
                    (&room, from)
                };
                joins_v(upper, lower, &corridor).then_some((room, Corridor::Vertical(corridor)))
            }
        }
    }
}

/// Everything placed so far, with the checks for adding more
struct Placement {
    border: Rect,
    layout: Layout,
}

impl Placement {
    fn room_fits(&self, room: &Rect) -> bool {
        let bounds = room.room_bounds();
        self.border.encloses(&bounds.expand(1))
            && self
                .layout
                .rooms
                .iter()
                .all(|r| !r.room_bounds().expand(1).intersects(&bounds))
            && self.corridors_clear(&bounds)
    }

    fn corridor_fits(&self, corridor: &Corridor, from: usize) -> bool {
        let bounds = match corridor {
            Corridor::Horizontal(c) => c.corridor_h_bounds(),
            Corridor::Vertical(c) => c.corridor_v_bounds(),
        };
        self.border.encloses(&bounds.expand(1))
            && self
                .layout
                .rooms
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != from)
                .all(|(_, r)| !r.room_bounds().expand(1).intersects(&bounds))
            && self.corridors_clear(&bounds)
    }

    fn corridors_clear(&self, bounds: &Rect) -> bool {
        self.layout
            .corridors_h
            .iter()
            .all(|c| !c.corridor_h_bounds().expand(1).intersects(bounds))
            && self
                .layout
                .corridors_v
                .iter()
                .all(|c| !c.corridor_v_bounds().expand(1).intersects(bounds))
    }

    fn push(&mut self, room: Rect, corridor: Corridor) {
        self.layout.rooms.push(room);
        match corridor {
            Corridor::Horizontal(c) => self.layout.corridors_h.push(c),
            Corridor::Vertical(c) => self.layout.corridors_v.push(c),
        }
    }
}

impl LayoutProvider for TunnelingLayout {
    fn generate(
        &mut self,
        rooms: usize,
        width: i32,
        height: i32,
        rng: &mut GameRng,
    ) -> Option<Layout> {
        if rooms == 0 {
            return None;
        }

        let (w, h) = self.room_size(rng);
        let first = Rect::new((width - w) / 2, (height - h) / 2, w, h);
        let mut placement = Placement {
            border: Rect::new(0, 0, width, height),
            layout: Layout::default(),
        };
        if !placement.room_fits(&first) {
            log::debug!("layout: {width}x{height} cannot hold a {w}x{h} room");
            return None;
        }
        placement.layout.rooms.push(first);

        let mut failures = 0;
        while placement.layout.rooms.len() < rooms {
            if failures >= self.attempts {
                log::debug!(
                    "layout: gave up with {} of {} rooms after {} failed candidates",
                    placement.layout.rooms.len(),
                    rooms,
                    failures
                );
                return None;
            }
            let from = rng.range(0, placement.layout.rooms.len() as i32) as usize;
            let dir = Direction::ALL[rng.rn2(4) as usize];
            let origin = placement.layout.rooms[from];
            match self.propose(&origin, dir, rng) {
                Some((room, corridor))
                    if placement.room_fits(&room) && placement.corridor_fits(&corridor, from) =>
                {
                    placement.push(room, corridor);
                }
                _ => failures += 1,
            }
        }

        Some(placement.layout)
    }
}
