//! Corridor stitching
//!
//! A corridor is laid down after the rooms it connects, so the cells around
//! its ends already hold room walls. Each of those cells is rewritten by a
//! fixed rule keyed on the junction it sits at and the tile found there:
//! corners open into straight walls, side walls in the corridor's path are
//! removed. A tile no rule expects is left alone and reported.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::level::Level;
use super::rect::Rect;
use super::tile::WallTile;

/// Where a cell sits relative to the corridor being stitched
///
/// `H*` junctions belong to horizontal corridors and lie in the columns
/// just left and right of the corridor. `V*` junctions belong to vertical
/// corridors and lie in the two rows at either end.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum Junction {
    /// Two rows above the corridor, left
    HLeftCap,
    /// One row above the corridor, left
    HLeftFace,
    /// Beside a corridor row, left
    HLeftSide,
    /// Beside the corridor's last row, left
    HLeftFoot,
    /// One row below the corridor, left
    HLeftBase,
    HRightCap,
    HRightFace,
    HRightSide,
    HRightFoot,
    HRightBase,
    /// Upper room's bottom wall cap, left of the corridor
    VTopLeftCap,
    /// Upper room's bottom wall face, left of the corridor
    VTopLeftFace,
    /// Upper room's bottom wall cap across the corridor
    VTopCap,
    /// Upper room's bottom wall face across the corridor
    VTopFace,
    VTopRightCap,
    VTopRightFace,
    /// Lower room's top wall cap, left of the corridor
    VBottomLeftCap,
    /// Lower room's top wall face, left of the corridor
    VBottomLeftFace,
    VBottomCap,
    VBottomFace,
    VBottomRightCap,
    VBottomRightFace,
}

/// What a rule does to the tile it matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Keep,
    Replace(WallTile),
    Remove,
}

/// A junction whose tile matched no rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StitchDiagnostic {
    pub junction: Junction,
    pub x: i32,
    pub y: i32,
    pub found: Option<WallTile>,
}

/// The rule table
///
/// Returns `None` for combinations the tile set has no answer for.
pub fn transition(junction: Junction, found: Option<WallTile>) -> Option<Transition> {
    use Junction::*;
    use Transition::*;
    use WallTile as W;

    let found = found?;
    let t = match (junction, found) {
        (HLeftCap, W::CornerTopRight) => Replace(W::TopMid),
        (HLeftCap, W::SideMidLeft) => Keep,
        (HLeftFace, W::CornerRight) => Replace(W::Mid),
        (HLeftFace, W::SideMidLeft) => Replace(W::SideFrontLeft),
        (HLeftSide, W::SideMidLeft) => Remove,
        (HLeftFoot, W::SideMidLeft) => Replace(W::SideTopLeft),
        (HLeftFoot, W::CornerBottomRight) => Replace(W::TopMid),
        (HLeftBase, W::SideMidLeft) => Keep,
        (HLeftBase, W::Right) => Replace(W::Mid),

        (HRightCap, W::CornerTopLeft) => Replace(W::TopMid),
        (HRightCap, W::SideMidRight) => Keep,
        (HRightFace, W::CornerLeft) => Replace(W::Mid),
        (HRightFace, W::SideMidRight) => Replace(W::SideFrontRight),
        (HRightSide, W::SideMidRight) => Remove,
        (HRightFoot, W::SideMidRight) => Replace(W::SideTopRight),
        (HRightFoot, W::CornerBottomLeft) => Replace(W::TopMid),
        (HRightBase, W::SideMidRight) => Keep,
        (HRightBase, W::Left) => Replace(W::Mid),

        (VTopLeftCap, W::TopMid) => Replace(W::CornerTopRight),
        (VTopLeftFace, W::Mid) => Replace(W::CornerRight),
        (VTopCap, W::TopMid) => Remove,
        (VTopFace, W::Mid) => Remove,
        (VTopRightCap, W::TopMid) => Replace(W::CornerTopLeft),
        (VTopRightFace, W::Mid) => Replace(W::CornerLeft),

        (VBottomLeftCap, W::TopMid) => Replace(W::CornerBottomRight),
        (VBottomLeftFace, W::Mid) => Replace(W::CornerFrontRight),
        (VBottomCap, W::TopMid) => Remove,
        (VBottomFace, W::Mid) => Remove,
        (VBottomRightCap, W::TopMid) => Replace(W::CornerBottomLeft),
        (VBottomRightFace, W::Mid) => Replace(W::CornerFrontLeft),

        _ => return None,
    };
    Some(t)
}

/// Apply the rule for one junction cell
///
/// Unmatched tiles are logged, recorded on the level, and left as they are.
fn apply(level: &mut Level, junction: Junction, x: i32, y: i32) {
    let found = level.wall_at(x, y);
    match transition(junction, found) {
        Some(Transition::Keep) => {}
        Some(Transition::Replace(tile)) => level.set_wall(x, y, Some(tile)),
        Some(Transition::Remove) => level.set_wall(x, y, None),
        None => {
            log::warn!(
                "stitch: unexpected {} at {} ({}, {})",
                found.map_or("empty cell", WallTile::name),
                junction,
                x,
                y
            );
            level.diagnostics.push(StitchDiagnostic {
                junction,
                x,
                y,
                found,
            });
        }
    }
}

/// Open the rooms on either side of a horizontal corridor into it
pub fn stitch_corridor_h(level: &mut Level, corridor: &Rect) {
    let Rect { x, y, w, h } = *corridor;
    let left = x - 1;
    let right = x + w;

    apply(level, Junction::HLeftCap, left, y - 2);
    apply(level, Junction::HLeftFace, left, y - 1);
    if h > 1 {
        for ly in y..y + h - 1 {
            apply(level, Junction::HLeftSide, left, ly);
        }
    }
    apply(level, Junction::HLeftFoot, left, y + h - 1);
    apply(level, Junction::HLeftBase, left, y + h);

    apply(level, Junction::HRightCap, right, y - 2);
    apply(level, Junction::HRightFace, right, y - 1);
    if h > 1 {
        for ly in y..y + h - 1 {
            apply(level, Junction::HRightSide, right, ly);
        }
    }
    apply(level, Junction::HRightFoot, right, y + h - 1);
    apply(level, Junction::HRightBase, right, y + h);
}

/// Open the rooms above and below a vertical corridor into it
pub fn stitch_corridor_v(level: &mut Level, corridor: &Rect) {
    let Rect { x, y, w, h } = *corridor;
    let left = x - 1;
    let right = x + w;
    let bottom_cap = y + h - 2;
    let bottom_face = y + h - 1;

    apply(level, Junction::VTopLeftCap, left, y - 1);
    apply(level, Junction::VTopLeftFace, left, y);
    for rx in x..x + w {
        apply(level, Junction::VTopCap, rx, y - 1);
        apply(level, Junction::VTopFace, rx, y);
    }
    apply(level, Junction::VTopRightCap, right, y - 1);
    apply(level, Junction::VTopRightFace, right, y);

    apply(level, Junction::VBottomLeftCap, left, bottom_cap);
    apply(level, Junction::VBottomLeftFace, left, bottom_face);
    for rx in x..x + w {
        apply(level, Junction::VBottomCap, rx, bottom_cap);
        apply(level, Junction::VBottomFace, rx, bottom_face);
    }
    apply(level, Junction::VBottomRightCap, right, bottom_cap);
    apply(level, Junction::VBottomRightFace, right, bottom_face);
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_corner_opens_into_straight_wall() {
        assert_eq!(
            transition(Junction::HLeftCap, Some(WallTile::CornerTopRight)),
            Some(Transition::Replace(WallTile::TopMid))
        );
        assert_eq!(
            transition(Junction::HRightCap, Some(WallTile::CornerTopLeft)),
            Some(Transition::Replace(WallTile::TopMid))
        );
    }

    #[test]
    fn test_side_walls_in_path_are_removed() {
        assert_eq!(
            transition(Junction::HLeftSide, Some(WallTile::SideMidLeft)),
            Some(Transition::Remove)
        );
        assert_eq!(
            transition(Junction::HRightSide, Some(WallTile::SideMidRight)),
            Some(Transition::Remove)
        );
        assert_eq!(
            transition(Junction::VTopFace, Some(WallTile::Mid)),
            Some(Transition::Remove)
        );
        assert_eq!(
            transition(Junction::VBottomCap, Some(WallTile::TopMid)),
            Some(Transition::Remove)
        );
    }

    #[test]
    fn test_top_right_junction_uses_same_naming() {
        assert_eq!(
            transition(Junction::VTopRightCap, Some(WallTile::TopMid)),
            Some(Transition::Replace(WallTile::CornerTopLeft))
        );
    }

    #[test]
    fn test_unknown_combinations_are_unhandled() {
        assert_eq!(transition(Junction::HLeftSide, Some(WallTile::Mid)), None);
        assert_eq!(transition(Junction::VTopCap, Some(WallTile::Goo)), None);
        for junction in Junction::iter() {
            assert_eq!(transition(junction, None), None, "{junction}");
        }
    }

    #[test]
    fn test_every_junction_has_a_rule() {
        for junction in Junction::iter() {
            let handled = WallTile::iter().any(|t| transition(junction, Some(t)).is_some());
            assert!(handled, "{junction} has no rule");
        }
    }

    #[test]
    fn test_mismatch_is_recorded_not_fatal() {
        let mut level = Level::new(1, 20, 20);
        level.set_wall(4, 6, Some(WallTile::Goo));
        let corridor = Rect::new(5, 8, 3, 2);
        stitch_corridor_h(&mut level, &corridor);

        // cap at (4, 6) was Goo: untouched, reported
        assert_eq!(level.wall_at(4, 6), Some(WallTile::Goo));
        let goo = level
            .diagnostics
            .iter()
            .find(|d| d.x == 4 && d.y == 6)
            .unwrap();
        assert_eq!(goo.junction, Junction::HLeftCap);
        assert_eq!(goo.found, Some(WallTile::Goo));
        // every other junction cell was empty
        assert!(level.diagnostics.iter().all(|d| d.found.is_none() || d.x == 4));
    }

    #[test]
    fn test_diagnostic_names_in_logs() {
        assert_eq!(Junction::HLeftCap.to_string(), "h_left_cap");
        assert_eq!(Junction::VBottomRightFace.to_string(), "v_bottom_right_face");
    }
}
