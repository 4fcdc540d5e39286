//! Tile vocabulary
//!
//! Floors and walls are two closed sets of named tiles. The names are the
//! sprite identifiers the tile registry resolves; the generator never looks
//! past the identity.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoStaticStr};

/// Tiles that live in the floor layer
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    IntoStaticStr,
)]
pub enum FloorTile {
    #[strum(serialize = "floor_1.png")]
    Floor1,
    #[strum(serialize = "floor_2.png")]
    Floor2,
    #[strum(serialize = "floor_3.png")]
    Floor3,
    #[strum(serialize = "floor_4.png")]
    Floor4,
    #[strum(serialize = "floor_5.png")]
    Floor5,
    #[strum(serialize = "floor_6.png")]
    Floor6,
    #[strum(serialize = "floor_7.png")]
    Floor7,
    #[strum(serialize = "floor_8.png")]
    Floor8,
    #[strum(serialize = "floor_ladder.png")]
    Ladder,
    #[strum(serialize = "wall_goo_base.png")]
    GooBase,
    #[strum(serialize = "wall_fountain_basin_red.png")]
    FountainBasinRed,
    #[strum(serialize = "wall_fountain_basin_blue.png")]
    FountainBasinBlue,
}

impl FloorTile {
    /// Cosmetic replacements for plain floor
    pub const VARIANTS: [FloorTile; 7] = [
        FloorTile::Floor2,
        FloorTile::Floor3,
        FloorTile::Floor4,
        FloorTile::Floor5,
        FloorTile::Floor6,
        FloorTile::Floor7,
        FloorTile::Floor8,
    ];

    /// Sprite name
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub const fn is_ladder(self) -> bool {
        matches!(self, FloorTile::Ladder)
    }
}

/// Tiles that live in the wall layer
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    IntoStaticStr,
)]
pub enum WallTile {
    #[strum(serialize = "wall_top_mid.png")]
    TopMid,
    #[strum(serialize = "wall_mid.png")]
    Mid,
    #[strum(serialize = "wall_left.png")]
    Left,
    #[strum(serialize = "wall_right.png")]
    Right,
    #[strum(serialize = "wall_corner_top_left.png")]
    CornerTopLeft,
    #[strum(serialize = "wall_corner_top_right.png")]
    CornerTopRight,
    #[strum(serialize = "wall_corner_left.png")]
    CornerLeft,
    #[strum(serialize = "wall_corner_right.png")]
    CornerRight,
    #[strum(serialize = "wall_corner_bottom_left.png")]
    CornerBottomLeft,
    #[strum(serialize = "wall_corner_bottom_right.png")]
    CornerBottomRight,
    #[strum(serialize = "wall_corner_front_left.png")]
    CornerFrontLeft,
    #[strum(serialize = "wall_corner_front_right.png")]
    CornerFrontRight,
    #[strum(serialize = "wall_side_mid_left.png")]
    SideMidLeft,
    #[strum(serialize = "wall_side_mid_right.png")]
    SideMidRight,
    #[strum(serialize = "wall_side_front_left.png")]
    SideFrontLeft,
    #[strum(serialize = "wall_side_front_right.png")]
    SideFrontRight,
    #[strum(serialize = "wall_side_top_left.png")]
    SideTopLeft,
    #[strum(serialize = "wall_side_top_right.png")]
    SideTopRight,
    #[strum(serialize = "wall_hole_1.png")]
    Hole1,
    #[strum(serialize = "wall_hole_2.png")]
    Hole2,
    #[strum(serialize = "wall_banner_red.png")]
    BannerRed,
    #[strum(serialize = "wall_banner_blue.png")]
    BannerBlue,
    #[strum(serialize = "wall_banner_green.png")]
    BannerGreen,
    #[strum(serialize = "wall_banner_yellow.png")]
    BannerYellow,
    #[strum(serialize = "wall_goo.png")]
    Goo,
    #[strum(serialize = "wall_fountain_top.png")]
    FountainTop,
    #[strum(serialize = "wall_fountain_mid_red.png")]
    FountainMidRed,
    #[strum(serialize = "wall_fountain_mid_blue.png")]
    FountainMidBlue,
}

impl WallTile {
    /// Sprite name
    pub fn name(self) -> &'static str {
        self.into()
    }
}
