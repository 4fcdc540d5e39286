//! Item drops scattered through a level

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoStaticStr};

/// Index into `Level::drops`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DropId(pub usize);

/// What a drop is; the name is the item sprite
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
#[strum(serialize_all = "snake_case")]
pub enum DropKind {
    Coins,
    HealthFlask,
    HealthBigFlask,
    ManaFlask,
    ManaBigFlask,
    Knife,
    RustySword,
    RegularSword,
    Hammer,
    Axe,
}

impl DropKind {
    /// Drop pool, picked uniformly
    pub const POOL: [DropKind; 10] = [
        DropKind::Coins,
        DropKind::HealthFlask,
        DropKind::HealthBigFlask,
        DropKind::ManaFlask,
        DropKind::ManaBigFlask,
        DropKind::Knife,
        DropKind::RustySword,
        DropKind::RegularSword,
        DropKind::Hammer,
        DropKind::Axe,
    ];

    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// An item lying on the floor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drop {
    pub id: DropId,
    pub kind: DropKind,
    pub x: i32,
    pub y: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_pool_covers_every_kind() {
        assert_eq!(DropKind::POOL.len(), DropKind::iter().count());
        assert!(DropKind::iter().all(|k| DropKind::POOL.contains(&k)));
    }

    #[test]
    fn test_names() {
        assert_eq!(DropKind::HealthBigFlask.name(), "health_big_flask");
    }
}
