//! Floor classification from raw texture ids
//!
//! The atlas is 21 columns wide, split into three 7-column bands:
//! dirt (0-6), ice (7-13) and sand (14-20). A texture of `-1` is open water.

use serde::{Deserialize, Serialize};

/// Width of the texture atlas in tiles
pub const ATLAS_COLUMNS: i32 = 21;

/// Width of a single material band
pub const TIER_BAND: i32 = 7;

/// What a texture id shows, ordered from lowest to highest layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FloorType {
    /// Not a valid atlas id
    None,
    Water,
    Dirt,
    Ice,
    Sand,
}

impl FloorType {
    pub fn is_water(&self) -> bool {
        *self == FloorType::Water
    }

    /// Whether this floor counts toward a tier's adjacency
    pub fn reaches(&self, tier: Tier) -> bool {
        *self >= tier.floor()
    }
}

/// A material tier that gets its own blob pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    Dirt,
    Ice,
    Sand,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Dirt, Tier::Ice, Tier::Sand];

    /// Lowest floor that belongs to this tier
    pub fn floor(&self) -> FloorType {
        match self {
            Tier::Dirt => FloorType::Dirt,
            Tier::Ice => FloorType::Ice,
            Tier::Sand => FloorType::Sand,
        }
    }
}

/// Classify a texture id by its atlas column
pub fn classify(texture: i32) -> FloorType {
    if texture == -1 {
        return FloorType::Water;
    }
    if texture < 0 {
        return FloorType::None;
    }

    match texture % ATLAS_COLUMNS {
        column if column < TIER_BAND => FloorType::Dirt,
        column if column < 2 * TIER_BAND => FloorType::Ice,
        _ => FloorType::Sand,
    }
}
