//! Serde model of a level document
//!
//! Field names follow the JSON the game runtime reads.

use coalide_map_core::TerrainType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A complete level file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelDocument {
    pub level_info: LevelInfo,
    /// Autotiled textures. Absent in levels saved before autotiling existed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub textures: Option<TextureGrids>,
    pub terrain: TerrainGrids,
    pub objects: ObjectRecords,
}

/// Active level size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelInfo {
    pub rows: usize,
    pub cols: usize,
}

/// Per-cell texture ids, each `rows x cols`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextureGrids {
    pub water_decals: Vec<Vec<i32>>,
    pub water: Vec<Vec<i32>>,
    /// Dirt tier; the runtime calls it grass
    pub grass: Vec<Vec<i32>>,
    pub ice: Vec<Vec<i32>>,
    pub sand: Vec<Vec<i32>>,
}

/// Terrain materials and zone lists, each `rows x cols`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TerrainGrids {
    pub types: Vec<Vec<TerrainType>>,
    pub zones: Vec<Vec<Vec<i32>>>,
}

/// Placed objects grouped by type
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ObjectRecords {
    pub player: PlayerSlot,
    pub rocks: Vec<RockRecord>,
    pub crates: Vec<CrateRecord>,
    pub acorns: Vec<EnemyRecord>,
    pub onions: Vec<OnionRecord>,
    pub rams: Vec<RamRecord>,
    pub mushrooms: Vec<MushroomRecord>,
    /// Keys that are not a known object group; rejected on import
    #[serde(flatten)]
    pub unknown: BTreeMap<String, serde_json::Value>,
}

/// The single player, written as `{}` when the level has none
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlayerSlot {
    Placed(PlayerRecord),
    Absent(NoPlayer),
}

/// The `{}` written in place of a player record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoPlayer {}

impl Default for PlayerSlot {
    fn default() -> Self {
        PlayerSlot::Absent(NoPlayer {})
    }
}

impl PlayerSlot {
    pub fn record(&self) -> Option<&PlayerRecord> {
        match self {
            PlayerSlot::Placed(record) => Some(record),
            PlayerSlot::Absent(_) => None,
        }
    }
}

impl From<Option<PlayerRecord>> for PlayerSlot {
    fn from(record: Option<PlayerRecord>) -> Self {
        record.map_or_else(PlayerSlot::default, PlayerSlot::Placed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub row: usize,
    pub col: usize,
    pub mass: i32,
    pub impulse: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RockRecord {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrateRecord {
    pub row: usize,
    pub col: usize,
    pub mass: i32,
}

/// Fields shared by every dashing enemy. Acorns use exactly these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnemyRecord {
    pub row: usize,
    pub col: usize,
    pub aggro_zone: i32,
    pub patrol_zone: i32,
    pub aggro_radius: i32,
    pub mass: i32,
    pub dash_cooldown: i32,
    pub impulse: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnionRecord {
    #[serde(flatten)]
    pub enemy: EnemyRecord,
    pub self_stun_dur: i32,
    pub player_stun_dur: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RamRecord {
    #[serde(flatten)]
    pub enemy: EnemyRecord,
    pub player_stun_dur: i32,
}

fn default_spawn_rate() -> i32 {
    10
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MushroomRecord {
    pub row: usize,
    pub col: usize,
    pub aggro_zone: i32,
    pub aggro_radius: i32,
    pub mass: i32,
    pub spawn_mass: i32,
    pub spawn_dash_cooldown: i32,
    pub spawn_impulse: i32,
    #[serde(default = "default_spawn_rate")]
    pub spawn_rate: i32,
}
