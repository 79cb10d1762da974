//! Cell value types for the terrain, background and object layers

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Sentinel for "no texture" in any texture slot
pub const NO_TEXTURE: i32 = -1;

/// Sentinel for an unset aggro/patrol zone reference
pub const UNSET_ZONE: i32 = -1;

/// Material of a terrain cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TerrainType {
    #[default]
    Empty,
    Dirt,
    Ice,
    Sand,
}

impl TerrainType {
    pub const ALL: [TerrainType; 4] = [
        TerrainType::Empty,
        TerrainType::Dirt,
        TerrainType::Ice,
        TerrainType::Sand,
    ];

    /// Name used in level documents
    pub fn name(&self) -> &'static str {
        match self {
            TerrainType::Empty => "empty",
            TerrainType::Dirt => "dirt",
            TerrainType::Ice => "ice",
            TerrainType::Sand => "sand",
        }
    }

    /// Parse a document name back into a terrain type
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

/// Textures a freshly placed terrain cell starts with, before any autotile pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerrainSeeds {
    pub dirt: i32,
    pub ice: i32,
    pub sand: i32,
}

impl Default for TerrainSeeds {
    fn default() -> Self {
        // Row 6 of the atlas; columns 6, 13 and 19
        Self {
            dirt: 132,
            ice: 139,
            sand: 145,
        }
    }
}

/// A floor piece: material, display texture, per-tier textures and zone membership
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerrainCell {
    pub ttype: TerrainType,
    /// Currently displayed texture, read by the autotiler
    pub texture: i32,
    pub t_dirt: i32,
    pub t_ice: i32,
    pub t_sand: i32,
    pub t_water: i32,
    zones: BTreeSet<i32>,
}

impl TerrainCell {
    /// Create a terrain cell with the default seed textures
    pub fn new(ttype: TerrainType) -> Self {
        Self::with_seeds(ttype, &TerrainSeeds::default())
    }

    /// Create a terrain cell, seeding every tier at or below its material.
    ///
    /// Higher tiers sit on top of lower ones, so a sand cell also carries
    /// dirt and ice textures.
    pub fn with_seeds(ttype: TerrainType, seeds: &TerrainSeeds) -> Self {
        let mut cell = Self {
            ttype,
            texture: NO_TEXTURE,
            t_dirt: NO_TEXTURE,
            t_ice: NO_TEXTURE,
            t_sand: NO_TEXTURE,
            t_water: NO_TEXTURE,
            zones: BTreeSet::new(),
        };

        if ttype >= TerrainType::Dirt {
            cell.t_dirt = seeds.dirt;
            cell.texture = seeds.dirt;
        }
        if ttype >= TerrainType::Ice {
            cell.t_ice = seeds.ice;
            cell.texture = seeds.ice;
        }
        if ttype >= TerrainType::Sand {
            cell.t_sand = seeds.sand;
            cell.texture = seeds.sand;
        }

        cell
    }

    pub fn empty() -> Self {
        Self::new(TerrainType::Empty)
    }

    pub fn is_empty(&self) -> bool {
        self.ttype == TerrainType::Empty
    }

    /// Add this cell to a zone. Empty cells never join zones.
    pub fn add_zone(&mut self, zone_id: i32) {
        if self.ttype != TerrainType::Empty {
            self.zones.insert(zone_id);
        }
    }

    /// Remove this cell from a zone, if it was a member
    pub fn remove_zone(&mut self, zone_id: i32) {
        self.zones.remove(&zone_id);
    }

    pub fn has_zone(&self, zone_id: i32) -> bool {
        self.zones.contains(&zone_id)
    }

    /// Zone ids in ascending order
    pub fn zones(&self) -> &BTreeSet<i32> {
        &self.zones
    }
}

impl Default for TerrainCell {
    fn default() -> Self {
        Self::empty()
    }
}

/// Material of a background cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundType {
    Empty,
    #[default]
    Water,
}

/// The layer beneath terrain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundCell {
    pub btype: BackgroundType,
    pub t_water: i32,
    pub t_water_decal: i32,
}

impl BackgroundCell {
    pub fn new(btype: BackgroundType) -> Self {
        Self {
            btype,
            t_water: NO_TEXTURE,
            t_water_decal: NO_TEXTURE,
        }
    }

    pub fn water() -> Self {
        Self::new(BackgroundType::Water)
    }
}

impl Default for BackgroundCell {
    fn default() -> Self {
        Self::water()
    }
}

/// Kind of gameplay object occupying a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    #[default]
    Empty,
    Player,
    Rock,
    Crate,
    Acorn,
    Onion,
    Ram,
    Mushroom,
}

impl ObjectType {
    pub fn name(&self) -> &'static str {
        match self {
            ObjectType::Empty => "empty",
            ObjectType::Player => "player",
            ObjectType::Rock => "rock",
            ObjectType::Crate => "crate",
            ObjectType::Acorn => "acorn",
            ObjectType::Onion => "onion",
            ObjectType::Ram => "ram",
            ObjectType::Mushroom => "mushroom",
        }
    }

    /// Whether a parameter means anything for this object type
    pub fn uses(&self, param: ObjectParam) -> bool {
        use ObjectParam::*;

        match self {
            ObjectType::Empty | ObjectType::Rock => false,
            ObjectType::Crate => matches!(param, Mass),
            ObjectType::Player => matches!(param, Mass | Impulse),
            ObjectType::Acorn => matches!(
                param,
                AggroZone | PatrolZone | AggroRadius | Mass | Cooldown | Impulse
            ),
            ObjectType::Onion => matches!(
                param,
                AggroZone
                    | PatrolZone
                    | AggroRadius
                    | Mass
                    | Cooldown
                    | Impulse
                    | SelfStunDur
                    | PlayerStunDur
            ),
            ObjectType::Ram => matches!(
                param,
                AggroZone | PatrolZone | AggroRadius | Mass | Cooldown | Impulse | PlayerStunDur
            ),
            // Cooldown and impulse apply to the spawned dashers
            ObjectType::Mushroom => matches!(
                param,
                AggroZone | AggroRadius | Mass | Cooldown | Impulse | SpawnRate | SpawnMass
            ),
        }
    }
}

/// Editable gameplay parameter of an object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectParam {
    AggroZone,
    PatrolZone,
    AggroRadius,
    Mass,
    Cooldown,
    Impulse,
    SpawnRate,
    SpawnMass,
    PlayerStunDur,
    SelfStunDur,
}

impl ObjectParam {
    /// Zone references use `-1` for unset; everything else is expected positive
    pub fn is_zone_reference(&self) -> bool {
        matches!(self, ObjectParam::AggroZone | ObjectParam::PatrolZone)
    }
}

/// A gameplay object and its full parameter bag.
///
/// Every field is always present; which ones matter depends on `otype`
/// (see [`ObjectType::uses`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectCell {
    pub otype: ObjectType,
    pub aggro_zone: i32,
    pub patrol_zone: i32,
    pub aggro_radius: i32,
    pub mass: i32,
    pub cooldown: i32,
    pub impulse: i32,
    pub spawn_rate: i32,
    pub spawn_mass: i32,
    pub player_stun_dur: i32,
    pub self_stun_dur: i32,
}

impl ObjectCell {
    pub fn new(otype: ObjectType) -> Self {
        Self {
            otype,
            aggro_zone: UNSET_ZONE,
            patrol_zone: UNSET_ZONE,
            aggro_radius: 50,
            mass: 10,
            cooldown: 50,
            impulse: 10,
            spawn_rate: 10,
            spawn_mass: 5,
            player_stun_dur: 30,
            self_stun_dur: 30,
        }
    }

    pub fn empty() -> Self {
        Self::new(ObjectType::Empty)
    }

    pub fn is_empty(&self) -> bool {
        self.otype == ObjectType::Empty
    }

    /// Read a parameter
    pub fn parameter(&self, param: ObjectParam) -> i32 {
        match param {
            ObjectParam::AggroZone => self.aggro_zone,
            ObjectParam::PatrolZone => self.patrol_zone,
            ObjectParam::AggroRadius => self.aggro_radius,
            ObjectParam::Mass => self.mass,
            ObjectParam::Cooldown => self.cooldown,
            ObjectParam::Impulse => self.impulse,
            ObjectParam::SpawnRate => self.spawn_rate,
            ObjectParam::SpawnMass => self.spawn_mass,
            ObjectParam::PlayerStunDur => self.player_stun_dur,
            ObjectParam::SelfStunDur => self.self_stun_dur,
        }
    }

    /// Store a parameter as given. Input filtering is the caller's job.
    pub fn set_parameter(&mut self, param: ObjectParam, value: i32) {
        let slot = match param {
            ObjectParam::AggroZone => &mut self.aggro_zone,
            ObjectParam::PatrolZone => &mut self.patrol_zone,
            ObjectParam::AggroRadius => &mut self.aggro_radius,
            ObjectParam::Mass => &mut self.mass,
            ObjectParam::Cooldown => &mut self.cooldown,
            ObjectParam::Impulse => &mut self.impulse,
            ObjectParam::SpawnRate => &mut self.spawn_rate,
            ObjectParam::SpawnMass => &mut self.spawn_mass,
            ObjectParam::PlayerStunDur => &mut self.player_stun_dur,
            ObjectParam::SelfStunDur => &mut self.self_stun_dur,
        };
        *slot = value;
    }
}

impl Default for ObjectCell {
    fn default() -> Self {
        Self::empty()
    }
}
