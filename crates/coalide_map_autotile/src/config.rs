//! Autotile configuration
//!
//! Atlas offsets, decal sprite ids and seed textures. Defaults match the
//! forest tileset the game ships with; a project can override them from TOML.

use crate::AutotileError;
use coalide_map_core::TerrainSeeds;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for an autotile pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AutotileConfig {
    /// Column offset of each material band inside the atlas
    #[serde(default)]
    pub tier_offsets: TierOffsets,
    /// Sprite ids for water edge decals
    #[serde(default)]
    pub decals: DecalSprites,
    /// Textures given to freshly placed terrain
    #[serde(default)]
    pub seeds: TerrainSeeds,
}

impl AutotileConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML. Missing tables fall back to defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, AutotileError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self, AutotileError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

/// Per-tier column offsets added to the shared blob layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierOffsets {
    pub dirt: i32,
    pub ice: i32,
    pub sand: i32,
}

impl Default for TierOffsets {
    fn default() -> Self {
        Self {
            dirt: 0,
            ice: 7,
            sand: 14,
        }
    }
}

/// Water decal sprites keyed by accumulated decal weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecalSprites {
    /// Weight 4: land directly above
    pub edge: i32,
    /// Weight 3: land at both upper diagonals
    pub both_corners: i32,
    /// Weight 1: land at the upper-right diagonal
    pub right_corner: i32,
    /// Weight 2: land at the upper-left diagonal
    pub left_corner: i32,
}

impl Default for DecalSprites {
    fn default() -> Self {
        // Row 7 of the atlas, just below the blob bands
        Self {
            edge: 147,
            both_corners: 148,
            right_corner: 149,
            left_corner: 150,
        }
    }
}

impl DecalSprites {
    /// Sprite for an accumulated weight, if that weight has one
    pub fn sprite_for(&self, weight: u8) -> Option<i32> {
        match weight {
            4 => Some(self.edge),
            3 => Some(self.both_corners),
            1 => Some(self.right_corner),
            2 => Some(self.left_corner),
            _ => None,
        }
    }
}
