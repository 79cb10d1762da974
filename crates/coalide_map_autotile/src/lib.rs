//! Layered blob autotiling for Coalide levels
//!
//! This crate turns raw terrain adjacency into atlas texture ids.
//!
//! # Features
//! - Texture classification into dirt/ice/sand/water bands
//! - 47-tile blob bitmask with corner suppression
//! - Three stacked material tiers (higher tiers count toward lower ones)
//! - Water edge decals along shorelines
//!
//! # Example
//!
//! ```rust,ignore
//! use coalide_map_autotile::{run_autotile, AutotileConfig};
//! use coalide_map_core::{GridStore, TerrainCell, TerrainType};
//!
//! let mut store = GridStore::new();
//! store.set_terrain(3, 3, TerrainCell::new(TerrainType::Sand));
//!
//! let report = run_autotile(&mut store, &AutotileConfig::default())?;
//! ```

pub mod blob;
pub mod config;
pub mod decal;
pub mod floor;
pub mod resolver;

use thiserror::Error;

pub use blob::{blob_position, blob_texture, calculate_bitmask, neighbors, optimize_bitmask};
pub use config::{AutotileConfig, DecalSprites, TierOffsets};
pub use decal::{decal_weight, water_decal_weights};
pub use floor::{classify, FloorType, Tier, ATLAS_COLUMNS, TIER_BAND};
pub use resolver::{run_autotile, run_autotile_with_layout, tier_bitmask, AutotileReport, BlobLayout};

// Re-export coalide_map_core
pub use coalide_map_core;

/// Error type for autotiling
#[derive(Debug, Error)]
pub enum AutotileError {
    #[error("No blob tile for neighbor mask {combined} at ({row}, {col})")]
    UnmappedBlobCombination { row: usize, col: usize, combined: u8 },
    #[error("Failed to read autotile config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse autotile config: {0}")]
    Config(#[from] toml::de::Error),
}
