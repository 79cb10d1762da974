//! Tile level authoring core for Coalide
//!
//! This crate ties the level data model, the autotiler and the level codec
//! together behind [`LevelEditor`], the surface the editor UI drives.
//!
//! # Example
//!
//! ```rust,ignore
//! use coalide_map::{LevelEditor, ObjectType, TerrainType};
//!
//! let mut editor = LevelEditor::new();
//! editor.resize(12, 16)?;
//! editor.place_terrain(3, 3, TerrainType::Dirt)?;
//! editor.add_zone(3, 3, 1)?;
//! editor.place_object(3, 3, ObjectType::Acorn)?;
//! editor.run_autotile()?;
//! editor.save_file(Path::new("output.json"))?;
//! ```

mod editor;

pub use editor::LevelEditor;

pub use coalide_map_autotile::{
    classify, AutotileConfig, AutotileError, AutotileReport, FloorType, Tier,
};
pub use coalide_map_codec::{LevelDocument, LevelError};
pub use coalide_map_core::{
    BackgroundCell, BackgroundType, Cell, GridError, GridStore, Layer, ObjectCell, ObjectParam,
    ObjectType, TerrainCell, TerrainSeeds, TerrainType, Zones, CAP, NO_TEXTURE, UNSET_ZONE,
};

// Re-export the member crates
pub use coalide_map_autotile;
pub use coalide_map_codec;
pub use coalide_map_core;

use thiserror::Error;

/// Error type for editor operations
#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Autotile(#[from] AutotileError),
    #[error(transparent)]
    Level(#[from] LevelError),
}
