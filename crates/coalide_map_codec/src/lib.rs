//! Level file import/export for the Coalide map editor
//!
//! This crate converts between the in-memory `GridStore` and the JSON level
//! document the game runtime consumes.
//!
//! # Example
//!
//! ```rust,ignore
//! use coalide_map_codec::{export, import, load_level, save_level};
//! use coalide_map_core::TerrainSeeds;
//!
//! let doc = load_level(Path::new("input.json"))?;
//! let store = import(&doc, &TerrainSeeds::default())?;
//! save_level(Path::new("output.json"), &export(&store))?;
//! ```

mod codec;
mod document;
mod loader;

pub use codec::{export, import};
pub use document::{
    CrateRecord, EnemyRecord, LevelDocument, LevelInfo, MushroomRecord, NoPlayer, ObjectRecords,
    OnionRecord, PlayerRecord, PlayerSlot, RamRecord, RockRecord, TerrainGrids, TextureGrids,
};
pub use loader::{
    load_level, load_level_from_bytes, load_level_from_str, save_level, save_level_to_string,
};

use coalide_map_core::GridError;
use thiserror::Error;

/// Error type for level loading and saving
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("Failed to read or write level file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Malformed level document: {0}")]
    MalformedDocument(String),
    #[error("Unknown object type '{0}'")]
    UnknownObjectType(String),
    #[error(transparent)]
    Grid(#[from] GridError),
}
