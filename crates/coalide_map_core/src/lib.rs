//! Core level data for the Coalide map editor
//!
//! This crate provides the canonical in-memory representation of a level:
//! - `GridStore` - Fixed-capacity terrain, background and object layers
//! - `TerrainCell` / `BackgroundCell` / `ObjectCell` - Per-layer cell values
//! - `Zones` - Zone membership derived from the terrain layer

mod cell;
mod error;
mod grid;
mod zone;

pub use cell::{
    BackgroundCell, BackgroundType, ObjectCell, ObjectParam, ObjectType, TerrainCell,
    TerrainSeeds, TerrainType, NO_TEXTURE, UNSET_ZONE,
};
pub use error::GridError;
pub use grid::{Cell, GridStore, Layer, CAP, DEFAULT_DIMENSION, MAX_DIMENSION};
pub use zone::Zones;
