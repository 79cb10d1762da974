//! Editing session over a single level
//!
//! `LevelEditor` owns the grid store and exposes the operations the editor
//! UI calls: placing and erasing cells, zone tagging, object parameters,
//! autotiling and level files. It never autotiles on its own; call
//! [`LevelEditor::run_autotile`] after terrain edits to refresh textures.

use crate::EditorError;
use coalide_map_autotile::{run_autotile, AutotileConfig, AutotileReport};
use coalide_map_codec::{export, import, load_level, save_level, LevelDocument};
use coalide_map_core::{
    BackgroundCell, BackgroundType, Cell, GridStore, Layer, ObjectCell, ObjectParam, ObjectType,
    TerrainCell, TerrainType,
};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::warn;

/// A level being edited
#[derive(Debug, Clone, Default)]
pub struct LevelEditor {
    store: GridStore,
    config: AutotileConfig,
}

impl LevelEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an editor with a custom autotile configuration
    pub fn with_config(config: AutotileConfig) -> Self {
        Self {
            store: GridStore::new(),
            config,
        }
    }

    pub fn store(&self) -> &GridStore {
        &self.store
    }

    pub fn config(&self) -> &AutotileConfig {
        &self.config
    }

    /// Change the active level size
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<(), EditorError> {
        Ok(self.store.resize(rows, cols)?)
    }

    /// Place a fresh terrain cell, dropping its previous zones
    pub fn place_terrain(
        &mut self,
        row: usize,
        col: usize,
        ttype: TerrainType,
    ) -> Result<(), EditorError> {
        let cell = TerrainCell::with_seeds(ttype, &self.config.seeds);
        Ok(self.store.try_set(row, col, Cell::Terrain(cell))?)
    }

    pub fn place_background(
        &mut self,
        row: usize,
        col: usize,
        btype: BackgroundType,
    ) -> Result<(), EditorError> {
        Ok(self
            .store
            .try_set(row, col, Cell::Background(BackgroundCell::new(btype)))?)
    }

    /// Place an object with default parameters.
    ///
    /// A level has at most one player, so placing one removes any other,
    /// including one left outside the active rectangle by a resize.
    pub fn place_object(
        &mut self,
        row: usize,
        col: usize,
        otype: ObjectType,
    ) -> Result<(), EditorError> {
        GridStore::check_bounds(row, col)?;
        if otype == ObjectType::Player {
            self.store.clear_players();
        }
        self.store.set_object(row, col, ObjectCell::new(otype));
        Ok(())
    }

    /// Reset one cell of a layer to its blank value
    pub fn erase_cell(&mut self, layer: Layer, row: usize, col: usize) -> Result<(), EditorError> {
        let blank = match layer {
            Layer::Terrain => Cell::Terrain(TerrainCell::empty()),
            Layer::Background => Cell::Background(BackgroundCell::water()),
            Layer::Objects => Cell::Object(ObjectCell::empty()),
        };
        Ok(self.store.try_set(row, col, blank)?)
    }

    /// Tag a terrain cell with a zone. Has no effect on empty terrain.
    pub fn add_zone(&mut self, row: usize, col: usize, zone_id: i32) -> Result<(), EditorError> {
        GridStore::check_bounds(row, col)?;
        self.store.terrain_mut(row, col).add_zone(zone_id);
        Ok(())
    }

    pub fn remove_zone(&mut self, row: usize, col: usize, zone_id: i32) -> Result<(), EditorError> {
        GridStore::check_bounds(row, col)?;
        self.store.terrain_mut(row, col).remove_zone(zone_id);
        Ok(())
    }

    /// Zones a terrain cell belongs to
    pub fn zones_at(&self, row: usize, col: usize) -> Result<&BTreeSet<i32>, EditorError> {
        GridStore::check_bounds(row, col)?;
        Ok(self.store.terrain(row, col).zones())
    }

    /// Active cells belonging to a zone
    pub fn zone_members(&self, zone_id: i32) -> BTreeSet<(usize, usize)> {
        self.store.zones().members_of(zone_id)
    }

    pub fn object_at(&self, row: usize, col: usize) -> Result<&ObjectCell, EditorError> {
        GridStore::check_bounds(row, col)?;
        Ok(self.store.object(row, col))
    }

    /// Set a parameter on the object at (row, col).
    ///
    /// Returns `false` when the cell holds no object. Values are stored as
    /// given; the UI is expected to pass positive values, or `-1` for an
    /// unset zone reference.
    pub fn set_object_parameter(
        &mut self,
        row: usize,
        col: usize,
        param: ObjectParam,
        value: i32,
    ) -> Result<bool, EditorError> {
        GridStore::check_bounds(row, col)?;
        let obj = self.store.object_mut(row, col);
        if obj.is_empty() {
            return Ok(false);
        }
        obj.set_parameter(param, value);
        Ok(true)
    }

    pub fn player_location(&self) -> Option<(usize, usize)> {
        self.store.player_location()
    }

    /// Recompute every tier texture and water decal
    pub fn run_autotile(&mut self) -> Result<AutotileReport, EditorError> {
        Ok(run_autotile(&mut self.store, &self.config)?)
    }

    /// Replace the whole level with a document. On failure the current
    /// level is left as it was.
    pub fn load_document(&mut self, doc: &LevelDocument) -> Result<(), EditorError> {
        match import(doc, &self.config.seeds) {
            Ok(store) => {
                self.store = store;
                Ok(())
            }
            Err(e) => {
                warn!("Rejected level document: {}", e);
                Err(e.into())
            }
        }
    }

    pub fn save_document(&self) -> LevelDocument {
        export(&self.store)
    }

    /// Load a level file, replacing the current level
    pub fn load_file(&mut self, path: &Path) -> Result<(), EditorError> {
        let doc = load_level(path)?;
        self.load_document(&doc)
    }

    pub fn save_file(&self, path: &Path) -> Result<(), EditorError> {
        Ok(save_level(path, &self.save_document())?)
    }
}
