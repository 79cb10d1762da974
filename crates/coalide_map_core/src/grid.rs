//! Fixed-capacity backing store for the three level layers

use crate::cell::{BackgroundCell, ObjectCell, ObjectType, TerrainCell};
use crate::error::GridError;
use serde::{Deserialize, Serialize};

/// Side length of the backing arrays
pub const CAP: usize = 100;

/// Largest active level size along either axis
pub const MAX_DIMENSION: usize = CAP - 1;

/// Active size of a freshly created store
pub const DEFAULT_DIMENSION: usize = 10;

/// One of the three parallel layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layer {
    Terrain,
    Background,
    Objects,
}

/// A cell value from any layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Terrain(TerrainCell),
    Background(BackgroundCell),
    Object(ObjectCell),
}

impl Cell {
    /// The layer this value belongs to
    pub fn layer(&self) -> Layer {
        match self {
            Cell::Terrain(_) => Layer::Terrain,
            Cell::Background(_) => Layer::Background,
            Cell::Object(_) => Layer::Objects,
        }
    }
}

/// Three `CAP x CAP` layers plus the active sub-rectangle.
///
/// Every cell always holds a well-formed value. Cells outside the active
/// `rows x cols` rectangle keep whatever they held before the last resize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridStore {
    terrain: Vec<TerrainCell>,
    background: Vec<BackgroundCell>,
    objects: Vec<ObjectCell>,
    rows: usize,
    cols: usize,
}

impl GridStore {
    /// Create a store full of empty terrain over water with no objects
    pub fn new() -> Self {
        let size = CAP * CAP;
        Self {
            terrain: vec![TerrainCell::empty(); size],
            background: vec![BackgroundCell::water(); size],
            objects: vec![ObjectCell::empty(); size],
            rows: DEFAULT_DIMENSION,
            cols: DEFAULT_DIMENSION,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Change the active rectangle without touching any cell content
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<(), GridError> {
        if !(1..=MAX_DIMENSION).contains(&rows) || !(1..=MAX_DIMENSION).contains(&cols) {
            return Err(GridError::InvalidDimension { rows, cols });
        }
        self.rows = rows;
        self.cols = cols;
        Ok(())
    }

    /// Whether (row, col) lies inside the backing arrays
    pub fn in_bounds(row: usize, col: usize) -> bool {
        row < CAP && col < CAP
    }

    /// Whether (row, col) lies inside the active rectangle
    pub fn is_active(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn check_bounds(row: usize, col: usize) -> Result<(), GridError> {
        if Self::in_bounds(row, col) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds { row, col })
        }
    }

    /// Iterate the active rectangle in row-major order
    pub fn active_cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |r| (0..cols).map(move |c| (r, c)))
    }

    /// Active cells off the backing border ring, in row-major order.
    /// Row 0, column 0 and index `CAP - 1` are never included.
    pub fn interior_cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let rows = self.rows.min(CAP - 1);
        let cols = self.cols.min(CAP - 1);
        (1..rows).flat_map(move |r| (1..cols).map(move |c| (r, c)))
    }

    fn index(row: usize, col: usize) -> usize {
        assert!(
            Self::in_bounds(row, col),
            "cell ({row}, {col}) outside {CAP}x{CAP} grid"
        );
        row * CAP + col
    }

    // Typed layer access. These panic on indices outside the backing arrays.

    pub fn terrain(&self, row: usize, col: usize) -> &TerrainCell {
        &self.terrain[Self::index(row, col)]
    }

    pub fn terrain_mut(&mut self, row: usize, col: usize) -> &mut TerrainCell {
        &mut self.terrain[Self::index(row, col)]
    }

    pub fn set_terrain(&mut self, row: usize, col: usize, cell: TerrainCell) {
        self.terrain[Self::index(row, col)] = cell;
    }

    pub fn background(&self, row: usize, col: usize) -> &BackgroundCell {
        &self.background[Self::index(row, col)]
    }

    pub fn background_mut(&mut self, row: usize, col: usize) -> &mut BackgroundCell {
        &mut self.background[Self::index(row, col)]
    }

    pub fn set_background(&mut self, row: usize, col: usize, cell: BackgroundCell) {
        self.background[Self::index(row, col)] = cell;
    }

    pub fn object(&self, row: usize, col: usize) -> &ObjectCell {
        &self.objects[Self::index(row, col)]
    }

    pub fn object_mut(&mut self, row: usize, col: usize) -> &mut ObjectCell {
        &mut self.objects[Self::index(row, col)]
    }

    pub fn set_object(&mut self, row: usize, col: usize, cell: ObjectCell) {
        self.objects[Self::index(row, col)] = cell;
    }

    /// Read a copy of any layer's cell. Panics outside the backing arrays.
    pub fn get(&self, layer: Layer, row: usize, col: usize) -> Cell {
        match layer {
            Layer::Terrain => Cell::Terrain(self.terrain(row, col).clone()),
            Layer::Background => Cell::Background(*self.background(row, col)),
            Layer::Objects => Cell::Object(*self.object(row, col)),
        }
    }

    /// Replace one cell on the layer the value belongs to. Panics outside
    /// the backing arrays.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        match cell {
            Cell::Terrain(t) => self.set_terrain(row, col, t),
            Cell::Background(b) => self.set_background(row, col, b),
            Cell::Object(o) => self.set_object(row, col, o),
        }
    }

    /// Checked form of [`GridStore::get`]
    pub fn try_get(&self, layer: Layer, row: usize, col: usize) -> Result<Cell, GridError> {
        Self::check_bounds(row, col)?;
        Ok(self.get(layer, row, col))
    }

    /// Checked form of [`GridStore::set`]
    pub fn try_set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), GridError> {
        Self::check_bounds(row, col)?;
        self.set(row, col, cell);
        Ok(())
    }

    /// Location of the first player object in the active rectangle
    pub fn player_location(&self) -> Option<(usize, usize)> {
        self.active_cells()
            .find(|&(r, c)| self.object(r, c).otype == ObjectType::Player)
    }

    /// Remove every player object, including any hidden outside the active
    /// rectangle. Returns how many were removed.
    pub fn clear_players(&mut self) -> usize {
        let mut removed = 0;
        for obj in self
            .objects
            .iter_mut()
            .filter(|obj| obj.otype == ObjectType::Player)
        {
            *obj = ObjectCell::empty();
            removed += 1;
        }
        removed
    }
}

impl Default for GridStore {
    fn default() -> Self {
        Self::new()
    }
}
