//! Zone membership queries over the terrain layer
//!
//! Zones are not stored anywhere on their own: a zone id is the set of
//! active terrain cells that list it.

use crate::grid::GridStore;
use std::collections::BTreeSet;

/// Read-only view of zone membership
#[derive(Debug, Clone, Copy)]
pub struct Zones<'a> {
    store: &'a GridStore,
}

impl<'a> Zones<'a> {
    pub fn new(store: &'a GridStore) -> Self {
        Self { store }
    }

    /// All active cells belonging to a zone, as (row, col)
    pub fn members_of(&self, zone_id: i32) -> BTreeSet<(usize, usize)> {
        self.store
            .active_cells()
            .filter(|&(r, c)| self.store.terrain(r, c).has_zone(zone_id))
            .collect()
    }

    /// Whether a cell belongs to a zone. Cells outside the active rectangle
    /// belong to nothing.
    pub fn is_member(&self, row: usize, col: usize, zone_id: i32) -> bool {
        self.store.is_active(row, col) && self.store.terrain(row, col).has_zone(zone_id)
    }

    /// Every zone id used in the active rectangle
    pub fn zone_ids(&self) -> BTreeSet<i32> {
        self.store
            .active_cells()
            .flat_map(|(r, c)| self.store.terrain(r, c).zones().iter().copied())
            .collect()
    }
}

impl GridStore {
    /// Zone queries over this store
    pub fn zones(&self) -> Zones<'_> {
        Zones::new(self)
    }
}
