//! Water edge decals
//!
//! Water cells get a shoreline decal where land sits above them. A cell with
//! land directly above gets the straight edge (weight 4). Otherwise each
//! upper diagonal that is land, with water on that side, adds a corner:
//! upper-left adds 2, upper-right adds 1.
//!
//! Cells outside the active rectangle read as water.

use crate::floor::classify;
use coalide_map_core::{GridStore, CAP};

/// Decal weight of an edge with land directly above
pub const EDGE_WEIGHT: u8 = 4;
/// Weight contributed by land at the upper-left diagonal
pub const LEFT_CORNER_WEIGHT: u8 = 2;
/// Weight contributed by land at the upper-right diagonal
pub const RIGHT_CORNER_WEIGHT: u8 = 1;

fn is_water(store: &GridStore, row: usize, col: usize) -> bool {
    !store.is_active(row, col) || classify(store.terrain(row, col).texture).is_water()
}

/// Decal weight of one interior cell
pub fn decal_weight(store: &GridStore, row: usize, col: usize) -> u8 {
    if !is_water(store, row, col) {
        return 0;
    }
    if !is_water(store, row - 1, col) {
        return EDGE_WEIGHT;
    }

    let mut weight = 0;
    if !is_water(store, row - 1, col - 1) && is_water(store, row, col - 1) {
        weight += LEFT_CORNER_WEIGHT;
    }
    if !is_water(store, row - 1, col + 1) && is_water(store, row, col + 1) {
        weight += RIGHT_CORNER_WEIGHT;
    }
    weight
}

/// Decal weights for every cell, indexed `row * CAP + col`. Only interior
/// cells of the active rectangle are scored; everything else is 0.
pub fn water_decal_weights(store: &GridStore) -> Vec<u8> {
    let mut weights = vec![0u8; CAP * CAP];
    for (row, col) in store.interior_cells() {
        weights[row * CAP + col] = decal_weight(store, row, col);
    }
    weights
}

#[cfg(test)]
mod tests {
    use super::*;
    use coalide_map_core::{TerrainCell, TerrainType};

    fn land(store: &mut GridStore, row: usize, col: usize) {
        store.set_terrain(row, col, TerrainCell::new(TerrainType::Dirt));
    }

    #[test]
    fn test_open_water_has_no_decal() {
        let store = GridStore::new();
        assert_eq!(decal_weight(&store, 5, 5), 0);
    }

    #[test]
    fn test_land_above_is_edge() {
        let mut store = GridStore::new();
        land(&mut store, 4, 5);
        land(&mut store, 4, 4);
        land(&mut store, 4, 6);
        assert_eq!(decal_weight(&store, 5, 5), EDGE_WEIGHT);
    }

    #[test]
    fn test_upper_left_corner() {
        let mut store = GridStore::new();
        land(&mut store, 4, 4);
        assert_eq!(decal_weight(&store, 5, 5), 2);
        // The cell under the land gets the edge
        assert_eq!(decal_weight(&store, 5, 4), EDGE_WEIGHT);
    }

    #[test]
    fn test_upper_right_corner() {
        let mut store = GridStore::new();
        land(&mut store, 4, 6);
        assert_eq!(decal_weight(&store, 5, 5), 1);
    }

    #[test]
    fn test_both_corners() {
        let mut store = GridStore::new();
        land(&mut store, 4, 4);
        land(&mut store, 4, 6);
        assert_eq!(decal_weight(&store, 5, 5), 3);
    }

    #[test]
    fn test_corner_needs_water_beside() {
        let mut store = GridStore::new();
        land(&mut store, 4, 4);
        land(&mut store, 5, 4);
        assert_eq!(decal_weight(&store, 5, 5), 0);
    }

    #[test]
    fn test_land_cell_has_no_decal() {
        let mut store = GridStore::new();
        land(&mut store, 5, 5);
        land(&mut store, 4, 5);
        assert_eq!(decal_weight(&store, 5, 5), 0);
    }

    #[test]
    fn test_hidden_land_is_water() {
        let mut store = GridStore::new();
        store.resize(20, 20).unwrap();
        land(&mut store, 3, 6);
        land(&mut store, 6, 2);
        store.resize(5, 6).unwrap();

        // Both land cells now sit outside the active rectangle
        assert_eq!(decal_weight(&store, 4, 5), 0);
        let weights = water_decal_weights(&store);
        assert_eq!(weights[4 * CAP + 5], 0);
        assert_eq!(weights[4 * CAP + 6], 0);
        assert_eq!(weights[7 * CAP + 2], 0);
    }

    #[test]
    fn test_weights_skip_border() {
        let mut store = GridStore::new();
        store.resize(99, 99).unwrap();
        for col in 0..CAP {
            land(&mut store, 0, col);
        }
        let weights = water_decal_weights(&store);
        assert_eq!(weights[CAP + 5], EDGE_WEIGHT);
        assert_eq!(weights[CAP], 0);
        assert_eq!(weights[CAP + CAP - 1], 0);
    }
}
