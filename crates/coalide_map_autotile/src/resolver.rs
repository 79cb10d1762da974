//! Active-grid autotile pass
//!
//! Recomputes every interior cell's dirt, ice and sand textures from the
//! displayed textures of its eight neighbors, then rewrites the water
//! decals. Only the active rectangle is visited, minus row 0 and column 0;
//! the outermost ring of the backing grid is never written. Neighbors
//! outside the active rectangle count as water.
//!
//! The pass is all-or-nothing: results are computed into a scratch buffer
//! and only written back once every cell resolved.

use crate::blob::{blob_position, calculate_bitmask};
use crate::config::AutotileConfig;
use crate::decal::water_decal_weights;
use crate::floor::{classify, Tier, ATLAS_COLUMNS};
use crate::AutotileError;
use coalide_map_core::{GridStore, CAP, NO_TEXTURE};
use tracing::{debug, warn};

/// Maps a neighbor bitmask to a (row, col) in the blob layout
pub type BlobLayout = fn(u8) -> Option<(u8, u8)>;

/// Summary of a finished pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AutotileReport {
    /// Interior cells that received at least a dirt texture
    pub land_cells: usize,
    /// Interior cells that received a water decal
    pub decals: usize,
}

#[derive(Debug, Clone, Copy)]
struct TierTextures {
    dirt: i32,
    ice: i32,
    sand: i32,
}

impl TierTextures {
    const NONE: Self = TierTextures {
        dirt: NO_TEXTURE,
        ice: NO_TEXTURE,
        sand: NO_TEXTURE,
    };
}

/// Neighbor bitmask of an interior cell for one tier
pub fn tier_bitmask(store: &GridStore, row: usize, col: usize, tier: Tier) -> u8 {
    calculate_bitmask(row as i32, col as i32, |r, c| {
        let (r, c) = (r as usize, c as usize);
        store.is_active(r, c) && classify(store.terrain(r, c).texture).reaches(tier)
    })
}

fn column_offset(config: &AutotileConfig, tier: Tier) -> i32 {
    match tier {
        Tier::Dirt => config.tier_offsets.dirt,
        Tier::Ice => config.tier_offsets.ice,
        Tier::Sand => config.tier_offsets.sand,
    }
}

fn resolve_cell(
    store: &GridStore,
    row: usize,
    col: usize,
    config: &AutotileConfig,
    layout: BlobLayout,
) -> Result<TierTextures, AutotileError> {
    let floor = classify(store.terrain(row, col).texture);
    let mut textures = TierTextures::NONE;

    for tier in Tier::ALL {
        if !floor.reaches(tier) {
            continue;
        }

        let combined = tier_bitmask(store, row, col, tier);
        let (blob_row, blob_col) = layout(combined).ok_or(
            AutotileError::UnmappedBlobCombination {
                row,
                col,
                combined,
            },
        )?;
        let texture =
            blob_row as i32 * ATLAS_COLUMNS + blob_col as i32 + column_offset(config, tier);

        match tier {
            Tier::Dirt => textures.dirt = texture,
            Tier::Ice => textures.ice = texture,
            Tier::Sand => textures.sand = texture,
        }
    }

    Ok(textures)
}

/// Run the autotile pass over the active grid
pub fn run_autotile(
    store: &mut GridStore,
    config: &AutotileConfig,
) -> Result<AutotileReport, AutotileError> {
    run_autotile_with_layout(store, config, blob_position)
}

/// Run the autotile pass with a custom blob layout
pub fn run_autotile_with_layout(
    store: &mut GridStore,
    config: &AutotileConfig,
    layout: BlobLayout,
) -> Result<AutotileReport, AutotileError> {
    let view: &GridStore = store;
    let resolved = view
        .interior_cells()
        .map(|(row, col)| resolve_cell(view, row, col, config, layout).map(|t| (row, col, t)))
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|e| warn!("Autotile pass aborted: {}", e))?;

    let weights = water_decal_weights(view);
    let mut report = AutotileReport::default();

    for (row, col, textures) in resolved {
        let terrain = store.terrain_mut(row, col);
        terrain.t_dirt = textures.dirt;
        terrain.t_ice = textures.ice;
        terrain.t_sand = textures.sand;

        // The ground tile doubles as the water bed beneath it
        let decal = config
            .decals
            .sprite_for(weights[row * CAP + col])
            .unwrap_or(NO_TEXTURE);
        let background = store.background_mut(row, col);
        background.t_water = textures.dirt;
        background.t_water_decal = decal;

        if textures.dirt != NO_TEXTURE {
            report.land_cells += 1;
        }
        if decal != NO_TEXTURE {
            report.decals += 1;
        }
    }

    debug!(
        "Autotile pass complete: {} land cells, {} decals",
        report.land_cells, report.decals
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blob::neighbors;
    use crate::floor::FloorType;
    use coalide_map_core::{TerrainCell, TerrainType};
    use std::ops::Range;

    fn place(store: &mut GridStore, row: usize, col: usize, ttype: TerrainType) {
        store.set_terrain(row, col, TerrainCell::new(ttype));
    }

    fn fill(store: &mut GridStore, rows: Range<usize>, cols: Range<usize>, ttype: TerrainType) {
        for r in rows {
            for c in cols.clone() {
                place(store, r, c, ttype);
            }
        }
    }

    #[test]
    fn test_lone_dirt_cell() {
        let mut store = GridStore::new();
        place(&mut store, 5, 5, TerrainType::Dirt);

        run_autotile(&mut store, &AutotileConfig::default()).unwrap();

        let cell = store.terrain(5, 5);
        assert_eq!(cell.t_dirt, 0);
        assert_eq!(cell.t_ice, NO_TEXTURE);
        assert_eq!(cell.t_sand, NO_TEXTURE);
        assert_eq!(store.background(5, 5).t_water, 0);
    }

    #[test]
    fn test_enclosed_cells_per_tier() {
        let mut store = GridStore::new();
        fill(&mut store, 2..7, 2..7, TerrainType::Sand);

        run_autotile(&mut store, &AutotileConfig::default()).unwrap();

        let center = store.terrain(4, 4);
        assert_eq!(tier_bitmask(&store, 4, 4, Tier::Sand), 255);
        assert_eq!(center.t_dirt, 132);
        assert_eq!(center.t_ice, 139);
        assert_eq!(center.t_sand, 146);
    }

    #[test]
    fn test_lower_tier_counts_higher_neighbors() {
        let mut store = GridStore::new();
        fill(&mut store, 2..7, 2..7, TerrainType::Ice);
        place(&mut store, 4, 4, TerrainType::Dirt);

        run_autotile(&mut store, &AutotileConfig::default()).unwrap();

        // Dirt center sees ice neighbors as dirt-tier
        assert_eq!(store.terrain(4, 4).t_dirt, 132);
        assert_eq!(store.terrain(4, 4).t_ice, NO_TEXTURE);
        // Ice neighbors do not count the dirt center toward ice
        assert_eq!(tier_bitmask(&store, 3, 4, Tier::Ice) & neighbors::S, 0);
    }

    #[test]
    fn test_vertical_strip_suppresses_corners() {
        let mut store = GridStore::new();
        fill(&mut store, 3..8, 5..6, TerrainType::Dirt);
        // Diagonal neighbors of (5,5) without any east/west edge
        for (r, c) in [(4, 4), (4, 6), (6, 4), (6, 6)] {
            place(&mut store, r, c, TerrainType::Dirt);
        }

        assert_eq!(tier_bitmask(&store, 5, 5, Tier::Dirt), 17);

        run_autotile(&mut store, &AutotileConfig::default()).unwrap();
        let (blob_row, blob_col) = blob_position(17).unwrap();
        assert_eq!(
            store.terrain(5, 5).t_dirt,
            blob_row as i32 * ATLAS_COLUMNS + blob_col as i32
        );
    }

    #[test]
    fn test_custom_offsets() {
        let mut store = GridStore::new();
        place(&mut store, 5, 5, TerrainType::Ice);
        let mut config = AutotileConfig::default();
        config.tier_offsets.ice = 30;

        run_autotile(&mut store, &config).unwrap();
        assert_eq!(store.terrain(5, 5).t_ice, 30);
    }

    #[test]
    fn test_displayed_texture_drives_classification() {
        let mut store = GridStore::new();
        let mut cell = TerrainCell::new(TerrainType::Dirt);
        cell.texture = NO_TEXTURE;
        store.set_terrain(5, 5, cell);
        assert_eq!(classify(store.terrain(5, 5).texture), FloorType::Water);

        run_autotile(&mut store, &AutotileConfig::default()).unwrap();
        assert_eq!(store.terrain(5, 5).t_dirt, NO_TEXTURE);
    }

    #[test]
    fn test_decals_written() {
        let mut store = GridStore::new();
        place(&mut store, 4, 4, TerrainType::Dirt);

        let report = run_autotile(&mut store, &AutotileConfig::default()).unwrap();

        let sprites = AutotileConfig::default().decals;
        assert_eq!(store.background(5, 4).t_water_decal, sprites.edge);
        assert_eq!(store.background(5, 5).t_water_decal, sprites.left_corner);
        assert_eq!(store.background(5, 3).t_water_decal, sprites.right_corner);
        assert_eq!(store.background(4, 4).t_water_decal, NO_TEXTURE);
        assert_eq!(report.land_cells, 1);
        assert_eq!(report.decals, 3);
    }

    #[test]
    fn test_decals_overwrite_previous() {
        let mut store = GridStore::new();
        store.background_mut(7, 7).t_water_decal = 999;
        run_autotile(&mut store, &AutotileConfig::default()).unwrap();
        assert_eq!(store.background(7, 7).t_water_decal, NO_TEXTURE);
    }

    #[test]
    fn test_border_ring_untouched() {
        let mut store = GridStore::new();
        store.resize(99, 99).unwrap();
        fill(&mut store, 0..CAP, 0..CAP, TerrainType::Dirt);
        let sentinel = 4242;
        for i in 0..CAP {
            for (r, c) in [(0, i), (CAP - 1, i), (i, 0), (i, CAP - 1)] {
                store.terrain_mut(r, c).t_dirt = sentinel;
                store.background_mut(r, c).t_water = sentinel;
            }
        }

        run_autotile(&mut store, &AutotileConfig::default()).unwrap();

        for i in 0..CAP {
            for (r, c) in [(0, i), (CAP - 1, i), (i, 0), (i, CAP - 1)] {
                assert_eq!(store.terrain(r, c).t_dirt, sentinel);
                assert_eq!(store.background(r, c).t_water, sentinel);
            }
        }
        assert_eq!(store.terrain(1, 1).t_dirt, 132);
        // The last active row and column border the hidden ring
        let corner = tier_bitmask(&store, CAP - 2, CAP - 2, Tier::Dirt);
        assert_eq!(corner, neighbors::N | neighbors::W | neighbors::NW);
        assert_ne!(store.terrain(CAP - 2, CAP - 2).t_dirt, sentinel);
    }

    #[test]
    fn test_hidden_cells_are_neither_tiled_nor_read() {
        let mut store = GridStore::new();
        store.resize(20, 20).unwrap();
        place(&mut store, 4, 2, TerrainType::Dirt);
        place(&mut store, 5, 2, TerrainType::Dirt);
        place(&mut store, 12, 12, TerrainType::Dirt);
        store.resize(5, 5).unwrap();

        let report = run_autotile(&mut store, &AutotileConfig::default()).unwrap();

        // Row 5 is hidden, so (4,2) is a lone tile
        assert_eq!(tier_bitmask(&store, 4, 2, Tier::Dirt), 0);
        assert_eq!(store.terrain(4, 2).t_dirt, 0);
        assert_eq!(store.terrain(5, 2).t_dirt, NO_TEXTURE);
        assert_eq!(store.terrain(12, 12).t_dirt, NO_TEXTURE);
        assert_eq!(store.background(13, 12).t_water_decal, NO_TEXTURE);
        assert_eq!(report.land_cells, 1);
    }

    #[test]
    fn test_idempotent() {
        let mut store = GridStore::new();
        fill(&mut store, 2..6, 3..9, TerrainType::Sand);
        place(&mut store, 7, 7, TerrainType::Ice);

        let config = AutotileConfig::default();
        run_autotile(&mut store, &config).unwrap();
        let first = store.clone();
        run_autotile(&mut store, &config).unwrap();
        assert_eq!(store, first);
    }

    #[test]
    fn test_unmapped_combination_aborts_without_writes() {
        fn no_enclosed_tile(mask: u8) -> Option<(u8, u8)> {
            if mask == 255 {
                None
            } else {
                blob_position(mask)
            }
        }

        let mut store = GridStore::new();
        fill(&mut store, 2..5, 2..5, TerrainType::Dirt);
        store.background_mut(8, 8).t_water_decal = 7;
        let before = store.clone();

        let result =
            run_autotile_with_layout(&mut store, &AutotileConfig::default(), no_enclosed_tile);

        match result {
            Err(AutotileError::UnmappedBlobCombination { row, col, combined }) => {
                assert_eq!((row, col, combined), (3, 3, 255));
            }
            other => panic!("Expected unmapped combination, got {:?}", other),
        }
        assert_eq!(store, before);
    }
}
