//! 47-tile blob bitmask and layout table

use crate::floor::ATLAS_COLUMNS;

/// Neighbor direction flags for bitmask calculation
pub mod neighbors {
    pub const N: u8 = 0b0000_0001; // North
    pub const NE: u8 = 0b0000_0010; // Northeast (corner)
    pub const E: u8 = 0b0000_0100; // East
    pub const SE: u8 = 0b0000_1000; // Southeast (corner)
    pub const S: u8 = 0b0001_0000; // South
    pub const SW: u8 = 0b0010_0000; // Southwest (corner)
    pub const W: u8 = 0b0100_0000; // West
    pub const NW: u8 = 0b1000_0000; // Northwest (corner)
}

/// Drop every corner bit whose two flanking edges are not both set
pub fn optimize_bitmask(bitmask: u8) -> u8 {
    use neighbors::*;

    let mut result = bitmask;

    if (bitmask & (N | E)) != (N | E) {
        result &= !NE;
    }
    if (bitmask & (E | S)) != (E | S) {
        result &= !SE;
    }
    if (bitmask & (S | W)) != (S | W) {
        result &= !SW;
    }
    if (bitmask & (W | N)) != (W | N) {
        result &= !NW;
    }

    result
}

/// Calculate the corner-suppressed neighbor bitmask around (row, col).
///
/// `in_tier` is asked about neighbor coordinates; rows grow downward, so
/// north is `row - 1`.
pub fn calculate_bitmask<F>(row: i32, col: i32, in_tier: F) -> u8
where
    F: Fn(i32, i32) -> bool,
{
    use neighbors::*;

    let mut bitmask = 0u8;

    if in_tier(row - 1, col) {
        bitmask |= N;
    }
    if in_tier(row - 1, col + 1) {
        bitmask |= NE;
    }
    if in_tier(row, col + 1) {
        bitmask |= E;
    }
    if in_tier(row + 1, col + 1) {
        bitmask |= SE;
    }
    if in_tier(row + 1, col) {
        bitmask |= S;
    }
    if in_tier(row + 1, col - 1) {
        bitmask |= SW;
    }
    if in_tier(row, col - 1) {
        bitmask |= W;
    }
    if in_tier(row - 1, col - 1) {
        bitmask |= NW;
    }

    optimize_bitmask(bitmask)
}

/// Every reachable bitmask and its (row, col) inside the 7x7 blob layout,
/// sorted by bitmask. The fully enclosed tile sits at the bottom-right.
const BLOB_LAYOUT: [(u8, u8, u8); 47] = [
    (0, 0, 0),
    (1, 0, 1),
    (4, 0, 2),
    (5, 0, 3),
    (7, 0, 4),
    (16, 0, 5),
    (17, 0, 6),
    (20, 1, 0),
    (21, 1, 1),
    (23, 1, 2),
    (28, 1, 3),
    (29, 1, 4),
    (31, 1, 5),
    (64, 1, 6),
    (65, 2, 0),
    (68, 2, 1),
    (69, 2, 2),
    (71, 2, 3),
    (80, 2, 4),
    (81, 2, 5),
    (84, 2, 6),
    (85, 3, 0),
    (87, 3, 1),
    (92, 3, 2),
    (93, 3, 3),
    (95, 3, 4),
    (112, 3, 5),
    (113, 3, 6),
    (116, 4, 0),
    (117, 4, 1),
    (119, 4, 2),
    (124, 4, 3),
    (125, 4, 4),
    (127, 4, 5),
    (193, 4, 6),
    (197, 5, 0),
    (199, 5, 1),
    (209, 5, 2),
    (213, 5, 3),
    (215, 5, 4),
    (221, 5, 5),
    (223, 5, 6),
    (241, 6, 0),
    (245, 6, 1),
    (247, 6, 2),
    (253, 6, 3),
    (255, 6, 6),
];

/// Look up the layout position of a bitmask
pub fn blob_position(bitmask: u8) -> Option<(u8, u8)> {
    BLOB_LAYOUT
        .binary_search_by_key(&bitmask, |&(mask, _, _)| mask)
        .ok()
        .map(|i| (BLOB_LAYOUT[i].1, BLOB_LAYOUT[i].2))
}

/// Atlas texture id for a bitmask, shifted into a tier's band
pub fn blob_texture(bitmask: u8, column_offset: i32) -> Option<i32> {
    blob_position(bitmask)
        .map(|(row, col)| row as i32 * ATLAS_COLUMNS + col as i32 + column_offset)
}
