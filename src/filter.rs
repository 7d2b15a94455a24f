//! Region size filtering and the solid outer border.

use crate::grid::Grid;
use crate::regions::{self, Region};
use crate::rooms::Room;
use crate::tile::TileType;

/// Convert every `tile` region smaller than `threshold` to the opposite type.
///
/// Returns the regions that were kept, in extraction order.
fn filter_regions(grid: &mut Grid, tile: TileType, threshold: usize) -> (Vec<Region>, usize) {
    let replacement = tile.opposite();
    let mut kept = Vec::new();
    let mut removed = 0;

    for region in regions::extract(grid, tile) {
        if region.len() < threshold {
            for c in &region {
                grid.set_coord(*c, replacement);
            }
            removed += 1;
        } else {
            kept.push(region);
        }
    }

    (kept, removed)
}

/// Open up wall regions thinner than `threshold` tiles. Returns how many
/// regions were removed.
pub fn remove_small_walls(grid: &mut Grid, threshold: usize) -> usize {
    puffin::profile_function!();
    let (_, removed) = filter_regions(grid, TileType::Wall, threshold);
    tracing::debug!(removed, threshold, "removed small wall regions");
    removed
}

/// Fill in floor regions smaller than `threshold` tiles and wrap every
/// survivor in a [`Room`].
///
/// Rooms are returned in extraction order; [`RoomGraph::new`](crate::rooms::RoomGraph::new)
/// sorts them and picks the main room.
pub fn remove_small_rooms(grid: &mut Grid, threshold: usize) -> Vec<Room> {
    puffin::profile_function!();
    let (kept, removed) = filter_regions(grid, TileType::Floor, threshold);
    tracing::debug!(removed, surviving = kept.len(), threshold, "removed small rooms");

    // Edge tiles are read after every small room is filled
    kept.into_iter().map(|region| Room::new(region, grid)).collect()
}

/// Force every cell within `border_size` of an edge to wall.
pub fn stamp_border(grid: &mut Grid, border_size: usize) {
    puffin::profile_function!();
    let width = grid.width as i32;
    let height = grid.height as i32;
    for y in 0..height {
        for x in 0..width {
            if grid.is_border(x, y, border_size) {
                grid.set(x, y, TileType::Wall);
            }
        }
    }
}
