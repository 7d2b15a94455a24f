//! Connected-component extraction by flood fill.

use std::collections::VecDeque;

use crate::grid::{Coord, Grid};
use crate::tile::TileType;

/// Maximal set of same-typed cells joined by orthogonal steps.
pub type Region = Vec<Coord>;

/// Partition every `tile` cell into orthogonally connected regions.
///
/// Regions come out in row-major order of their first cell, and the tiles
/// inside a region in breadth-first order from that cell. Cells of any
/// other type are ignored. Each cell is enqueued at most once across the
/// whole call.
pub fn extract(grid: &Grid, tile: TileType) -> Vec<Region> {
    puffin::profile_function!();

    let mut visited = vec![false; grid.width * grid.height];
    let mut regions = Vec::new();

    for start in grid.coords() {
        let idx = start.y as usize * grid.width + start.x as usize;
        if visited[idx] || grid.get_coord(start) != Some(tile) {
            continue;
        }
        regions.push(flood_fill(grid, start, tile, &mut visited));
    }

    regions
}

/// Breadth-first fill from `start`, marking every reached cell in `visited`.
fn flood_fill(grid: &Grid, start: Coord, tile: TileType, visited: &mut [bool]) -> Region {
    let mut region = Vec::new();
    let mut queue = VecDeque::new();

    visited[start.y as usize * grid.width + start.x as usize] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        region.push(current);
        for next in current.orthogonal_neighbours() {
            if grid.get_coord(next) != Some(tile) {
                continue;
            }
            let idx = next.y as usize * grid.width + next.x as usize;
            if !visited[idx] {
                visited[idx] = true;
                queue.push_back(next);
            }
        }
    }

    region
}
