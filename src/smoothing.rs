//! Cellular automaton smoothing.
//!
//! Each pass counts walls in the Moore neighbourhood of every cell:
//! more than four makes a wall, fewer than four makes a floor, exactly
//! four keeps the cell as it was. Cells outside the grid count as walls,
//! which pulls the perimeter closed.
//!
//! Passes are synchronous: every cell is computed from the state at the
//! start of the pass, never from cells already updated in the same pass.

use crate::constants::SMOOTH_NEIGHBOUR_PIVOT;
use crate::grid::Grid;
use crate::tile::TileType;

/// Walls among the 8 neighbours of (x, y), counting off-grid cells as wall.
pub fn wall_neighbour_count(grid: &Grid, x: i32, y: i32) -> u32 {
    let mut count = 0;
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            match grid.get(x + dx, y + dy) {
                Some(TileType::Wall) | None => count += 1,
                Some(TileType::Floor) => {}
            }
        }
    }
    count
}

/// Run one synchronous pass over the whole grid.
pub fn smooth_pass(grid: &mut Grid) {
    let width = grid.width as i32;
    let height = grid.height as i32;

    let mut next = grid.tiles.clone();
    for y in 0..height {
        for x in 0..width {
            let walls = wall_neighbour_count(grid, x, y);
            let idx = y as usize * grid.width + x as usize;
            if walls > SMOOTH_NEIGHBOUR_PIVOT {
                next[idx] = TileType::Wall;
            } else if walls < SMOOTH_NEIGHBOUR_PIVOT {
                next[idx] = TileType::Floor;
            }
        }
    }
    grid.tiles = next;
}

/// Run `passes` synchronous passes.
pub fn smooth(grid: &mut Grid, passes: u32) {
    puffin::profile_function!();
    for _ in 0..passes {
        smooth_pass(grid);
    }
}
