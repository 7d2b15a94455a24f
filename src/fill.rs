//! Initial noise for the automaton.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SeedMode;
use crate::grid::Grid;
use crate::tile::TileType;

/// The seed string a run actually uses.
///
/// Fixed seeds pass through untouched. Random mode reads the wall clock, so
/// it is the one non-reproducible step in the whole pipeline; callers keep
/// the returned string if they want to replay the run.
pub fn resolve_seed(mode: &SeedMode) -> String {
    match mode {
        SeedMode::Fixed(seed) => seed.clone(),
        SeedMode::Random => time_seed(),
    }
}

fn time_seed() -> String {
    // A clock before the epoch still yields a usable, if odd, seed.
    let nanos = match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_nanos(),
        Err(before) => before.duration().as_nanos(),
    };
    nanos.to_string()
}

/// Deterministic generator for a seed string.
///
/// The string is hashed with BLAKE3 to the 32 bytes `StdRng` seeds from.
/// The same seed replays the same grid on any platform for a given `rand`
/// release; `StdRng` may switch algorithms across `rand` versions.
pub fn rng_from_seed(seed: &str) -> StdRng {
    let digest: [u8; 32] = blake3::hash(seed.as_bytes()).into();
    StdRng::from_seed(digest)
}

/// Fill `grid` with noise: the outer ring is wall, every other cell is
/// wall with probability `fill_percentage`%.
pub fn random_fill(grid: &mut Grid, fill_percentage: u32, rng: &mut impl Rng) {
    puffin::profile_function!();

    let width = grid.width as i32;
    let height = grid.height as i32;

    for y in 0..height {
        for x in 0..width {
            let on_edge = x == 0 || y == 0 || x == width - 1 || y == height - 1;
            let tile = if on_edge || rng.gen_range(0..100) < fill_percentage {
                TileType::Wall
            } else {
                TileType::Floor
            };
            grid.set(x, y, tile);
        }
    }
}
