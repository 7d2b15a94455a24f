//! Cave generation constants.

/// Default cave width in tiles
pub const CAVE_DEFAULT_WIDTH: usize = 128;
/// Default cave height in tiles
pub const CAVE_DEFAULT_HEIGHT: usize = 72;
/// Seed used when none is supplied
pub const CAVE_DEFAULT_SEED: &str = "0";
/// Chance (percent) that an interior cell starts as wall
pub const CAVE_DEFAULT_FILL_PERCENTAGE: u32 = 47;
/// Default number of automaton passes
pub const CAVE_DEFAULT_SMOOTH_AMOUNT: u32 = 5;
/// Fewest automaton passes a config may request
pub const CAVE_MIN_SMOOTH_AMOUNT: u32 = 2;
/// Default thickness of the solid outer frame
pub const CAVE_DEFAULT_BORDER_SIZE: usize = 1;
/// Wall regions smaller than this become floor
pub const CAVE_DEFAULT_WALL_THRESHOLD: usize = 3;
/// Floor regions smaller than this become wall
pub const CAVE_DEFAULT_ROOM_THRESHOLD: usize = 10;
/// Default corridor brush radius
pub const CAVE_DEFAULT_CORRIDOR_RADIUS: i32 = 1;

/// Neighbour wall count at which a cell keeps its current type
pub const SMOOTH_NEIGHBOUR_PIVOT: u32 = 4;
