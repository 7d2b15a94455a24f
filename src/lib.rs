//! Cellular-automaton cave generation.
//!
//! A cave is produced in one pass: seeded noise, automaton smoothing,
//! removal of undersized wall and floor regions, a solid border, and
//! finally corridors that join every remaining room to the largest one.
//!
//! ```no_run
//! use cave_automata::{CaveConfig, CaveGenerator};
//!
//! let config = CaveConfig::default().with_size(96, 64).with_seed("lair");
//! let cave = CaveGenerator::new(config)?.generate();
//! println!("{}", cave.grid.to_ascii());
//! # Ok::<(), cave_automata::ConfigError>(())
//! ```

pub mod cave_gen;
pub mod config;
pub mod constants;
pub mod corridor;
pub mod error;
pub mod export;
pub mod fill;
pub mod filter;
pub mod grid;
pub mod regions;
pub mod rooms;
pub mod smoothing;
pub mod tile;

pub use cave_gen::{CaveGenerator, CaveResult};
pub use config::{CaveConfig, SeedMode};
pub use error::ConfigError;
pub use grid::{Coord, Grid};
pub use rooms::{Room, RoomGraph};
pub use tile::TileType;
