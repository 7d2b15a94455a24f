use crate::config::CaveConfig;
use crate::error::ConfigError;
use crate::fill;
use crate::filter;
use crate::grid::Grid;
use crate::rooms::{ConnectionSummary, Room, RoomGraph};
use crate::smoothing;
use crate::tile::TileType;

/// Result of cave generation
#[derive(Debug, Clone)]
pub struct CaveResult {
    pub grid: Grid,
    pub rooms: RoomGraph,
    /// The seed actually used. In random mode this is the time-derived
    /// seed, which replays the run when passed back as a fixed seed.
    pub seed: String,
    pub connections: ConnectionSummary,
}

/// Runs the whole pipeline for one validated config.
#[derive(Debug, Clone)]
pub struct CaveGenerator {
    config: CaveConfig,
}

impl CaveGenerator {
    pub fn new(config: CaveConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Generate a cave. Fixed seeds always give the same grid.
    pub fn generate(&self) -> CaveResult {
        puffin::profile_function!();

        let seed = fill::resolve_seed(&self.config.seed);
        tracing::info!(
            seed = %seed,
            width = self.config.width,
            height = self.config.height,
            "generating cave"
        );

        let (mut grid, rooms) = self.filtered(&seed);

        let mut rooms = RoomGraph::new(rooms);
        let connections = rooms.connect_closest_rooms(&mut grid, self.config.corridor_radius);

        // Corridor brushes may spill into the border band
        filter::stamp_border(&mut grid, self.config.border_size);

        tracing::info!(
            rooms = rooms.len(),
            corridors = rooms.corridors().len(),
            floor = grid.count(TileType::Floor),
            "cave generated"
        );

        CaveResult {
            grid,
            rooms,
            seed,
            connections,
        }
    }

    /// Everything up to (not including) corridor carving: noise, smoothing,
    /// wall filtering, the border, and room filtering.
    ///
    /// The border is stamped before the room pass so rooms never contain
    /// border cells and their edge tiles are read from the final walls.
    pub fn filtered(&self, seed: &str) -> (Grid, Vec<Room>) {
        let config = &self.config;
        let mut rng = fill::rng_from_seed(seed);

        let mut grid = Grid::new(config.width, config.height, TileType::Wall);
        fill::random_fill(&mut grid, config.random_fill_percentage, &mut rng);
        smoothing::smooth(&mut grid, config.smooth_amount);

        filter::remove_small_walls(&mut grid, config.wall_threshold);
        filter::stamp_border(&mut grid, config.border_size);
        let rooms = filter::remove_small_rooms(&mut grid, config.room_threshold);

        (grid, rooms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regions;

    fn generator(seed: &str, width: usize, height: usize) -> CaveGenerator {
        CaveGenerator::new(CaveConfig::default().with_size(width, height).with_seed(seed)).unwrap()
    }

    #[test]
    fn test_cave_generates_tiles() {
        let result = generator("tiles", 60, 40).generate();
        assert_eq!(result.grid.tiles.len(), 60 * 40);
        assert_eq!(result.grid.width, 60);
        assert_eq!(result.grid.height, 40);
    }

    #[test]
    fn test_cave_has_floor_and_wall_tiles() {
        let result = generator("mixed", 80, 50).generate();
        assert!(result.grid.count(TileType::Floor) > 0);
        assert!(result.grid.count(TileType::Wall) > 0);
    }

    #[test]
    fn test_fixed_seed_is_deterministic() {
        let a = generator("repeat", 64, 48).generate();
        let b = generator("repeat", 64, 48).generate();
        assert_eq!(a.grid, b.grid);
        assert_eq!(a.rooms.corridors(), b.rooms.corridors());
        assert_eq!(a.seed, "repeat");
    }

    #[test]
    fn test_border_is_wall() {
        let config = CaveConfig {
            border_size: 3,
            ..CaveConfig::default().with_size(50, 40).with_seed("border")
        };
        let result = CaveGenerator::new(config).unwrap().generate();
        for c in result.grid.coords() {
            if result.grid.is_border(c.x, c.y, 3) {
                assert_eq!(result.grid.get_coord(c), Some(TileType::Wall), "{c:?}");
            }
        }
    }

    #[test]
    fn test_every_room_reachable_and_floor_connected() {
        let result = generator("connected", 100, 60).generate();
        assert!(result.rooms.all_accessible());
        assert_eq!(result.connections.unreachable, 0);
        assert!(regions::extract(&result.grid, TileType::Floor).len() <= 1);
    }

    #[test]
    fn test_full_fill_yields_no_rooms() {
        let config = CaveConfig {
            random_fill_percentage: 100,
            ..CaveConfig::default().with_size(30, 30).with_seed("solid")
        };
        let result = CaveGenerator::new(config).unwrap().generate();
        assert!(result.rooms.is_empty());
        assert_eq!(result.grid.count(TileType::Floor), 0);
    }

    #[test]
    fn test_random_seed_reports_seed_used() {
        let config = CaveConfig::default().with_size(30, 20).with_random_seed();
        let first = CaveGenerator::new(config).unwrap().generate();

        let replay = generator(&first.seed, 30, 20).generate();
        assert_eq!(first.grid, replay.grid);
    }

    #[test]
    fn test_invalid_config_rejected_up_front() {
        let config = CaveConfig {
            smooth_amount: 0,
            ..CaveConfig::default()
        };
        assert!(CaveGenerator::new(config).is_err());
    }
}
