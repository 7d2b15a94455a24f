use cave_automata::regions;
use cave_automata::{CaveConfig, CaveGenerator, TileType};
use proptest::prelude::*;

fn config_strategy() -> impl Strategy<Value = CaveConfig> {
    (
        "[a-z0-9]{1,12}",
        24usize..72,
        20usize..56,
        30u32..=60,
        2u32..=6,
        1usize..=3,
        1usize..=6,
        1usize..=16,
        1i32..=2,
    )
        .prop_map(
            |(seed, width, height, fill, smooth, border, wall, room, radius)| CaveConfig {
                random_fill_percentage: fill,
                smooth_amount: smooth,
                border_size: border,
                wall_threshold: wall,
                room_threshold: room,
                corridor_radius: radius,
                ..CaveConfig::default().with_size(width, height).with_seed(seed)
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_fixed_seed_is_deterministic(config in config_strategy()) {
        let generator = CaveGenerator::new(config).unwrap();
        let first = generator.generate();
        let second = generator.generate();
        prop_assert_eq!(&first.grid, &second.grid);
        prop_assert_eq!(first.rooms.corridors(), second.rooms.corridors());
    }

    #[test]
    fn prop_border_is_wall(config in config_strategy()) {
        let border = config.border_size;
        let cave = CaveGenerator::new(config).unwrap().generate();
        for c in cave.grid.coords() {
            if cave.grid.is_border(c.x, c.y, border) {
                prop_assert_eq!(cave.grid.get_coord(c), Some(TileType::Wall));
            }
        }
    }

    #[test]
    fn prop_filtered_regions_meet_thresholds(config in config_strategy()) {
        let wall_threshold = config.wall_threshold;
        let room_threshold = config.room_threshold;
        let generator = CaveGenerator::new(config).unwrap();
        let (grid, rooms) = generator.filtered("threshold");

        for region in regions::extract(&grid, TileType::Wall) {
            prop_assert!(region.len() >= wall_threshold, "wall region of {}", region.len());
        }
        let floors = regions::extract(&grid, TileType::Floor);
        for region in &floors {
            prop_assert!(region.len() >= room_threshold, "floor region of {}", region.len());
        }
        prop_assert_eq!(floors.len(), rooms.len());
    }

    #[test]
    fn prop_every_room_reachable(config in config_strategy()) {
        let cave = CaveGenerator::new(config).unwrap().generate();
        prop_assert!(cave.rooms.all_accessible());
        prop_assert_eq!(cave.connections.unreachable, 0);
        prop_assert!(regions::extract(&cave.grid, TileType::Floor).len() <= 1);
    }

    #[test]
    fn prop_single_main_room_is_largest(config in config_strategy()) {
        let cave = CaveGenerator::new(config).unwrap().generate();
        let rooms = cave.rooms.rooms();
        let mains: Vec<usize> = (0..rooms.len()).filter(|i| rooms[*i].is_main_room).collect();
        if rooms.is_empty() {
            prop_assert!(mains.is_empty());
        } else {
            prop_assert_eq!(mains.len(), 1);
            let largest = rooms.iter().map(|r| r.size()).max().unwrap();
            prop_assert_eq!(rooms[mains[0]].size(), largest);
        }
    }

    #[test]
    fn prop_connections_are_symmetric(config in config_strategy()) {
        let cave = CaveGenerator::new(config).unwrap().generate();
        for (id, room) in cave.rooms.rooms().iter().enumerate() {
            for &other in &room.connected_rooms {
                prop_assert!(cave.rooms.are_connected(other, id));
            }
        }
    }
}
