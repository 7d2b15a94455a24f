//! Room graph and corridor connection.
//!
//! Rooms live in a flat arena owned by [`RoomGraph`] and refer to each
//! other by index, so the connection graph carries no shared ownership.
//!
//! Connecting happens in two passes:
//!
//! 1. **Nearest**: every room that has no connection yet is joined to the
//!    closest room it is not already joined to.
//! 2. **Forced**: while some room is unreachable from the main room, the
//!    single closest pair between an unreachable room and a reachable one
//!    is joined. Each round makes at least one more room reachable, so the
//!    loop runs at most `rooms - 1` times and stops early when no pair is
//!    left.
//!
//! "Closest" is the smallest Manhattan distance between any edge tile of
//! one room and any edge tile of the other. The first pair found at that
//! distance wins, so the result is fixed for a given room and tile order.

use serde::Serialize;

use crate::corridor;
use crate::grid::{Coord, Grid};
use crate::regions::Region;
use crate::tile::TileType;

/// Index of a room within its [`RoomGraph`].
pub type RoomId = usize;

#[derive(Debug, Clone)]
pub struct Room {
    pub tiles: Vec<Coord>,
    /// Tiles with a wall directly above, below, left or right. Only these
    /// are used as corridor endpoints.
    pub edge_tiles: Vec<Coord>,
    pub connected_rooms: Vec<RoomId>,
    pub is_main_room: bool,
    pub accessible_from_main_room: bool,
}

impl Room {
    pub fn new(tiles: Region, grid: &Grid) -> Self {
        // Only orthogonal neighbours are checked; a wall touching a tile
        // solely at a corner does not make it an edge tile.
        let edge_tiles = tiles
            .iter()
            .copied()
            .filter(|tile| {
                tile.orthogonal_neighbours()
                    .iter()
                    .any(|n| grid.get_coord(*n) == Some(TileType::Wall))
            })
            .collect();

        Self {
            tiles,
            edge_tiles,
            connected_rooms: Vec::new(),
            is_main_room: false,
            accessible_from_main_room: false,
        }
    }

    pub fn size(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_connected(&self, other: RoomId) -> bool {
        self.connected_rooms.contains(&other)
    }
}

/// Which connection pass carved a corridor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionPass {
    Nearest,
    Forced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Corridor {
    pub room_a: RoomId,
    pub room_b: RoomId,
    pub from: Coord,
    pub to: Coord,
    pub pass: ConnectionPass,
}

/// Counts from one [`RoomGraph::connect_closest_rooms`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectionSummary {
    pub nearest: usize,
    pub forced: usize,
    /// Rooms still unreachable from the main room afterwards
    pub unreachable: usize,
}

/// Best pair found so far during a search.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    room_a: RoomId,
    room_b: RoomId,
    tile_a: Coord,
    tile_b: Coord,
    distance: i32,
}

#[derive(Debug, Clone, Default)]
pub struct RoomGraph {
    rooms: Vec<Room>,
    corridors: Vec<Corridor>,
}

impl RoomGraph {
    /// Order rooms largest first and flag the largest as the main room.
    /// Equal sizes keep their incoming order.
    pub fn new(mut rooms: Vec<Room>) -> Self {
        rooms.sort_by(|a, b| b.size().cmp(&a.size()));
        if let Some(main) = rooms.first_mut() {
            main.is_main_room = true;
            main.accessible_from_main_room = true;
        }
        Self {
            rooms,
            corridors: Vec::new(),
        }
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id]
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn corridors(&self) -> &[Corridor] {
        &self.corridors
    }

    pub fn main_room(&self) -> Option<RoomId> {
        self.rooms.iter().position(|room| room.is_main_room)
    }

    pub fn all_accessible(&self) -> bool {
        self.rooms.iter().all(|room| room.accessible_from_main_room)
    }

    pub fn are_connected(&self, a: RoomId, b: RoomId) -> bool {
        self.rooms[a].is_connected(b)
    }

    /// Join every room to the main room with as little corridor as the
    /// greedy search finds, carving each corridor into `grid`.
    pub fn connect_closest_rooms(&mut self, grid: &mut Grid, corridor_radius: i32) -> ConnectionSummary {
        puffin::profile_function!();

        let nearest = self.connect_nearest(grid, corridor_radius);
        let forced = self.force_main_connectivity(grid, corridor_radius);
        let unreachable = self
            .rooms
            .iter()
            .filter(|room| !room.accessible_from_main_room)
            .count();

        if unreachable > 0 {
            tracing::warn!(unreachable, "rooms left unreachable from the main room");
        }
        tracing::debug!(nearest, forced, rooms = self.rooms.len(), "rooms connected");

        ConnectionSummary {
            nearest,
            forced,
            unreachable,
        }
    }

    /// First pass: give every unconnected room a corridor to its nearest
    /// neighbour.
    fn connect_nearest(&mut self, grid: &mut Grid, corridor_radius: i32) -> usize {
        puffin::profile_scope!("connect_nearest");
        let mut carved = 0;

        for a in 0..self.rooms.len() {
            // Rooms joined earlier in this loop are skipped
            if !self.rooms[a].connected_rooms.is_empty() {
                continue;
            }
            let mut best = None;
            for b in 0..self.rooms.len() {
                if a == b || self.are_connected(a, b) {
                    continue;
                }
                self.closest_edge_pair(a, b, &mut best);
            }
            if let Some(candidate) = best {
                self.create_corridor(grid, candidate, corridor_radius, ConnectionPass::Nearest);
                carved += 1;
            }
        }

        carved
    }

    /// Second pass: repeatedly join the closest unreachable/reachable pair
    /// until every room is reachable or no pair remains.
    fn force_main_connectivity(&mut self, grid: &mut Grid, corridor_radius: i32) -> usize {
        puffin::profile_scope!("force_main_connectivity");
        let mut carved = 0;

        loop {
            let (reachable, unreachable): (Vec<RoomId>, Vec<RoomId>) =
                (0..self.rooms.len()).partition(|id| self.rooms[*id].accessible_from_main_room);

            let mut best = None;
            for &a in &unreachable {
                for &b in &reachable {
                    if self.are_connected(a, b) {
                        continue;
                    }
                    self.closest_edge_pair(a, b, &mut best);
                }
            }

            match best {
                Some(candidate) => {
                    self.create_corridor(grid, candidate, corridor_radius, ConnectionPass::Forced);
                    carved += 1;
                }
                None => break,
            }
        }

        carved
    }

    /// Update `best` with the closest edge-tile pair between rooms `a` and
    /// `b` if it beats the current best.
    fn closest_edge_pair(&self, a: RoomId, b: RoomId, best: &mut Option<Candidate>) {
        for &tile_a in &self.rooms[a].edge_tiles {
            for &tile_b in &self.rooms[b].edge_tiles {
                let distance = tile_a.manhattan_distance(tile_b);
                if best.map_or(true, |current| distance < current.distance) {
                    *best = Some(Candidate {
                        room_a: a,
                        room_b: b,
                        tile_a,
                        tile_b,
                        distance,
                    });
                }
            }
        }
    }

    fn create_corridor(&mut self, grid: &mut Grid, candidate: Candidate, radius: i32, pass: ConnectionPass) {
        self.link(candidate.room_a, candidate.room_b);
        corridor::carve(grid, candidate.tile_a, candidate.tile_b, radius);
        tracing::trace!(
            room_a = candidate.room_a,
            room_b = candidate.room_b,
            distance = candidate.distance,
            ?pass,
            "carved corridor"
        );
        self.corridors.push(Corridor {
            room_a: candidate.room_a,
            room_b: candidate.room_b,
            from: candidate.tile_a,
            to: candidate.tile_b,
            pass,
        });
    }

    /// Record a connection both ways and spread main-room reachability
    /// across the newly joined component.
    fn link(&mut self, a: RoomId, b: RoomId) {
        if self.rooms[a].accessible_from_main_room {
            self.mark_accessible(b);
        } else if self.rooms[b].accessible_from_main_room {
            self.mark_accessible(a);
        }
        self.rooms[a].connected_rooms.push(b);
        self.rooms[b].connected_rooms.push(a);
    }

    /// Flag `start` and everything already joined to it as reachable.
    fn mark_accessible(&mut self, start: RoomId) {
        let mut stack = vec![start];
        while let Some(id) = stack.pop() {
            let room = &mut self.rooms[id];
            if room.accessible_from_main_room {
                continue;
            }
            room.accessible_from_main_room = true;
            stack.extend(room.connected_rooms.iter().copied());
        }
    }
}
