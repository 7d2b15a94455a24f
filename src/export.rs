//! Serializable view of a finished cave for external consumers.

use serde::Serialize;

use crate::cave_gen::CaveResult;
use crate::rooms::{Corridor, RoomId};

#[derive(Debug, Clone, Serialize)]
pub struct RoomSummary {
    pub id: RoomId,
    pub size: usize,
    pub edge_tiles: usize,
    pub connected_rooms: Vec<RoomId>,
    pub is_main_room: bool,
    pub accessible_from_main_room: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CaveSnapshot {
    pub width: usize,
    pub height: usize,
    pub seed: String,
    /// One string per row, `#` for wall and `.` for floor
    pub rows: Vec<String>,
    pub rooms: Vec<RoomSummary>,
    pub corridors: Vec<Corridor>,
}

impl From<&CaveResult> for CaveSnapshot {
    fn from(result: &CaveResult) -> Self {
        let rooms = result
            .rooms
            .rooms()
            .iter()
            .enumerate()
            .map(|(id, room)| RoomSummary {
                id,
                size: room.size(),
                edge_tiles: room.edge_tiles.len(),
                connected_rooms: room.connected_rooms.clone(),
                is_main_room: room.is_main_room,
                accessible_from_main_room: room.accessible_from_main_room,
            })
            .collect();

        Self {
            width: result.grid.width,
            height: result.grid.height,
            seed: result.seed.clone(),
            rows: result.grid.rows().collect(),
            rooms,
            corridors: result.rooms.corridors().to_vec(),
        }
    }
}

impl CaveSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
