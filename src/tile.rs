use serde::{Deserialize, Serialize};

/// Binary classification of a single cave cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileType {
    Wall,
    Floor,
}

impl TileType {
    /// The type a filtered region is converted into.
    pub fn opposite(&self) -> TileType {
        match self {
            TileType::Wall => TileType::Floor,
            TileType::Floor => TileType::Wall,
        }
    }

    /// Character used by the ASCII form of a grid
    pub fn glyph(&self) -> char {
        match self {
            TileType::Wall => '#',
            TileType::Floor => '.',
        }
    }

    pub fn from_glyph(c: char) -> Option<TileType> {
        match c {
            '#' => Some(TileType::Wall),
            '.' => Some(TileType::Floor),
            _ => None,
        }
    }
}
