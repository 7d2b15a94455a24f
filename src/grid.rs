use serde::{Deserialize, Serialize};

use crate::tile::TileType;

/// A single grid cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn manhattan_distance(&self, other: Coord) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// The four orthogonal neighbours, in-bounds or not.
    pub fn orthogonal_neighbours(&self) -> [Coord; 4] {
        [
            Coord::new(self.x, self.y - 1),
            Coord::new(self.x - 1, self.y),
            Coord::new(self.x + 1, self.y),
            Coord::new(self.x, self.y + 1),
        ]
    }
}

/// Fixed-size wall/floor buffer, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<TileType>,
}

impl Grid {
    /// A grid with every cell set to `fill`.
    pub fn new(width: usize, height: usize, fill: TileType) -> Self {
        Self {
            width,
            height,
            tiles: vec![fill; width * height],
        }
    }

    /// Parse the `#`/`.` form produced by [`Grid::to_ascii`].
    ///
    /// Blank lines and surrounding whitespace are ignored. Returns `None`
    /// for ragged rows or unknown glyphs.
    pub fn from_ascii(text: &str) -> Option<Self> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let width = rows.first().map(|row| row.chars().count())?;
        let mut tiles = Vec::with_capacity(width * rows.len());
        for row in &rows {
            if row.chars().count() != width {
                return None;
            }
            for c in row.chars() {
                tiles.push(TileType::from_glyph(c)?);
            }
        }
        Some(Self {
            width,
            height: rows.len(),
            tiles,
        })
    }

    pub fn to_ascii(&self) -> String {
        self.rows().collect::<Vec<_>>().join("\n")
    }

    /// One string per row, top row first.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.tiles
            .chunks(self.width.max(1))
            .map(|row| row.iter().map(TileType::glyph).collect())
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    fn get_index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<TileType> {
        self.get_index(x, y).map(|idx| self.tiles[idx])
    }

    pub fn get_coord(&self, c: Coord) -> Option<TileType> {
        self.get(c.x, c.y)
    }

    /// Out-of-bounds writes are ignored. Returns whether the cell exists.
    pub fn set(&mut self, x: i32, y: i32, tile: TileType) -> bool {
        match self.get_index(x, y) {
            Some(idx) => {
                self.tiles[idx] = tile;
                true
            }
            None => false,
        }
    }

    pub fn set_coord(&mut self, c: Coord, tile: TileType) -> bool {
        self.set(c.x, c.y, tile)
    }

    pub fn count(&self, tile: TileType) -> usize {
        self.tiles.iter().filter(|t| **t == tile).count()
    }

    /// Whether the cell lies within `border` cells of any edge. Cells off
    /// the top or left edge always count.
    pub fn is_border(&self, x: i32, y: i32, border: usize) -> bool {
        let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
            return true;
        };
        x < border
            || y < border
            || x.saturating_add(border) >= self.width
            || y.saturating_add(border) >= self.height
    }

    /// Every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let width = self.width as i32;
        let height = self.height as i32;
        (0..height).flat_map(move |y| (0..width).map(move |x| Coord::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_out_of_bounds_is_none() {
        let grid = Grid::new(4, 3, TileType::Floor);
        assert_eq!(grid.get(0, 0), Some(TileType::Floor));
        assert_eq!(grid.get(3, 2), Some(TileType::Floor));
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(grid.get(0, 3), None);
    }

    #[test]
    fn test_set_ignores_out_of_bounds() {
        let mut grid = Grid::new(2, 2, TileType::Wall);
        assert!(!grid.set(2, 0, TileType::Floor));
        assert!(grid.set(1, 1, TileType::Floor));
        assert_eq!(grid.count(TileType::Floor), 1);
        assert_eq!(grid.get(1, 1), Some(TileType::Floor));
    }

    #[test]
    fn test_ascii_round_trip() {
        let text = "####\n#..#\n####";
        let grid = Grid::from_ascii(text).unwrap();
        assert_eq!(grid.width, 4);
        assert_eq!(grid.height, 3);
        assert_eq!(grid.get(1, 1), Some(TileType::Floor));
        assert_eq!(grid.to_ascii(), text);
    }

    #[test]
    fn test_from_ascii_rejects_ragged_rows() {
        assert!(Grid::from_ascii("###\n##").is_none());
        assert!(Grid::from_ascii("#?#").is_none());
        assert!(Grid::from_ascii("").is_none());
    }

    #[test]
    fn test_is_border() {
        let grid = Grid::new(6, 5, TileType::Floor);
        assert!(grid.is_border(0, 2, 1));
        assert!(grid.is_border(5, 2, 1));
        assert!(grid.is_border(2, 4, 1));
        assert!(!grid.is_border(1, 1, 1));
        assert!(grid.is_border(1, 1, 2));
    }

    #[test]
    fn test_oversized_border_covers_everything() {
        let grid = Grid::new(6, 5, TileType::Floor);
        for border in [6, i32::MAX as usize + 1, usize::MAX] {
            assert!(grid.coords().all(|c| grid.is_border(c.x, c.y, border)), "border {border}");
        }
        assert!(grid.is_border(-1, 2, 1));
    }

    #[test]
    fn test_manhattan_distance() {
        assert_eq!(Coord::new(0, 0).manhattan_distance(Coord::new(3, -4)), 7);
        assert_eq!(Coord::new(2, 2).manhattan_distance(Coord::new(2, 2)), 0);
    }

    #[test]
    fn test_coords_row_major() {
        let grid = Grid::new(2, 2, TileType::Wall);
        let coords: Vec<Coord> = grid.coords().collect();
        assert_eq!(
            coords,
            vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(0, 1), Coord::new(1, 1)]
        );
    }
}
