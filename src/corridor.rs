//! Corridor rasterization: a line of disc brush stamps.

use crate::grid::{Coord, Grid};
use crate::tile::TileType;

/// Integer line walk from `from` to `to`, both ends included.
///
/// The axis with the larger delta drives the walk (ties drive along y),
/// so consecutive points are always 8-adjacent and the line has no gaps.
/// A zero-length line yields its single point.
pub struct BresenhamLine {
    x: i32,
    y: i32,
    step: i32,
    gradient_step: i32,
    longest: i32,
    shortest: i32,
    inverted: bool,
    gradient_accumulation: i32,
    remaining: i32,
}

impl BresenhamLine {
    pub fn new(from: Coord, to: Coord) -> Self {
        let dx = to.x - from.x;
        let dy = to.y - from.y;

        let mut step = dx.signum();
        let mut gradient_step = dy.signum();
        let mut longest = dx.abs();
        let mut shortest = dy.abs();
        let inverted = longest <= shortest;

        if inverted {
            longest = dy.abs();
            shortest = dx.abs();
            step = dy.signum();
            gradient_step = dx.signum();
        }

        Self {
            x: from.x,
            y: from.y,
            step,
            gradient_step,
            longest,
            shortest,
            inverted,
            gradient_accumulation: longest / 2,
            remaining: longest + 1,
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let current = Coord::new(self.x, self.y);

        if self.inverted {
            self.y += self.step;
        } else {
            self.x += self.step;
        }
        self.gradient_accumulation += self.shortest;
        if self.gradient_accumulation >= self.longest {
            if self.inverted {
                self.x += self.gradient_step;
            } else {
                self.y += self.gradient_step;
            }
            self.gradient_accumulation -= self.longest;
        }

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BresenhamLine {}

/// Collect the line from `from` to `to`.
pub fn get_line(from: Coord, to: Coord) -> Vec<Coord> {
    BresenhamLine::new(from, to).collect()
}

/// Open every cell within `radius` (inclusive, squared distance) of `center`.
/// Cells past the grid edge are skipped.
pub fn draw_disc(grid: &mut Grid, center: Coord, radius: i32) {
    let radius = i64::from(radius);
    let radius_sq = radius * radius;
    let (cx, cy) = (i64::from(center.x), i64::from(center.y));
    let max_x = grid.width as i64 - 1;
    let max_y = grid.height as i64 - 1;

    for y in (cy - radius).max(0)..=(cy + radius).min(max_y) {
        for x in (cx - radius).max(0)..=(cx + radius).min(max_x) {
            let (dx, dy) = (x - cx, y - cy);
            if dx * dx + dy * dy <= radius_sq {
                grid.set(x as i32, y as i32, TileType::Floor);
            }
        }
    }
}

/// Carve a corridor between two points. Returns the number of brush stamps.
pub fn carve(grid: &mut Grid, from: Coord, to: Coord, radius: i32) -> usize {
    let mut stamps = 0;
    for point in BresenhamLine::new(from, to) {
        draw_disc(grid, point, radius);
        stamps += 1;
    }
    stamps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32) -> Coord {
        Coord::new(x, y)
    }

    #[test]
    fn test_zero_length_line_is_single_point() {
        assert_eq!(get_line(c(0, 0), c(0, 0)), vec![c(0, 0)]);
        assert_eq!(get_line(c(7, 3), c(7, 3)), vec![c(7, 3)]);
    }

    #[test]
    fn test_horizontal_line() {
        assert_eq!(get_line(c(1, 2), c(4, 2)), vec![c(1, 2), c(2, 2), c(3, 2), c(4, 2)]);
    }

    #[test]
    fn test_vertical_line_backwards() {
        assert_eq!(get_line(c(0, 3), c(0, 0)), vec![c(0, 3), c(0, 2), c(0, 1), c(0, 0)]);
    }

    #[test]
    fn test_diagonal_line() {
        assert_eq!(get_line(c(0, 0), c(3, -3)), vec![c(0, 0), c(1, -1), c(2, -2), c(3, -3)]);
    }

    #[test]
    fn test_line_has_no_gaps_and_reaches_end() {
        let targets = [c(9, 4), c(-7, 2), c(3, -11), c(-5, -5), c(0, 6), c(12, 1)];
        for to in targets {
            let line = get_line(c(0, 0), to);
            assert_eq!(line.first(), Some(&c(0, 0)));
            assert_eq!(line.last(), Some(&to));
            let expected_len = to.x.abs().max(to.y.abs()) as usize + 1;
            assert_eq!(line.len(), expected_len, "to {to:?}");
            for pair in line.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                assert!((a.x - b.x).abs() <= 1 && (a.y - b.y).abs() <= 1, "gap {a:?} -> {b:?}");
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_disc_radius_one_is_plus_shape() {
        let mut grid = Grid::new(5, 5, TileType::Wall);
        draw_disc(&mut grid, c(2, 2), 1);
        assert_eq!(
            grid.to_ascii(),
            "#####\n##.##\n#...#\n##.##\n#####"
        );
    }

    #[test]
    fn test_disc_radius_two() {
        let mut grid = Grid::new(5, 5, TileType::Wall);
        draw_disc(&mut grid, c(2, 2), 2);
        assert_eq!(
            grid.to_ascii(),
            "##.##\n#...#\n.....\n#...#\n##.##"
        );
    }

    #[test]
    fn test_disc_clipped_at_edge() {
        let mut grid = Grid::new(3, 3, TileType::Wall);
        draw_disc(&mut grid, c(0, 0), 1);
        assert_eq!(grid.to_ascii(), "..#\n.##\n###");
    }

    #[test]
    fn test_huge_radius_opens_whole_grid() {
        let mut grid = Grid::new(6, 4, TileType::Wall);
        draw_disc(&mut grid, c(2, 1), 50_000);
        assert_eq!(grid.count(TileType::Wall), 0);

        let mut grid = Grid::new(6, 4, TileType::Wall);
        draw_disc(&mut grid, c(0, 0), i32::MAX);
        assert_eq!(grid.count(TileType::Wall), 0);
    }

    #[test]
    fn test_carve_opens_corridor() {
        let mut grid = Grid::new(7, 5, TileType::Wall);
        let stamps = carve(&mut grid, c(1, 2), c(5, 2), 1);
        assert_eq!(stamps, 5);
        assert_eq!(
            grid.to_ascii(),
            "#######\n#.....#\n.......\n#.....#\n#######"
        );
    }
}
