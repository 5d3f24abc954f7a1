//! # World Module
//!
//! The immutable tile grid and the lookups every other stage relies on.
//!
//! All three lookups (`cell`, `has_wall_at`, `material_at`) go through the
//! same bounds check, so the integrator and the ray caster always agree on
//! what is solid.

use crate::{TilecasterError, TilecasterResult};
use log::debug;

/// Tile id of an empty, passable cell.
pub const EMPTY_TILE: u8 = 0;

/// A fixed-size grid of tile ids. `0` is passable, anything else is a wall
/// whose value selects the wall material.
///
/// Construction enforces that every border cell is a wall, which guarantees
/// that every ray terminates inside the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    tiles: Vec<u8>,
    rows: usize,
    cols: usize,
    tile_size: f64,
}

impl Grid {
    /// Builds a grid from rows of tile ids.
    ///
    /// # Errors
    ///
    /// Returns `InvalidGrid` when the grid is empty, ragged, or its border
    /// contains an empty cell, and `InvalidConfig` for a non-positive tile
    /// size.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilecaster::Grid;
    ///
    /// let grid = Grid::new(
    ///     vec![vec![1, 1, 1], vec![1, 0, 1], vec![1, 1, 1]],
    ///     64.0,
    /// ).unwrap();
    /// assert!(!grid.has_wall_at(96.0, 96.0));
    /// assert!(grid.has_wall_at(10.0, 10.0));
    /// ```
    pub fn new(rows: Vec<Vec<u8>>, tile_size: f64) -> TilecasterResult<Self> {
        if !(tile_size.is_finite() && tile_size > 0.0) {
            return Err(TilecasterError::InvalidConfig(format!(
                "tile size must be positive, got {}",
                tile_size
            )));
        }

        let row_count = rows.len();
        let col_count = rows.first().map(|r| r.len()).unwrap_or(0);
        if row_count == 0 || col_count == 0 {
            return Err(TilecasterError::InvalidGrid("grid is empty".to_string()));
        }

        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != col_count) {
            return Err(TilecasterError::InvalidGrid(format!(
                "row {} has {} columns, expected {}",
                index,
                row.len(),
                col_count
            )));
        }

        let grid = Self {
            tiles: rows.into_iter().flatten().collect(),
            rows: row_count,
            cols: col_count,
            tile_size,
        };

        if let Some((row, col)) = grid.first_open_border_cell() {
            return Err(TilecasterError::InvalidGrid(format!(
                "border cell ({}, {}) is not a wall",
                row, col
            )));
        }

        debug!(
            "Grid loaded: {}x{} tiles of {} units",
            grid.rows, grid.cols, grid.tile_size
        );

        Ok(grid)
    }

    /// Builds an open room of the given size whose border is `material`.
    ///
    /// A zero `material` is bumped to `1` so the result is always valid.
    pub fn bordered(
        rows: usize,
        cols: usize,
        tile_size: f64,
        material: u8,
    ) -> TilecasterResult<Self> {
        let wall = material.max(1);
        let data = (0..rows)
            .map(|row| {
                (0..cols)
                    .map(|col| {
                        if row == 0 || col == 0 || row + 1 == rows || col + 1 == cols {
                            wall
                        } else {
                            EMPTY_TILE
                        }
                    })
                    .collect()
            })
            .collect();
        Self::new(data, tile_size)
    }

    /// Number of tile rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of tile columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Edge length of one tile in world units.
    pub fn tile_size(&self) -> f64 {
        self.tile_size
    }

    /// World width in units.
    pub fn world_width(&self) -> f64 {
        self.cols as f64 * self.tile_size
    }

    /// World height in units.
    pub fn world_height(&self) -> f64 {
        self.rows as f64 * self.tile_size
    }

    /// Returns the tile id at `(row, col)`, or `None` outside the grid.
    pub fn cell(&self, row: isize, col: isize) -> Option<u8> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.tiles[row * self.cols + col])
    }

    /// True when the cell is solid. Cells outside the grid are solid.
    pub fn is_wall_cell(&self, row: isize, col: isize) -> bool {
        self.cell(row, col).map_or(true, |tile| tile != EMPTY_TILE)
    }

    /// True when the world point lies in `[0, width) × [0, height)`.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= 0.0 && y >= 0.0 && x < self.world_width() && y < self.world_height()
    }

    /// Cell `(row, col)` containing a world point. May be out of range.
    pub fn cell_index(&self, x: f64, y: f64) -> (isize, isize) {
        (
            (y / self.tile_size).floor() as isize,
            (x / self.tile_size).floor() as isize,
        )
    }

    /// True when the point is outside the world or inside a wall tile.
    pub fn has_wall_at(&self, x: f64, y: f64) -> bool {
        if !self.contains(x, y) {
            return true;
        }
        let (row, col) = self.cell_index(x, y);
        self.is_wall_cell(row, col)
    }

    /// Tile id at a world point, `0` when out of bounds.
    pub fn material_at(&self, x: f64, y: f64) -> u8 {
        if !self.contains(x, y) {
            return EMPTY_TILE;
        }
        let (row, col) = self.cell_index(x, y);
        self.cell(row, col).unwrap_or(EMPTY_TILE)
    }

    /// Highest material id stored in the grid.
    pub fn max_material(&self) -> u8 {
        self.tiles.iter().copied().max().unwrap_or(EMPTY_TILE)
    }

    /// Iterates every cell as `(row, col, tile)` in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        let cols = self.cols;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(index, &tile)| (index / cols, index % cols, tile))
    }

    fn first_open_border_cell(&self) -> Option<(usize, usize)> {
        self.iter_cells()
            .find(|&(row, col, tile)| {
                let on_border =
                    row == 0 || col == 0 || row + 1 == self.rows || col + 1 == self.cols;
                on_border && tile == EMPTY_TILE
            })
            .map(|(row, col, _)| (row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> Grid {
        Grid::new(
            vec![
                vec![1, 1, 1, 1, 1],
                vec![1, 0, 0, 0, 2],
                vec![1, 0, 8, 0, 2],
                vec![1, 1, 1, 1, 1],
            ],
            64.0,
        )
        .unwrap()
    }

    #[test]
    fn test_grid_dimensions() {
        let grid = sample_grid();
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 5);
        assert_eq!(grid.world_width(), 320.0);
        assert_eq!(grid.world_height(), 256.0);
        assert_eq!(grid.max_material(), 8);
    }

    #[test]
    fn test_out_of_bounds_is_wall() {
        let grid = sample_grid();
        assert!(grid.has_wall_at(-1.0, 10.0));
        assert!(grid.has_wall_at(10.0, -0.001));
        assert!(grid.has_wall_at(320.0, 100.0));
        assert!(grid.has_wall_at(100.0, 256.0));
        assert!(grid.has_wall_at(f64::NAN, 100.0));
        assert_eq!(grid.material_at(-1.0, 10.0), 0);
        assert_eq!(grid.material_at(1000.0, 1000.0), 0);
    }

    #[test]
    fn test_lookups_agree_in_bounds() {
        let grid = sample_grid();
        assert!(grid.has_wall_at(1.0, 1.0));
        assert!(!grid.has_wall_at(65.0, 65.0));
        assert_eq!(grid.material_at(65.0, 65.0), 0);

        assert!(grid.has_wall_at(2.0 * 64.0 + 1.0, 2.0 * 64.0 + 1.0));
        assert_eq!(grid.material_at(2.0 * 64.0 + 1.0, 2.0 * 64.0 + 1.0), 8);
        assert_eq!(grid.material_at(4.0 * 64.0 + 5.0, 64.0 + 5.0), 2);
    }

    #[test]
    fn test_cell_bounds() {
        let grid = sample_grid();
        assert_eq!(grid.cell(-1, 0), None);
        assert_eq!(grid.cell(0, 5), None);
        assert_eq!(grid.cell(2, 2), Some(8));
        assert!(grid.is_wall_cell(10, 10));
        assert!(!grid.is_wall_cell(1, 1));
    }

    #[test]
    fn test_rejects_open_border() {
        let result = Grid::new(vec![vec![1, 1, 1], vec![0, 0, 1], vec![1, 1, 1]], 64.0);
        assert!(matches!(result, Err(TilecasterError::InvalidGrid(_))));
    }

    #[test]
    fn test_rejects_ragged_and_empty() {
        let ragged = Grid::new(vec![vec![1, 1, 1], vec![1, 1], vec![1, 1, 1]], 64.0);
        assert!(matches!(ragged, Err(TilecasterError::InvalidGrid(_))));

        let empty = Grid::new(Vec::new(), 64.0);
        assert!(matches!(empty, Err(TilecasterError::InvalidGrid(_))));
    }

    #[test]
    fn test_rejects_bad_tile_size() {
        let result = Grid::new(vec![vec![1]], 0.0);
        assert!(matches!(result, Err(TilecasterError::InvalidConfig(_))));
    }

    #[test]
    fn test_bordered_grid() {
        let grid = Grid::bordered(5, 7, 32.0, 3).unwrap();
        assert_eq!(grid.cell(0, 0), Some(3));
        assert_eq!(grid.cell(4, 6), Some(3));
        assert_eq!(grid.cell(2, 3), Some(0));
    }
}
