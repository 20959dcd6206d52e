//! Grid representation and utilities for the two-color Game of Life

use super::{Cell, PlayerCounts};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A rectangular field of tri-state cells, row-major.
/// Dimensions are fixed for the lifetime of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub height: usize,
    pub width: usize,
    pub cells: Vec<Cell>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![Cell::Empty; height * width],
        }
    }

    /// Create a grid from 2D rows of cells
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        if rows.is_empty() {
            anyhow::bail!("Grid cannot be empty");
        }

        let height = rows.len();
        let width = rows[0].len();

        if width == 0 {
            anyhow::bail!("Grid width cannot be zero");
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                anyhow::bail!("Row {} has length {}, expected {}", i, row.len(), width);
            }
        }

        let cells: Vec<Cell> = rows.into_iter().flatten().collect();

        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Cell at the given coordinates; out-of-bounds positions are empty
    pub fn get(&self, row: usize, col: usize) -> Cell {
        if row < self.height && col < self.width {
            self.cells[self.index(row, col)]
        } else {
            Cell::Empty
        }
    }

    /// Set the cell at the given coordinates
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<()> {
        if row >= self.height || col >= self.width {
            anyhow::bail!(
                "Coordinates ({}, {}) out of bounds for {}x{} grid",
                row,
                col,
                self.height,
                self.width
            );
        }
        let idx = self.index(row, col);
        self.cells[idx] = cell;
        Ok(())
    }

    /// Count live Moore neighbors per owner. The boundary is dead: border
    /// cells simply have fewer than 8 neighbors, no wraparound.
    pub fn neighbor_owners(&self, row: usize, col: usize) -> PlayerCounts {
        let mut counts = PlayerCounts::default();

        for dr in [-1isize, 0, 1] {
            for dc in [-1isize, 0, 1] {
                if dr == 0 && dc == 0 {
                    continue; // Skip the cell itself
                }

                let r = row as isize + dr;
                let c = col as isize + dc;

                if r >= 0 && r < self.height as isize && c >= 0 && c < self.width as isize {
                    if let Cell::Owned(player) = self.cells[self.index(r as usize, c as usize)] {
                        *counts.get_mut(player) += 1;
                    }
                }
            }
        }

        counts
    }

    /// Copy another grid's cells onto this one at matching offsets.
    /// Source cells outside this grid's bounds are silently ignored.
    pub fn overlay(&mut self, seed: &Grid) {
        for row in 0..seed.height.min(self.height) {
            for col in 0..seed.width.min(self.width) {
                let idx = self.index(row, col);
                self.cells[idx] = seed.get(row, col);
            }
        }
    }

    /// Set every cell to empty
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Live cells per owner, freshly counted
    pub fn counts(&self) -> PlayerCounts {
        let mut counts = PlayerCounts::default();
        for cell in &self.cells {
            if let Cell::Owned(player) = cell {
                *counts.get_mut(*player) += 1;
            }
        }
        counts
    }

    /// Count total live cells
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_live()).count()
    }

    /// Check if the grid has no live cells
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_live())
    }

    /// Coordinates of all live cells, row-major order
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        let mut live = Vec::new();
        for row in 0..self.height {
            for col in 0..self.width {
                if self.get(row, col).is_live() {
                    live.push((row, col));
                }
            }
        }
        live
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let symbol = match self.get(row, col) {
                    Cell::Empty => "⬛",
                    Cell::Owned(super::Player::Blue) => "🟦",
                    Cell::Owned(super::Player::Red) => "🟥",
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Player;

    const B: Cell = Cell::Owned(Player::Blue);
    const R: Cell = Cell::Owned(Player::Red);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(3, 4);
        assert_eq!(grid.height, 3);
        assert_eq!(grid.width, 4);
        assert_eq!(grid.cells.len(), 12);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_grid_from_rows() {
        let grid = Grid::from_rows(vec![vec![B, E, R], vec![E, B, E], vec![R, E, B]]).unwrap();
        assert_eq!(grid.height, 3);
        assert_eq!(grid.width, 3);
        assert_eq!(grid.live_count(), 5);
        assert_eq!(grid.counts(), PlayerCounts { blue: 3, red: 2 });
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        assert!(Grid::from_rows(vec![]).is_err());
        assert!(Grid::from_rows(vec![vec![]]).is_err());
        assert!(Grid::from_rows(vec![vec![B, E], vec![B]]).is_err());
    }

    #[test]
    fn test_out_of_bounds_get_is_empty() {
        let grid = Grid::from_rows(vec![vec![B, B], vec![B, B]]).unwrap();
        assert_eq!(grid.get(2, 0), Cell::Empty);
        assert_eq!(grid.get(0, 2), Cell::Empty);
    }

    #[test]
    fn test_neighbor_owner_counting() {
        let grid = Grid::from_rows(vec![vec![B, B, B], vec![R, E, R], vec![B, B, B]]).unwrap();

        let center = grid.neighbor_owners(1, 1);
        assert_eq!(center, PlayerCounts { blue: 6, red: 2 });

        // Corner cell sees only three positions, one of them dead
        let corner = grid.neighbor_owners(0, 0);
        assert_eq!(corner.total(), 2);
    }

    #[test]
    fn test_border_has_no_wraparound() {
        let grid = Grid::from_rows(vec![vec![B, E], vec![E, B]]).unwrap();
        // Under a toroidal neighborhood (0,0) would see (1,1) several times
        assert_eq!(grid.neighbor_owners(0, 0).total(), 1);
    }

    #[test]
    fn test_overlay_clips_oversized_seed() {
        let mut grid = Grid::new(2, 2);
        let seed = Grid::from_rows(vec![vec![B, E, R], vec![E, R, B], vec![B, B, B]]).unwrap();

        grid.overlay(&seed);

        assert_eq!(grid.get(0, 0), B);
        assert_eq!(grid.get(1, 1), R);
        // Seed cells beyond the 2x2 target are dropped
        assert_eq!(grid.live_count(), 2);
    }

    #[test]
    fn test_clear() {
        let mut grid = Grid::from_rows(vec![vec![B, R], vec![R, B]]).unwrap();
        grid.clear();
        assert!(grid.is_empty());
        assert_eq!(grid.counts(), PlayerCounts::default());
    }
}
