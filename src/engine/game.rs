//! The two-player game engine: double-buffered grid plus statistics

use super::{Cell, DuelRules, GameStats, Grid, Player, PlayerCounts};
use itertools::iproduct;
use thiserror::Error;

/// Construction-time failure. All runtime operations are total: out-of-range
/// coordinates are ignored instead of rejected, so interactive callers never
/// see an error after construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("grid dimensions must be positive, got {height}x{width}")]
    InvalidDimensions { height: usize, width: usize },
}

/// Two-player Conway's Game of Life.
///
/// Two arena grids live for the lifetime of the engine; `active` marks the
/// buffer holding the current generation. Every cell of a sweep is evaluated
/// against that snapshot while the next generation is written into the other
/// buffer, and the swap afterwards is an index flip, not a copy.
///
/// The engine is single-threaded and synchronous: each operation completes
/// its full grid sweep and statistics recompute before returning.
#[derive(Debug, Clone)]
pub struct Game {
    buffers: [Grid; 2],
    active: usize,
    stats: GameStats,
}

impl Game {
    /// Create an empty game. Both dimensions must be positive.
    pub fn new(height: usize, width: usize) -> Result<Self, EngineError> {
        if height == 0 || width == 0 {
            return Err(EngineError::InvalidDimensions { height, width });
        }

        Ok(Self {
            buffers: [Grid::new(height, width), Grid::new(height, width)],
            active: 0,
            stats: GameStats::default(),
        })
    }

    /// Create a game seeded from an existing grid. The seed's dimensions may
    /// differ from the target's; cells are copied at matching offsets and
    /// out-of-bounds seed cells are silently ignored. Statistics are computed
    /// immediately after seeding.
    pub fn with_seed(height: usize, width: usize, seed: &Grid) -> Result<Self, EngineError> {
        let mut game = Self::new(height, width)?;
        game.buffers[game.active].overlay(seed);
        game.update_stats();
        Ok(game)
    }

    /// Grid height, fixed after construction
    pub fn height(&self) -> usize {
        self.buffers[self.active].height
    }

    /// Grid width, fixed after construction
    pub fn width(&self) -> usize {
        self.buffers[self.active].width
    }

    /// Read view of the current generation. Callers must not rely on this
    /// reference across mutating calls; clone the grid to keep a snapshot.
    pub fn cells(&self) -> &Grid {
        &self.buffers[self.active]
    }

    /// Snapshot copy of the current per-owner live counts
    pub fn cell_counts(&self) -> PlayerCounts {
        self.stats.current_cells
    }

    /// Full statistics for the current game
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// Toggle ownership at a cell:
    /// an empty cell becomes owned by `player`, a cell already owned by
    /// `player` becomes empty again, and an opponent's cell is left alone.
    /// Out-of-range coordinates are a no-op.
    pub fn place_cell(&mut self, row: usize, col: usize, player: Player) -> &Grid {
        let grid = &mut self.buffers[self.active];
        if row < grid.height && col < grid.width {
            let idx = grid.index(row, col);
            match grid.cells[idx] {
                Cell::Empty => grid.cells[idx] = Cell::Owned(player),
                Cell::Owned(owner) if owner == player => grid.cells[idx] = Cell::Empty,
                Cell::Owned(_) => {} // opponent cells cannot be overwritten
            }
        }
        self.update_stats();
        self.cells()
    }

    /// Advance the automaton by exactly one generation.
    ///
    /// Live cells survive on 2 or 3 live neighbors regardless of owner;
    /// empty cells with exactly 3 live neighbors are born to the owner
    /// holding the neighbor plurality. Births are tallied per owner.
    pub fn evolve(&mut self) -> &Grid {
        let mut rng = rand::rng();
        let mut births = PlayerCounts::default();

        let (current, next) = split_buffers(&mut self.buffers, self.active);
        for (row, col) in iproduct!(0..current.height, 0..current.width) {
            let state = current.get(row, col);
            let neighbors = current.neighbor_owners(row, col);
            let outcome = DuelRules::next_state(state, neighbors, &mut rng);

            if state == Cell::Empty {
                if let Cell::Owned(player) = outcome {
                    *births.get_mut(player) += 1;
                }
            }

            let idx = next.index(row, col);
            next.cells[idx] = outcome;
        }

        self.stats.total_births.blue += births.blue;
        self.stats.total_births.red += births.red;

        self.active ^= 1;
        self.update_stats();
        self.cells()
    }

    /// Clear both buffers and zero every statistic, peaks included
    pub fn reset(&mut self) -> &Grid {
        for grid in &mut self.buffers {
            grid.clear();
        }
        self.stats = GameStats::default();
        self.cells()
    }

    fn update_stats(&mut self) {
        let counts = self.buffers[self.active].counts();
        self.stats.current_cells = counts;
        self.stats.peak_cells.blue = self.stats.peak_cells.blue.max(counts.blue);
        self.stats.peak_cells.red = self.stats.peak_cells.red.max(counts.red);
    }
}

/// Borrow the active buffer read-only and the inactive one mutably
fn split_buffers(buffers: &mut [Grid; 2], active: usize) -> (&Grid, &mut Grid) {
    let (head, tail) = buffers.split_at_mut(1);
    if active == 0 {
        (&head[0], &mut tail[0])
    } else {
        (&tail[0], &mut head[0])
    }
}
