//! Built-in catalogue of classic Game of Life patterns

use crate::engine::{Cell, Grid, Player};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Broad behavioral family of a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternCategory {
    StillLife,
    Oscillator,
    Spaceship,
    Gun,
    Methuselah,
}

impl fmt::Display for PatternCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PatternCategory::StillLife => "still life",
            PatternCategory::Oscillator => "oscillator",
            PatternCategory::Spaceship => "spaceship",
            PatternCategory::Gun => "gun",
            PatternCategory::Methuselah => "methuselah",
        };
        write!(f, "{}", label)
    }
}

/// A named pattern as relative live-cell coordinates
pub struct Pattern {
    pub id: &'static str,
    pub name: &'static str,
    pub category: PatternCategory,
    pub cells: &'static [(usize, usize)],
    /// Oscillation or translation period; 0 for still lifes, and for
    /// methuselahs the number of generations until the pattern stabilizes
    pub period: usize,
    pub description: &'static str,
    /// 1-5, higher is rarer
    pub rarity: u8,
}

impl Pattern {
    /// Bounding-box height of the pattern
    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(row, _)| row + 1).max().unwrap_or(0)
    }

    /// Bounding-box width of the pattern
    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(_, col)| col + 1).max().unwrap_or(0)
    }

    /// Write the pattern onto a grid for one player, its top-left corner at
    /// `(top, left)`. Cells falling outside the grid are dropped.
    pub fn stamp(&self, grid: &mut Grid, top: usize, left: usize, player: Player) {
        for &(row, col) in self.cells {
            let (r, c) = (top + row, left + col);
            if r < grid.height && c < grid.width {
                let idx = grid.index(r, c);
                grid.cells[idx] = Cell::Owned(player);
            }
        }
    }
}

/// The built-in catalogue. The "essential seven": one still life, three
/// oscillators, two spaceships, and a methuselah.
pub const PATTERNS: &[Pattern] = &[
    Pattern {
        id: "block",
        name: "Block",
        category: PatternCategory::StillLife,
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
        period: 0,
        description: "Most stable pattern",
        rarity: 1,
    },
    Pattern {
        id: "blinker",
        name: "Blinker",
        category: PatternCategory::Oscillator,
        cells: &[(0, 1), (1, 1), (2, 1)],
        period: 2,
        description: "Flips between horizontal and vertical",
        rarity: 1,
    },
    Pattern {
        id: "toad",
        name: "Toad",
        category: PatternCategory::Oscillator,
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
        period: 2,
        description: "Shifts between two states",
        rarity: 2,
    },
    Pattern {
        id: "beacon",
        name: "Beacon",
        category: PatternCategory::Oscillator,
        cells: &[
            (0, 0),
            (0, 1),
            (1, 0),
            (1, 1),
            (2, 2),
            (2, 3),
            (3, 2),
            (3, 3),
        ],
        period: 2,
        description: "Two blocks that blink",
        rarity: 2,
    },
    Pattern {
        id: "glider",
        name: "Glider",
        category: PatternCategory::Spaceship,
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
        period: 4,
        description: "Moves diagonally across the grid",
        rarity: 3,
    },
    Pattern {
        id: "lwss",
        name: "Spaceship",
        category: PatternCategory::Spaceship,
        cells: &[
            (0, 1),
            (0, 4),
            (1, 0),
            (2, 0),
            (2, 4),
            (3, 0),
            (3, 1),
            (3, 2),
            (3, 3),
        ],
        period: 4,
        description: "Lightweight spaceship",
        rarity: 4,
    },
    Pattern {
        id: "r-pentomino",
        name: "R-pentomino",
        category: PatternCategory::Methuselah,
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
        period: 1103,
        description: "Chaotic evolution pattern",
        rarity: 5,
    },
];

/// Look up a catalogue pattern by id, case-insensitively
pub fn find(id: &str) -> Option<&'static Pattern> {
    PATTERNS
        .iter()
        .find(|pattern| pattern.id.eq_ignore_ascii_case(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Game;

    #[test]
    fn test_find_is_case_insensitive() {
        assert!(find("glider").is_some());
        assert!(find("Glider").is_some());
        assert!(find("no-such-pattern").is_none());
    }

    #[test]
    fn test_bounding_boxes() {
        let block = find("block").unwrap();
        assert_eq!((block.height(), block.width()), (2, 2));

        let lwss = find("lwss").unwrap();
        assert_eq!((lwss.height(), lwss.width()), (4, 5));
    }

    #[test]
    fn test_stamp_places_cells_for_the_player() {
        let glider = find("glider").unwrap();
        let mut grid = Grid::new(10, 10);
        glider.stamp(&mut grid, 3, 3, Player::Red);

        assert_eq!(grid.live_count(), 5);
        assert_eq!(grid.counts().red, 5);
        assert_eq!(grid.get(3, 4), Cell::Owned(Player::Red));
    }

    #[test]
    fn test_stamp_clips_at_the_border() {
        let block = find("block").unwrap();
        let mut grid = Grid::new(4, 4);
        block.stamp(&mut grid, 3, 3, Player::Blue);

        // Only the pattern's top-left cell fits
        assert_eq!(grid.live_count(), 1);
    }

    #[test]
    fn test_block_is_a_still_life_in_the_engine() {
        let block = find("block").unwrap();
        let mut game = Game::new(6, 6).unwrap();
        for &(row, col) in block.cells {
            game.place_cell(1 + row, 1 + col, Player::Blue);
        }

        let before = game.cells().clone();
        game.evolve();
        assert_eq!(game.cells(), &before);
    }

    #[test]
    fn test_catalogue_entries_are_well_formed() {
        for pattern in PATTERNS {
            assert!(!pattern.cells.is_empty(), "{} has no cells", pattern.id);
            assert!((1..=5).contains(&pattern.rarity), "{} rarity", pattern.id);
        }
    }
}
