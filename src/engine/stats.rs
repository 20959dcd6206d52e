//! Per-player statistics for a running game

use super::Player;
use serde::{Deserialize, Serialize};

/// A blue/red pair of counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCounts {
    pub blue: usize,
    pub red: usize,
}

impl PlayerCounts {
    /// Counter for one player
    pub fn get(&self, player: Player) -> usize {
        match player {
            Player::Blue => self.blue,
            Player::Red => self.red,
        }
    }

    /// Mutable counter for one player
    pub fn get_mut(&mut self, player: Player) -> &mut usize {
        match player {
            Player::Blue => &mut self.blue,
            Player::Red => &mut self.red,
        }
    }

    /// Combined count for both players
    pub fn total(&self) -> usize {
        self.blue + self.red
    }

    /// The player with the strictly larger count, or `None` on a tie
    pub fn leader(&self) -> Option<Player> {
        match self.blue.cmp(&self.red) {
            std::cmp::Ordering::Greater => Some(Player::Blue),
            std::cmp::Ordering::Less => Some(Player::Red),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Aggregate statistics derived from the grid.
///
/// `current_cells` is recomputed from the live grid after every mutation,
/// `peak_cells` only ever grows between resets, and `total_births` counts
/// cells born during evolution (placed cells are not births).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub current_cells: PlayerCounts,
    pub peak_cells: PlayerCounts,
    pub total_births: PlayerCounts,
}
