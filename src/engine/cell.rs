//! Cell and player types for the two-color automaton

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two competing colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Player {
    Blue,
    Red,
}

impl Player {
    /// The opposing player
    pub fn opponent(self) -> Self {
        match self {
            Player::Blue => Player::Red,
            Player::Red => Player::Blue,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Blue => write!(f, "blue"),
            Player::Red => write!(f, "red"),
        }
    }
}

/// State of a single grid position: dead, or alive with an owner.
/// A cell is always exactly one of the three.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    #[default]
    Empty,
    Owned(Player),
}

impl Cell {
    /// Whether the cell is alive (owned by either player)
    pub fn is_live(self) -> bool {
        matches!(self, Cell::Owned(_))
    }

    /// The owner of a live cell, or `None` for an empty one
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Owned(player) => Some(player),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involutive() {
        assert_eq!(Player::Blue.opponent(), Player::Red);
        assert_eq!(Player::Red.opponent(), Player::Blue);
        assert_eq!(Player::Blue.opponent().opponent(), Player::Blue);
    }

    #[test]
    fn test_cell_owner() {
        assert!(!Cell::Empty.is_live());
        assert_eq!(Cell::Empty.owner(), None);
        assert!(Cell::Owned(Player::Red).is_live());
        assert_eq!(Cell::Owned(Player::Blue).owner(), Some(Player::Blue));
    }
}
