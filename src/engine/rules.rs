//! Transition rules: Conway's neighbor counts plus color inheritance

use super::{Cell, Player, PlayerCounts};
use rand::Rng;
use std::cmp::Ordering;

/// Rules engine for the two-color automaton
pub struct DuelRules;

impl DuelRules {
    /// Whether a live cell stays alive with this many live neighbors
    pub fn survives(live_neighbors: usize) -> bool {
        live_neighbors == 2 || live_neighbors == 3
    }

    /// Whether an empty cell comes alive with this many live neighbors
    pub fn births(live_neighbors: usize) -> bool {
        live_neighbors == 3
    }

    /// Next state for one cell, given the per-owner counts of its live
    /// neighbors. Survival ignores the neighbors' owners; only birth looks
    /// at them.
    pub fn next_state(current: Cell, neighbors: PlayerCounts, rng: &mut impl Rng) -> Cell {
        let live = neighbors.total();
        match current {
            Cell::Owned(player) if Self::survives(live) => Cell::Owned(player),
            Cell::Owned(_) => Cell::Empty,
            Cell::Empty => match Self::birth_owner(neighbors, rng) {
                Some(player) => Cell::Owned(player),
                None => Cell::Empty,
            },
        }
    }

    /// Owner of a newborn cell: the plurality among exactly three live
    /// neighbors. Any other live count yields no birth.
    pub fn birth_owner(neighbors: PlayerCounts, rng: &mut impl Rng) -> Option<Player> {
        if neighbors.total() != 3 {
            return None;
        }

        match neighbors.blue.cmp(&neighbors.red) {
            Ordering::Greater => Some(Player::Blue),
            Ordering::Less => Some(Player::Red),
            // Unreachable while the guard above holds: an odd count cannot
            // split evenly between two owners.
            Ordering::Equal => Some(if rng.random_bool(0.5) {
                Player::Blue
            } else {
                Player::Red
            }),
        }
    }
}
