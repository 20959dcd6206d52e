//! Simulated opponents
//!
//! A bot stands in for a human clicking the grid: each turn it picks random
//! coordinates and routes them through `place_cell`, so the engine's toggle
//! rules apply unchanged (hitting its own cell removes it, hitting an
//! opponent's cell does nothing).

use crate::engine::{Game, Player};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A seeded random-placement player
#[derive(Debug, Clone)]
pub struct BotPlayer {
    player: Player,
    rng: StdRng,
    placements_per_turn: usize,
}

impl BotPlayer {
    pub fn new(player: Player, seed: u64, placements_per_turn: usize) -> Self {
        Self {
            player,
            rng: StdRng::seed_from_u64(seed),
            placements_per_turn,
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    /// Place this turn's cells
    pub fn take_turn(&mut self, game: &mut Game) {
        for _ in 0..self.placements_per_turn {
            let row = self.rng.random_range(0..game.height());
            let col = self.rng.random_range(0..game.width());
            game.place_cell(row, col, self.player);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_gives_same_moves() {
        let mut first = Game::new(10, 10).unwrap();
        let mut second = Game::new(10, 10).unwrap();

        let mut bot_a = BotPlayer::new(Player::Blue, 99, 5);
        let mut bot_b = BotPlayer::new(Player::Blue, 99, 5);

        bot_a.take_turn(&mut first);
        bot_b.take_turn(&mut second);

        assert_eq!(first.cells(), second.cells());
    }

    #[test]
    fn test_bot_never_captures_opponent_cells() {
        let mut game = Game::new(4, 4).unwrap();
        for row in 0..4 {
            for col in 0..4 {
                game.place_cell(row, col, Player::Red);
            }
        }

        let mut bot = BotPlayer::new(Player::Blue, 1, 32);
        bot.take_turn(&mut game);

        let counts = game.cell_counts();
        assert_eq!(counts.blue, 0);
        assert_eq!(counts.red, 16);
    }
}
