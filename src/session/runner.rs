//! Match driver: seeds a game from the settings and steps it to completion
//!
//! The runner owns the engine and drives it from outside, one generation per
//! `step` call. The engine itself has no notion of ticks, caps, or winners.

use super::bot::BotPlayer;
use super::report::{MatchOutcome, MatchReport};
use crate::config::{SeedMode, Settings};
use crate::engine::{Cell, Game, Grid, Player};
use crate::pattern::{io, library, mined};
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

pub struct MatchRunner {
    game: Game,
    bots: Vec<BotPlayer>,
    generation: usize,
    max_generations: usize,
}

impl MatchRunner {
    /// Wrap an existing game with a generation cap and no bots
    pub fn new(game: Game, max_generations: usize) -> Self {
        Self {
            game,
            bots: Vec::new(),
            generation: 0,
            max_generations,
        }
    }

    /// Build a seeded match from the settings. `match_seed` drives every
    /// random choice (seeding scatter and bot placement), so the same
    /// settings and seed replay the same match.
    pub fn from_settings(settings: &Settings, match_seed: u64) -> Result<Self> {
        let seed_grid = initial_grid(settings, match_seed)?;
        let game = Game::with_seed(settings.game.height, settings.game.width, &seed_grid)?;

        let mut runner = Self::new(game, settings.game.max_generations);
        if settings.bots.enabled {
            runner.bots.push(BotPlayer::new(
                Player::Blue,
                match_seed.wrapping_add(1),
                settings.bots.placements_per_turn,
            ));
            runner.bots.push(BotPlayer::new(
                Player::Red,
                match_seed.wrapping_add(2),
                settings.bots.placements_per_turn,
            ));
        }

        Ok(runner)
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn max_generations(&self) -> usize {
        self.max_generations
    }

    /// Let each bot take its turn, then advance one generation.
    /// Returns the outcome once the match is decided.
    pub fn step(&mut self) -> Option<MatchOutcome> {
        for bot in &mut self.bots {
            bot.take_turn(&mut self.game);
        }
        self.game.evolve();
        self.generation += 1;
        self.outcome()
    }

    /// Elimination is checked first: a player with no live cells loses on
    /// the spot. At the generation cap, more live cells wins.
    fn outcome(&self) -> Option<MatchOutcome> {
        let counts = self.game.cell_counts();

        if counts.blue == 0 && counts.red == 0 {
            return Some(MatchOutcome::Draw);
        }
        if counts.red == 0 {
            return Some(MatchOutcome::Winner(Player::Blue));
        }
        if counts.blue == 0 {
            return Some(MatchOutcome::Winner(Player::Red));
        }

        if self.generation >= self.max_generations {
            return Some(match counts.leader() {
                Some(player) => MatchOutcome::Winner(player),
                None => MatchOutcome::Draw,
            });
        }

        None
    }

    /// Step without pausing until the match is decided
    pub fn run_to_completion(&mut self) -> MatchReport {
        let start = Instant::now();
        loop {
            if let Some(outcome) = self.step() {
                return MatchReport::new(outcome, self.generation, &self.game, start.elapsed());
            }
        }
    }
}

/// Build the starting grid for a match according to the seeding mode
fn initial_grid(settings: &Settings, match_seed: u64) -> Result<Grid> {
    let height = settings.game.height;
    let width = settings.game.width;

    match settings.seeding.mode {
        SeedMode::Random => {
            let mut rng = StdRng::seed_from_u64(match_seed);
            let mut grid = Grid::new(height, width);
            let per_player = ((height * width) as f64 * settings.seeding.fill_density) as usize;

            // Blue scatters over the top half, red over the bottom; on odd
            // heights the middle row is contested
            for _ in 0..per_player {
                let row = rng.random_range(0..height.div_ceil(2));
                let col = rng.random_range(0..width);
                let idx = grid.index(row, col);
                grid.cells[idx] = Cell::Owned(Player::Blue);
            }
            for _ in 0..per_player {
                let row = rng.random_range(height / 2..height);
                let col = rng.random_range(0..width);
                let idx = grid.index(row, col);
                grid.cells[idx] = Cell::Owned(Player::Red);
            }

            Ok(grid)
        }
        SeedMode::Library => {
            let pattern = library::find(&settings.seeding.pattern).with_context(|| {
                format!("Unknown catalogue pattern: {}", settings.seeding.pattern)
            })?;

            let mut grid = Grid::new(height, width);
            let (blue_anchor, red_anchor) =
                mirrored_anchors(height, width, pattern.height(), pattern.width());
            pattern.stamp(&mut grid, blue_anchor.0, blue_anchor.1, Player::Blue);
            pattern.stamp(&mut grid, red_anchor.0, red_anchor.1, Player::Red);

            Ok(grid)
        }
        SeedMode::File => {
            let path = settings
                .seeding
                .seed_file
                .as_ref()
                .context("Seed mode 'file' requires a seed_file path")?;
            io::load_seed_from_file(path)
        }
        SeedMode::Hash => {
            let input = settings
                .seeding
                .hash_input
                .as_ref()
                .context("Seed mode 'hash' requires a hash_input string")?;
            let pattern = mined::derive(input);

            let mut grid = Grid::new(height, width);
            let (blue_anchor, red_anchor) =
                mirrored_anchors(height, width, pattern.height(), pattern.width());
            pattern.stamp(&mut grid, blue_anchor.0, blue_anchor.1, Player::Blue);
            pattern.stamp(&mut grid, red_anchor.0, red_anchor.1, Player::Red);

            Ok(grid)
        }
    }
}

/// Center one copy of a pattern in the blue quarter and one in the red
/// quarter, diagonally opposed
fn mirrored_anchors(
    height: usize,
    width: usize,
    pattern_height: usize,
    pattern_width: usize,
) -> ((usize, usize), (usize, usize)) {
    let blue = (
        (height / 4).saturating_sub(pattern_height / 2),
        (width / 4).saturating_sub(pattern_width / 2),
    );
    let red = (
        (height * 3 / 4).saturating_sub(pattern_height / 2),
        (width * 3 / 4).saturating_sub(pattern_width / 2),
    );
    (blue, red)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeedMode;

    fn quiet_settings() -> Settings {
        let mut settings = Settings::default();
        settings.game.height = 12;
        settings.game.width = 12;
        settings.game.max_generations = 10;
        settings.bots.enabled = false;
        settings
    }

    #[test]
    fn test_empty_board_is_an_immediate_draw() {
        let game = Game::new(8, 8).unwrap();
        let mut runner = MatchRunner::new(game, 50);

        let report = runner.run_to_completion();
        assert_eq!(report.outcome, MatchOutcome::Draw);
        assert_eq!(report.generations, 1);
    }

    #[test]
    fn test_lone_player_wins_by_elimination() {
        let mut game = Game::new(8, 8).unwrap();
        // A stable blue block and nothing red
        for &(row, col) in &[(1, 1), (1, 2), (2, 1), (2, 2)] {
            game.place_cell(row, col, Player::Blue);
        }

        let mut runner = MatchRunner::new(game, 50);
        let report = runner.run_to_completion();

        assert_eq!(report.outcome, MatchOutcome::Winner(Player::Blue));
        assert_eq!(report.generations, 1);
        assert_eq!(report.final_counts.blue, 4);
    }

    #[test]
    fn test_cap_decision_goes_to_the_larger_army() {
        let mut game = Game::new(12, 12).unwrap();
        // Blue blinker (3 cells) far from a red block (4 cells)
        for &(row, col) in &[(1, 1), (1, 2), (1, 3)] {
            game.place_cell(row, col, Player::Blue);
        }
        for &(row, col) in &[(8, 8), (8, 9), (9, 8), (9, 9)] {
            game.place_cell(row, col, Player::Red);
        }

        let mut runner = MatchRunner::new(game, 6);
        let report = runner.run_to_completion();

        assert_eq!(report.generations, 6);
        assert_eq!(report.outcome, MatchOutcome::Winner(Player::Red));
    }

    #[test]
    fn test_equal_armies_at_the_cap_draw() {
        let mut game = Game::new(12, 12).unwrap();
        for &(row, col) in &[(1, 1), (1, 2), (2, 1), (2, 2)] {
            game.place_cell(row, col, Player::Blue);
        }
        for &(row, col) in &[(8, 8), (8, 9), (9, 8), (9, 9)] {
            game.place_cell(row, col, Player::Red);
        }

        let mut runner = MatchRunner::new(game, 4);
        assert_eq!(runner.run_to_completion().outcome, MatchOutcome::Draw);
    }

    #[test]
    fn test_seeded_matches_replay_identically() {
        let mut settings = quiet_settings();
        settings.bots.enabled = true;

        let first = MatchRunner::from_settings(&settings, 7)
            .unwrap()
            .run_to_completion();
        let second = MatchRunner::from_settings(&settings, 7)
            .unwrap()
            .run_to_completion();

        assert_eq!(first.outcome, second.outcome);
        assert_eq!(first.generations, second.generations);
        assert_eq!(first.final_counts, second.final_counts);
        assert_eq!(first.stats, second.stats);
    }

    #[test]
    fn test_library_seeding_places_both_colors() {
        let mut settings = quiet_settings();
        settings.seeding.mode = SeedMode::Library;
        settings.seeding.pattern = "blinker".to_string();

        let runner = MatchRunner::from_settings(&settings, 0).unwrap();
        let counts = runner.game().cell_counts();
        assert_eq!(counts.blue, 3);
        assert_eq!(counts.red, 3);
    }

    #[test]
    fn test_hash_seeding_is_deterministic() {
        let mut settings = quiet_settings();
        settings.seeding.mode = SeedMode::Hash;
        settings.seeding.hash_input = Some("duel-opening-1".to_string());

        let first = MatchRunner::from_settings(&settings, 0).unwrap();
        let second = MatchRunner::from_settings(&settings, 0).unwrap();
        assert_eq!(first.game().cells(), second.game().cells());
    }
}
