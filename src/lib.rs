//! Two-Player Game of Life Duel
//!
//! A competitive variant of Conway's Game of Life: live cells belong to one
//! of two players, newborn cells take the color of their neighbor majority,
//! and matches are decided by elimination or by live-cell count at a
//! generation cap.

pub mod config;
pub mod engine;
pub mod pattern;
pub mod session;
pub mod utils;

pub use config::Settings;
pub use engine::{Cell, EngineError, Game, Player};
pub use session::{MatchOutcome, MatchReport, MatchRunner};

use anyhow::Result;

/// Play one bot-vs-bot match with the given settings
pub fn play_match(settings: &Settings) -> Result<MatchReport> {
    let mut runner = MatchRunner::from_settings(settings, settings.bots.rng_seed)?;
    Ok(runner.run_to_completion())
}
