//! Two-color Game of Life core

pub mod cell;
pub mod game;
pub mod grid;
pub mod rules;
pub mod stats;

pub use cell::{Cell, Player};
pub use game::{EngineError, Game};
pub use grid::Grid;
pub use rules::DuelRules;
pub use stats::{GameStats, PlayerCounts};
