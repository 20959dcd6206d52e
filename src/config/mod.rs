//! Configuration management for the Game of Life duel

pub mod settings;

pub use settings::{
    BotConfig, CliOverrides, GameConfig, OutputConfig, OutputFormat, SeedMode, SeedingConfig,
    Settings,
};
