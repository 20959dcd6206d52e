//! Configuration settings for the Game of Life duel

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub game: GameConfig,
    pub seeding: SeedingConfig,
    pub bots: BotConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub height: usize,
    pub width: usize,
    pub max_generations: usize,
    pub tick_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedMode {
    /// Scatter random cells, blue in the top half and red in the bottom
    Random,
    /// Stamp a catalogue pattern for each player
    Library,
    /// Load a '0'/'1'/'2' seed file verbatim
    File,
    /// Derive a pattern from a hash input string for each player
    Hash,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedingConfig {
    pub mode: SeedMode,
    /// Catalogue pattern id, used in library mode
    pub pattern: String,
    pub seed_file: Option<PathBuf>,
    pub hash_input: Option<String>,
    /// Fraction of the grid filled per player in random mode
    pub fill_density: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    pub enabled: bool,
    pub placements_per_turn: usize,
    pub rng_seed: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub save_reports: bool,
    pub report_directory: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            game: GameConfig {
                height: 50,
                width: 50,
                max_generations: 100,
                tick_ms: 200,
            },
            seeding: SeedingConfig {
                mode: SeedMode::Random,
                pattern: "glider".to_string(),
                seed_file: None,
                hash_input: None,
                fill_density: 0.06,
            },
            bots: BotConfig {
                enabled: true,
                placements_per_turn: 2,
                rng_seed: 42,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                save_reports: false,
                report_directory: PathBuf::from("output/reports"),
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.game.height == 0 || self.game.width == 0 {
            anyhow::bail!("Grid dimensions must be positive");
        }

        if self.game.max_generations == 0 {
            anyhow::bail!("Generation cap must be positive");
        }

        if !(self.seeding.fill_density > 0.0 && self.seeding.fill_density <= 1.0) {
            anyhow::bail!("Fill density must be within (0, 1]");
        }

        if self.seeding.mode == SeedMode::File && self.seeding.seed_file.is_none() {
            anyhow::bail!("Seed mode 'file' requires a seed_file path");
        }

        if self.seeding.mode == SeedMode::Hash && self.seeding.hash_input.is_none() {
            anyhow::bail!("Seed mode 'hash' requires a hash_input string");
        }

        if self.seeding.mode == SeedMode::Library
            && crate::pattern::library::find(&self.seeding.pattern).is_none()
        {
            anyhow::bail!("Unknown catalogue pattern: {}", self.seeding.pattern);
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(height) = cli_overrides.height {
            self.game.height = height;
        }
        if let Some(width) = cli_overrides.width {
            self.game.width = width;
        }
        if let Some(generations) = cli_overrides.generations {
            self.game.max_generations = generations;
        }
        if let Some(ref pattern) = cli_overrides.pattern {
            self.seeding.mode = SeedMode::Library;
            self.seeding.pattern = pattern.clone();
        }
        if let Some(ref seed_file) = cli_overrides.seed_file {
            self.seeding.mode = SeedMode::File;
            self.seeding.seed_file = Some(seed_file.clone());
        }
        if let Some(ref hash_input) = cli_overrides.hash_input {
            self.seeding.mode = SeedMode::Hash;
            self.seeding.hash_input = Some(hash_input.clone());
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub height: Option<usize>,
    pub width: Option<usize>,
    pub generations: Option<usize>,
    pub pattern: Option<String>,
    pub seed_file: Option<PathBuf>,
    pub hash_input: Option<String>,
}
