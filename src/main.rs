//! Main CLI application for the Game of Life duel

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life_duel::{
    config::{CliOverrides, OutputFormat, Settings},
    pattern::{io::create_example_seeds, library},
    session::{run_batch, MatchReport, MatchRunner},
    utils::{ColorOutput, GridRenderer},
};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "game_of_life_duel")]
#[command(about = "Two-player Game of Life duel")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a bot-vs-bot match
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Generation cap (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Grid height (overrides config)
        #[arg(long)]
        height: Option<usize>,

        /// Grid width (overrides config)
        #[arg(long)]
        width: Option<usize>,

        /// Seed with a catalogue pattern (overrides config)
        #[arg(short, long)]
        pattern: Option<String>,

        /// Seed from a '0'/'1'/'2' text file (overrides config)
        #[arg(short, long)]
        seed_file: Option<PathBuf>,

        /// Seed from a hash input string (overrides config)
        #[arg(long)]
        hash: Option<String>,

        /// Skip the per-generation frames
        #[arg(short, long)]
        quiet: bool,
    },

    /// Run a parallel batch of matches and summarize the results
    Simulate {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Number of matches to play
        #[arg(short, long, default_value_t = 100)]
        matches: usize,

        /// Generation cap (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Write the summary as JSON to this path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the built-in pattern catalogue
    Patterns {
        /// Render one pattern by id
        #[arg(short, long)]
        show: Option<String>,
    },

    /// Create example configuration and seed files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            generations,
            height,
            width,
            pattern,
            seed_file,
            hash,
            quiet,
        } => {
            let overrides = CliOverrides {
                height,
                width,
                generations,
                pattern,
                seed_file,
                hash_input: hash,
            };
            run_command(config, overrides, quiet)
        }
        Commands::Simulate {
            config,
            matches,
            generations,
            output,
        } => simulate_command(config, matches, generations, output),
        Commands::Patterns { show } => patterns_command(show),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

/// Load settings from the given path, falling back to defaults
fn load_settings(config_path: &PathBuf) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Ok(Settings::default())
    }
}

fn run_command(config_path: PathBuf, overrides: CliOverrides, quiet: bool) -> Result<()> {
    let mut settings = load_settings(&config_path)?;
    settings.merge_with_cli(&overrides);
    settings
        .validate()
        .context("Configuration validation failed")?;

    println!(
        "{}",
        ColorOutput::info(&format!(
            "Starting duel on a {}x{} grid, cap {} generations",
            settings.game.height, settings.game.width, settings.game.max_generations
        ))
    );

    let mut runner = MatchRunner::from_settings(&settings, settings.bots.rng_seed)
        .context("Failed to set up match")?;

    let report = if quiet {
        runner.run_to_completion()
    } else {
        let tick = Duration::from_millis(settings.game.tick_ms);
        let start = Instant::now();
        loop {
            let decided = runner.step();

            println!(
                "{}",
                GridRenderer::scoreboard(
                    runner.generation(),
                    runner.max_generations(),
                    runner.game().stats()
                )
            );
            println!("{}", GridRenderer::render(runner.game().cells()));

            match decided {
                Some(outcome) => {
                    break MatchReport::new(
                        outcome,
                        runner.generation(),
                        runner.game(),
                        start.elapsed(),
                    )
                }
                None => std::thread::sleep(tick),
            }
        }
    };

    match settings.output.format {
        OutputFormat::Text => {
            println!("{}", ColorOutput::success(&format!("Match over: {}", report.outcome)));
            println!("{}", report.summary());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    if settings.output.save_reports {
        let path = settings.output.report_directory.join("match_report.json");
        report
            .save_to_file(&path)
            .context("Failed to save match report")?;
        println!("Report saved to {}", path.display());
    }

    Ok(())
}

fn simulate_command(
    config_path: PathBuf,
    matches: usize,
    generations: Option<usize>,
    output: Option<PathBuf>,
) -> Result<()> {
    let mut settings = load_settings(&config_path)?;
    settings.merge_with_cli(&CliOverrides {
        generations,
        ..Default::default()
    });
    settings
        .validate()
        .context("Configuration validation failed")?;

    println!(
        "{}",
        ColorOutput::info(&format!("Simulating {} matches...", matches))
    );

    let start = Instant::now();
    let summary = run_batch(&settings, matches).context("Batch simulation failed")?;

    println!(
        "{}",
        ColorOutput::success(&format!(
            "Finished in {:.3}s",
            start.elapsed().as_secs_f64()
        ))
    );
    println!("\n{}", GridRenderer::batch_table(&summary));

    if let Some(path) = output {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&summary)?;
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write summary to {}", path.display()))?;
        println!("Summary saved to {}", path.display());
    }

    Ok(())
}

fn patterns_command(show: Option<String>) -> Result<()> {
    match show {
        Some(id) => {
            let pattern = library::find(&id)
                .with_context(|| format!("Unknown pattern '{}'. Try 'patterns' to list ids", id))?;

            println!("{} ({})", pattern.name, pattern.category);
            println!("{}", pattern.description);
            println!("Period: {} | Rarity: {}", pattern.period, pattern.rarity);

            let mut grid =
                game_of_life_duel::engine::Grid::new(pattern.height(), pattern.width());
            pattern.stamp(&mut grid, 0, 0, game_of_life_duel::Player::Blue);
            println!("\n{}", GridRenderer::render(&grid));
        }
        None => {
            println!("Pattern Catalogue:");
            println!("Id          | Name        | Category   | Period | Cells | Rarity");
            println!("------------|-------------|------------|--------|-------|-------");
            for pattern in library::PATTERNS {
                println!(
                    "{:11} | {:11} | {:10} | {:6} | {:5} | {}",
                    pattern.id,
                    pattern.name,
                    pattern.category.to_string(),
                    pattern.period,
                    pattern.cells.len(),
                    "⭐".repeat(pattern.rarity as usize),
                );
            }
        }
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let seeds_dir = directory.join("input/seeds");
    let reports_dir = directory.join("output/reports");

    for dir in [&config_dir, &seeds_dir, &reports_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        let default_settings = Settings::default();
        default_settings
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_seeds(&seeds_dir).context("Failed to create example seeds")?;
    println!("Created example seeds in: {}", seeds_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Add your own seeds to {}", seeds_dir.display());
    println!("3. Run: cargo run -- run --config config/default.yaml");

    Ok(())
}
