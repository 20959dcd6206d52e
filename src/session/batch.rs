//! Parallel batches of bot-vs-bot matches

use super::report::{MatchOutcome, MatchReport};
use super::runner::MatchRunner;
use crate::config::Settings;
use crate::engine::Player;
use anyhow::Result;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Aggregated results of a batch run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub matches: usize,
    pub blue_wins: usize,
    pub red_wins: usize,
    pub draws: usize,
    pub average_generations: f64,
}

impl BatchSummary {
    fn aggregate(reports: &[MatchReport]) -> Self {
        let mut summary = Self {
            matches: reports.len(),
            blue_wins: 0,
            red_wins: 0,
            draws: 0,
            average_generations: 0.0,
        };

        for report in reports {
            match report.outcome {
                MatchOutcome::Winner(Player::Blue) => summary.blue_wins += 1,
                MatchOutcome::Winner(Player::Red) => summary.red_wins += 1,
                MatchOutcome::Draw => summary.draws += 1,
            }
        }

        if !reports.is_empty() {
            let total: usize = reports.iter().map(|report| report.generations).sum();
            summary.average_generations = total as f64 / reports.len() as f64;
        }

        summary
    }
}

/// Run `matches` independent matches in parallel. Match `i` is seeded with
/// the configured rng seed offset by `i`, so a batch is reproducible.
pub fn run_batch(settings: &Settings, matches: usize) -> Result<BatchSummary> {
    let reports: Vec<MatchReport> = (0..matches as u64)
        .into_par_iter()
        .map(|index| {
            let seed = settings.bots.rng_seed.wrapping_add(index);
            let mut runner = MatchRunner::from_settings(settings, seed)?;
            Ok(runner.run_to_completion())
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(BatchSummary::aggregate(&reports))
}
