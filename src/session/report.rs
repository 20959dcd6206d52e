//! Match result reporting

use crate::engine::{Game, GameStats, Player, PlayerCounts};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;

/// How a match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    Winner(Player),
    Draw,
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchOutcome::Winner(player) => write!(f, "{} wins", player),
            MatchOutcome::Draw => write!(f, "draw"),
        }
    }
}

/// Everything worth keeping about a finished match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub outcome: MatchOutcome,
    pub generations: usize,
    pub final_counts: PlayerCounts,
    pub stats: GameStats,
    #[serde(skip)]
    pub elapsed: Duration,
}

impl MatchReport {
    pub fn new(outcome: MatchOutcome, generations: usize, game: &Game, elapsed: Duration) -> Self {
        Self {
            outcome,
            generations,
            final_counts: game.cell_counts(),
            stats: *game.stats(),
            elapsed,
        }
    }

    /// Save the report as pretty-printed JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize report")?;
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write report to {}", path.as_ref().display()))?;

        Ok(())
    }

    /// Multi-line console summary
    pub fn summary(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Result: {}\n", self.outcome));
        output.push_str(&format!(
            "Generations: {} ({:.3}s)\n",
            self.generations,
            self.elapsed.as_secs_f64()
        ));
        output.push_str(&format!(
            "Final cells:  blue {:4} | red {:4}\n",
            self.final_counts.blue, self.final_counts.red
        ));
        output.push_str(&format!(
            "Peak cells:   blue {:4} | red {:4}\n",
            self.stats.peak_cells.blue, self.stats.peak_cells.red
        ));
        output.push_str(&format!(
            "Total births: blue {:4} | red {:4}\n",
            self.stats.total_births.blue, self.stats.total_births.red
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_outcome_display() {
        assert_eq!(MatchOutcome::Winner(Player::Blue).to_string(), "blue wins");
        assert_eq!(MatchOutcome::Draw.to_string(), "draw");
    }

    #[test]
    fn test_report_save_and_summary() {
        let mut game = Game::new(5, 5).unwrap();
        game.place_cell(0, 0, Player::Blue);
        game.place_cell(0, 1, Player::Blue);
        game.place_cell(4, 4, Player::Red);

        let report = MatchReport::new(
            MatchOutcome::Winner(Player::Blue),
            12,
            &game,
            Duration::from_millis(150),
        );

        let summary = report.summary();
        assert!(summary.contains("blue wins"));
        assert!(summary.contains("Generations: 12"));

        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("reports/match.json");
        report.save_to_file(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let loaded: MatchReport = serde_json::from_str(&content).unwrap();
        assert_eq!(loaded.outcome, report.outcome);
        assert_eq!(loaded.final_counts, report.final_counts);
    }
}
