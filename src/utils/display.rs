//! Display and output formatting utilities

use crate::engine::{Cell, GameStats, Grid, Player};
use crate::session::BatchSummary;

/// Format grids and match state for the console
pub struct GridRenderer;

impl GridRenderer {
    /// Render a grid as two-character cells. Blue and red use different
    /// glyphs so the board stays readable without color support.
    pub fn render(grid: &Grid) -> String {
        let mut output = String::new();
        for row in 0..grid.height {
            for col in 0..grid.width {
                match grid.get(row, col) {
                    Cell::Empty => output.push_str("··"),
                    Cell::Owned(Player::Blue) => {
                        output.push_str(&ColorOutput::colored("██", Color::Blue))
                    }
                    Cell::Owned(Player::Red) => {
                        output.push_str(&ColorOutput::colored("▓▓", Color::Red))
                    }
                }
            }
            output.push('\n');
        }
        output
    }

    /// One-line score header for a running match
    pub fn scoreboard(generation: usize, cap: usize, stats: &GameStats) -> String {
        format!(
            "Gen {:3}/{} | blue {:3} (peak {:3}, births {:3}) | red {:3} (peak {:3}, births {:3})",
            generation,
            cap,
            stats.current_cells.blue,
            stats.peak_cells.blue,
            stats.total_births.blue,
            stats.current_cells.red,
            stats.peak_cells.red,
            stats.total_births.red,
        )
    }

    /// Summary table for a batch of matches
    pub fn batch_table(summary: &BatchSummary) -> String {
        let mut output = String::new();

        output.push_str("Batch Summary:\n");
        output.push_str("Matches | Blue wins | Red wins | Draws | Avg gens\n");
        output.push_str("--------|-----------|----------|-------|---------\n");
        output.push_str(&format!(
            "{:7} | {:9} | {:8} | {:5} | {:8.1}\n",
            summary.matches,
            summary.blue_wins,
            summary.red_wins,
            summary.draws,
            summary.average_generations,
        ));

        output
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }

    /// Format text in a player's color
    pub fn player(player: Player, text: &str) -> String {
        match player {
            Player::Blue => Self::colored(text, Color::Blue),
            Player::Red => Self::colored(text, Color::Red),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::PlayerCounts;

    #[test]
    fn test_grid_rendering() {
        let grid = Grid::from_rows(vec![
            vec![Cell::Owned(Player::Blue), Cell::Empty],
            vec![Cell::Empty, Cell::Owned(Player::Red)],
        ])
        .unwrap();

        let rendered = GridRenderer::render(&grid);
        assert_eq!(rendered.lines().count(), 2);
        assert!(rendered.contains("··"));
        assert!(rendered.contains("██"));
        assert!(rendered.contains("▓▓"));
    }

    #[test]
    fn test_scoreboard_mentions_both_players() {
        let stats = GameStats {
            current_cells: PlayerCounts { blue: 12, red: 9 },
            peak_cells: PlayerCounts { blue: 20, red: 15 },
            total_births: PlayerCounts { blue: 7, red: 4 },
        };

        let line = GridRenderer::scoreboard(3, 100, &stats);
        assert!(line.contains("blue  12"));
        assert!(line.contains("red   9"));
        assert!(line.contains("3/100"));
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        // Should either be colored or plain text
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
