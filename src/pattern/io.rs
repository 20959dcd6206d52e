//! File I/O for seed grids
//!
//! Seed files are plain text: one line per row, with '0' for empty cells,
//! '1' for blue cells, and '2' for red cells.

use crate::engine::{Cell, Grid, Player};
use anyhow::{Context, Result};
use std::path::Path;

/// Load a seed grid from a text file
pub fn load_seed_from_file<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read seed file: {}", path.as_ref().display()))?;

    parse_seed_from_string(&content)
        .with_context(|| format!("Failed to parse seed from file: {}", path.as_ref().display()))
}

/// Parse a seed grid from its string representation
pub fn parse_seed_from_string(content: &str) -> Result<Grid> {
    let lines: Vec<&str> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        anyhow::bail!("Seed file is empty or contains no valid rows");
    }

    let width = lines[0].len();
    let mut rows = Vec::with_capacity(lines.len());

    for (row_idx, line) in lines.iter().enumerate() {
        if line.len() != width {
            anyhow::bail!(
                "Row {} has length {}, expected {} (all rows must have the same length)",
                row_idx,
                line.len(),
                width
            );
        }

        let mut row = Vec::with_capacity(width);
        for (col_idx, ch) in line.chars().enumerate() {
            match ch {
                '0' => row.push(Cell::Empty),
                '1' => row.push(Cell::Owned(Player::Blue)),
                '2' => row.push(Cell::Owned(Player::Red)),
                _ => anyhow::bail!(
                    "Invalid character '{}' at position ({}, {}). Only '0', '1' and '2' are allowed",
                    ch,
                    row_idx,
                    col_idx
                ),
            }
        }
        rows.push(row);
    }

    Grid::from_rows(rows)
}

/// Save a seed grid to a text file
pub fn save_seed_to_file<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    let content = seed_to_string(grid);

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write seed to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Convert a seed grid to its string representation
pub fn seed_to_string(grid: &Grid) -> String {
    let mut result = String::with_capacity(grid.height * (grid.width + 1));

    for row in 0..grid.height {
        for col in 0..grid.width {
            result.push(match grid.get(row, col) {
                Cell::Empty => '0',
                Cell::Owned(Player::Blue) => '1',
                Cell::Owned(Player::Red) => '2',
            });
        }
        result.push('\n');
    }

    result
}

/// Create example seed files
pub fn create_example_seeds<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    // Blue blinker
    let blinker_content = "000\n111\n000\n";
    std::fs::write(dir.join("blinker.txt"), blinker_content)
        .context("Failed to write blinker.txt")?;

    // Blue glider
    let glider_content = "01000\n00100\n11100\n00000\n00000\n";
    std::fs::write(dir.join("glider.txt"), glider_content)
        .context("Failed to write glider.txt")?;

    // A blue glider heading for a red R-pentomino
    let duel_content = "010000000\n001000000\n111000000\n000000000\n000000000\n000000000\n000000022\n000000220\n000000020\n";
    std::fs::write(dir.join("duel.txt"), duel_content).context("Failed to write duel.txt")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::PlayerCounts;
    use tempfile::tempdir;

    #[test]
    fn test_parse_seed_from_string() {
        let content = "012\n120\n201\n";
        let grid = parse_seed_from_string(content).unwrap();

        assert_eq!(grid.height, 3);
        assert_eq!(grid.width, 3);
        assert_eq!(grid.counts(), PlayerCounts { blue: 3, red: 3 });
        assert_eq!(grid.get(0, 1), Cell::Owned(Player::Blue));
        assert_eq!(grid.get(0, 2), Cell::Owned(Player::Red));
    }

    #[test]
    fn test_round_trip() {
        let original = "010\n202\n010\n";
        let grid = parse_seed_from_string(original).unwrap();
        assert_eq!(seed_to_string(&grid), original);
    }

    #[test]
    fn test_invalid_input() {
        // Invalid character
        assert!(parse_seed_from_string("010\n1X1\n010\n").is_err());

        // Inconsistent row lengths
        assert!(parse_seed_from_string("010\n11\n010\n").is_err());

        // Empty content
        assert!(parse_seed_from_string("").is_err());
    }

    #[test]
    fn test_file_operations() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("seed.txt");

        let original = parse_seed_from_string("102\n021\n").unwrap();
        save_seed_to_file(&original, &file_path).unwrap();
        let loaded = load_seed_from_file(&file_path).unwrap();

        assert_eq!(original, loaded);
    }

    #[test]
    fn test_create_example_seeds() {
        let temp_dir = tempdir().unwrap();
        create_example_seeds(temp_dir.path()).unwrap();

        assert!(temp_dir.path().join("blinker.txt").exists());
        assert!(temp_dir.path().join("glider.txt").exists());
        assert!(temp_dir.path().join("duel.txt").exists());

        let duel = load_seed_from_file(temp_dir.path().join("duel.txt")).unwrap();
        assert_eq!(duel.height, 9);
        assert_eq!(duel.counts(), PlayerCounts { blue: 5, red: 5 });
    }
}
