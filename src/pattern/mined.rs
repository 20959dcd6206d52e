//! Deterministic hash-derived patterns.
//!
//! An arbitrary input string is folded into a 64-character hex digest by
//! three 32-bit rolling hashes, and the digest selects one of eight 5x5
//! placement rules. The same input always yields the same pattern.

use super::library::PatternCategory;
use crate::engine::{Cell, Grid, Player};

const SIZE: usize = 5;

/// A pattern derived from a hash digest, with a rarity and category
/// classification based on its shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinedPattern {
    pub name: String,
    pub category: PatternCategory,
    /// 1-5, higher is rarer
    pub rarity: u8,
    /// Relative live-cell coordinates within the 5x5 field
    pub cells: Vec<(usize, usize)>,
    pub digest: String,
}

impl MinedPattern {
    /// Bounding-box height of the pattern
    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(row, _)| row + 1).max().unwrap_or(0)
    }

    /// Bounding-box width of the pattern
    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(_, col)| col + 1).max().unwrap_or(0)
    }

    /// Write the pattern onto a grid for one player, clipping at the border
    pub fn stamp(&self, grid: &mut Grid, top: usize, left: usize, player: Player) {
        for &(row, col) in &self.cells {
            let (r, c) = (top + row, left + col);
            if r < grid.height && c < grid.width {
                let idx = grid.index(r, c);
                grid.cells[idx] = Cell::Owned(player);
            }
        }
    }
}

/// Fold an input string into a 64-character hex digest.
/// Three independent 32-bit rolling hashes are combined with their pairwise
/// xors and sums, each rendered as zero-padded hex.
pub fn digest(input: &str) -> String {
    let mut h1: i32 = 0;
    let mut h2: i32 = 0;
    let mut h3: i32 = 0;

    for unit in input.encode_utf16() {
        let code = unit as i32;
        h1 = h1.wrapping_shl(5).wrapping_sub(h1).wrapping_add(code);
        h2 = h2.wrapping_shl(3).wrapping_add(h2).wrapping_add(code.wrapping_mul(31));
        h3 = h3.wrapping_shl(7).wrapping_sub(h3).wrapping_add(code.wrapping_mul(17));
    }

    let part = |value: i64| format!("{:08x}", value.unsigned_abs());

    [
        part(h1 as i64),
        part(h2 as i64),
        part(h3 as i64),
        part((h1 ^ h2) as i64),
        part((h2 ^ h3) as i64),
        part((h1 ^ h3) as i64),
        part(h1 as i64 + h2 as i64),
        part(h2 as i64 + h3 as i64),
    ]
    .concat()
}

/// Derive a classified pattern from an input string
pub fn derive(input: &str) -> MinedPattern {
    let digest = self::digest(input);
    let cells = cells_from_digest(&digest);
    classify(cells, digest)
}

/// Choose a 5x5 live-cell set from a digest. The second hex digit picks one
/// of eight placement rules; each position then consults the character code
/// at its own digest offset.
fn cells_from_digest(digest: &str) -> Vec<(usize, usize)> {
    let bytes = digest.as_bytes();
    let rule = (digest.as_bytes()[1] as char).to_digit(16).unwrap_or(0) % 8;

    let mut cells = Vec::new();
    for y in 0..SIZE {
        for x in 0..SIZE {
            let index = (y * SIZE + x) % bytes.len();
            let code = bytes[index] as u32;

            let alive = match rule {
                // Diagonals
                0 => (x == y || x == SIZE - 1 - y) && code % 2 != 0,
                // Center-heavy blob
                1 => {
                    let center = SIZE as f64 / 2.0;
                    let dist = (x as f64 - center).abs() + (y as f64 - center).abs();
                    dist < center && code % 3 != 0
                }
                // Border ring
                2 => (x == 0 || x == SIZE - 1 || y == 0 || y == SIZE - 1) && code % 2 != 0,
                // Glider-shaped
                3 => {
                    const GLIDER: [(usize, usize); 5] = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
                    GLIDER.contains(&(y, x)) && code % 2 != 0
                }
                // Skewed symmetric fill
                4 => (code as usize + x + y) % 3 == 0 && (x <= 2 || y <= 2),
                // Cross
                5 => (x == 2 || y == 2) && code % 2 == 0,
                // Corners
                6 => (x == 0 || x == SIZE - 1) && (y == 0 || y == SIZE - 1) && code % 2 != 0,
                // Clusters
                _ => (index / 3) % 3 == 1 && code % 2 == 0,
            };

            if alive {
                cells.push((y, x));
            }
        }
    }

    cells
}

/// Rarity and category from the pattern's density and the digest's zero runs
fn classify(cells: Vec<(usize, usize)>, digest: String) -> MinedPattern {
    let cell_count = cells.len();
    let density = cell_count as f64 / (SIZE * SIZE) as f64;

    let mut rarity = 1u8;
    if density > 0.7 || density < 0.2 {
        rarity = 2;
    }
    if density > 0.8 || density < 0.1 {
        rarity = 3;
    }
    if digest.contains("000") {
        rarity = (rarity + 1).min(5);
    }
    if digest.contains("0000") {
        rarity = 5;
    }

    let category = if cell_count <= 4 {
        PatternCategory::StillLife
    } else if cell_count <= 8 {
        PatternCategory::Oscillator
    } else if density < 0.3 {
        PatternCategory::Spaceship
    } else {
        PatternCategory::Methuselah
    };

    let name = format!("Mined #{}", digest[..4].to_uppercase());

    MinedPattern {
        name,
        category,
        rarity,
        cells,
        digest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_deterministic() {
        assert_eq!(digest("0xcell-42"), digest("0xcell-42"));
        assert_ne!(digest("0xcell-42"), digest("0xcell-43"));
    }

    #[test]
    fn test_digest_of_single_character() {
        // Rolling hashes after one 'a' (code 97): 97, 3007, 1649, and their
        // pairwise xors/sums, each as 8 hex digits
        assert_eq!(
            digest("a"),
            "0000006100000bbf0000067100000bde00000dce0000061000000c2000001230"
        );
    }

    #[test]
    fn test_digest_is_hex() {
        let d = digest("hello world");
        assert!(d.len() >= 64);
        assert!(d.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_derive_is_deterministic_and_bounded() {
        let first = derive("match-seed-7");
        let second = derive("match-seed-7");
        assert_eq!(first, second);

        assert!(first.cells.len() <= SIZE * SIZE);
        for &(row, col) in &first.cells {
            assert!(row < SIZE && col < SIZE);
        }
        assert!((1..=5).contains(&first.rarity));
        assert!(first.name.starts_with("Mined #"));
    }

    #[test]
    fn test_stamp_clips_at_the_border() {
        let pattern = MinedPattern {
            name: "Mined #TEST".into(),
            category: PatternCategory::StillLife,
            rarity: 1,
            cells: vec![(0, 0), (4, 4)],
            digest: String::new(),
        };

        let mut grid = Grid::new(3, 3);
        pattern.stamp(&mut grid, 0, 0, Player::Red);
        assert_eq!(grid.live_count(), 1);
        assert_eq!(grid.get(0, 0), Cell::Owned(Player::Red));
    }
}
