//! Seed patterns: built-in catalogue, hash-derived patterns, and seed files

pub mod io;
pub mod library;
pub mod mined;

pub use io::{load_seed_from_file, parse_seed_from_string, save_seed_to_file};
pub use library::{Pattern, PatternCategory, PATTERNS};
pub use mined::MinedPattern;
