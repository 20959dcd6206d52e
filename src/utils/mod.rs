//! Output and formatting utilities

pub mod display;

pub use display::{Color, ColorOutput, GridRenderer};
