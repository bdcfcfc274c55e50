//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_build_report, print_chain, print_clues, print_random_outcome, print_stats};
