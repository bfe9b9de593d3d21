//! Row model building and display formatting.
//!
//! Everything here is pure: the TUI maps the output to widgets but never
//! changes what is shown.

pub mod fmt;
mod rows;

pub use rows::{SortKey, build_rows, matches_filter};
