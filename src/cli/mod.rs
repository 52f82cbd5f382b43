//! CLI module
//!
//! Command-line interface for inspecting pagination layouts.
//!
//! # Commands
//!
//! - `render` - Print the pager for a given item count and position
//! - `walk` - Run a comma-separated action script and print each step

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, PagerArgs};
pub use runner::Runner;
