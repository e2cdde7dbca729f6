//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{AnnounceAction, Cli, Commands, CrowdAction, FavAction, ReviewAction};
