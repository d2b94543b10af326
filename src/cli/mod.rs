//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{CampaignArgs, Cli, Commands, OutputFormat};
pub use output::format_utm;
