use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "plantcare",
    version,
    about = "Weather-driven plant watering advisor"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Weather snapshot file (.json, .yaml/.yml, or - for JSON on stdin)
    #[arg(short, long, global = true)]
    pub snapshot: Option<PathBuf>,

    /// Evaluate as if it were this RFC 3339 instant instead of now
    #[arg(long, global = true)]
    pub at: Option<String>,

    /// Output format (overrides config)
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Commands {
    /// Score the current conditions
    Analyze,
    /// Rank today's watering windows
    Windows,
    /// Per-day watering schedule from the daily forecast
    Schedule,
    /// Whether now is a watering window, or when the next one is
    Now,
    /// Every output in one document
    Report,
    /// Print the effective watering policy
    Policy,
    /// Validate config and snapshot
    Check,
}

impl Commands {
    pub fn needs_snapshot(&self) -> bool {
        !matches!(self, Commands::Policy | Commands::Check)
    }
}
