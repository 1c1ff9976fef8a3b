//! CLI argument parsing and configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::models::ProgressScope;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Terminal dashboard for tracking progress through a learning roadmap
#[derive(Parser, Debug)]
#[command(name = "roadmap-tui", author, version, about)]
#[command(after_help = "Examples:\n  \
    roadmap-tui                              # Built-in roadmap\n  \
    roadmap-tui --roadmap plan.json          # Custom roadmap file\n  \
    roadmap-tui --progress-scope month       # Count only the month's own items")]
pub struct Args {
    /// Roadmap JSON file (default: ./roadmap.json, then the config dir, then built-in)
    #[arg(long, value_name = "PATH")]
    pub roadmap: Option<PathBuf>,

    /// Which checked items count toward a month's percentage
    #[arg(long, value_enum, default_value_t = ProgressScope::Global)]
    pub progress_scope: ProgressScope,

    /// Phase selected at startup
    #[arg(long, value_name = "ID")]
    pub phase: Option<u32>,

    /// Month range selected at startup (e.g. "3-4")
    #[arg(long, value_name = "RANGE")]
    pub month: Option<String>,

    /// Log file (default: <cache dir>/roadmap-tui/roadmap-tui.log)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Print a summary of the roadmap and exit without starting the TUI
    #[arg(long)]
    pub dump: bool,
}

/// Configuration handed to the application after argument parsing
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub roadmap: Option<PathBuf>,
    pub progress_scope: ProgressScope,
    pub phase: Option<u32>,
    pub month: Option<String>,
    pub log_file: Option<PathBuf>,
    pub verbose: bool,
    pub dump: bool,
}

impl From<Args> for CliConfig {
    fn from(args: Args) -> Self {
        Self {
            roadmap: args.roadmap,
            progress_scope: args.progress_scope,
            phase: args.phase,
            month: args.month.map(|m| m.trim().to_string()),
            log_file: args.log_file.or_else(default_log_file),
            verbose: args.verbose,
            dump: args.dump,
        }
    }
}

/// `<cache_dir>/roadmap-tui/roadmap-tui.log`
pub fn default_log_file() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("roadmap-tui").join("roadmap-tui.log"))
}

/// Parse CLI arguments and return configuration
pub fn parse_args() -> CliConfig {
    Args::parse().into()
}
