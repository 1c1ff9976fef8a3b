//! CLI argument parsing for the roadmap TUI.

mod args;

pub use args::{parse_args, CliConfig, VERSION};
