use std::path::PathBuf;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging.
///
/// The TUI owns stdout/stderr, so events only go to `log_file`. Without a
/// log file no subscriber is installed and events are dropped.
///
/// # Arguments
/// * `verbose` - Enable verbose (DEBUG) logging
/// * `log_file` - Optional path to log file
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    let Some(log_path) = log_file else {
        return;
    };

    // Determine log level from verbose flag or RUST_LOG env var
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("roadmap_tui={}", default_level)));

    let directory = log_path
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    if std::fs::create_dir_all(&directory).is_err() {
        return;
    }
    let file_name = log_path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| "roadmap-tui.log".into());

    let file_appender = tracing_appender::rolling::never(directory, file_name);
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init();
}
