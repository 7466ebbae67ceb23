// src/logging.rs

use color_eyre::eyre::Result;
use directories::ProjectDirs;
use lazy_static::lazy_static;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing_error::ErrorLayer;
use tracing_subscriber::{self, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

lazy_static! {
    /// `SCANVIEW_LOGLEVEL`, consulted when `RUST_LOG` is unset.
    static ref LEVEL_VAR: String = format!("{}_LOGLEVEL", env!("CARGO_CRATE_NAME").to_uppercase());
    static ref LOG_FILE_NAME: String = format!("{}.log", env!("CARGO_PKG_NAME"));
}

/// Where the log file goes when `--log-dir` is not given: the platform's
/// local data directory, or `./.data` if none can be determined.
pub fn default_log_dir() -> PathBuf {
    ProjectDirs::from("com", "scanview", env!("CARGO_PKG_NAME"))
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".").join(".data"))
}

fn level_filter() -> EnvFilter {
    let directive = std::env::var("RUST_LOG")
        .or_else(|_| std::env::var(LEVEL_VAR.as_str()))
        .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")));
    EnvFilter::new(directive)
}

/// Installs the file subscriber.
///
/// The terminal belongs to the UI, so events only ever go to
/// `scanview.log` inside `log_dir` (or [`default_log_dir`]). The file is
/// truncated on every start.
///
/// # Returns
/// The path of the log file.
pub fn initialize_logging(log_dir: Option<&Path>) -> Result<PathBuf> {
    let directory = log_dir.map(Path::to_path_buf).unwrap_or_else(default_log_dir);
    std::fs::create_dir_all(&directory)?;
    let log_path = directory.join(LOG_FILE_NAME.as_str());
    let writer = File::create(&log_path)?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_target(false)
        .with_ansi(false)
        .with_filter(level_filter());

    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(log_path)
}
