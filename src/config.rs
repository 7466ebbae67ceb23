// src/config.rs

use crate::errors::ConfigError;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8080/";
pub const DEFAULT_TYPING_DELAY_MS: u64 = 18;
pub const DEFAULT_FIELD_NAME: &str = "file";
pub const DEFAULT_MAX_UPLOAD_MB: u64 = 650;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "scanview",
    about = "Submit a file to a scanning backend and review the verdict",
    version
)]
pub struct Args {
    /// File to pre-select in the upload form
    pub file: Option<PathBuf>,

    /// Scanning backend that accepts the multipart upload
    #[arg(long, env = "SCANVIEW_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Delay between revealed words of the explanation, in milliseconds
    #[arg(long, env = "SCANVIEW_TYPING_DELAY_MS", default_value_t = DEFAULT_TYPING_DELAY_MS)]
    pub typing_delay_ms: u64,

    /// Name of the multipart field carrying the file
    #[arg(long, default_value = DEFAULT_FIELD_NAME)]
    pub field_name: String,

    /// Largest file accepted for upload, in MB
    #[arg(long, default_value_t = DEFAULT_MAX_UPLOAD_MB)]
    pub max_upload_mb: u64,

    /// Directory for scanview.log, instead of the local data directory
    #[arg(long, env = "SCANVIEW_LOG_DIR", value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Scan FILE without the terminal UI and print the rendered HTML
    #[arg(long, value_name = "FILE")]
    pub headless: Option<PathBuf>,
}

/// Validated runtime settings.
#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: Url,
    pub typing_delay: Duration,
    pub field_name: String,
    pub max_upload_mb: u64,
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("DEFAULT_ENDPOINT is a valid URL literal"),
            typing_delay: Duration::from_millis(DEFAULT_TYPING_DELAY_MS),
            field_name: DEFAULT_FIELD_NAME.to_string(),
            max_upload_mb: DEFAULT_MAX_UPLOAD_MB,
            log_dir: None,
        }
    }
}

impl Config {
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let endpoint = Url::parse(&args.endpoint).map_err(|source| ConfigError::InvalidEndpoint {
            value: args.endpoint.clone(),
            source,
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(endpoint.scheme().to_string()));
        }
        if args.field_name.trim().is_empty() {
            return Err(ConfigError::EmptyFieldName);
        }

        Ok(Self {
            endpoint,
            typing_delay: Duration::from_millis(args.typing_delay_ms),
            field_name: args.field_name.clone(),
            max_upload_mb: args.max_upload_mb,
            log_dir: args.log_dir.clone(),
        })
    }

    pub fn max_upload_bytes(&self) -> u64 {
        self.max_upload_mb.saturating_mul(1 << 20)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).expect("valid arguments")
    }

    #[test]
    fn defaults_match_backend_contract() {
        let config = Config::from_args(&parse(&["scanview", "--endpoint", DEFAULT_ENDPOINT]))
            .expect("valid config");
        assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(config.typing_delay, Duration::from_millis(18));
        assert_eq!(config.field_name, "file");
        assert_eq!(config.max_upload_bytes(), 650 << 20);
    }

    #[test]
    fn default_config_matches_cli_defaults() {
        let from_cli = Config::from_args(&parse(&["scanview", "--endpoint", DEFAULT_ENDPOINT]))
            .expect("valid config");
        let default = Config::default();
        assert_eq!(default.endpoint, from_cli.endpoint);
        assert_eq!(default.typing_delay, from_cli.typing_delay);
        assert_eq!(default.max_upload_mb, from_cli.max_upload_mb);
        assert_eq!(default.log_dir, None);
    }

    #[test]
    fn log_dir_flag_is_carried() {
        let args = parse(&["scanview", "--endpoint", DEFAULT_ENDPOINT, "--log-dir", "/var/tmp/scanview"]);
        let config = Config::from_args(&args).expect("valid config");
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/tmp/scanview")));
    }

    #[test]
    fn rejects_bad_endpoints() {
        let err = Config::from_args(&parse(&["scanview", "--endpoint", "not a url"]));
        assert!(matches!(err, Err(ConfigError::InvalidEndpoint { .. })));
        let err = Config::from_args(&parse(&["scanview", "--endpoint", "ftp://host/"]));
        assert!(matches!(err, Err(ConfigError::UnsupportedScheme(_))));
    }

    #[test]
    fn headless_and_positional_file() {
        let args = parse(&["scanview", "--endpoint", DEFAULT_ENDPOINT, "--headless", "a.exe", "b.exe"]);
        assert_eq!(args.headless, Some(PathBuf::from("a.exe")));
        assert_eq!(args.file, Some(PathBuf::from("b.exe")));
    }
}
