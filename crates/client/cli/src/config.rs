//! Terminal client configuration.

use std::path::PathBuf;
use std::str::FromStr;

/// Application name used for per-user directories.
const APP_NAME: &str = "pharmacy";

/// Where the client reads data from and writes logs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    /// Packaged data (rules, catalog, defaults).
    pub data_dir: PathBuf,
    /// Per-user profile and prices; `None` makes the client read-only.
    pub user_dir: Option<PathBuf>,
    /// Optional directory for a log file next to stderr output.
    pub log_dir: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            user_dir: default_user_dir(),
            log_dir: None,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `PHARMACY_DATA_DIR` - Packaged data directory (default: `./data`)
    /// - `PHARMACY_USER_DIR` - Per-user directory (default: platform data dir)
    /// - `PHARMACY_LOG_DIR` - Log file directory (default: none)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_var::<PathBuf>(&lookup, "PHARMACY_DATA_DIR") {
            config.data_dir = dir;
        }
        if let Some(dir) = read_var::<PathBuf>(&lookup, "PHARMACY_USER_DIR") {
            config.user_dir = Some(dir);
        }
        if let Some(dir) = read_var::<PathBuf>(&lookup, "PHARMACY_LOG_DIR") {
            config.log_dir = Some(dir);
        }

        config
    }

    /// Apply command-line overrides on top of environment values.
    pub fn with_overrides(mut self, data_dir: Option<PathBuf>, user_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        if let Some(dir) = user_dir {
            self.user_dir = Some(dir);
        }
        self
    }
}

fn default_user_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.data_dir().to_path_buf())
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
{
    lookup(key)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse().ok())
}
