//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Default key the snapshot is stored under.
pub const DEFAULT_STATE_KEY: &str = "faangPrepData";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the persisted snapshot
    pub data_dir: PathBuf,
    /// Fixed key of the snapshot slot (file stem on disk)
    pub state_key: String,
    /// Route saves through the ordered asynchronous writer
    pub write_behind: bool,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("target/test-data"),
            state_key: DEFAULT_STATE_KEY.to_string(),
            write_behind: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            data_dir: env::var("PREP_TRACKER_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            state_key: env::var("PREP_TRACKER_STATE_KEY")
                .map(|v| v.trim().to_string())
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_STATE_KEY.to_string()),
            write_behind: parse_bool("PREP_TRACKER_WRITE_BEHIND", false)?,
        })
    }

    /// Location of the snapshot file.
    pub fn state_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", self.state_key))
    }
}

fn parse_bool(var: &'static str, default: bool) -> Result<bool, ConfigError> {
    match env::var(var) {
        Err(_) => Ok(default),
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" | "" => Ok(false),
            _ => Err(ConfigError::Invalid { var, value: raw }),
        },
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}
