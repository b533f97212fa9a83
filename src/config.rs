//! Dashboard settings, read from `<config_dir>/purchase-dashboard/config.json`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{DashboardError, Result};

const CONFIG_DIR: &str = "purchase-dashboard";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Path of the purchase CSV file
    pub data_path: PathBuf,
    /// Initial window size in points
    pub window_size: [f32; 2],
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data.csv"),
            window_size: [1280.0, 900.0],
            log_level: if cfg!(feature = "dev") { "debug" } else { "info" }.to_string(),
        }
    }
}

impl DashboardConfig {
    /// Default location of the config file, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load the config from the default location, falling back to defaults
    /// when no file exists.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load the config at `path`. A missing file yields the defaults; an
    /// unreadable or malformed one is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(DashboardError::io(path, e)),
        }
    }

    /// Apply command line overrides. The first positional argument replaces
    /// the configured data path.
    pub fn with_args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        if let Some(path) = args.into_iter().next() {
            self.data_path = PathBuf::from(path);
        }
        self
    }
}
