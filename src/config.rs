//! `plusconfig.json` loading
//!
//! The config file is optional. A missing file means defaults; a file that
//! cannot be read or parsed is reported as [`ConfigError`] so the caller can
//! warn and fall back to defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up next to the input and in the working directory
pub const CONFIG_FILE_NAME: &str = "plusconfig.json";

/// Errors that can occur while loading the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for config loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Options read from `plusconfig.json`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlusConfig {
    /// Scan every wire group instead of only group 0
    pub use_all_wires: bool,
    /// Enumerate every subset instead of connected ones only
    pub allow_disconnected: bool,
    /// Emit debug-level diagnostics
    pub verbose_debug: bool,
}

impl Default for PlusConfig {
    fn default() -> Self {
        Self {
            use_all_wires: false,
            allow_disconnected: false,
            verbose_debug: true,
        }
    }
}

impl PlusConfig {
    /// Load a config file. A file that does not exist yields the defaults.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse config text. Absent keys keep their defaults; the document
    /// must be an object and present keys must be booleans.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// Locate the config file for an input path
///
/// Looks for `plusconfig.json` inside the input directory, or beside the
/// input file, falling back to the current working directory.
pub fn resolve_config_path(input: &Path) -> PathBuf {
    let beside = if input.is_dir() {
        input.join(CONFIG_FILE_NAME)
    } else {
        input
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(CONFIG_FILE_NAME)
    };
    if beside.exists() {
        return beside;
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(CONFIG_FILE_NAME))
        .unwrap_or(beside)
}
