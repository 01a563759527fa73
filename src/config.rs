//! Application configuration.
//!
//! Configuration lives at `~/.ladle/config.yml`; every field is optional
//! and falls back to a default. CLI flags (and their environment
//! variables, `LADLE_DATA_DIR`, `LADLE_CATALOG_URL`, `LADLE_OFFLINE`)
//! override the file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::client::{DEFAULT_BASE_URL, DEFAULT_CACHE_TTL_SECS};
use crate::error::{LadleError, Result};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LadleConfig {
    /// Where local state (notebook, catalog cache) lives.
    /// Defaults to `~/.ladle`.
    pub data_dir: Option<PathBuf>,

    pub catalog: CatalogConfig,
}

/// Catalog client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub cache_ttl_secs: u64,
    pub offline: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            offline: false,
        }
    }
}

impl LadleConfig {
    /// Default config file location: `~/.ladle/config.yml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".ladle").join("config.yml"))
    }

    /// Load from an explicit path; the file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LadleError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        Self::parse_file(path)
    }

    /// Load from the default location, falling back to defaults when the
    /// file does not exist.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::parse_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Resolve the data directory: config value, else `~/.ladle`.
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".ladle")
        })
    }

    fn parse_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| LadleError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
