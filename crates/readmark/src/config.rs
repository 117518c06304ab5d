//! Scan configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use readmark_syntax::MARK_ATTRIBUTE;

/// File name looked up in the working directory when no config is given.
pub const CONFIG_FILE: &str = "readmark.toml";

/// Configuration for a scan.
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
///
/// ```toml
/// attribute = "read"
/// exclude = ["target", ".git", "vendor"]
/// fail_fast = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Attribute name recognised as a mark
    pub attribute: String,

    /// Directory names skipped while walking
    pub exclude: Vec<String>,

    /// Stop at the first file that does not parse
    pub fail_fast: bool,

    /// Collect marks on struct and union fields
    pub include_fields: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            attribute: MARK_ATTRIBUTE.to_string(),
            exclude: vec!["target".to_string(), ".git".to_string()],
            fail_fast: false,
            include_fields: true,
        }
    }
}

impl ScanConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config that aborts on the first parse error.
    pub fn with_fail_fast(fail_fast: bool) -> Self {
        Self {
            fail_fast,
            ..Default::default()
        }
    }

    /// Create a config recognising a different attribute name.
    pub fn with_attribute(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            ..Default::default()
        }
    }

    /// Parse a config from TOML text.
    pub fn from_toml(path: &Path, text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(path, &text)
    }

    /// Load `explicit` if given, else `readmark.toml` in `dir` if present,
    /// else defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate: PathBuf = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "loading config");
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Whether a directory with this name is skipped.
    pub fn is_excluded(&self, dir_name: &str) -> bool {
        self.exclude.iter().any(|name| name == dir_name)
    }
}
