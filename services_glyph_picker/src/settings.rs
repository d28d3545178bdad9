//! Picker settings
//!
//! Settings are a small versioned JSON document. Missing fields keep their
//! defaults, so a file only needs to name what it overrides.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("unsupported settings version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("grid must have at least one column")]
    ZeroColumns,
}

/// Presentation settings for one picker instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerSettings {
    /// Format version (for future migrations)
    pub version: u32,
    /// Grid row width used for vertical navigation
    pub columns: usize,
    /// Embedded pickers are always open and never close on commit
    pub embedded: bool,
}

/// Sparse override document; absent fields keep the base value
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsOverrides {
    version: Option<u32>,
    columns: Option<usize>,
    embedded: Option<bool>,
}

impl PickerSettings {
    pub const CURRENT_VERSION: u32 = 1;
    pub const DEFAULT_COLUMNS: usize = 8;

    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            columns: Self::DEFAULT_COLUMNS,
            embedded: false,
        }
    }

    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_embedded(mut self, embedded: bool) -> Self {
        self.embedded = embedded;
        self
    }

    /// Applies a JSON override document on top of `self`
    pub fn with_overrides_json(self, json: &str) -> Result<Self, SettingsError> {
        let overrides: SettingsOverrides = serde_json::from_str(json)?;
        let merged = Self {
            version: overrides.version.unwrap_or(self.version),
            columns: overrides.columns.unwrap_or(self.columns),
            embedded: overrides.embedded.unwrap_or(self.embedded),
        };
        merged.validate()?;
        Ok(merged)
    }

    /// Defaults overridden by the file at `path`
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::new().with_overrides_json(&json)?;
        tracing::debug!(
            path = %path.display(),
            columns = settings.columns,
            "picker settings loaded"
        );
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.version != Self::CURRENT_VERSION {
            return Err(SettingsError::UnsupportedVersion {
                found: self.version,
                expected: Self::CURRENT_VERSION,
            });
        }
        if self.columns == 0 {
            return Err(SettingsError::ZeroColumns);
        }
        Ok(())
    }
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self::new()
    }
}
