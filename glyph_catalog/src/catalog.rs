//! Static glyph catalog
//!
//! A catalog is loaded once and never changes. Entry order is the order of
//! the source and is the order every filtered view preserves.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::entry::{Entry, RawEntry};
use crate::shortcode::is_valid_id;

/// Catalog shipped with the crate
const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed catalog: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("unsupported catalog version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("duplicate entry id: {0}")]
    DuplicateId(String),

    #[error("invalid entry id: {0:?}")]
    InvalidId(String),

    #[error("entry {0} has no rendering variant")]
    NoVariant(String),

    #[error("entry {0} has an empty glyph")]
    EmptyGlyph(String),
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    version: u32,
    entries: Vec<RawEntry>,
}

/// Ordered, validated set of entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<Entry>,
}

impl Catalog {
    pub const CURRENT_VERSION: u32 = 1;

    pub fn empty() -> Self {
        Self::default()
    }

    /// The catalog embedded at compile time
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parses a catalog document:
    /// `{"version": 1, "entries": [{"id", "name", "keywords", "skins": [{"native"}]}]}`
    ///
    /// Only the first skin of each entry is used.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        if file.version != Self::CURRENT_VERSION {
            return Err(CatalogError::UnsupportedVersion {
                found: file.version,
                expected: Self::CURRENT_VERSION,
            });
        }

        let entries = file
            .entries
            .into_iter()
            .map(|raw| -> Result<Entry, CatalogError> {
                let glyph = raw
                    .skins
                    .into_iter()
                    .next()
                    .ok_or_else(|| CatalogError::NoVariant(raw.id.clone()))?
                    .native;
                Ok(Entry::new(raw.id, raw.name, glyph, raw.keywords))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_entries(entries)
    }

    /// Validates and wraps an entry list, keeping its order
    pub fn from_entries(entries: Vec<Entry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !is_valid_id(&entry.id) {
                return Err(CatalogError::InvalidId(entry.id.clone()));
            }
            if entry.glyph.is_empty() {
                return Err(CatalogError::EmptyGlyph(entry.id.clone()));
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(CatalogError::DuplicateId(entry.id.clone()));
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
