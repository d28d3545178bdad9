//! Catalog entries

use serde::Deserialize;

use crate::shortcode::Shortcode;

/// One glyph in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Unique id, `[A-Za-z0-9_-]+`
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Rendered glyph (first rendering variant of the source record)
    pub glyph: String,
    /// Search keywords, in source order
    pub keywords: Vec<String>,
}

impl Entry {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        glyph: impl Into<String>,
        keywords: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            glyph: glyph.into(),
            keywords,
        }
    }

    /// Canonical `:id:` value for this entry.
    ///
    /// Crate-private: only entries that passed catalog validation reach it.
    /// Outside callers go through `Shortcode::new` or the resolver.
    pub(crate) fn shortcode(&self) -> Shortcode {
        Shortcode::from_trusted_id(&self.id)
    }
}

/// Entry as it appears in a catalog source
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub skins: Vec<RawVariant>,
}

/// One rendering variant (skin tone, etc.)
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawVariant {
    pub native: String,
}
