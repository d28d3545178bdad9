//! Bidirectional id <-> glyph lookup
//!
//! Every lookup is total. The lenient paths hand back their input on a miss;
//! only [`Resolver::validate_and_normalize`] refuses unknown ids.

use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::entry::Entry;
use crate::shortcode::{is_valid_id, strip_colons, wrap, Shortcode};

/// Read-only lookup tables over a catalog
#[derive(Debug, Clone)]
pub struct Resolver {
    catalog: Catalog,
    by_id: HashMap<String, usize>,
    by_glyph: HashMap<String, usize>,
}

impl Resolver {
    pub fn new(catalog: Catalog) -> Self {
        let mut by_id = HashMap::with_capacity(catalog.len());
        let mut by_glyph = HashMap::with_capacity(catalog.len());
        for (index, entry) in catalog.entries().iter().enumerate() {
            by_id.insert(entry.id.clone(), index);
            // Two ids sharing a glyph resolve to the earlier one
            by_glyph.entry(entry.glyph.clone()).or_insert(index);
        }
        Self {
            catalog,
            by_id,
            by_glyph,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn entries(&self) -> &[Entry] {
        self.catalog.entries()
    }

    /// Exact id match, no colon handling
    pub fn entry(&self, id: &str) -> Option<&Entry> {
        self.by_id.get(id).map(|&index| &self.catalog.entries()[index])
    }

    pub fn entry_for_glyph(&self, glyph: &str) -> Option<&Entry> {
        self.by_glyph
            .get(glyph)
            .map(|&index| &self.catalog.entries()[index])
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// `":thumbs_up:"`, `"thumbs_up"` or `"::thumbs_up::"` -> `"👍"`.
    ///
    /// Unknown codes come back verbatim, colons included.
    pub fn resolve_to_glyph<'a>(&'a self, code: &'a str) -> &'a str {
        if code.is_empty() {
            return "";
        }
        match self.entry(strip_colons(code)) {
            Some(entry) => &entry.glyph,
            None => code,
        }
    }

    /// Turns a glyph or a shortcode-ish string into `:id:`.
    ///
    /// Anything holding a colon or made only of ASCII is taken as a
    /// shortcode already and rewrapped without checking the catalog. A
    /// glyph is looked up; an unknown glyph comes back unchanged. Empty
    /// input and colon-only input give `None`.
    pub fn resolve_to_shortcode(&self, value: &str) -> Option<String> {
        if value.is_empty() {
            return None;
        }
        if value.contains(':') || value.is_ascii() {
            return rewrap(value);
        }
        Some(self.glyph_to_shortcode_or_verbatim(value))
    }

    /// Like [`Self::resolve_to_shortcode`], but a bare `[A-Za-z0-9_-]+`
    /// token is wrapped as-is and other ASCII text still goes through the
    /// glyph lookup. Meant for values produced by our own components.
    pub fn normalize_to_shortcode(&self, value: &str) -> Option<String> {
        if value.is_empty() {
            return None;
        }
        if value.contains(':') {
            return rewrap(value);
        }
        if is_valid_id(value) {
            return Some(wrap(value));
        }
        Some(self.glyph_to_shortcode_or_verbatim(value))
    }

    /// Strict import path: `Some` only for ids present in the catalog.
    ///
    /// `":blue_circle:"` is rejected even though `large_blue_circle` exists.
    pub fn validate_and_normalize(&self, code: &str) -> Option<Shortcode> {
        let id = strip_colons(code);
        if id.is_empty() {
            return None;
        }
        self.entry(id).map(Entry::shortcode)
    }

    fn glyph_to_shortcode_or_verbatim(&self, glyph: &str) -> String {
        match self.entry_for_glyph(glyph) {
            Some(entry) => wrap(&entry.id),
            None => glyph.to_string(),
        }
    }
}

fn rewrap(value: &str) -> Option<String> {
    let id = strip_colons(value);
    if id.is_empty() {
        None
    } else {
        Some(wrap(id))
    }
}
