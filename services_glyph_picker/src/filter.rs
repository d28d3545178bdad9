//! Query filtering over the catalog
//!
//! Plain case-insensitive substring matching. Results keep catalog order;
//! nothing is ranked.

use glyph_catalog::Entry;

/// Entries matching `query`, in catalog order.
///
/// A blank or whitespace-only query matches everything. Any other query is
/// matched as typed, surrounding spaces included.
pub fn filter_entries<'a>(entries: &'a [Entry], query: &str) -> Vec<&'a Entry> {
    if query.trim().is_empty() {
        return entries.iter().collect();
    }
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry_matches(entry, &needle))
        .collect()
}

/// Checks one entry against an already lowercased, non-empty needle.
///
/// Matches the id, the display name, any keyword, or the `:id:` form.
pub fn entry_matches(entry: &Entry, needle: &str) -> bool {
    let id = entry.id.to_lowercase();
    if id.contains(needle) {
        return true;
    }

    if entry.name.to_lowercase().contains(needle) {
        return true;
    }

    if entry
        .keywords
        .iter()
        .any(|keyword| keyword.to_lowercase().contains(needle))
    {
        return true;
    }

    format!(":{id}:").contains(needle)
}
