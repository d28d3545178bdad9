//! # Glyph Catalog
//!
//! The fixed catalog of named glyphs and the resolver that translates
//! between ids, shortcodes and rendered glyphs.
//!
//! ## Philosophy
//!
//! - **Static data**: The catalog never changes after load, so the lookup
//!   tables are built once and shared by reference
//! - **Total lookups**: Misses fall back to the input (lenient paths) or to
//!   `None` (the strict import path); nothing here fails at runtime
//! - **One external form**: Values leaving a picker are always `:id:`
//!
//! ## Example
//!
//! ```ignore
//! use glyph_catalog::resolver;
//!
//! let glyph = resolver().resolve_to_glyph(":thumbs_up:");
//! assert_eq!(glyph, "👍");
//!
//! // Untrusted import: unknown ids are rejected
//! assert!(resolver().validate_and_normalize(":blue_circle:").is_none());
//! ```

pub mod catalog;
pub mod entry;
pub mod resolver;
pub mod shortcode;

use std::sync::OnceLock;

pub use catalog::{Catalog, CatalogError};
pub use entry::Entry;
pub use resolver::Resolver;
pub use shortcode::{is_valid_id, strip_colons, Shortcode, ShortcodeError};

static BUILTIN_RESOLVER: OnceLock<Resolver> = OnceLock::new();

/// Process-wide resolver over the built-in catalog.
///
/// Built on first call; every later call returns the same instance.
pub fn resolver() -> &'static Resolver {
    BUILTIN_RESOLVER.get_or_init(|| match Catalog::builtin() {
        Ok(catalog) => {
            tracing::debug!(entries = catalog.len(), "built-in glyph catalog loaded");
            Resolver::new(catalog)
        }
        Err(err) => {
            tracing::error!(error = %err, "built-in glyph catalog failed to load");
            Resolver::new(Catalog::empty())
        }
    })
}
