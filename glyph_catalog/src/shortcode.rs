//! Shortcode values: `:id:`
//!
//! A shortcode is the only form a glyph choice takes when it leaves the
//! picker. The id inside the colons is restricted to `[A-Za-z0-9_-]+`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShortcodeError {
    #[error("shortcode id is empty")]
    Empty,

    #[error("invalid character {ch:?} in shortcode id {id:?}")]
    InvalidChar { id: String, ch: char },

    #[error("shortcode must be wrapped in single colons: {0:?}")]
    NotWrapped(String),
}

/// Canonical `:id:` value
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Shortcode(String);

impl Shortcode {
    /// Builds a shortcode from a bare id
    pub fn new(id: &str) -> Result<Self, ShortcodeError> {
        validate_id(id)?;
        Ok(Self::from_trusted_id(id))
    }

    /// Wraps an id that was already validated (catalog ids are)
    pub(crate) fn from_trusted_id(id: &str) -> Self {
        Self(wrap(id))
    }

    /// The full `:id:` form
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The id without colons
    pub fn id(&self) -> &str {
        &self.0[1..self.0.len() - 1]
    }
}

impl fmt::Display for Shortcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Shortcode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Shortcode {
    type Err = ShortcodeError;

    /// Parses the strict `:id:` form; use the resolver for lenient input
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .strip_prefix(':')
            .and_then(|rest| rest.strip_suffix(':'))
            .ok_or_else(|| ShortcodeError::NotWrapped(s.to_string()))?;
        Self::new(inner)
    }
}

impl TryFrom<String> for Shortcode {
    type Error = ShortcodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Shortcode> for String {
    fn from(code: Shortcode) -> Self {
        code.0
    }
}

/// Strips every leading and every trailing colon.
///
/// Colons in the middle are left alone; callers treat them as "not found".
pub fn strip_colons(code: &str) -> &str {
    code.trim_matches(':')
}

/// `[A-Za-z0-9_-]+`
pub fn is_valid_id(id: &str) -> bool {
    validate_id(id).is_ok()
}

pub(crate) fn wrap(id: &str) -> String {
    format!(":{id}:")
}

fn validate_id(id: &str) -> Result<(), ShortcodeError> {
    if id.is_empty() {
        return Err(ShortcodeError::Empty);
    }
    match id
        .chars()
        .find(|ch| !(ch.is_ascii_alphanumeric() || *ch == '_' || *ch == '-'))
    {
        Some(ch) => Err(ShortcodeError::InvalidChar {
            id: id.to_string(),
            ch,
        }),
        None => Ok(()),
    }
}
