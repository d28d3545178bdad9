//! Field snapshot for deterministic replay testing

use crate::Selection;
use alloc::string::String;
use serde::{Deserialize, Serialize};

/// Complete observable state of a [`crate::TextField`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSnapshot {
    pub text: String,
    pub caret: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection: Option<Selection>,
}

impl FieldSnapshot {
    /// Deterministic digest of the snapshot, for comparing replayed traces
    #[cfg(test)]
    pub fn hash(&self) -> u64 {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();
        hasher.update(self.text.as_bytes());
        hasher.update(b"\0");
        hasher.update(self.caret.to_le_bytes());
        match self.selection {
            Some(sel) => {
                hasher.update([1u8]);
                hasher.update(sel.anchor.to_le_bytes());
                hasher.update(sel.caret.to_le_bytes());
            }
            None => hasher.update([0u8]),
        }

        let result = hasher.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&result[..8]);
        u64::from_le_bytes(bytes)
    }
}
