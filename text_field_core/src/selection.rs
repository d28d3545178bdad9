//! Selection range over codepoint positions

use serde::{Deserialize, Serialize};

/// A non-empty selection.
///
/// `anchor` is where the selection started, `caret` is the moving end.
/// Either may be the larger of the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub anchor: usize,
    pub caret: usize,
}

impl Selection {
    /// Returns `None` for a collapsed range
    pub fn new(anchor: usize, caret: usize) -> Option<Self> {
        if anchor == caret {
            None
        } else {
            Some(Self { anchor, caret })
        }
    }

    pub fn start(&self) -> usize {
        self.anchor.min(self.caret)
    }

    pub fn end(&self) -> usize {
        self.anchor.max(self.caret)
    }

    pub fn len(&self) -> usize {
        self.end() - self.start()
    }

    /// True when the caret sits before the anchor
    pub fn is_backward(&self) -> bool {
        self.caret < self.anchor
    }
}
