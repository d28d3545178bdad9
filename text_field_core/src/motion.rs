//! Caret motions

use serde::{Deserialize, Serialize};

/// Direction of a caret move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Motion {
    /// Start of the buffer
    Start,
    /// End of the buffer
    End,
    /// One codepoint left
    Left,
    /// One codepoint right
    Right,
}

impl Motion {
    /// Raw target of this motion from `caret` in a buffer of `len` codepoints
    pub fn target(self, caret: usize, len: usize) -> usize {
        match self {
            Motion::Start => 0,
            Motion::End => len,
            Motion::Left => caret.saturating_sub(1),
            Motion::Right => (caret + 1).min(len),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Motion::Start => "start",
            Motion::End => "end",
            Motion::Left => "left",
            Motion::Right => "right",
        }
    }
}
