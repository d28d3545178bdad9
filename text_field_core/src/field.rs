//! TextField state machine
//!
//! The field stores its text as a vector of codepoints so that every caret
//! position is a plain index. All operations clamp their inputs; nothing
//! here can panic on an out-of-range position.

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::{motion::Motion, selection::Selection, snapshot::FieldSnapshot};

/// A discrete edit operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditOp {
    /// Type text, replacing the selection if there is one
    InsertText(String),
    DeleteBackward,
    DeleteForward,
    Move { motion: Motion, extend: bool },
    SelectAll,
    Copy,
    Cut,
    /// Paste text supplied by the host's clipboard
    Paste(String),
    /// Pointer click at a codepoint boundary
    SetCaret(usize),
    /// Pointer drag from a frozen anchor
    SelectRange { anchor: usize, caret: usize },
    Clear,
}

/// Outcome of applying an [`EditOp`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Nothing changed
    Unchanged,
    /// Caret or selection changed, text did not
    Moved,
    /// Buffer text changed
    Edited,
    /// Selected text, buffer untouched
    Copied(String),
    /// Selected text, removed from the buffer
    Cut(String),
}

impl EditOutcome {
    /// True when the buffer text differs from before the operation
    pub fn text_changed(&self) -> bool {
        matches!(self, EditOutcome::Edited | EditOutcome::Cut(_))
    }
}

/// Single-line edit buffer with caret and optional selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    chars: Vec<char>,
    caret: usize,
    /// Selection anchor. Never equal to `caret` while set.
    anchor: Option<usize>,
}

impl TextField {
    /// Create an empty field
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a field holding `text` with the caret at the end
    pub fn from_text(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let caret = chars.len();
        Self {
            chars,
            caret,
            anchor: None,
        }
    }

    /// Apply an operation and report what changed
    pub fn apply(&mut self, op: EditOp) -> EditOutcome {
        let edited = |changed: bool| {
            if changed {
                EditOutcome::Edited
            } else {
                EditOutcome::Unchanged
            }
        };
        let moved = |changed: bool| {
            if changed {
                EditOutcome::Moved
            } else {
                EditOutcome::Unchanged
            }
        };

        match op {
            EditOp::InsertText(text) => edited(self.insert_or_replace_selection(&text)),
            EditOp::DeleteBackward => edited(self.delete_backward()),
            EditOp::DeleteForward => edited(self.delete_forward()),
            EditOp::Move { motion, extend } => moved(self.move_caret(motion, extend)),
            EditOp::SelectAll => moved(self.select_all()),
            EditOp::Copy => self
                .copy_selection()
                .map_or(EditOutcome::Unchanged, EditOutcome::Copied),
            EditOp::Cut => self
                .cut_selection()
                .map_or(EditOutcome::Unchanged, EditOutcome::Cut),
            EditOp::Paste(text) => edited(self.paste_at_caret(&text)),
            EditOp::SetCaret(index) => moved(self.set_caret(index)),
            EditOp::SelectRange { anchor, caret } => moved(self.select_range(anchor, caret)),
            EditOp::Clear => edited(self.clear()),
        }
    }

    // Accessors

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Length in codepoints
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn caret_at_end(&self) -> bool {
        self.caret == self.chars.len()
    }

    pub fn selection(&self) -> Option<Selection> {
        self.anchor.and_then(|anchor| Selection::new(anchor, self.caret))
    }

    pub fn selected_text(&self) -> Option<String> {
        self.selection()
            .map(|sel| self.chars[sel.start()..sel.end()].iter().collect())
    }

    pub fn snapshot(&self) -> FieldSnapshot {
        FieldSnapshot {
            text: self.text(),
            caret: self.caret,
            selection: self.selection(),
        }
    }

    // Edits

    /// Delete the selection (if any) and insert `text` at the caret
    pub fn insert_or_replace_selection(&mut self, text: &str) -> bool {
        let removed = self.delete_selection();
        if text.is_empty() {
            return removed;
        }

        let at = self.caret;
        let inserted: Vec<char> = text.chars().collect();
        let count = inserted.len();
        self.chars.splice(at..at, inserted);
        self.caret = at + count;
        self.anchor = None;
        true
    }

    /// Backspace
    pub fn delete_backward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        if self.caret == 0 {
            return false;
        }
        self.chars.remove(self.caret - 1);
        self.caret -= 1;
        true
    }

    /// Forward delete
    pub fn delete_forward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        if self.caret >= self.chars.len() {
            return false;
        }
        self.chars.remove(self.caret);
        true
    }

    pub fn paste_at_caret(&mut self, text: &str) -> bool {
        self.insert_or_replace_selection(text)
    }

    /// Empty the buffer. Returns true if there was text to remove.
    pub fn clear(&mut self) -> bool {
        let had_text = !self.chars.is_empty();
        *self = Self::new();
        had_text
    }

    // Caret and selection

    /// Move the caret, optionally growing the selection.
    ///
    /// Without `extend`, a Left or Right motion over an active selection
    /// collapses it to the near edge instead of stepping.
    pub fn move_caret(&mut self, motion: Motion, extend: bool) -> bool {
        let before = (self.caret, self.anchor);
        let len = self.chars.len();

        if extend {
            let anchor = self.anchor.unwrap_or(self.caret);
            self.caret = motion.target(self.caret, len);
            self.anchor = Some(anchor);
        } else if let Some(sel) = self.selection() {
            self.caret = match motion {
                Motion::Left => sel.start(),
                Motion::Right => sel.end(),
                Motion::Start | Motion::End => motion.target(self.caret, len),
            };
            self.anchor = None;
        } else {
            self.caret = motion.target(self.caret, len);
        }

        self.normalize();
        (self.caret, self.anchor) != before
    }

    pub fn select_all(&mut self) -> bool {
        if self.chars.is_empty() {
            return false;
        }
        self.select_range(0, self.chars.len())
    }

    /// Place the caret, dropping any selection
    pub fn set_caret(&mut self, index: usize) -> bool {
        let before = (self.caret, self.anchor);
        self.caret = index.min(self.chars.len());
        self.anchor = None;
        (self.caret, self.anchor) != before
    }

    /// Select from `anchor` to `caret`, both clamped into the buffer
    pub fn select_range(&mut self, anchor: usize, caret: usize) -> bool {
        let before = (self.caret, self.anchor);
        self.anchor = Some(anchor);
        self.caret = caret;
        self.normalize();
        (self.caret, self.anchor) != before
    }

    // Clipboard

    /// Selected text, buffer untouched
    pub fn copy_selection(&self) -> Option<String> {
        self.selected_text()
    }

    /// Selected text, removed from the buffer with the caret at the cut point
    pub fn cut_selection(&mut self) -> Option<String> {
        let text = self.copy_selection()?;
        self.delete_selection();
        Some(text)
    }

    // Internal helpers

    fn delete_selection(&mut self) -> bool {
        let Some(sel) = self.selection() else {
            self.anchor = None;
            return false;
        };
        self.chars.drain(sel.start()..sel.end());
        self.caret = sel.start();
        self.anchor = None;
        true
    }

    fn normalize(&mut self) {
        let len = self.chars.len();
        self.caret = self.caret.min(len);
        self.anchor = self
            .anchor
            .map(|anchor| anchor.min(len))
            .filter(|&anchor| anchor != self.caret);
    }
}
