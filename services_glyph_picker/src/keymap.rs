//! Key event to picker action mapping
//!
//! The mapping is the same in both focus states. What an action does
//! depends on where focus is; that is decided by the picker.

use input_types::{KeyCode, KeyEvent};
use text_field_core::Motion;

use crate::grid::GridDirection;

/// Field edits that need no clipboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Backspace,
    Delete,
}

/// Clipboard chords (Ctrl or Cmd + key)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardCommand {
    SelectAll,
    Copy,
    Cut,
    Paste,
}

/// What a key asks the picker to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Cancel,
    Commit,
    /// Up or Down; `extend` is Shift
    Vertical { direction: GridDirection, extend: bool },
    /// Left or Right; `extend` is Shift
    Horizontal { direction: GridDirection, extend: bool },
    /// Home or End
    Jump { motion: Motion, extend: bool },
    Edit(EditKey),
    Clipboard(ClipboardCommand),
    Insert(String),
}

/// Maps one key event. Released keys and unmapped chords give `None`.
pub fn map_key(event: &KeyEvent) -> Option<KeyAction> {
    if !event.is_active() {
        return None;
    }

    let mods = event.modifiers;
    let extend = mods.is_shift();

    if mods.is_command() {
        let command = match event.code {
            KeyCode::A => ClipboardCommand::SelectAll,
            KeyCode::C => ClipboardCommand::Copy,
            KeyCode::X => ClipboardCommand::Cut,
            KeyCode::V => ClipboardCommand::Paste,
            _ => return None,
        };
        return Some(KeyAction::Clipboard(command));
    }

    let action = match event.code {
        KeyCode::Escape => KeyAction::Cancel,
        KeyCode::Enter => KeyAction::Commit,
        KeyCode::Up => KeyAction::Vertical {
            direction: GridDirection::Up,
            extend,
        },
        KeyCode::Down => KeyAction::Vertical {
            direction: GridDirection::Down,
            extend,
        },
        KeyCode::Left => KeyAction::Horizontal {
            direction: GridDirection::Left,
            extend,
        },
        KeyCode::Right => KeyAction::Horizontal {
            direction: GridDirection::Right,
            extend,
        },
        KeyCode::Home => KeyAction::Jump {
            motion: Motion::Start,
            extend,
        },
        KeyCode::End => KeyAction::Jump {
            motion: Motion::End,
            extend,
        },
        KeyCode::Backspace => KeyAction::Edit(EditKey::Backspace),
        KeyCode::Delete => KeyAction::Edit(EditKey::Delete),
        _ => return printable_text(event).map(KeyAction::Insert),
    };
    Some(action)
}

/// Host text wins over the built-in layout table
fn printable_text(event: &KeyEvent) -> Option<String> {
    let text = match &event.text {
        Some(text) => strip_control(text),
        None => event.to_char().map(String::from)?,
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Drops control characters (newlines, tabs, escapes)
pub fn strip_control(text: &str) -> String {
    text.chars().filter(|c| !c.is_control()).collect()
}
