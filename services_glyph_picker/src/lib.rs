//! # Glyph Picker Service
//!
//! A search-and-grid glyph picker driven entirely by structured input
//! events. The search field is a virtual text field: the picker keeps its
//! own caret, selection and clipboard handling, so the host never has to
//! hand it native focus.
//!
//! ## Philosophy
//!
//! - **One focus at a time**: the field or a grid cell, never both
//! - **Deterministic**: filtering keeps catalog order; no ranking
//! - **Host-owned clipboard**: passed in per event, failures are swallowed
//! - **Canonical values**: everything leaving the picker is `:id:`
//!
//! ## Keys
//!
//! - Type to filter; Backspace/Delete, Left/Right/Home/End edit the query
//! - Down (caret at end) enters the grid; Up from the first row leaves it
//! - Arrows move within the grid; Enter commits the focused glyph
//! - Esc cancels; Ctrl/Cmd + A/C/X/V work on the query
//!
//! ## Example
//!
//! ```ignore
//! use services_glyph_picker::{GlyphPicker, MemoryClipboard, PickerResult, PickerSettings};
//!
//! let mut picker = GlyphPicker::with_builtin(PickerSettings::default());
//! let mut clipboard = MemoryClipboard::new();
//! picker.open();
//!
//! match picker.process_input(event, &mut clipboard) {
//!     PickerResult::Committed(code) => {
//!         // e.g. ":thumbs_up:"
//!     }
//!     PickerResult::Cancelled => {}
//!     PickerResult::Handled | PickerResult::Ignored => {}
//! }
//! ```

pub mod clipboard;
pub mod filter;
pub mod grid;
pub mod keymap;
pub mod picker;
pub mod session;
pub mod settings;

pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard, NoClipboard};
pub use filter::filter_entries;
pub use grid::{GridDirection, GridNavigator, GridStep};
pub use keymap::{map_key, KeyAction};
pub use picker::{FocusState, GlyphPicker, PickerResult, ValueChangeHandler};
pub use session::SessionId;
pub use settings::{PickerSettings, SettingsError};
