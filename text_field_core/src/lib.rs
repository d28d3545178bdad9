#![no_std]

//! # Text Field Core
//!
//! A single-line text editing state machine that never owns native input
//! focus. Hosts feed it discrete edit operations; it keeps the buffer, caret
//! and selection consistent.
//!
//! ## Philosophy
//!
//! - **No_std compatible**: Uses alloc but not std
//! - **Deterministic**: Same operation trace => same field state
//! - **Codepoint granularity**: Caret positions count Unicode scalar values,
//!   not user-perceived characters
//! - **Mechanism over policy**: The field edits text; the host decides which
//!   key means which operation and owns the clipboard
//!
//! ## Invariants
//!
//! - `caret <= len` after every operation
//! - A selection is never empty; an anchor equal to the caret is dropped

extern crate alloc;

pub mod field;
pub mod motion;
pub mod selection;
pub mod snapshot;

pub use field::{EditOp, EditOutcome, TextField};
pub use motion::Motion;
pub use selection::Selection;
pub use snapshot::FieldSnapshot;
