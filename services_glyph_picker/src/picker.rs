//! The picker state machine
//!
//! Focus is in exactly one of two places: the search field or a grid cell.
//! Every input event is routed by that focus and produces one
//! [`PickerResult`].

use glyph_catalog::{Entry, Resolver, Shortcode};
use input_types::{InputEvent, KeyEvent, PointerEvent, PointerKind, PointerTarget};
use text_field_core::{Motion, TextField};

use crate::clipboard::Clipboard;
use crate::filter::filter_entries;
use crate::grid::{GridDirection, GridNavigator, GridStep};
use crate::keymap::{map_key, strip_control, ClipboardCommand, EditKey, KeyAction};
use crate::session::SessionId;
use crate::settings::PickerSettings;

/// Result of processing one input event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerResult {
    /// Not consumed; the host may route the event elsewhere
    Ignored,
    /// Consumed, picker state may have changed
    Handled,
    /// An entry was chosen
    Committed(Shortcode),
    /// The user aborted
    Cancelled,
}

/// Public view of where focus is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusState {
    /// Search field has focus; caret position in codepoints
    InBuffer(usize),
    /// Grid cell at this index into the filtered list has focus
    InGrid(usize),
}

/// Called whenever the current value changes through the picker
pub type ValueChangeHandler = Box<dyn FnMut(Option<&Shortcode>)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Buffer,
    Grid(usize),
}

/// Pointer capture held between pointer-down and pointer-up in the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DragCapture {
    anchor: usize,
}

/// Glyph picker bound to a resolver
pub struct GlyphPicker<'r> {
    resolver: &'r Resolver,
    navigator: GridNavigator,
    embedded: bool,
    open: bool,
    session: Option<SessionId>,
    field: TextField,
    filtered: Vec<&'r Entry>,
    focus: Focus,
    drag: Option<DragCapture>,
    value: Option<Shortcode>,
    on_change: Option<ValueChangeHandler>,
}

impl GlyphPicker<'static> {
    /// Picker over the process-wide built-in catalog
    pub fn with_builtin(settings: PickerSettings) -> Self {
        Self::new(glyph_catalog::resolver(), settings)
    }
}

impl<'r> GlyphPicker<'r> {
    /// Creates a closed picker (open, if the settings say embedded)
    pub fn new(resolver: &'r Resolver, settings: PickerSettings) -> Self {
        let mut picker = Self {
            resolver,
            navigator: GridNavigator::new(settings.columns),
            embedded: false,
            open: false,
            session: None,
            field: TextField::new(),
            filtered: resolver.entries().iter().collect(),
            focus: Focus::Buffer,
            drag: None,
            value: None,
            on_change: None,
        };
        picker.set_embedded(settings.embedded);
        picker
    }

    /// Registers the value-change callback, replacing any previous one
    pub fn on_change(&mut self, handler: impl FnMut(Option<&Shortcode>) + 'static) {
        self.on_change = Some(Box::new(handler));
    }

    // Lifecycle

    /// Opens the surface with a fresh search session
    pub fn open(&mut self) {
        if self.open {
            return;
        }
        let session = SessionId::new();
        self.open = true;
        self.session = Some(session);
        self.reset_search();
        tracing::debug!(%session, embedded = self.embedded, "picker opened");
    }

    /// Closes the surface and discards search state.
    ///
    /// An embedded picker cannot close; its search state is still reset.
    pub fn close(&mut self) {
        self.reset_search();
        if self.embedded || !self.open {
            return;
        }
        self.open = false;
        if let Some(session) = self.session.take() {
            tracing::debug!(%session, "picker closed");
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_embedded(&self) -> bool {
        self.embedded
    }

    /// Embedding opens the surface; un-embedding leaves it open until closed
    pub fn set_embedded(&mut self, embedded: bool) {
        self.embedded = embedded;
        if embedded {
            self.open();
        }
    }

    // Value

    /// Sets the current value from the host without firing the callback.
    ///
    /// Accepts `:id:`, a bare id or a known glyph. Anything that does not
    /// normalize to a well-formed shortcode clears the value.
    pub fn set_value(&mut self, value: Option<&str>) {
        let resolver = self.resolver;
        self.value = value
            .and_then(|raw| resolver.normalize_to_shortcode(raw))
            .and_then(|code| code.parse::<Shortcode>().ok());
    }

    pub fn value(&self) -> Option<&Shortcode> {
        self.value.as_ref()
    }

    /// Rendered glyph for the current value. Unknown ids render verbatim.
    pub fn display_glyph(&self) -> Option<&str> {
        let resolver = self.resolver;
        self.value
            .as_ref()
            .map(|code| resolver.resolve_to_glyph(code.as_str()))
    }

    /// Clears the value and notifies the host. Returns false if already clear.
    pub fn clear_value(&mut self) -> bool {
        if self.value.take().is_none() {
            return false;
        }
        self.notify_change();
        true
    }

    // Accessors

    pub fn resolver(&self) -> &'r Resolver {
        self.resolver
    }

    pub fn query(&self) -> String {
        self.field.text()
    }

    pub fn field(&self) -> &TextField {
        &self.field
    }

    pub fn filtered(&self) -> &[&'r Entry] {
        &self.filtered
    }

    pub fn columns(&self) -> usize {
        self.navigator.columns()
    }

    pub fn focus_state(&self) -> FocusState {
        match self.focus {
            Focus::Buffer => FocusState::InBuffer(self.field.caret()),
            Focus::Grid(index) => FocusState::InGrid(index),
        }
    }

    pub fn focused_entry(&self) -> Option<&'r Entry> {
        match self.focus {
            Focus::Grid(index) => self.filtered.get(index).copied(),
            Focus::Buffer => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn session(&self) -> Option<SessionId> {
        self.session
    }

    // Input

    /// Processes one input event against the current focus
    pub fn process_input(
        &mut self,
        event: InputEvent,
        clipboard: &mut dyn Clipboard,
    ) -> PickerResult {
        if !self.open {
            return PickerResult::Ignored;
        }
        match event {
            InputEvent::Key(key) => self.handle_key(&key, clipboard),
            InputEvent::Pointer(pointer) => self.handle_pointer(pointer),
        }
    }

    fn handle_key(&mut self, key: &KeyEvent, clipboard: &mut dyn Clipboard) -> PickerResult {
        let Some(action) = map_key(key) else {
            return PickerResult::Ignored;
        };

        match action {
            KeyAction::Cancel => self.cancel(),
            KeyAction::Commit => match self.focus {
                Focus::Grid(index) => self.commit(index),
                Focus::Buffer => PickerResult::Handled,
            },
            KeyAction::Vertical { direction, extend } => self.handle_vertical(direction, extend),
            KeyAction::Horizontal { direction, extend } => match self.focus {
                Focus::Grid(index) => self.step_grid(index, direction),
                Focus::Buffer => {
                    let motion = if direction == GridDirection::Left {
                        Motion::Left
                    } else {
                        Motion::Right
                    };
                    self.field.move_caret(motion, extend);
                    PickerResult::Handled
                }
            },
            KeyAction::Jump { motion, extend } => match self.focus {
                Focus::Grid(_) => PickerResult::Ignored,
                Focus::Buffer => {
                    self.field.move_caret(motion, extend);
                    PickerResult::Handled
                }
            },
            KeyAction::Edit(edit) => {
                self.focus_buffer();
                let changed = match edit {
                    EditKey::Backspace => self.field.delete_backward(),
                    EditKey::Delete => self.field.delete_forward(),
                };
                if changed {
                    self.refilter();
                }
                PickerResult::Handled
            }
            KeyAction::Insert(text) => {
                self.focus_buffer();
                if self.field.insert_or_replace_selection(&text) {
                    self.refilter();
                }
                PickerResult::Handled
            }
            KeyAction::Clipboard(command) => {
                self.handle_clipboard(command, clipboard);
                PickerResult::Handled
            }
        }
    }

    fn handle_vertical(&mut self, direction: GridDirection, extend: bool) -> PickerResult {
        if let Focus::Grid(index) = self.focus {
            return self.step_grid(index, direction);
        }

        match direction {
            GridDirection::Up => {
                self.field.move_caret(Motion::Start, extend);
            }
            _ if extend || !self.field.caret_at_end() => {
                self.field.move_caret(Motion::End, extend);
            }
            _ => {
                let step = self
                    .navigator
                    .step(None, self.filtered.len(), GridDirection::Down);
                if let GridStep::Focus(index) = step {
                    self.drag = None;
                    self.focus = Focus::Grid(index);
                    tracing::debug!(session = ?self.session, index, "focus entered grid");
                }
            }
        }
        PickerResult::Handled
    }

    fn step_grid(&mut self, index: usize, direction: GridDirection) -> PickerResult {
        match self.navigator.step(Some(index), self.filtered.len(), direction) {
            GridStep::Focus(next) => self.focus = Focus::Grid(next),
            GridStep::ExitToBuffer => {
                self.field.move_caret(Motion::End, false);
                self.focus = Focus::Buffer;
                tracing::debug!(session = ?self.session, "focus returned to field");
            }
            GridStep::Stay => {}
        }
        PickerResult::Handled
    }

    fn handle_clipboard(&mut self, command: ClipboardCommand, clipboard: &mut dyn Clipboard) {
        match command {
            ClipboardCommand::SelectAll => {
                self.focus_buffer();
                self.field.select_all();
            }
            ClipboardCommand::Copy => {
                let Some(text) = self.field.copy_selection() else {
                    return;
                };
                if let Err(err) = clipboard.write_text(&text) {
                    tracing::debug!(session = ?self.session, error = %err, "copy failed");
                }
            }
            ClipboardCommand::Cut => {
                self.focus_buffer();
                let Some(text) = self.field.selected_text() else {
                    return;
                };
                // Only remove the text once the clipboard holds it
                match clipboard.write_text(&text) {
                    Ok(()) => {
                        self.field.cut_selection();
                        self.refilter();
                    }
                    Err(err) => {
                        tracing::debug!(session = ?self.session, error = %err, "cut failed");
                    }
                }
            }
            ClipboardCommand::Paste => {
                self.focus_buffer();
                match clipboard.read_text() {
                    Ok(text) => {
                        let text = strip_control(&text);
                        if self.field.paste_at_caret(&text) {
                            self.refilter();
                        }
                    }
                    Err(err) => {
                        tracing::debug!(session = ?self.session, error = %err, "paste failed");
                    }
                }
            }
        }
    }

    fn handle_pointer(&mut self, pointer: PointerEvent) -> PickerResult {
        match (pointer.kind, pointer.target) {
            (PointerKind::Down, PointerTarget::Buffer(index)) => {
                self.focus_buffer();
                self.field.set_caret(index);
                self.drag = Some(DragCapture {
                    anchor: self.field.caret(),
                });
                PickerResult::Handled
            }
            (PointerKind::Down, PointerTarget::Cell(index)) if index < self.filtered.len() => {
                self.drag = None;
                self.commit(index)
            }
            (PointerKind::Down, _) => PickerResult::Ignored,
            (PointerKind::Move, target) => {
                let Some(capture) = self.drag else {
                    return PickerResult::Ignored;
                };
                if let PointerTarget::Buffer(index) = target {
                    self.field.select_range(capture.anchor, index);
                }
                PickerResult::Handled
            }
            (PointerKind::Up, _) => match self.drag.take() {
                Some(_) => PickerResult::Handled,
                None => PickerResult::Ignored,
            },
        }
    }

    // Transitions

    fn commit(&mut self, index: usize) -> PickerResult {
        let Some(entry) = self.filtered.get(index).copied() else {
            return PickerResult::Handled;
        };
        let Some(code) = self.resolver.validate_and_normalize(&entry.id) else {
            tracing::debug!(session = ?self.session, id = %entry.id, "entry not in catalog");
            return PickerResult::Handled;
        };

        tracing::debug!(session = ?self.session, code = %code, "entry committed");
        self.value = Some(code.clone());
        self.notify_change();
        if !self.embedded {
            self.close();
        }
        PickerResult::Committed(code)
    }

    fn cancel(&mut self) -> PickerResult {
        tracing::debug!(session = ?self.session, "picker cancelled");
        self.close();
        PickerResult::Cancelled
    }

    fn focus_buffer(&mut self) {
        self.focus = Focus::Buffer;
    }

    /// Recomputes the filtered list. Any grid focus is discarded.
    fn refilter(&mut self) {
        let query = self.field.text();
        self.filtered = filter_entries(self.resolver.entries(), &query);
        self.focus = Focus::Buffer;
        tracing::trace!(
            session = ?self.session,
            query = %query,
            matches = self.filtered.len(),
            "filter updated"
        );
    }

    fn reset_search(&mut self) {
        self.drag = None;
        self.field.clear();
        self.focus = Focus::Buffer;
        self.refilter();
    }

    fn notify_change(&mut self) {
        if let Some(handler) = self.on_change.as_mut() {
            handler(self.value.as_ref());
        }
    }
}
