//! Integration tests for the glyph picker
//!
//! These tests drive complete picker sessions with simulated key and
//! pointer input against a small fixed catalog.

use std::cell::RefCell;
use std::rc::Rc;

use glyph_catalog::{Catalog, Entry, Resolver, Shortcode};
use input_types::{InputEvent, KeyCode, KeyEvent, Modifiers, PointerEvent, PointerTarget};
use services_glyph_picker::{
    FocusState, GlyphPicker, MemoryClipboard, NoClipboard, PickerResult, PickerSettings,
};

fn scenario_resolver() -> Resolver {
    let entries = vec![
        Entry::new("grinning", "Grinning Face", "😀", vec!["smile".into(), "happy".into()]),
        Entry::new("100", "Hundred Points", "💯", vec!["score".into()]),
        Entry::new("large_blue_circle", "Blue Circle", "🔵", vec![]),
        Entry::new("thumbs_up", "Thumbs Up", "👍", vec!["+1".into(), "approve".into()]),
    ];
    Resolver::new(Catalog::from_entries(entries).unwrap())
}

fn settings() -> PickerSettings {
    PickerSettings::new().with_columns(2)
}

fn open_picker(resolver: &Resolver) -> GlyphPicker<'_> {
    let mut picker = GlyphPicker::new(resolver, settings());
    picker.open();
    picker
}

fn press_key(code: KeyCode) -> InputEvent {
    InputEvent::key(KeyEvent::pressed(code, Modifiers::none()))
}

fn press_ctrl(code: KeyCode) -> InputEvent {
    InputEvent::key(KeyEvent::pressed(code, Modifiers::CTRL))
}

fn type_text(picker: &mut GlyphPicker<'_>, text: &str) {
    let mut clipboard = MemoryClipboard::new();
    for ch in text.chars() {
        let event = InputEvent::key(KeyEvent::text(ch.to_string()));
        assert_eq!(picker.process_input(event, &mut clipboard), PickerResult::Handled);
    }
}

fn send(picker: &mut GlyphPicker<'_>, event: InputEvent) -> PickerResult {
    picker.process_input(event, &mut MemoryClipboard::new())
}

fn filtered_ids(picker: &GlyphPicker<'_>) -> Vec<String> {
    picker.filtered().iter().map(|e| e.id.clone()).collect()
}

fn record_changes(picker: &mut GlyphPicker<'_>) -> Rc<RefCell<Vec<Option<String>>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    picker.on_change(move |value: Option<&Shortcode>| {
        sink.borrow_mut().push(value.map(|code| code.to_string()));
    });
    log
}

#[test]
fn test_search_and_commit_by_keyboard() {
    let resolver = scenario_resolver();
    let mut picker = open_picker(&resolver);
    let changes = record_changes(&mut picker);

    assert_eq!(
        filtered_ids(&picker),
        ["grinning", "100", "large_blue_circle", "thumbs_up"]
    );

    type_text(&mut picker, "thumbs");
    assert_eq!(filtered_ids(&picker), ["thumbs_up"]);
    assert_eq!(picker.focus_state(), FocusState::InBuffer(6));

    assert_eq!(send(&mut picker, press_key(KeyCode::Down)), PickerResult::Handled);
    assert_eq!(picker.focus_state(), FocusState::InGrid(0));

    let result = send(&mut picker, press_key(KeyCode::Enter));
    let code = match result {
        PickerResult::Committed(code) => code,
        other => panic!("expected commit, got {other:?}"),
    };
    assert_eq!(code.as_str(), ":thumbs_up:");
    assert_eq!(picker.value(), Some(&code));
    assert_eq!(*changes.borrow(), [Some(":thumbs_up:".to_string())]);
    assert!(!picker.is_open());
}

#[test]
fn test_value_round_trips_to_glyph() {
    let resolver = scenario_resolver();
    let mut picker = GlyphPicker::new(&resolver, settings());

    picker.set_value(Some(":100:"));
    assert_eq!(picker.display_glyph(), Some("💯"));

    picker.set_value(Some("👍"));
    assert_eq!(picker.value().map(Shortcode::as_str), Some(":thumbs_up:"));
    assert_eq!(picker.display_glyph(), Some("👍"));

    // Well-formed but unknown ids are kept and shown verbatim
    picker.set_value(Some(":party_parrot:"));
    assert_eq!(picker.display_glyph(), Some(":party_parrot:"));
}

#[test]
fn test_import_rejects_near_miss_ids() {
    let resolver = scenario_resolver();
    assert_eq!(resolver.validate_and_normalize(":blue_circle:"), None);

    // Searching by the substring still finds the real entry
    let mut picker = open_picker(&resolver);
    type_text(&mut picker, "blue_circle");
    assert_eq!(filtered_ids(&picker), ["large_blue_circle"]);
}

#[test]
fn test_up_from_first_row_returns_to_field_end() {
    let resolver = scenario_resolver();
    let mut picker = open_picker(&resolver);

    type_text(&mut picker, "e");
    send(&mut picker, press_ctrl(KeyCode::A));
    assert!(picker.field().selection().is_some());

    send(&mut picker, press_key(KeyCode::Down));
    assert_eq!(picker.focus_state(), FocusState::InGrid(0));
    send(&mut picker, press_key(KeyCode::Right));
    assert_eq!(picker.focus_state(), FocusState::InGrid(1));

    send(&mut picker, press_key(KeyCode::Up));
    assert_eq!(picker.focus_state(), FocusState::InBuffer(1));
    assert_eq!(picker.field().selection(), None);
}

#[test]
fn test_typing_in_grid_returns_to_field() {
    let resolver = scenario_resolver();
    let mut picker = open_picker(&resolver);

    send(&mut picker, press_key(KeyCode::Down));
    send(&mut picker, press_key(KeyCode::Down));
    assert_eq!(picker.focus_state(), FocusState::InGrid(2));

    type_text(&mut picker, "1");
    assert_eq!(picker.focus_state(), FocusState::InBuffer(1));
    assert_eq!(picker.query(), "1");
    assert_eq!(filtered_ids(&picker), ["100", "thumbs_up"]);

    send(&mut picker, press_key(KeyCode::Down));
    send(&mut picker, press_key(KeyCode::Right));
    send(&mut picker, press_key(KeyCode::Backspace));
    assert_eq!(picker.focus_state(), FocusState::InBuffer(0));
    assert_eq!(filtered_ids(&picker).len(), 4);
}

#[test]
fn test_no_matches_forces_field_focus() {
    let resolver = scenario_resolver();
    let mut picker = open_picker(&resolver);

    type_text(&mut picker, "zebra");
    assert!(picker.filtered().is_empty());

    send(&mut picker, press_key(KeyCode::Down));
    assert_eq!(picker.focus_state(), FocusState::InBuffer(5));
    assert_eq!(picker.focused_entry(), None);
    assert_eq!(send(&mut picker, press_key(KeyCode::Enter)), PickerResult::Handled);
    assert_eq!(picker.value(), None);
}

#[test]
fn test_cancel_discards_search() {
    let resolver = scenario_resolver();
    let mut picker = open_picker(&resolver);
    let changes = record_changes(&mut picker);
    picker.set_value(Some(":grinning:"));

    type_text(&mut picker, "gr");
    send(&mut picker, press_key(KeyCode::Down));
    assert_eq!(send(&mut picker, press_key(KeyCode::Escape)), PickerResult::Cancelled);

    assert!(!picker.is_open());
    assert_eq!(picker.query(), "");
    assert_eq!(picker.focus_state(), FocusState::InBuffer(0));
    assert_eq!(picker.value().map(Shortcode::as_str), Some(":grinning:"));
    assert!(changes.borrow().is_empty());

    picker.open();
    assert_eq!(filtered_ids(&picker).len(), 4);
}

#[test]
fn test_clipboard_shortcuts_on_query() {
    let resolver = scenario_resolver();
    let mut picker = open_picker(&resolver);
    let mut clipboard = MemoryClipboard::new();

    type_text(&mut picker, "grin");
    for code in [KeyCode::A, KeyCode::C] {
        assert_eq!(
            picker.process_input(press_ctrl(code), &mut clipboard),
            PickerResult::Handled
        );
    }
    assert_eq!(clipboard.content(), Some("grin"));
    assert_eq!(picker.query(), "grin");

    picker.process_input(press_ctrl(KeyCode::X), &mut clipboard);
    assert_eq!(picker.query(), "");
    assert_eq!(filtered_ids(&picker).len(), 4);

    picker.process_input(press_ctrl(KeyCode::V), &mut clipboard);
    picker.process_input(press_ctrl(KeyCode::V), &mut clipboard);
    assert_eq!(picker.query(), "gringrin");
    assert!(picker.filtered().is_empty());
}

#[test]
fn test_paste_strips_control_characters() {
    let resolver = scenario_resolver();
    let mut picker = open_picker(&resolver);
    let mut clipboard = MemoryClipboard::with_text("thu\nmbs\t");

    picker.process_input(press_ctrl(KeyCode::V), &mut clipboard);
    assert_eq!(picker.query(), "thumbs");
    assert_eq!(filtered_ids(&picker), ["thumbs_up"]);
}

#[test]
fn test_failing_clipboard_is_swallowed() {
    let resolver = scenario_resolver();
    let mut picker = open_picker(&resolver);
    let mut clipboard = NoClipboard;

    type_text(&mut picker, "gr");
    for code in [KeyCode::A, KeyCode::C, KeyCode::X, KeyCode::V] {
        assert_eq!(
            picker.process_input(press_ctrl(code), &mut clipboard),
            PickerResult::Handled
        );
    }
    // Cut did not remove text the clipboard never received
    assert_eq!(picker.query(), "gr");
    assert!(picker.field().selection().is_some());
}

#[test]
fn test_clipboard_chords_absorbed_in_grid() {
    let resolver = scenario_resolver();
    let mut picker = open_picker(&resolver);
    let mut clipboard = MemoryClipboard::with_text("100");

    send(&mut picker, press_key(KeyCode::Down));
    assert_eq!(
        picker.process_input(press_ctrl(KeyCode::V), &mut clipboard),
        PickerResult::Handled
    );
    assert_eq!(picker.focus_state(), FocusState::InBuffer(3));
    assert_eq!(filtered_ids(&picker), ["100"]);
}

#[test]
fn test_drag_selects_query_text() {
    let resolver = scenario_resolver();
    let mut picker = open_picker(&resolver);
    type_text(&mut picker, "thumbs");

    let down = InputEvent::pointer(PointerEvent::down(PointerTarget::Buffer(1)));
    assert_eq!(send(&mut picker, down), PickerResult::Handled);
    assert!(picker.is_dragging());
    assert_eq!(picker.focus_state(), FocusState::InBuffer(1));

    send(&mut picker, InputEvent::pointer(PointerEvent::moved(PointerTarget::Buffer(4))));
    assert_eq!(picker.field().selected_text().as_deref(), Some("hum"));

    // Leaving the field keeps the capture and the selection
    let outside = InputEvent::pointer(PointerEvent::moved(PointerTarget::Outside));
    assert_eq!(send(&mut picker, outside), PickerResult::Handled);
    assert_eq!(picker.field().selected_text().as_deref(), Some("hum"));

    send(&mut picker, InputEvent::pointer(PointerEvent::moved(PointerTarget::Buffer(0))));
    assert_eq!(picker.field().selected_text().as_deref(), Some("t"));

    let up = InputEvent::pointer(PointerEvent::up(PointerTarget::Outside));
    assert_eq!(send(&mut picker, up), PickerResult::Handled);
    assert!(!picker.is_dragging());

    // No capture: moves are not consumed
    let stray = InputEvent::pointer(PointerEvent::moved(PointerTarget::Buffer(6)));
    assert_eq!(send(&mut picker, stray), PickerResult::Ignored);
    assert_eq!(picker.field().selected_text().as_deref(), Some("t"));
}

#[test]
fn test_clicking_a_cell_commits() {
    let resolver = scenario_resolver();
    let mut picker = open_picker(&resolver);

    let miss = InputEvent::pointer(PointerEvent::down(PointerTarget::Cell(9)));
    assert_eq!(send(&mut picker, miss), PickerResult::Ignored);

    let hit = InputEvent::pointer(PointerEvent::down(PointerTarget::Cell(1)));
    match send(&mut picker, hit) {
        PickerResult::Committed(code) => assert_eq!(code.as_str(), ":100:"),
        other => panic!("expected commit, got {other:?}"),
    }
    assert!(!picker.is_open());
}

#[test]
fn test_embedded_picker_stays_open() {
    let resolver = scenario_resolver();
    let mut picker = GlyphPicker::new(&resolver, settings().with_embedded(true));
    assert!(picker.is_open());
    let changes = record_changes(&mut picker);

    type_text(&mut picker, "score");
    send(&mut picker, press_key(KeyCode::Down));
    assert!(matches!(
        send(&mut picker, press_key(KeyCode::Enter)),
        PickerResult::Committed(_)
    ));
    assert!(picker.is_open());

    assert_eq!(send(&mut picker, press_key(KeyCode::Escape)), PickerResult::Cancelled);
    assert!(picker.is_open());
    assert_eq!(picker.query(), "");

    picker.close();
    assert!(picker.is_open());

    assert!(picker.clear_value());
    assert!(!picker.clear_value());
    assert_eq!(*changes.borrow(), [Some(":100:".to_string()), None]);
}

#[test]
fn test_settings_file_drives_grid_width() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"columns": 3}}"#).unwrap();
    let settings = PickerSettings::load_from_path(file.path()).unwrap();

    let resolver = scenario_resolver();
    let mut picker = GlyphPicker::new(&resolver, settings);
    picker.open();
    assert_eq!(picker.columns(), 3);

    send(&mut picker, press_key(KeyCode::Down));
    send(&mut picker, press_key(KeyCode::Down));
    assert_eq!(picker.focus_state(), FocusState::InGrid(3));
}

#[test]
fn test_builtin_catalog_session() {
    let mut picker = GlyphPicker::with_builtin(PickerSettings::default());
    picker.open();

    type_text(&mut picker, "thumbs");
    let ids = filtered_ids(&picker);
    assert_eq!(ids, ["thumbs_up", "thumbs_down"]);

    send(&mut picker, press_key(KeyCode::Down));
    send(&mut picker, press_key(KeyCode::Right));
    match send(&mut picker, press_key(KeyCode::Enter)) {
        PickerResult::Committed(code) => assert_eq!(code.as_str(), ":thumbs_down:"),
        other => panic!("expected commit, got {other:?}"),
    }
    assert_eq!(picker.display_glyph(), Some("👎"));
}
