#![no_std]

//! # Input Types
//!
//! Structured input events consumed by the glyph picker.
//!
//! ## Philosophy
//!
//! - **Events, not bytes**: Input arrives as typed key and pointer events
//! - **Hit-testing is the host's job**: Pointer events already carry the
//!   buffer position or grid cell they landed on
//! - **Testable**: Events are serializable and can be injected for testing
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - Raw hardware scan codes
//! - Screen-coordinate pointer tracking
//! - A complete keyboard layout database (see [`KeyEvent::to_char`])

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Input event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Keyboard event
    Key(KeyEvent),
    /// Pointer (mouse/touch) event, already hit-tested by the host
    Pointer(PointerEvent),
}

impl InputEvent {
    /// Creates a key event
    pub fn key(event: KeyEvent) -> Self {
        Self::Key(event)
    }

    /// Creates a pointer event
    pub fn pointer(event: PointerEvent) -> Self {
        Self::Pointer(event)
    }

    /// Returns the key event if this is a key event
    pub fn as_key(&self) -> Option<&KeyEvent> {
        match self {
            Self::Key(event) => Some(event),
            Self::Pointer(_) => None,
        }
    }

    /// Returns the pointer event if this is a pointer event
    pub fn as_pointer(&self) -> Option<&PointerEvent> {
        match self {
            Self::Pointer(event) => Some(event),
            Self::Key(_) => None,
        }
    }
}

/// Keyboard event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// The key that changed state
    pub code: KeyCode,
    /// Modifier keys that were active
    pub modifiers: Modifiers,
    /// Pressed, released or auto-repeat
    pub state: KeyState,
    /// Text produced by the host's layout or IME, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl KeyEvent {
    pub fn new(code: KeyCode, modifiers: Modifiers, state: KeyState) -> Self {
        Self {
            code,
            modifiers,
            state,
            text: None,
        }
    }

    pub fn pressed(code: KeyCode, modifiers: Modifiers) -> Self {
        Self::new(code, modifiers, KeyState::Pressed)
    }

    pub fn released(code: KeyCode, modifiers: Modifiers) -> Self {
        Self::new(code, modifiers, KeyState::Released)
    }

    pub fn repeat(code: KeyCode, modifiers: Modifiers) -> Self {
        Self::new(code, modifiers, KeyState::Repeat)
    }

    /// A pressed event that carries composed text (e.g. from an IME)
    pub fn text(text: impl Into<String>) -> Self {
        Self::pressed(KeyCode::Unknown, Modifiers::NONE).with_text(text)
    }

    /// Attaches produced text to this event
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Pressed and repeat both count as activations
    pub fn is_active(&self) -> bool {
        matches!(self.state, KeyState::Pressed | KeyState::Repeat)
    }

    pub fn is_released(&self) -> bool {
        self.state == KeyState::Released
    }

    /// Returns the character this key produces on a US layout.
    ///
    /// Used only when the host did not attach `text`. Returns `None` for
    /// non-printing keys and for chords involving Ctrl, Alt or Meta.
    pub fn to_char(&self) -> Option<char> {
        if self.modifiers.is_ctrl() || self.modifiers.is_alt() || self.modifiers.is_meta() {
            return None;
        }
        let shift = self.modifiers.is_shift();
        let pick = |lower: char, upper: char| Some(if shift { upper } else { lower });

        match self.code {
            KeyCode::A => pick('a', 'A'),
            KeyCode::B => pick('b', 'B'),
            KeyCode::C => pick('c', 'C'),
            KeyCode::D => pick('d', 'D'),
            KeyCode::E => pick('e', 'E'),
            KeyCode::F => pick('f', 'F'),
            KeyCode::G => pick('g', 'G'),
            KeyCode::H => pick('h', 'H'),
            KeyCode::I => pick('i', 'I'),
            KeyCode::J => pick('j', 'J'),
            KeyCode::K => pick('k', 'K'),
            KeyCode::L => pick('l', 'L'),
            KeyCode::M => pick('m', 'M'),
            KeyCode::N => pick('n', 'N'),
            KeyCode::O => pick('o', 'O'),
            KeyCode::P => pick('p', 'P'),
            KeyCode::Q => pick('q', 'Q'),
            KeyCode::R => pick('r', 'R'),
            KeyCode::S => pick('s', 'S'),
            KeyCode::T => pick('t', 'T'),
            KeyCode::U => pick('u', 'U'),
            KeyCode::V => pick('v', 'V'),
            KeyCode::W => pick('w', 'W'),
            KeyCode::X => pick('x', 'X'),
            KeyCode::Y => pick('y', 'Y'),
            KeyCode::Z => pick('z', 'Z'),

            KeyCode::Num0 => pick('0', ')'),
            KeyCode::Num1 => pick('1', '!'),
            KeyCode::Num2 => pick('2', '@'),
            KeyCode::Num3 => pick('3', '#'),
            KeyCode::Num4 => pick('4', '$'),
            KeyCode::Num5 => pick('5', '%'),
            KeyCode::Num6 => pick('6', '^'),
            KeyCode::Num7 => pick('7', '&'),
            KeyCode::Num8 => pick('8', '*'),
            KeyCode::Num9 => pick('9', '('),

            KeyCode::Space => Some(' '),
            KeyCode::Minus => pick('-', '_'),
            KeyCode::Equal => pick('=', '+'),
            KeyCode::Semicolon => pick(';', ':'),
            KeyCode::Quote => pick('\'', '"'),
            KeyCode::Comma => pick(',', '<'),
            KeyCode::Period => pick('.', '>'),
            KeyCode::Slash => pick('/', '?'),
            _ => None,
        }
    }
}

/// Key state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyState {
    Pressed,
    Released,
    Repeat,
}

impl fmt::Display for KeyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pressed => write!(f, "pressed"),
            Self::Released => write!(f, "released"),
            Self::Repeat => write!(f, "repeat"),
        }
    }
}

/// Logical key codes.
///
/// Only the keys a single-line search field and a result grid care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    // Letters
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    // Digits
    Num0,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
    Num8,
    Num9,

    // Punctuation
    Space,
    Minus,
    Equal,
    Semicolon,
    Quote,
    Comma,
    Period,
    Slash,

    // Editing
    Backspace,
    Delete,
    Enter,
    Escape,
    Tab,

    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,

    /// Key without a dedicated code; `KeyEvent::text` carries its meaning
    Unknown,
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Modifier keys as a small bit set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    bits: u8,
}

impl Modifiers {
    pub const NONE: Self = Self { bits: 0 };
    pub const CTRL: Self = Self { bits: 1 << 0 };
    pub const ALT: Self = Self { bits: 1 << 1 };
    pub const SHIFT: Self = Self { bits: 1 << 2 };
    /// Meta/Super/Command key
    pub const META: Self = Self { bits: 1 << 3 };

    pub fn none() -> Self {
        Self::NONE
    }

    pub fn with(mut self, other: Modifiers) -> Self {
        self.bits |= other.bits;
        self
    }

    pub fn contains(&self, other: Modifiers) -> bool {
        (self.bits & other.bits) == other.bits
    }

    pub fn is_ctrl(&self) -> bool {
        self.contains(Self::CTRL)
    }

    pub fn is_alt(&self) -> bool {
        self.contains(Self::ALT)
    }

    pub fn is_shift(&self) -> bool {
        self.contains(Self::SHIFT)
    }

    pub fn is_meta(&self) -> bool {
        self.contains(Self::META)
    }

    /// The platform "command" chord: Ctrl on most hosts, Meta on macOS
    pub fn is_command(&self) -> bool {
        self.is_ctrl() || self.is_meta()
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }

        let mut parts = Vec::new();
        if self.is_ctrl() {
            parts.push("Ctrl");
        }
        if self.is_alt() {
            parts.push("Alt");
        }
        if self.is_shift() {
            parts.push("Shift");
        }
        if self.is_meta() {
            parts.push("Meta");
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// Pointer event, hit-tested by the host before delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub target: PointerTarget,
}

impl PointerEvent {
    pub fn down(target: PointerTarget) -> Self {
        Self {
            kind: PointerKind::Down,
            target,
        }
    }

    pub fn moved(target: PointerTarget) -> Self {
        Self {
            kind: PointerKind::Move,
            target,
        }
    }

    pub fn up(target: PointerTarget) -> Self {
        Self {
            kind: PointerKind::Up,
            target,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerKind {
    Down,
    Move,
    Up,
}

/// What the pointer is over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerTarget {
    /// Search field, at the given codepoint boundary.
    /// Hosts clamp positions past either edge of the text to that edge.
    Buffer(usize),
    /// Result grid cell, by linear index into the filtered list
    Cell(usize),
    /// Anywhere outside the picker surface
    Outside,
}
