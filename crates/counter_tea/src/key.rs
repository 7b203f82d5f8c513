//! Keyboard input.

use std::fmt;

/// A key press delivered to the model.
///
/// ```rust
/// use counter_tea::{KeyMsg, KeyType};
///
/// let key = KeyMsg::from_char('+');
/// assert_eq!(key.key_type, KeyType::Runes);
/// assert_eq!(key.rune(), Some('+'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMsg {
    /// The kind of key pressed.
    pub key_type: KeyType,
    /// Characters typed, for [`KeyType::Runes`].
    pub runes: Vec<char>,
    /// Whether Alt was held.
    pub alt: bool,
}

impl KeyMsg {
    /// A non-character key.
    pub const fn from_type(key_type: KeyType) -> Self {
        Self {
            key_type,
            runes: Vec::new(),
            alt: false,
        }
    }

    /// A single typed character.
    pub fn from_char(c: char) -> Self {
        Self {
            key_type: KeyType::Runes,
            runes: vec![c],
            alt: false,
        }
    }

    /// Set the alt modifier.
    pub const fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    /// The first typed character, if this is a rune key.
    pub fn rune(&self) -> Option<char> {
        if self.key_type == KeyType::Runes {
            self.runes.first().copied()
        } else {
            None
        }
    }
}

impl fmt::Display for KeyMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alt {
            write!(f, "alt+")?;
        }
        if self.key_type == KeyType::Runes {
            for c in &self.runes {
                write!(f, "{c}")?;
            }
            Ok(())
        } else {
            write!(f, "{}", self.key_type)
        }
    }
}

/// Keys the runtime distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    /// One or more printable characters.
    Runes,
    /// Space bar.
    Space,
    /// Enter / Return.
    Enter,
    /// Tab.
    Tab,
    /// Shift+Tab.
    ShiftTab,
    /// Escape.
    Esc,
    /// Backspace.
    Backspace,
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// Home.
    Home,
    /// End.
    End,
    /// Page up.
    PgUp,
    /// Page down.
    PgDown,
    /// Ctrl+C.
    CtrlC,
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Runes => "runes",
            Self::Space => " ",
            Self::Enter => "enter",
            Self::Tab => "tab",
            Self::ShiftTab => "shift+tab",
            Self::Esc => "esc",
            Self::Backspace => "backspace",
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::Home => "home",
            Self::End => "end",
            Self::PgUp => "pgup",
            Self::PgDown => "pgdown",
            Self::CtrlC => "ctrl+c",
        };
        f.write_str(name)
    }
}

/// Convert a crossterm key event into a [`KeyMsg`].
///
/// Returns `None` for keys the runtime does not model (function keys,
/// control chords other than Ctrl+C, and so on).
pub fn from_crossterm_key(
    code: crossterm::event::KeyCode,
    modifiers: crossterm::event::KeyModifiers,
) -> Option<KeyMsg> {
    use crossterm::event::{KeyCode, KeyModifiers};

    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let shift = modifiers.contains(KeyModifiers::SHIFT);
    let alt = modifiers.contains(KeyModifiers::ALT);

    let key_type = match code {
        KeyCode::Char(c) if ctrl => {
            return (c.eq_ignore_ascii_case(&'c')).then(|| KeyMsg::from_type(KeyType::CtrlC));
        }
        KeyCode::Char(' ') => KeyType::Space,
        KeyCode::Char(c) => {
            let mut key = KeyMsg::from_char(c);
            key.alt = alt;
            return Some(key);
        }
        KeyCode::Enter => KeyType::Enter,
        KeyCode::Tab if shift => KeyType::ShiftTab,
        KeyCode::Tab => KeyType::Tab,
        KeyCode::BackTab => KeyType::ShiftTab,
        KeyCode::Esc => KeyType::Esc,
        KeyCode::Backspace => KeyType::Backspace,
        KeyCode::Up => KeyType::Up,
        KeyCode::Down => KeyType::Down,
        KeyCode::Left => KeyType::Left,
        KeyCode::Right => KeyType::Right,
        KeyCode::Home => KeyType::Home,
        KeyCode::End => KeyType::End,
        KeyCode::PageUp => KeyType::PgUp,
        KeyCode::PageDown => KeyType::PgDown,
        _ => return None,
    };

    let mut key = KeyMsg::from_type(key_type);
    key.alt = alt;
    Some(key)
}
