//! Keystrokes as seen by the event loop and widgets.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Modifier key state.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Mods: u8 {
        /// Shift is held.
        const SHIFT = 1 << 0;
        /// Control is held.
        const CTRL = 1 << 1;
        /// Alt is held.
        const ALT = 1 << 2;
    }
}

/// Logical key codes.
#[derive(Debug, PartialOrd, PartialEq, Hash, Eq, Clone, Copy)]
pub enum KeyCode {
    /// Backspace.
    Backspace,
    /// Enter/return.
    Enter,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Home.
    Home,
    /// End.
    End,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Tab.
    Tab,
    /// Shift + Tab, as reported by most terminals.
    BackTab,
    /// Delete.
    Delete,
    /// Insert.
    Insert,
    /// NUL.
    Null,
    /// Escape.
    Esc,
    /// Function key: `F(1)` is F1.
    F(u8),
    /// A character.
    Char(char),
}

impl From<char> for KeyCode {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(' ') => write!(f, "space"),
            Self::Char(c) => write!(f, "{c}"),
            Self::F(n) => write!(f, "f{n}"),
            other => f.write_str(&format!("{other:?}").to_lowercase()),
        }
    }
}

/// A keystroke: a key code plus the modifiers held with it.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Key {
    /// Modifier state.
    pub mods: Mods,
    /// Key code.
    pub key: KeyCode,
}

impl Key {
    /// A keystroke with explicit modifiers.
    pub fn new(mods: Mods, key: impl Into<KeyCode>) -> Self {
        Self {
            mods,
            key: key.into(),
        }
    }

    /// A keystroke with Control held.
    pub fn ctrl(key: impl Into<KeyCode>) -> Self {
        Self::new(Mods::CTRL, key)
    }

    /// True if no modifiers are held.
    pub fn is_plain(&self) -> bool {
        self.mods.is_empty()
    }
}

// Comparisons against bare codes and characters only match unmodified keys.
impl PartialEq<KeyCode> for Key {
    fn eq(&self, c: &KeyCode) -> bool {
        self.is_plain() && self.key == *c
    }
}

impl PartialEq<char> for Key {
    fn eq(&self, c: &char) -> bool {
        *self == KeyCode::Char(*c)
    }
}

impl PartialEq<Key> for char {
    fn eq(&self, k: &Key) -> bool {
        *k == *self
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        Self::new(Mods::empty(), c)
    }
}

impl From<KeyCode> for Key {
    fn from(c: KeyCode) -> Self {
        Self::new(Mods::empty(), c)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, m) in [("ctrl", Mods::CTRL), ("alt", Mods::ALT), ("shift", Mods::SHIFT)] {
            if self.mods.contains(m) {
                write!(f, "{name}-")?;
            }
        }
        write!(f, "{}", self.key)
    }
}
