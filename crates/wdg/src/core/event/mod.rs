//! Input events read by the event loop.

pub mod key;

use key::Key;

/// One unit of terminal input. A read timeout is represented by the absence
/// of an `Input`, not by a variant.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Input {
    /// A keystroke.
    Key(Key),
    /// The terminal has been resized. The new geometry is queried from the
    /// backend.
    Resize,
}

impl From<Key> for Input {
    fn from(k: Key) -> Self {
        Self::Key(k)
    }
}
