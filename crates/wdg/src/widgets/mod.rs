//! Built-in widgets.

/// Window widget.
pub mod window;

pub use window::Window;
