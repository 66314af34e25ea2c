//! Geometry primitives used across wdg.

/// Width/height size type.
mod expanse;
/// Point helpers.
mod point;
/// Corner-form rectangles.
mod rect;

pub use expanse::Expanse;
pub use point::Point;
pub use rect::Rect;
