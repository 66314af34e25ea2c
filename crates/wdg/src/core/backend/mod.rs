/// Crossterm backend implementation.
pub mod crossterm;
/// In-memory backend for tests.
#[cfg(any(test, feature = "testing"))]
pub mod test;

use std::{fmt::Debug, time::Duration};

use crate::{
    error::Result,
    event::Input,
    geom::{Expanse, Point},
};

/// The terminal contract consumed by the core. Screen state drives the
/// lifecycle methods, the event loop drives `read_input`, and widgets paint
/// through `print`.
pub trait Backend: Debug {
    /// Take control of the terminal: raw input, no echo, hidden cursor.
    fn start(&mut self) -> Result<()>;

    /// Restore the terminal to a neutral state.
    fn stop(&mut self) -> Result<()>;

    /// Current terminal extents.
    fn size(&self) -> Result<Expanse>;

    /// Does the terminal support color?
    fn has_colors(&self) -> bool;

    /// Block until input arrives or `timeout` elapses. Returns `None` on
    /// timeout.
    fn read_input(&mut self, timeout: Duration) -> Result<Option<Input>>;

    /// Write text at a cell location.
    fn print(&mut self, at: Point, text: &str) -> Result<()>;

    /// Clear the whole screen.
    fn clear(&mut self) -> Result<()>;

    /// Flush pending output to the terminal.
    fn refresh(&mut self) -> Result<()>;
}
