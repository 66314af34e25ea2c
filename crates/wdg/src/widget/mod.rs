//! Widget trait and event outcome types.
//!
//! The trait is the capability table every object type implements. All six
//! capabilities are required: an implementation that lacks one does not
//! compile, so the core never has to check for an empty slot at runtime.

use std::any::Any;

use crate::{context::Context, error::Result, event::key::Key};

/// The result of a `get_msg` call.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EventOutcome {
    /// The key was processed and routing stops.
    Handle,
    /// The key was swallowed without a state change and routing stops.
    Consume,
    /// The key was not handled and routing continues.
    Ignore,
}

impl EventOutcome {
    /// True if routing should stop.
    pub fn is_handled(self) -> bool {
        !matches!(self, Self::Ignore)
    }
}

/// Widgets are the behavior attached to objects in the registry.
///
/// Capabilities run synchronously on the event loop thread and must not
/// block.
pub trait Widget: Any {
    /// Handle a key routed to this object.
    fn get_msg(&mut self, key: Key, ctx: &mut dyn Context) -> Result<EventOutcome>;

    /// The object has become the focused object.
    fn get_focus(&mut self, ctx: &mut dyn Context) -> Result<()>;

    /// The object is no longer the focused object.
    fn lost_focus(&mut self, ctx: &mut dyn Context) -> Result<()>;

    /// The bounding rectangle has changed. The new rectangle is already
    /// visible through `ctx.object().rect()`.
    fn resize(&mut self, ctx: &mut dyn Context) -> Result<()>;

    /// Paint the object.
    fn redraw(&mut self, ctx: &mut dyn Context) -> Result<()>;

    /// Widget-specific teardown. Called once, after the object has been
    /// unlinked from focus and root, immediately before it is released.
    fn destroy(&mut self, ctx: &mut dyn Context) -> Result<()>;
}
