//! Key routing: the root object sees every key first, then the focused
//! object.

use crate::{
    core::wdg::Wdg,
    error::Result,
    event::key::Key,
    widget::EventOutcome,
};

/// Route one key. Routing stops at the first object that handles it. An
/// object that is both root and focused is offered the key once.
pub fn route(wdg: &mut Wdg, key: Key) -> Result<EventOutcome> {
    let root = wdg.root.filter(|id| wdg.registry.contains(*id));
    if let Some(root) = root {
        let outcome = wdg.invoke(root, |w, ctx| w.get_msg(key, ctx))?;
        if outcome.is_handled() {
            tracing::trace!(%key, ?root, "handled by root");
            return Ok(outcome);
        }
    }

    // The root may have moved focus or destroyed objects, so read focus now.
    let focused = wdg
        .focus
        .filter(|id| wdg.registry.contains(*id) && Some(*id) != root);
    if let Some(focused) = focused {
        let outcome = wdg.invoke(focused, |w, ctx| w.get_msg(key, ctx))?;
        if outcome.is_handled() {
            tracing::trace!(%key, ?focused, "handled by focused object");
            return Ok(outcome);
        }
    }

    tracing::debug!(%key, "unhandled key");
    Ok(EventOutcome::Ignore)
}
