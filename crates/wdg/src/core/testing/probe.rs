use std::{cell::RefCell, rc::Rc};

use crate::{
    context::Context,
    core::{flags::ObjectFlags, id::ObjectId},
    error::Result,
    event::key::Key,
    geom::Rect,
    widget::{EventOutcome, Widget},
};

/// Widget-defined flag bit: a [`Probe`] carrying it reports every key as
/// handled.
pub const PROBE_HANDLES: ObjectFlags = ObjectFlags::from_bits_retain(1 << 8);

/// One recorded capability call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    /// `get_msg` with the routed key.
    GetMsg(ObjectId, Key),
    /// `get_focus`.
    GetFocus(ObjectId),
    /// `lost_focus`.
    LostFocus(ObjectId),
    /// `resize`, with the rectangle visible at call time.
    Resize(ObjectId, Rect),
    /// `redraw`.
    Redraw(ObjectId),
    /// `destroy`, with the focus and root designations visible at call time.
    Destroy {
        /// The object being destroyed.
        id: ObjectId,
        /// Was the object still focused?
        focused: bool,
        /// Was the object still root?
        root: bool,
    },
}

impl Call {
    /// The object the call was made on.
    pub fn id(&self) -> ObjectId {
        match self {
            Self::GetMsg(id, _)
            | Self::GetFocus(id)
            | Self::LostFocus(id)
            | Self::Resize(id, _)
            | Self::Redraw(id)
            | Self::Destroy { id, .. } => *id,
        }
    }
}

/// Shared call log.
pub type Journal = Rc<RefCell<Vec<Call>>>;

/// A widget that records every capability call into a shared journal.
#[derive(Debug)]
pub struct Probe {
    /// Where calls are recorded.
    journal: Journal,
}

impl Probe {
    /// Construct a probe writing to `journal`.
    pub fn new(journal: Journal) -> Self {
        Self { journal }
    }

    /// Append a call.
    fn record(&self, call: Call) {
        self.journal.borrow_mut().push(call);
    }
}

impl Widget for Probe {
    fn get_msg(&mut self, key: Key, ctx: &mut dyn Context) -> Result<EventOutcome> {
        self.record(Call::GetMsg(ctx.id(), key));
        if ctx.object().flags().contains(PROBE_HANDLES) {
            Ok(EventOutcome::Handle)
        } else {
            Ok(EventOutcome::Ignore)
        }
    }

    fn get_focus(&mut self, ctx: &mut dyn Context) -> Result<()> {
        self.record(Call::GetFocus(ctx.id()));
        Ok(())
    }

    fn lost_focus(&mut self, ctx: &mut dyn Context) -> Result<()> {
        self.record(Call::LostFocus(ctx.id()));
        Ok(())
    }

    fn resize(&mut self, ctx: &mut dyn Context) -> Result<()> {
        self.record(Call::Resize(ctx.id(), ctx.object().rect()));
        Ok(())
    }

    fn redraw(&mut self, ctx: &mut dyn Context) -> Result<()> {
        self.record(Call::Redraw(ctx.id()));
        Ok(())
    }

    fn destroy(&mut self, ctx: &mut dyn Context) -> Result<()> {
        self.record(Call::Destroy {
            id: ctx.id(),
            focused: ctx.is_focused(),
            root: ctx.is_root(),
        });
        Ok(())
    }
}
