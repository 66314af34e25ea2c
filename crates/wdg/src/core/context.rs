use crate::{
    core::{
        flags::ObjectFlags,
        id::ObjectId,
        object::{ObjectType, WidgetObject},
        screen::Screen,
        wdg::Wdg,
    },
    error::Result,
    geom::Point,
};

/// The view of the toolkit handed to a widget while one of its capabilities
/// runs.
pub trait Context {
    /// Handle of the object whose capability is running.
    fn id(&self) -> ObjectId;

    /// The object's shell: type, flags and rectangle.
    fn object(&self) -> &WidgetObject;

    /// Terminal geometry and capabilities.
    fn screen(&self) -> Screen;

    /// Is this object the focused object?
    fn is_focused(&self) -> bool;

    /// Is this object the root object?
    fn is_root(&self) -> bool;

    /// The focused object, if any.
    fn focused(&self) -> Option<ObjectId>;

    /// Show or hide this object. Hidden objects drop out of the focus chain.
    fn set_visible(&mut self, visible: bool);

    /// Add this object to, or remove it from, the focus chain.
    fn set_wants_focus(&mut self, wants: bool);

    /// Write text at a cell location.
    fn print(&mut self, at: Point, text: &str) -> Result<()>;

    /// Create a new object.
    fn create_object(&mut self, kind: ObjectType, flags: ObjectFlags) -> Result<ObjectId>;

    /// Run another object's `redraw` capability.
    fn redraw_object(&mut self, id: ObjectId) -> Result<()>;

    /// Destroy an object. An object destroying itself loses its root and
    /// focus designations at once; its `destroy` capability runs after the
    /// current capability returns.
    fn destroy_object(&mut self, id: ObjectId) -> Result<()>;
}

/// Context implementation backed by the toolkit.
pub(crate) struct CoreContext<'a> {
    /// The toolkit.
    wdg: &'a mut Wdg,
    /// The object whose capability is running.
    id: ObjectId,
    /// Snapshot of the object's shell, kept in step with flag edits.
    shell: WidgetObject,
}

impl<'a> CoreContext<'a> {
    /// Construct a context for `id`, with `shell` as its current state.
    pub(crate) fn new(wdg: &'a mut Wdg, id: ObjectId, shell: WidgetObject) -> Self {
        Self { wdg, id, shell }
    }

    /// Apply a flag edit to both the snapshot and the registry.
    fn update_flags(&mut self, flags: ObjectFlags, on: bool) {
        self.shell.flags.set(flags, on);
        if let Some(entry) = self.wdg.registry.entry_mut(self.id) {
            entry.object.flags.set(flags, on);
        }
    }
}

impl Context for CoreContext<'_> {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn object(&self) -> &WidgetObject {
        &self.shell
    }

    fn screen(&self) -> Screen {
        self.wdg.screen
    }

    fn is_focused(&self) -> bool {
        self.wdg.focus == Some(self.id)
    }

    fn is_root(&self) -> bool {
        self.wdg.root == Some(self.id)
    }

    fn focused(&self) -> Option<ObjectId> {
        self.wdg.focus
    }

    fn set_visible(&mut self, visible: bool) {
        self.update_flags(ObjectFlags::VISIBLE, visible);
    }

    fn set_wants_focus(&mut self, wants: bool) {
        self.update_flags(ObjectFlags::WANTS_FOCUS, wants);
    }

    fn print(&mut self, at: Point, text: &str) -> Result<()> {
        self.wdg.backend.print(at, text)
    }

    fn create_object(&mut self, kind: ObjectType, flags: ObjectFlags) -> Result<ObjectId> {
        self.wdg.create_object(kind, flags)
    }

    fn redraw_object(&mut self, id: ObjectId) -> Result<()> {
        self.wdg.redraw_object(id)
    }

    fn destroy_object(&mut self, id: ObjectId) -> Result<()> {
        self.wdg.destroy_object(id)
    }
}
