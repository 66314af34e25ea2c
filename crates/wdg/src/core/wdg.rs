use std::any::Any;

use crate::{
    backend::Backend,
    core::{
        context::{Context, CoreContext},
        dispatch, dump,
        flags::ObjectFlags,
        focus,
        id::ObjectId,
        object::{Constructor, ConstructorTable, ObjectType, WidgetObject},
        registry::{Entry, Registry},
        runloop::{self, LoopOptions},
        screen::Screen,
    },
    error::{Error, Result},
    event::key::Key,
    geom::Rect,
    widget::{EventOutcome, Widget},
    widgets::Window,
};

/// Callback invoked when the input read times out.
pub type IdleCallback = Box<dyn FnMut(&mut Wdg) -> Result<()>>;

/// A toolkit instance: the object registry, focus and root designations,
/// screen state, the terminal backend and the event loop configuration.
///
/// Instances are independent of each other; nothing is process-global.
pub struct Wdg {
    /// Live objects and their traversal order.
    pub(crate) registry: Registry,
    /// The focused object. Cleared before the object is torn down.
    pub(crate) focus: Option<ObjectId>,
    /// The root object. Cleared before the object is torn down.
    pub(crate) root: Option<ObjectId>,
    /// Terminal geometry and capabilities.
    pub(crate) screen: Screen,
    /// Terminal backend.
    pub(crate) backend: Box<dyn Backend>,
    /// Event loop configuration.
    pub(crate) options: LoopOptions,
    /// Constructor collaborators keyed by type tag.
    constructors: ConstructorTable,
    /// Idle callback.
    idle: Option<IdleCallback>,
    /// Bumped on every idle callback change, so a callback that replaces
    /// itself is not restored over its replacement.
    idle_gen: u64,
}

impl Wdg {
    /// Construct a toolkit instance on a backend. The built-in [`Window`]
    /// constructor is registered for [`ObjectType::Window`].
    pub fn new(backend: impl Backend + 'static) -> Self {
        let mut wdg = Self {
            registry: Registry::default(),
            focus: None,
            root: None,
            screen: Screen::default(),
            backend: Box::new(backend),
            options: LoopOptions::default(),
            constructors: ConstructorTable::default(),
            idle: None,
            idle_gen: 0,
        };
        wdg.register_type(ObjectType::Window, |_| Ok(Box::new(Window::default())));
        wdg
    }

    /// Replace the event loop configuration.
    pub fn with_options(mut self, options: LoopOptions) -> Self {
        self.options = options;
        self
    }

    /// Event loop configuration.
    pub fn options(&self) -> &LoopOptions {
        &self.options
    }

    /// Install the constructor collaborator for a type tag, replacing any
    /// previous one.
    pub fn register_type<F>(&mut self, kind: ObjectType, ctor: F)
    where
        F: Fn(&mut WidgetObject) -> Result<Box<dyn Widget>> + 'static,
    {
        let ctor: Constructor = Box::new(ctor);
        if self.constructors.register(kind, ctor) {
            tracing::debug!(?kind, "constructor replaced");
        }
    }

    /// Take over the terminal and record its geometry and capabilities.
    pub fn initialize(&mut self) -> Result<()> {
        self.screen.initialize(self.backend.as_mut())
    }

    /// Hand the terminal back. Safe to call repeatedly, and before
    /// `initialize`.
    pub fn cleanup(&mut self) -> Result<()> {
        self.screen.cleanup(self.backend.as_mut())
    }

    /// Terminal geometry and capabilities.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Run the event loop until `exit_key` is read.
    pub fn run_event_loop(&mut self, exit_key: impl Into<Key>) -> Result<()> {
        runloop::run(self, exit_key.into())
    }

    /// Set or clear the callback run when the input read times out.
    pub fn set_idle_callback(&mut self, callback: Option<IdleCallback>) {
        self.idle = callback;
        self.idle_gen = self.idle_gen.wrapping_add(1);
    }

    /// Is an idle callback installed?
    pub fn has_idle_callback(&self) -> bool {
        self.idle.is_some()
    }

    /// Run the idle callback, if any. Returns false if none is installed.
    pub(crate) fn run_idle(&mut self) -> Result<bool> {
        let Some(mut callback) = self.idle.take() else {
            return Ok(false);
        };
        let generation = self.idle_gen;
        let ret = callback(self);
        if self.idle_gen == generation {
            self.idle = Some(callback);
        }
        ret.map(|()| true)
    }

    /// Create an object of type `kind` and put it at the head of the
    /// registry.
    pub fn create_object(&mut self, kind: ObjectType, flags: ObjectFlags) -> Result<ObjectId> {
        let Some(ctor) = self.constructors.get(kind) else {
            tracing::error!(?kind, "no constructor for object type");
            return Err(Error::UnknownType(kind));
        };
        let is_root = flags.contains(ObjectFlags::ROOT_OBJECT);
        if is_root && let Some(existing) = self.root {
            tracing::warn!(?kind, ?existing, "second root object rejected");
            return Err(Error::RootExists(existing));
        }

        let mut object = WidgetObject::new(kind, flags);
        let widget = ctor(&mut object)?;
        let id = self.registry.insert_head(Entry {
            object,
            widget: Some(widget),
            doomed: false,
        });
        if is_root {
            self.root = Some(id);
        }
        tracing::debug!(?id, ?kind, ?flags, "object created");
        Ok(id)
    }

    /// Destroy an object: unlink root and focus, run its `destroy`
    /// capability, then release it. The object is released even if teardown
    /// fails.
    ///
    /// If one of the object's own capabilities is running, for instance a
    /// dialog closing itself on a key, root and focus are unlinked at once and
    /// teardown runs when that capability returns.
    pub fn destroy_object(&mut self, id: ObjectId) -> Result<()> {
        let entry = self
            .registry
            .entry_mut(id)
            .ok_or(Error::ObjectNotFound(id))?;
        let lifted = entry.widget.take();
        if lifted.is_none() {
            entry.doomed = true;
        }
        if self.root == Some(id) {
            self.root = None;
        }
        if self.focus == Some(id) {
            self.focus = None;
        }
        match lifted {
            Some(widget) => self.teardown(id, widget),
            None => {
                tracing::debug!(?id, "destroy deferred until capability returns");
                Ok(())
            }
        }
    }

    /// Run `destroy` on a widget already lifted out of its slot, then
    /// release the entry.
    fn teardown(&mut self, id: ObjectId, mut widget: Box<dyn Widget>) -> Result<()> {
        let ret = match self.registry.object(id).cloned() {
            Some(shell) => {
                let mut ctx = CoreContext::new(self, id, shell);
                widget.destroy(&mut ctx)
            }
            None => Ok(()),
        };
        self.registry.remove(id);
        tracing::debug!(?id, "object destroyed");
        ret
    }

    /// Set an object's bounding rectangle and run its `resize` capability.
    pub fn resize_object(&mut self, id: ObjectId, rect: impl Into<Rect>) -> Result<()> {
        let entry = self
            .registry
            .entry_mut(id)
            .ok_or(Error::ObjectNotFound(id))?;
        entry.object.rect = rect.into();
        self.invoke(id, |w, ctx| w.resize(ctx))
    }

    /// Run an object's `redraw` capability.
    pub fn redraw_object(&mut self, id: ObjectId) -> Result<()> {
        self.invoke(id, |w, ctx| w.redraw(ctx))
    }

    /// Redraw every object in traversal order, head first.
    pub fn redraw_all(&mut self) -> Result<()> {
        let ids: Vec<ObjectId> = self.registry.iter().collect();
        for id in ids {
            // An earlier redraw may have destroyed this one.
            if self.registry.contains(id) {
                self.redraw_object(id)?;
            }
        }
        Ok(())
    }

    /// The type tag of an object.
    pub fn get_type(&self, id: ObjectId) -> Result<ObjectType> {
        self.object(id)
            .map(WidgetObject::kind)
            .ok_or(Error::ObjectNotFound(id))
    }

    /// The shell of an object.
    pub fn object(&self, id: ObjectId) -> Option<&WidgetObject> {
        self.registry.object(id)
    }

    /// The registry, for traversal.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Handles in traversal order, head first.
    pub fn objects(&self) -> impl DoubleEndedIterator<Item = ObjectId> + '_ {
        self.registry.iter()
    }

    /// Handles in reverse traversal order, tail first.
    pub fn objects_rev(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.registry.iter().rev()
    }

    /// Number of live objects.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// True if no objects are registered.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Is the handle live?
    pub fn contains(&self, id: ObjectId) -> bool {
        self.registry.contains(id)
    }

    /// The focused object, if any.
    pub fn focused(&self) -> Option<ObjectId> {
        self.focus
    }

    /// The root object, if any.
    pub fn root(&self) -> Option<ObjectId> {
        self.root
    }

    /// Move focus to the next focusable object.
    pub fn switch_focus(&mut self) -> Result<()> {
        focus::switch(self)
    }

    /// Route a key to the root object, then the focused object.
    pub fn dispatch(&mut self, key: impl Into<Key>) -> Result<EventOutcome> {
        dispatch::route(self, key.into())
    }

    /// Run `f` on the concrete widget behind a handle. Returns `None` if the
    /// widget is not a `T`.
    pub fn with_widget<T, R>(&mut self, id: ObjectId, f: impl FnOnce(&mut T) -> R) -> Result<Option<R>>
    where
        T: Widget,
    {
        let entry = self
            .registry
            .entry_mut(id)
            .ok_or(Error::ObjectNotFound(id))?;
        let widget = entry.widget.as_mut().ok_or(Error::ReentrantWidget(id))?;
        let any: &mut dyn Any = &mut **widget;
        Ok(any.downcast_mut::<T>().map(f))
    }

    /// Debug listing of the registry, one line per object, head first.
    pub fn dump(&self) -> Result<String> {
        dump::dump(self)
    }

    /// Like [`Wdg::dump`], with ANSI color for display on a terminal.
    pub fn dump_ansi(&self) -> Result<String> {
        dump::dump_ansi(self)
    }

    /// Run one capability of an object. The widget is lifted out of its slot
    /// for the duration, so the capability may create and destroy objects,
    /// including its own.
    pub(crate) fn invoke<R>(
        &mut self,
        id: ObjectId,
        f: impl FnOnce(&mut dyn Widget, &mut dyn Context) -> Result<R>,
    ) -> Result<R> {
        let entry = self
            .registry
            .entry_mut(id)
            .ok_or(Error::ObjectNotFound(id))?;
        let mut widget = entry.widget.take().ok_or(Error::ReentrantWidget(id))?;
        let shell = entry.object.clone();
        let ret = {
            let mut ctx = CoreContext::new(self, id, shell);
            f(widget.as_mut(), &mut ctx)
        };
        match self.registry.entry(id).map(|e| e.doomed) {
            Some(false) => {
                if let Some(entry) = self.registry.entry_mut(id) {
                    entry.widget = Some(widget);
                }
                ret
            }
            // The object destroyed itself; tear it down now its capability
            // has returned.
            Some(true) => {
                let teardown = self.teardown(id, widget);
                let r = ret?;
                teardown?;
                Ok(r)
            }
            None => ret,
        }
    }
}

impl Drop for Wdg {
    fn drop(&mut self) {
        if let Err(e) = self.cleanup() {
            tracing::warn!(error = %e, "cleanup on drop failed");
        }
    }
}
