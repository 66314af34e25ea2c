use std::collections::HashMap;

use crate::{core::flags::ObjectFlags, error::Result, geom::Rect, widget::Widget};

/// The type tag of an object. Each tag selects a constructor collaborator at
/// creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ObjectType {
    /// A bordered window.
    Window,
    /// A menu bar or popup menu.
    Menu,
    /// A modal dialog.
    Dialog,
}

/// The core-owned shell of an object: its type, flags and bounding rectangle.
/// Widget-private state lives in the widget itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetObject {
    /// Type tag.
    pub(crate) kind: ObjectType,
    /// Flag bits.
    pub(crate) flags: ObjectFlags,
    /// Bounding rectangle.
    pub(crate) rect: Rect,
}

impl WidgetObject {
    /// Construct a fresh shell with an empty rectangle.
    pub(crate) fn new(kind: ObjectType, flags: ObjectFlags) -> Self {
        Self {
            kind,
            flags,
            rect: Rect::zero(),
        }
    }

    /// The type tag.
    pub fn kind(&self) -> ObjectType {
        self.kind
    }

    /// The flag bits.
    pub fn flags(&self) -> ObjectFlags {
        self.flags
    }

    /// The bounding rectangle.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Set the initial geometry. Constructors use this to register the
    /// geometry they need; later changes go through `resize_object`.
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    /// Add widget-defined flag bits. The root bit cannot be granted here.
    pub fn insert_flags(&mut self, flags: ObjectFlags) {
        self.flags.insert(flags - ObjectFlags::ROOT_OBJECT);
    }
}

/// A constructor collaborator. Given the freshly allocated shell, it returns
/// the widget implementing the capability table.
pub type Constructor = Box<dyn Fn(&mut WidgetObject) -> Result<Box<dyn Widget>>>;

/// Constructors keyed by type tag.
#[derive(Default)]
pub(crate) struct ConstructorTable {
    /// Registered constructors.
    table: HashMap<ObjectType, Constructor>,
}

impl ConstructorTable {
    /// Install a constructor, returning true if it replaced an existing one.
    pub(crate) fn register(&mut self, kind: ObjectType, ctor: Constructor) -> bool {
        self.table.insert(kind, ctor).is_some()
    }

    /// Look up the constructor for a type tag.
    pub(crate) fn get(&self, kind: ObjectType) -> Option<&Constructor> {
        self.table.get(&kind)
    }
}
