//! wdg: the core of a terminal widget toolkit.
//!
//! wdg owns the registry of on-screen objects, the keyboard focus chain and
//! the event loop that turns raw key input into messages for widgets.
//! Painting is left to widgets and the terminal backend.
//!
//! # Quick Start
//!
//! The main entry points are:
//! - [`Wdg`] - A toolkit instance: registry, focus, root and event loop
//! - [`Widget`] - The capability table implemented by every object type
//! - [`backend::Backend`] - The terminal contract
//!
//! # Module Organization
//!
//! - [`geom`] - Geometry primitives (Rect, Point, Expanse)
//! - [`widgets`] - Built-in widget implementations

#![warn(missing_docs)]

// Internal core module - re-export specific items below
mod core;

// Public modules
pub mod widget;
pub mod widgets;

pub use geom;

#[cfg(any(test, feature = "testing"))]
pub use core::testing;
// Re-export core types
pub use core::{
    Context, IdleCallback, LoopOptions, ObjectFlags, ObjectId, ObjectType, Registry, Screen,
    ScreenFlags, Wdg, WidgetObject,
};
pub use core::{backend, context, dump, error, event, flags, id, object, registry, runloop, screen};

// Re-export widget trait and event outcome
pub use widget::{EventOutcome, Widget};
