//! Core engine: registry, focus chain, dispatch router, event loop and
//! screen state.

// Core modules - public
/// Terminal backends.
pub mod backend;
/// Context handed to widget capabilities.
pub mod context;
/// Debug dump utilities.
pub mod dump;
/// Core error types.
pub mod error;
/// Input event types.
pub mod event;
/// Object and screen flag sets.
pub mod flags;
/// Object handle type.
pub mod id;
/// Object shells and type tags.
pub mod object;
/// The object registry.
pub mod registry;
/// Event loop configuration.
pub mod runloop;
/// Terminal geometry and capabilities.
pub mod screen;
/// Testing utilities.
#[cfg(any(test, feature = "testing"))]
pub mod testing;
/// The toolkit instance.
pub mod wdg;

// Core modules - internal
/// Key routing.
mod dispatch;
/// Focus chain traversal.
mod focus;

pub use context::Context;
pub use flags::{ObjectFlags, ScreenFlags};
pub use id::ObjectId;
pub use object::{ObjectType, WidgetObject};
pub use registry::Registry;
pub use runloop::LoopOptions;
pub use screen::Screen;
pub use wdg::{IdleCallback, Wdg};
