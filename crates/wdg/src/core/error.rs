use std::{io, result::Result as StdResult};

use thiserror::Error;

use crate::core::{id::ObjectId, object::ObjectType};

/// Result type for wdg operations.
pub type Result<T> = StdResult<T, Error>;

/// Core error type.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    /// No constructor is registered for the requested type tag. This is the
    /// fatal configuration error: nothing was registered.
    #[error("no constructor registered for object type {0:?}")]
    UnknownType(ObjectType),

    /// A root object is already registered.
    #[error("root object already registered: {0:?}")]
    RootExists(ObjectId),

    /// The handle does not refer to a live object.
    #[error("object not found: {0:?}")]
    ObjectNotFound(ObjectId),

    /// The object's widget is busy running one of its own capabilities.
    #[error("object {0:?} is executing a capability and cannot be re-entered")]
    ReentrantWidget(ObjectId),

    /// A constructor collaborator failed to build its widget.
    #[error("construct: {0}")]
    Construct(String),

    /// Terminal backend failure.
    #[error("backend: {0}")]
    Backend(String),

    /// Run loop failure.
    #[error("runloop: {0}")]
    RunLoop(String),
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Backend(e.to_string())
    }
}
