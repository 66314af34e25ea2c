use std::{
    cell::RefCell,
    rc::Rc,
    sync::{Arc, Mutex},
};

use super::probe::{Call, Journal, Probe};
use crate::{
    backend::test::{TestBackend, TestState},
    core::{flags::ObjectFlags, id::ObjectId, object::ObjectType, wdg::Wdg},
    error::Result,
    geom::Expanse,
};

/// A toolkit instance on a [`TestBackend`], with every object type bound to a
/// [`Probe`]. Tests create objects, drive the toolkit, then inspect the
/// journal and the backend state.
pub struct Harness {
    /// The toolkit under test.
    pub wdg: Wdg,
    /// Backend state, for scripting input and inspecting output.
    pub state: Arc<Mutex<TestState>>,
    /// Calls recorded by all probes.
    pub journal: Journal,
}

impl Harness {
    /// A harness on an 80x24 terminal.
    pub fn new() -> Self {
        Self::with_size(Expanse::new(80, 24))
    }

    /// A harness on a terminal of the given size.
    pub fn with_size(size: Expanse) -> Self {
        let (state, backend) = TestBackend::create(size);
        let journal: Journal = Rc::new(RefCell::new(Vec::new()));
        let mut wdg = Wdg::new(backend);
        for kind in [ObjectType::Window, ObjectType::Menu, ObjectType::Dialog] {
            let journal = journal.clone();
            wdg.register_type(kind, move |_| Ok(Box::new(Probe::new(journal.clone()))));
        }
        Self {
            wdg,
            state,
            journal,
        }
    }

    /// Create a probe-backed window with the given flags.
    pub fn create(&mut self, flags: ObjectFlags) -> Result<ObjectId> {
        self.wdg.create_object(ObjectType::Window, flags)
    }

    /// A copy of the calls recorded so far.
    pub fn calls(&self) -> Vec<Call> {
        self.journal.borrow().clone()
    }

    /// Forget the calls recorded so far.
    pub fn clear_calls(&self) {
        self.journal.borrow_mut().clear();
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}
