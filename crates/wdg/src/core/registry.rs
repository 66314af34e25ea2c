use slotmap::SlotMap;

use crate::{
    core::{id::ObjectId, object::WidgetObject},
    widget::Widget,
};

/// A registry slot: the object shell plus the widget implementing its
/// capabilities.
pub(crate) struct Entry {
    /// Core-owned object state.
    pub(crate) object: WidgetObject,
    /// The capability table. This is `None` only while one of the widget's own
    /// capabilities is executing.
    pub(crate) widget: Option<Box<dyn Widget>>,
    /// Destroy was requested while the widget was lifted out; teardown runs
    /// when its capability returns.
    pub(crate) doomed: bool,
}

/// The object registry: an arena of live objects plus their traversal order.
///
/// The most recently created object is at the head of the order. Traversal is
/// available in both directions, and circularly from any live object.
#[derive(Default)]
pub struct Registry {
    /// Object storage arena.
    arena: SlotMap<ObjectId, Entry>,
    /// Traversal order, head first.
    order: Vec<ObjectId>,
}

impl Registry {
    /// Insert an entry at the head of the order and return its handle.
    pub(crate) fn insert_head(&mut self, entry: Entry) -> ObjectId {
        let id = self.arena.insert(entry);
        self.order.insert(0, id);
        id
    }

    /// Remove an entry, returning it if it was live.
    pub(crate) fn remove(&mut self, id: ObjectId) -> Option<Entry> {
        let entry = self.arena.remove(id)?;
        self.order.retain(|x| *x != id);
        Some(entry)
    }

    /// Borrow an entry.
    pub(crate) fn entry(&self, id: ObjectId) -> Option<&Entry> {
        self.arena.get(id)
    }

    /// Borrow an entry mutably.
    pub(crate) fn entry_mut(&mut self, id: ObjectId) -> Option<&mut Entry> {
        self.arena.get_mut(id)
    }

    /// The object shell behind a handle.
    pub fn object(&self, id: ObjectId) -> Option<&WidgetObject> {
        self.arena.get(id).map(|e| &e.object)
    }

    /// Is the handle live?
    pub fn contains(&self, id: ObjectId) -> bool {
        self.arena.contains_key(id)
    }

    /// Number of live objects.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if no objects are registered.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The most recently created object.
    pub fn head(&self) -> Option<ObjectId> {
        self.order.first().copied()
    }

    /// Handles in traversal order, head first. Reverse the iterator for
    /// backward traversal.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = ObjectId> + ExactSizeIterator + '_ {
        self.order.iter().copied()
    }

    /// The object after `id` in circular order, wrapping from the tail back
    /// to the head.
    pub fn next(&self, id: ObjectId) -> Option<ObjectId> {
        let pos = self.position(id)?;
        self.order.get((pos + 1) % self.order.len()).copied()
    }

    /// The object before `id` in circular order, wrapping from the head back
    /// to the tail.
    pub fn prev(&self, id: ObjectId) -> Option<ObjectId> {
        let pos = self.position(id)?;
        let len = self.order.len();
        self.order.get((pos + len - 1) % len).copied()
    }

    /// One full circular traversal starting after `id` and ending with `id`
    /// itself. Empty if `id` is not live.
    pub fn cycle_after(&self, id: ObjectId) -> impl Iterator<Item = ObjectId> + '_ {
        let split = self.position(id).map_or(0, |p| p + 1);
        let (front, back) = if self.contains(id) {
            self.order.split_at(split)
        } else {
            (&[][..], &[][..])
        };
        back.iter().chain(front.iter()).copied()
    }

    /// Position of a handle in the traversal order.
    fn position(&self, id: ObjectId) -> Option<usize> {
        self.order.iter().position(|x| *x == id)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{core::flags::ObjectFlags, core::object::ObjectType};

    fn entry() -> Entry {
        Entry {
            object: WidgetObject::new(ObjectType::Window, ObjectFlags::VISIBLE),
            widget: None,
            doomed: false,
        }
    }

    #[test]
    fn head_insertion() {
        let mut r = Registry::default();
        assert!(r.is_empty());
        let a = r.insert_head(entry());
        let b = r.insert_head(entry());
        let c = r.insert_head(entry());

        assert_eq!(r.head(), Some(c));
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![c, b, a]);
        assert_eq!(r.iter().rev().collect::<Vec<_>>(), vec![a, b, c]);
        assert_eq!(r.len(), 3);
    }

    #[test]
    fn circular() {
        let mut r = Registry::default();
        let a = r.insert_head(entry());
        let b = r.insert_head(entry());
        let c = r.insert_head(entry());

        assert_eq!(r.next(c), Some(b));
        assert_eq!(r.next(a), Some(c));
        assert_eq!(r.prev(c), Some(a));
        assert_eq!(r.prev(b), Some(c));
        assert_eq!(r.cycle_after(b).collect::<Vec<_>>(), vec![a, c, b]);
        assert_eq!(r.cycle_after(a).collect::<Vec<_>>(), vec![c, b, a]);
    }

    #[test]
    fn removed_handles_are_gone() {
        let mut r = Registry::default();
        let a = r.insert_head(entry());
        let b = r.insert_head(entry());
        assert!(r.remove(a).is_some());
        assert!(r.remove(a).is_none());
        assert!(!r.contains(a));
        assert!(r.object(a).is_none());
        assert_eq!(r.next(a), None);
        assert_eq!(r.cycle_after(a).count(), 0);
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![b]);

        // A reused slot never resolves the old handle.
        let c = r.insert_head(entry());
        assert_ne!(a, c);
        assert!(!r.contains(a));
    }

    proptest! {
        #[test]
        fn integrity(ops in proptest::collection::vec((any::<bool>(), any::<prop::sample::Index>()), 1..64)) {
            let mut r = Registry::default();
            let mut live: Vec<ObjectId> = Vec::new();
            let mut dead: Vec<ObjectId> = Vec::new();
            let (mut creates, mut destroys) = (0usize, 0usize);

            for (create, idx) in ops {
                if create || live.is_empty() {
                    live.push(r.insert_head(entry()));
                    creates += 1;
                } else {
                    let id = live.remove(idx.index(live.len()));
                    prop_assert!(r.remove(id).is_some());
                    dead.push(id);
                    destroys += 1;
                }
                prop_assert_eq!(r.len(), creates - destroys);
                for id in &dead {
                    prop_assert!(!r.contains(*id));
                    prop_assert!(r.iter().all(|x| x != *id));
                }
                for id in &live {
                    prop_assert!(r.contains(*id));
                }
            }
        }
    }
}
