//! The focus chain: cyclic traversal of the registry restricted to visible
//! objects that want focus.

use crate::{
    core::{id::ObjectId, registry::Registry, wdg::Wdg},
    error::Result,
};

/// Can the focus chain land on this object?
fn is_focus_candidate(registry: &Registry, id: ObjectId) -> bool {
    registry.object(id).is_some_and(|o| o.flags().focusable())
}

/// The first focusable object scanning from the head.
pub fn first_focusable(registry: &Registry) -> Option<ObjectId> {
    registry.iter().find(|id| is_focus_candidate(registry, *id))
}

/// The next focusable object after `from` in circular order. The scan covers
/// at most one full cycle and considers `from` itself last, so a sole
/// focusable object keeps the focus. Returns `None` if nothing qualifies.
pub fn next_focusable(registry: &Registry, from: ObjectId) -> Option<ObjectId> {
    registry
        .cycle_after(from)
        .find(|id| is_focus_candidate(registry, *id))
}

/// The switch-focus transition.
///
/// With nothing focused, focus the first candidate from the head. Otherwise
/// the focused object loses focus and the scan continues after it. If the
/// scan finds nothing the toolkit is left unfocused.
pub fn switch(wdg: &mut Wdg) -> Result<()> {
    tracing::trace!(focused = ?wdg.focus, "switch focus");
    let current = wdg.focus.filter(|id| wdg.registry.contains(*id));
    let Some(current) = current else {
        wdg.focus = None;
        if let Some(target) = first_focusable(&wdg.registry) {
            focus_on(wdg, target)?;
        }
        return Ok(());
    };

    wdg.invoke(current, |w, ctx| w.lost_focus(ctx))?;

    // `lost_focus` may have reshaped the registry, including destroying
    // other objects. Scan from the old position if it still exists.
    let target = if wdg.registry.contains(current) {
        next_focusable(&wdg.registry, current)
    } else {
        first_focusable(&wdg.registry)
    };
    match target {
        Some(target) => focus_on(wdg, target),
        None => {
            tracing::debug!("no focusable objects, focus cleared");
            wdg.focus = None;
            Ok(())
        }
    }
}

/// Make `target` the focused object and run its `get_focus` capability.
fn focus_on(wdg: &mut Wdg, target: ObjectId) -> Result<()> {
    wdg.focus = Some(target);
    tracing::trace!(?target, "focus gained");
    wdg.invoke(target, |w, ctx| w.get_focus(ctx))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{
        core::{
            flags::ObjectFlags,
            object::{ObjectType, WidgetObject},
            registry::Entry,
            testing::{Call, Harness},
        },
        error::Error,
    };

    fn focusable() -> ObjectFlags {
        ObjectFlags::VISIBLE | ObjectFlags::WANTS_FOCUS
    }

    #[test]
    fn first_switch_focuses_head_candidate() -> Result<()> {
        let mut h = Harness::new();
        let a = h.create(focusable())?;
        let _hidden = h.create(ObjectFlags::WANTS_FOCUS)?;
        assert_eq!(h.wdg.focused(), None);

        h.wdg.switch_focus()?;
        assert_eq!(h.wdg.focused(), Some(a));
        assert_eq!(h.calls(), vec![Call::GetFocus(a)]);
        Ok(())
    }

    #[test]
    fn switch_with_no_candidates_is_noop() -> Result<()> {
        let mut h = Harness::new();
        h.create(ObjectFlags::VISIBLE)?;
        h.create(ObjectFlags::WANTS_FOCUS)?;
        h.wdg.switch_focus()?;
        assert_eq!(h.wdg.focused(), None);
        assert!(h.calls().is_empty());

        // Empty registry too.
        let mut empty = Harness::new();
        empty.wdg.switch_focus()?;
        assert_eq!(empty.wdg.focused(), None);
        Ok(())
    }

    #[test]
    fn switch_cycles_and_skips() -> Result<()> {
        let mut h = Harness::new();
        let a = h.create(focusable())?;
        let _b = h.create(ObjectFlags::VISIBLE)?;
        let c = h.create(focusable())?;
        // Order is c, b, a.

        h.wdg.switch_focus()?;
        assert_eq!(h.wdg.focused(), Some(c));
        h.wdg.switch_focus()?;
        assert_eq!(h.wdg.focused(), Some(a));
        h.wdg.switch_focus()?;
        assert_eq!(h.wdg.focused(), Some(c));

        assert_eq!(
            h.calls(),
            vec![
                Call::GetFocus(c),
                Call::LostFocus(c),
                Call::GetFocus(a),
                Call::LostFocus(a),
                Call::GetFocus(c),
            ]
        );
        Ok(())
    }

    #[test]
    fn sole_candidate_keeps_focus() -> Result<()> {
        let mut h = Harness::new();
        let a = h.create(focusable())?;
        h.create(ObjectFlags::VISIBLE)?;
        h.wdg.switch_focus()?;
        h.wdg.switch_focus()?;
        assert_eq!(h.wdg.focused(), Some(a));
        assert_eq!(
            h.calls(),
            vec![Call::GetFocus(a), Call::LostFocus(a), Call::GetFocus(a)]
        );
        Ok(())
    }

    #[test]
    fn scan_is_bounded() -> Result<()> {
        let mut h = Harness::new();
        let a = h.create(focusable())?;
        h.create(ObjectFlags::VISIBLE)?;
        h.wdg.switch_focus()?;
        assert_eq!(h.wdg.focused(), Some(a));

        // The focused object stops qualifying; nothing else does either.
        if let Some(entry) = h.wdg.registry.entry_mut(a) {
            entry.object.flags = ObjectFlags::empty();
        }
        h.wdg.switch_focus()?;
        assert_eq!(h.wdg.focused(), None);
        Ok(())
    }

    #[test]
    fn destroying_focused_clears_focus() -> Result<()> {
        let mut h = Harness::new();
        let a = h.create(focusable())?;
        let b = h.create(focusable())?;
        h.wdg.switch_focus()?;
        assert_eq!(h.wdg.focused(), Some(b));

        h.wdg.destroy_object(b)?;
        assert_eq!(h.wdg.focused(), None);
        h.clear_calls();

        // Nothing is routed to the destroyed object.
        h.wdg.dispatch('x')?;
        assert!(h.calls().iter().all(|c| c.id() != b));
        assert_eq!(h.calls(), vec![]);

        h.wdg.switch_focus()?;
        assert_eq!(h.wdg.focused(), Some(a));
        Ok(())
    }

    #[test]
    fn destroy_sees_focus_already_cleared() -> Result<()> {
        let mut h = Harness::new();
        let a = h.create(focusable())?;
        h.wdg.switch_focus()?;
        h.clear_calls();
        h.wdg.destroy_object(a)?;
        assert_eq!(
            h.calls(),
            vec![Call::Destroy {
                id: a,
                focused: false,
                root: false
            }]
        );
        Ok(())
    }

    #[test]
    fn stale_focus_is_ignored() -> Result<()> {
        let mut h = Harness::new();
        let a = h.create(focusable())?;
        let ghost = h.create(focusable())?;
        h.wdg.registry.remove(ghost);
        h.wdg.focus = Some(ghost);
        h.wdg.switch_focus()?;
        assert_eq!(h.wdg.focused(), Some(a));
        assert!(matches!(
            h.wdg.redraw_object(ghost),
            Err(Error::ObjectNotFound(_))
        ));
        Ok(())
    }

    proptest! {
        #[test]
        fn cycling_visits_exactly_the_focusable_set(
            flags in proptest::collection::vec((any::<bool>(), any::<bool>()), 1..16),
            extra in 0usize..8,
        ) {
            let mut registry = Registry::default();
            let mut ids = Vec::new();
            for (visible, wants) in &flags {
                let mut f = ObjectFlags::empty();
                f.set(ObjectFlags::VISIBLE, *visible);
                f.set(ObjectFlags::WANTS_FOCUS, *wants);
                ids.push(registry.insert_head(Entry {
                    object: WidgetObject::new(ObjectType::Window, f),
                    widget: None,
                    doomed: false,
                }));
            }
            // Expected cycle: head-first order filtered to the focusable set.
            let expected: Vec<ObjectId> = registry
                .iter()
                .filter(|id| registry.object(*id).is_some_and(|o| o.flags().focusable()))
                .collect();

            let mut seen = Vec::new();
            let mut current = first_focusable(&registry);
            for _ in 0..(expected.len() * 2 + extra) {
                let Some(id) = current else { break };
                seen.push(id);
                current = next_focusable(&registry, id);
            }

            if expected.is_empty() {
                prop_assert!(seen.is_empty());
            } else {
                for (i, id) in seen.iter().enumerate() {
                    prop_assert_eq!(*id, expected[i % expected.len()]);
                }
            }
        }
    }
}
