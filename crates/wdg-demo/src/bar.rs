use std::{cell::Cell, mem};

use wdg::{
    Context, EventOutcome, ObjectFlags, ObjectType, Wdg, Widget,
    error::Result,
    event::key::Key,
    geom::{Point, Rect},
    widgets::Window,
};

/// Key help shown in the status bar.
const HELP: &str = "tab: focus  n: new window  d: close focused  ctrl-l: redraw";

/// The root object: a one-line status bar that owns the global keys.
#[derive(Debug, Default)]
pub struct StatusBar {
    /// Idle ticks seen so far.
    ticks: u64,
    /// Set when a window was closed or a redraw was requested.
    dirty: bool,
}

impl StatusBar {
    /// Count an idle tick. Returns true if a full redraw is pending, and
    /// clears the request.
    pub fn tick(&mut self) -> bool {
        self.ticks += 1;
        mem::take(&mut self.dirty)
    }

    /// Idle ticks seen so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Widget for StatusBar {
    fn get_msg(&mut self, key: Key, ctx: &mut dyn Context) -> Result<EventOutcome> {
        if key == 'n' {
            let id = ctx.create_object(
                ObjectType::Window,
                ObjectFlags::VISIBLE | ObjectFlags::WANTS_FOCUS,
            )?;
            ctx.redraw_object(id)?;
            Ok(EventOutcome::Handle)
        } else if key == 'd' {
            if let Some(focused) = ctx.focused()
                && focused != ctx.id()
            {
                ctx.destroy_object(focused)?;
                self.dirty = true;
            }
            Ok(EventOutcome::Handle)
        } else if key == Key::ctrl('l') {
            self.dirty = true;
            Ok(EventOutcome::Handle)
        } else {
            Ok(EventOutcome::Ignore)
        }
    }

    fn get_focus(&mut self, _ctx: &mut dyn Context) -> Result<()> {
        Ok(())
    }

    fn lost_focus(&mut self, _ctx: &mut dyn Context) -> Result<()> {
        Ok(())
    }

    fn resize(&mut self, ctx: &mut dyn Context) -> Result<()> {
        self.redraw(ctx)
    }

    fn redraw(&mut self, ctx: &mut dyn Context) -> Result<()> {
        let cols = ctx.screen().cols() as usize;
        let line = format!("{HELP}  |  idle ticks: {}", self.ticks);
        let line: String = format!("{line:<cols$}").chars().take(cols).collect();
        ctx.print(Point::zero(), &line)
    }

    fn destroy(&mut self, _ctx: &mut dyn Context) -> Result<()> {
        Ok(())
    }
}

/// Install the demo constructors: the status bar for `Menu`, and titled
/// windows that cascade down the screen for `Window`.
pub fn register(wdg: &mut Wdg) {
    wdg.register_type(ObjectType::Menu, |_| Ok(Box::new(StatusBar::default())));

    let count = Cell::new(0u32);
    wdg.register_type(ObjectType::Window, move |obj| {
        let n = count.get();
        count.set(n + 1);
        let step = (n % 8) as i32;
        obj.set_rect(Rect::new(
            2 + step * 4,
            2 + step * 2,
            34 + step * 4,
            12 + step * 2,
        ));
        Ok(Box::new(Window::new().with_title(format!("window {n}"))))
    });
}

#[cfg(test)]
mod tests {
    use wdg::testing::Harness;

    use super::*;

    fn setup() -> Result<(Harness, wdg::ObjectId)> {
        let mut h = Harness::new();
        register(&mut h.wdg);
        h.wdg.initialize()?;
        let root = h
            .wdg
            .create_object(ObjectType::Menu, ObjectFlags::ROOT_OBJECT | ObjectFlags::VISIBLE)?;
        Ok((h, root))
    }

    #[test]
    fn new_window() -> Result<()> {
        let (mut h, root) = setup()?;
        assert_eq!(h.wdg.dispatch('n')?, EventOutcome::Handle);
        assert_eq!(h.wdg.len(), 2);
        let win = h.wdg.registry().head().unwrap();
        assert_ne!(win, root);
        assert_eq!(h.wdg.get_type(win)?, ObjectType::Window);
        assert_eq!(
            h.wdg.object(win).unwrap().rect(),
            Rect::new(2, 2, 34, 12)
        );
        assert!(h.state.lock().unwrap().contains(" window 0 "));
        Ok(())
    }

    #[test]
    fn close_focused() -> Result<()> {
        let (mut h, root) = setup()?;
        h.wdg.dispatch('n')?;
        h.wdg.dispatch('n')?;
        h.wdg.switch_focus()?;
        let focused = h.wdg.focused().unwrap();

        h.wdg.dispatch('d')?;
        assert!(!h.wdg.contains(focused));
        assert_eq!(h.wdg.focused(), None);
        assert_eq!(h.wdg.with_widget::<StatusBar, _>(root, StatusBar::tick)?, Some(true));
        assert_eq!(h.wdg.with_widget::<StatusBar, _>(root, StatusBar::tick)?, Some(false));

        // Nothing focused: nothing to close.
        h.wdg.dispatch('d')?;
        assert_eq!(h.wdg.len(), 2);
        Ok(())
    }

    #[test]
    fn status_line() -> Result<()> {
        let (mut h, root) = setup()?;
        h.wdg.with_widget::<StatusBar, _>(root, StatusBar::tick)?;
        h.wdg.redraw_object(root)?;
        let s = h.state.lock().unwrap();
        let (at, line) = s.printed.last().unwrap();
        assert_eq!(*at, Point::zero());
        assert!(line.starts_with(HELP));
        assert!(line.contains("idle ticks: 1"));
        assert_eq!(line.len(), 80);
        Ok(())
    }

    #[test]
    fn ctrl_l_requests_redraw() -> Result<()> {
        let (mut h, root) = setup()?;
        assert_eq!(h.wdg.dispatch('l')?, EventOutcome::Ignore);
        assert_eq!(h.wdg.dispatch(Key::ctrl('l'))?, EventOutcome::Handle);
        assert_eq!(h.wdg.with_widget::<StatusBar, _>(root, StatusBar::tick)?, Some(true));
        Ok(())
    }

    #[test]
    fn other_keys_fall_through() -> Result<()> {
        let (mut h, _) = setup()?;
        assert_eq!(h.wdg.dispatch('z')?, EventOutcome::Ignore);
        Ok(())
    }
}
