use std::{
    io::{self, Stderr, Write},
    panic::{self, PanicHookInfo},
    time::{Duration, Instant},
};

use color_backtrace::{BacktracePrinter, default_output_stream};
use crossterm::{
    ExecutableCommand, QueueableCommand, cursor as ccursor, event as cevent, style, terminal,
};
use scopeguard::{ScopeGuard, guard};

use crate::{
    backend::Backend,
    error::Result,
    event::{Input, key},
    geom::{Expanse, Point},
};

/// The previous panic hook, as returned by `panic::take_hook`.
type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static>;

/// Translate crossterm key modifiers into wdg modifiers.
fn translate_key_modifiers(mods: cevent::KeyModifiers) -> key::Mods {
    let mut ret = key::Mods::empty();
    ret.set(key::Mods::SHIFT, mods.contains(cevent::KeyModifiers::SHIFT));
    ret.set(key::Mods::CTRL, mods.contains(cevent::KeyModifiers::CONTROL));
    ret.set(key::Mods::ALT, mods.contains(cevent::KeyModifiers::ALT));
    ret
}

/// Translate a crossterm key code. Keys with no wdg counterpart map to
/// `None`.
fn translate_key_code(code: cevent::KeyCode) -> Option<key::KeyCode> {
    Some(match code {
        cevent::KeyCode::Backspace => key::KeyCode::Backspace,
        cevent::KeyCode::Enter => key::KeyCode::Enter,
        cevent::KeyCode::Left => key::KeyCode::Left,
        cevent::KeyCode::Right => key::KeyCode::Right,
        cevent::KeyCode::Up => key::KeyCode::Up,
        cevent::KeyCode::Down => key::KeyCode::Down,
        cevent::KeyCode::Home => key::KeyCode::Home,
        cevent::KeyCode::End => key::KeyCode::End,
        cevent::KeyCode::PageUp => key::KeyCode::PageUp,
        cevent::KeyCode::PageDown => key::KeyCode::PageDown,
        cevent::KeyCode::Tab => key::KeyCode::Tab,
        cevent::KeyCode::BackTab => key::KeyCode::BackTab,
        cevent::KeyCode::Delete => key::KeyCode::Delete,
        cevent::KeyCode::Insert => key::KeyCode::Insert,
        cevent::KeyCode::F(x) => key::KeyCode::F(x),
        cevent::KeyCode::Char(c) => key::KeyCode::Char(c),
        cevent::KeyCode::Null => key::KeyCode::Null,
        cevent::KeyCode::Esc => key::KeyCode::Esc,
        _ => return None,
    })
}

/// Translate a crossterm event into an input. Only key presses and resizes
/// are of interest; everything else is dropped.
fn translate_event(e: cevent::Event) -> Option<Input> {
    match e {
        cevent::Event::Key(k) if k.kind != cevent::KeyEventKind::Release => {
            let code = translate_key_code(k.code)?;
            let mut mods = translate_key_modifiers(k.modifiers);
            // Shift is already folded into the character.
            if matches!(code, key::KeyCode::Char(_)) {
                mods.remove(key::Mods::SHIFT);
            }
            Some(Input::Key(key::Key::new(mods, code)))
        }
        cevent::Event::Resize(_, _) => Some(Input::Resize),
        _ => None,
    }
}

/// Crossterm-backed terminal. Output goes to stderr so stdout stays free for
/// the application.
#[derive(Debug)]
pub struct CrosstermBackend {
    /// Stderr handle used for all terminal output.
    fp: Stderr,
}

impl Default for CrosstermBackend {
    fn default() -> Self {
        Self { fp: io::stderr() }
    }
}

impl CrosstermBackend {
    /// Construct a backend on stderr.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Backend for CrosstermBackend {
    fn start(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.fp.execute(terminal::EnterAlternateScreen)?;
        self.fp.execute(ccursor::Hide)?;
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        self.fp.execute(terminal::LeaveAlternateScreen)?;
        self.fp.execute(ccursor::Show)?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn size(&self) -> Result<Expanse> {
        let (w, h) = terminal::size()?;
        Ok(Expanse::new(w.into(), h.into()))
    }

    fn has_colors(&self) -> bool {
        style::available_color_count() >= 8
    }

    fn read_input(&mut self, timeout: Duration) -> Result<Option<Input>> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !cevent::poll(remaining)? {
                return Ok(None);
            }
            // Events we drop do not restart the timeout.
            if let Some(input) = translate_event(cevent::read()?) {
                return Ok(Some(input));
            }
        }
    }

    fn print(&mut self, at: Point, text: &str) -> Result<()> {
        let x = u16::try_from(at.x).unwrap_or(u16::MAX);
        let y = u16::try_from(at.y).unwrap_or(u16::MAX);
        self.fp.queue(ccursor::MoveTo(x, y))?;
        self.fp.queue(style::Print(text))?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.fp.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn refresh(&mut self) -> Result<()> {
        self.fp.flush()?;
        Ok(())
    }
}

/// Install a panic hook that restores the terminal before printing a
/// backtrace. The previous hook is reinstated when the returned guard is
/// dropped.
pub fn install_panic_hook() -> ScopeGuard<PanicHook, impl FnOnce(PanicHook)> {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(|pi| {
        let mut stderr = io::stderr();
        #[allow(unused_must_use)]
        {
            crossterm::execute!(stderr, terminal::LeaveAlternateScreen, ccursor::Show);
            terminal::disable_raw_mode();
            BacktracePrinter::new().print_panic_info(pi, &mut default_output_stream());
        }
    }));
    guard(previous, |hook| {
        panic::set_hook(hook);
    })
}
