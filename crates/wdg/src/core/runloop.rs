//! The event loop: one bounded input read per iteration, special keys
//! intercepted before generic dispatch.

use std::{thread, time::Duration};

use crate::{
    core::wdg::Wdg,
    error::Result,
    event::{
        Input,
        key::{Key, KeyCode},
    },
};

/// Event loop configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopOptions {
    /// How long one input read may block before it counts as idle.
    pub input_timeout: Duration,
    /// Sleep taken on an idle tick when no idle callback is installed.
    pub idle_sleep: Duration,
    /// The key that switches focus. It is never dispatched.
    pub focus_key: Key,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            input_timeout: Duration::from_millis(100),
            idle_sleep: Duration::from_millis(100),
            focus_key: KeyCode::Tab.into(),
        }
    }
}

impl LoopOptions {
    /// Set the input read timeout.
    pub fn input_timeout(mut self, timeout: Duration) -> Self {
        self.input_timeout = timeout;
        self
    }

    /// Set the idle sleep.
    pub fn idle_sleep(mut self, sleep: Duration) -> Self {
        self.idle_sleep = sleep;
        self
    }

    /// Set the focus-switch key.
    pub fn focus_key(mut self, key: impl Into<Key>) -> Self {
        self.focus_key = key.into();
        self
    }
}

/// Event loop states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopState {
    /// Keep reading.
    Running,
    /// The exit key was read.
    Exiting,
}

/// Run until the exit key is read. Any error aborts the loop; the registry is
/// logged before the error is returned.
pub(crate) fn run(wdg: &mut Wdg, exit_key: Key) -> Result<()> {
    tracing::debug!(%exit_key, options = ?wdg.options, "event loop started");
    loop {
        match tick(wdg, exit_key) {
            Ok(LoopState::Running) => {}
            Ok(LoopState::Exiting) => {
                tracing::debug!("event loop exiting");
                return Ok(());
            }
            Err(e) => {
                let registry = wdg
                    .dump()
                    .unwrap_or_else(|d| format!("<registry dump failed: {d}>"));
                tracing::error!(error = %e, %registry, "event loop aborted");
                return Err(e);
            }
        }
    }
}

/// One read and its transition.
fn tick(wdg: &mut Wdg, exit_key: Key) -> Result<LoopState> {
    let input = wdg.backend.read_input(wdg.options.input_timeout)?;
    match input {
        None => {
            if !wdg.run_idle()? {
                thread::sleep(wdg.options.idle_sleep);
            }
        }
        Some(Input::Resize) => {
            wdg.screen.on_resize(wdg.backend.as_ref())?;
            wdg.redraw_all()?;
        }
        Some(Input::Key(k)) if k == wdg.options.focus_key => wdg.switch_focus()?,
        Some(Input::Key(k)) if k == exit_key => return Ok(LoopState::Exiting),
        Some(Input::Key(k)) => {
            wdg.dispatch(k)?;
        }
    }
    wdg.backend.refresh()?;
    Ok(LoopState::Running)
}
