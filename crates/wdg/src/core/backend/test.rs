use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};

use crate::{
    backend::Backend,
    error::{Error, Result},
    event::{Input, key::Key},
    geom::{Expanse, Point},
};

/// One scripted read result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scripted {
    /// Deliver an input.
    Input(Input),
    /// Change the terminal size, then deliver `Input::Resize`.
    Resize(Expanse),
    /// Let the read time out.
    Timeout,
}

/// Shared state behind a [`TestBackend`]. Tests keep a handle to this to
/// script input and to inspect what the toolkit did to the terminal.
#[derive(Debug)]
pub struct TestState {
    /// Pending read results, consumed front to back.
    pub script: VecDeque<Scripted>,
    /// Reported terminal size.
    pub size: Expanse,
    /// Reported color support.
    pub has_colors: bool,
    /// True between `start` and `stop`.
    pub started: bool,
    /// Number of `start` calls.
    pub start_count: usize,
    /// Number of `stop` calls.
    pub stop_count: usize,
    /// Number of `clear` calls.
    pub clear_count: usize,
    /// Number of `refresh` calls.
    pub refresh_count: usize,
    /// Number of reads served.
    pub reads: usize,
    /// Text written through `print`, in order.
    pub printed: Vec<(Point, String)>,
}

impl TestState {
    /// Queue a keystroke.
    pub fn key(&mut self, k: impl Into<Key>) {
        self.script.push_back(Scripted::Input(Input::Key(k.into())));
    }

    /// Queue a sequence of keystrokes.
    pub fn keys<I, K>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        for k in keys {
            self.key(k);
        }
    }

    /// Queue a resize to `size`.
    pub fn resize(&mut self, size: Expanse) {
        self.script.push_back(Scripted::Resize(size));
    }

    /// Queue a read timeout.
    pub fn timeout(&mut self) {
        self.script.push_back(Scripted::Timeout);
    }

    /// Lifecycle counters as `(start, stop, clear, refresh)`.
    pub fn counts(&self) -> (usize, usize, usize, usize) {
        (
            self.start_count,
            self.stop_count,
            self.clear_count,
            self.refresh_count,
        )
    }

    /// Return true if any printed fragment contains the substring.
    pub fn contains(&self, s: &str) -> bool {
        self.printed.iter().any(|(_, t)| t.contains(s))
    }
}

/// A backend for testing. Reads come from a script; once the script is
/// exhausted reads fail, so a test can never hang in the event loop.
#[derive(Debug)]
pub struct TestBackend {
    /// Shared state.
    pub state: Arc<Mutex<TestState>>,
}

impl TestBackend {
    /// Create returns the shared `TestState` and a `TestBackend` instance
    /// operating on it.
    pub fn create(size: Expanse) -> (Arc<Mutex<TestState>>, Self) {
        let state = Arc::new(Mutex::new(TestState {
            script: VecDeque::new(),
            size,
            has_colors: true,
            started: false,
            start_count: 0,
            stop_count: 0,
            clear_count: 0,
            refresh_count: 0,
            reads: 0,
            printed: Vec::new(),
        }));
        (state.clone(), Self { state })
    }

    /// Lock the shared state.
    fn lock(&self) -> Result<MutexGuard<'_, TestState>> {
        self.state
            .lock()
            .map_err(|e| Error::Backend(format!("test state poisoned: {e}")))
    }
}

impl Backend for TestBackend {
    fn start(&mut self) -> Result<()> {
        let mut s = self.lock()?;
        s.started = true;
        s.start_count += 1;
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        let mut s = self.lock()?;
        s.started = false;
        s.stop_count += 1;
        Ok(())
    }

    fn size(&self) -> Result<Expanse> {
        Ok(self.lock()?.size)
    }

    fn has_colors(&self) -> bool {
        self.lock().map(|s| s.has_colors).unwrap_or(false)
    }

    fn read_input(&mut self, _timeout: Duration) -> Result<Option<Input>> {
        let mut s = self.lock()?;
        s.reads += 1;
        match s.script.pop_front() {
            Some(Scripted::Input(i)) => Ok(Some(i)),
            Some(Scripted::Resize(size)) => {
                s.size = size;
                Ok(Some(Input::Resize))
            }
            Some(Scripted::Timeout) => Ok(None),
            None => Err(Error::RunLoop("test input script exhausted".into())),
        }
    }

    fn print(&mut self, at: Point, text: &str) -> Result<()> {
        self.lock()?.printed.push((at, text.to_string()));
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.lock()?.clear_count += 1;
        Ok(())
    }

    fn refresh(&mut self) -> Result<()> {
        self.lock()?.refresh_count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script() -> Result<()> {
        let (state, mut be) = TestBackend::create(Expanse::new(10, 10));
        {
            let mut s = state.lock().unwrap();
            s.key('a');
            s.timeout();
            s.resize(Expanse::new(20, 5));
        }
        let t = Duration::from_millis(1);
        assert_eq!(be.read_input(t)?, Some(Input::Key('a'.into())));
        assert_eq!(be.read_input(t)?, None);
        assert_eq!(be.read_input(t)?, Some(Input::Resize));
        assert_eq!(be.size()?, Expanse::new(20, 5));
        assert!(be.read_input(t).is_err());
        assert_eq!(state.lock().unwrap().reads, 4);
        Ok(())
    }
}
