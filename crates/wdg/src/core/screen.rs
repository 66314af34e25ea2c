use crate::{
    backend::Backend,
    core::flags::ScreenFlags,
    error::Result,
    geom::Expanse,
};

/// Terminal geometry and capability flags for one toolkit instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Screen {
    /// Terminal extents.
    size: Expanse,
    /// Capability and lifecycle flags.
    flags: ScreenFlags,
}

impl Screen {
    /// Terminal extents.
    pub fn size(&self) -> Expanse {
        self.size
    }

    /// Number of lines.
    pub fn lines(&self) -> u32 {
        self.size.h
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.size.w
    }

    /// Capability and lifecycle flags.
    pub fn flags(&self) -> ScreenFlags {
        self.flags
    }

    /// Does the terminal support color?
    pub fn has_colors(&self) -> bool {
        self.flags.contains(ScreenFlags::HAS_COLORS)
    }

    /// Has the screen been initialized and not yet cleaned up?
    pub fn is_initialized(&self) -> bool {
        self.flags.contains(ScreenFlags::INITIALIZED)
    }

    /// Take over the terminal and record its geometry and capabilities. A
    /// second call while initialized does nothing.
    pub(crate) fn initialize(&mut self, be: &mut dyn Backend) -> Result<()> {
        if self.is_initialized() {
            return Ok(());
        }
        be.start()?;
        if be.has_colors() {
            self.flags.insert(ScreenFlags::HAS_COLORS);
        }
        self.size = be.size()?;
        self.flags.insert(ScreenFlags::INITIALIZED);
        be.clear()?;
        be.refresh()?;
        tracing::debug!(cols = self.size.w, lines = self.size.h, flags = ?self.flags, "screen initialized");
        Ok(())
    }

    /// Hand the terminal back. Does nothing unless initialized.
    pub(crate) fn cleanup(&mut self, be: &mut dyn Backend) -> Result<()> {
        if !self.is_initialized() {
            return Ok(());
        }
        self.flags = ScreenFlags::empty();
        be.clear()?;
        be.refresh()?;
        be.stop()?;
        tracing::debug!("screen cleaned up");
        Ok(())
    }

    /// Refresh the geometry after a resize. Redrawing is the caller's job.
    pub(crate) fn on_resize(&mut self, be: &dyn Backend) -> Result<()> {
        self.size = be.size()?;
        tracing::debug!(cols = self.size.w, lines = self.size.h, "screen resized");
        Ok(())
    }
}
