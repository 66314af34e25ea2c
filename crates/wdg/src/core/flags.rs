use bitflags::bitflags;

bitflags! {
    /// Per-object flag bits. The low byte is reserved for the core; widget
    /// types may define their own bits above it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ObjectFlags: u32 {
        /// The object gets first refusal on every key.
        const ROOT_OBJECT = 1 << 0;
        /// The object is shown on screen.
        const VISIBLE = 1 << 1;
        /// The object takes part in the focus chain.
        const WANTS_FOCUS = 1 << 2;

        // Widget-defined bits.
        const _ = !0;
    }
}

impl ObjectFlags {
    /// True if the focus chain may land on an object with these flags.
    pub fn focusable(self) -> bool {
        self.contains(Self::VISIBLE | Self::WANTS_FOCUS)
    }
}

bitflags! {
    /// Terminal capability and lifecycle flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ScreenFlags: u8 {
        /// The terminal supports color.
        const HAS_COLORS = 1 << 0;
        /// The screen has been initialized and not yet cleaned up.
        const INITIALIZED = 1 << 1;
    }
}
