/// A rectangle in corner form. `(x1, y1)` is the top-left corner and
/// `(x2, y2)` the exclusive bottom-right corner. Corners may be inverted or
/// negative; such a rectangle is simply empty or partly off-screen.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Rect {
    /// Left column.
    pub x1: i32,
    /// Top line.
    pub y1: i32,
    /// Right column, exclusive.
    pub x2: i32,
    /// Bottom line, exclusive.
    pub y2: i32,
}

impl Rect {
    /// Construct a rectangle from its corners.
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// The zero rectangle.
    pub const fn zero() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Width in columns, zero if the corners are inverted.
    pub fn width(&self) -> u32 {
        self.x2.saturating_sub(self.x1).max(0) as u32
    }

    /// Height in lines, zero if the corners are inverted.
    pub fn height(&self) -> u32 {
        self.y2.saturating_sub(self.y1).max(0) as u32
    }

    /// True if the rectangle covers no cells.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// The overlap of two rectangles, if any.
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let r = Self {
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
            x2: self.x2.min(other.x2),
            y2: self.y2.min(other.y2),
        };
        if r.is_empty() { None } else { Some(r) }
    }
}

impl From<(i32, i32, i32, i32)> for Rect {
    fn from(v: (i32, i32, i32, i32)) -> Self {
        Self::new(v.0, v.1, v.2, v.3)
    }
}
