use super::Rect;

/// An `Expanse` has a width and height but no location. The screen extents
/// are held as an `Expanse`: `w` is the column count, `h` the line count.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Expanse {
    /// Width in columns.
    pub w: u32,
    /// Height in lines.
    pub h: u32,
}

impl Expanse {
    /// Construct an expanse from a width and height.
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    /// A `Rect` covering the expanse, anchored at the origin. Extents too
    /// large for the rectangle's coordinate type are clamped.
    pub fn rect(&self) -> Rect {
        let w = i32::try_from(self.w).unwrap_or(i32::MAX);
        let h = i32::try_from(self.h).unwrap_or(i32::MAX);
        Rect::new(0, 0, w, h)
    }
}

impl From<Rect> for Expanse {
    fn from(r: Rect) -> Self {
        Self {
            w: r.width(),
            h: r.height(),
        }
    }
}

impl From<(u32, u32)> for Expanse {
    fn from(v: (u32, u32)) -> Self {
        Self { w: v.0, h: v.1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect() {
        let e = Expanse::new(80, 24);
        assert_eq!(e.rect(), Rect::new(0, 0, 80, 24));
        assert_eq!(Expanse::from(e.rect()), e);
        assert_eq!(Expanse::from((3, 4)), Expanse::new(3, 4));
        assert_eq!(Expanse::new(u32::MAX, 1).rect().x2, i32::MAX);
    }
}
