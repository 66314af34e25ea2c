/// A terminal cell location. `x` is the column, `y` is the line.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Point {
    /// Column.
    pub x: u32,
    /// Line.
    pub y: u32,
}

impl Point {
    /// The origin.
    pub fn zero() -> Self {
        (0, 0).into()
    }
}

impl From<(u32, u32)> for Point {
    #[inline]
    fn from(v: (u32, u32)) -> Self {
        Self { x: v.0, y: v.1 }
    }
}
