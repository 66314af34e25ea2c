use crate::{
    context::Context,
    error::Result,
    event::key::Key,
    flags::ObjectFlags,
    geom::{Point, Rect},
    widget::{EventOutcome, Widget},
};

/// Defines the set of glyphs used to draw a window border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    /// Top-left corner glyph.
    pub topleft: char,
    /// Top-right corner glyph.
    pub topright: char,
    /// Bottom-left corner glyph.
    pub bottomleft: char,
    /// Bottom-right corner glyph.
    pub bottomright: char,
    /// Horizontal border glyph.
    pub horizontal: char,
    /// Vertical border glyph.
    pub vertical: char,
}

/// Plain ASCII border, drawn on unfocused windows.
pub const ASCII: BorderGlyphs = BorderGlyphs {
    topleft: '+',
    topright: '+',
    bottomleft: '+',
    bottomright: '+',
    horizontal: '-',
    vertical: '|',
};

/// Double line ASCII border, drawn on the focused window.
pub const ASCII_DOUBLE: BorderGlyphs = BorderGlyphs {
    topleft: '#',
    topright: '#',
    bottomleft: '#',
    bottomright: '#',
    horizontal: '=',
    vertical: 'H',
};

/// A bordered window with an optional title. Windows ignore keys; they exist
/// to be focused, resized and redrawn.
#[derive(Debug, Default)]
pub struct Window {
    /// Optional title, drawn into the top border.
    title: Option<String>,
    /// Do we currently hold focus?
    focused: bool,
}

impl Window {
    /// Construct an untitled window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a window with a title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replace the title. Takes effect on the next redraw.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// The title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Does the window hold focus?
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Draw the border and title. Nothing is drawn for hidden windows,
    /// windows too small for a border, or windows entirely off screen. Only
    /// the on-screen part of the rectangle is built.
    fn draw(&self, ctx: &mut dyn Context) -> Result<()> {
        let object = ctx.object();
        if !object.flags().contains(ObjectFlags::VISIBLE) {
            return Ok(());
        }
        let r = object.rect();
        if r.width() < 2 || r.height() < 2 {
            return Ok(());
        }
        let clip = ctx.screen().size().rect();
        let Some(vis) = r.intersect(&clip) else {
            return Ok(());
        };
        let g = if self.focused { ASCII_DOUBLE } else { ASCII };

        for y in vis.y1..vis.y2 {
            let line: String = (vis.x1..vis.x2).map(|x| glyph(g, r, x, y)).collect();
            print_at(ctx, vis.x1, y, &line)?;
        }

        // The title sits in the top border, one cell in from the corner.
        if let Some(title) = &self.title
            && r.width() > 4
            && r.y1 == vis.y1
        {
            let inner = r.width() as usize - 2;
            let label: String = format!(" {title} ").chars().take(inner).collect();
            let visible: String = label
                .chars()
                .zip(r.x1 + 1..)
                .filter(|(_, col)| *col >= vis.x1 && *col < vis.x2)
                .map(|(c, _)| c)
                .collect();
            if !visible.is_empty() {
                print_at(ctx, (r.x1 + 1).max(vis.x1), r.y1, &visible)?;
            }
        }
        Ok(())
    }

    /// Overwrite the on-screen part of the window's area with spaces.
    fn blank(ctx: &mut dyn Context) -> Result<()> {
        let r = ctx.object().rect();
        let clip = ctx.screen().size().rect();
        let Some(vis) = r.intersect(&clip) else {
            return Ok(());
        };
        let row = " ".repeat(vis.width() as usize);
        for y in vis.y1..vis.y2 {
            print_at(ctx, vis.x1, y, &row)?;
        }
        Ok(())
    }
}

/// The border glyph for cell `(x, y)` of a window occupying `r`.
fn glyph(g: BorderGlyphs, r: Rect, x: i32, y: i32) -> char {
    let left = x == r.x1;
    let right = x == r.x2 - 1;
    if y == r.y1 || y == r.y2 - 1 {
        let top = y == r.y1;
        match (top, left, right) {
            (true, true, _) => g.topleft,
            (true, _, true) => g.topright,
            (false, true, _) => g.bottomleft,
            (false, _, true) => g.bottomright,
            _ => g.horizontal,
        }
    } else if left || right {
        g.vertical
    } else {
        ' '
    }
}

/// Print `text` at an on-screen cell. Callers clip to the screen first, so
/// both coordinates are non-negative.
fn print_at(ctx: &mut dyn Context, x: i32, y: i32, text: &str) -> Result<()> {
    ctx.print(
        Point {
            x: x as u32,
            y: y as u32,
        },
        text,
    )
}

impl Widget for Window {
    fn get_msg(&mut self, _key: Key, _ctx: &mut dyn Context) -> Result<EventOutcome> {
        Ok(EventOutcome::Ignore)
    }

    fn get_focus(&mut self, ctx: &mut dyn Context) -> Result<()> {
        self.focused = true;
        self.draw(ctx)
    }

    fn lost_focus(&mut self, ctx: &mut dyn Context) -> Result<()> {
        self.focused = false;
        self.draw(ctx)
    }

    fn resize(&mut self, ctx: &mut dyn Context) -> Result<()> {
        self.draw(ctx)
    }

    fn redraw(&mut self, ctx: &mut dyn Context) -> Result<()> {
        self.draw(ctx)
    }

    fn destroy(&mut self, ctx: &mut dyn Context) -> Result<()> {
        Self::blank(ctx)
    }
}
