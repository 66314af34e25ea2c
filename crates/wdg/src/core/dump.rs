use std::io::Write;

use termcolor::{Buffer, Color, ColorSpec, WriteColor};

use crate::{
    core::{id::ObjectId, wdg::Wdg},
    error::{Error, Result},
};

/// Render the registry as plain text, one line per object, head first. This
/// is a debug function.
pub fn dump(wdg: &Wdg) -> Result<String> {
    render(Buffer::no_color(), wdg)
}

/// Render the registry with ANSI color. This is a debug function.
pub fn dump_ansi(wdg: &Wdg) -> Result<String> {
    render(Buffer::ansi(), wdg)
}

/// Write every object into `buffer` and return the text.
fn render(mut buffer: Buffer, wdg: &Wdg) -> Result<String> {
    if wdg.registry.is_empty() {
        writeln!(buffer, "(no objects)")?;
    }
    for id in wdg.registry.iter() {
        dump_object(&mut buffer, wdg, id)?;
    }
    Ok(String::from_utf8_lossy(buffer.as_slice()).into_owned())
}

/// Emit one object line.
fn dump_object(buffer: &mut Buffer, wdg: &Wdg, id: ObjectId) -> Result<()> {
    let object = wdg.registry.object(id).ok_or(Error::ObjectNotFound(id))?;

    buffer.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
    write!(buffer, "{id:?}")?;
    buffer.reset()?;

    let r = object.rect();
    write!(
        buffer,
        " {:?} flags={:?} rect=({},{})-({},{})",
        object.kind(),
        object.flags(),
        r.x1,
        r.y1,
        r.x2,
        r.y2
    )?;

    let mut markers = Vec::new();
    if wdg.focus == Some(id) {
        markers.push("FOCUSED");
    }
    if wdg.root == Some(id) {
        markers.push("ROOT");
    }
    if !markers.is_empty() {
        write!(buffer, " ")?;
        buffer.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        write!(buffer, "[{}]", markers.join(", "))?;
        buffer.reset()?;
    }
    writeln!(buffer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{flags::ObjectFlags, testing::Harness},
        geom::Rect,
    };

    #[test]
    fn lists_objects_head_first() -> Result<()> {
        let mut h = Harness::new();
        assert_eq!(dump(&h.wdg)?, "(no objects)\n");

        let a = h.create(ObjectFlags::ROOT_OBJECT)?;
        let b = h.create(ObjectFlags::VISIBLE | ObjectFlags::WANTS_FOCUS)?;
        h.wdg.resize_object(b, Rect::new(1, 2, 10, 5))?;
        h.wdg.switch_focus()?;

        let out = dump(&h.wdg)?;
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(&format!("{b:?} Window")));
        assert!(lines[0].contains("rect=(1,2)-(10,5)"));
        assert!(lines[0].ends_with("[FOCUSED]"));
        assert!(lines[1].starts_with(&format!("{a:?}")));
        assert!(lines[1].ends_with("[ROOT]"));
        // No escape sequences in the plain rendering.
        assert!(!out.contains('\x1b'));
        Ok(())
    }

    #[test]
    fn ansi_has_color() -> Result<()> {
        let mut h = Harness::new();
        h.create(ObjectFlags::ROOT_OBJECT)?;
        assert!(dump_ansi(&h.wdg)?.contains('\x1b'));
        Ok(())
    }
}
