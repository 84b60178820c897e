//! Terminal output for the game screen.
//!
//! [`Screen`] owns raw mode and the alternate screen between
//! [`Screen::enter`] and [`Screen::exit`]. Each frame is compared row by row
//! with the one on screen and only the changed span of each row is
//! rewritten; most ticks touch a handful of board rows and one score line.

use std::io::{self, Write};
use std::ops::Range;

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Color, Colors, Print, ResetColor, SetAttribute, SetColors},
    terminal::{self, ClearType},
    QueueableCommand,
};

use crate::fb::{FrameBuffer, Glyph, Rgb, Style, Weight};

pub struct Screen {
    out: io::Stdout,
    /// Frame currently on the terminal; `None` forces a full redraw.
    shown: Option<FrameBuffer>,
    bytes: Vec<u8>,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            shown: None,
            bytes: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.bytes.clear();
        self.bytes
            .queue(terminal::EnterAlternateScreen)?
            .queue(terminal::DisableLineWrap)?
            .queue(cursor::Hide)?;
        self.flush()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.bytes.clear();
        self.bytes
            .queue(SetAttribute(Attribute::Reset))?
            .queue(ResetColor)?
            .queue(cursor::Show)?
            .queue(terminal::EnableLineWrap)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Redraw everything on the next frame (after a terminal resize).
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Put `frame` on the terminal.
    ///
    /// `frame` is swapped with the previously shown frame, so the caller can
    /// draw the next tick into it without allocating.
    pub fn present(&mut self, frame: &mut FrameBuffer) -> Result<()> {
        let shown = self
            .shown
            .take()
            .filter(|s| s.width() == frame.width() && s.height() == frame.height());

        self.bytes.clear();
        encode_frame(shown.as_ref(), frame, &mut self.bytes)?;
        self.flush()?;

        let mut spare = shown.unwrap_or_else(|| FrameBuffer::new(0, 0));
        std::mem::swap(&mut spare, frame);
        self.shown = Some(spare);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.out.write_all(&self.bytes)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Commands that turn `shown` into `next`; a full redraw without `shown`.
fn encode_frame(
    shown: Option<&FrameBuffer>,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> io::Result<()> {
    if shown.is_none() {
        out.queue(terminal::Clear(ClearType::All))?;
    }

    let mut pen: Option<Style> = None;
    for y in 0..next.height() {
        let row = next.row(y);
        let span = match shown {
            Some(prev) => changed_span(prev.row(y), row),
            None => Some(0..row.len()),
        };
        let Some(span) = span else {
            continue;
        };

        out.queue(cursor::MoveTo(span.start as u16, y))?;
        for glyph in &row[span] {
            if pen != Some(glyph.style) {
                set_style(out, glyph.style)?;
                pen = Some(glyph.style);
            }
            out.queue(Print(glyph.ch))?;
        }
    }

    if pen.is_some() {
        out.queue(SetAttribute(Attribute::Reset))?.queue(ResetColor)?;
    }
    Ok(())
}

/// Columns from the first to the last differing glyph; `None` if equal.
fn changed_span(prev: &[Glyph], next: &[Glyph]) -> Option<Range<usize>> {
    let start = prev.iter().zip(next).position(|(a, b)| a != b)?;
    let end = prev.iter().zip(next).rposition(|(a, b)| a != b)? + 1;
    Some(start..end)
}

fn set_style(out: &mut Vec<u8>, style: Style) -> io::Result<()> {
    // SGR reset clears colors too, so it goes first.
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetColors(Colors::new(color(style.fg), color(style.bg))))?;
    match style.weight {
        Weight::Normal => {}
        Weight::Bold => {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        Weight::Dim => {
            out.queue(SetAttribute(Attribute::Dim))?;
        }
    }
    Ok(())
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(shown: Option<&FrameBuffer>, next: &FrameBuffer) -> String {
        let mut out = Vec::new();
        encode_frame(shown, next, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn full_frame_prints_every_row() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.text(0, 0, "AB", Style::default());
        fb.text(0, 1, "CD", Style::default());

        let text = encoded(None, &fb);
        assert!(text.contains("AB"));
        assert!(text.contains("CD"));
        // One style change for a single-style frame.
        assert_eq!(text.matches("38;2;").count(), 1);
    }

    #[test]
    fn unchanged_frame_prints_nothing() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.text(0, 0, "xyz", Style::default());

        let text = encoded(Some(&fb.clone()), &fb);
        assert!(text.is_empty());
    }

    #[test]
    fn diff_rewrites_only_changed_rows() {
        let mut shown = FrameBuffer::new(4, 2);
        shown.text(0, 0, "keep", Style::default());
        shown.text(0, 1, "wxyz", Style::default());
        let mut next = shown.clone();
        next.text(1, 1, "XY", Style::default());

        let text = encoded(Some(&shown), &next);
        assert!(text.contains("XY"));
        assert!(!text.contains("keep"));
        assert!(!text.contains('w'));
        assert!(!text.contains('z'));
    }

    #[test]
    fn span_covers_first_to_last_difference() {
        let style = Style::default();
        let mut a = FrameBuffer::new(6, 1);
        a.text(0, 0, "abcdef", style);
        let mut b = a.clone();
        b.put(1, 0, 'X', style);
        b.put(4, 0, 'Y', style);

        assert_eq!(changed_span(a.row(0), b.row(0)), Some(1..5));
        assert_eq!(changed_span(a.row(0), a.row(0)), None);

        // A style-only change counts.
        b.put(5, 0, 'f', style.bold());
        assert_eq!(changed_span(a.row(0), b.row(0)), Some(1..6));
    }
}
