//! Glyph grid the game view draws into.
//!
//! Coordinates are terminal columns and rows with `(0, 0)` at the top-left.
//! Every write is clipped to the grid, so drawing code never has to check
//! the viewport itself.

/// 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend towards `other`; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb::new(r, g, b)
    }
}

/// Text intensity. Locked and falling blocks are bold, the ghost and empty
/// board cells are dim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Weight {
    #[default]
    Normal,
    Bold,
    Dim,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Rgb,
    pub bg: Rgb,
    pub weight: Weight,
}

impl Style {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            weight: Weight::Normal,
        }
    }

    pub const fn bold(self) -> Self {
        Self {
            weight: Weight::Bold,
            ..self
        }
    }

    pub const fn dim(self) -> Self {
        Self {
            weight: Weight::Dim,
            ..self
        }
    }
}

impl Default for Style {
    /// Light grey on black, used for the side panel.
    fn default() -> Self {
        Style::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// One character cell on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: Style,
}

impl Default for Glyph {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Blank the whole grid at the given size. The allocation is reused.
    pub fn reset(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.glyphs.clear();
        self.glyphs
            .resize(width as usize * height as usize, Glyph::default());
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.glyphs[y as usize * self.width as usize + x as usize])
    }

    /// Row `y`, or an empty slice below the grid.
    pub fn row(&self, y: u16) -> &[Glyph] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.glyphs[start..start + self.width as usize]
    }

    pub fn put(&mut self, x: u16, y: u16, ch: char, style: Style) {
        if x < self.width && y < self.height {
            self.glyphs[y as usize * self.width as usize + x as usize] = Glyph { ch, style };
        }
    }

    pub fn text(&mut self, x: u16, y: u16, text: &str, style: Style) {
        for (ch, col) in text.chars().zip(x..self.width) {
            self.put(col, y, ch, style);
        }
    }

    /// Decimal digits of `value`, without allocating.
    pub fn number(&mut self, x: u16, y: u16, value: u32, style: Style) {
        let mut digits = [0u8; 10];
        let mut n = value;
        let mut len = 0;
        loop {
            digits[len] = b'0' + (n % 10) as u8;
            len += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        for (i, d) in digits[..len].iter().rev().enumerate() {
            self.put(x.saturating_add(i as u16), y, *d as char, style);
        }
    }

    /// Fill a rectangle, clipped to the grid.
    pub fn fill(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: Style) {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);
        for row in y..y_end {
            for col in x..x_end {
                self.put(col, row, ch, style);
            }
        }
    }

    /// Row `y` as text.
    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|g| g.ch).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_writes_digits() {
        let mut fb = FrameBuffer::new(12, 1);
        fb.number(0, 0, 0, Style::default());
        assert_eq!(fb.row_text(0).trim_end(), "0");
        fb.number(0, 0, u32::MAX, Style::default());
        assert_eq!(fb.row_text(0).trim_end(), "4294967295");
    }

    #[test]
    fn writes_are_clipped() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.text(1, 1, "abcdef", Style::default());
        fb.put(9, 9, 'x', Style::default());
        assert_eq!(fb.row_text(1), " ab");
        assert_eq!(fb.row_text(0), "   ");
        assert!(fb.row(2).is_empty());
    }

    #[test]
    fn huge_fill_stops_at_the_edge() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.fill(2, 1, u16::MAX, u16::MAX, '#', Style::default());
        assert_eq!(fb.row_text(0), "    ");
        assert_eq!(fb.row_text(1), "  ##");
        assert_eq!(fb.row_text(2), "  ##");
    }

    #[test]
    fn reset_blanks_and_resizes() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.fill(0, 0, 2, 2, '#', Style::default().bold());
        fb.reset(3, 1);
        assert_eq!(fb.width(), 3);
        assert_eq!(fb.row_text(0), "   ");
        assert_eq!(fb.get(0, 0), Some(Glyph::default()));
        assert_eq!(fb.get(0, 1), None);
    }

    #[test]
    fn style_builders() {
        let style = Style::new(Rgb::new(1, 2, 3), Rgb::new(4, 5, 6));
        assert_eq!(style.weight, Weight::Normal);
        assert_eq!(style.bold().weight, Weight::Bold);
        assert_eq!(style.bold().dim().weight, Weight::Dim);
        assert_eq!(style.dim().fg, Rgb::new(1, 2, 3));
    }

    #[test]
    fn lerp_endpoints() {
        let a = Rgb::new(0, 100, 200);
        let b = Rgb::new(200, 100, 0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Rgb::new(100, 100, 100));
        assert_eq!(a.lerp(b, 7.0), b);
    }
}
