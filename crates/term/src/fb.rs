//! In-memory character grid that the game view draws into.
//!
//! Colors are crossterm [`Color`]s so the renderer can queue them as-is.

use crossterm::style::Color;

/// Truecolor shorthand usable in `const` items.
pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb { r, g, b }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
}

impl CellStyle {
    pub const PLAIN: CellStyle = CellStyle::new(rgb(255, 255, 255), rgb(0, 0, 0));

    pub const fn new(fg: Color, bg: Color) -> Self {
        CellStyle {
            fg,
            bg,
            bold: false,
        }
    }

    pub const fn bold(self) -> Self {
        CellStyle { bold: true, ..self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::PLAIN
    }
}

/// One character position on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        ch: ' ',
        style: CellStyle::PLAIN,
    };
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Row-major grid of styled cells. Anything drawn off the edge is discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let mut fb = FrameBuffer {
            width: 0,
            height: 0,
            cells: Vec::new(),
        };
        fb.resize(width, height);
        fb
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Change dimensions; contents are unspecified until the next
    /// [`FrameBuffer::clear`]. The allocation is kept when it is big enough.
    pub fn resize(&mut self, width: u16, height: u16) {
        if (self.width, self.height) != (width, height) {
            self.width = width;
            self.height = height;
            self.cells
                .resize(usize::from(width) * usize::from(height), Cell::BLANK);
        }
    }

    fn cell_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            let w = usize::from(self.width);
            self.cells.get_mut(usize::from(y) * w + usize::from(x))
        } else {
            None
        }
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.row(y)?.get(usize::from(x)).copied()
    }

    pub fn row(&self, y: u16) -> Option<&[Cell]> {
        if y >= self.height || self.width == 0 {
            return None;
        }
        self.cells
            .chunks_exact(usize::from(self.width))
            .nth(usize::from(y))
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(slot) = self.cell_mut(x, y) {
            *slot = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Left-to-right text, truncated at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        for (cx, ch) in (x..self.width).zip(s.chars()) {
            self.put_char(cx, y, ch, style);
        }
    }

    /// Decimal digits of `value`, without going through a `String`.
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: CellStyle) {
        let digits = value.checked_ilog10().unwrap_or(0) as u16 + 1;
        let mut rest = value;
        for i in (0..digits).rev() {
            let ch = char::from(b'0' + (rest % 10) as u8);
            self.put_char(x.saturating_add(i), y, ch, style);
            rest /= 10;
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        let cell = Cell { ch, style };
        for py in (0..h).map(|dy| y.saturating_add(dy)) {
            for px in (0..w).map(|dx| x.saturating_add(dx)) {
                self.set(px, py, cell);
            }
        }
    }

    /// Characters only, newline after every row.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + usize::from(self.height));
        for y in 0..self.height {
            out.extend(self.row(y).unwrap_or_default().iter().map(|c| c.ch));
            out.push('\n');
        }
        out
    }
}
