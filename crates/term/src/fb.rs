//! Framebuffer and tone types for terminal rendering.

/// What a glyph represents; the renderer picks colors per tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    #[default]
    Blank,
    Border,
    Floor,
    Falling,
    Fixed,
    Shadow,
    GameOver,
    Label,
    Text,
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub tone: Tone,
}

impl Cell {
    pub const fn new(ch: char, tone: Tone) -> Self {
        Self { ch, tone }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(' ', Tone::Blank)
    }
}

/// 2D framebuffer of toned character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize and blank the buffer, keeping the allocation where possible.
    pub fn reset(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells
            .resize(width as usize * height as usize, Cell::default());
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Write a glyph; writes outside the buffer are dropped.
    pub fn put(&mut self, x: u16, y: u16, ch: char, tone: Tone) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = Cell::new(ch, tone);
        }
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, tone: Tone) {
        for (i, ch) in s.chars().enumerate() {
            self.put(x.saturating_add(i as u16), y, ch, tone);
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, tone: Tone) {
        for dy in 0..h {
            for dx in 0..w {
                self.put(x.saturating_add(dx), y.saturating_add(dy), ch, tone);
            }
        }
    }

    /// One row of cells
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    /// Characters of one row as a string
    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|c| c.ch).collect()
    }

    /// Whole buffer as newline-separated text
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for y in 0..self.height {
            out.push_str(&self.row_text(y));
            out.push('\n');
        }
        out
    }
}
