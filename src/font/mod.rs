//! Built-in fixed width fonts
//!
//! Glyphs are stored column by column. Each column takes `ceil(height / 8)`
//! bytes, most significant bit first and top row first; the unused low bits of
//! the last byte of a column are zero.

mod ascii_1206;
mod ascii_1608;

/// Fixed width bitmap font covering a contiguous range of character codes
#[derive(Clone, Copy, Debug)]
pub struct MonoFont {
    width: u8,
    height: u8,
    first: u8,
    last: u8,
    data: &'static [u8],
}

/// 6x12 ASCII font
pub static FONT_1206: MonoFont = MonoFont::new(6, 12, b' ', b'~', &ascii_1206::ASCII_1206);

/// 8x16 ASCII font
pub static FONT_1608: MonoFont = MonoFont::new(8, 16, b' ', b'~', &ascii_1608::ASCII_1608);

impl MonoFont {
    /// Describe a glyph table for codes `first..=last`.
    ///
    /// `data` must hold `bytes_per_glyph()` bytes for every code in range;
    /// codes whose glyph would run past the end of `data` are treated as
    /// missing.
    pub const fn new(width: u8, height: u8, first: u8, last: u8, data: &'static [u8]) -> Self {
        MonoFont {
            width,
            height,
            first,
            last,
            data,
        }
    }

    /// Glyph width in pixels, also the horizontal advance
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Glyph height in pixels, also the line height
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Number of bytes one glyph occupies in the table
    pub fn bytes_per_glyph(&self) -> usize {
        usize::from(self.width) * usize::from(self.height).div_ceil(8)
    }

    /// Column-major glyph bitmap for `code`
    pub fn glyph(&self, code: u8) -> Option<&'static [u8]> {
        if code < self.first || code > self.last {
            return None;
        }
        let len = self.bytes_per_glyph();
        let start = usize::from(code - self.first) * len;
        self.data.get(start..start + len)
    }
}
