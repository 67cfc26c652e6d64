//! Text rendering with the fixed width fonts

use crate::color::Color;
use crate::font::MonoFont;
use crate::framebuffer::PlotPoint;
use crate::{HEIGHT, WIDTH};

/// How glyph bits map to pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextMode {
    /// Set glyph bits light the pixel, clear bits turn it off
    #[default]
    Normal,
    /// Set glyph bits turn the pixel off, clear bits light it
    Inverted,
}

impl TextMode {
    fn color(self, bit_set: bool) -> Color {
        match self {
            TextMode::Normal => Color::from(bit_set),
            TextMode::Inverted => Color::from(!bit_set),
        }
    }
}

/// Draw one glyph with its top left corner at (`x`, `y`).
///
/// The whole glyph cell is written, background included. Codes the font has
/// no glyph for draw nothing.
pub fn draw_char<P>(target: &mut P, x: u8, y: u8, code: u8, font: &MonoFont, mode: TextMode)
where
    P: PlotPoint + ?Sized,
{
    blit_glyph(target, i32::from(x), i32::from(y), code, font, mode);
}

/// Draw `text` left to right starting at (`x`, `y`).
///
/// A glyph that would cross the right edge moves to the start of the next
/// line. When the next line would not fit either, the target is cleared and
/// drawing carries on from the top left corner.
pub fn draw_string<P>(target: &mut P, x: u8, y: u8, text: &str, font: &MonoFont, mode: TextMode)
where
    P: PlotPoint + ?Sized,
{
    let advance = i32::from(font.width());
    let line_height = i32::from(font.height());
    let (mut x, mut y) = (i32::from(x), i32::from(y));

    for ch in text.chars() {
        if x > WIDTH as i32 - advance {
            x = 0;
            y += line_height;
            if y > HEIGHT as i32 - line_height {
                x = 0;
                y = 0;
                target.clear();
            }
        }

        // anything outside a single byte has no glyph
        let code = u8::try_from(u32::from(ch)).unwrap_or(0);
        blit_glyph(target, x, y, code, font, mode);
        x += advance;
    }
}

/// Draw `value` as a field of `digits` decimal digits.
///
/// Leading zeros render as blank glyphs; the last digit is always shown.
/// Digits above the field width are cut off.
pub fn draw_number<P>(target: &mut P, x: u8, y: u8, value: u32, digits: u8, font: &MonoFont)
where
    P: PlotPoint + ?Sized,
{
    let advance = i32::from(font.width());
    let mut leading = true;

    for i in 0..digits {
        let exponent = u32::from(digits - i - 1);
        let digit = 10u64
            .checked_pow(exponent)
            .map_or(0, |power| (u64::from(value) / power) % 10) as u8;
        let cell_x = i32::from(x) + advance * i32::from(i);

        if leading && i < digits - 1 && digit == 0 {
            blit_glyph(target, cell_x, i32::from(y), b' ', font, TextMode::Normal);
            continue;
        }
        leading = false;
        blit_glyph(target, cell_x, i32::from(y), b'0' + digit, font, TextMode::Normal);
    }
}

// Each glyph byte is eight vertical pixels of the current column; the column
// ends once `height` rows are placed, possibly part way into a byte.
fn blit_glyph<P>(target: &mut P, x: i32, y: i32, code: u8, font: &MonoFont, mode: TextMode)
where
    P: PlotPoint + ?Sized,
{
    let Some(glyph) = font.glyph(code) else {
        return;
    };
    let height = i32::from(font.height());

    let (mut column, mut row) = (x, y);
    for &byte in glyph {
        let mut bits = byte;
        for _ in 0..8 {
            target.plot_point(column, row, mode.color(bits & 0x80 != 0));
            bits <<= 1;
            row += 1;
            if row - y == height {
                row = y;
                column += 1;
                break;
            }
        }
    }
}
