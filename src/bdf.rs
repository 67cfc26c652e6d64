//! Variable width text from BDF bitmap fonts
//!
//! [`BdfFont`] holds a parsed font, [`TextLayout`] the drawing area and wrap
//! setting shared by every `draw_text` call. Glyphs are plotted through
//! [`PlotPoint`], so loaded fonts obey the same clipping as everything else.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use log::debug;

use crate::color::Color;
use crate::framebuffer::PlotPoint;
use crate::{HEIGHT, WIDTH};

/// Largest glyph box accepted, in either direction
pub const MAX_GLYPH_SIZE: u16 = 256;

/// Reasons a font can fail to load
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontError {
    /// The data does not start with `STARTFONT`
    MissingHeader,
    /// The data ended inside a glyph or before `ENDFONT`
    UnexpectedEnd,
    /// A numeric field could not be parsed
    InvalidNumber {
        /// 1-based line number
        line: usize,
    },
    /// A bitmap row is not valid hex or is too short, or `ENDCHAR` is missing
    InvalidBitmap {
        /// 1-based line number
        line: usize,
    },
    /// A mandatory keyword never appeared
    MissingField {
        /// Line at which the keyword was found missing
        line: usize,
        /// The keyword
        field: &'static str,
    },
    /// The font has no encoded glyphs
    NoGlyphs,
    /// The data is not UTF-8 text
    NotUtf8,
    /// Reading the source failed
    #[cfg(feature = "std")]
    Io(std::io::ErrorKind),
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontError::MissingHeader => write!(f, "not a BDF font: missing STARTFONT"),
            FontError::UnexpectedEnd => write!(f, "font data ended unexpectedly"),
            FontError::InvalidNumber { line } => write!(f, "invalid number on line {line}"),
            FontError::InvalidBitmap { line } => write!(f, "invalid bitmap row on line {line}"),
            FontError::MissingField { line, field } => {
                write!(f, "missing {field} (detected on line {line})")
            }
            FontError::NoGlyphs => write!(f, "font contains no encoded glyphs"),
            FontError::NotUtf8 => write!(f, "font data is not UTF-8"),
            #[cfg(feature = "std")]
            FontError::Io(kind) => write!(f, "failed to read font: {kind}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FontError {}

/// Size and offset of a glyph box, offsets relative to the pen on the baseline
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoundingBox {
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
    /// Horizontal offset of the left edge
    pub x_offset: i16,
    /// Vertical offset of the bottom edge, positive is up
    pub y_offset: i16,
}

/// One glyph of a BDF font
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BdfGlyph {
    encoding: u32,
    advance: i16,
    bbx: BoundingBox,
    bitmap: Vec<u8>,
}

impl BdfGlyph {
    /// Code point this glyph is encoded at
    pub fn encoding(&self) -> u32 {
        self.encoding
    }

    /// Horizontal pen advance (DWIDTH)
    pub fn advance(&self) -> i16 {
        self.advance
    }

    /// Bounding box of the bitmap
    pub fn bounding_box(&self) -> BoundingBox {
        self.bbx
    }

    /// Whether the bitmap bit at (`col`, `row`) is set, `row` 0 at the top
    pub fn pixel(&self, col: u16, row: u16) -> bool {
        if col >= self.bbx.width || row >= self.bbx.height {
            return false;
        }
        let stride = usize::from(self.bbx.width).div_ceil(8);
        let index = usize::from(row) * stride + usize::from(col) / 8;
        self.bitmap
            .get(index)
            .is_some_and(|byte| byte & (0x80 >> (col % 8)) != 0)
    }
}

/// Drawing area and wrapping for loaded-font text
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextLayout {
    /// Width of the drawing area; wrapping happens at this column
    pub width: i32,
    /// Height of the drawing area; lines starting at or below it are dropped
    pub height: i32,
    /// Move glyphs that would cross `width` to the next line
    pub wrap: bool,
}

impl TextLayout {
    /// Layout for the full panel
    pub const fn full_screen(wrap: bool) -> Self {
        TextLayout {
            width: WIDTH as i32,
            height: HEIGHT as i32,
            wrap,
        }
    }
}

impl Default for TextLayout {
    fn default() -> Self {
        Self::full_screen(true)
    }
}

/// A parsed BDF font
#[derive(Clone, Debug)]
pub struct BdfFont {
    bounding_box: BoundingBox,
    ascent: i16,
    descent: i16,
    default_char: Option<u32>,
    glyphs: BTreeMap<u32, BdfGlyph>,
}

impl BdfFont {
    /// Parse a font from the text of a BDF file
    pub fn parse(data: &[u8]) -> Result<Self, FontError> {
        let text = core::str::from_utf8(data).map_err(|_| FontError::NotUtf8)?;
        let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l.trim()));

        match lines.next() {
            Some((_, line)) if line.starts_with("STARTFONT") => {}
            _ => return Err(FontError::MissingHeader),
        }

        let mut bounding_box = None;
        let mut ascent = None;
        let mut descent = None;
        let mut default_char = None;
        let mut glyphs = BTreeMap::new();
        let mut end_line = None;

        while let Some((line_no, line)) = lines.next() {
            let mut words = line.split_ascii_whitespace();
            match words.next() {
                Some("FONTBOUNDINGBOX") => {
                    bounding_box = Some((line_no, parse_bbx(words, line_no)?));
                }
                Some("FONT_ASCENT") => ascent = Some(parse_num(words.next(), line_no)?),
                Some("FONT_DESCENT") => descent = Some(parse_num(words.next(), line_no)?),
                Some("DEFAULT_CHAR") => default_char = Some(parse_num(words.next(), line_no)?),
                Some("STARTCHAR") => {
                    if let Some(glyph) = parse_glyph(&mut lines, line_no)? {
                        glyphs.insert(glyph.encoding, glyph);
                    }
                }
                Some("ENDFONT") => {
                    end_line = Some(line_no);
                    break;
                }
                _ => {}
            }
        }

        let end_line = end_line.ok_or(FontError::UnexpectedEnd)?;
        let (bbx_line, bounding_box) = bounding_box.ok_or(FontError::MissingField {
            line: end_line,
            field: "FONTBOUNDINGBOX",
        })?;
        if glyphs.is_empty() {
            return Err(FontError::NoGlyphs);
        }

        let invalid = FontError::InvalidNumber { line: bbx_line };
        let ascent = match ascent {
            Some(ascent) => ascent,
            None => i16::try_from(
                i32::from(bounding_box.height) + i32::from(bounding_box.y_offset),
            )
            .map_err(|_| invalid.clone())?,
        };
        let descent = match descent {
            Some(descent) => descent,
            None => bounding_box.y_offset.checked_neg().ok_or(invalid)?,
        };

        let font = BdfFont {
            bounding_box,
            ascent,
            descent,
            default_char,
            glyphs,
        };
        debug!(
            "parsed BDF font: {} glyphs, ascent {}, descent {}",
            font.glyphs.len(),
            font.ascent,
            font.descent
        );
        Ok(font)
    }

    /// Read a whole BDF file from `reader` and parse it
    #[cfg(feature = "std")]
    pub fn from_reader<R: std::io::Read>(mut reader: R) -> Result<Self, FontError> {
        let mut data = Vec::new();
        reader
            .read_to_end(&mut data)
            .map_err(|e| FontError::Io(e.kind()))?;
        Self::parse(&data)
    }

    /// The font-wide bounding box
    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    /// Pixels above the baseline, baseline row included
    pub fn ascent(&self) -> i16 {
        self.ascent
    }

    /// Pixels below the baseline
    pub fn descent(&self) -> i16 {
        self.descent
    }

    /// Distance between consecutive lines
    pub fn line_height(&self) -> i32 {
        i32::from(self.ascent) + i32::from(self.descent)
    }

    /// Number of encoded glyphs
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Glyph for `ch`, falling back to the font's DEFAULT_CHAR
    pub fn glyph(&self, ch: char) -> Option<&BdfGlyph> {
        self.glyphs.get(&u32::from(ch)).or_else(|| {
            self.default_char
                .and_then(|default| self.glyphs.get(&default))
        })
    }

    /// Draw `text` with the top of its first line at `y`.
    ///
    /// Each glyph's whole bounding box is plotted, clear bits as
    /// [`Color::Off`]. `\n` and wrapping both return to column 0. Characters
    /// without a glyph (and no DEFAULT_CHAR) are skipped. Returns the pen
    /// position after the last glyph.
    pub fn draw_text<P>(
        &self,
        target: &mut P,
        layout: &TextLayout,
        x: i32,
        y: i32,
        text: &str,
    ) -> (i32, i32)
    where
        P: PlotPoint + ?Sized,
    {
        let line_height = self.line_height();
        let (mut pen_x, mut pen_y) = (x, y);

        for ch in text.chars() {
            if ch == '\n' {
                pen_x = 0;
                pen_y += line_height;
                continue;
            }
            let Some(glyph) = self.glyph(ch) else {
                continue;
            };

            let advance = i32::from(glyph.advance);
            if layout.wrap && pen_x > 0 && pen_x + advance > layout.width {
                pen_x = 0;
                pen_y += line_height;
            }
            if pen_y >= layout.height {
                break;
            }

            self.draw_glyph(target, glyph, pen_x, pen_y);
            pen_x += advance;
        }

        (pen_x, pen_y)
    }

    fn draw_glyph<P>(&self, target: &mut P, glyph: &BdfGlyph, pen_x: i32, top: i32)
    where
        P: PlotPoint + ?Sized,
    {
        let bbx = glyph.bbx;
        // screen row of the pixels sitting directly on the baseline
        let baseline = top + i32::from(self.ascent) - 1;
        let left = pen_x + i32::from(bbx.x_offset);
        let glyph_top = baseline - (i32::from(bbx.y_offset) + i32::from(bbx.height) - 1);

        for row in 0..bbx.height {
            for col in 0..bbx.width {
                target.plot_point(
                    left + i32::from(col),
                    glyph_top + i32::from(row),
                    Color::from(glyph.pixel(col, row)),
                );
            }
        }
    }
}

fn parse_num<T: FromStr>(word: Option<&str>, line: usize) -> Result<T, FontError> {
    word.and_then(|w| w.parse().ok())
        .ok_or(FontError::InvalidNumber { line })
}

fn parse_bbx<'a>(
    mut words: impl Iterator<Item = &'a str>,
    line: usize,
) -> Result<BoundingBox, FontError> {
    Ok(BoundingBox {
        width: parse_num(words.next(), line)?,
        height: parse_num(words.next(), line)?,
        x_offset: parse_num(words.next(), line)?,
        y_offset: parse_num(words.next(), line)?,
    })
}

fn parse_hex_row(row: &str, stride: usize, line: usize, out: &mut Vec<u8>) -> Result<(), FontError> {
    if !row.is_ascii() || row.len() < stride * 2 {
        return Err(FontError::InvalidBitmap { line });
    }
    for i in 0..stride {
        let byte = u8::from_str_radix(&row[i * 2..i * 2 + 2], 16)
            .map_err(|_| FontError::InvalidBitmap { line })?;
        out.push(byte);
    }
    Ok(())
}

// Consumes lines up to and including ENDCHAR. Glyphs with a negative
// ENCODING are parsed but not returned.
fn parse_glyph<'a, I>(lines: &mut I, start: usize) -> Result<Option<BdfGlyph>, FontError>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    let mut encoding: Option<i64> = None;
    let mut advance: Option<i16> = None;
    let mut bbx: Option<(usize, BoundingBox)> = None;

    loop {
        let (line_no, line) = lines.next().ok_or(FontError::UnexpectedEnd)?;
        let mut words = line.split_ascii_whitespace();
        match words.next() {
            Some("ENCODING") => encoding = Some(parse_num(words.next(), line_no)?),
            Some("DWIDTH") => advance = Some(parse_num(words.next(), line_no)?),
            Some("BBX") => {
                let parsed = parse_bbx(words, line_no)?;
                if parsed.width > MAX_GLYPH_SIZE || parsed.height > MAX_GLYPH_SIZE {
                    return Err(FontError::InvalidBitmap { line: line_no });
                }
                bbx = Some((line_no, parsed));
            }
            Some("BITMAP") => {
                let (bbx_line, bbx) = bbx.ok_or(FontError::MissingField {
                    line: line_no,
                    field: "BBX",
                })?;
                let stride = usize::from(bbx.width).div_ceil(8);
                let mut bitmap = Vec::new();
                for _ in 0..bbx.height {
                    let (row_no, row) = lines.next().ok_or(FontError::UnexpectedEnd)?;
                    parse_hex_row(row, stride, row_no, &mut bitmap)?;
                }

                let (end_no, end) = lines.next().ok_or(FontError::UnexpectedEnd)?;
                if end != "ENDCHAR" {
                    return Err(FontError::InvalidBitmap { line: end_no });
                }

                let encoding = encoding.ok_or(FontError::MissingField {
                    line: start,
                    field: "ENCODING",
                })?;
                let Ok(encoding) = u32::try_from(encoding) else {
                    return Ok(None);
                };
                let advance = match advance {
                    Some(advance) => advance,
                    None => i16::try_from(bbx.width)
                        .map_err(|_| FontError::InvalidNumber { line: bbx_line })?,
                };
                return Ok(Some(BdfGlyph {
                    encoding,
                    advance,
                    bbx,
                    bitmap,
                }));
            }
            Some("ENDCHAR") => {
                return Err(FontError::MissingField {
                    line: line_no,
                    field: "BITMAP",
                })
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::Framebuffer;

    const SAMPLE: &str = "STARTFONT 2.1
FONT -test-tiny-medium-r-normal--8-80-75-75-c-50-iso10646-1
SIZE 8 75 75
FONTBOUNDINGBOX 5 8 0 -2
STARTPROPERTIES 3
FONT_ASCENT 6
FONT_DESCENT 2
DEFAULT_CHAR 63
ENDPROPERTIES
CHARS 3
STARTCHAR A
ENCODING 65
SWIDTH 500 0
DWIDTH 5 0
BBX 4 6 0 0
BITMAP
60
90
90
F0
90
90
ENDCHAR
STARTCHAR question
ENCODING 63
SWIDTH 500 0
DWIDTH 5 0
BBX 3 3 1 3
BITMAP
E0
20
40
ENDCHAR
STARTCHAR unencoded
ENCODING -1
DWIDTH 5 0
BBX 1 1 0 0
BITMAP
80
ENDCHAR
ENDFONT
";

    fn lit(fb: &Framebuffer) -> Vec<(u8, u8)> {
        let mut points = Vec::new();
        for x in 0..WIDTH as u8 {
            for y in 0..HEIGHT as u8 {
                if fb.get_pixel(x, y) == Some(Color::On) {
                    points.push((x, y));
                }
            }
        }
        points
    }

    #[test]
    fn parses_metrics_and_glyphs() {
        let font = BdfFont::parse(SAMPLE.as_bytes()).unwrap();

        assert_eq!(font.ascent(), 6);
        assert_eq!(font.descent(), 2);
        assert_eq!(font.line_height(), 8);
        assert_eq!(
            font.bounding_box(),
            BoundingBox {
                width: 5,
                height: 8,
                x_offset: 0,
                y_offset: -2
            }
        );
        // the ENCODING -1 glyph is dropped
        assert_eq!(font.glyph_count(), 2);

        let a = font.glyph('A').unwrap();
        assert_eq!(a.encoding(), 65);
        assert_eq!(a.advance(), 5);
        assert!(a.pixel(1, 0));
        assert!(!a.pixel(0, 0));
        assert!(a.pixel(3, 3));
        assert!(!a.pixel(4, 3));
    }

    #[test]
    fn missing_glyph_falls_back_to_default_char() {
        let font = BdfFont::parse(SAMPLE.as_bytes()).unwrap();
        assert_eq!(font.glyph('Z').map(BdfGlyph::encoding), Some(63));
    }

    #[test]
    fn metrics_default_from_bounding_box() {
        let data = SAMPLE
            .replace("FONT_ASCENT 6\n", "")
            .replace("FONT_DESCENT 2\n", "");
        let font = BdfFont::parse(data.as_bytes()).unwrap();
        assert_eq!(font.ascent(), 6);
        assert_eq!(font.descent(), 2);
    }

    #[test]
    fn draws_glyph_boxes_relative_to_baseline() {
        let font = BdfFont::parse(SAMPLE.as_bytes()).unwrap();
        let mut fb = Framebuffer::new();

        let end = font.draw_text(&mut fb, &TextLayout::default(), 10, 20, "A?");
        assert_eq!(end, (20, 20));

        let mut expected = vec![
            (11, 20),
            (12, 20),
            (16, 20),
            (17, 20),
            (17, 22),
            (18, 20),
            (18, 21),
        ];
        // the rest of 'A': rows 1..5 are 0x90 apart from the 0xF0 bar on row 3
        for y in 21..26 {
            expected.push((10, y));
            expected.push((13, y));
        }
        expected.push((11, 23));
        expected.push((12, 23));
        expected.sort();
        assert_eq!(lit(&fb), expected);
    }

    #[test]
    fn glyph_background_is_cleared() {
        let font = BdfFont::parse(SAMPLE.as_bytes()).unwrap();
        let mut fb = Framebuffer::filled(0xFF);

        font.draw_text(&mut fb, &TextLayout::default(), 0, 0, "A");

        assert_eq!(fb.get_pixel(0, 0), Some(Color::Off));
        assert_eq!(fb.get_pixel(0, 3), Some(Color::On));
        // outside the 4x6 box
        assert_eq!(fb.get_pixel(4, 0), Some(Color::On));
        assert_eq!(fb.get_pixel(0, 6), Some(Color::On));
    }

    #[test]
    fn wraps_at_layout_width() {
        let font = BdfFont::parse(SAMPLE.as_bytes()).unwrap();
        let layout = TextLayout {
            width: 12,
            height: 64,
            wrap: true,
        };

        let mut fb = Framebuffer::new();
        let end = font.draw_text(&mut fb, &layout, 0, 0, "AAA");
        assert_eq!(end, (5, 8));
        assert_eq!(fb.get_pixel(1, 8), Some(Color::On));
        assert_eq!(fb.get_pixel(11, 0), Some(Color::Off));

        let mut unwrapped = Framebuffer::new();
        let end = font.draw_text(&mut unwrapped, &TextLayout { wrap: false, ..layout }, 0, 0, "AAA");
        assert_eq!(end, (15, 0));
        assert_eq!(unwrapped.get_pixel(11, 0), Some(Color::On));
        assert_eq!(unwrapped.get_pixel(1, 8), Some(Color::Off));
    }

    #[test]
    fn newline_and_area_height() {
        let font = BdfFont::parse(SAMPLE.as_bytes()).unwrap();
        let layout = TextLayout {
            width: 128,
            height: 8,
            wrap: true,
        };

        let mut fb = Framebuffer::new();
        font.draw_text(&mut fb, &layout, 30, 0, "A\nA");

        // the second line starts at y = 8, outside the area
        assert!(lit(&fb).iter().all(|&(x, y)| y < 8 && (30..34).contains(&x)));
    }

    #[test]
    fn rejects_malformed_fonts() {
        assert_eq!(
            BdfFont::parse(b"FONT foo\nENDFONT\n").unwrap_err(),
            FontError::MissingHeader
        );
        assert_eq!(BdfFont::parse(&[0xFF, 0xFE]).unwrap_err(), FontError::NotUtf8);

        let truncated = &SAMPLE[..SAMPLE.find("ENDFONT").unwrap()];
        assert_eq!(
            BdfFont::parse(truncated.as_bytes()).unwrap_err(),
            FontError::UnexpectedEnd
        );

        let bad_hex = SAMPLE.replacen("F0", "G0", 1);
        let line = bad_hex.lines().position(|l| l == "G0").unwrap() + 1;
        assert_eq!(
            BdfFont::parse(bad_hex.as_bytes()).unwrap_err(),
            FontError::InvalidBitmap { line }
        );

        let bad_width = SAMPLE.replacen("DWIDTH 5 0", "DWIDTH five 0", 1);
        let line = bad_width.lines().position(|l| l.starts_with("DWIDTH five")).unwrap() + 1;
        assert_eq!(
            BdfFont::parse(bad_width.as_bytes()).unwrap_err(),
            FontError::InvalidNumber { line }
        );

        let no_bbx = SAMPLE.replacen("FONTBOUNDINGBOX 5 8 0 -2\n", "", 1);
        assert!(matches!(
            BdfFont::parse(no_bbx.as_bytes()).unwrap_err(),
            FontError::MissingField {
                field: "FONTBOUNDINGBOX",
                ..
            }
        ));
    }

    fn single_glyph_font(header: &str, bbx: &str, rows: &str) -> String {
        format!(
            "STARTFONT 2.1\n{header}\nSTARTCHAR a\nENCODING 65\n{bbx}\nBITMAP\n{rows}ENDCHAR\nENDFONT\n"
        )
    }

    #[test]
    fn derived_metrics_that_overflow_are_rejected() {
        let tall = single_glyph_font("FONTBOUNDINGBOX 1 32767 0 10", "BBX 1 1 0 0", "80\n");
        assert_eq!(
            BdfFont::parse(tall.as_bytes()).unwrap_err(),
            FontError::InvalidNumber { line: 2 }
        );

        let low = single_glyph_font("FONTBOUNDINGBOX 1 1 0 -32768", "BBX 1 1 0 0", "80\n");
        assert_eq!(
            BdfFont::parse(low.as_bytes()).unwrap_err(),
            FontError::InvalidNumber { line: 2 }
        );

        // explicit metrics are taken as given
        let explicit = single_glyph_font(
            "FONTBOUNDINGBOX 1 32767 0 10\nFONT_ASCENT 7\nFONT_DESCENT 1",
            "BBX 1 1 0 0",
            "80\n",
        );
        let font = BdfFont::parse(explicit.as_bytes()).unwrap();
        assert_eq!((font.ascent(), font.descent()), (7, 1));
    }

    #[test]
    fn oversized_glyph_box_is_rejected_before_rows_are_read() {
        let huge = single_glyph_font("FONTBOUNDINGBOX 1 1 0 0", "BBX 65535 65535 0 0", "");
        assert_eq!(
            BdfFont::parse(huge.as_bytes()).unwrap_err(),
            FontError::InvalidBitmap { line: 5 }
        );

        let wide = single_glyph_font("FONTBOUNDINGBOX 1 1 0 0", "BBX 257 1 0 0", "");
        assert_eq!(
            BdfFont::parse(wide.as_bytes()).unwrap_err(),
            FontError::InvalidBitmap { line: 5 }
        );
    }

    #[test]
    fn missing_dwidth_defaults_to_box_width() {
        let row = "FF".repeat(32) + "\n";
        let data = single_glyph_font("FONTBOUNDINGBOX 256 1 0 0", "BBX 256 1 0 0", &row);
        let font = BdfFont::parse(data.as_bytes()).unwrap();
        assert_eq!(font.glyph('A').map(BdfGlyph::advance), Some(256));
    }

    #[test]
    fn font_without_encoded_glyphs_is_rejected() {
        let data = "STARTFONT 2.1
FONTBOUNDINGBOX 1 1 0 0
STARTCHAR unencoded
ENCODING -1
BBX 1 1 0 0
BITMAP
80
ENDCHAR
ENDFONT
";
        assert_eq!(BdfFont::parse(data.as_bytes()).unwrap_err(), FontError::NoGlyphs);
    }

    #[cfg(feature = "std")]
    #[test]
    fn loads_from_reader() {
        let font = BdfFont::from_reader(std::io::Cursor::new(SAMPLE.as_bytes())).unwrap();
        assert_eq!(font.glyph_count(), 2);
    }
}
