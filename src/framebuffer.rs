//! In-memory copy of the controller's graphic RAM
//!
//! The buffer is laid out the way the controller consumes it in vertical
//! addressing mode: one byte per (column, band), columns outermost. Bands are
//! stored bottom-up and the bits inside a band are reversed, so the top row of
//! the screen lives in bit 7 of band 7.

use crate::color::Color;
use crate::{BANDS, BUFFER_LEN, HEIGHT, WIDTH};

/// Something a single pixel can be plotted onto.
///
/// Every drawing routine in this crate is written against this trait, so the
/// clamping and bit-order rules of the [`Framebuffer`] apply to all of them.
pub trait PlotPoint {
    /// Set or clear the pixel at (`x`, `y`). Coordinates outside the target
    /// are ignored.
    fn plot_point(&mut self, x: i32, y: i32, color: Color);

    /// Turn off every pixel of the target
    fn clear(&mut self) {
        for x in 0..WIDTH as i32 {
            for y in 0..HEIGHT as i32 {
                self.plot_point(x, y, Color::Off);
            }
        }
    }
}

/// Packed 1-bit-per-pixel framebuffer for a 128x64 panel
#[derive(Clone)]
pub struct Framebuffer {
    buffer: [u8; BUFFER_LEN],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    /// Create a framebuffer with every pixel off
    pub const fn new() -> Self {
        Self::filled(0x00)
    }

    /// Create a framebuffer with every byte set to `fill`
    pub const fn filled(fill: u8) -> Self {
        Framebuffer {
            buffer: [fill; BUFFER_LEN],
        }
    }

    /// Set or clear one pixel. Out of range coordinates are silently dropped.
    pub fn set_pixel(&mut self, x: u8, y: u8, color: Color) {
        let (x, y) = (usize::from(x), usize::from(y));
        if x >= WIDTH || y >= HEIGHT {
            return;
        }

        let (index, bit) = find_position(x, y);
        match color {
            Color::On => self.buffer[index] |= bit,
            Color::Off => self.buffer[index] &= !bit,
        }
    }

    /// Read back one pixel, `None` if the coordinate is off screen
    pub fn get_pixel(&self, x: u8, y: u8) -> Option<Color> {
        let (x, y) = (usize::from(x), usize::from(y));
        if x >= WIDTH || y >= HEIGHT {
            return None;
        }

        let (index, bit) = find_position(x, y);
        Some(Color::from(self.buffer[index] & bit != 0))
    }

    /// Fill every byte of the buffer with `fill`
    pub fn fill(&mut self, fill: u8) {
        self.buffer.fill(fill);
    }

    /// The raw buffer in transmission order
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }
}

impl PlotPoint for Framebuffer {
    fn plot_point(&mut self, x: i32, y: i32, color: Color) {
        if let (Ok(x), Ok(y)) = (u8::try_from(x), u8::try_from(y)) {
            self.set_pixel(x, y, color);
        }
    }

    fn clear(&mut self) {
        self.fill(0x00);
    }
}

#[rustfmt::skip]
//returns index position in the buffer and the bit mask inside that byte
fn find_position(x: usize, y: usize) -> (usize, u8) {
    let band = (BANDS - 1) - y / 8;
    (
        x * BANDS + band,
        0x80 >> (y % 8)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_pixel_reads_back_everywhere() {
        let mut fb = Framebuffer::new();
        for x in 0..WIDTH as u8 {
            for y in 0..HEIGHT as u8 {
                fb.set_pixel(x, y, Color::On);
                assert_eq!(fb.get_pixel(x, y), Some(Color::On));
                fb.set_pixel(x, y, Color::Off);
                assert_eq!(fb.get_pixel(x, y), Some(Color::Off));
            }
        }
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn setting_twice_equals_setting_once() {
        let mut once = Framebuffer::new();
        once.set_pixel(17, 33, Color::On);

        let mut twice = Framebuffer::new();
        twice.set_pixel(17, 33, Color::On);
        twice.set_pixel(17, 33, Color::On);

        assert_eq!(once.as_bytes(), twice.as_bytes());
    }

    #[test]
    fn bands_are_stored_bottom_up_with_reversed_bits() {
        let mut fb = Framebuffer::new();

        // top-left pixel lands in the last band of column 0, bit 7
        fb.set_pixel(0, 0, Color::On);
        assert_eq!(fb.as_bytes()[7], 0x80);

        // bottom-left pixel lands in band 0, bit 0
        fb.set_pixel(0, 63, Color::On);
        assert_eq!(fb.as_bytes()[0], 0x01);

        // (1, 8): column 1, second band from the top
        fb.set_pixel(1, 8, Color::On);
        assert_eq!(fb.as_bytes()[BANDS + 6], 0x80);

        let set: usize = fb.as_bytes().iter().map(|b| b.count_ones() as usize).sum();
        assert_eq!(set, 3);
    }

    #[test]
    fn out_of_range_is_dropped() {
        let mut fb = Framebuffer::filled(0x5A);
        let before = fb.as_bytes().to_vec();

        fb.set_pixel(128, 0, Color::Off);
        fb.set_pixel(0, 64, Color::Off);
        fb.set_pixel(255, 255, Color::On);
        fb.plot_point(-1, 3, Color::Off);
        fb.plot_point(3, -1, Color::Off);
        fb.plot_point(1000, 3, Color::Off);

        assert_eq!(fb.as_bytes(), &before[..]);
        assert_eq!(fb.get_pixel(128, 0), None);
    }

    #[test]
    fn fill_sets_every_byte() {
        let mut fb = Framebuffer::new();
        fb.fill(0xFF);
        assert!(fb.as_bytes().iter().all(|&b| b == 0xFF));
        assert_eq!(fb.get_pixel(127, 63), Some(Color::On));

        PlotPoint::clear(&mut fb);
        assert!(fb.as_bytes().iter().all(|&b| b == 0x00));
    }

    #[test]
    fn default_clear_plots_everything_off() {
        struct Counter(usize);
        impl PlotPoint for Counter {
            fn plot_point(&mut self, _x: i32, _y: i32, color: Color) {
                assert_eq!(color, Color::Off);
                self.0 += 1;
            }
        }

        let mut counter = Counter(0);
        counter.clear();
        assert_eq!(counter.0, WIDTH * HEIGHT);
    }
}
