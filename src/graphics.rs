//! embedded-graphics support
//!
//! Pixels are routed through [`Framebuffer::set_pixel`], so the band layout
//! and clipping rules are the same as for the built-in primitives.

use core::convert::Infallible;

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

use crate::color::Color;
use crate::driver::Ssd1306;
use crate::framebuffer::{Framebuffer, PlotPoint};
use crate::interface::WriteBlock;
use crate::{HEIGHT, WIDTH};

impl DrawTarget for Framebuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.plot_point(point.x, point.y, Color::from(color));
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(Color::from(color).byte_value());
        Ok(())
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl<DI> DrawTarget for Ssd1306<DI>
where
    DI: WriteBlock,
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.framebuffer_mut().draw_iter(pixels)
    }
}

impl<DI> OriginDimensions for Ssd1306<DI>
where
    DI: WriteBlock,
{
    fn size(&self) -> Size {
        self.framebuffer().size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives;
    use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};

    #[test]
    fn horizontal_line_matches_builtin() {
        let mut eg = Framebuffer::new();
        Line::new(Point::new(0, 5), Point::new(20, 5))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut eg)
            .unwrap();

        let mut builtin = Framebuffer::new();
        primitives::draw_line(&mut builtin, 0, 5, 20, 5);
        assert_eq!(eg.as_bytes(), builtin.as_bytes());
    }

    #[test]
    fn filled_rectangle_matches_builtin() {
        let mut eg = Framebuffer::new();
        Rectangle::new(Point::new(2, 2), Size::new(3, 3))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut eg)
            .unwrap();

        let mut builtin = Framebuffer::new();
        primitives::fill_rectangle(&mut builtin, 2, 2, 4, 4, Color::On);
        assert_eq!(eg.as_bytes(), builtin.as_bytes());
    }

    #[test]
    fn off_screen_pixels_are_dropped() {
        let mut fb = Framebuffer::new();
        Rectangle::new(Point::new(-10, -10), Size::new(300, 300))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut fb)
            .unwrap();
        assert!(fb.as_bytes().iter().all(|&b| b == 0xFF));

        DrawTarget::clear(&mut fb, BinaryColor::Off).unwrap();
        assert!(fb.as_bytes().iter().all(|&b| b == 0x00));
    }

    #[test]
    fn size_is_the_panel() {
        assert_eq!(Framebuffer::new().size(), Size::new(128, 64));
    }
}
