//! Rectangles, bitmaps and lines, rasterized one pixel at a time

use crate::color::Color;
use crate::framebuffer::PlotPoint;

/// Fill the inclusive rectangle spanned by (`x1`, `y1`) and (`x2`, `y2`).
///
/// Corners may be given in any order; they are normalized before drawing.
pub fn fill_rectangle<P>(target: &mut P, x1: u8, y1: u8, x2: u8, y2: u8, color: Color)
where
    P: PlotPoint + ?Sized,
{
    let (x_start, x_end) = (x1.min(x2), x1.max(x2));
    let (y_start, y_end) = (y1.min(y2), y1.max(y2));

    for x in x_start..=x_end {
        for y in y_start..=y_end {
            target.plot_point(i32::from(x), i32::from(y), color);
        }
    }
}

/// Overlay a 1bpp bitmap with its top left corner at (`x`, `y`).
///
/// `bitmap` is row-major and MSB-first, each row padded to a whole byte.
/// Only set bits are drawn; bits beyond the end of a short slice are treated
/// as clear.
pub fn draw_bitmap<P>(target: &mut P, x: u8, y: u8, bitmap: &[u8], width: u8, height: u8)
where
    P: PlotPoint + ?Sized,
{
    let byte_width = usize::from(width).div_ceil(8);

    for j in 0..usize::from(height) {
        for i in 0..usize::from(width) {
            let set = bitmap
                .get(j * byte_width + i / 8)
                .is_some_and(|byte| byte & (0x80 >> (i % 8)) != 0);
            if set {
                target.plot_point(
                    i32::from(x) + i as i32,
                    i32::from(y) + j as i32,
                    Color::On,
                );
            }
        }
    }
}

/// Draw a one pixel wide line between two points, both ends included.
///
/// Integer Bresenham: the axis with the larger delta drives the loop and the
/// other one steps once the accumulated error crosses the midpoint. Points
/// are swapped so the driving coordinate always increases, which makes the
/// result independent of the order the endpoints are passed in.
pub fn draw_line<P>(target: &mut P, x1: i16, y1: i16, x2: i16, y2: i16)
where
    P: PlotPoint + ?Sized,
{
    let (x1, y1, x2, y2) = (i32::from(x1), i32::from(y1), i32::from(x2), i32::from(y2));

    if (y2 - y1).abs() <= (x2 - x1).abs() {
        if x1 > x2 {
            line_x_major(target, x2, y2, x1, y1);
        } else {
            line_x_major(target, x1, y1, x2, y2);
        }
    } else if y1 > y2 {
        line_y_major(target, x2, y2, x1, y1);
    } else {
        line_y_major(target, x1, y1, x2, y2);
    }
}

// x0 <= x1 and |dy| <= dx
fn line_x_major<P>(target: &mut P, x0: i32, y0: i32, x1: i32, y1: i32)
where
    P: PlotPoint + ?Sized,
{
    let dx = x1 - x0;
    let dy = (y1 - y0).abs();
    let step = if y1 < y0 { -1 } else { 1 };

    let mut error = 2 * dy - dx;
    let mut y = y0;
    for x in x0..=x1 {
        target.plot_point(x, y, Color::On);
        if error > 0 {
            y += step;
            error -= 2 * dx;
        }
        error += 2 * dy;
    }
}

// y0 <= y1 and |dx| < dy
fn line_y_major<P>(target: &mut P, x0: i32, y0: i32, x1: i32, y1: i32)
where
    P: PlotPoint + ?Sized,
{
    let dy = y1 - y0;
    let dx = (x1 - x0).abs();
    let step = if x1 < x0 { -1 } else { 1 };

    let mut error = 2 * dx - dy;
    let mut x = x0;
    for y in y0..=y1 {
        target.plot_point(x, y, Color::On);
        if error > 0 {
            x += step;
            error -= 2 * dy;
        }
        error += 2 * dx;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::Framebuffer;
    use crate::{HEIGHT, WIDTH};

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
    fn horizontal_line() {
        let mut fb = Framebuffer::new();
        draw_line(&mut fb, 0, 0, 10, 0);

        let expected: Vec<(u8, u8)> = (0..=10).map(|x| (x, 0)).collect();
        assert_eq!(lit(&fb), expected);
    }

    #[test]
    fn diagonal_line() {
        let mut fb = Framebuffer::new();
        draw_line(&mut fb, 0, 0, 10, 10);

        let expected: Vec<(u8, u8)> = (0..=10).map(|i| (i, i)).collect();
        assert_eq!(lit(&fb), expected);
    }

    #[test]
    fn vertical_line() {
        let mut fb = Framebuffer::new();
        draw_line(&mut fb, 5, 20, 5, 3);

        let expected: Vec<(u8, u8)> = (3..=20).map(|y| (5, y)).collect();
        assert_eq!(lit(&fb), expected);
    }

    #[test]
    fn endpoint_order_does_not_change_pixels() {
        let cases = [(0, 0, 17, 5), (3, 40, 20, 2), (100, 10, 90, 60), (7, 7, 0, 1)];
        for (x1, y1, x2, y2) in cases {
            let mut forward = Framebuffer::new();
            draw_line(&mut forward, x1, y1, x2, y2);
            let mut backward = Framebuffer::new();
            draw_line(&mut backward, x2, y2, x1, y1);
            assert_eq!(forward.as_bytes(), backward.as_bytes());
        }
    }

    #[test]
    fn shallow_line_is_connected_with_one_pixel_per_column() {
        let mut fb = Framebuffer::new();
        draw_line(&mut fb, 0, 0, 20, 7);

        let points = lit(&fb);
        assert_eq!(points.len(), 21);
        assert_eq!(points.first(), Some(&(0, 0)));
        assert_eq!(points.last(), Some(&(20, 7)));
        for pair in points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert_eq!(b.0, a.0 + 1);
            assert!(b.1 == a.1 || b.1 == a.1 + 1);
        }
    }

    #[test]
    fn steep_line_is_connected_with_one_pixel_per_row() {
        let mut fb = Framebuffer::new();
        draw_line(&mut fb, 30, 50, 25, 10);

        let mut points = lit(&fb);
        points.sort_by_key(|&(_, y)| y);
        assert_eq!(points.len(), 41);
        assert_eq!(points.first(), Some(&(25, 10)));
        assert_eq!(points.last(), Some(&(30, 50)));
        for pair in points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert_eq!(b.1, a.1 + 1);
            assert!(b.0 == a.0 || b.0 == a.0 + 1);
        }
    }

    #[test]
    fn line_leaving_the_screen_is_clipped() {
        let mut fb = Framebuffer::new();
        draw_line(&mut fb, -10, 0, 300, 0);

        let expected: Vec<(u8, u8)> = (0..WIDTH as u8).map(|x| (x, 0)).collect();
        assert_eq!(lit(&fb), expected);

        let mut untouched = Framebuffer::new();
        draw_line(&mut untouched, 200, 70, 400, 90);
        assert!(untouched.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn fill_rectangle_sets_inclusive_block() {
        let mut fb = Framebuffer::new();
        fill_rectangle(&mut fb, 2, 2, 4, 4, Color::On);

        let mut expected = Vec::new();
        for x in 2..=4 {
            for y in 2..=4 {
                expected.push((x, y));
            }
        }
        assert_eq!(lit(&fb), expected);
    }

    #[test]
    fn fill_rectangle_normalizes_reversed_corners() {
        let mut ordered = Framebuffer::new();
        fill_rectangle(&mut ordered, 10, 20, 30, 25, Color::On);
        let mut reversed = Framebuffer::new();
        fill_rectangle(&mut reversed, 30, 25, 10, 20, Color::On);
        assert_eq!(ordered.as_bytes(), reversed.as_bytes());
    }

    #[test]
    fn fill_rectangle_can_clear_and_clamps() {
        let mut fb = Framebuffer::filled(0xFF);
        fill_rectangle(&mut fb, 120, 60, 255, 255, Color::Off);

        assert_eq!(fb.get_pixel(119, 60), Some(Color::On));
        assert_eq!(fb.get_pixel(120, 59), Some(Color::On));
        for x in 120..128 {
            for y in 60..64 {
                assert_eq!(fb.get_pixel(x, y), Some(Color::Off));
            }
        }
    }

    #[test]
    fn all_ones_bitmap_sets_square() {
        let mut fb = Framebuffer::new();
        draw_bitmap(&mut fb, 0, 0, &[0xFF; 8], 8, 8);

        let points = lit(&fb);
        assert_eq!(points.len(), 64);
        assert!(points.iter().all(|&(x, y)| x < 8 && y < 8));
    }

    #[test]
    fn bitmap_rows_are_padded_to_bytes() {
        // 10 pixels wide: two bytes per row, only pixels 0 and 9 set
        let bitmap = [0x80, 0x40, 0x80, 0x40];
        let mut fb = Framebuffer::new();
        draw_bitmap(&mut fb, 5, 6, &bitmap, 10, 2);

        assert_eq!(lit(&fb), vec![(5, 6), (5, 7), (14, 6), (14, 7)]);
    }

    #[test]
    fn bitmap_is_an_overlay() {
        let mut fb = Framebuffer::filled(0xFF);
        draw_bitmap(&mut fb, 0, 0, &[0x00; 8], 8, 8);
        assert!(fb.as_bytes().iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn redraw_after_clear_matches_first_draw() {
        let mut fb = Framebuffer::new();
        draw_line(&mut fb, 3, 60, 120, 4);
        fill_rectangle(&mut fb, 40, 10, 50, 30, Color::On);
        let first = fb.as_bytes().to_vec();

        fb.fill(0x00);
        draw_line(&mut fb, 3, 60, 120, 4);
        fill_rectangle(&mut fb, 40, 10, 50, 30, Color::On);
        assert_eq!(fb.as_bytes(), &first[..]);
    }
}
