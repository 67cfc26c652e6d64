//! SSD1306 OLED Display Driver
//!
//! Framebuffer driver for 128x64 monochrome OLED modules built around the
//! SSD1306 controller and wired over I2C.
//!
//! ## Architecture
//!
//! Drawing and transport are kept apart:
//! - **[`Framebuffer`](framebuffer::Framebuffer)** holds the panel's pixels in
//!   the controller's band layout. [`set_pixel`](framebuffer::Framebuffer::set_pixel)
//!   is the only place pixels are written, and it drops anything off screen.
//! - **[`primitives`]**, **[`text`]** and **[`bdf`]** rasterize lines,
//!   rectangles, bitmaps and glyphs onto anything implementing
//!   [`PlotPoint`](framebuffer::PlotPoint).
//! - **[`WriteBlock`](interface::WriteBlock)** sends a command or data block
//!   over the bus; [`I2cDisplayInterface`](interface::I2cDisplayInterface) is
//!   the I2C implementation.
//! - **[`Ssd1306`](driver::Ssd1306)** owns one framebuffer and one interface,
//!   runs the init sequence and pushes the framebuffer on
//!   [`refresh`](driver::Ssd1306::refresh).
//!
//! Nothing reaches the panel until `refresh` is called.
//!
//! ## Usage
//!
//! ```rust, ignore
//! use ssd1306_gram::prelude::*;
//!
//! let interface = I2cDisplayInterface::new(i2c);
//! let mut display = Ssd1306::new(interface);
//! display.init()?;
//!
//! display.draw_line(0, 0, 127, 63);
//! display.fill_rectangle(10, 10, 20, 20, Color::On);
//! display.draw_string(0, 48, "Hello", &FONT_1608, TextMode::Normal);
//! display.draw_number(80, 48, 42, 4, &FONT_1206);
//!
//! display.refresh()?;
//! ```
//!
//! With the `bdf` feature a BDF font can be loaded and used for
//! variable-width text:
//!
//! ```rust, ignore
//! display.load_bdf_buffer(include_bytes!("../fonts/6x13.bdf"), true)?;
//! display.draw_bdf_text(0, 0, "Variable width");
//! ```
//!
//! With the `graphics` feature both the framebuffer and the driver are
//! embedded-graphics `DrawTarget`s.
//!
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(missing_docs)]
#![allow(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

#[cfg(feature = "bdf")]
extern crate alloc;

#[cfg(feature = "bdf")]
pub mod bdf;
mod cmd;
pub mod color;
pub mod driver;
mod flag;
pub mod font;
pub mod framebuffer;
#[cfg(feature = "graphics")]
mod graphics;
pub mod interface;
pub mod primitives;
pub mod text;

/// Panel width in pixels
pub const WIDTH: usize = 128;

/// Panel height in pixels
pub const HEIGHT: usize = 64;

/// Number of 8-row bands
pub const BANDS: usize = HEIGHT / 8;

/// Framebuffer size in bytes
pub const BUFFER_LEN: usize = WIDTH * BANDS;

/// Useful exports
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::driver::{DisplayError, InitStep, Ssd1306};
    pub use crate::font::{MonoFont, FONT_1206, FONT_1608};
    pub use crate::framebuffer::{Framebuffer, PlotPoint};
    pub use crate::interface::{I2cDisplayInterface, WriteBlock, I2C_ADDRESS};
    pub use crate::text::TextMode;

    #[cfg(feature = "bdf")]
    pub use crate::bdf::{BdfFont, FontError, TextLayout};
}
