//! Driver for interacting with the SSD1306 controller
pub use display_interface::DisplayError;

use log::debug;
#[cfg(feature = "bdf")]
use log::warn;

#[cfg(feature = "bdf")]
use crate::bdf::{BdfFont, FontError, TextLayout};
use crate::color::Color;
use crate::font::MonoFont;
use crate::framebuffer::Framebuffer;
use crate::interface::WriteBlock;
use crate::text::TextMode;
use crate::{cmd::Cmd, flag::Flag, primitives, text};

/// Power-up script for a 128x64 panel in vertical addressing mode.
///
/// The bytes and their order match what the panel modules ship with; the
/// framebuffer layout depends on the addressing and scan settings in here.
pub const DEFAULT_INIT_SEQUENCE: &[InitStep] = &[
    InitStep::Cmd(Cmd::DISPLAY_OFF),
    // RAM display start line 0
    InitStep::Cmd(Cmd::START_LINE),
    InitStep::Cmd(Cmd::CONTRAST),
    InitStep::Cmd(Flag::CONTRAST_DEFAULT),
    InitStep::Cmd(Cmd::SEG_REMAP_FLIPPED),
    InitStep::Cmd(Cmd::COM_SCAN_NORMAL),
    InitStep::Cmd(Cmd::NORMAL_DISPLAY),
    InitStep::Cmd(Cmd::MULTIPLEX_RATIO),
    InitStep::Cmd(Flag::MULTIPLEX_1_64),
    InitStep::Cmd(Cmd::CLOCK_DIVIDE),
    InitStep::Cmd(Flag::CLOCK_100_FPS),
    InitStep::Cmd(Cmd::PRE_CHARGE_PERIOD),
    InitStep::Cmd(Flag::PRE_CHARGE_15_DISCHARGE_1),
    InitStep::Cmd(Cmd::COM_PINS),
    InitStep::Cmd(Cmd::VCOMH_DESELECT),
    InitStep::Cmd(Flag::VCOMH_DESELECT_LEVEL),
    InitStep::Cmd(Cmd::CHARGE_PUMP),
    InitStep::Cmd(Flag::CHARGE_PUMP_ENABLE),
    InitStep::Cmd(Cmd::ENTIRE_DISPLAY_RESUME),
    InitStep::Cmd(Cmd::NORMAL_DISPLAY),
    InitStep::CmdData(Cmd::MEMORY_ADDR_MODE, &[Flag::ADDR_MODE_VERTICAL]),
    // full column and page windows
    InitStep::CmdData(Cmd::COLUMN_ADDR, &[0x00, 0x7F]),
    InitStep::CmdData(Cmd::PAGE_ADDR, &[0x00, 0x07]),
    InitStep::Cmd(Cmd::DISPLAY_ON),
];

/// Steps that an init sequence can contain.
/// Keep variants minimal so sequences can live in static arrays.
#[derive(Clone, Copy, Debug)]
pub enum InitStep {
    /// Send a single byte as its own command block
    Cmd(u8),
    /// Send a command byte followed by its arguments as one block
    CmdData(u8, &'static [u8]),
}

/// Text drawn with a loaded font: the font plus the layout chosen at load time.
#[cfg(feature = "bdf")]
struct LoadedFont {
    font: BdfFont,
    layout: TextLayout,
}

/// A configured display with a bus interface and its framebuffer.
pub struct Ssd1306<DI> {
    interface: DI,
    framebuffer: Framebuffer,
    /// Init sequence provided at construction time.
    init_sequence: &'static [InitStep],
    #[cfg(feature = "bdf")]
    font: Option<LoadedFont>,
}

impl<DI> Ssd1306<DI>
where
    DI: WriteBlock,
{
    /// Create the driver with the default init sequence. Nothing is sent
    /// until [`init`](Self::init).
    pub fn new(interface: DI) -> Self {
        Self::with_init_sequence(interface, DEFAULT_INIT_SEQUENCE)
    }

    /// Create the driver with a custom init sequence.
    pub fn with_init_sequence(interface: DI, init_sequence: &'static [InitStep]) -> Self {
        debug!("creating new Ssd1306 instance");
        Ssd1306 {
            interface,
            framebuffer: Framebuffer::new(),
            init_sequence,
            #[cfg(feature = "bdf")]
            font: None,
        }
    }

    /// Run the init sequence, then blank the framebuffer. Stops at the
    /// first failed write.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        debug!("initializing ssd1306");
        for step in self.init_sequence {
            debug!("init step: {:?}", step);
            match *step {
                InitStep::Cmd(c) => {
                    self.interface.write_block(true, &[c])?;
                }
                InitStep::CmdData(c, d) => {
                    self.write_cmd_with_data(c, d)?;
                }
            }
        }
        debug!("init sequence complete");
        self.clear_screen(0x00);
        Ok(())
    }

    /// Tear down the driver and hand back the interface
    pub fn release(self) -> DI {
        self.interface
    }

    /// Push the whole framebuffer to the controller in one data block
    pub fn refresh(&mut self) -> Result<(), DisplayError> {
        debug!("refreshing ssd1306 GDDRAM");
        self.interface
            .write_block(false, self.framebuffer.as_bytes())
    }

    /// Fill every framebuffer byte with `fill`
    pub fn clear_screen(&mut self, fill: u8) {
        self.framebuffer.fill(fill);
    }

    /// Turn the panel on or off, keeping GDDRAM contents
    pub fn set_display_on(&mut self, on: bool) -> Result<(), DisplayError> {
        let c = if on { Cmd::DISPLAY_ON } else { Cmd::DISPLAY_OFF };
        self.interface.write_block(true, &[c])
    }

    /// Invert every pixel in hardware
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), DisplayError> {
        let c = if inverted {
            Cmd::INVERT_DISPLAY
        } else {
            Cmd::NORMAL_DISPLAY
        };
        self.interface.write_block(true, &[c])
    }

    /// Set the segment output current
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), DisplayError> {
        self.write_cmd_with_data(Cmd::CONTRAST, &[contrast])
    }

    /// The framebuffer
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// The framebuffer, mutably
    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer {
        &mut self.framebuffer
    }

    /// Set or clear one pixel; off-screen coordinates are ignored
    pub fn set_pixel(&mut self, x: u8, y: u8, color: Color) {
        self.framebuffer.set_pixel(x, y, color);
    }

    /// Fill the inclusive rectangle (`x1`, `y1`)-(`x2`, `y2`)
    pub fn fill_rectangle(&mut self, x1: u8, y1: u8, x2: u8, y2: u8, color: Color) {
        primitives::fill_rectangle(&mut self.framebuffer, x1, y1, x2, y2, color);
    }

    /// Overlay a row-major MSB-first bitmap at (`x`, `y`)
    pub fn draw_bitmap(&mut self, x: u8, y: u8, bitmap: &[u8], width: u8, height: u8) {
        primitives::draw_bitmap(&mut self.framebuffer, x, y, bitmap, width, height);
    }

    /// Draw a line between two points
    pub fn draw_line(&mut self, x1: i16, y1: i16, x2: i16, y2: i16) {
        primitives::draw_line(&mut self.framebuffer, x1, y1, x2, y2);
    }

    /// Draw one fixed-width glyph
    pub fn draw_char(&mut self, x: u8, y: u8, code: u8, font: &MonoFont, mode: TextMode) {
        text::draw_char(&mut self.framebuffer, x, y, code, font, mode);
    }

    /// Draw a string with a fixed-width font, wrapping and clearing as needed
    pub fn draw_string(&mut self, x: u8, y: u8, s: &str, font: &MonoFont, mode: TextMode) {
        text::draw_string(&mut self.framebuffer, x, y, s, font, mode);
    }

    /// Draw a zero-blanked decimal field of `digits` digits
    pub fn draw_number(&mut self, x: u8, y: u8, value: u32, digits: u8, font: &MonoFont) {
        text::draw_number(&mut self.framebuffer, x, y, value, digits, font);
    }

    /// Load a BDF font from memory. Text wraps at the panel edge if `wrap`.
    ///
    /// On failure the previously loaded font stays in place.
    #[cfg(feature = "bdf")]
    pub fn load_bdf_buffer(&mut self, data: &[u8], wrap: bool) -> Result<(), FontError> {
        let font = BdfFont::parse(data).inspect_err(|e| warn!("failed to load BDF font: {}", e))?;
        self.set_font(font, wrap);
        Ok(())
    }

    /// Load a BDF font from a reader, e.g. an open file.
    ///
    /// On failure the previously loaded font stays in place.
    #[cfg(feature = "std")]
    pub fn load_bdf_reader<R: std::io::Read>(
        &mut self,
        reader: R,
        wrap: bool,
    ) -> Result<(), FontError> {
        let font =
            BdfFont::from_reader(reader).inspect_err(|e| warn!("failed to load BDF font: {}", e))?;
        self.set_font(font, wrap);
        Ok(())
    }

    /// Draw text with the loaded BDF font. Without a font this does nothing
    /// and returns `None`; otherwise the final pen position.
    #[cfg(feature = "bdf")]
    pub fn draw_bdf_text(&mut self, x: u8, y: u8, s: &str) -> Option<(i32, i32)> {
        let loaded = self.font.as_ref()?;
        Some(loaded.font.draw_text(
            &mut self.framebuffer,
            &loaded.layout,
            i32::from(x),
            i32::from(y),
            s,
        ))
    }

    /// The loaded BDF font, if any
    #[cfg(feature = "bdf")]
    pub fn bdf_font(&self) -> Option<&BdfFont> {
        self.font.as_ref().map(|loaded| &loaded.font)
    }

    #[cfg(feature = "bdf")]
    fn set_font(&mut self, font: BdfFont, wrap: bool) {
        debug!("loaded BDF font with {} glyphs", font.glyph_count());
        self.font = Some(LoadedFont {
            font,
            layout: TextLayout::full_screen(wrap),
        });
    }

    fn write_cmd_with_data(&mut self, c: u8, data: &[u8]) -> Result<(), DisplayError> {
        // command and arguments travel in the same block
        let mut block = [0u8; 8];
        let len = data.len() + 1;
        if len > block.len() {
            return Err(DisplayError::OutOfBoundsError);
        }
        block[0] = c;
        block[1..len].copy_from_slice(data);
        self.interface.write_block(true, &block[..len])
    }
}
