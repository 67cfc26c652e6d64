//! Pixel colour of a monochrome OLED

/// State of a single pixel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Color {
    /// Pixel dark (bit cleared)
    #[default]
    Off,
    /// Pixel lit (bit set)
    On,
}

impl Color {
    /// Byte with all eight pixels of a band in this colour
    pub fn byte_value(self) -> u8 {
        match self {
            Color::Off => 0x00,
            Color::On => 0xFF,
        }
    }

    /// The opposite colour
    pub fn inverse(self) -> Color {
        match self {
            Color::Off => Color::On,
            Color::On => Color::Off,
        }
    }

    /// `true` if the pixel is lit
    pub fn is_on(self) -> bool {
        self == Color::On
    }
}

impl From<bool> for Color {
    fn from(on: bool) -> Self {
        if on {
            Color::On
        } else {
            Color::Off
        }
    }
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics::pixelcolor::BinaryColor> for Color {
    fn from(color: embedded_graphics::pixelcolor::BinaryColor) -> Self {
        match color {
            embedded_graphics::pixelcolor::BinaryColor::On => Color::On,
            embedded_graphics::pixelcolor::BinaryColor::Off => Color::Off,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn byte_values_and_inverse() {
        assert_eq!(Color::On.byte_value(), 0xFF);
        assert_eq!(Color::Off.byte_value(), 0x00);
        assert_eq!(Color::On.inverse(), Color::Off);
        assert_eq!(Color::from(true), Color::On);
        assert!(!Color::from(false).is_on());
    }
}
