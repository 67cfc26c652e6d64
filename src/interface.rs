//! Bus transport for command and data blocks
pub use display_interface::DisplayError;

use embedded_hal::i2c::I2c;
use log::debug;

use crate::flag::Flag;
use crate::BUFFER_LEN;

/// Default 7-bit I2C address of SSD1306 modules
pub const I2C_ADDRESS: u8 = 0x3C;

/// Sends one block of bytes to the controller as a single bus transaction.
///
/// Implementations frame the block as commands or as GDDRAM data and report
/// any bus failure; callers never retry.
pub trait WriteBlock {
    /// Transmit `bytes` as a command block (`is_command`) or a data block
    fn write_block(&mut self, is_command: bool, bytes: &[u8]) -> Result<(), DisplayError>;
}

/// Two-wire transport
///
/// Every block is sent as `[control byte, payload...]` in one write, staged
/// in a scratch buffer big enough for a full frame.
pub struct I2cDisplayInterface<I2C> {
    i2c: I2C,
    address: u8,
    scratch: [u8; BUFFER_LEN + 1],
}

impl<I2C> I2cDisplayInterface<I2C>
where
    I2C: I2c,
{
    /// Create the interface at the default address [`I2C_ADDRESS`]
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, I2C_ADDRESS)
    }

    /// Create the interface at a custom 7-bit address
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        debug!("creating I2C display interface at {:#04x}", address);
        I2cDisplayInterface {
            i2c,
            address,
            scratch: [0; BUFFER_LEN + 1],
        }
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> WriteBlock for I2cDisplayInterface<I2C>
where
    I2C: I2c,
{
    fn write_block(&mut self, is_command: bool, bytes: &[u8]) -> Result<(), DisplayError> {
        if bytes.len() > BUFFER_LEN {
            return Err(DisplayError::OutOfBoundsError);
        }

        self.scratch[0] = if is_command {
            Flag::CONTROL_CMD
        } else {
            Flag::CONTROL_DATA
        };
        self.scratch[1..=bytes.len()].copy_from_slice(bytes);

        self.i2c
            .write(self.address, &self.scratch[..=bytes.len()])
            .map_err(|_| DisplayError::BusWriteError)
    }
}
