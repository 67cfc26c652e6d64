pub struct Flag;
#[allow(dead_code)]
impl Flag {
    /// Control byte prefixing a block of command bytes
    pub const CONTROL_CMD: u8 = 0x00;
    /// Control byte prefixing a block of GDDRAM data bytes
    pub const CONTROL_DATA: u8 = 0x40;
    pub const ADDR_MODE_VERTICAL: u8 = 0x01;
    pub const CONTRAST_DEFAULT: u8 = 0xCF;
    pub const MULTIPLEX_1_64: u8 = 0x3F;
    pub const CLOCK_100_FPS: u8 = 0x80;
    pub const PRE_CHARGE_15_DISCHARGE_1: u8 = 0xF1;
    pub const VCOMH_DESELECT_LEVEL: u8 = 0x40;
    pub const CHARGE_PUMP_ENABLE: u8 = 0x14;
    pub const CHARGE_PUMP_DISABLE: u8 = 0x10;
}
