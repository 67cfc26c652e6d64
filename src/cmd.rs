pub struct Cmd;
#[allow(dead_code)]
impl Cmd {
    pub const MEMORY_ADDR_MODE: u8 = 0x20;
    pub const COLUMN_ADDR: u8 = 0x21;
    pub const PAGE_ADDR: u8 = 0x22;
    pub const START_LINE: u8 = 0x40;
    pub const CONTRAST: u8 = 0x81;
    pub const CHARGE_PUMP: u8 = 0x8D;
    pub const SEG_REMAP_FLIPPED: u8 = 0xA1;
    pub const ENTIRE_DISPLAY_RESUME: u8 = 0xA4;
    pub const NORMAL_DISPLAY: u8 = 0xA6;
    pub const INVERT_DISPLAY: u8 = 0xA7;
    pub const MULTIPLEX_RATIO: u8 = 0xA8;
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const COM_SCAN_NORMAL: u8 = 0xC0;
    pub const CLOCK_DIVIDE: u8 = 0xD5;
    pub const PRE_CHARGE_PERIOD: u8 = 0xD9;
    pub const COM_PINS: u8 = 0xDA;
    pub const VCOMH_DESELECT: u8 = 0xDB;
}
