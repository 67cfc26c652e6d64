/// 8x16 glyphs for `' '..='~'`, two bytes per column, MSB is the top row.
#[rustfmt::skip]
pub(crate) static ASCII_1608: [u8; 95 * 16] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // space
    0x00, 0x00, 0x00, 0x00, 0x1C, 0x00, 0x3F, 0xB0, 0x3F, 0xB0, 0x1C, 0x00, 0x00, 0x00, 0x00, 0x00, // !
    0x00, 0x00, 0x70, 0x00, 0x78, 0x00, 0x00, 0x00, 0x00, 0x00, 0x78, 0x00, 0x70, 0x00, 0x00, 0x00, // "
    0x04, 0x40, 0x1F, 0xF0, 0x1F, 0xF0, 0x04, 0x40, 0x1F, 0xF0, 0x1F, 0xF0, 0x04, 0x40, 0x00, 0x00, // #
    0x1C, 0x60, 0x3E, 0x30, 0x22, 0x10, 0xE2, 0x1C, 0xE2, 0x1C, 0x33, 0xF0, 0x19, 0xE0, 0x00, 0x00, // $
    0x0C, 0x30, 0x0C, 0x60, 0x00, 0xC0, 0x01, 0x80, 0x03, 0x00, 0x06, 0x30, 0x0C, 0x30, 0x00, 0x00, // %
    0x01, 0xE0, 0x1B, 0xF0, 0x3E, 0x10, 0x27, 0x10, 0x3D, 0xE0, 0x1B, 0xF0, 0x02, 0x10, 0x00, 0x00, // &
    0x00, 0x00, 0x08, 0x00, 0x78, 0x00, 0x70, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // '
    0x00, 0x00, 0x00, 0x00, 0x0F, 0xC0, 0x1F, 0xE0, 0x30, 0x30, 0x20, 0x10, 0x00, 0x00, 0x00, 0x00, // (
    0x00, 0x00, 0x00, 0x00, 0x20, 0x10, 0x30, 0x30, 0x1F, 0xE0, 0x0F, 0xC0, 0x00, 0x00, 0x00, 0x00, // )
    0x01, 0x00, 0x05, 0x40, 0x07, 0xC0, 0x03, 0x80, 0x03, 0x80, 0x07, 0xC0, 0x05, 0x40, 0x01, 0x00, // *
    0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x07, 0xC0, 0x07, 0xC0, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, // +
    0x00, 0x00, 0x00, 0x00, 0x00, 0x08, 0x00, 0x78, 0x00, 0x70, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ,
    0x01, 0x00, 0x01, 0x00, 0x01, 0x00, 0x01, 0x00, 0x01, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, // -
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x30, 0x00, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // .
    0x00, 0x30, 0x00, 0x60, 0x00, 0xC0, 0x01, 0x80, 0x03, 0x00, 0x06, 0x00, 0x0C, 0x00, 0x00, 0x00, // /
    0x0F, 0xC0, 0x1F, 0xE0, 0x30, 0x30, 0x23, 0x10, 0x30, 0x30, 0x1F, 0xE0, 0x0F, 0xC0, 0x00, 0x00, // 0
    0x00, 0x00, 0x08, 0x10, 0x18, 0x10, 0x3F, 0xF0, 0x3F, 0xF0, 0x00, 0x10, 0x00, 0x10, 0x00, 0x00, // 1
    0x10, 0x70, 0x30, 0xF0, 0x21, 0x90, 0x23, 0x10, 0x26, 0x10, 0x3C, 0x30, 0x18, 0x30, 0x00, 0x00, // 2
    0x10, 0x20, 0x30, 0x30, 0x22, 0x10, 0x22, 0x10, 0x22, 0x10, 0x3F, 0xF0, 0x1D, 0xE0, 0x00, 0x00, // 3
    0x03, 0x00, 0x07, 0x00, 0x0D, 0x00, 0x19, 0x10, 0x3F, 0xF0, 0x3F, 0xF0, 0x01, 0x10, 0x00, 0x00, // 4
    0x3E, 0x20, 0x3E, 0x30, 0x22, 0x10, 0x22, 0x10, 0x22, 0x10, 0x23, 0xF0, 0x21, 0xE0, 0x00, 0x00, // 5
    0x0F, 0xE0, 0x1F, 0xF0, 0x32, 0x10, 0x22, 0x10, 0x22, 0x10, 0x03, 0xF0, 0x01, 0xE0, 0x00, 0x00, // 6
    0x30, 0x00, 0x30, 0x00, 0x20, 0xF0, 0x21, 0xF0, 0x23, 0x00, 0x3E, 0x00, 0x3C, 0x00, 0x00, 0x00, // 7
    0x1D, 0xE0, 0x3F, 0xF0, 0x22, 0x10, 0x22, 0x10, 0x22, 0x10, 0x3F, 0xF0, 0x1D, 0xE0, 0x00, 0x00, // 8
    0x1C, 0x00, 0x3E, 0x10, 0x22, 0x10, 0x22, 0x10, 0x22, 0x30, 0x3F, 0xE0, 0x1F, 0xC0, 0x00, 0x00, // 9
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x60, 0x0C, 0x60, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // :
    0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x0C, 0x70, 0x0C, 0x60, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ;
    0x00, 0x00, 0x01, 0x00, 0x03, 0x80, 0x06, 0xC0, 0x0C, 0x60, 0x18, 0x30, 0x10, 0x10, 0x00, 0x00, // <
    0x00, 0x00, 0x04, 0x80, 0x04, 0x80, 0x04, 0x80, 0x04, 0x80, 0x04, 0x80, 0x04, 0x80, 0x00, 0x00, // =
    0x00, 0x00, 0x10, 0x10, 0x18, 0x30, 0x0C, 0x60, 0x06, 0xC0, 0x03, 0x80, 0x01, 0x00, 0x00, 0x00, // >
    0x18, 0x00, 0x38, 0x00, 0x20, 0x00, 0x23, 0xB0, 0x27, 0xB0, 0x3C, 0x00, 0x18, 0x00, 0x00, 0x00, // ?
    0x0F, 0xE0, 0x1F, 0xF0, 0x10, 0x10, 0x13, 0xD0, 0x13, 0xD0, 0x1F, 0xD0, 0x0F, 0x80, 0x00, 0x00, // @
    0x07, 0xF0, 0x0F, 0xF0, 0x19, 0x00, 0x31, 0x00, 0x19, 0x00, 0x0F, 0xF0, 0x07, 0xF0, 0x00, 0x00, // A
    0x20, 0x10, 0x3F, 0xF0, 0x3F, 0xF0, 0x22, 0x10, 0x22, 0x10, 0x3F, 0xF0, 0x1D, 0xE0, 0x00, 0x00, // B
    0x0F, 0xC0, 0x1F, 0xE0, 0x30, 0x30, 0x20, 0x10, 0x20, 0x10, 0x30, 0x30, 0x18, 0x60, 0x00, 0x00, // C
    0x20, 0x10, 0x3F, 0xF0, 0x3F, 0xF0, 0x20, 0x10, 0x30, 0x30, 0x1F, 0xE0, 0x0F, 0xC0, 0x00, 0x00, // D
    0x20, 0x10, 0x3F, 0xF0, 0x3F, 0xF0, 0x22, 0x10, 0x27, 0x10, 0x30, 0x30, 0x38, 0x70, 0x00, 0x00, // E
    0x20, 0x10, 0x3F, 0xF0, 0x3F, 0xF0, 0x22, 0x10, 0x27, 0x00, 0x30, 0x00, 0x38, 0x00, 0x00, 0x00, // F
    0x0F, 0xC0, 0x1F, 0xE0, 0x30, 0x30, 0x21, 0x10, 0x21, 0x10, 0x31, 0xE0, 0x19, 0xF0, 0x00, 0x00, // G
    0x3F, 0xF0, 0x3F, 0xF0, 0x02, 0x00, 0x02, 0x00, 0x02, 0x00, 0x3F, 0xF0, 0x3F, 0xF0, 0x00, 0x00, // H
    0x00, 0x00, 0x00, 0x00, 0x20, 0x10, 0x3F, 0xF0, 0x3F, 0xF0, 0x20, 0x10, 0x00, 0x00, 0x00, 0x00, // I
    0x00, 0xE0, 0x00, 0xF0, 0x00, 0x10, 0x20, 0x10, 0x3F, 0xF0, 0x3F, 0xE0, 0x20, 0x00, 0x00, 0x00, // J
    0x20, 0x10, 0x3F, 0xF0, 0x3F, 0xF0, 0x03, 0x00, 0x07, 0x80, 0x3C, 0xF0, 0x38, 0x70, 0x00, 0x00, // K
    0x20, 0x10, 0x3F, 0xF0, 0x3F, 0xF0, 0x20, 0x10, 0x00, 0x10, 0x00, 0x30, 0x00, 0x70, 0x00, 0x00, // L
    0x3F, 0xF0, 0x3F, 0xF0, 0x1C, 0x00, 0x0E, 0x00, 0x1C, 0x00, 0x3F, 0xF0, 0x3F, 0xF0, 0x00, 0x00, // M
    0x3F, 0xF0, 0x3F, 0xF0, 0x1C, 0x00, 0x0E, 0x00, 0x07, 0x00, 0x3F, 0xF0, 0x3F, 0xF0, 0x00, 0x00, // N
    0x1F, 0xE0, 0x3F, 0xF0, 0x20, 0x10, 0x20, 0x10, 0x20, 0x10, 0x3F, 0xF0, 0x1F, 0xE0, 0x00, 0x00, // O
    0x20, 0x10, 0x3F, 0xF0, 0x3F, 0xF0, 0x22, 0x10, 0x22, 0x00, 0x3E, 0x00, 0x1C, 0x00, 0x00, 0x00, // P
    0x1F, 0xE0, 0x3F, 0xF0, 0x20, 0x10, 0x20, 0x70, 0x20, 0x3C, 0x3F, 0xFC, 0x1F, 0xE4, 0x00, 0x00, // Q
    0x20, 0x10, 0x3F, 0xF0, 0x3F, 0xF0, 0x22, 0x00, 0x23, 0x00, 0x3F, 0xF0, 0x1C, 0xF0, 0x00, 0x00, // R
    0x18, 0x60, 0x3C, 0x70, 0x26, 0x10, 0x22, 0x10, 0x23, 0x10, 0x39, 0xF0, 0x18, 0xE0, 0x00, 0x00, // S
    0x00, 0x00, 0x38, 0x00, 0x30, 0x10, 0x3F, 0xF0, 0x3F, 0xF0, 0x30, 0x10, 0x38, 0x00, 0x00, 0x00, // T
    0x3F, 0xE0, 0x3F, 0xF0, 0x00, 0x10, 0x00, 0x10, 0x00, 0x10, 0x3F, 0xF0, 0x3F, 0xE0, 0x00, 0x00, // U
    0x3F, 0x80, 0x3F, 0xC0, 0x00, 0x60, 0x00, 0x30, 0x00, 0x60, 0x3F, 0xC0, 0x3F, 0x80, 0x00, 0x00, // V
    0x3F, 0xE0, 0x3F, 0xF0, 0x00, 0x70, 0x03, 0xC0, 0x00, 0x70, 0x3F, 0xF0, 0x3F, 0xE0, 0x00, 0x00, // W
    0x30, 0x30, 0x3C, 0xF0, 0x0F, 0xC0, 0x07, 0x80, 0x0F, 0xC0, 0x3C, 0xF0, 0x30, 0x30, 0x00, 0x00, // X
    0x00, 0x00, 0x3C, 0x00, 0x3E, 0x10, 0x03, 0xF0, 0x03, 0xF0, 0x3E, 0x10, 0x3C, 0x00, 0x00, 0x00, // Y
    0x38, 0x70, 0x30, 0xF0, 0x21, 0x90, 0x23, 0x10, 0x26, 0x10, 0x3C, 0x30, 0x38, 0x70, 0x00, 0x00, // Z
    0x00, 0x00, 0x00, 0x00, 0x3F, 0xF0, 0x3F, 0xF0, 0x20, 0x10, 0x20, 0x10, 0x00, 0x00, 0x00, 0x00, // [
    0x18, 0x00, 0x0C, 0x00, 0x06, 0x00, 0x03, 0x00, 0x01, 0x80, 0x00, 0xC0, 0x00, 0x60, 0x00, 0x00, // backslash
    0x00, 0x00, 0x00, 0x00, 0x20, 0x10, 0x20, 0x10, 0x3F, 0xF0, 0x3F, 0xF0, 0x00, 0x00, 0x00, 0x00, // ]
    0x10, 0x00, 0x30, 0x00, 0x60, 0x00, 0xC0, 0x00, 0x60, 0x00, 0x30, 0x00, 0x10, 0x00, 0x00, 0x00, // ^
    0x00, 0x04, 0x00, 0x04, 0x00, 0x04, 0x00, 0x04, 0x00, 0x04, 0x00, 0x04, 0x00, 0x04, 0x00, 0x04, // _
    0x00, 0x00, 0x00, 0x00, 0x40, 0x00, 0x60, 0x00, 0x30, 0x00, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, // `
    0x00, 0xE0, 0x05, 0xF0, 0x05, 0x10, 0x05, 0x10, 0x07, 0xE0, 0x03, 0xF0, 0x00, 0x10, 0x00, 0x00, // a
    0x20, 0x00, 0x3F, 0xF0, 0x3F, 0xF0, 0x04, 0x10, 0x06, 0x10, 0x03, 0xF0, 0x01, 0xE0, 0x00, 0x00, // b
    0x03, 0xE0, 0x07, 0xF0, 0x04, 0x10, 0x04, 0x10, 0x04, 0x10, 0x06, 0x30, 0x02, 0x20, 0x00, 0x00, // c
    0x01, 0xE0, 0x03, 0xF0, 0x06, 0x10, 0x24, 0x10, 0x3F, 0xE0, 0x3F, 0xF0, 0x00, 0x10, 0x00, 0x00, // d
    0x03, 0xE0, 0x07, 0xF0, 0x05, 0x10, 0x05, 0x10, 0x05, 0x10, 0x07, 0x30, 0x03, 0x20, 0x00, 0x00, // e
    0x00, 0x00, 0x02, 0x10, 0x1F, 0xF0, 0x3F, 0xF0, 0x22, 0x10, 0x30, 0x00, 0x18, 0x00, 0x00, 0x00, // f
    0x03, 0xE4, 0x07, 0xF6, 0x04, 0x12, 0x04, 0x12, 0x03, 0xFE, 0x07, 0xFC, 0x04, 0x00, 0x00, 0x00, // g
    0x20, 0x10, 0x3F, 0xF0, 0x3F, 0xF0, 0x02, 0x00, 0x04, 0x00, 0x07, 0xF0, 0x03, 0xF0, 0x00, 0x00, // h
    0x00, 0x00, 0x00, 0x00, 0x04, 0x10, 0x37, 0xF0, 0x37, 0xF0, 0x00, 0x10, 0x00, 0x00, 0x00, 0x00, // i
    0x00, 0x00, 0x00, 0x0C, 0x00, 0x0E, 0x00, 0x02, 0x04, 0x02, 0x37, 0xFE, 0x37, 0xFC, 0x00, 0x00, // j
    0x20, 0x10, 0x3F, 0xF0, 0x3F, 0xF0, 0x01, 0x80, 0x03, 0xC0, 0x06, 0x70, 0x04, 0x30, 0x00, 0x00, // k
    0x00, 0x00, 0x00, 0x00, 0x20, 0x10, 0x3F, 0xF0, 0x3F, 0xF0, 0x00, 0x10, 0x00, 0x00, 0x00, 0x00, // l
    0x07, 0xF0, 0x07, 0xF0, 0x06, 0x00, 0x03, 0xE0, 0x06, 0x00, 0x07, 0xF0, 0x03, 0xF0, 0x00, 0x00, // m
    0x04, 0x00, 0x07, 0xF0, 0x03, 0xF0, 0x04, 0x00, 0x04, 0x00, 0x07, 0xF0, 0x03, 0xF0, 0x00, 0x00, // n
    0x03, 0xE0, 0x07, 0xF0, 0x04, 0x10, 0x04, 0x10, 0x04, 0x10, 0x07, 0xF0, 0x03, 0xE0, 0x00, 0x00, // o
    0x04, 0x02, 0x07, 0xFE, 0x03, 0xFE, 0x04, 0x12, 0x04, 0x10, 0x07, 0xF0, 0x03, 0xE0, 0x00, 0x00, // p
    0x03, 0xE0, 0x07, 0xF0, 0x04, 0x10, 0x04, 0x12, 0x03, 0xFE, 0x07, 0xFE, 0x04, 0x02, 0x00, 0x00, // q
    0x04, 0x10, 0x07, 0xF0, 0x03, 0xF0, 0x06, 0x10, 0x04, 0x00, 0x07, 0x00, 0x03, 0x00, 0x00, 0x00, // r
    0x02, 0x20, 0x07, 0x30, 0x05, 0x90, 0x04, 0x90, 0x04, 0xD0, 0x06, 0x70, 0x02, 0x20, 0x00, 0x00, // s
    0x04, 0x00, 0x04, 0x00, 0x1F, 0xE0, 0x3F, 0xF0, 0x04, 0x10, 0x04, 0x30, 0x00, 0x20, 0x00, 0x00, // t
    0x07, 0xE0, 0x07, 0xF0, 0x00, 0x10, 0x00, 0x10, 0x07, 0xE0, 0x07, 0xF0, 0x00, 0x10, 0x00, 0x00, // u
    0x00, 0x00, 0x07, 0xC0, 0x07, 0xE0, 0x00, 0x30, 0x00, 0x30, 0x07, 0xE0, 0x07, 0xC0, 0x00, 0x00, // v
    0x07, 0xE0, 0x07, 0xF0, 0x00, 0x30, 0x01, 0xE0, 0x00, 0x30, 0x07, 0xF0, 0x07, 0xE0, 0x00, 0x00, // w
    0x04, 0x10, 0x06, 0x30, 0x03, 0xE0, 0x01, 0xC0, 0x03, 0xE0, 0x06, 0x30, 0x04, 0x10, 0x00, 0x00, // x
    0x07, 0xE2, 0x07, 0xF2, 0x00, 0x12, 0x00, 0x12, 0x00, 0x16, 0x07, 0xFC, 0x07, 0xF8, 0x00, 0x00, // y
    0x06, 0x30, 0x06, 0x70, 0x04, 0xD0, 0x05, 0x90, 0x07, 0x10, 0x06, 0x30, 0x04, 0x30, 0x00, 0x00, // z
    0x00, 0x00, 0x02, 0x00, 0x02, 0x00, 0x1F, 0xE0, 0x3D, 0xF0, 0x20, 0x10, 0x20, 0x10, 0x00, 0x00, // {
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3D, 0xF0, 0x3D, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // |
    0x00, 0x00, 0x20, 0x10, 0x20, 0x10, 0x3D, 0xF0, 0x1F, 0xE0, 0x02, 0x00, 0x02, 0x00, 0x00, 0x00, // }
    0x10, 0x00, 0x30, 0x00, 0x20, 0x00, 0x30, 0x00, 0x10, 0x00, 0x30, 0x00, 0x20, 0x00, 0x00, 0x00, // ~
];
