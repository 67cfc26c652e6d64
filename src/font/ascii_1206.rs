/// 6x12 glyphs for `' '..='~'`, two bytes per column, MSB is the top row.
#[rustfmt::skip]
pub(crate) static ASCII_1206: [u8; 95 * 12] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // space
    0x00, 0x00, 0x00, 0x00, 0x3E, 0x80, 0x3E, 0x80, 0x00, 0x00, 0x00, 0x00, // !
    0x30, 0x00, 0x38, 0x00, 0x00, 0x00, 0x30, 0x00, 0x38, 0x00, 0x00, 0x00, // "
    0x0A, 0x00, 0x3F, 0x80, 0x3F, 0x80, 0x3F, 0x80, 0x3F, 0x80, 0x0A, 0x00, // #
    0x09, 0x00, 0x1D, 0x00, 0x35, 0x80, 0x35, 0x80, 0x17, 0x00, 0x12, 0x00, // $
    0x18, 0x80, 0x19, 0x80, 0x07, 0x00, 0x0C, 0x00, 0x19, 0x80, 0x11, 0x80, // %
    0x03, 0x00, 0x17, 0x80, 0x3E, 0x80, 0x3B, 0x00, 0x17, 0x80, 0x04, 0x80, // &
    0x00, 0x00, 0x08, 0x00, 0x38, 0x00, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00, // '
    0x00, 0x00, 0x0E, 0x00, 0x1F, 0x00, 0x31, 0x80, 0x20, 0x80, 0x00, 0x00, // (
    0x00, 0x00, 0x20, 0x80, 0x31, 0x80, 0x1F, 0x00, 0x0E, 0x00, 0x00, 0x00, // )
    0x04, 0x00, 0x15, 0x00, 0x1F, 0x00, 0x1F, 0x00, 0x15, 0x00, 0x04, 0x00, // *
    0x04, 0x00, 0x04, 0x00, 0x1F, 0x00, 0x1F, 0x00, 0x04, 0x00, 0x04, 0x00, // +
    0x00, 0x00, 0x00, 0x40, 0x01, 0xC0, 0x01, 0x80, 0x00, 0x00, 0x00, 0x00, // ,
    0x04, 0x00, 0x04, 0x00, 0x04, 0x00, 0x04, 0x00, 0x04, 0x00, 0x04, 0x00, // -
    0x00, 0x00, 0x00, 0x00, 0x01, 0x80, 0x01, 0x80, 0x00, 0x00, 0x00, 0x00, // .
    0x01, 0x80, 0x03, 0x00, 0x0E, 0x00, 0x18, 0x00, 0x30, 0x00, 0x20, 0x00, // /
    0x1F, 0x00, 0x3F, 0x80, 0x2E, 0x80, 0x38, 0x80, 0x3F, 0x80, 0x1F, 0x00, // 0
    0x00, 0x80, 0x10, 0x80, 0x3F, 0x80, 0x3F, 0x80, 0x00, 0x80, 0x00, 0x80, // 1
    0x13, 0x80, 0x37, 0x80, 0x24, 0x80, 0x24, 0x80, 0x3C, 0x80, 0x18, 0x80, // 2
    0x20, 0x80, 0x20, 0x80, 0x24, 0x80, 0x24, 0x80, 0x3F, 0x80, 0x1B, 0x00, // 3
    0x1E, 0x00, 0x1E, 0x00, 0x02, 0x00, 0x3F, 0x80, 0x3F, 0x80, 0x02, 0x00, // 4
    0x39, 0x00, 0x39, 0x80, 0x28, 0x80, 0x28, 0x80, 0x2F, 0x80, 0x27, 0x00, // 5
    0x1F, 0x00, 0x3F, 0x80, 0x24, 0x80, 0x24, 0x80, 0x27, 0x80, 0x03, 0x00, // 6
    0x20, 0x00, 0x20, 0x00, 0x23, 0x80, 0x27, 0x80, 0x3C, 0x00, 0x38, 0x00, // 7
    0x1B, 0x00, 0x3F, 0x80, 0x24, 0x80, 0x24, 0x80, 0x3F, 0x80, 0x1B, 0x00, // 8
    0x18, 0x00, 0x3C, 0x80, 0x24, 0x80, 0x24, 0x80, 0x3F, 0x80, 0x1F, 0x00, // 9
    0x00, 0x00, 0x00, 0x00, 0x19, 0x80, 0x19, 0x80, 0x00, 0x00, 0x00, 0x00, // :
    0x00, 0x00, 0x00, 0x40, 0x19, 0xC0, 0x19, 0x80, 0x00, 0x00, 0x00, 0x00, // ;
    0x04, 0x00, 0x0E, 0x00, 0x1B, 0x00, 0x31, 0x80, 0x20, 0x80, 0x00, 0x00, // <
    0x0A, 0x00, 0x0A, 0x00, 0x0A, 0x00, 0x0A, 0x00, 0x0A, 0x00, 0x0A, 0x00, // =
    0x20, 0x80, 0x31, 0x80, 0x1B, 0x00, 0x0E, 0x00, 0x04, 0x00, 0x00, 0x00, // >
    0x10, 0x00, 0x30, 0x00, 0x26, 0x80, 0x2E, 0x80, 0x38, 0x00, 0x10, 0x00, // ?
    0x1F, 0x00, 0x3F, 0x80, 0x2E, 0x80, 0x2E, 0x80, 0x3E, 0x80, 0x1E, 0x80, // @
    0x0F, 0x80, 0x1F, 0x80, 0x32, 0x00, 0x32, 0x00, 0x1F, 0x80, 0x0F, 0x80, // A
    0x3F, 0x80, 0x3F, 0x80, 0x24, 0x80, 0x24, 0x80, 0x3F, 0x80, 0x1B, 0x00, // B
    0x1F, 0x00, 0x3F, 0x80, 0x20, 0x80, 0x20, 0x80, 0x31, 0x80, 0x11, 0x00, // C
    0x3F, 0x80, 0x3F, 0x80, 0x20, 0x80, 0x31, 0x80, 0x1F, 0x00, 0x0E, 0x00, // D
    0x3F, 0x80, 0x3F, 0x80, 0x24, 0x80, 0x24, 0x80, 0x20, 0x80, 0x20, 0x80, // E
    0x3F, 0x80, 0x3F, 0x80, 0x24, 0x00, 0x24, 0x00, 0x20, 0x00, 0x20, 0x00, // F
    0x1F, 0x00, 0x3F, 0x80, 0x20, 0x80, 0x24, 0x80, 0x37, 0x80, 0x17, 0x00, // G
    0x3F, 0x80, 0x3F, 0x80, 0x04, 0x00, 0x04, 0x00, 0x3F, 0x80, 0x3F, 0x80, // H
    0x20, 0x80, 0x20, 0x80, 0x3F, 0x80, 0x3F, 0x80, 0x20, 0x80, 0x20, 0x80, // I
    0x03, 0x00, 0x03, 0x80, 0x00, 0x80, 0x00, 0x80, 0x3F, 0x80, 0x3F, 0x00, // J
    0x3F, 0x80, 0x3F, 0x80, 0x0E, 0x00, 0x1B, 0x00, 0x31, 0x80, 0x20, 0x80, // K
    0x3F, 0x80, 0x3F, 0x80, 0x00, 0x80, 0x00, 0x80, 0x00, 0x80, 0x00, 0x80, // L
    0x3F, 0x80, 0x3F, 0x80, 0x1C, 0x00, 0x18, 0x00, 0x3F, 0x80, 0x3F, 0x80, // M
    0x3F, 0x80, 0x3F, 0x80, 0x1C, 0x00, 0x06, 0x00, 0x3F, 0x80, 0x3F, 0x80, // N
    0x1F, 0x00, 0x3F, 0x80, 0x20, 0x80, 0x20, 0x80, 0x3F, 0x80, 0x1F, 0x00, // O
    0x3F, 0x80, 0x3F, 0x80, 0x24, 0x00, 0x24, 0x00, 0x3C, 0x00, 0x18, 0x00, // P
    0x1F, 0x00, 0x3F, 0x80, 0x23, 0x80, 0x21, 0x80, 0x3F, 0xC0, 0x1F, 0x40, // Q
    0x3F, 0x80, 0x3F, 0x80, 0x26, 0x00, 0x27, 0x00, 0x3D, 0x80, 0x18, 0x80, // R
    0x19, 0x00, 0x3D, 0x80, 0x24, 0x80, 0x24, 0x80, 0x37, 0x80, 0x13, 0x00, // S
    0x20, 0x00, 0x20, 0x00, 0x3F, 0x80, 0x3F, 0x80, 0x20, 0x00, 0x20, 0x00, // T
    0x3F, 0x00, 0x3F, 0x80, 0x00, 0x80, 0x00, 0x80, 0x3F, 0x80, 0x3F, 0x00, // U
    0x3C, 0x00, 0x3E, 0x00, 0x03, 0x80, 0x03, 0x00, 0x3E, 0x00, 0x3C, 0x00, // V
    0x3F, 0x80, 0x3F, 0x80, 0x07, 0x00, 0x03, 0x00, 0x3F, 0x80, 0x3F, 0x80, // W
    0x31, 0x80, 0x3B, 0x80, 0x0E, 0x00, 0x0E, 0x00, 0x3B, 0x80, 0x31, 0x80, // X
    0x38, 0x00, 0x3C, 0x00, 0x07, 0x80, 0x07, 0x80, 0x3C, 0x00, 0x38, 0x00, // Y
    0x20, 0x80, 0x21, 0x80, 0x27, 0x80, 0x2C, 0x80, 0x38, 0x80, 0x30, 0x80, // Z
    0x00, 0x00, 0x3F, 0x80, 0x3F, 0x80, 0x20, 0x80, 0x20, 0x80, 0x00, 0x00, // [
    0x20, 0x00, 0x30, 0x00, 0x1C, 0x00, 0x06, 0x00, 0x03, 0x00, 0x01, 0x80, // backslash
    0x00, 0x00, 0x20, 0x80, 0x20, 0x80, 0x3F, 0x80, 0x3F, 0x80, 0x00, 0x00, // ]
    0x04, 0x00, 0x0C, 0x00, 0x38, 0x00, 0x18, 0x00, 0x0C, 0x00, 0x04, 0x00, // ^
    0x00, 0x40, 0x00, 0x40, 0x00, 0x40, 0x00, 0x40, 0x00, 0x40, 0x00, 0x40, // _
    0x00, 0x00, 0x30, 0x00, 0x38, 0x00, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, // `
    0x01, 0x00, 0x0B, 0x80, 0x0A, 0x80, 0x0A, 0x80, 0x0F, 0x80, 0x07, 0x80, // a
    0x3F, 0x80, 0x3F, 0x80, 0x08, 0x80, 0x08, 0x80, 0x0F, 0x80, 0x07, 0x00, // b
    0x07, 0x00, 0x0F, 0x80, 0x08, 0x80, 0x08, 0x80, 0x0D, 0x80, 0x05, 0x00, // c
    0x07, 0x00, 0x0F, 0x80, 0x08, 0x80, 0x08, 0x80, 0x3F, 0x80, 0x3F, 0x80, // d
    0x07, 0x00, 0x0F, 0x80, 0x0A, 0x80, 0x0A, 0x80, 0x0E, 0x80, 0x06, 0x00, // e
    0x04, 0x00, 0x1F, 0x80, 0x3F, 0x80, 0x24, 0x00, 0x24, 0x00, 0x00, 0x00, // f
    0x06, 0x00, 0x0F, 0x40, 0x09, 0x40, 0x09, 0x40, 0x0F, 0xC0, 0x0F, 0x80, // g
    0x3F, 0x80, 0x3F, 0x80, 0x08, 0x00, 0x08, 0x00, 0x0F, 0x80, 0x07, 0x80, // h
    0x00, 0x00, 0x08, 0x80, 0x2F, 0x80, 0x2F, 0x80, 0x00, 0x80, 0x00, 0x00, // i
    0x00, 0x00, 0x00, 0x40, 0x08, 0x40, 0x2F, 0xC0, 0x2F, 0x80, 0x00, 0x00, // j
    0x3F, 0x80, 0x3F, 0x80, 0x02, 0x00, 0x07, 0x00, 0x0D, 0x80, 0x08, 0x80, // k
    0x00, 0x00, 0x20, 0x80, 0x3F, 0x80, 0x3F, 0x80, 0x00, 0x80, 0x00, 0x00, // l
    0x0F, 0x80, 0x0F, 0x80, 0x0E, 0x00, 0x0C, 0x00, 0x0F, 0x80, 0x07, 0x80, // m
    0x0F, 0x80, 0x0F, 0x80, 0x08, 0x00, 0x08, 0x00, 0x0F, 0x80, 0x07, 0x80, // n
    0x07, 0x00, 0x0F, 0x80, 0x08, 0x80, 0x08, 0x80, 0x0F, 0x80, 0x07, 0x00, // o
    0x0F, 0xC0, 0x0F, 0xC0, 0x09, 0x00, 0x09, 0x00, 0x0F, 0x00, 0x06, 0x00, // p
    0x06, 0x00, 0x0F, 0x00, 0x09, 0x00, 0x09, 0x00, 0x0F, 0xC0, 0x0F, 0xC0, // q
    0x0F, 0x80, 0x0F, 0x80, 0x0C, 0x00, 0x08, 0x00, 0x0C, 0x00, 0x04, 0x00, // r
    0x04, 0x80, 0x0E, 0x80, 0x0A, 0x80, 0x0A, 0x80, 0x0B, 0x80, 0x09, 0x00, // s
    0x08, 0x00, 0x3F, 0x00, 0x3F, 0x80, 0x08, 0x80, 0x08, 0x80, 0x00, 0x00, // t
    0x0F, 0x00, 0x0F, 0x80, 0x00, 0x80, 0x00, 0x80, 0x0F, 0x80, 0x0F, 0x80, // u
    0x0E, 0x00, 0x0F, 0x00, 0x01, 0x80, 0x01, 0x80, 0x0F, 0x00, 0x0E, 0x00, // v
    0x0F, 0x00, 0x0F, 0x80, 0x03, 0x80, 0x01, 0x80, 0x0F, 0x80, 0x0F, 0x00, // w
    0x08, 0x80, 0x0D, 0x80, 0x07, 0x00, 0x07, 0x00, 0x0D, 0x80, 0x08, 0x80, // x
    0x0E, 0x00, 0x0F, 0x40, 0x01, 0x40, 0x01, 0x40, 0x0F, 0xC0, 0x0F, 0x80, // y
    0x08, 0x80, 0x09, 0x80, 0x0B, 0x80, 0x0E, 0x80, 0x0C, 0x80, 0x08, 0x80, // z
    0x04, 0x00, 0x04, 0x00, 0x1F, 0x00, 0x3B, 0x80, 0x20, 0x80, 0x20, 0x80, // {
    0x00, 0x00, 0x00, 0x00, 0x3F, 0x80, 0x3F, 0x80, 0x00, 0x00, 0x00, 0x00, // |
    0x20, 0x80, 0x20, 0x80, 0x3B, 0x80, 0x1F, 0x00, 0x04, 0x00, 0x04, 0x00, // }
    0x10, 0x00, 0x20, 0x00, 0x30, 0x00, 0x10, 0x00, 0x10, 0x00, 0x20, 0x00, // ~
];
