#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Colour = Colour { r: 0, g: 0, b: 0 };

    /// Builds a colour from a packed `0xRRGGBB` value. Bits above the low 24 are ignored.
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex & 0xff0000) >> 16) as u8,
            g: ((hex & 0x00ff00) >> 8) as u8,
            b: (hex & 0x0000ff) as u8,
        }
    }
}
