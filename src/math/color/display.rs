use serde::{Deserialize, Serialize};

/// Quantized 8 bit per channel color, ready for a framebuffer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplayColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl DisplayColor {
    pub const fn new(r: u8, g: u8, b: u8) -> DisplayColor {
        DisplayColor { r, g, b }
    }
    pub const BLACK: DisplayColor = DisplayColor::new(0, 0, 0);

    /// Packed as `0x00RRGGBB`.
    pub const fn to_u32(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<DisplayColor> for [u8; 3] {
    fn from(c: DisplayColor) -> [u8; 3] {
        [c.r, c.g, c.b]
    }
}
