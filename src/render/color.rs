//! RGB colors used by the annotation styles.

/// An opaque 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    pub const BLACK: Color = Color(0x000000);
    pub const WHITE: Color = Color(0xffffff);
    pub const GRAY: Color = Color(0xa0a0a4);

    /// Foreground of argument-name, default-value and inferred-type notes
    pub const NOTE_TEXT: Color = Color(0x9090b0);
    /// Background box behind argument-name, default-value and inferred-type notes
    pub const NOTE_BACKGROUND: Color = Color(0xf5f5f5);
    /// Fill of byte-grid cells occupied by a field
    pub const FIELD_FILL: Color = Color(0xa0b0ff);

    pub const fn from_rgb(rgb: u32) -> Self {
        Color(rgb & 0x00ff_ffff)
    }

    pub const fn rgb(self) -> u32 {
        self.0
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }
}
