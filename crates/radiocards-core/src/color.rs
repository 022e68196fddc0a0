#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    pub const BLACK: Color = Color(0, 0, 0, 255);
    pub const WHITE: Color = Color(255, 255, 255, 255);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color(r, g, b, 255)
    }
    pub fn from_hex(hex: &str) -> Self {
        let s = hex.trim_start_matches('#');
        let channel = |i: usize, fallback: u8| {
            s.get(i..i + 2)
                .and_then(|c| u8::from_str_radix(c, 16).ok())
                .unwrap_or(fallback)
        };
        match s.len() {
            6 => Color(channel(0, 0), channel(2, 0), channel(4, 0), 255),
            8 => Color(channel(0, 0), channel(2, 0), channel(4, 0), channel(6, 255)),
            _ => Color::BLACK,
        }
    }
    pub const fn with_alpha(self, a: u8) -> Self {
        Color(self.0, self.1, self.2, a)
    }

    /// `#rrggbb` for opaque colors, `#rrggbbaa` otherwise.
    pub fn to_hex(self) -> String {
        if self.3 == 255 {
            format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.0, self.1, self.2, self.3)
        }
    }
}

/// Tailwind's neutral and indigo ramps, the only colors the cards use.
pub mod palette {
    use super::Color;

    pub const NEUTRAL_50: Color = Color::from_rgb(0xfa, 0xfa, 0xfa);
    pub const NEUTRAL_100: Color = Color::from_rgb(0xf5, 0xf5, 0xf5);
    pub const NEUTRAL_200: Color = Color::from_rgb(0xe5, 0xe5, 0xe5);
    pub const NEUTRAL_400: Color = Color::from_rgb(0xa3, 0xa3, 0xa3);
    pub const NEUTRAL_900: Color = Color::from_rgb(0x17, 0x17, 0x17);
    pub const INDIGO_600: Color = Color::from_rgb(0x4f, 0x46, 0xe5);
    /// Base hue of the focus ring, rgb(68, 76, 231).
    pub const FOCUS: Color = Color::from_rgb(68, 76, 231);
}
