use crate::error::RenderError;

/// An RGB ink colour. Components range from 0.0 to 1.0.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Colour {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Colour {
    /// Create a new colour. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour { r, g, b }
    }

    /// Create a new colour. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Parse a colour from an `#rrggbb` string, as supplied by colour
    /// pickers and swatch buttons. The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Result<Colour, RenderError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(RenderError::InvalidColour(hex.to_string()));
        }
        let component = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| RenderError::InvalidColour(hex.to_string()))
        };
        Ok(Colour::new_rgb_bytes(
            component(0)?,
            component(2)?,
            component(4)?,
        ))
    }

    /// Convert to an opaque [image::Rgba] pixel for compositing
    pub fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba([
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
            255,
        ])
    }
}

impl<T: Into<f32>> From<(T, T, T)> for Colour {
    fn from(c: (T, T, T)) -> Self {
        Colour {
            r: c.0.into(),
            g: c.1.into(),
            b: c.2.into(),
        }
    }
}

impl<T: Into<f32>> From<[T; 3]> for Colour {
    fn from(c: [T; 3]) -> Self {
        let [r, g, b] = c;
        Colour {
            r: r.into(),
            g: g.into(),
            b: b.into(),
        }
    }
}

/// A list of pre-defined ink colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };
    pub const WHITE: Colour = Colour {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };
    /// A dark ballpoint blue
    pub const BLUE_INK: Colour = Colour {
        r: 0.102,
        g: 0.137,
        b: 0.494,
    };
    /// A marking-pen red
    pub const RED_INK: Colour = Colour {
        r: 0.698,
        g: 0.132,
        b: 0.132,
    };
    /// A fountain-pen green
    pub const GREEN_INK: Colour = Colour {
        r: 0.110,
        g: 0.369,
        b: 0.208,
    };
    /// A warm off-white writing paper colour
    pub const PAPER_CREAM: Colour = Colour {
        r: 0.992,
        g: 0.984,
        b: 0.953,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colours() {
        assert_eq!(Colour::from_hex("#000000").unwrap(), colours::BLACK);
        assert_eq!(Colour::from_hex("ffffff").unwrap(), colours::WHITE);
        let c = Colour::from_hex("#1a2b3c").unwrap();
        assert_eq!(c, Colour::new_rgb_bytes(0x1a, 0x2b, 0x3c));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(Colour::from_hex("#fff").is_err());
        assert!(Colour::from_hex("#gggggg").is_err());
        assert!(Colour::from_hex("").is_err());
    }

    #[test]
    fn converts_to_rgba() {
        let px = Colour::new_rgb_bytes(12, 34, 56).to_rgba();
        assert_eq!(px, image::Rgba([12, 34, 56, 255]));
    }
}
