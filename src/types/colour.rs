//! Colour type, hex encoding and luminosity.

use std::fmt;
use std::str::FromStr;

use palette::{LinSrgb, Srgb};

use crate::error::{Result, TessError};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Magenta (used for missing/error placeholders).
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RRGGBB` (6 digits)
    /// - `#RRGGBBAA` (8 digits)
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if !hex.is_ascii() {
            return Err(invalid_hex(s));
        }

        match hex.len() {
            3 => {
                let mut digits = [0u8; 3];
                for (slot, c) in digits.iter_mut().zip(hex.chars()) {
                    *slot = parse_hex_digit(c)?;
                }
                let [r, g, b] = digits;
                Ok(Self::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 => Ok(Self::rgb(
                parse_hex_byte(&hex[0..2])?,
                parse_hex_byte(&hex[2..4])?,
                parse_hex_byte(&hex[4..6])?,
            )),
            8 => Ok(Self::new(
                parse_hex_byte(&hex[0..2])?,
                parse_hex_byte(&hex[2..4])?,
                parse_hex_byte(&hex[4..6])?,
                parse_hex_byte(&hex[6..8])?,
            )),
            _ => Err(invalid_hex(s)),
        }
    }

    /// Encode the RGB channels as `#RRGGBB`, ignoring alpha.
    pub fn to_hex_rgb(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// RGB channels scaled to [0, 1].
    pub fn to_unit_rgb(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// Relative luminance in [0, 1].
    ///
    /// Channels are linearized from sRGB before applying the Rec. 709
    /// weights, so equal steps in the result track perceived brightness.
    pub fn luminosity(self) -> f64 {
        let [r, g, b] = self.to_unit_rgb();
        let linear: LinSrgb = Srgb::new(r, g, b).into_linear();
        let lum = 0.2126 * linear.red + 0.7152 * linear.green + 0.0722 * linear.blue;
        f64::from(lum).clamp(0.0, 1.0)
    }

    /// Squared Euclidean distance between the RGB channels of two colours.
    pub fn distance_squared(self, other: Colour) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }
}

impl FromStr for Colour {
    type Err = TessError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "{}", self.to_hex_rgb())
        } else {
            write!(f, "{}{:02X}", self.to_hex_rgb(), self.a)
        }
    }
}

fn invalid_hex(s: &str) -> TessError {
    TessError::Parse {
        message: format!("Invalid hex colour: {}", s),
        help: Some("Use #RGB, #RRGGBB, or #RRGGBBAA format".to_string()),
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| TessError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| TessError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_6digit() {
        let c = Colour::from_hex("#336699").unwrap();
        assert_eq!(c, Colour::rgb(0x33, 0x66, 0x99));

        let c = Colour::from_hex("#1a1a2e").unwrap();
        assert_eq!(c, Colour::rgb(0x1a, 0x1a, 0x2e));
    }

    #[test]
    fn test_from_hex_3digit() {
        let c = Colour::from_hex("#ABC").unwrap();
        assert_eq!(c, Colour::rgb(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn test_from_hex_8digit() {
        let c = Colour::from_hex("#FF000080").unwrap();
        assert_eq!(c, Colour::new(255, 0, 0, 128));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Colour::from_hex("#GGG").is_err());
        assert!(Colour::from_hex("#12345").is_err());
        assert!(Colour::from_hex("").is_err());
        assert!(Colour::from_hex("#ééé").is_err());
    }

    #[test]
    fn test_hex_round_trip() {
        let c = Colour::rgb(10, 5, 250);
        assert_eq!(c.to_hex_rgb(), "#0A05FA");
        assert_eq!(Colour::from_hex(&c.to_hex_rgb()).unwrap(), c);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Colour::rgb(255, 0, 0)), "#FF0000");
        assert_eq!(format!("{}", Colour::new(255, 0, 0, 128)), "#FF000080");
    }

    #[test]
    fn test_luminosity_bounds() {
        assert_eq!(Colour::BLACK.luminosity(), 0.0);
        assert!((Colour::WHITE.luminosity() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_luminosity_monotonic_in_grey() {
        let mut last = -1.0;
        for v in (0..=255).step_by(5) {
            let lum = Colour::rgb(v, v, v).luminosity();
            assert!(lum >= last, "luminosity dropped at {}", v);
            last = lum;
        }
    }

    #[test]
    fn test_luminosity_green_brighter_than_blue() {
        assert!(Colour::rgb(0, 255, 0).luminosity() > Colour::rgb(0, 0, 255).luminosity());
    }

    #[test]
    fn test_distance_squared() {
        let a = Colour::rgb(10, 5, 250);
        assert_eq!(a.distance_squared(a), 0);
        assert_eq!(a.distance_squared(Colour::rgb(0, 0, 255)), 100 + 25 + 25);
    }
}
