//! Color values for floors, walls and furniture
//!
//! Stored as 8-bit RGB and serialized as `#rrggbb` strings so saved designs
//! stay readable. Tint helpers feed the furniture mesh builders, which derive
//! per-part shades from one base color.

use macroquad::prelude::Color;
use serde::{Deserialize, Serialize};

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` (or `rrggbb`) hex string
    pub fn from_hex(hex: &str) -> Option<Rgb> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 {
            return None;
        }
        let value = u32::from_str_radix(hex, 16).ok()?;
        Some(Rgb {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Blend towards white; `amount` in [0, 1]
    pub fn lighten(self, amount: f32) -> Rgb {
        let lift = |c: u8| -> u8 {
            let c = c as f32;
            (c + (255.0 - c) * amount).clamp(0.0, 255.0) as u8
        };
        Rgb::new(lift(self.r), lift(self.g), lift(self.b))
    }

    /// Blend towards black; `amount` in [0, 1]
    pub fn darken(self, amount: f32) -> Rgb {
        let drop = |c: u8| -> u8 { ((c as f32) * (1.0 - amount)).clamp(0.0, 255.0) as u8 };
        Rgb::new(drop(self.r), drop(self.g), drop(self.b))
    }

    /// Per-channel multiply, the tinting primitive the mesh builders use
    pub fn scaled(self, factor: f32) -> Rgb {
        let mul = |c: u8| -> u8 { ((c as f32) * factor).clamp(0.0, 255.0) as u8 };
        Rgb::new(mul(self.r), mul(self.g), mul(self.b))
    }

    pub fn complementary(self) -> Rgb {
        Rgb::new(255 - self.r, 255 - self.g, 255 - self.b)
    }

    /// Convert to a macroquad draw color with the given alpha
    pub fn to_draw_color(self, alpha: f32) -> Color {
        Color::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            alpha,
        )
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Rgb::from_hex(&s).ok_or_else(|| format!("invalid color: {:?}", s))
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> String {
        c.to_hex()
    }
}

/// How to derive a scheme from a base color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeKind {
    Complementary,
    Monochromatic,
    Analogous,
}

/// Generate an ordered preview palette from a base color
pub fn color_scheme(base: Rgb, kind: SchemeKind) -> Vec<Rgb> {
    let mut scheme = vec![base];
    match kind {
        SchemeKind::Complementary => scheme.push(base.complementary()),
        SchemeKind::Monochromatic => {
            scheme.push(base.lighten(0.3));
            scheme.push(base.darken(0.3));
        }
        SchemeKind::Analogous => {
            scheme.push(base.lighten(0.2));
            scheme.push(base.darken(0.2));
        }
    }
    scheme
}

/// Named room palettes offered by the setup UI
pub fn room_palette(name: &str) -> Option<&'static [Rgb]> {
    const MODERN: [Rgb; 4] = [
        Rgb::new(0xff, 0xff, 0xff),
        Rgb::new(0x00, 0x00, 0x00),
        Rgb::new(0xee, 0xee, 0xee),
        Rgb::new(0x33, 0x33, 0x33),
    ];
    const WARM: [Rgb; 4] = [
        Rgb::new(0xf5, 0xe1, 0xda),
        Rgb::new(0xe8, 0xc4, 0xa2),
        Rgb::new(0xa6, 0x7f, 0x5d),
        Rgb::new(0x6b, 0x42, 0x26),
    ];
    const COOL: [Rgb; 4] = [
        Rgb::new(0xe6, 0xf4, 0xf1),
        Rgb::new(0xbf, 0xe3, 0xde),
        Rgb::new(0x7a, 0xbf, 0xb3),
        Rgb::new(0x37, 0x86, 0x7a),
    ];
    const VIBRANT: [Rgb; 4] = [
        Rgb::new(0xf4, 0xed, 0xea),
        Rgb::new(0xea, 0xc4, 0x35),
        Rgb::new(0x34, 0x59, 0x95),
        Rgb::new(0xfb, 0x4d, 0x3d),
    ];
    const MINIMAL: [Rgb; 4] = [
        Rgb::new(0xff, 0xff, 0xff),
        Rgb::new(0xee, 0xee, 0xee),
        Rgb::new(0xdd, 0xdd, 0xdd),
        Rgb::new(0xcc, 0xcc, 0xcc),
    ];

    match name {
        "modern" => Some(&MODERN),
        "warm" => Some(&WARM),
        "cool" => Some(&COOL),
        "vibrant" => Some(&VIBRANT),
        "minimal" => Some(&MINIMAL),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let c = Rgb::from_hex("#a97c50").unwrap();
        assert_eq!(c, Rgb::new(0xa9, 0x7c, 0x50));
        assert_eq!(c.to_hex(), "#a97c50");
    }

    #[test]
    fn test_hex_without_hash() {
        assert_eq!(Rgb::from_hex("ffffff"), Some(Rgb::new(255, 255, 255)));
    }

    #[test]
    fn test_hex_rejects_garbage() {
        assert!(Rgb::from_hex("#zzz").is_none());
        assert!(Rgb::from_hex("#12345").is_none());
    }

    #[test]
    fn test_lighten_darken_bounds() {
        let c = Rgb::new(100, 150, 200);
        let light = c.lighten(1.0);
        assert_eq!(light, Rgb::new(255, 255, 255));
        let dark = c.darken(1.0);
        assert_eq!(dark, Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_complementary() {
        assert_eq!(
            Rgb::new(255, 0, 128).complementary(),
            Rgb::new(0, 255, 127)
        );
    }

    #[test]
    fn test_scheme_sizes() {
        let base = Rgb::new(60, 90, 120);
        assert_eq!(color_scheme(base, SchemeKind::Complementary).len(), 2);
        assert_eq!(color_scheme(base, SchemeKind::Monochromatic).len(), 3);
        assert_eq!(color_scheme(base, SchemeKind::Analogous).len(), 3);
    }

    #[test]
    fn test_room_palettes_have_enough_entries() {
        for name in ["modern", "warm", "cool", "vibrant", "minimal"] {
            let palette = room_palette(name).unwrap();
            assert!(palette.len() >= 2);
        }
        assert!(room_palette("brutalist").is_none());
    }
}
