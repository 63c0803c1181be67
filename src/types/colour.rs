//! Colour type and packing.

use std::fmt;

/// An RGBA colour value.
///
/// Packs to a `u32` as `0xRRGGBBAA`.
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

    /// Unpack a colour from a `0xRRGGBBAA` value.
    pub const fn from_u32(packed: u32) -> Self {
        Self {
            r: (packed >> 24) as u8,
            g: (packed >> 16) as u8,
            b: (packed >> 8) as u8,
            a: packed as u8,
        }
    }

    /// Pack into a `0xRRGGBBAA` value.
    pub const fn to_u32(self) -> u32 {
        (self.r as u32) << 24 | (self.g as u32) << 16 | (self.b as u32) << 8 | self.a as u32
    }

    /// Create a colour from normalized float components.
    ///
    /// Each component is scaled by 255 and truncated toward zero, then only
    /// the low 8 bits are kept. Nothing is rounded or clamped, so values
    /// outside `0.0..=1.0` wrap: `1.5` becomes 126 and `-0.5` becomes 129.
    pub fn from_f32(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::new(wrap_unit(r), wrap_unit(g), wrap_unit(b), wrap_unit(a))
    }

    /// Copy with the red component replaced.
    pub const fn with_r(self, r: u8) -> Self {
        Self { r, ..self }
    }

    /// Copy with the green component replaced.
    pub const fn with_g(self, g: u8) -> Self {
        Self { g, ..self }
    }

    /// Copy with the blue component replaced.
    pub const fn with_b(self, b: u8) -> Self {
        Self { b, ..self }
    }

    /// Copy with the alpha component replaced.
    pub const fn with_a(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Convert to RGBA tuple.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Red.
    pub const RED: Self = Self::rgb(255, 0, 0);

    /// Green.
    pub const GREEN: Self = Self::rgb(0, 255, 0);

    /// Blue.
    pub const BLUE: Self = Self::rgb(0, 0, 255);
}

impl From<[u8; 4]> for Colour {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Scale a unit float to a byte, truncating and wrapping.
fn wrap_unit(value: f32) -> u8 {
    // f32 -> i32 truncates toward zero; i32 -> u8 keeps the low byte.
    (value * 255.0) as i32 as u8
}
