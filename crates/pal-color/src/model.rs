// SPDX-License-Identifier: MIT
//
//! Color value types shared by every layer of paletteai.
//!
//! - [`Rgb`]: 8-bit sRGB channels, the exact form stored in a hex string
//! - [`Hsl`]: integer hue/saturation/lightness, the form palettes are built in
//! - [`Color`]: a canonical `#rrggbb` string paired with its derived name
//!
//! None of them own shared state. Every value is produced fresh by a
//! conversion and handed to the caller.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::convert;
use crate::name::color_name;

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An 8-bit sRGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Canonical lowercase `#rrggbb` form.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to integer HSL.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        convert::rgb_to_hsl(self)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// Integer HSL: hue in [0, 360), saturation and lightness in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    /// Build an HSL value, wrapping the hue and capping `s`/`l` at 100.
    #[must_use]
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self {
            h: h % 360,
            s: if s > 100 { 100 } else { s },
            l: if l > 100 { 100 } else { l },
        }
    }

    /// Rotate the hue by `degrees`, wrapping in both directions.
    #[must_use]
    pub fn rotate(self, degrees: i32) -> Self {
        let h = (i32::from(self.h) + degrees).rem_euclid(360);
        Self {
            h: u16::try_from(h).unwrap_or(0),
            ..self
        }
    }

    /// Encode as a canonical hex string.
    #[must_use]
    pub fn to_hex(self) -> String {
        convert::hsl_to_hex(f64::from(self.h), f64::from(self.s), f64::from(self.l))
    }

    /// Whether the color carries too little saturation to have a hue name.
    #[inline]
    #[must_use]
    pub const fn is_achromatic(self) -> bool {
        self.s < 10
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// A palette entry: a hex string and the human-readable name derived from it.
///
/// The name is never ground truth. It is always recomputed from `hex`, so
/// two colors with the same hex always carry the same name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub hex: String,
    pub name: String,
}

impl Color {
    /// Parse and normalize `hex`, then attach its name.
    ///
    /// Returns `None` if `hex` is not a 3- or 6-digit hex color.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        convert::normalize_hex(hex).map(Self::named)
    }

    /// Pair an already-canonical hex string with its name.
    ///
    /// An invalid hex is kept verbatim and named `"Unknown"`.
    #[must_use]
    pub fn named(hex: String) -> Self {
        let name = color_name(&hex);
        Self { hex, name }
    }

    #[must_use]
    pub fn rgb(&self) -> Option<Rgb> {
        convert::hex_to_rgb(&self.hex)
    }

    #[must_use]
    pub fn hsl(&self) -> Option<Hsl> {
        convert::hex_to_hsl(&self.hex)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.hex, self.name)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
