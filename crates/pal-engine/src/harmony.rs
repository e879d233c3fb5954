// SPDX-License-Identifier: MIT
//
//! Harmony rules: five related colors from one seed.
//!
//! Each rule rotates the seed's hue by fixed angles and fills the remaining
//! slots with lighter, less saturated tints of the rotated colors. The first
//! slot (or the middle one, for analogous) is always the seed itself in
//! canonical `#rrggbb` form.

use std::fmt;
use std::str::FromStr;

use pal_color::{Color, Hsl, hex_to_hsl, normalize_hex};

use crate::error::PaletteError;

/// The hue relationship used to derive a palette from a seed color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Harmony {
    /// Seed and its opposite (180°), plus tints.
    Complementary,
    /// Neighbors at ±15° and ±30°.
    Analogous,
    /// 120° spacing, plus tints of the first two.
    Triadic,
    /// Complement ±30° (150° and 210°), plus tints.
    SplitComplementary,
}

impl Harmony {
    /// Generate the five hex strings for this rule.
    ///
    /// Returns `None` if `seed` is not a valid hex color.
    #[must_use]
    pub fn hexes(self, seed: &str) -> Option<[String; 5]> {
        match self {
            Self::Complementary => complementary(seed),
            Self::Analogous => analogous(seed),
            Self::Triadic => triadic(seed),
            Self::SplitComplementary => split_complementary(seed),
        }
    }

    /// Generate the five colors for this rule, each paired with its name.
    #[must_use]
    pub fn palette(self, seed: &str) -> Option<Vec<Color>> {
        self.hexes(seed)
            .map(|hexes| hexes.into_iter().map(Color::named).collect())
    }

    /// Stable kebab-case name of this rule.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
            Self::SplitComplementary => "split-complementary",
        }
    }

    /// Parse a rule from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::all().iter().find(|h| h.name() == lower).copied()
    }

    /// All available rules.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Complementary,
            Self::Analogous,
            Self::Triadic,
            Self::SplitComplementary,
        ]
    }
}

impl fmt::Display for Harmony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Harmony {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| PaletteError::UnknownHarmony(s.to_string()))
    }
}

// ─── Rules ───────────────────────────────────────────────────────────────────

/// A derived slot: rotate the hue, then drop saturation to no less than
/// `s_floor` and raise lightness to no more than `l_cap`.
#[derive(Clone, Copy)]
struct Tint {
    rotate: i32,
    s_drop: u8,
    s_floor: u8,
    l_rise: u8,
    l_cap: u8,
}

impl Tint {
    const fn hue(rotate: i32) -> Self {
        Self { rotate, s_drop: 0, s_floor: 0, l_rise: 0, l_cap: 100 }
    }

    const fn new(rotate: i32, s_drop: u8, s_floor: u8, l_rise: u8, l_cap: u8) -> Self {
        Self { rotate, s_drop, s_floor, l_rise, l_cap }
    }

    fn apply(self, seed: Hsl) -> String {
        let rotated = seed.rotate(self.rotate);
        Hsl {
            s: seed.s.saturating_sub(self.s_drop).max(self.s_floor),
            l: seed.l.saturating_add(self.l_rise).min(self.l_cap),
            ..rotated
        }
        .to_hex()
    }
}

/// Seed parsed two ways: canonical hex for the seed slot, HSL for the rest.
fn seed(hex: &str) -> Option<(String, Hsl)> {
    Some((normalize_hex(hex)?, hex_to_hsl(hex)?))
}

/// Seed, complement, tints of both, and a washed-out near-neutral.
#[must_use]
pub fn complementary(hex: &str) -> Option<[String; 5]> {
    let (seed_hex, hsl) = seed(hex)?;
    Some([
        seed_hex,
        Tint::hue(180).apply(hsl),
        Tint::new(0, 20, 20, 15, 85).apply(hsl),
        Tint::new(180, 20, 20, 15, 85).apply(hsl),
        Tint::new(0, 40, 10, 30, 90).apply(hsl),
    ])
}

/// Hues at −30°, −15°, seed, +15°, +30°; saturation and lightness unchanged.
#[must_use]
pub fn analogous(hex: &str) -> Option<[String; 5]> {
    let (seed_hex, hsl) = seed(hex)?;
    Some([
        Tint::hue(-30).apply(hsl),
        Tint::hue(-15).apply(hsl),
        seed_hex,
        Tint::hue(15).apply(hsl),
        Tint::hue(30).apply(hsl),
    ])
}

/// Seed, +120°, +240°, then tints of the seed and the +120° color.
#[must_use]
pub fn triadic(hex: &str) -> Option<[String; 5]> {
    let (seed_hex, hsl) = seed(hex)?;
    Some([
        seed_hex,
        Tint::hue(120).apply(hsl),
        Tint::hue(240).apply(hsl),
        Tint::new(0, 30, 20, 20, 85).apply(hsl),
        Tint::new(120, 30, 20, 20, 85).apply(hsl),
    ])
}

/// Seed, +150°, +210°, then a seed tint and a pale complement.
#[must_use]
pub fn split_complementary(hex: &str) -> Option<[String; 5]> {
    let (seed_hex, hsl) = seed(hex)?;
    Some([
        seed_hex,
        Tint::hue(150).apply(hsl),
        Tint::hue(210).apply(hsl),
        Tint::new(0, 25, 15, 20, 90).apply(hsl),
        Tint::new(180, 40, 15, 30, 92).apply(hsl),
    ])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
