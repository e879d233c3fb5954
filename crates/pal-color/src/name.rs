// SPDX-License-Identifier: MIT
//
//! Perceptual color naming.
//!
//! A name is a pure function of the hex value: low-saturation colors are
//! named by lightness alone, everything else by a hue bucket with an
//! optional lightness modifier ("Deep", "Pale", ...) in front.

use crate::convert::hex_to_hsl;
use crate::model::Hsl;

/// Name returned for strings that do not parse as a hex color.
pub const UNKNOWN: &str = "Unknown";

/// A half-open `[start, end)` band over hue degrees or lightness percent.
struct Band {
    name: &'static str,
    start: u16,
    end: u16,
}

impl Band {
    const fn contains(&self, v: u16) -> bool {
        v >= self.start && v < self.end
    }
}

const fn band(name: &'static str, start: u16, end: u16) -> Band {
    Band { name, start, end }
}

/// Hue buckets. Contiguous and non-overlapping over [0, 360).
const HUE_NAMES: [Band; 12] = [
    band("Crimson Blaze", 0, 15),
    band("Sunset Orange", 15, 35),
    band("Golden Hour", 35, 55),
    band("Lime Zest", 55, 80),
    band("Emerald Dream", 80, 150),
    band("Teal Whisper", 150, 180),
    band("Ocean Depth", 180, 210),
    band("Cobalt Sky", 210, 240),
    band("Indigo Night", 240, 270),
    band("Royal Violet", 270, 300),
    band("Magenta Pulse", 300, 330),
    band("Rose Petal", 330, 360),
];

/// Lightness modifiers. The top band is open at 100, so full lightness
/// carries no modifier.
const LIGHTNESS_MODIFIERS: [Band; 6] = [
    band("Deep", 0, 25),
    band("Rich", 25, 40),
    band("", 40, 60),
    band("Soft", 60, 75),
    band("Pale", 75, 90),
    band("Whisper", 90, 100),
];

/// Names for achromatic colors, keyed by exclusive lightness upper bound.
const NEUTRAL_NAMES: [(u8, &str); 5] = [
    (15, "Midnight Black"),
    (30, "Charcoal"),
    (50, "Slate Gray"),
    (70, "Silver Mist"),
    (85, "Cloud White"),
];

const BRIGHTEST_NEUTRAL: &str = "Snow White";

/// Human-readable name for a hex color, or [`UNKNOWN`] if it does not parse.
///
/// ```
/// use pal_color::name::color_name;
///
/// assert_eq!(color_name("#000000"), "Midnight Black");
/// assert_eq!(color_name("#ff0000"), "Crimson Blaze");
/// assert_eq!(color_name("not a color"), "Unknown");
/// ```
#[must_use]
pub fn color_name(hex: &str) -> String {
    hex_to_hsl(hex).map_or_else(|| UNKNOWN.to_string(), name_for_hsl)
}

/// Name an HSL value directly.
#[must_use]
pub fn name_for_hsl(hsl: Hsl) -> String {
    if hsl.is_achromatic() {
        let name = NEUTRAL_NAMES
            .iter()
            .find(|(bound, _)| hsl.l < *bound)
            .map_or(BRIGHTEST_NEUTRAL, |&(_, name)| name);
        return name.to_string();
    }

    let base = HUE_NAMES
        .iter()
        .find(|b| b.contains(hsl.h))
        .unwrap_or(&HUE_NAMES[0])
        .name;
    let modifier = LIGHTNESS_MODIFIERS
        .iter()
        .find(|b| b.contains(u16::from(hsl.l)))
        .map_or("", |b| b.name);

    if modifier.is_empty() {
        base.to_string()
    } else {
        format!("{modifier} {base}")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
