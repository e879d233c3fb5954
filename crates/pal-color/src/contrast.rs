// SPDX-License-Identifier: MIT
//
//! WCAG contrast computation for palette swatches.
//!
//! Everything here works on hex strings so callers can feed palette entries
//! straight in:
//!
//! - [`relative_luminance`]: WCAG 2.x luminance in [0, 1]
//! - [`contrast_ratio`]: symmetric ratio in [1, 21]
//! - [`text_color_for`]: dark or light label color for a swatch background
//! - [`WcagRating`]: the conformance level a ratio reaches
//!
//! Invalid hex input is treated as black (luminance 0) rather than an error,
//! so a malformed entry degrades the ratio instead of aborting a render.

use std::fmt;

use crate::convert::hex_to_rgb;

/// Label color used on light swatches.
pub const DARK_TEXT: &str = "#1a1a2e";

/// Label color used on dark swatches.
pub const LIGHT_TEXT: &str = "#f0f0f5";

/// Backgrounds brighter than this get [`DARK_TEXT`].
const TEXT_LUMINANCE_THRESHOLD: f64 = 0.4;

/// Linearize one 8-bit sRGB channel.
///
/// Uses the WCAG 2.x breakpoint of 0.03928 (not the IEC 0.04045).
#[must_use]
pub fn linearize(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= 0.039_28 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the relative luminance of a hex color per WCAG 2.1.
///
///   L = 0.2126 · `R_lin` + 0.7152 · `G_lin` + 0.0722 · `B_lin`
///
/// Returns 0.0 if `hex` does not parse.
#[must_use]
pub fn relative_luminance(hex: &str) -> f64 {
    let Some(rgb) = hex_to_rgb(hex) else {
        return 0.0;
    };
    0.2126 * linearize(rgb.r) + 0.7152 * linearize(rgb.g) + 0.0722 * linearize(rgb.b)
}

/// Compute the WCAG 2.1 contrast ratio between two hex colors.
///
/// Returns a value in [1.0, 21.0]:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// The result does not depend on argument order.
#[must_use]
pub fn contrast_ratio(a: &str, b: &str) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Pick a legible label color for text drawn on `background`.
#[must_use]
pub fn text_color_for(background: &str) -> &'static str {
    if relative_luminance(background) > TEXT_LUMINANCE_THRESHOLD {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}

// ─── Conformance ─────────────────────────────────────────────────────────────

/// The highest WCAG 2.1 text-contrast level a ratio satisfies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WcagRating {
    /// Below 3:1.
    Fail,
    /// 3:1, large text (18pt, or 14pt bold) only.
    AaLarge,
    /// 4.5:1, normal text, level AA.
    Aa,
    /// 7:1, normal text, level AAA.
    Aaa,
}

impl WcagRating {
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 7.0 {
            Self::Aaa
        } else if ratio >= 4.5 {
            Self::Aa
        } else if ratio >= 3.0 {
            Self::AaLarge
        } else {
            Self::Fail
        }
    }

    /// Rate the pair `(fg, bg)` directly.
    #[must_use]
    pub fn of(fg: &str, bg: &str) -> Self {
        Self::from_ratio(contrast_ratio(fg, bg))
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fail => "fail",
            Self::AaLarge => "AA large",
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        }
    }
}

impl fmt::Display for WcagRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        let lum = relative_luminance("#000000");
        assert!(approx_eq(lum, 0.0, 1e-9), "Black luminance: {lum}");
    }

    #[test]
    fn luminance_white_is_one() {
        let lum = relative_luminance("#ffffff");
        assert!(approx_eq(lum, 1.0, 1e-9), "White luminance: {lum}");
    }

    #[test]
    fn luminance_primaries() {
        assert!(approx_eq(relative_luminance("#ff0000"), 0.2126, 1e-9));
        assert!(approx_eq(relative_luminance("#00ff00"), 0.7152, 1e-9));
        assert!(approx_eq(relative_luminance("#0000ff"), 0.0722, 1e-9));
    }

    #[test]
    fn luminance_mid_gray() {
        let lum = relative_luminance("#777777");
        assert!(approx_eq(lum, 0.1845, 0.001), "Mid-gray luminance: {lum}");
    }

    #[test]
    fn luminance_invalid_is_zero() {
        assert!(approx_eq(relative_luminance("zzz"), 0.0, 1e-12));
    }

    #[test]
    fn linearize_breakpoint() {
        // 10/255 ≈ 0.0392 sits just below the breakpoint.
        assert!(approx_eq(linearize(10), 10.0 / 255.0 / 12.92, 1e-12));
        assert!(linearize(11) > linearize(10));
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = contrast_ratio("#000000", "#ffffff");
        assert!(approx_eq(ratio, 21.0, 0.1), "B/W contrast: {ratio}");
    }

    #[test]
    fn contrast_same_color_is_exactly_1() {
        for hex in ["#000000", "#ffffff", "#3498db", "#bd0f0f", "#abc"] {
            let ratio = contrast_ratio(hex, hex);
            assert!(approx_eq(ratio, 1.0, 1e-12), "{hex} self-contrast: {ratio}");
        }
    }

    #[test]
    fn contrast_is_symmetric() {
        let pairs = [("#cc3344", "#1a1a66"), ("#3498db", "#ffffff"), ("#ffff00", "#0000ff")];
        for (a, b) in pairs {
            let ab = contrast_ratio(a, b);
            let ba = contrast_ratio(b, a);
            assert!(approx_eq(ab, ba, 1e-12), "Asymmetric: {ab} vs {ba}");
        }
    }

    #[test]
    fn contrast_always_at_least_one() {
        let hexes = ["#000000", "#4f46e5", "#7c3aed", "#ec4899", "#f59e0b", "#10b981", "#ffffff"];
        for a in hexes {
            for b in hexes {
                assert!(contrast_ratio(a, b) >= 1.0, "{a}/{b}");
            }
        }
    }

    #[test]
    fn contrast_known_pairs() {
        assert!(approx_eq(contrast_ratio("#ff0000", "#ffffff"), 3.998, 0.001));
        assert!(approx_eq(contrast_ratio("#777777", "#ffffff"), 4.478, 0.001));
        assert!(approx_eq(contrast_ratio(DARK_TEXT, LIGHT_TEXT), 15.017, 0.001));
    }

    // ── Text color ──────────────────────────────────────────────────

    #[test]
    fn text_on_light_is_dark() {
        assert_eq!(text_color_for("#ffffff"), DARK_TEXT);
        assert_eq!(text_color_for("#ffff00"), DARK_TEXT);
        assert_eq!(text_color_for("#00ff00"), DARK_TEXT);
    }

    #[test]
    fn text_on_dark_is_light() {
        assert_eq!(text_color_for("#000000"), LIGHT_TEXT);
        assert_eq!(text_color_for("#ff0000"), LIGHT_TEXT);
        assert_eq!(text_color_for("#3498db"), LIGHT_TEXT);
    }

    #[test]
    fn text_on_invalid_is_light() {
        assert_eq!(text_color_for("garbage"), LIGHT_TEXT);
    }

    // ── Rating ──────────────────────────────────────────────────────

    #[test]
    fn rating_thresholds() {
        assert_eq!(WcagRating::from_ratio(21.0), WcagRating::Aaa);
        assert_eq!(WcagRating::from_ratio(7.0), WcagRating::Aaa);
        assert_eq!(WcagRating::from_ratio(6.99), WcagRating::Aa);
        assert_eq!(WcagRating::from_ratio(4.5), WcagRating::Aa);
        assert_eq!(WcagRating::from_ratio(3.0), WcagRating::AaLarge);
        assert_eq!(WcagRating::from_ratio(2.99), WcagRating::Fail);
        assert_eq!(WcagRating::from_ratio(1.0), WcagRating::Fail);
    }

    #[test]
    fn rating_of_pairs() {
        assert_eq!(WcagRating::of("#000000", "#ffffff"), WcagRating::Aaa);
        assert_eq!(WcagRating::of("#777777", "#ffffff"), WcagRating::AaLarge);
        assert!(WcagRating::Aa > WcagRating::AaLarge);
        assert_eq!(WcagRating::AaLarge.to_string(), "AA large");
    }
}
