// SPDX-License-Identifier: MIT
//
//! Hex ⇄ RGB ⇄ HSL conversion.
//!
//! ```text
//! "#rgb" / "#rrggbb"  ──parse──▶  Rgb (u8 × 3)  ──▶  Hsl (integer degrees/percent)
//! Hsl / float HSL     ──a/k formula──▶  Rgb  ──encode──▶  "#rrggbb"
//! ```
//!
//! Parsing is total: malformed input yields `None`, never a panic. Encoding
//! is total as well: out-of-range or NaN channels are clamped before they
//! are written, so every string this module produces is canonical.

use crate::model::{Hsl, Rgb};

// ─── Parsing ─────────────────────────────────────────────────────────────────

/// Parse a hex color string into 8-bit channels.
///
/// Accepts `#RGB` and `#RRGGBB`, with or without the leading `#`, in any
/// letter case. Anything else returns `None`.
#[must_use]
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex).as_bytes();

    match digits.len() {
        // #RGB
        3 => {
            let r = parse_hex_digit(digits[0])?;
            let g = parse_hex_digit(digits[1])?;
            let b = parse_hex_digit(digits[2])?;
            Some(Rgb::new(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RRGGBB
        6 => Some(Rgb::new(
            parse_hex_byte(digits[0], digits[1])?,
            parse_hex_byte(digits[2], digits[3])?,
            parse_hex_byte(digits[4], digits[5])?,
        )),
        _ => None,
    }
}

/// Canonicalize a hex color to lowercase `#rrggbb`.
#[must_use]
pub fn normalize_hex(hex: &str) -> Option<String> {
    hex_to_rgb(hex).map(Rgb::to_hex)
}

/// Whether `s` is exactly `#` followed by six hex digits (any case).
///
/// Stricter than [`hex_to_rgb`]: this is the shape stored palettes and
/// vision replies must have.
#[must_use]
pub fn is_hex6(s: &str) -> bool {
    s.strip_prefix('#')
        .is_some_and(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
}

const fn parse_hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

fn parse_hex_byte(hi: u8, lo: u8) -> Option<u8> {
    Some(parse_hex_digit(hi)? << 4 | parse_hex_digit(lo)?)
}

// ─── Encoding ────────────────────────────────────────────────────────────────

/// Encode float channels as `#rrggbb`.
///
/// Each channel is rounded and clamped to [0, 255] independently.
#[must_use]
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    Rgb::new(to_channel(r), to_channel(g), to_channel(b)).to_hex()
}

fn to_channel(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(0.0, 255.0) as u8
}

// ─── RGB → HSL ───────────────────────────────────────────────────────────────

/// Convert 8-bit RGB to integer HSL.
///
/// Hue uses the six-branch formula keyed on the maximal channel (red wins
/// ties, then green). Achromatic colors get hue 0 and saturation 0.
#[must_use]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let hi = rgb.r.max(rgb.g).max(rgb.b);
    let lo = rgb.r.min(rgb.g).min(rgb.b);

    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;
    let max = f64::from(hi) / 255.0;
    let min = f64::from(lo) / 255.0;
    let l = (max + min) / 2.0;

    if hi == lo {
        return Hsl::new(0, 0, to_percent(l));
    }

    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };

    let h = if rgb.r == hi {
        ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
    } else if rgb.g == hi {
        ((b - r) / d + 2.0) / 6.0
    } else {
        ((r - g) / d + 4.0) / 6.0
    };

    // A hue that rounds up to 360 is the same angle as 0.
    let degrees = (h * 360.0).round() as u16 % 360;
    Hsl::new(degrees, to_percent(s), to_percent(l))
}

/// Parse a hex string straight to HSL.
#[must_use]
pub fn hex_to_hsl(hex: &str) -> Option<Hsl> {
    hex_to_rgb(hex).map(rgb_to_hsl)
}

fn to_percent(v: f64) -> u8 {
    (v * 100.0).round().clamp(0.0, 100.0) as u8
}

// ─── HSL → RGB ───────────────────────────────────────────────────────────────

/// Convert float HSL to 8-bit RGB.
///
/// `h` is wrapped into [0, 360); `s` and `l` are clamped to [0, 100]. Uses
/// the closed-form "a/k" construction:
///
///   a = s · min(l, 1 − l)
///   k = (n + h/30) mod 12            for n ∈ {0, 8, 4}  (r, g, b)
///   v = l − a · max(min(k − 3, 9 − k, 1), −1)
#[must_use]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = if h.is_finite() { h.rem_euclid(360.0) } else { 0.0 };
    let s = clamp_percent(s) / 100.0;
    let l = clamp_percent(l) / 100.0;
    let a = s * l.min(1.0 - l);

    let channel = |n: f64| {
        let k = (n + h / 30.0) % 12.0;
        let v = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        to_channel(255.0 * v.clamp(0.0, 1.0))
    };

    Rgb::new(channel(0.0), channel(8.0), channel(4.0))
}

/// Convert float HSL straight to `#rrggbb`.
#[must_use]
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    hsl_to_rgb(h, s, l).to_hex()
}

fn clamp_percent(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 100.0) }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
