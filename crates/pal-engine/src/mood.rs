// SPDX-License-Identifier: MIT
//
//! Mood keyword → palette synthesis.
//!
//! A keyword resolves to a base HSL triple in three tiers, first hit wins:
//!
//! 1. exact match against the mood table
//! 2. substring match, either direction, in table order
//! 3. a deterministic string hash spread over hue space
//!
//! The base is then fanned out to five slots with fixed hue, saturation,
//! and lightness offsets ([`spread`]). The same keyword always yields the
//! same palette, across calls and across processes.

use std::fmt;

use pal_color::{Color, hsl_to_hex};

/// Base hue/saturation/lightness a palette is spread from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Base {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Base {
    #[must_use]
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self { hue, saturation, lightness }
    }
}

const fn entry(key: &'static str, h: f64, s: f64, l: f64) -> (&'static str, Base) {
    (key, Base::new(h, s, l))
}

/// Known keywords. Order matters: the substring tier takes the first hit.
const MOOD_TABLE: &[(&str, Base)] = &[
    // Moods
    entry("warm", 25.0, 70.0, 55.0),
    entry("cool", 210.0, 60.0, 50.0),
    entry("vibrant", 320.0, 85.0, 55.0),
    entry("pastel", 280.0, 45.0, 80.0),
    entry("dark", 240.0, 50.0, 25.0),
    entry("earthy", 30.0, 40.0, 40.0),
    entry("ocean", 200.0, 65.0, 50.0),
    entry("sunset", 20.0, 80.0, 55.0),
    entry("forest", 120.0, 55.0, 40.0),
    entry("candy", 330.0, 70.0, 70.0),
    entry("midnight", 235.0, 60.0, 20.0),
    entry("autumn", 25.0, 65.0, 45.0),
    entry("spring", 110.0, 60.0, 65.0),
    entry("winter", 210.0, 30.0, 75.0),
    entry("neon", 300.0, 100.0, 55.0),
    entry("retro", 40.0, 55.0, 50.0),
    entry("luxury", 42.0, 45.0, 30.0),
    entry("minimal", 220.0, 10.0, 60.0),
    entry("romantic", 340.0, 55.0, 65.0),
    entry("tropical", 160.0, 75.0, 55.0),
    // Color names
    entry("red", 0.0, 75.0, 50.0),
    entry("orange", 25.0, 80.0, 55.0),
    entry("yellow", 50.0, 80.0, 55.0),
    entry("green", 120.0, 65.0, 45.0),
    entry("teal", 175.0, 60.0, 45.0),
    entry("blue", 220.0, 70.0, 50.0),
    entry("indigo", 250.0, 65.0, 40.0),
    entry("purple", 280.0, 65.0, 50.0),
    entry("pink", 330.0, 70.0, 65.0),
    entry("brown", 25.0, 50.0, 35.0),
    entry("black", 0.0, 5.0, 15.0),
    entry("white", 0.0, 5.0, 85.0),
    entry("gray", 0.0, 5.0, 50.0),
    entry("grey", 0.0, 5.0, 50.0),
    entry("gold", 45.0, 75.0, 50.0),
    entry("silver", 210.0, 10.0, 70.0),
    entry("coral", 15.0, 75.0, 60.0),
    entry("lavender", 270.0, 50.0, 70.0),
    entry("magenta", 310.0, 80.0, 50.0),
    entry("cyan", 185.0, 75.0, 50.0),
    entry("maroon", 0.0, 65.0, 30.0),
    entry("navy", 230.0, 70.0, 25.0),
];

// ─── Slot spreading ──────────────────────────────────────────────────────────

const HUE_OFFSETS: [f64; 5] = [-20.0, -8.0, 0.0, 12.0, 25.0];
const SAT_OFFSETS: [f64; 5] = [5.0, -5.0, 0.0, -10.0, -20.0];
const LIT_OFFSETS: [f64; 5] = [-15.0, -5.0, 0.0, 10.0, 25.0];

/// Fan a base color out to five slots.
///
/// Hue offsets wrap modulo 360; saturation is clamped to [5, 100] and
/// lightness to [10, 92] after the offset is applied.
#[must_use]
pub fn spread(base: Base) -> [String; 5] {
    std::array::from_fn(|i| {
        let h = (base.hue + HUE_OFFSETS[i]).rem_euclid(360.0);
        let s = (base.saturation + SAT_OFFSETS[i]).clamp(5.0, 100.0);
        let l = (base.lightness + LIT_OFFSETS[i]).clamp(10.0, 92.0);
        hsl_to_hex(h, s, l)
    })
}

// ─── Resolution ──────────────────────────────────────────────────────────────

/// Which tier resolved a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodTier {
    /// The normalized keyword is a table key.
    Exact(&'static str),
    /// A table key contains the keyword or is contained in it.
    Substring(&'static str),
    /// No key matched; the base came from this hash.
    Hashed(i64),
}

impl fmt::Display for MoodTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(key) => write!(f, "exact match {key:?}"),
            Self::Substring(key) => write!(f, "substring match {key:?}"),
            Self::Hashed(hash) => write!(f, "hash {hash}"),
        }
    }
}

/// Resolve a keyword to its base color and the tier that produced it.
///
/// The keyword is trimmed and lowercased first. An empty keyword skips the
/// substring tier (every key would contain it) and goes straight to the hash.
#[must_use]
pub fn resolve_mood(keyword: &str) -> (MoodTier, Base) {
    let key = keyword.trim().to_lowercase();

    if let Some(&(name, base)) = MOOD_TABLE.iter().find(|(k, _)| *k == key) {
        return (MoodTier::Exact(name), base);
    }

    if !key.is_empty() {
        if let Some(&(name, base)) = MOOD_TABLE
            .iter()
            .find(|(k, _)| key.contains(k) || k.contains(key.as_str()))
        {
            return (MoodTier::Substring(name), base);
        }
    }

    let hash = keyword_hash(&key);
    (MoodTier::Hashed(hash), hashed_base(hash))
}

/// Build a five-color palette for a mood keyword.
///
/// Never fails: unknown keywords resolve through the hash tier.
#[must_use]
pub fn palette_from_mood(keyword: &str) -> Vec<Color> {
    let (tier, base) = resolve_mood(keyword);
    log::debug!("mood {keyword:?} resolved by {tier}");
    spread(base).into_iter().map(Color::named).collect()
}

/// The table keys, in resolution order.
pub fn known_moods() -> impl Iterator<Item = &'static str> {
    MOOD_TABLE.iter().map(|(k, _)| *k)
}

/// Multiplicative string hash over UTF-16 code units:
/// `hash = unit + ((hash << 5) - hash)`.
///
/// Only the shift truncates to i32; the subtraction and addition keep the
/// full width, so the accumulator can leave the i32 range.
#[allow(clippy::cast_possible_truncation)]
fn keyword_hash(key: &str) -> i64 {
    key.encode_utf16().fold(0i64, |hash, unit| {
        let shifted = i64::from((hash as i32).wrapping_shl(5));
        i64::from(unit).wrapping_add(shifted.wrapping_sub(hash))
    })
}

/// Hue from the full hash; saturation and lightness from shifts of its
/// low 32 bits.
#[allow(clippy::cast_possible_truncation)]
fn hashed_base(hash: i64) -> Base {
    let low = hash as i32;
    let hue = hash.unsigned_abs() % 360;
    let sat = 50 + (low >> 8).unsigned_abs() % 40;
    let lit = 40 + (low >> 16).unsigned_abs() % 30;
    Base::new(hue as f64, f64::from(sat), f64::from(lit))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
