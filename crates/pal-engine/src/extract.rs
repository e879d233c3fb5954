// SPDX-License-Identifier: MIT
//
//! Buffer-heuristic color extraction.
//!
//! Used when no vision service can describe an image. The raw bytes are read
//! as RGB triples without decoding any image format, so the result is a
//! rough impression of the file rather than its true dominant colors. It
//! never fails: anything too small to sample degrades to [`DEFAULT_PALETTE`].

use std::fmt;

use pal_color::{Color, Hsl, Rgb, hsl_to_hex, rgb_to_hsl};

/// Returned whenever a buffer yields fewer than three colors.
pub const DEFAULT_PALETTE: [&str; 5] = ["#4f46e5", "#7c3aed", "#ec4899", "#f59e0b", "#10b981"];

const MAX_SAMPLES: usize = 200;
const MAX_HEADER_SKIP: usize = 100;
const BUCKETS: usize = 5;
const MIN_COLORS: usize = 3;

/// Byte substituted for a zero channel or one past the end of the buffer.
const MISSING_CHANNEL: u8 = 128;

/// How a buffer is turned into colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExtractStrategy {
    /// Sample up to 200 triples, sort by hue, average five hue buckets.
    #[default]
    HueBuckets,
    /// Read five triples at evenly spaced offsets.
    Stride,
}

impl ExtractStrategy {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HueBuckets => "buckets",
            Self::Stride => "stride",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::all().iter().find(|s| s.name() == lower).copied()
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::HueBuckets, Self::Stride]
    }
}

impl fmt::Display for ExtractStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The default palette as named colors.
#[must_use]
pub fn default_palette() -> Vec<Color> {
    DEFAULT_PALETTE.iter().map(|h| Color::named((*h).to_string())).collect()
}

/// Extract colors with the default strategy.
#[must_use]
pub fn extract_from_buffer(buf: &[u8]) -> Vec<Color> {
    extract_colors(buf, ExtractStrategy::default())
}

/// Extract three to five colors from `buf`.
#[must_use]
pub fn extract_colors(buf: &[u8], strategy: ExtractStrategy) -> Vec<Color> {
    let hexes = match strategy {
        ExtractStrategy::HueBuckets => hue_buckets(buf),
        ExtractStrategy::Stride => stride(buf),
    };
    if hexes.len() < MIN_COLORS {
        log::warn!(
            "{strategy} extraction produced {} colors from {} bytes, using default palette",
            hexes.len(),
            buf.len()
        );
        return default_palette();
    }
    log::debug!("{strategy} extraction: {} colors from {} bytes", hexes.len(), buf.len());
    hexes.into_iter().map(Color::named).collect()
}

// ─── Strategies ──────────────────────────────────────────────────────────────

fn hue_buckets(buf: &[u8]) -> Vec<String> {
    let skip = MAX_HEADER_SKIP.min(buf.len() / 10);
    let step = 3.max(buf.len() / MAX_SAMPLES);

    let mut samples: Vec<Hsl> = Vec::with_capacity(MAX_SAMPLES);
    let mut i = skip;
    while i + 2 < buf.len() && samples.len() < MAX_SAMPLES {
        samples.push(rgb_to_hsl(Rgb::new(buf[i], buf[i + 1], buf[i + 2])));
        i += step;
    }
    if samples.is_empty() {
        return Vec::new();
    }

    samples.sort_by_key(|s| s.h);
    let n = samples.len();
    let buckets = BUCKETS.min(n);

    (0..buckets)
        .map(|i| {
            let bucket = &samples[i * n / buckets..(i + 1) * n / buckets];
            let count = bucket.len() as f64;
            let mean = |f: fn(&Hsl) -> u16| bucket.iter().map(|s| f64::from(f(s))).sum::<f64>() / count;
            let h = mean(|s| s.h);
            let s = mean(|s| u16::from(s.s)).clamp(25.0, 85.0);
            let l = mean(|s| u16::from(s.l)).clamp(20.0, 80.0);
            hsl_to_hex(h, s, l)
        })
        .collect()
}

fn stride(buf: &[u8]) -> Vec<String> {
    if buf.len() < 4 {
        return Vec::new();
    }
    let step = 1.max(buf.len() / 6);
    let span = buf.len() - 3;
    let channel =
        |i: usize| buf.get(i).copied().filter(|&b| b != 0).unwrap_or(MISSING_CHANNEL);

    (0..BUCKETS)
        .map(|i| {
            let offset = (i * step) % span;
            let hsl = rgb_to_hsl(Rgb::new(channel(offset), channel(offset + 1), channel(offset + 2)));
            hsl_to_hex(
                f64::from(hsl.h),
                f64::from(hsl.s).clamp(30.0, 85.0),
                f64::from(hsl.l).clamp(25.0, 75.0),
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
