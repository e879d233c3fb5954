// SPDX-License-Identifier: MIT
//
//! # pal-engine: palette synthesis for paletteai
//!
//! Builds five-color palettes from a mood keyword, a seed color, a random
//! seed, or the raw bytes of an image, and renders them for export.
//!
//! # Architecture
//!
//! ```text
//!  mood keyword ──▶ mood.rs ────┐
//!  seed hex ──────▶ harmony.rs ─┤
//!  u32 seed ──────▶ random.rs ──┼──▶ Vec<Color> ──▶ export.rs  (css / json / svg)
//!  image bytes ──▶ vision.rs ───┤                └─▶ record.rs  (validated, serializable)
//!                     └─▶ extract.rs
//! ```
//!
//! Every generator is a pure function: no I/O, no clock, no shared state.
//! Unknown moods, bad seeds, and empty buffers never panic.

// Bucket sizes, sample counts, and swatch indices are small; f64 holds them exactly.
#![allow(clippy::cast_precision_loss)]

pub mod error;
pub mod export;
pub mod extract;
pub mod harmony;
pub mod mood;
pub mod random;
pub mod record;
pub mod vision;

pub use error::{PaletteError, Result};
pub use export::{ExportFormat, export_css, export_json, export_svg, import_json};
pub use extract::{DEFAULT_PALETTE, ExtractStrategy, extract_colors, extract_from_buffer};
pub use harmony::{Harmony, analogous, complementary, split_complementary, triadic};
pub use mood::{MoodTier, palette_from_mood, resolve_mood};
pub use random::random_palette;
pub use record::{PaletteRecord, Source};
pub use vision::{parse_vision_reply, resolve_image_palette, resolve_image_palette_with};
