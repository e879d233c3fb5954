// SPDX-License-Identifier: MIT
//
//! # pal-color: color model for paletteai
//!
//! The foundation layer every palette operation builds on.
//!
//! # Architecture
//!
//! ```text
//! "#rrggbb" / "#rgb"
//!     │
//!     ▼
//! convert.rs:  hex ⇄ Rgb ⇄ Hsl (pure, total, clamping)
//!     │
//!     ├──▶ name.rs:     hue bucket + lightness modifier → "Soft Ocean Depth"
//!     │
//!     └──▶ contrast.rs: WCAG luminance, contrast ratio, label color
//! ```
//!
//! Nothing in this crate allocates shared state or performs I/O. Malformed
//! input never panics: parsing returns `None`, naming returns `"Unknown"`,
//! luminance treats the color as black.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Channel and percent values are clamped into range before every narrowing cast.
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
// Float expressions mirror the reference colorimetric formulas term for term.
#![allow(clippy::suboptimal_flops)]

pub mod contrast;
pub mod convert;
pub mod model;
pub mod name;

pub use contrast::{WcagRating, contrast_ratio, relative_luminance, text_color_for};
pub use convert::{
    hex_to_hsl, hex_to_rgb, hsl_to_hex, hsl_to_rgb, is_hex6, normalize_hex, rgb_to_hex, rgb_to_hsl,
};
pub use model::{Color, Hsl, Rgb};
pub use name::color_name;
