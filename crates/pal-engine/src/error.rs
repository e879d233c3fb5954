// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors surfaced by the fallible parts of the engine.
///
/// Palette synthesis itself never fails; these cover record validation,
/// name parsing, and JSON encoding/decoding.
#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    #[error("a palette must have between {min} and {max} colors, got {count}")]
    ColorCount { count: usize, min: usize, max: usize },

    #[error("palette name is empty")]
    EmptyName,

    #[error("palette name exceeds {max} characters")]
    NameTooLong { max: usize },

    #[error("mood exceeds {max} characters")]
    MoodTooLong { max: usize },

    #[error("unknown export format: {0:?}")]
    UnknownFormat(String),

    #[error("unknown harmony rule: {0:?}")]
    UnknownHarmony(String),

    #[error("unknown palette source: {0:?}")]
    UnknownSource(String),

    #[error("palette JSON failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PaletteError>;
