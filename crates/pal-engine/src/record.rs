// SPDX-License-Identifier: MIT
//
//! The persisted palette shape and its validation rules.

use std::fmt;
use std::str::FromStr;

use pal_color::{Color, normalize_hex};
use serde::{Deserialize, Serialize};

use crate::error::{PaletteError, Result};
use crate::mood::palette_from_mood;

pub const MIN_COLORS: usize = 2;
pub const MAX_COLORS: usize = 10;
pub const MAX_NAME_LEN: usize = 100;
pub const MAX_MOOD_LEN: usize = 100;

const EXTRACTED_NAME: &str = "Extracted Palette";

/// Where a palette's colors came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Source {
    #[default]
    Ai,
    Image,
    Manual,
    Fallback,
    ImageAi,
    ImageFallback,
}

impl Source {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ai => "ai",
            Self::Image => "image",
            Self::Manual => "manual",
            Self::Fallback => "fallback",
            Self::ImageAi => "image-ai",
            Self::ImageFallback => "image-fallback",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Ai,
            Self::Image,
            Self::Manual,
            Self::Fallback,
            Self::ImageAi,
            Self::ImageFallback,
        ]
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Source {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_lowercase();
        Self::all()
            .iter()
            .find(|src| src.name() == lower)
            .copied()
            .ok_or_else(|| PaletteError::UnknownSource(s.to_string()))
    }
}

/// A named palette as a caller would store it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteRecord {
    pub name: String,
    pub colors: Vec<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(default)]
    pub source: Source,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl PaletteRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, colors: Vec<Color>, source: Source) -> Self {
        Self { name: name.into(), colors, mood: None, source, tags: Vec::new() }
    }

    /// A mood palette named `"{keyword} Palette"`.
    #[must_use]
    pub fn from_mood(keyword: &str) -> Self {
        let keyword = keyword.trim();
        Self {
            mood: Some(keyword.to_string()),
            ..Self::new(format!("{keyword} Palette"), palette_from_mood(keyword), Source::Ai)
        }
    }

    #[must_use]
    pub fn extracted(colors: Vec<Color>, source: Source) -> Self {
        Self::new(EXTRACTED_NAME, colors, source)
    }

    /// A hand-picked palette.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidHex`] for the first unparseable hex,
    /// or any error from [`PaletteRecord::validate`].
    pub fn manual<S: AsRef<str>>(name: &str, hexes: &[S]) -> Result<Self> {
        let colors = hexes
            .iter()
            .map(|h| {
                let h = h.as_ref();
                Color::from_hex(h).ok_or_else(|| PaletteError::InvalidHex(h.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;
        let record = Self::new(name.trim(), colors, Source::Manual);
        record.validate()?;
        Ok(record)
    }

    /// Replace the tags, trimmed and lowercased, dropping empty ones.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags = normalize_tags(tags);
        self
    }

    /// Check the record against the storage rules.
    ///
    /// # Errors
    ///
    /// The first violated rule, in order: name, color count, color hexes,
    /// mood length.
    pub fn validate(&self) -> Result<()> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(PaletteError::EmptyName);
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(PaletteError::NameTooLong { max: MAX_NAME_LEN });
        }
        let count = self.colors.len();
        if !(MIN_COLORS..=MAX_COLORS).contains(&count) {
            return Err(PaletteError::ColorCount { count, min: MIN_COLORS, max: MAX_COLORS });
        }
        if let Some(bad) = self.colors.iter().find(|c| normalize_hex(&c.hex).as_deref() != Some(c.hex.as_str())) {
            return Err(PaletteError::InvalidHex(bad.hex.clone()));
        }
        if self.mood.as_ref().is_some_and(|m| m.chars().count() > MAX_MOOD_LEN) {
            return Err(PaletteError::MoodTooLong { max: MAX_MOOD_LEN });
        }
        Ok(())
    }
}

/// Trim and lowercase each tag, dropping the empty ones.
#[must_use]
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .map(|t| t.as_ref().trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
