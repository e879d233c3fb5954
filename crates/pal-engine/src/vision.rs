// SPDX-License-Identifier: MIT
//
//! Sanitizing replies from an external vision model.
//!
//! The model is asked for a JSON array of hex strings but often wraps it in a
//! Markdown fence or slips in malformed entries. Anything that does not
//! survive sanitizing sends the caller to the buffer extractor instead.

use std::collections::HashSet;
use std::sync::LazyLock;

use pal_color::{Color, is_hex6};
use regex::Regex;

use crate::extract::{ExtractStrategy, extract_colors};
use crate::record::Source;

/// Fewer entries than this (before or after filtering) rejects the reply.
const MIN_REPLY_COLORS: usize = 3;
const MAX_REPLY_COLORS: usize = 5;

static FENCE_OPEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^```(?:json)?\s*").expect("Invalid fence open regex"));

static FENCE_CLOSE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*```$").expect("Invalid fence close regex"));

fn strip_fences(text: &str) -> String {
    let text = text.trim();
    let text = FENCE_OPEN_REGEX.replace(text, "");
    FENCE_CLOSE_REGEX.replace(&text, "").trim().to_string()
}

/// Turn a raw model reply into three to five distinct colors.
///
/// Returns `None` when the reply is not a JSON array, has fewer than three
/// entries, or has fewer than three valid `#rrggbb` strings. Valid entries
/// are lowercased and deduplicated in order of first appearance.
#[must_use]
pub fn parse_vision_reply(text: &str) -> Option<Vec<Color>> {
    let body = strip_fences(text);
    if body.is_empty() {
        return None;
    }

    let entries: Vec<serde_json::Value> = match serde_json::from_str(&body) {
        Ok(entries) => entries,
        Err(err) => {
            log::warn!("vision reply is not a JSON array: {err}");
            return None;
        }
    };
    if entries.len() < MIN_REPLY_COLORS {
        log::debug!("vision reply has only {} entries", entries.len());
        return None;
    }

    let mut seen = HashSet::new();
    let colors: Vec<Color> = entries
        .iter()
        .filter_map(serde_json::Value::as_str)
        .filter(|s| is_hex6(s))
        .map(str::to_lowercase)
        .filter(|hex| seen.insert(hex.clone()))
        .take(MAX_REPLY_COLORS)
        .map(Color::named)
        .collect();

    if colors.len() < MIN_REPLY_COLORS {
        log::debug!("vision reply has only {} usable colors", colors.len());
        return None;
    }
    Some(colors)
}

/// Colors for an uploaded image, preferring the vision reply when usable.
///
/// Falls back to [`crate::extract::extract_from_buffer`] when `reply` is absent or rejected.
#[must_use]
pub fn resolve_image_palette(reply: Option<&str>, image: &[u8]) -> (Vec<Color>, Source) {
    resolve_image_palette_with(reply, image, ExtractStrategy::default())
}

/// [`resolve_image_palette`] with an explicit fallback strategy.
#[must_use]
pub fn resolve_image_palette_with(
    reply: Option<&str>,
    image: &[u8],
    strategy: ExtractStrategy,
) -> (Vec<Color>, Source) {
    match reply.and_then(parse_vision_reply) {
        Some(colors) => (colors, Source::ImageAi),
        None => (extract_colors(image, strategy), Source::ImageFallback),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::DEFAULT_PALETTE;
    use pretty_assertions::assert_eq;

    fn hexes(colors: &[Color]) -> Vec<&str> {
        colors.iter().map(|c| c.hex.as_str()).collect()
    }

    #[test]
    fn plain_array() {
        let colors = parse_vision_reply(r##"["#FF0000", "#00ff00", "#0000FF"]"##).unwrap();
        assert_eq!(hexes(&colors), ["#ff0000", "#00ff00", "#0000ff"]);
        assert_eq!(colors[0].name, "Crimson Blaze");
    }

    #[test]
    fn fenced_array() {
        let reply = "```json\n[\"#111111\", \"#222222\", \"#333333\", \"#444444\"]\n```";
        let colors = parse_vision_reply(reply).unwrap();
        assert_eq!(hexes(&colors), ["#111111", "#222222", "#333333", "#444444"]);

        let bare_fence = "```\n[\"#111111\", \"#222222\", \"#333333\"]\n```";
        assert_eq!(parse_vision_reply(bare_fence).unwrap().len(), 3);

        let upper = "```JSON [\"#111111\", \"#222222\", \"#333333\"] ```";
        assert_eq!(parse_vision_reply(upper).unwrap().len(), 3);
    }

    #[test]
    fn keeps_first_five() {
        let reply = r##"["#010101","#020202","#030303","#040404","#050505","#060606","#070707"]"##;
        assert_eq!(
            hexes(&parse_vision_reply(reply).unwrap()),
            ["#010101", "#020202", "#030303", "#040404", "#050505"]
        );
    }

    #[test]
    fn drops_invalid_and_duplicate_entries() {
        let reply = r##"["#abcdef", "#ABCDEF", "red", "#abc", 42, null, "#123456", " #654321", "#0f0f0f"]"##;
        assert_eq!(
            hexes(&parse_vision_reply(reply).unwrap()),
            ["#abcdef", "#123456", "#0f0f0f"]
        );
    }

    #[test]
    fn rejects_short_replies() {
        assert!(parse_vision_reply(r##"["#111111", "#222222"]"##).is_none());
        // Three entries, but only two survive filtering.
        assert!(parse_vision_reply(r##"["#111111", "#222222", "blue"]"##).is_none());
        assert!(parse_vision_reply(r##"["#111111", "#111111", "#111111"]"##).is_none());
    }

    #[test]
    fn rejects_non_arrays() {
        assert!(parse_vision_reply("").is_none());
        assert!(parse_vision_reply("```json\n```").is_none());
        assert!(parse_vision_reply("Here are your colors: #111111").is_none());
        assert!(parse_vision_reply(r##"{"colors": ["#111111", "#222222", "#333333"]}"##).is_none());
    }

    #[test]
    fn resolve_prefers_reply() {
        let (colors, source) =
            resolve_image_palette(Some(r##"["#111111", "#222222", "#333333"]"##), &[]);
        assert_eq!(source, Source::ImageAi);
        assert_eq!(colors.len(), 3);
    }

    #[test]
    fn resolve_falls_back_to_buffer() {
        let (colors, source) = resolve_image_palette(Some("no colors here"), &[1, 2]);
        assert_eq!(source, Source::ImageFallback);
        assert_eq!(hexes(&colors), DEFAULT_PALETTE);

        let (_, source) = resolve_image_palette(None, &[0; 64]);
        assert_eq!(source, Source::ImageFallback);
    }

    #[test]
    fn resolve_uses_requested_strategy() {
        let image: Vec<u8> = [255, 0, 0].repeat(400);
        let (colors, _) = resolve_image_palette_with(None, &image, ExtractStrategy::Stride);
        assert_eq!(hexes(&colors), ["#f58989", "#89f589", "#8989f5", "#f58989", "#89f589"]);
        let (colors, _) = resolve_image_palette(None, &image);
        assert_eq!(hexes(&colors), ["#1313ec"; 5]);
    }
}
