// SPDX-License-Identifier: MIT
//
//! Plain-text palette exports: CSS custom properties, JSON, and SVG swatches.
//!
//! All encoders are deterministic: the same colors and name always produce
//! byte-identical output. Palette order is preserved everywhere. It sets the
//! CSS variable index and the left-to-right stripe order in SVG.

use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

use pal_color::{Color, Hsl, Rgb, hex_to_hsl, hex_to_rgb, text_color_for};
use serde::{Deserialize, Serialize};

use crate::error::{PaletteError, Result};

/// SVG canvas width in pixels.
pub const SVG_WIDTH: u32 = 500;

/// SVG canvas height in pixels.
pub const SVG_HEIGHT: u32 = 200;

/// Distance of the hex label baseline from the bottom edge.
const SVG_LABEL_INSET: u32 = 15;

const DEFAULT_SLUG: &str = "palette";

// ─── Format descriptor ───────────────────────────────────────────────────────

/// An export target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExportFormat {
    #[default]
    Css,
    Json,
    Svg,
}

impl ExportFormat {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Json => "json",
            Self::Svg => "svg",
        }
    }

    /// Parse a format from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::all().iter().find(|f| f.name() == lower).copied()
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Css, Self::Json, Self::Svg]
    }

    /// File extension for downloads, without the dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        self.name()
    }

    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Css => "text/css",
            Self::Json => "application/json",
            Self::Svg => "image/svg+xml",
        }
    }

    /// Render `colors` in this format.
    ///
    /// # Errors
    ///
    /// Only the JSON encoder can fail, and only if serialization fails.
    pub fn render(self, colors: &[Color], name: &str) -> Result<String> {
        match self {
            Self::Css => Ok(export_css(colors, name)),
            Self::Json => export_json(colors, name),
            Self::Svg => Ok(export_svg(colors)),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| PaletteError::UnknownFormat(s.to_string()))
    }
}

// ─── CSS ─────────────────────────────────────────────────────────────────────

/// Turn a palette name into a CSS identifier fragment.
///
/// Lowercases, trims, and collapses each whitespace run to one hyphen. An
/// empty result falls back to `palette`.
#[must_use]
pub fn slugify(name: &str) -> String {
    let slug = name.split_whitespace().collect::<Vec<_>>().join("-").to_lowercase();
    if slug.is_empty() { DEFAULT_SLUG.to_string() } else { slug }
}

/// One `--{slug}-{n}` custom property per color inside a `:root` block.
#[must_use]
pub fn export_css(colors: &[Color], name: &str) -> String {
    let slug = slugify(name);
    let vars = colors
        .iter()
        .enumerate()
        .map(|(i, c)| format!("  --{slug}-{}: {};", i + 1, c.hex))
        .collect::<Vec<_>>()
        .join("\n");
    format!(":root {{\n{vars}\n}}")
}

// ─── JSON ────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
struct PaletteDocument {
    name: String,
    colors: Vec<ColorEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ColorEntry {
    hex: String,
    name: String,
    #[serde(default)]
    rgb: Option<Rgb>,
    #[serde(default)]
    hsl: Option<Hsl>,
}

/// Pretty-printed `{ name, colors: [{ hex, name, rgb, hsl }] }`.
///
/// The name is written exactly as given. `rgb` and `hsl` are recomputed
/// from each hex; an unparseable hex gets `null` for both.
///
/// # Errors
///
/// Returns [`PaletteError::Json`] if serialization fails.
pub fn export_json(colors: &[Color], name: &str) -> Result<String> {
    let document = PaletteDocument {
        name: name.to_string(),
        colors: colors
            .iter()
            .map(|c| ColorEntry {
                hex: c.hex.clone(),
                name: c.name.clone(),
                rgb: hex_to_rgb(&c.hex),
                hsl: hex_to_hsl(&c.hex),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Read back a document written by [`export_json`].
///
/// Returns the palette name and the colors in their original order. The
/// `rgb`/`hsl` fields are derived data and are ignored.
///
/// # Errors
///
/// Returns [`PaletteError::Json`] if `text` is not a palette document.
pub fn import_json(text: &str) -> Result<(String, Vec<Color>)> {
    let document: PaletteDocument = serde_json::from_str(text)?;
    let colors = document
        .colors
        .into_iter()
        .map(|e| Color { hex: e.hex, name: e.name })
        .collect();
    Ok((document.name, colors))
}

// ─── SVG ─────────────────────────────────────────────────────────────────────

/// Equal-width vertical stripes on a 500×200 canvas, each labeled with its
/// hex in a contrasting text color.
#[must_use]
pub fn export_svg(colors: &[Color]) -> String {
    let mut rects = Vec::with_capacity(colors.len());
    let mut labels = Vec::with_capacity(colors.len());

    if !colors.is_empty() {
        let swatch = f64::from(SVG_WIDTH) / colors.len() as f64;
        let label_y = SVG_HEIGHT - SVG_LABEL_INSET;

        for (i, c) in colors.iter().enumerate() {
            let x = i as f64 * swatch;
            let hex = escape_xml(&c.hex);
            rects.push(format!(
                "  <rect x=\"{x}\" y=\"0\" width=\"{swatch}\" height=\"{SVG_HEIGHT}\" fill=\"{hex}\" />"
            ));
            labels.push(format!(
                "  <text x=\"{}\" y=\"{label_y}\" text-anchor=\"middle\" fill=\"{}\" \
                 font-family=\"Inter, sans-serif\" font-size=\"12\">{hex}</text>",
                x + swatch / 2.0,
                text_color_for(&c.hex),
            ));
        }
    }

    let mut svg = String::new();
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{SVG_WIDTH}\" height=\"{SVG_HEIGHT}\" \
         viewBox=\"0 0 {SVG_WIDTH} {SVG_HEIGHT}\">\n{}\n{}\n</svg>",
        rects.join("\n"),
        labels.join("\n"),
    );
    svg
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn colors(hexes: &[&str]) -> Vec<Color> {
        hexes.iter().map(|h| Color::from_hex(h).unwrap()).collect()
    }

    // ── Format descriptor ───────────────────────────────────────────

    #[test]
    fn format_names_roundtrip() {
        for format in ExportFormat::all() {
            assert_eq!(ExportFormat::from_name(format.name()), Some(*format));
        }
        assert_eq!("SVG".parse::<ExportFormat>().unwrap(), ExportFormat::Svg);
        assert!(matches!("png".parse::<ExportFormat>(), Err(PaletteError::UnknownFormat(_))));
    }

    #[test]
    fn format_metadata() {
        assert_eq!(ExportFormat::Css.mime_type(), "text/css");
        assert_eq!(ExportFormat::Json.mime_type(), "application/json");
        assert_eq!(ExportFormat::Svg.mime_type(), "image/svg+xml");
        assert_eq!(ExportFormat::Json.extension(), "json");
        assert_eq!(ExportFormat::default(), ExportFormat::Css);
    }

    #[test]
    fn render_dispatches() {
        let cs = colors(&["#ff0000"]);
        assert_eq!(ExportFormat::Css.render(&cs, "x").unwrap(), export_css(&cs, "x"));
        assert_eq!(ExportFormat::Json.render(&cs, "x").unwrap(), export_json(&cs, "x").unwrap());
        assert_eq!(ExportFormat::Svg.render(&cs, "x").unwrap(), export_svg(&cs));
    }

    // ── CSS ─────────────────────────────────────────────────────────

    #[test]
    fn slug_rules() {
        assert_eq!(slugify("Sunset Palette"), "sunset-palette");
        assert_eq!(slugify("  Deep \t  Ocean\nBlues "), "deep-ocean-blues");
        assert_eq!(slugify("   "), "palette");
        assert_eq!(slugify(""), "palette");
    }

    #[test]
    fn css_output() {
        let css = export_css(&colors(&["#ff0000", "#00ff00", "#0000ff"]), "My Theme");
        assert_eq!(
            css,
            ":root {\n  --my-theme-1: #ff0000;\n  --my-theme-2: #00ff00;\n  --my-theme-3: #0000ff;\n}"
        );
    }

    // ── JSON ────────────────────────────────────────────────────────

    #[test]
    fn json_output() {
        let json = export_json(&colors(&["#ff0000"]), "Reds").unwrap();
        let expected = r##"{
  "name": "Reds",
  "colors": [
    {
      "hex": "#ff0000",
      "name": "Crimson Blaze",
      "rgb": {
        "r": 255,
        "g": 0,
        "b": 0
      },
      "hsl": {
        "h": 0,
        "s": 100,
        "l": 50
      }
    }
  ]
}"##;
        assert_eq!(json, expected);
    }

    #[test]
    fn json_name_is_kept_verbatim() {
        let json = export_json(&[], "  ").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "  ");
        assert_eq!(value["colors"], serde_json::json!([]));
        let (name, _) = import_json(&export_json(&colors(&["#ff0000"]), " My ").unwrap()).unwrap();
        assert_eq!(name, " My ");
    }

    #[test]
    fn json_invalid_hex_gets_nulls() {
        let json = export_json(&[Color::named("oops".to_string())], "x").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["colors"][0]["rgb"].is_null());
        assert!(value["colors"][0]["hsl"].is_null());
        assert_eq!(value["colors"][0]["name"], "Unknown");
    }

    #[test]
    fn json_preserves_hex_order() {
        let input = colors(&["#4f46e5", "#7c3aed", "#ec4899", "#f59e0b", "#10b981"]);
        let json = export_json(&input, "Defaults").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let hexes: Vec<&str> = value["colors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["hex"].as_str().unwrap())
            .collect();
        assert_eq!(hexes, ["#4f46e5", "#7c3aed", "#ec4899", "#f59e0b", "#10b981"]);
    }

    #[test]
    fn json_import_reconstructs_colors() {
        let input = colors(&["#bd0f0f", "#df4620", "#e86e30"]);
        let (name, back) = import_json(&export_json(&input, "Sunset Palette").unwrap()).unwrap();
        assert_eq!(name, "Sunset Palette");
        assert_eq!(back, input);
    }

    #[test]
    fn json_import_tolerates_missing_derived_fields() {
        let (name, back) =
            import_json(r##"{"name":"n","colors":[{"hex":"#000000","name":"Midnight Black"}]}"##).unwrap();
        assert_eq!(name, "n");
        assert_eq!(back, colors(&["#000000"]));
    }

    #[test]
    fn json_import_rejects_garbage() {
        assert!(matches!(import_json("[1, 2]"), Err(PaletteError::Json(_))));
        assert!(matches!(import_json(""), Err(PaletteError::Json(_))));
    }

    // ── SVG ─────────────────────────────────────────────────────────

    #[test]
    fn svg_output() {
        let svg = export_svg(&colors(&["#ff0000", "#ffff00"]));
        let expected = concat!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"500\" height=\"200\" viewBox=\"0 0 500 200\">\n",
            "  <rect x=\"0\" y=\"0\" width=\"250\" height=\"200\" fill=\"#ff0000\" />\n",
            "  <rect x=\"250\" y=\"0\" width=\"250\" height=\"200\" fill=\"#ffff00\" />\n",
            "  <text x=\"125\" y=\"185\" text-anchor=\"middle\" fill=\"#f0f0f5\" font-family=\"Inter, sans-serif\" font-size=\"12\">#ff0000</text>\n",
            "  <text x=\"375\" y=\"185\" text-anchor=\"middle\" fill=\"#1a1a2e\" font-family=\"Inter, sans-serif\" font-size=\"12\">#ffff00</text>\n",
            "</svg>",
        );
        assert_eq!(svg, expected);
    }

    #[test]
    fn svg_fractional_stripes() {
        let svg = export_svg(&colors(&["#000000", "#808080", "#ffffff"]));
        assert!(svg.contains("<rect x=\"166.66666666666666\" y=\"0\" width=\"166.66666666666666\""));
        assert!(svg.contains("<text x=\"416.66666666666663\""));
        assert_eq!(svg.matches("<rect").count(), 3);
        assert_eq!(svg.matches("<text").count(), 3);
    }

    #[test]
    fn svg_empty_palette_is_well_formed() {
        let svg = export_svg(&[]);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(!svg.contains("<rect"));
    }

    #[test]
    fn svg_escapes_markup() {
        let svg = export_svg(&[Color::named("<b>&\"".to_string())]);
        assert!(svg.contains("&lt;b&gt;&amp;&quot;"));
        assert!(!svg.contains("<b>"));
    }

    #[test]
    fn exports_are_deterministic() {
        let input = colors(&["#4f46e5", "#7c3aed"]);
        for format in ExportFormat::all() {
            assert_eq!(format.render(&input, "n").unwrap(), format.render(&input, "n").unwrap());
        }
    }
}
