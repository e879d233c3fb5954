// SPDX-License-Identifier: MIT
//
// paletteai: color palettes from moods, seed colors, and images.
//
// This is the binary that wires the library crates to a command line:
//
//   pal-color  → hex/RGB/HSL conversion, naming, WCAG contrast
//   pal-engine → mood, harmony, random, and image palettes; exports
//
// Each invocation flows through:
//
//   argv → clap → settings merge → command → Report → text | css | json | svg
//
// Settings only supply defaults. Flags always win over settings, and
// settings win over each command's built-in palette name.

mod cli;
mod error;
mod settings;

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use env_logger::Env;
use pal_color::{Color, WcagRating, contrast_ratio, normalize_hex, text_color_for};
use pal_engine::{
    ExtractStrategy, PaletteError, PaletteRecord, Source, random_palette, resolve_image_palette_with,
};
use serde_json::json;

use crate::cli::{CliArg, CliCommand, GlobalOption, OutputFormat};
use crate::error::{CliError, Result};
use crate::settings::{Settings, SettingsLoadStatus, load_settings};

// ─── Options ────────────────────────────────────────────────────────────────

/// Flags merged over settings.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Options {
    format: OutputFormat,
    name: Option<String>,
    strategy: ExtractStrategy,
}

impl Options {
    fn resolve(flags: &GlobalOption, strategy_flag: Option<ExtractStrategy>, settings: Settings) -> Self {
        Self {
            format: flags.format.or(settings.format).unwrap_or(OutputFormat::Text),
            name: flags.name.clone().or(settings.name),
            strategy: strategy_flag.or(settings.strategy).unwrap_or_default(),
        }
    }
}

// ─── Reports ────────────────────────────────────────────────────────────────

/// What a command produced, before formatting.
#[derive(Debug)]
enum Report {
    Palette(PaletteRecord),
    Contrast { foreground: String, background: String, ratio: f64 },
    Name(Color),
}

fn parse_color(hex: &str) -> Result<Color> {
    Color::from_hex(hex).ok_or_else(|| PaletteError::InvalidHex(hex.to_string()).into())
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| CliError::io(path, e))
}

/// Seed for `random` when none is given. Printed in the palette name so the
/// result can be reproduced.
#[allow(clippy::cast_possible_truncation)]
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(1, |d| {
            let nanos = d.as_nanos();
            (nanos ^ (nanos >> 32)) as u32
        })
}

fn execute(command: &CliCommand, options: &Options) -> Result<Report> {
    let mut record = match command {
        CliCommand::Mood { words } => PaletteRecord::from_mood(&CliCommand::mood_keyword(words)),
        CliCommand::Harmony { rule, seed } => {
            let colors = rule
                .palette(seed)
                .ok_or_else(|| PaletteError::InvalidHex(seed.clone()))?;
            let seed = normalize_hex(seed).unwrap_or_default();
            PaletteRecord::new(format!("{seed} {rule}"), colors, Source::Manual)
        }
        CliCommand::Random { seed } => {
            let seed = seed.unwrap_or_else(clock_seed);
            log::debug!("random palette seed {seed}");
            PaletteRecord::new(format!("Random {seed}"), random_palette(seed), Source::Fallback)
        }
        CliCommand::Extract { image, vision_reply, .. } => {
            let bytes = read_file(image)?;
            let reply = match vision_reply {
                Some(path) => Some(String::from_utf8_lossy(&read_file(path)?).into_owned()),
                None => None,
            };
            let (colors, source) =
                resolve_image_palette_with(reply.as_deref(), &bytes, options.strategy);
            if reply.is_some() && source == Source::ImageFallback {
                log::warn!("vision reply unusable, fell back to {} extraction", options.strategy);
            }
            PaletteRecord::extracted(colors, source)
        }
        CliCommand::Contrast { foreground, background } => {
            let foreground = parse_color(foreground)?.hex;
            let background = parse_color(background)?.hex;
            let ratio = contrast_ratio(&foreground, &background);
            return Ok(Report::Contrast { foreground, background, ratio });
        }
        CliCommand::Name { hex } => return Ok(Report::Name(parse_color(hex)?)),
    };

    if let Some(name) = &options.name {
        record.name.clone_from(name);
    }
    record.validate()?;
    Ok(Report::Palette(record))
}

fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match report {
        Report::Palette(record) => match format.export() {
            Some(export) => Ok(export.render(&record.colors, &record.name)?),
            None => Ok(palette_text(record)),
        },
        Report::Contrast { foreground, background, ratio } => {
            let rating = WcagRating::from_ratio(*ratio);
            match format {
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                    "foreground": foreground,
                    "background": background,
                    "ratio": ratio,
                    "rating": rating.label(),
                }))?),
                _ => Ok(format!("{foreground} on {background}: {ratio:.2}:1 ({rating})")),
            }
        }
        Report::Name(color) => match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "hex": color.hex,
                "name": color.name,
                "rgb": color.rgb(),
                "hsl": color.hsl(),
                "text": text_color_for(&color.hex),
            }))?),
            _ => Ok(color.to_string()),
        },
    }
}

fn palette_text(record: &PaletteRecord) -> String {
    let mut out = format!("{} ({})", record.name, record.source);
    for color in &record.colors {
        out.push_str(&format!("\n  {}  {}", color.hex, color.name));
    }
    out
}

fn write_output(text: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => fs::write(path, text).map_err(|e| CliError::io(path, e)),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{text}").map_err(CliError::Stdout)
        }
    }
}

fn run(args: CliArg) -> Result<()> {
    let (settings, status) = load_settings(args.global_options.config.as_deref())?.into_parts();
    match status {
        SettingsLoadStatus::Loaded => log::debug!("settings loaded"),
        SettingsLoadStatus::Missing => log::debug!("no settings file, using defaults"),
        SettingsLoadStatus::Invalid(reason) => log::warn!("ignoring invalid settings: {reason}"),
    }

    let strategy_flag = match &args.command {
        CliCommand::Extract { strategy, .. } => strategy.map(ExtractStrategy::from),
        _ => None,
    };
    let options = Options::resolve(&args.global_options, strategy_flag, settings);

    let report = execute(&args.command, &options)?;
    if matches!(report, Report::Contrast { .. } | Report::Name(_))
        && matches!(options.format, OutputFormat::Css | OutputFormat::Svg)
    {
        log::warn!("{:?} output applies to palettes only, printing text", options.format);
    }
    let text = render(&report, options.format)?;
    write_output(&text, args.global_options.output.as_deref())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();

    if let Err(e) = run(CliArg::parse()) {
        eprintln!("paletteai: {e}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
