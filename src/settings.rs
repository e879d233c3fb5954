// SPDX-License-Identifier: MIT
//
// Optional JSON settings. A missing or malformed file never stops the
// program; it only means the built-in defaults apply.
//
//   {
//     "format": "svg",              text | css | json | svg
//     "name": "Brand Colors",       export name override
//     "strategy": "stride"          buckets | stride
//   }

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use pal_engine::ExtractStrategy;
use serde::Deserialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::error::{CliError, Result};

/// How the settings file was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// User defaults. Every field is optional; command-line flags win.
///
/// Deserializing never rejects a JSON object: unknown keys are skipped and
/// unrecognized values leave their field unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "SettingsFile")]
pub struct Settings {
    pub format: Option<OutputFormat>,
    pub name: Option<String>,
    pub strategy: Option<ExtractStrategy>,
}

/// The on-disk shape, before values are interpreted.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SettingsFile {
    format: Value,
    name: Value,
    strategy: Value,
}

impl From<SettingsFile> for Settings {
    fn from(file: SettingsFile) -> Self {
        let format = file.format.as_str().and_then(|format| {
            let parsed = OutputFormat::from_name(format);
            if parsed.is_none() {
                log::warn!("settings: unknown format {format:?}, ignoring");
            }
            parsed
        });
        let strategy = file.strategy.as_str().and_then(|strategy| {
            let parsed = ExtractStrategy::from_name(strategy);
            if parsed.is_none() {
                log::warn!("settings: unknown strategy {strategy:?}, ignoring");
            }
            parsed
        });
        let name = file
            .name
            .as_str()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        Self { format, name, strategy }
    }
}

/// Settings read from disk together with how the read went.
#[derive(Debug, Clone)]
pub struct SettingsLoad {
    settings: Settings,
    status: SettingsLoadStatus,
}

impl SettingsLoad {
    pub const fn new(settings: Settings, status: SettingsLoadStatus) -> Self {
        Self { settings, status }
    }

    fn defaults(status: SettingsLoadStatus) -> Self {
        Self::new(Settings::default(), status)
    }

    pub fn into_parts(self) -> (Settings, SettingsLoadStatus) {
        (self.settings, self.status)
    }
}

/// Load from `path`, or from `$HOME/.config/paletteai/settings.json` when
/// `None`.
///
/// Only I/O failures other than "not found" are errors. Malformed JSON
/// loads the defaults with [`SettingsLoadStatus::Invalid`].
pub fn load_settings(path: Option<&Path>) -> Result<SettingsLoad> {
    let default_path;
    let path: &Path = match path {
        Some(path) => path,
        None => {
            default_path = default_settings_path();
            &default_path
        }
    };

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(SettingsLoad::defaults(SettingsLoadStatus::Missing));
        }
        Err(err) => return Err(CliError::io(path, err)),
    };

    Ok(match serde_json::from_str::<Settings>(&text) {
        Ok(settings) => SettingsLoad::new(settings, SettingsLoadStatus::Loaded),
        Err(err) => SettingsLoad::defaults(SettingsLoadStatus::Invalid(err.to_string())),
    })
}

fn default_settings_path() -> PathBuf {
    let config_dir = std::env::var_os("HOME")
        .map_or_else(std::env::temp_dir, |home| PathBuf::from(home).join(".config"));
    config_dir.join("paletteai").join("settings.json")
}

// ─── Tests ──────────────────────────────────────────────────────────────────
