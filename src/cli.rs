// SPDX-License-Identifier: MIT
//
// Command-line surface. Parsing only; dispatch lives in main.rs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use pal_engine::{ExportFormat, ExtractStrategy, Harmony};

#[derive(Debug, Parser)]
#[command(bin_name = "paletteai")]
#[command(about = "Color palettes from moods, seed colors, and images")]
#[command(version)]
#[command(arg_required_else_help(true))]
pub struct CliArg {
    #[command(subcommand)]
    pub command: CliCommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(global = true, long, short = 'f', value_enum, help = "Output format [default: text]")]
    pub format: Option<OutputFormat>,

    #[arg(global = true, long, short = 'n', help = "Palette name used in exports")]
    pub name: Option<String>,

    #[arg(global = true, long, short = 'o', help = "Write to this file instead of stdout")]
    pub output: Option<PathBuf>,

    #[arg(
        global = true,
        long,
        short = 'c',
        help = "Settings file [default: ~/.config/paletteai/settings.json]"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    #[clap(about = "🎨 Palette from a mood keyword\n💡 Eg: `paletteai mood deep ocean`")]
    Mood {
        /// Mood keyword; several words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },

    #[clap(about = "🌈 Five related colors from a seed\n💡 Eg: `paletteai harmony triadic '#3498db'`")]
    Harmony {
        /// complementary, analogous, triadic, or split-complementary
        rule: Harmony,
        /// Seed color as #rgb or #rrggbb
        seed: String,
    },

    #[clap(about = "🎲 Random palette; pass --seed to reproduce one")]
    Random {
        #[arg(long, short = 's')]
        seed: Option<u32>,
    },

    #[clap(about = "🖼️  Colors from an image file")]
    Extract {
        /// Image file, read as raw bytes
        image: PathBuf,

        #[arg(long, value_enum, help = "Fallback extraction strategy [default: buckets]")]
        strategy: Option<StrategyArg>,

        #[arg(long, help = "File holding a vision model reply (JSON array of hex strings)")]
        vision_reply: Option<PathBuf>,
    },

    #[clap(about = "🔍 WCAG contrast ratio between two colors")]
    Contrast { foreground: String, background: String },

    #[clap(about = "🏷️  Human-readable name of a color")]
    Name { hex: String },
}

impl CliCommand {
    /// Mood words joined into one keyword.
    #[must_use]
    pub fn mood_keyword(words: &[String]) -> String {
        words.join(" ")
    }
}

/// What the command prints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `hex  name` line per color
    Text,
    Css,
    Json,
    Svg,
}

impl OutputFormat {
    /// The export encoder behind this format; `None` for plain text.
    #[must_use]
    pub const fn export(self) -> Option<ExportFormat> {
        match self {
            Self::Text => None,
            Self::Css => Some(ExportFormat::Css),
            Self::Json => Some(ExportFormat::Json),
            Self::Svg => Some(ExportFormat::Svg),
        }
    }

    /// Case-insensitive lookup by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name.trim(), true).ok()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Sort sampled bytes by hue and average five buckets
    Buckets,
    /// Five evenly spaced byte triples
    Stride,
}

impl From<StrategyArg> for ExtractStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Buckets => Self::HueBuckets,
            StrategyArg::Stride => Self::Stride,
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
