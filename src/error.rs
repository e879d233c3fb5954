// SPDX-License-Identifier: MIT

use std::io;
use std::path::PathBuf;

use pal_engine::PaletteError;
use thiserror::Error;

/// Errors surfaced to the user by the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write to stdout: {0}")]
    Stdout(#[source] io::Error),

    #[error(transparent)]
    Palette(#[from] PaletteError),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
