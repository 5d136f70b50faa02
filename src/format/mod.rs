mod json;
mod plain;
mod stylish;

use std::fmt;

use clap::ValueEnum;

use crate::diff::Diff;

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("failed to serialize the diff: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Output format for a rendered diff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Indented tree with `+`/`-` markers
    #[default]
    Stylish,

    /// One sentence per change, nested keys joined with dots
    Plain,

    /// The diff tree serialized as JSON
    Json,
}

impl Format {
    pub fn render(self, diff: &Diff) -> Result<String, FormatError> {
        match self {
            Format::Stylish => Ok(stylish::render(diff)),
            Format::Plain => Ok(plain::render(diff)),
            Format::Json => Ok(json::render(diff)?),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Stylish => write!(f, "stylish"),
            Format::Plain => write!(f, "plain"),
            Format::Json => write!(f, "json"),
        }
    }
}
