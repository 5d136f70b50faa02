use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

/// On-disk representation of a configuration file, detected from its
/// extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
}

impl DataFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Some(DataFormat::Json),
            Some("yml") | Some("yaml") => Some(DataFormat::Yaml),
            _ => None,
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataFormat::Json => write!(f, "JSON"),
            DataFormat::Yaml => write!(f, "YAML"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Unsupported file format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {} as {format}: {source}", path.display())]
    Parse {
        path: PathBuf,
        format: DataFormat,
        #[source]
        source: ParseError,
    },
}

impl InputError {
    fn unsupported_format(path: &Path) -> Self {
        InputError::UnsupportedFormat {
            path: path.to_path_buf(),
        }
    }

    fn io(path: &Path, source: std::io::Error) -> Self {
        InputError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn parse(path: &Path, format: DataFormat, source: ParseError) -> Self {
        InputError::Parse {
            path: path.to_path_buf(),
            format,
            source,
        }
    }
}

/// Reads a configuration file and parses it into a document tree.
///
/// The format comes from the file extension; the content itself is never
/// sniffed.
pub fn read_file(path: &Path) -> Result<Value, InputError> {
    let format =
        DataFormat::from_path(path).ok_or_else(|| InputError::unsupported_format(path))?;
    let content = fs::read_to_string(path).map_err(|e| InputError::io(path, e))?;
    debug!(path = %path.display(), %format, bytes = content.len(), "parsing input file");

    parse_str(&content, format).map_err(|e| InputError::parse(path, format, e))
}

pub fn parse_str(content: &str, format: DataFormat) -> Result<Value, ParseError> {
    match format {
        DataFormat::Json => Ok(serde_json::from_str(content)?),
        DataFormat::Yaml => Ok(serde_yaml::from_str(content)?),
    }
}
