//! Configuration for geometry export

use std::fmt;
use std::str::FromStr;

/// Serialization format of an export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Toml,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Toml => write!(f, "toml"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "toml" => Ok(ExportFormat::Toml),
            other => Err(format!("unknown export format '{}' (expected json or toml)", other)),
        }
    }
}

/// Configuration options for export output
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub format: ExportFormat,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Emit only the tagged segment list instead of the whole geometry
    pub segments_only: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::Json,
            pretty_print: true,
            segments_only: false,
        }
    }
}

impl ExportConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(mut self, format: ExportFormat) -> Self {
        self.format = format;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    pub fn with_segments_only(mut self, segments_only: bool) -> Self {
        self.segments_only = segments_only;
        self
    }
}
