//! Serialization of finished webs for renderers and other collaborators

mod config;

pub use config::{ExportConfig, ExportFormat};

use serde::Serialize;
use thiserror::Error;

use crate::web::{Segment, WebGeometry};

/// Errors that can occur while serializing a web
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to serialize TOML: {0}")]
    Toml(#[from] toml::ser::Error),
}

/// Segment list wrapped in a table, since a TOML document cannot be a bare array
#[derive(Serialize)]
struct SegmentDocument<'a> {
    segments: &'a [Segment],
}

/// Serialize `geometry` as configured
pub fn export(geometry: &WebGeometry, config: &ExportConfig) -> Result<String, ExportError> {
    if config.segments_only {
        export_segments(&geometry.segments, config)
    } else {
        encode(geometry, config)
    }
}

/// Serialize a segment list as a `segments` document
pub fn export_segments(segments: &[Segment], config: &ExportConfig) -> Result<String, ExportError> {
    encode(&SegmentDocument { segments }, config)
}

fn encode<T: Serialize>(value: &T, config: &ExportConfig) -> Result<String, ExportError> {
    let output = match (config.format, config.pretty_print) {
        (ExportFormat::Json, true) => serde_json::to_string_pretty(value)?,
        (ExportFormat::Json, false) => serde_json::to_string(value)?,
        (ExportFormat::Toml, true) => toml::to_string_pretty(value)?,
        (ExportFormat::Toml, false) => toml::to_string(value)?,
    };
    Ok(output)
}
