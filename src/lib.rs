//! Orb Weaver - procedural orb-weaver spider web geometry
//!
//! This library builds the line segments of a spider web on a canvas: a
//! triangular frame hung from three origins, radial spokes from a hub, an
//! auxiliary spiral and the capture spiral laid inside it. The output is
//! plain geometry for any renderer to draw.
//!
//! # Example
//!
//! ```rust
//! use orb_weaver::{weave, SegmentRole, WeaveSettings};
//!
//! let web = weave(&WeaveSettings::default().with_seed(42)).unwrap();
//! assert!(web.spokes.len() >= 12);
//! assert!(web.count_role(SegmentRole::Capture) > 0);
//! ```

pub mod error;
pub mod export;
pub mod geometry;
pub mod settings;
pub mod web;

pub use error::SettingsError;
pub use export::{export, ExportConfig, ExportError, ExportFormat};
pub use geometry::{Line, Vector};
pub use settings::{Canvas, WeaveSettings};
pub use web::{
    generate, generate_with_rng, AuxOrder, LintWarning, SegmentRole, WeaveError, WebGeometry,
    WebParams,
};

use std::path::Path;

use thiserror::Error;

/// Errors that can occur anywhere between a settings file and exported text
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Error loading settings
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),

    /// Error while weaving
    #[error("weave error: {0}")]
    Weave(#[from] WeaveError),

    /// Error serializing the result
    #[error("export error: {0}")]
    Export(#[from] ExportError),
}

/// Generate a web from settings
///
/// Settings without a seed weave from a freshly drawn one.
pub fn weave(settings: &WeaveSettings) -> Result<WebGeometry, WeaveError> {
    let seed = settings.seed_or_random();
    log::debug!("weaving with seed {}", seed);
    generate(
        settings.canvas.width,
        settings.canvas.height,
        &settings.web,
        seed,
    )
}

/// Generate a web from settings and serialize it
///
/// # Example
///
/// ```rust
/// use orb_weaver::{weave_to_string, ExportConfig, ExportFormat, WeaveSettings};
///
/// let settings = WeaveSettings::default().with_seed(7).with_canvas(320.0, 240.0);
/// let config = ExportConfig::new()
///     .with_format(ExportFormat::Json)
///     .with_segments_only(true);
///
/// let json = weave_to_string(&settings, &config).unwrap();
/// assert!(json.contains("\"segments\""));
/// ```
pub fn weave_to_string(
    settings: &WeaveSettings,
    config: &ExportConfig,
) -> Result<String, PipelineError> {
    let geometry = weave(settings)?;
    Ok(export(&geometry, config)?)
}

/// Load a settings file, weave it and serialize the result
pub fn weave_file(path: &Path, config: &ExportConfig) -> Result<String, PipelineError> {
    let settings = WeaveSettings::from_file(path)?;
    weave_to_string(&settings, config)
}
