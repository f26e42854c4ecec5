//! Weave settings files
//!
//! A settings file pins the canvas, the web parameters and optionally the
//! seed of a weave, so a web can be regenerated exactly:
//!
//! ```toml
//! seed = 42
//!
//! [canvas]
//! width = 800.0
//! height = 600.0
//!
//! [web]
//! max_gap_degrees = 24.0
//! aux_order = "recorded"
//! ```
//!
//! Every key is optional; missing ones fall back to the built-in defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::web::WebParams;

/// Size of the drawing area
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

/// Everything needed to reproduce a weave
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeaveSettings {
    /// Fixed seed; a fresh one is drawn when absent
    pub seed: Option<u64>,
    pub canvas: Canvas,
    pub web: WebParams,
}

/// TOML structure for deserializing settings
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlSettings {
    seed: Option<u64>,
    canvas: Option<TomlCanvas>,
    web: Option<WebParams>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlCanvas {
    width: Option<f64>,
    height: Option<f64>,
}

/// Built-in settings: an 800 × 600 canvas with default web parameters
const DEFAULT_SETTINGS: &str = r#"
[canvas]
width = 800.0
height = 600.0

[web]
max_gap_degrees = 30.0
min_clearance_factor = 0.25
ring_count = 5
cap_capacity = 2
jitter_factor = 0.1
spiral_jitter = 0.05
max_placement_attempts = 64
aux_order = "distance"
"#;

const DEFAULT_CANVAS: Canvas = Canvas {
    width: 800.0,
    height: 600.0,
};

impl WeaveSettings {
    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse settings from a TOML string
    pub fn from_str(content: &str) -> Result<Self, SettingsError> {
        let parsed: TomlSettings = toml::from_str(content)?;
        let canvas = parsed.canvas.map_or(DEFAULT_CANVAS, |c| Canvas {
            width: c.width.unwrap_or(DEFAULT_CANVAS.width),
            height: c.height.unwrap_or(DEFAULT_CANVAS.height),
        });

        Ok(WeaveSettings {
            seed: parsed.seed,
            canvas,
            web: parsed.web.unwrap_or_default(),
        })
    }

    /// The fixed seed, or a freshly drawn one
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_canvas(mut self, width: f64, height: f64) -> Self {
        self.canvas = Canvas { width, height };
        self
    }

    pub fn with_web(mut self, web: WebParams) -> Self {
        self.web = web;
        self
    }
}

impl Default for WeaveSettings {
    fn default() -> Self {
        Self::from_str(DEFAULT_SETTINGS).expect("Default settings should be valid TOML")
    }
}
