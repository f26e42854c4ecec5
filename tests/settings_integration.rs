//! Integration tests for weave settings files

use std::path::Path;

use orb_weaver::{weave_file, ExportConfig, PipelineError, SettingsError, WeaveSettings};

#[test]
fn test_fixture_loads_from_disk() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/scenario-42.toml");
    let settings = WeaveSettings::from_file(&path).expect("Should load settings");
    assert_eq!(settings.seed, Some(42));
    assert_eq!(settings.canvas.width, 800.0);
    assert_eq!(settings.web.ring_count, 5);
}

#[test]
fn test_weave_file_produces_json() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sparse.toml");
    let config = ExportConfig::new().with_segments_only(true);
    let json = weave_file(&path, &config).expect("Should weave");
    let value: serde_json::Value = serde_json::from_str(&json).expect("Should be JSON");
    let spokes = value["segments"]
        .as_array()
        .map(|segments| segments.iter().filter(|s| s["role"] == "spoke").count());
    assert_eq!(spokes, Some(3));
}

#[test]
fn test_unknown_key_report() {
    let source = include_str!("fixtures/unknown-key.toml");
    let err = WeaveSettings::from_str(source).unwrap_err();
    assert!(matches!(err, SettingsError::Toml(_)));

    let report = err.format(source, "unknown-key.toml");
    assert!(report.contains("unknown-key.toml"));
    assert!(report.contains("spoke_count"));
}

#[test]
fn test_bad_file_surfaces_as_settings_error() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/unknown-key.toml");
    let err = weave_file(&path, &ExportConfig::default()).unwrap_err();
    assert!(matches!(err, PipelineError::Settings(SettingsError::Toml(_))));
}
