//! Centralized camera options with TOML preset support.
//!
//! All tweakable settings (projection parameters, pointer-controller tuning)
//! are consolidated here. Options serialize to/from TOML for view presets
//! and use `#[serde(default)]` throughout so partial files work correctly.

mod camera;
mod controls;

use std::path::Path;

pub use camera::CameraOptions;
pub use controls::ControlOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::NavcamError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[controls]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and frustum parameters.
    pub camera: CameraOptions,
    /// Pointer-controller tuning consumed by navigation modes.
    pub controls: ControlOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, NavcamError> {
        let content = std::fs::read_to_string(path).map_err(NavcamError::Io)?;
        toml::from_str(&content)
            .map_err(|e| NavcamError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), NavcamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| NavcamError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(NavcamError::Io)?;
        }
        std::fs::write(path, content).map_err(NavcamError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
fovy = 60.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.fovy, 60.0);
        // Everything else should be default
        assert_eq!(opts.camera.frustum_size, 50.0);
        assert_eq!(opts.controls.rotate_speed, 1.0);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("controls"));

        // Camera should expose tunables but not clipping planes
        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("fit_offset").is_some());
        assert!(camera.get("znear").is_none());
        assert!(camera.get("zfar").is_none());
    }
}
