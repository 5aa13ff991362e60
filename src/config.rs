//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/uxforge/uxforge.toml`
//! 3. Environment variables: `UXFORGE_*` prefix (nested keys joined with `__`,
//!    e.g. `UXFORGE_LAYOUT__ROW_HEIGHT=96`)

use std::path::PathBuf;

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Margin subtracted from the canvas to get the usable plotting area.
///
/// Left/right are wide to leave room for node labels that extend past the
/// first and last tree level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 120.0,
            bottom: 20.0,
            left: 120.0,
        }
    }
}

/// Tunable spacing constants for the sitemap layout engine.
///
/// These steer canvas sizing and node separation, never the layout structure
/// itself: leaf count drives vertical space, tree depth drives horizontal
/// space.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutSettings {
    /// Vertical space reserved per leaf row
    pub row_height: f64,
    /// Horizontal space reserved per tree level
    pub level_width: f64,
    /// Canvas never shrinks below this height
    pub min_height: f64,
    /// Canvas never shrinks below this width
    pub min_width: f64,
    pub margin: Margin,
    /// Slot gap between adjacent leaves sharing a parent
    pub sibling_gap: f64,
    /// Slot gap between adjacent leaves with different parents
    pub cousin_gap: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            row_height: 80.0,
            level_width: 300.0,
            min_height: 800.0,
            min_width: 1000.0,
            margin: Margin::default(),
            sibling_gap: 1.5,
            cousin_gap: 2.0,
        }
    }
}

/// Export destination settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExportSettings {
    /// Directory for default-named exports (None: current directory)
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub layout: LayoutSettings,
    pub export: ExportSettings,
}

/// Get the global config directory for uxforge.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "uxforge").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("uxforge.toml"))
}

impl Settings {
    /// Load settings with layered precedence.
    pub fn load() -> Result<Self, ApplicationError> {
        let defaults = Config::try_from(&Self::default()).map_err(|e| ApplicationError::Config {
            message: format!("defaults: {}", e),
        })?;

        let mut builder = Config::builder().add_source(defaults);

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                builder = builder.add_source(File::from(global_path));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("UXFORGE")
                .separator("__")
                .try_parsing(true),
        );

        builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| ApplicationError::Config {
                message: e.to_string(),
            })
    }
}
