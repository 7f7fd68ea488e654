//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ExcludeRule, StylesheetLayout};
use crate::error::RestyleResult;

use super::loader::{self, LoadedConfig};

/// Where pages live and which of them are touched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagesConfig {
    #[serde(default = "default_root")]
    pub root: PathBuf,

    #[serde(default = "default_extension")]
    pub extension: String,

    /// Path substring left alone by remove runs (empty = none)
    #[serde(default = "default_exclude")]
    pub exclude: String,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            extension: default_extension(),
            exclude: default_exclude(),
        }
    }
}

impl PagesConfig {
    pub fn exclude_rule(&self) -> ExcludeRule {
        ExcludeRule::new(self.exclude.clone())
    }
}

fn default_root() -> PathBuf {
    PathBuf::from("pages")
}

fn default_extension() -> String {
    "html".to_string()
}

fn default_exclude() -> String {
    ExcludeRule::DEFAULT_NEEDLE.to_string()
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub pages: PagesConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub stylesheets: StylesheetLayout,
}

impl Config {
    /// Project configuration file name, looked up in the working directory
    pub const FILE_NAME: &'static str = "restyle.toml";

    /// Load the explicit, project or user config (first found), then apply
    /// environment overrides
    pub fn load_layered(project_dir: &Path, explicit: Option<&Path>) -> RestyleResult<LoadedConfig> {
        loader::load_layered(project_dir, explicit)
    }
}
