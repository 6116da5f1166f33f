//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Layout;
use crate::error::TtResult;

use super::loader::{self, ConfigWarning, LoadedConfig};

/// Location of installed binaries and headers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvConfig {
    /// Base directory of program namespaces
    #[serde(default)]
    pub bin_dir: Option<PathBuf>,

    /// Base directory of header namespaces
    #[serde(default)]
    pub inc_dir: Option<PathBuf>,
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
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub env: EnvConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> TtResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> TtResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load the explicit file, else the first config file found, else defaults
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> TtResult<LoadedConfig> {
        loader::discover(explicit, cwd)
    }

    /// Apply environment variable overrides (TT_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var_os(key))
    }

    /// Apply command line overrides
    pub fn with_dir_overrides(mut self, bin_dir: Option<PathBuf>, inc_dir: Option<PathBuf>) -> Self {
        if bin_dir.is_some() {
            self.env.bin_dir = bin_dir;
        }
        if inc_dir.is_some() {
            self.env.inc_dir = inc_dir;
        }
        self
    }

    /// Directory layout, falling back to the per-user data directory
    pub fn layout(&self) -> Layout {
        let base = loader::default_base_dir();
        Layout::new(
            self.env.bin_dir.clone().unwrap_or_else(|| base.join("bin")),
            self.env.inc_dir.clone().unwrap_or_else(|| base.join("include")),
        )
    }
}
