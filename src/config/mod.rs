//! Configuration module for tt
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (TT_BIN_DIR, TT_INC_DIR)
//! 3. Config file (`--config`, `./tt.toml`, or `~/.config/tt/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE};
pub use types::{ColorMode, Config, EnvConfig, OutputConfig};
