//! Configuration discovery and loading

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{TtError, TtResult};

use super::types::Config;

/// Config file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "tt.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Configuration together with where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    /// File the configuration was read from; `None` for defaults
    pub source: Option<PathBuf>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
///
/// Relative directories in `[env]` are resolved against the file's directory.
pub fn load_with_warnings(path: &Path) -> TtResult<(Config, Vec<ConfigWarning>)> {
    let content =
        fs::read_to_string(path).map_err(|e| TtError::io("failed to read config", path, e))?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let mut config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| TtError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let base = path.parent().unwrap_or_else(|| Path::new(""));
    config.env.bin_dir = config.env.bin_dir.map(|dir| base.join(dir));
    config.env.inc_dir = config.env.inc_dir.map(|dir| base.join(dir));

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load the explicitly named file, or the first existing candidate, or defaults.
///
/// A named file must exist. Any file that exists must parse.
pub fn discover(explicit: Option<&Path>, cwd: &Path) -> TtResult<LoadedConfig> {
    if let Some(path) = explicit {
        return load_from(path);
    }

    let candidates = [Some(cwd.join(PROJECT_CONFIG_FILE)), user_config_path()];
    for candidate in candidates.into_iter().flatten() {
        if candidate.is_file() {
            return load_from(&candidate);
        }
    }

    log::debug!("no config file found, using defaults");
    Ok(LoadedConfig::default())
}

fn load_from(path: &Path) -> TtResult<LoadedConfig> {
    log::debug!("loading config from {}", path.display());
    let (config, warnings) = load_with_warnings(path)?;
    Ok(LoadedConfig {
        config,
        warnings,
        source: Some(path.to_path_buf()),
    })
}

/// Apply TT_BIN_DIR and TT_INC_DIR; empty values are ignored
pub fn with_env_overrides<F>(mut config: Config, var: F) -> Config
where
    F: Fn(&str) -> Option<OsString>,
{
    let non_empty = |key: &str| var(key).filter(|v| !v.is_empty()).map(PathBuf::from);

    if let Some(dir) = non_empty("TT_BIN_DIR") {
        config.env.bin_dir = Some(dir);
    }
    if let Some(dir) = non_empty("TT_INC_DIR") {
        config.env.inc_dir = Some(dir);
    }

    config
}

/// `$XDG_CONFIG_HOME/tt/config.toml`, or `~/.config/tt/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs_config_dir().map(|dir| dir.join("tt").join("config.toml"))
}

/// Parent of the default `bin` and `include` directories
pub(crate) fn default_base_dir() -> PathBuf {
    match dirs::data_local_dir() {
        Some(dir) => dir.join("tt"),
        None => {
            log::warn!("cannot determine the user data directory, using ./tt");
            PathBuf::from("tt")
        }
    }
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

pub(super) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["env", "bin_dir", "inc_dir", "output", "color", "unicode"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
