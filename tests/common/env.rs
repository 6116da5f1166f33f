//! Test environment builder for isolated tt testing.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running a tt CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse stdout as NDJSON
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("invalid JSON line {:?}: {}", line, e))
            })
            .collect()
    }
}

/// Isolated environment: one temp root holding `bin/`, `include/` and a
/// config home, so no real installation is touched.
pub struct TestEnv {
    pub root: TempDir,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        fs::create_dir_all(root.path().join("bin")).unwrap();
        fs::create_dir_all(root.path().join("include")).unwrap();
        Self { root }
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.root.path().join("bin")
    }

    pub fn inc_dir(&self) -> PathBuf {
        self.root.path().join("include")
    }

    /// Create `<bin>/<program>/<version>/`
    pub fn install(&self, program: &str, version: &str) -> &Self {
        fs::create_dir_all(self.bin_dir().join(program).join(version)).unwrap();
        self
    }

    /// Create `<include>/<program>/<version>/`
    pub fn install_headers(&self, program: &str, version: &str) -> &Self {
        fs::create_dir_all(self.inc_dir().join(program).join(version)).unwrap();
        self
    }

    /// Point `<bin>/<program>/current` at `version`
    pub fn activate(&self, program: &str, version: &str) -> &Self {
        std::os::unix::fs::symlink(version, self.bin_dir().join(program).join("current")).unwrap();
        self
    }

    pub fn active_binary(&self, program: &str) -> Option<String> {
        read_link_name(&self.bin_dir().join(program).join("current"))
    }

    pub fn active_headers(&self, program: &str) -> Option<String> {
        read_link_name(&self.inc_dir().join(program).join("current"))
    }

    /// Run tt with `--bin-dir`/`--inc-dir` pointed at this environment
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_tt"));
        cmd.current_dir(self.root.path())
            .args(args)
            .arg("--bin-dir")
            .arg(self.bin_dir())
            .arg("--inc-dir")
            .arg(self.inc_dir())
            .env("XDG_CONFIG_HOME", self.root.path().join("config"))
            .env("NO_COLOR", "1")
            .env("CI", "1")
            .env_remove("TT_LOG")
            .env_remove("TT_BIN_DIR")
            .env_remove("TT_INC_DIR");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute tt");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

fn read_link_name(link: &Path) -> Option<String> {
    fs::read_link(link)
        .ok()
        .and_then(|target| target.file_name().map(|n| n.to_string_lossy().to_string()))
}
