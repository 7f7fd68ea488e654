//! Test environment builder for isolated restyle testing.
//!
//! Provides `TestEnv` - an isolated project directory and home directory,
//! plus helpers to write pages and run the restyle binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::SystemTime;

use tempfile::TempDir;

/// Environment variables that would leak the developer's setup into tests
const SCRUBBED_ENV: &[&str] = &[
    "RESTYLE_PAGES_DIR",
    "RESTYLE_EXTENSION",
    "RESTYLE_EXCLUDE",
    "RESTYLE_COLOR",
    "CI",
    "GITHUB_ACTIONS",
];

/// Result of running a restyle CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l).unwrap_or_else(|e| panic!("invalid NDJSON line {l:?}: {e}"))
            })
            .collect()
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Working directory for the run (holds `pages/` and `restyle.toml`)
    pub project_root: TempDir,
    /// Stand-in HOME so user configuration never leaks in
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project temp dir"),
            home_dir: TempDir::new().expect("Failed to create home temp dir"),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// User configuration file read by this environment
    pub fn user_config_path(&self) -> PathBuf {
        self.home_dir.path().join("restyle").join("config.toml")
    }

    /// Write a file to the project directory
    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    /// Write raw bytes to the project directory
    pub fn write_bytes(&self, relative: &str, content: &[u8]) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    /// Write the user configuration file
    pub fn write_user_config(&self, content: &str) {
        let path = self.user_config_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    /// Read a file from the project directory
    pub fn read_file(&self, relative: &str) -> String {
        let path = self.project_path(relative);
        std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub fn modified(&self, relative: &str) -> SystemTime {
        std::fs::metadata(self.project_path(relative))
            .and_then(|m| m.modified())
            .unwrap()
    }

    /// Run restyle from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run restyle from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from(self.project_root.path(), args, env_vars)
    }

    /// Run restyle from a specific directory
    pub fn run_from(&self, cwd: &Path, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_restyle"));
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path())
            .env("RESTYLE_USER_CONFIG", self.user_config_path())
            .env("NO_COLOR", "1")
            .env("TERM", "dumb");
        for key in SCRUBBED_ENV {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute restyle");
        to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
