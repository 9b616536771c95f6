//! Isolated environment for running the `keel` binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running a Keel CLI command
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

    /// Parse every stdout line as a JSON object
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l).unwrap_or_else(|e| panic!("not JSON ({e}): {l}"))
            })
            .collect()
    }
}

/// Temp work directory plus an isolated config directory
///
/// `XDG_CONFIG_HOME` and `HOME` point into the environment, so a developer's
/// own `keel/config.toml` never leaks into a test.
pub struct TestEnv {
    pub work_dir: TempDir,
    pub config_home: TempDir,
    keel_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            work_dir: tempfile::tempdir().expect("temp work dir"),
            config_home: tempfile::tempdir().expect("temp config dir"),
            keel_bin: PathBuf::from(env!("CARGO_BIN_EXE_keel")),
        }
    }

    /// Get path relative to the work directory
    pub fn path(&self, relative: &str) -> PathBuf {
        self.work_dir.path().join(relative)
    }

    /// Write a file into the work directory
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let full = self.path(relative);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(&full, content).expect("write file");
        full
    }

    /// Install the default user config (`<config dir>/keel/config.toml`)
    pub fn write_user_config(&self, content: &str) {
        let dir = self.config_home.path().join("keel");
        std::fs::create_dir_all(&dir).expect("create config dir");
        std::fs::write(dir.join("config.toml"), content).expect("write config");
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.keel_bin);
        cmd.current_dir(self.work_dir.path())
            .args(args)
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("HOME", self.config_home.path())
            .env_remove("RUST_LOG")
            .env_remove("GITHUB_ACTIONS")
            .env_remove("KEEL_VERBOSITY")
            .env_remove("KEEL_VALIDATE_SYNTAX")
            .env_remove("KEEL_ANSWERS_FILE");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        to_result(cmd.output().expect("Failed to execute keel"))
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

/// Relative `/` paths of every file below `dir`, sorted
pub fn list_all_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    collect(dir, dir, &mut files);
    files.sort();
    files
}

fn collect(root: &Path, dir: &Path, out: &mut Vec<String>) {
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                collect(root, &path, out);
            } else if let Ok(relative) = path.strip_prefix(root) {
                out.push(relative.to_string_lossy().replace('\\', "/"));
            }
        }
    }
}
