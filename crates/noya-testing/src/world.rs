//! TestWorld pattern for declarative integration test setup.
//!
//! Every world owns a fresh temp data directory, so tests never see each
//! other's accounts, sessions or spaces.

use anyhow::{Context, Result};
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const TEST_PASSWORD: &str = "correct-horse";

/// Isolated CLI environment.
///
/// # Example
/// ```no_run
/// use noya_testing::TestWorld;
///
/// let world = TestWorld::new().with_fast_watch();
/// world.signup("Ada", "ada@example.com").unwrap();
///
/// let result = world.run(&["space", "list"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".noya");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            env_vars: HashMap::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write `config.toml` into the data directory.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(self.data_dir.join("config.toml"), toml).expect("Failed to write config");
        self
    }

    /// Poll the database file every 50ms so `watch` tests react quickly.
    pub fn with_fast_watch(self) -> Self {
        self.with_config("[watch]\npoll_interval_ms = 50\nexternal_changes = true\n")
    }

    /// Configure a CLI command with this environment's data dir and env vars.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());
        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("NOYA_PATH");
        cmd.env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// A configured `noya` command, not yet executed.
    #[allow(deprecated)]
    pub fn command(&self) -> Result<Command> {
        let mut cmd = Command::cargo_bin("noya")
            .map_err(|e| anyhow::anyhow!("Failed to find noya binary: {}", e))?;
        self.configure_command(&mut cmd);
        Ok(cmd)
    }

    /// Path of the built binary, for spawning long-running processes.
    #[allow(deprecated)]
    pub fn binary_path(&self) -> PathBuf {
        assert_cmd::cargo::cargo_bin("noya")
    }

    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = self.command()?;
        cmd.args(args);
        execute(cmd)
    }

    /// Run with `--format json` appended.
    pub fn run_json(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = self.command()?;
        cmd.args(args).args(["--format", "json"]);
        execute(cmd)
    }

    /// Run with `input` written to stdin.
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> Result<CliResult> {
        let mut cmd = self.command()?;
        cmd.args(args).write_stdin(input.to_string());
        execute(cmd)
    }

    /// Create a password account and leave it signed in. Returns the uid.
    pub fn signup(&self, name: &str, email: &str) -> Result<String> {
        let result = self.run_json(&[
            "auth",
            "signup",
            "--name",
            name,
            "--email",
            email,
            "--password",
            TEST_PASSWORD,
        ])?;
        result.ensure_success()?;

        let json = result.json()?;
        json["content"]["uid"]
            .as_str()
            .map(str::to_string)
            .context("signup output has no content.uid")
    }

    /// Create a space and return its id.
    pub fn create_space(&self, name: &str) -> Result<String> {
        let result = self.run_json(&["space", "create", name])?;
        result.ensure_success()?;

        let json = result.json()?;
        json["content"]["space_id"]
            .as_str()
            .map(str::to_string)
            .context("space create output has no content.space_id")
    }

    /// Add a report dated `date` (YYYY-MM-DD) and return its id.
    pub fn add_report(&self, space_id: &str, progress: &str, date: &str) -> Result<String> {
        let result = self.run_json(&[
            "report", "add", space_id, "--progress", progress, "--date", date,
        ])?;
        result.ensure_success()?;

        let json = result.json()?;
        json["content"]["report"]["id"]
            .as_str()
            .map(str::to_string)
            .context("report add output has no content.report.id")
    }
}

fn execute(mut cmd: Command) -> Result<CliResult> {
    let output = cmd.output()?;

    Ok(CliResult {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    })
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Error out with stderr attached when the command failed.
    pub fn ensure_success(&self) -> Result<()> {
        if !self.success() {
            anyhow::bail!(
                "command failed ({}):\nstdout: {}\nstderr: {}",
                self.status,
                self.stdout,
                self.stderr
            );
        }
        Ok(())
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    /// Parse stdout as one JSON document per line.
    pub fn json_lines(&self) -> Result<Vec<serde_json::Value>> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| Ok(serde_json::from_str(line)?))
            .collect()
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
