//! TestWorld pattern for declarative integration test setup.

use anyhow::Result;
use assert_cmd::Command;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated workspace for one test.
///
/// # Example
/// ```no_run
/// use stockterm_testing::{TestWorld, fixtures};
///
/// let world = TestWorld::new().with_export("export.json", &fixtures::sample_export());
/// world.run(&["import", world.path("export.json").to_str().unwrap()]).unwrap();
///
/// let result = world.run(&["list", "--preset", "value"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    env_vars: Vec<(String, String)>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".stockterm");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            env_vars: Vec::new(),
        }
    }

    /// Workspace directory passed as `--data-dir`.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// A path under the temp root (outside the workspace).
    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("stockterm.db")
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.push((key.into(), value.into()));
        self
    }

    /// Write `document` as pretty JSON under the temp root.
    pub fn with_export(self, name: &str, document: &Value) -> Self {
        self.write_export(name, document)
            .expect("Failed to write export fixture");
        self
    }

    pub fn write_export(&self, name: &str, document: &Value) -> Result<PathBuf> {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, serde_json::to_string_pretty(document)?)?;
        Ok(path)
    }

    /// Import an export file already written with [`TestWorld::with_export`].
    pub fn imported(self, name: &str) -> Self {
        let path = self.path(name);
        let result = self
            .run(&["import", &path.to_string_lossy()])
            .expect("Failed to run import");
        assert!(result.success(), "import failed: {}", result.stderr);
        self
    }

    /// Apply this world's workspace and environment to `cmd`.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("STOCKTERM_PATH");
        cmd.env_remove("RUST_LOG");
        cmd.env("NO_COLOR", "1");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }
        cmd
    }

    /// Run the `stockterm` binary with `args` in this world.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("stockterm")
            .map_err(|e| anyhow::anyhow!("Failed to find stockterm binary: {}", e))?;
        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;
        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Run with `--format json` and parse stdout.
    pub fn run_json(&self, args: &[&str]) -> Result<Value> {
        let mut full = vec!["--format", "json"];
        full.extend_from_slice(args);
        let result = self.run(&full)?;
        if !result.success() {
            anyhow::bail!("command {:?} failed: {}", args, result.stderr);
        }
        result.json()
    }
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

    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
