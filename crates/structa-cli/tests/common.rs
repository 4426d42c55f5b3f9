//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    config_dir: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_dir = temp_dir.path().join(".structa");

        Self {
            _temp_dir: temp_dir,
            config_dir,
        }
    }

    pub fn config_dir(&self) -> &PathBuf {
        &self.config_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Command pinned to the fixture's config dir, with ambient
    /// credentials stripped so host environment cannot leak in
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("structa").expect("binary builds");
        cmd.arg("--config-dir")
            .arg(&self.config_dir)
            .env_remove("STRUCTA_PATH")
            .env_remove("GEMINI_API_KEY")
            .env_remove("GROQ_API_KEY");
        cmd
    }
}
