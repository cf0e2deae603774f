//! Common test utilities for pomdep integration tests

// Not every helper is used by every test file
#![allow(dead_code)]

use anyhow::{Context, Result};
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project directory with its own pomdep config file.
pub struct TestProject {
    _temp_dir: TempDir, // Keep alive for RAII cleanup
    project_dir: PathBuf,
    config_path: PathBuf,
}

impl TestProject {
    /// Create an empty project directory and an empty config file.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().join("project");
        let config_path = temp_dir.path().join("config.toml");

        fs::create_dir_all(&project_dir)?;
        fs::write(&config_path, "")?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
            config_path,
        })
    }

    pub fn project_path(&self) -> &Path {
        &self.project_dir
    }

    pub fn pom_path(&self) -> PathBuf {
        self.project_dir.join("pom.xml")
    }

    /// Write `pom.xml` into the project directory
    pub fn write_pom(&self, content: &str) -> Result<PathBuf> {
        pomdep::test_utils::PomFixture::write_to(&self.project_dir, content)
            .context("Failed to write pom.xml")
    }

    pub fn read_pom(&self) -> String {
        fs::read_to_string(self.pom_path())
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", self.pom_path().display(), e))
    }

    /// Replace the config file content
    pub fn write_config(&self, content: &str) -> Result<()> {
        fs::write(&self.config_path, content).context("Failed to write config")
    }

    /// A pomdep command running in the project directory against the test config.
    pub fn pomdep(&self) -> Command {
        let mut cmd = Command::cargo_bin("pomdep").expect("pomdep binary is built");
        cmd.current_dir(&self.project_dir)
            .env("POMDEP_CONFIG", &self.config_path)
            .env_remove("POMDEP_SKIP")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        cmd
    }
}
