//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for booking requests
//! - Parsing of the JSON printed by `create` and `extend`

use assert_cmd::Command;
use std::path::PathBuf;
use std::process::Output;
use tempfile::TempDir;

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the staybook data directory (created lazily by staybook)
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("staybook-data");

        Self { temp_dir, data_dir }
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// Configuration environment variables are cleared so the host
    /// environment cannot leak into a test.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("staybook").expect("Failed to find staybook binary");
        for var in [
            "STAYBOOK_DATA_DIR",
            "STAYBOOK_BUSY_TIMEOUT",
            "STAYBOOK_DISABLE_AUTOINIT",
            "STAYBOOK_LOOKUP",
            "STAYBOOK_MAXIMUM_LOCK_WAIT_SECONDS",
            "STAYBOOK_LOG_MODE",
            "STAYBOOK_OUTPUT_FORMAT",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Build `staybook <subcommand>` with the four booking flags.
    pub fn booking_command(
        &self,
        subcommand: &str,
        guest: &str,
        unit: &str,
        check_in: &str,
        nights: u32,
    ) -> Command {
        let mut cmd = self.command();
        cmd.arg(subcommand)
            .arg("--guest")
            .arg(guest)
            .arg("--unit")
            .arg(unit)
            .arg("--check-in")
            .arg(check_in)
            .arg("--nights")
            .arg(nights.to_string());
        cmd
    }

    /// Create a booking and return the persisted JSON.
    ///
    /// # Panics
    /// Panics if the create command fails.
    pub fn create(
        &self,
        guest: &str,
        unit: &str,
        check_in: &str,
        nights: u32,
    ) -> serde_json::Value {
        let output = self
            .booking_command("create", guest, unit, check_in, nights)
            .output()
            .expect("Failed to run create command");

        assert!(
            output.status.success(),
            "Create failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        parse_json(&output)
    }

    /// List all bookings as JSON.
    pub fn list_json(&self) -> Vec<serde_json::Value> {
        let output = self
            .command()
            .arg("list")
            .arg("--format")
            .arg("json")
            .output()
            .expect("Failed to run list command");

        assert!(
            output.status.success(),
            "List failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        match parse_json(&output) {
            serde_json::Value::Array(items) => items,
            other => panic!("list did not print an array: {other}"),
        }
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the stdout of a command as JSON.
#[allow(dead_code)]
pub fn parse_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON")
}
