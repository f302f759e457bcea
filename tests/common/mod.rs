//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Test lobby context
///
/// Creates a temporary directory holding a map catalog, play log and
/// settings file, and runs the binary against it.
pub struct TestProject {
    /// Temporary directory for the test lobby
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new, empty test lobby in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Create a test lobby with [`SAMPLE_MAPS`] as its catalog
    pub fn with_sample_maps() -> Self {
        let project = Self::new();
        project.create_file("all_maps.json", SAMPLE_MAPS);
        project
    }

    /// Get the path to the test lobby directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test lobby
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Check if a file exists in the test lobby
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the test lobby
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Command for the binary, isolated from the user's settings and environment
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_mode_rotation"));
        cmd.current_dir(self.dir.path())
            .env("MODE_ROTATION_CONFIG", self.dir.path().join("config.toml"))
            .env_remove("MODE_ROTATION_CONFIG_DIR")
            .env_remove("MODE_ROTATION_MAPS")
            .env_remove("MODE_ROTATION_LOG")
            .env_remove("RUST_LOG")
            .arg("--no-color")
            .args(args);
        cmd
    }

    /// Run the binary with `args`
    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args).output().expect("Failed to run mode_rotation")
    }

    /// Run the binary with `args`, feeding `input` on stdin
    pub fn run_with_input(&self, args: &[&str], input: &str) -> Output {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn mode_rotation");

        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(input.as_bytes())
            .expect("Failed to write stdin");

        child.wait_with_output().expect("Failed to wait for mode_rotation")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Stdout of a finished command as text
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr of a finished command as text
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Sample map catalog with one 16-player map per mode plus a few extras
pub const SAMPLE_MAPS: &str = r#"[
    { "gid": 1, "name": "Harbor", "variants": [
        { "id": 101, "mode": "td", "players": 16 },
        { "id": 102, "mode": "dm", "players": 16, "nickname": "Harbor Docks" },
        { "id": 103, "mode": "siege", "players": 12 }
    ]},
    { "gid": 2, "name": "Quarry", "variants": [
        { "id": 201, "mode": "chaser", "players": 16 },
        { "id": 202, "mode": "br", "players": 16 },
        { "id": 203, "mode": "td", "players": 16, "gag": true }
    ]},
    { "gid": 3, "name": "Citadel", "variants": [
        { "id": 301, "mode": "captain", "players": 16 },
        { "id": 302, "mode": "siege", "players": 16 },
        { "id": 303, "mode": "td", "players": 16, "disabled": true }
    ]}
]"#;
