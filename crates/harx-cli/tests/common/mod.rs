//! Shared helpers: isolated XDG dirs and HAR fixtures on disk.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    /// `harx` with config and log dirs pointed inside the sandbox.
    pub fn harx(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_harx"));
        cmd.env("XDG_CONFIG_HOME", self.dir.path().join("config"))
            .env("XDG_STATE_HOME", self.dir.path().join("state"))
            .env_remove("RUST_LOG");
        cmd
    }
}

pub const EXAMPLE_HAR: &str = r#"{
  "log": {
    "version": "1.2",
    "entries": [
      {
        "request": {
          "method": "POST",
          "url": "https://api.x.com/conversations/create",
          "headers": [
            { "name": "Content-Type", "value": "application/json" },
            { "name": "Authorization", "value": "Bearer abc" }
          ]
        },
        "response": { "status": 200, "headers": [] }
      },
      {
        "request": { "method": "GET", "url": "https://api.x.com/assets/logo.png", "headers": [] },
        "response": { "status": 200, "headers": [] }
      }
    ]
  }
}"#;
