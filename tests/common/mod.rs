#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Config that removes every simulated delay
pub const INSTANT_CONFIG: &str = "\
latency:
  load_ms: 0
  generate_ms: 0
  sync_ms: 0
";

/// Helper struct to run replydesk commands in an isolated temp directory
pub struct ReplydeskTest {
    pub temp_dir: TempDir,
    binary_path: String,
}

impl ReplydeskTest {
    /// A workspace with all latencies set to zero
    pub fn new() -> Self {
        let test = Self::empty();
        test.write_config(INSTANT_CONFIG);
        test
    }

    /// A workspace without a config file
    pub fn empty() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        ReplydeskTest {
            temp_dir,
            binary_path: env!("CARGO_BIN_EXE_replydesk").to_string(),
        }
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut command = Command::new(&self.binary_path);
        command
            .args(args)
            .current_dir(self.temp_dir.path())
            .env_remove("REPLYDESK_CONFIG")
            .env_remove("REPLYDESK_LOG")
            .env("NO_COLOR", "1");
        command
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("Failed to execute replydesk command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    /// Run the interactive console with `input` piped to stdin
    pub fn run_console(&self, input: &str) -> Output {
        let mut child = self
            .command(&["console"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn replydesk console");
        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(input.as_bytes())
            .expect("Failed to write console input");
        child
            .wait_with_output()
            .expect("Failed to wait for replydesk console")
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.temp_dir.path().join(relative)
    }

    pub fn write_config(&self, content: &str) {
        let dir = self.path(".replydesk");
        fs::create_dir_all(&dir).expect("Failed to create .replydesk directory");
        fs::write(dir.join("config.yaml"), content).expect("Failed to write config file");
    }

    pub fn read_config(&self) -> String {
        fs::read_to_string(self.path(".replydesk/config.yaml")).expect("Failed to read config")
    }

    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Point the config at a JSON feed file with zero latencies
    pub fn use_feed(&self, feed: &str) {
        let path = self.write_file("feed.json", feed);
        self.write_config(&format!(
            "source:\n  kind: file\n  path: {}\n{}",
            path.display(),
            INSTANT_CONFIG
        ));
    }
}

impl Default for ReplydeskTest {
    fn default() -> Self {
        Self::new()
    }
}
