use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// An isolated home directory, so profiles never touch the real one.
pub struct Sandbox {
    home: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            home: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn home(&self) -> &Path {
        self.home.path()
    }

    /// Location of the stored profile on Linux.
    #[allow(dead_code)]
    pub fn profile_path(&self) -> PathBuf {
        self.home().join("config").join("infinity").join("profile.json")
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_infinity"));
        cmd.args(args);
        cmd.env("HOME", self.home());
        cmd.env("XDG_CONFIG_HOME", self.home().join("config"));
        cmd.env("NO_COLOR", "1");
        for var in [
            "INFINITY_URL",
            "INFINITY_USERNAME",
            "INFINITY_PASSWORD",
            "INFINITY_TOKEN",
            "RUST_LOG",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Run the CLI off the async runtime so mock servers keep serving.
    pub async fn run(&self, args: &[&str]) -> Output {
        let mut cmd = self.command(args);
        tokio::task::spawn_blocking(move || cmd.output().expect("Failed to execute CLI"))
            .await
            .expect("CLI task panicked")
    }

    /// Run the CLI and expect success, returning stdout.
    pub async fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args).await;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }
}
