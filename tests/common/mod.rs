/// Common test utilities for scmprompt integration tests
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A test repository with temporary directory management
#[allow(dead_code)]
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub repo_path: PathBuf,
}

impl TestRepo {
    /// Create a new test repository with git initialized and one commit on `main`
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let repo_path = temp_dir.path().join("repo");
        std::fs::create_dir(&repo_path).expect("Failed to create repo directory");

        let repo = TestRepo {
            temp_dir,
            repo_path,
        };

        repo.git(&["init"]);
        repo.git(&["config", "user.name", "Test User"]);
        repo.git(&["config", "user.email", "test@example.com"]);
        // Disable GPG signing for tests
        repo.git(&["config", "commit.gpgsign", "false"]);

        std::fs::write(repo.repo_path.join("README.md"), "# Test Repo\n")
            .expect("Failed to write README");
        repo.git(&["add", "."]);
        repo.git(&["commit", "-m", "Initial commit"]);

        // git init might create master or main depending on config
        repo.git(&["branch", "-M", "main"]);

        repo
    }

    /// Get the repository path
    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        &self.repo_path
    }

    /// Run git inside the repository
    pub fn git(&self, args: &[&str]) {
        Command::new("git")
            .args(args)
            .current_dir(&self.repo_path)
            .env("LC_ALL", "C")
            .output()
            .unwrap_or_else(|e| panic!("Failed to run git {:?}: {}", args, e));
    }

    /// Write a file relative to the repository root
    #[allow(dead_code)]
    pub fn write_file(&self, name: &str, content: &str) {
        std::fs::write(self.repo_path.join(name), content).expect("Failed to write file");
    }

    /// Run scmprompt with the repository as working directory
    pub fn scmprompt(&self, args: &[&str]) -> CommandResult {
        run_scmprompt(&self.repo_path, self.temp_dir.path(), args)
    }
}

/// Run the scmprompt binary in `dir`, keeping git from searching above `ceiling`
pub fn run_scmprompt(dir: &Path, ceiling: &Path, args: &[&str]) -> CommandResult {
    run_scmprompt_with_env(dir, ceiling, args, &[])
}

/// Like [`run_scmprompt`] with extra environment variables for the binary
pub fn run_scmprompt_with_env(
    dir: &Path,
    ceiling: &Path,
    args: &[&str],
    envs: &[(&str, &str)],
) -> CommandResult {
    let output = Command::new(env!("CARGO_BIN_EXE_scmprompt"))
        .args(args)
        .current_dir(dir)
        .env("GIT_CEILING_DIRECTORIES", ceiling)
        .env("LOGNAME", "alice")
        .env_remove("SCMPROMPT_LOG")
        .envs(envs.iter().copied())
        .output()
        .expect("Failed to execute scmprompt");

    CommandResult {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        success: output.status.success(),
        exit_code: output.status.code(),
    }
}

/// Directory holding the scmprompt binary, for putting it on `PATH`
#[allow(dead_code)]
pub fn binary_dir() -> PathBuf {
    Path::new(env!("CARGO_BIN_EXE_scmprompt"))
        .parent()
        .expect("binary has a parent directory")
        .to_path_buf()
}

/// Drop ANSI escape sequences so assertions can look at the text
#[allow(dead_code)]
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::new();
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Result of running a command
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub exit_code: Option<i32>,
}

impl CommandResult {
    /// Assert the command succeeded
    pub fn assert_success(&self) {
        if !self.success {
            panic!(
                "Command failed:\nstdout: {}\nstderr: {}\nexit code: {:?}",
                self.stdout, self.stderr, self.exit_code
            );
        }
    }

    /// Assert the command failed
    #[allow(dead_code)]
    pub fn assert_failure(&self) {
        if self.success {
            panic!(
                "Command succeeded when it should have failed:\nstdout: {}\nstderr: {}",
                self.stdout, self.stderr
            );
        }
    }

    /// Output lines with escape codes removed
    #[allow(dead_code)]
    pub fn plain_lines(&self) -> Vec<String> {
        self.stdout.lines().map(strip_ansi).collect()
    }
}
