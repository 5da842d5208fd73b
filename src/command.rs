// External command execution for VCS probes and status queries
use crate::errors::{PromptError, Result};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

/// What to do with a command's stderr stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stderr {
    /// Interleave stderr into the captured stdout text
    Merge,
    /// Throw stderr away
    Discard,
}

/// Runs an external command and returns its captured output as text.
///
/// A non-zero exit status is not an error: whatever the command printed is
/// returned as ordinary output. Only failing to run the command at all
/// (missing executable, timeout) is reported as an error.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str], stderr: Stderr) -> Result<String>;
}

/// Runs commands as real child processes inside a fixed directory
#[derive(Debug, Clone)]
pub struct SystemRunner {
    directory: PathBuf,
    timeout: Option<Duration>,
}

impl SystemRunner {
    pub fn new<P: AsRef<Path>>(directory: P) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
            timeout: None,
        }
    }

    /// Kill commands that run longer than `timeout`
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], stderr: Stderr) -> Result<String> {
        // Both streams go to one anonymous file so merged output keeps the
        // order the child wrote it in, and a chatty child can't fill a pipe.
        let mut capture = tempfile::tempfile()?;
        let stderr_target = match stderr {
            Stderr::Merge => Stdio::from(capture.try_clone()?),
            Stderr::Discard => Stdio::null(),
        };

        tracing::debug!(program, ?args, dir = %self.directory.display(), "spawning");

        let mut child = Command::new(program)
            .args(args)
            .current_dir(&self.directory)
            // Parsers match English status text
            .env("LC_ALL", "C")
            .env_remove("LANGUAGE")
            .stdin(Stdio::null())
            .stdout(Stdio::from(capture.try_clone()?))
            .stderr(stderr_target)
            .spawn()
            .map_err(|source| PromptError::Spawn {
                program: program.to_string(),
                source,
            })?;

        let status = match self.timeout {
            Some(timeout) => match wait_with_timeout(&mut child, timeout)? {
                Some(status) => status,
                None => {
                    // Already-exited children make kill() fail; reap either way
                    let _ = child.kill();
                    let _ = child.wait();
                    tracing::debug!(program, ?timeout, "timed out");
                    return Err(PromptError::Timeout {
                        program: program.to_string(),
                        timeout,
                    });
                }
            },
            None => child.wait()?,
        };

        tracing::debug!(program, code = ?status.code(), "exited");

        read_capture(&mut capture)
    }
}

fn read_capture(capture: &mut File) -> Result<String> {
    capture.seek(SeekFrom::Start(0))?;
    let mut bytes = Vec::new();
    capture.read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Wait for a child process, giving up after `timeout`.
/// Returns `None` if the child is still running when time runs out.
fn wait_with_timeout(child: &mut Child, timeout: Duration) -> Result<Option<ExitStatus>> {
    let start = Instant::now();
    let poll_interval = Duration::from_millis(10);

    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok(Some(status)),
            Ok(None) => {
                if start.elapsed() >= timeout {
                    return Ok(None);
                }
                std::thread::sleep(poll_interval);
            }
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(PromptError::Io(e));
            }
        }
    }
}
