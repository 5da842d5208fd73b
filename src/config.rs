use crate::command::SystemRunner;
use crate::env;
use crate::errors::Result;
use crate::shell::Shell;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `SCMPROMPT_LOG=debug`
pub const LOG_ENV: &str = "SCMPROMPT_LOG";

/// Runtime options for one prompt render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Absolute directory whose VCS state is shown
    pub directory: PathBuf,
    /// Per-command limit for VCS invocations; `None` waits forever
    pub timeout: Option<Duration>,
    /// Escape the output for this shell's prompt; `None` prints it raw
    pub shell: Option<Shell>,
}

impl Config {
    /// Build from command line values, falling back to the process cwd
    pub fn resolve(
        directory: Option<PathBuf>,
        timeout_ms: Option<u64>,
        shell: Option<Shell>,
    ) -> Result<Self> {
        Ok(Config {
            directory: env::resolve_directory(directory)?,
            timeout: timeout_ms.map(Duration::from_millis),
            shell,
        })
    }

    /// Command runner rooted at the configured directory
    pub fn runner(&self) -> SystemRunner {
        SystemRunner::new(&self.directory).with_timeout(self.timeout)
    }
}

/// Send logs to stderr, filtered by [`LOG_ENV`]. Logging is off unless
/// asked for so nothing leaks into a shell prompt.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
