// User, host and directory lookups for the prompt
use crate::errors::{PromptError, Result};
use std::path::PathBuf;

/// Environment variables consulted for the user name, in order
const USER_VARS: [&str; 4] = ["LOGNAME", "USER", "LNAME", "USERNAME"];

/// Name of the user running the prompt.
///
/// The first non-empty of `LOGNAME`, `USER`, `LNAME` and `USERNAME` wins;
/// without any of them the password database entry of the effective user
/// is used.
pub fn current_user() -> Result<String> {
    USER_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|name| !name.is_empty())
        .or_else(user_from_passwd)
        .ok_or_else(|| PromptError::Environment("could not determine user name".to_string()))
}

#[cfg(unix)]
fn user_from_passwd() -> Option<String> {
    use nix::unistd::{geteuid, User};

    User::from_uid(geteuid())
        .map_err(|e| tracing::debug!(error = %e, "passwd lookup failed"))
        .ok()
        .flatten()
        .map(|user| user.name)
}

#[cfg(not(unix))]
fn user_from_passwd() -> Option<String> {
    None
}

/// Host name of this machine
pub fn current_host() -> Result<String> {
    hostname::get()
        .map(|h| h.to_string_lossy().into_owned())
        .map_err(|e| PromptError::Environment(format!("could not determine host name: {}", e)))
}

/// Absolute directory to inspect: `explicit` if given, else the process cwd
pub fn resolve_directory(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => std::fs::canonicalize(&path).map_err(|e| {
            PromptError::Environment(format!("cannot use directory {}: {}", path.display(), e))
        }),
        None => std::env::current_dir().map_err(|e| {
            PromptError::Environment(format!("cannot read working directory: {}", e))
        }),
    }
}
