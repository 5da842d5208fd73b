use crate::command::CommandRunner;
use crate::env;
use crate::errors::Result;
use crate::style::{Color, Style};
use crate::vcs::VcsStatus;
use std::path::{Path, PathBuf};

/// Everything one prompt render needs
#[derive(Debug, Clone)]
pub struct PromptContext {
    pub user: String,
    pub host: String,
    pub directory: PathBuf,
    pub vcs: Option<VcsStatus>,
}

impl PromptContext {
    /// Collect user, host and VCS status for `directory`.
    /// `runner` must execute commands inside that same directory.
    pub fn gather(directory: &Path, runner: &dyn CommandRunner) -> Result<Self> {
        Ok(Self::collect(
            env::current_user()?,
            env::current_host()?,
            directory,
            runner,
        ))
    }

    /// Build a context for a known user and host
    pub fn collect(
        user: String,
        host: String,
        directory: &Path,
        runner: &dyn CommandRunner,
    ) -> Self {
        Self {
            user,
            host,
            directory: directory.to_path_buf(),
            vcs: VcsStatus::collect(runner),
        }
    }
}

/// Render the prompt lines: a blank separator, user@host:directory, and
/// the VCS summary when a repository was found.
pub fn render(context: &PromptContext) -> Vec<String> {
    let mut lines = vec![" ".to_string(), location_line(context)];

    if let Some(vcs) = context.vcs.as_ref().filter(|vcs| vcs.has_content()) {
        lines.push(format!(
            "{}{}{}{}",
            Style::BRIGHT,
            vcs_fragment(vcs),
            Style::NORMAL,
            Color::RESET
        ));
    }

    lines
}

fn location_line(context: &PromptContext) -> String {
    let user_color = if context.user == "root" {
        Color::RED
    } else {
        Color::GREEN
    };

    format!(
        "{}{}{}{}@{}:{}{}{}{}{}",
        Style::BRIGHT,
        user_color,
        context.user,
        Style::DIM,
        context.host,
        Style::BRIGHT,
        Color::BLUE,
        context.directory.display(),
        Style::NORMAL,
        Color::RESET
    )
}

/// `(name:branch,...)` with one dimmed entry per reported category
fn vcs_fragment(vcs: &VcsStatus) -> String {
    let mut out = format!("{}({}:{}", Color::YELLOW, vcs.vcs_type, vcs.branch);
    let changes = &vcs.changes;

    let entries = [
        (",origin►", changes.behind),
        (",origin◄", changes.ahead),
        (",untracked:", changes.untracked),
        (",unstaged:", changes.unstaged),
        (",uncommitted:", changes.uncommitted),
    ];
    for (label, count) in entries {
        if let Some(count) = count {
            out.push_str(Style::DIM);
            out.push_str(label);
            out.push_str(&count.to_string());
        }
    }

    out.push_str(Style::BRIGHT);
    out.push(')');
    out
}
