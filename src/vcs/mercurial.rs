/// Mercurial (hg) backend implementation
/// Reads `hg status` and `hg branch` output
use crate::command::{CommandRunner, Stderr};
use crate::vcs::traits::{VcsBackend, VcsType};
use crate::vcs::{bump, ChangeSummary};

pub struct MercurialBackend;

impl MercurialBackend {
    fn status(&self, runner: &dyn CommandRunner) -> Option<String> {
        runner
            .run("hg", &["status"], Stderr::Merge)
            .map_err(|e| tracing::debug!(error = %e, "hg status unavailable"))
            .ok()
    }
}

impl VcsBackend for MercurialBackend {
    fn vcs_type(&self) -> VcsType {
        VcsType::Mercurial
    }

    fn probe(&self, runner: &dyn CommandRunner) -> bool {
        self.status(runner)
            .is_some_and(|output| is_repository_output(&output))
    }

    fn branch(&self, runner: &dyn CommandRunner) -> String {
        runner
            .run("hg", &["branch"], Stderr::Discard)
            .map(|output| output.trim().to_string())
            .unwrap_or_default()
    }

    fn changes(&self, runner: &dyn CommandRunner) -> ChangeSummary {
        self.status(runner)
            .map(|output| parse_status(&output))
            .unwrap_or_default()
    }
}

/// Whether `hg status` output comes from inside a repository.
///
/// Anything that isn't an `abort:` message counts, including empty output
/// from a clean working copy.
pub fn is_repository_output(output: &str) -> bool {
    output.is_empty() || !output.starts_with("abort")
}

/// Count untracked (`?`) and modified (`M`) entries in `hg status` output
pub fn parse_status(output: &str) -> ChangeSummary {
    let mut summary = ChangeSummary::default();

    for line in output.split('\n') {
        match line.chars().next() {
            Some('?') => bump(&mut summary.untracked),
            Some('M') => bump(&mut summary.uncommitted),
            _ => {}
        }
    }

    summary
}
