/// VCS abstraction layer - trait that all VCS backends must implement
use crate::command::CommandRunner;
use crate::vcs::git::GitBackend;
use crate::vcs::mercurial::MercurialBackend;
use crate::vcs::ChangeSummary;
use std::fmt;

/// Enum representing the supported VCS types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VcsType {
    Mercurial,
    Git,
}

impl VcsType {
    /// Probe order used by [`detect`]. Mercurial wins in a directory that
    /// is inside both kinds of repository.
    pub const PRIORITY: [VcsType; 2] = [VcsType::Mercurial, VcsType::Git];

    /// Short name shown in the prompt
    pub fn as_str(&self) -> &'static str {
        match self {
            VcsType::Mercurial => "hg",
            VcsType::Git => "git",
        }
    }

    /// The backend implementing this VCS
    pub fn backend(&self) -> &'static dyn VcsBackend {
        match self {
            VcsType::Mercurial => &MercurialBackend,
            VcsType::Git => &GitBackend,
        }
    }
}

impl fmt::Display for VcsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait that all VCS backends must implement.
///
/// Backends hold no state; every query runs the VCS's own command line
/// tool through the given runner and parses its text output. None of the
/// queries fail: unrecognized output yields an empty result.
pub trait VcsBackend {
    /// Get the VCS type
    fn vcs_type(&self) -> VcsType;

    /// Name shown in the prompt
    fn name(&self) -> &'static str {
        self.vcs_type().as_str()
    }

    /// Whether this VCS governs the runner's directory
    fn probe(&self, runner: &dyn CommandRunner) -> bool;

    /// Current branch name, empty if it can't be determined
    fn branch(&self, runner: &dyn CommandRunner) -> String;

    /// Counts of untracked, unstaged and uncommitted files plus
    /// ahead/behind commits where the VCS reports them
    fn changes(&self, runner: &dyn CommandRunner) -> ChangeSummary;
}

/// Find the VCS governing the runner's directory.
///
/// Backends are probed in [`VcsType::PRIORITY`] order and the first match
/// wins. `None` means no supported VCS applies, which is not an error.
pub fn detect(runner: &dyn CommandRunner) -> Option<VcsType> {
    let found = VcsType::PRIORITY
        .into_iter()
        .find(|vcs_type| vcs_type.backend().probe(runner));

    tracing::debug!(?found, "vcs detection finished");
    found
}
