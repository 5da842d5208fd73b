pub mod git;
pub mod mercurial;
pub mod traits;

use crate::command::CommandRunner;
use traits::VcsType;

/// Per-category counts parsed from a VCS status listing.
///
/// `None` means the category was not reported at all, which is different
/// from a reported count of zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSummary {
    pub untracked: Option<u32>,
    pub unstaged: Option<u32>,
    pub uncommitted: Option<u32>,
    pub ahead: Option<u32>,
    pub behind: Option<u32>,
}

impl ChangeSummary {
    /// True when no category was reported
    pub fn is_empty(&self) -> bool {
        self.untracked.is_none()
            && self.unstaged.is_none()
            && self.uncommitted.is_none()
            && self.ahead.is_none()
            && self.behind.is_none()
    }
}

/// Add one to a category, creating it on first sight
pub(crate) fn bump(count: &mut Option<u32>) {
    *count = Some(count.unwrap_or(0).saturating_add(1));
}

/// Status of the repository governing a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VcsStatus {
    pub vcs_type: VcsType,
    pub branch: String,
    pub changes: ChangeSummary,
}

impl VcsStatus {
    /// Detect the active backend and collect its branch and changes.
    /// Returns `None` when no supported VCS governs the directory.
    pub fn collect(runner: &dyn CommandRunner) -> Option<Self> {
        let vcs_type = traits::detect(runner)?;
        let backend = vcs_type.backend();

        Some(Self {
            vcs_type,
            branch: backend.branch(runner),
            changes: backend.changes(runner),
        })
    }

    /// Whether there is anything worth showing on the VCS line
    pub fn has_content(&self) -> bool {
        !self.branch.is_empty() || !self.changes.is_empty()
    }
}
