use crate::command::{CommandRunner, Stderr};
use crate::vcs::traits::{VcsBackend, VcsType};
use crate::vcs::{bump, ChangeSummary};
use regex::Regex;
use std::sync::OnceLock;

pub struct GitBackend;

impl GitBackend {
    fn run(&self, runner: &dyn CommandRunner, subcommand: &str) -> Option<String> {
        runner
            .run("git", &[subcommand], Stderr::Merge)
            .map_err(|e| tracing::debug!(error = %e, subcommand, "git unavailable"))
            .ok()
    }
}

impl VcsBackend for GitBackend {
    fn vcs_type(&self) -> VcsType {
        VcsType::Git
    }

    fn probe(&self, runner: &dyn CommandRunner) -> bool {
        self.run(runner, "status")
            .is_some_and(|output| is_repository_output(&output))
    }

    fn branch(&self, runner: &dyn CommandRunner) -> String {
        self.run(runner, "branch")
            .and_then(|output| parse_branch(&output))
            .unwrap_or_default()
    }

    fn changes(&self, runner: &dyn CommandRunner) -> ChangeSummary {
        self.run(runner, "status")
            .map(|output| parse_status(&output))
            .unwrap_or_default()
    }
}

/// Whether `git status` output comes from inside a repository
pub fn is_repository_output(output: &str) -> bool {
    !output.is_empty() && !output.starts_with("fatal")
}

/// Current branch from `git branch` output: the line marked with `* `
pub fn parse_branch(output: &str) -> Option<String> {
    output
        .lines()
        .find_map(|line| line.strip_prefix("* "))
        .map(str::to_string)
}

/// Which file list of `git status` the scanner is inside
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Untracked,
    Unstaged,
    Uncommitted,
}

impl Section {
    fn from_header(line: &str) -> Option<Self> {
        if line.contains("Untracked files:") {
            Some(Section::Untracked)
        } else if line.contains("Changes not staged for commit:") {
            Some(Section::Unstaged)
        } else if line.contains("Changes to be committed:") {
            Some(Section::Uncommitted)
        } else {
            None
        }
    }

    fn count<'a>(&self, summary: &'a mut ChangeSummary) -> Option<&'a mut Option<u32>> {
        match self {
            Section::None => None,
            Section::Untracked => Some(&mut summary.untracked),
            Section::Unstaged => Some(&mut summary.unstaged),
            Section::Uncommitted => Some(&mut summary.uncommitted),
        }
    }
}

fn behind_pattern() -> &'static Regex {
    static BEHIND: OnceLock<Regex> = OnceLock::new();
    BEHIND.get_or_init(|| {
        Regex::new(r"Your branch is behind 'origin/[^']+' by ([0-9]+) commits?")
            .expect("regex for behind count")
    })
}

fn ahead_pattern() -> &'static Regex {
    static AHEAD: OnceLock<Regex> = OnceLock::new();
    AHEAD.get_or_init(|| {
        Regex::new(r"Your branch is ahead of 'origin/[^']+' by ([0-9]+) commits?")
            .expect("regex for ahead count")
    })
}

fn capture_count(pattern: &Regex, output: &str) -> Option<u32> {
    pattern
        .captures(output)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Parse human-readable `git status` output into a change summary.
///
/// Files are counted per section between a known section header and the
/// next line that starts with an uppercase letter. Hint lines such as
/// `(use "git add <file>..." ...)` are skipped.
pub fn parse_status(output: &str) -> ChangeSummary {
    let mut summary = ChangeSummary::default();
    let mut section = Section::None;

    for raw in output.split('\n') {
        let line = raw.trim_matches(|c: char| c == '#' || c == ' ');

        if let Some(header) = Section::from_header(line) {
            section = header;
            if let Some(count) = section.count(&mut summary) {
                *count = Some(0);
            }
            continue;
        }

        if line.starts_with(|c: char| c.is_ascii_uppercase()) {
            section = Section::None;
            continue;
        }

        if line.is_empty() || line.contains("(use \"git") {
            continue;
        }

        if let Some(count) = section.count(&mut summary) {
            bump(count);
        }
    }

    summary.behind = capture_count(behind_pattern(), output);
    summary.ahead = capture_count(ahead_pattern(), output);

    summary
}
