pub mod cli;
pub mod config;
pub mod export;
pub mod git;
pub mod logging;

use std::path::PathBuf;

/// A single commit as reported by `git log`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub hash: String,
    /// Strict ISO-8601 committer date, e.g. `2021-05-01T12:00:00+00:00`.
    pub timestamp: String,
}

impl Commit {
    pub fn new(hash: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Placeholder commits come from blank lines in `git log` output.
    pub fn is_placeholder(&self) -> bool {
        self.hash.is_empty()
    }
}

/// Two adjacent commits; the patch covers `previous..current`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRange {
    pub previous: Commit,
    pub current: Commit,
}

/// Outcome of an export run.
#[derive(Debug, Clone, Default)]
pub struct ExportSummary {
    pub considered: usize,
    pub written: usize,
    pub skipped: usize,
    pub written_paths: Vec<PathBuf>,
}
