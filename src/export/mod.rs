use crate::config::{ConfigError, ExportConfig};
use crate::git::{GitError, HistoryProvider};
use crate::{Commit, CommitRange, ExportSummary};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info, warn};

pub const PATCH_SUFFIX: &str = "patch";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Git(#[from] GitError),
    #[error("failed to write patch {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ExportError>;

/// Strip `-`, `:` and the `T` separator from an ISO-8601 timestamp.
pub fn normalize_timestamp(timestamp: &str) -> String {
    timestamp
        .chars()
        .filter(|ch| !matches!(ch, '-' | ':' | 'T'))
        .collect()
}

/// File name for the patch that ends at `commit`.
pub fn patch_file_name(commit: &Commit) -> String {
    format!(
        "{}.{}.{}",
        normalize_timestamp(&commit.timestamp),
        commit.hash,
        PATCH_SUFFIX
    )
}

/// Drop every commit before `base`. The base itself is kept as the first
/// "previous" commit. An unknown base leaves the list untouched.
pub fn truncate_at_base<'a>(commits: &'a [Commit], base: Option<&str>) -> &'a [Commit] {
    let Some(base) = base else {
        return commits;
    };

    match commits.iter().position(|c| c.hash == base) {
        Some(index) => &commits[index..],
        None => {
            warn!(base, "base commit not found in history, exporting everything");
            commits
        }
    }
}

/// Adjacent pairs of the (possibly truncated) history, skipping any pair
/// that touches a placeholder commit.
pub fn commit_ranges(commits: &[Commit], base: Option<&str>) -> Vec<CommitRange> {
    truncate_at_base(commits, base)
        .windows(2)
        .filter(|pair| !pair[0].is_placeholder() && !pair[1].is_placeholder())
        .map(|pair| CommitRange {
            previous: pair[0].clone(),
            current: pair[1].clone(),
        })
        .collect()
}

/// Writes one patch file per commit range into the destination directory.
pub struct Exporter<P> {
    provider: P,
    config: ExportConfig,
}

impl<P: HistoryProvider> Exporter<P> {
    pub fn new(provider: P, config: ExportConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Export every range that does not already have a patch file.
    ///
    /// Existing files are never rewritten, so a run that failed halfway
    /// can simply be repeated.
    #[tracing::instrument(level = "debug", skip_all, fields(dest = %self.config.dest.display()))]
    pub fn run(&self) -> Result<ExportSummary> {
        self.config.ensure_dest()?;

        let commits = self.provider.list_commits()?;
        let ranges = commit_ranges(&commits, self.config.base.as_deref());
        debug!(commits = commits.len(), ranges = ranges.len(), "history loaded");

        let mut summary = ExportSummary {
            considered: ranges.len(),
            ..ExportSummary::default()
        };

        for range in &ranges {
            let file_name = patch_file_name(&range.current);
            let path = self.config.dest.join(&file_name);

            if path.exists() {
                debug!(patch = %file_name, "patch exists, skipping");
                summary.skipped += 1;
                continue;
            }

            let patch = self.provider.diff(&range.previous, &range.current)?;
            fs::write(&path, &patch).map_err(|source| ExportError::Write {
                path: path.clone(),
                source,
            })?;

            info!("wrote patch: {}", file_name);
            summary.written += 1;
            summary.written_paths.push(path);
        }

        Ok(summary)
    }
}
