use crate::Commit;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use thiserror::Error;

/// Format passed to `git log`: full hash and strict ISO-8601 committer date.
pub const LOG_FORMAT: &str = "--format=%H %cI";

#[derive(Debug, Error)]
pub enum GitError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`{command}` failed: {stderr}")]
    CommandFailed { command: String, stderr: String },
    #[error("invalid commit hash: {0:?}")]
    InvalidHash(String),
    #[error("utf-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, GitError>;

/// Source of commit history and patches.
pub trait HistoryProvider {
    /// All commits reachable from HEAD, oldest first.
    fn list_commits(&self) -> Result<Vec<Commit>>;

    /// Combined log and patch output for `previous..current`.
    fn diff(&self, previous: &Commit, current: &Commit) -> Result<Vec<u8>>;
}

/// History provider backed by the `git` executable.
///
/// Every invocation runs with `workdir` as its current directory; the
/// process working directory is never changed.
#[derive(Debug, Clone)]
pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn run(&self, args: &[&str]) -> Result<Vec<u8>> {
        let command = format!("git {}", args.join(" "));
        tracing::debug!(%command, workdir = %self.workdir.display(), "running git");

        let output: Output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|source| GitError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(GitError::CommandFailed { command, stderr });
        }

        Ok(output.stdout)
    }
}

impl HistoryProvider for GitCli {
    fn list_commits(&self) -> Result<Vec<Commit>> {
        let stdout = self.run(&["log", LOG_FORMAT])?;
        let text = String::from_utf8(stdout)?;
        Ok(parse_log(&text))
    }

    fn diff(&self, previous: &Commit, current: &Commit) -> Result<Vec<u8>> {
        validate_hash(&previous.hash)?;
        validate_hash(&current.hash)?;

        let range = format!("{}..{}", previous.hash, current.hash);
        self.run(&["log", "-p", &range])
    }
}

/// Parse `git log --format=%H %cI` output into commits, oldest first.
///
/// Blank lines (git always ends its output with one) become placeholder
/// commits with an empty hash rather than being dropped here.
pub fn parse_log(output: &str) -> Vec<Commit> {
    output
        .split('\n')
        .rev()
        .map(|line| {
            let line = line.trim().trim_matches('"');
            match line.split_once(' ') {
                Some((hash, timestamp)) => Commit::new(hash.trim(), timestamp.trim()),
                None => Commit::new(line, ""),
            }
        })
        .collect()
}

/// Reject anything that is not a plain object name, so a hash can never be
/// read by git as an option.
pub fn validate_hash(hash: &str) -> Result<()> {
    if hash.is_empty() || hash.starts_with('-') {
        return Err(GitError::InvalidHash(hash.to_string()));
    }

    if !hash
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | '/' | '.' | '~' | '^'))
    {
        return Err(GitError::InvalidHash(hash.to_string()));
    }

    Ok(())
}
