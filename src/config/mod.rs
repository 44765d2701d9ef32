use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the default output directory inside the working copy.
pub const DEFAULT_DEST_DIR: &str = "patches";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("source directory does not exist: {0}")]
    MissingSource(PathBuf),
    #[error("source path is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("failed to create destination directory {path}: {source}")]
    CreateDest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Fully resolved export settings.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub src: PathBuf,
    pub dest: PathBuf,
    pub base: Option<String>,
}

impl ExportConfig {
    /// Resolve user-supplied paths against `cwd`.
    ///
    /// `src` defaults to `cwd` and must exist. `dest` defaults to
    /// `<src>/patches`; a relative `dest` is taken relative to `src`.
    /// Nothing is created here.
    pub fn resolve(
        src: Option<PathBuf>,
        dest: Option<PathBuf>,
        base: Option<String>,
        cwd: &Path,
    ) -> Result<Self> {
        let src = match src {
            Some(path) if path.is_absolute() => path,
            Some(path) => cwd.join(path),
            None => cwd.to_path_buf(),
        };

        if !src.exists() {
            return Err(ConfigError::MissingSource(src));
        }
        if !src.is_dir() {
            return Err(ConfigError::NotADirectory(src));
        }

        let dest = match dest {
            Some(path) if path.is_absolute() => path,
            Some(path) => src.join(path),
            None => src.join(DEFAULT_DEST_DIR),
        };

        Ok(Self { src, dest, base })
    }

    /// Create the destination directory and its parents if missing.
    pub fn ensure_dest(&self) -> Result<()> {
        fs::create_dir_all(&self.dest).map_err(|source| ConfigError::CreateDest {
            path: self.dest.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_cwd_and_patches_subdir() {
        let dir = tempfile::tempdir().unwrap();
        let config = ExportConfig::resolve(None, None, None, dir.path()).unwrap();
        assert_eq!(config.src, dir.path());
        assert_eq!(config.dest, dir.path().join("patches"));
        assert!(config.base.is_none());
    }

    #[test]
    fn relative_dest_is_resolved_against_src() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("repo")).unwrap();

        let config = ExportConfig::resolve(
            Some(PathBuf::from("repo")),
            Some(PathBuf::from("out/nested")),
            Some("abc".to_string()),
            dir.path(),
        )
        .unwrap();

        assert_eq!(config.src, dir.path().join("repo"));
        assert_eq!(config.dest, dir.path().join("repo/out/nested"));
        assert_eq!(config.base.as_deref(), Some("abc"));
    }

    #[test]
    fn absolute_dest_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let config =
            ExportConfig::resolve(None, Some(out.path().to_path_buf()), None, dir.path()).unwrap();
        assert_eq!(config.dest, out.path());
    }

    #[test]
    fn missing_src_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ExportConfig::resolve(Some(PathBuf::from("nope")), None, None, dir.path())
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingSource(_)));
        assert!(!dir.path().join("nope/patches").exists());
    }

    #[test]
    fn file_as_src_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("file.txt"), "x").unwrap();
        let err = ExportConfig::resolve(Some(PathBuf::from("file.txt")), None, None, dir.path())
            .unwrap_err();
        assert!(matches!(err, ConfigError::NotADirectory(_)));
    }

    #[test]
    fn resolve_does_not_create_dest() {
        let dir = tempfile::tempdir().unwrap();
        let config = ExportConfig::resolve(None, None, None, dir.path()).unwrap();
        assert!(!config.dest.exists());

        config.ensure_dest().unwrap();
        assert!(config.dest.is_dir());
    }
}
