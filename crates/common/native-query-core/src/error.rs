use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Coarse classification of a [`FilesystemError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FilesystemErrorKind {
    NotFound,
    NotADirectory,
    AccessDenied,
    Io,
}

#[derive(Debug, Error)]
pub enum FilesystemError {
    #[error("Path not found: {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Access denied: {}", path.display())]
    AccessDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FilesystemError {
    /// Classifies an I/O error raised while touching `path`.
    pub fn from_io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => FilesystemError::NotFound { path, source },
            io::ErrorKind::NotADirectory => FilesystemError::NotADirectory { path },
            io::ErrorKind::PermissionDenied => FilesystemError::AccessDenied { path, source },
            _ => FilesystemError::Io { path, source },
        }
    }

    pub fn not_a_directory<P: Into<PathBuf>>(path: P) -> Self {
        FilesystemError::NotADirectory { path: path.into() }
    }

    #[must_use]
    pub fn kind(&self) -> FilesystemErrorKind {
        match self {
            FilesystemError::NotFound { .. } => FilesystemErrorKind::NotFound,
            FilesystemError::NotADirectory { .. } => FilesystemErrorKind::NotADirectory,
            FilesystemError::AccessDenied { .. } => FilesystemErrorKind::AccessDenied,
            FilesystemError::Io { .. } => FilesystemErrorKind::Io,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            FilesystemError::NotFound { path, .. }
            | FilesystemError::NotADirectory { path }
            | FilesystemError::AccessDenied { path, .. }
            | FilesystemError::Io { path, .. } => path,
        }
    }
}

pub type FilesystemResult<T> = Result<T, FilesystemError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
