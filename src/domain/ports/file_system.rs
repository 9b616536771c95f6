//! FileSystem port - abstraction over file I/O operations
//!
//! Materialization and diffing go through this trait so that failure paths
//! (a write that fails halfway through a tree) can be exercised in tests.

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(std::io::Error),
    /// Other error
    Other(String),
}

impl FsError {
    /// Attach the path an I/O error happened on
    pub fn at(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(PathBuf::new()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(PathBuf::new()),
            _ => FsError::Io(err),
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io(err) => write!(f, "I/O error: {}", err),
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - test doubles that fail on chosen paths
pub trait FileSystem {
    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Write content to a file, creating parent directories
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// True if `path` is a directory with no entries
    fn is_empty_dir(&self, path: &Path) -> FsResult<bool>;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Create a fresh, uniquely named directory inside `parent`
    fn create_staging_dir(&self, parent: &Path, prefix: &str) -> FsResult<PathBuf>;

    /// Rename a file or directory; both paths are on the same file system
    fn rename(&self, from: &Path, to: &Path) -> FsResult<()>;

    /// Remove a directory and everything below it
    fn remove_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Mark a file executable by its owner (no-op where unsupported)
    fn set_executable(&self, path: &Path) -> FsResult<()>;

    /// Relative `/`-separated paths of every file below `root`, sorted
    fn list_files(&self, root: &Path) -> FsResult<Vec<String>>;
}
