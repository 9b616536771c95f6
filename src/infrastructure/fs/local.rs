//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::path::{Path, PathBuf};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::at(path, e))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| FsError::at(parent, e))?;
        }
        std::fs::write(path, content).map_err(|e| FsError::at(path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_empty_dir(&self, path: &Path) -> FsResult<bool> {
        let mut entries = std::fs::read_dir(path).map_err(|e| FsError::at(path, e))?;
        Ok(entries.next().is_none())
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::create_dir_all(path).map_err(|e| FsError::at(path, e))
    }

    fn create_staging_dir(&self, parent: &Path, prefix: &str) -> FsResult<PathBuf> {
        let dir = tempfile::Builder::new()
            .prefix(prefix)
            .tempdir_in(parent)
            .map_err(|e| FsError::at(parent, e))?;
        let path = dir.keep();
        // The staging dir becomes the project root; tempfile creates it 0700.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
                .map_err(|e| FsError::at(&path, e))?;
        }
        Ok(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> FsResult<()> {
        std::fs::rename(from, to).map_err(|e| FsError::at(from, e))
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| FsError::at(path, e))
    }

    #[cfg(unix)]
    fn set_executable(&self, path: &Path) -> FsResult<()> {
        use std::os::unix::fs::PermissionsExt;

        let mut permissions = std::fs::metadata(path)
            .map_err(|e| FsError::at(path, e))?
            .permissions();
        permissions.set_mode(permissions.mode() | 0o755);
        std::fs::set_permissions(path, permissions).map_err(|e| FsError::at(path, e))
    }

    #[cfg(not(unix))]
    fn set_executable(&self, _path: &Path) -> FsResult<()> {
        Ok(())
    }

    fn list_files(&self, root: &Path) -> FsResult<Vec<String>> {
        let mut out = Vec::new();
        let mut pending = vec![root.to_path_buf()];
        while let Some(dir) = pending.pop() {
            for entry in std::fs::read_dir(&dir).map_err(|e| FsError::at(&dir, e))? {
                let entry = entry.map_err(|e| FsError::at(&dir, e))?;
                let path = entry.path();
                let file_type = entry.file_type().map_err(|e| FsError::at(&path, e))?;
                if file_type.is_dir() {
                    pending.push(path);
                    continue;
                }
                let relative = path
                    .strip_prefix(root)
                    .map_err(|e| FsError::Other(e.to_string()))?;
                let parts: Vec<String> = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect();
                out.push(parts.join("/"));
            }
        }
        out.sort();
        Ok(out)
    }
}
