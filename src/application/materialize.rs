//! Materialization
//!
//! Writes a rendered artifact into a staging directory next to the
//! destination, then moves it into place with a rename. A failure at any
//! point removes the staging directory; with `force`, a replaced tree is
//! restored if the swap does not complete.

use std::path::{Path, PathBuf};

use crate::domain::entities::{RenderedArtifact, RenderedEntry};
use crate::domain::ports::{FileSystem, FsError, RenderEvent, RenderEventSink};
use crate::error::RenderError;

pub const STAGING_PREFIX: &str = ".keel-staging-";

/// What the destination looks like before writing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationState {
    Missing,
    Empty,
    /// Holds files; only replaced with `force`
    Occupied,
}

/// Outcome of a successful materialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Materialized {
    pub destination: PathBuf,
    pub files_written: usize,
    /// An existing tree was replaced
    pub replaced: bool,
}

pub struct Materializer<'a> {
    fs: &'a dyn FileSystem,
}

fn write_error(path: &Path, err: FsError) -> RenderError {
    RenderError::Write {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

impl<'a> Materializer<'a> {
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs }
    }

    /// Check that `destination` may be written
    pub fn check_destination(
        &self,
        destination: &Path,
        force: bool,
    ) -> Result<DestinationState, RenderError> {
        if !self.fs.exists(destination) {
            return Ok(DestinationState::Missing);
        }
        if !self.fs.is_dir(destination) {
            return Err(RenderError::DestinationNotDirectory {
                path: destination.to_path_buf(),
            });
        }
        if self
            .fs
            .is_empty_dir(destination)
            .map_err(|e| write_error(destination, e))?
        {
            return Ok(DestinationState::Empty);
        }
        if !force {
            return Err(RenderError::DestinationNotEmpty {
                path: destination.to_path_buf(),
            });
        }
        Ok(DestinationState::Occupied)
    }

    /// Write `artifact` to `destination`
    pub fn materialize(
        &self,
        artifact: &RenderedArtifact,
        destination: &Path,
        force: bool,
        events: &dyn RenderEventSink,
    ) -> Result<Materialized, RenderError> {
        let state = self.check_destination(destination, force)?;

        let parent = match destination.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        self.fs
            .create_dir_all(&parent)
            .map_err(|e| write_error(&parent, e))?;

        let staging = self
            .fs
            .create_staging_dir(&parent, STAGING_PREFIX)
            .map_err(|e| write_error(&parent, e))?;
        tracing::debug!(staging = %staging.display(), "staging directory created");

        let files_written = match self.write_tree(artifact, &staging, events) {
            Ok(count) => count,
            Err(err) => {
                self.discard(&staging);
                return Err(err);
            }
        };

        let replaced = state != DestinationState::Missing;
        if let Err(err) = self.commit(&staging, destination, replaced) {
            self.discard(&staging);
            return Err(err);
        }

        tracing::info!(
            destination = %destination.display(),
            files = files_written,
            replaced,
            "project written"
        );
        Ok(Materialized {
            destination: destination.to_path_buf(),
            files_written,
            replaced,
        })
    }

    fn write_tree(
        &self,
        artifact: &RenderedArtifact,
        staging: &Path,
        events: &dyn RenderEventSink,
    ) -> Result<usize, RenderError> {
        let detailed = events.wants_detailed_events();
        let mut written = 0;
        for (path, entry) in artifact.entries() {
            let target = staging.join(path);
            match entry {
                RenderedEntry::Dir => {
                    self.fs
                        .create_dir_all(&target)
                        .map_err(|e| write_error(&target, e))?;
                }
                RenderedEntry::File(file) => {
                    self.fs
                        .write(&target, file.content())
                        .map_err(|e| write_error(&target, e))?;
                    if file.is_executable() {
                        self.fs
                            .set_executable(&target)
                            .map_err(|e| write_error(&target, e))?;
                    }
                    if detailed {
                        events.on_event(RenderEvent::FileWritten {
                            index: written,
                            path: path.to_string(),
                        });
                    }
                    written += 1;
                }
            }
        }
        Ok(written)
    }

    /// Move the staging tree onto `destination`
    fn commit(&self, staging: &Path, destination: &Path, replace: bool) -> Result<(), RenderError> {
        if !replace {
            return self
                .fs
                .rename(staging, destination)
                .map_err(|e| write_error(destination, e));
        }

        let mut backup_name = staging.as_os_str().to_os_string();
        backup_name.push(".old");
        let backup = PathBuf::from(backup_name);

        self.fs
            .rename(destination, &backup)
            .map_err(|e| write_error(destination, e))?;

        if let Err(err) = self.fs.rename(staging, destination) {
            if let Err(restore) = self.fs.rename(&backup, destination) {
                tracing::error!(
                    backup = %backup.display(),
                    error = %restore,
                    "failed to restore previous destination"
                );
            } else {
                tracing::warn!(destination = %destination.display(), "previous destination restored");
            }
            return Err(write_error(destination, err));
        }

        if let Err(err) = self.fs.remove_dir_all(&backup) {
            tracing::warn!(backup = %backup.display(), error = %err, "failed to remove replaced tree");
        }
        Ok(())
    }

    fn discard(&self, staging: &Path) {
        if !self.fs.exists(staging) {
            return;
        }
        if let Err(err) = self.fs.remove_dir_all(staging) {
            tracing::warn!(staging = %staging.display(), error = %err, "failed to remove staging directory");
        } else {
            tracing::debug!(staging = %staging.display(), "staging directory removed");
        }
    }
}
