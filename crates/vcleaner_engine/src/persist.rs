use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::Builder;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to write '{}': {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

/// Atomically write content to a target path by writing a temp file in the same
/// directory, then renaming it over the target.
pub struct AtomicFileWriter {
    target: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(target: PathBuf) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Returns the number of bytes written.
    pub fn write(&self, content: &str) -> Result<u64, PersistError> {
        let existing = fs::metadata(&self.target).ok().map(|meta| meta.permissions());

        let mut builder = Builder::new();
        if existing.is_none() {
            apply_create_mode(&mut builder);
        }
        let mut tmp = builder
            .tempfile_in(self.parent_dir())
            .map_err(|e| self.io_error(e))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| self.io_error(e))?;
        tmp.flush().map_err(|e| self.io_error(e))?;
        tmp.as_file().sync_all().map_err(|e| self.io_error(e))?;

        // Replacing a file keeps its mode.
        if let Some(permissions) = existing {
            fs::set_permissions(tmp.path(), permissions).map_err(|e| self.io_error(e))?;
        }

        tmp.persist(&self.target)
            .map_err(|e| self.io_error(e.error))?;
        Ok(content.len() as u64)
    }

    fn parent_dir(&self) -> &Path {
        match self.target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn io_error(&self, source: io::Error) -> PersistError {
        PersistError::Io {
            path: self.target.clone(),
            source,
        }
    }
}

// Temp files default to owner-only; new targets get the mode a plain create would
// give them, 0o666 masked by the process umask.
#[cfg(unix)]
fn apply_create_mode(builder: &mut Builder<'_, '_>) {
    use std::os::unix::fs::PermissionsExt;
    builder.permissions(fs::Permissions::from_mode(0o666));
}

#[cfg(not(unix))]
fn apply_create_mode(_builder: &mut Builder<'_, '_>) {}
