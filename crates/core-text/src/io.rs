//! File persistence for [`TextBuffer`].
//!
//! On-disk format: the buffer's lines joined by `\n` with no trailing break.
//! Loading splits strictly on `\n`, so a save followed by a load reproduces
//! the same lines byte for byte. No line-ending translation is performed.

use crate::{Position, TextBuffer, split_lines};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("{}: no such file or directory", .path.display())]
    NotFound { path: PathBuf },
    #[error("{}: permission denied", .path.display())]
    PermissionDenied { path: PathBuf },
    #[error("no file name")]
    NoTarget,
    #[error("{}: {source}", .path.display())]
    Other {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IoError {
    fn from_io(path: &Path, err: std::io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            std::io::ErrorKind::NotFound => IoError::NotFound { path },
            std::io::ErrorKind::PermissionDenied => IoError::PermissionDenied { path },
            _ => IoError::Other { path, source: err },
        }
    }
}

impl TextBuffer {
    /// Create a buffer from the file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let mut buffer = Self::new();
        buffer.load(path)?;
        Ok(buffer)
    }

    /// Replace the whole buffer with the content of `path`. On failure the
    /// buffer is left untouched.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), IoError> {
        let path = path.as_ref();
        let content = std::fs::read(path).map_err(|e| {
            tracing::error!(target: "text.io", file = %path.display(), error = %e, "file_open_error");
            IoError::from_io(path, e)
        })?;
        self.lines = split_lines(&content);
        self.cursor = Position::origin();
        self.source_path = Some(path.to_path_buf());
        self.dirty = false;
        tracing::debug!(
            target: "text.io",
            file = %path.display(),
            size_bytes = content.len(),
            line_count = self.lines.len(),
            "file_read_ok"
        );
        Ok(())
    }

    /// Write to the associated path.
    pub fn save(&mut self) -> Result<(), IoError> {
        let Some(path) = self.source_path.clone() else {
            tracing::warn!(target: "text.io", "save_without_target");
            return Err(IoError::NoTarget);
        };
        self.write_to(&path)?;
        self.dirty = false;
        Ok(())
    }

    /// Write to `target` and adopt it as the associated path.
    pub fn save_as(&mut self, target: impl AsRef<Path>) -> Result<(), IoError> {
        let target = target.as_ref();
        self.write_to(target)?;
        self.source_path = Some(target.to_path_buf());
        self.dirty = false;
        Ok(())
    }

    /// Serialized file content.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.lines.join(&b'\n')
    }

    fn write_to(&self, path: &Path) -> Result<(), IoError> {
        let content = self.to_bytes();
        match std::fs::write(path, &content) {
            Ok(()) => {
                tracing::debug!(target: "text.io", file = %path.display(), size_bytes = content.len(), "file_write_ok");
                Ok(())
            }
            Err(e) => {
                tracing::error!(target: "text.io", file = %path.display(), error = %e, "file_write_error");
                Err(IoError::from_io(path, e))
            }
        }
    }
}
