use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("state directory {path:?} is unusable: {reason}")]
    StateDir { path: PathBuf, reason: String },
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Creates `dir` when missing; an existing non-directory is an error.
pub fn ensure_state_dir(dir: &Path) -> Result<(), PersistError> {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(state_dir_error(dir, "not a directory")),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            fs::create_dir_all(dir).map_err(|err| state_dir_error(dir, err))
        }
        Err(err) => Err(state_dir_error(dir, err)),
    }
}

fn state_dir_error(dir: &Path, reason: impl ToString) -> PersistError {
    PersistError::StateDir {
        path: dir.to_path_buf(),
        reason: reason.to_string(),
    }
}

/// A small state file that is always replaced whole.
///
/// Saves go through a temp file in the same directory, so a reader sees
/// either the previous content or the new one.
#[derive(Debug, Clone)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    pub fn new(dir: &Path, filename: &str) -> Self {
        Self {
            path: dir.join(filename),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` when nothing has been saved yet.
    pub fn load(&self) -> Result<Option<String>, PersistError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(PersistError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    pub fn save(&self, content: &str) -> Result<(), PersistError> {
        let dir = self
            .path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        ensure_state_dir(dir)?;

        let write_error = |source: io::Error| PersistError::Write {
            path: self.path.clone(),
            source,
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(write_error)?;
        tmp.write_all(content.as_bytes()).map_err(write_error)?;
        tmp.as_file().sync_all().map_err(write_error)?;
        tmp.persist(&self.path)
            .map_err(|err| write_error(err.error))?;
        Ok(())
    }
}
