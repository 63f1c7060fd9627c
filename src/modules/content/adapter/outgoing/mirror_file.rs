use std::io::ErrorKind;
use std::path::PathBuf;

use crate::modules::content::application::ports::outgoing::{MirrorError, MirrorStore};

/// Mirror backed by a directory holding one file per key.
///
/// Values are stored verbatim; the directory is created on first write.
#[derive(Debug, Clone)]
pub struct FileMirrorStore {
    dir: PathBuf,
}

impl FileMirrorStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, MirrorError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(MirrorError::Unavailable(format!("invalid mirror key '{}'", key)));
        }
        Ok(self.dir.join(key))
    }
}

fn io_error(key: &str, source: std::io::Error) -> MirrorError {
    MirrorError::Io {
        key: key.to_string(),
        source,
    }
}

impl MirrorStore for FileMirrorStore {
    fn read(&self, key: &str) -> Result<Option<String>, MirrorError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(key, e)),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), MirrorError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir).map_err(|e| io_error(key, e))?;

        // Write-then-rename so a crash never leaves a half-written entry.
        let tmp = path.with_extension("tmp");
        std::fs::write(&tmp, value).map_err(|e| io_error(key, e))?;
        std::fs::rename(&tmp, &path).map_err(|e| io_error(key, e))
    }

    fn remove(&self, key: &str) -> Result<(), MirrorError> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(key, e)),
        }
    }
}
