use std::io::{Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tempfile::{Builder, NamedTempFile};

use super::error::Result;

const SCRATCH_PREFIX: &str = "simple-text-editor-";
const SCRATCH_SUFFIX: &str = ".tmp";

/// Per-document temporary file.
///
/// Created empty, never read back. Recreated on every new document and
/// removed when the window closes. An abnormal exit leaves it behind.
pub struct ScratchFile {
    dir: Option<PathBuf>,
    file: Option<NamedTempFile>,
}

impl ScratchFile {
    /// Create a scratch file in the system temp directory.
    pub fn create() -> Result<Self> {
        Self::create_inner(None)
    }

    /// Create a scratch file under `dir` instead of the system temp directory.
    pub fn create_in(dir: impl Into<PathBuf>) -> Result<Self> {
        Self::create_inner(Some(dir.into()))
    }

    fn create_inner(dir: Option<PathBuf>) -> Result<Self> {
        let mut scratch = Self { dir, file: None };
        scratch.regenerate()?;
        Ok(scratch)
    }

    pub fn path(&self) -> Option<&Path> {
        self.file.as_ref().map(|f| f.path())
    }

    /// Close and unlink the current file, then create a fresh empty one.
    pub fn regenerate(&mut self) -> Result<()> {
        self.remove()?;

        let mut builder = Builder::new();
        builder.prefix(SCRATCH_PREFIX).suffix(SCRATCH_SUFFIX);
        let mut file = match self.dir {
            Some(ref dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };
        file.write_all(b"")?;
        file.flush()?;
        file.seek(SeekFrom::Start(0))?;

        tracing::info!("Scratch file created: {}", file.path().display());
        self.file = Some(file);
        Ok(())
    }

    /// Unlink the current file. Idempotent.
    pub fn remove(&mut self) -> Result<()> {
        if let Some(file) = self.file.take() {
            let path = file.path().to_path_buf();
            file.close()?;
            tracing::info!("Scratch file removed: {}", path.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_makes_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let scratch = ScratchFile::create_in(dir.path()).unwrap();
        let path = scratch.path().unwrap();
        assert!(path.exists());
        assert!(path.starts_with(dir.path()));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "");
    }

    #[test]
    fn test_regenerate_unlinks_previous() {
        let dir = tempfile::tempdir().unwrap();
        let mut scratch = ScratchFile::create_in(dir.path()).unwrap();
        let first = scratch.path().unwrap().to_path_buf();

        scratch.regenerate().unwrap();
        let second = scratch.path().unwrap().to_path_buf();

        assert_ne!(first, second);
        assert!(!first.exists());
        assert!(second.exists());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut scratch = ScratchFile::create_in(dir.path()).unwrap();
        let path = scratch.path().unwrap().to_path_buf();

        scratch.remove().unwrap();
        assert!(!path.exists());
        assert!(scratch.path().is_none());

        scratch.remove().unwrap();
    }

    #[test]
    fn test_create_in_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        assert!(ScratchFile::create_in(missing).is_err());
    }
}
