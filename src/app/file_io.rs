use std::fs;
use std::path::Path;

use super::error::{AppError, Result};

/// Read a whole file as UTF-8 text. Invalid UTF-8 is a read error.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `text` to `path` as UTF-8, replacing any existing content.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|source| AppError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hello.txt");
        write_text(&path, "olá, mundo\n").unwrap();
        assert_eq!(read_text(&path).unwrap(), "olá, mundo\n");
    }

    #[test]
    fn test_write_truncates_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        write_text(&path, "a much longer original body").unwrap();
        write_text(&path, "short").unwrap();
        assert_eq!(read_text(&path).unwrap(), "short");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_text(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, AppError::Read { .. }));
        assert!(err.to_string().starts_with("Error opening file:"));
    }

    #[test]
    fn test_read_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bin.dat");
        fs::write(&path, [0xff, 0xfe, 0x00, 0xc3]).unwrap();
        assert!(matches!(read_text(&path), Err(AppError::Read { .. })));
    }

    #[test]
    fn test_write_into_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");
        let err = write_text(&path, "x").unwrap_err();
        assert!(matches!(err, AppError::Write { .. }));
        assert!(err.to_string().starts_with("Error saving file:"));
    }
}
