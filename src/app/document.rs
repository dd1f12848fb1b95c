use std::path::{Path, PathBuf};

use super::text_ops::{display_name, window_title};

/// Path and dirty flag of the single open document.
///
/// The text itself lives in the editor widget's buffer.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DocumentState {
    file_path: Option<PathBuf>,
    dirty: bool,
}

impl DocumentState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Reset to an untitled, clean document.
    pub fn reset(&mut self) {
        self.file_path = None;
        self.dirty = false;
    }

    /// Adopt `path` as the backing file after a successful load or save.
    pub fn set_file(&mut self, path: PathBuf) {
        self.file_path = Some(path);
        self.dirty = false;
    }

    pub fn display_name(&self) -> Option<String> {
        self.file_path.as_deref().map(display_name)
    }

    pub fn title(&self) -> String {
        window_title(self.file_path(), self.dirty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_is_clean_and_untitled() {
        let doc = DocumentState::new();
        assert!(!doc.is_dirty());
        assert!(doc.file_path().is_none());
        assert!(doc.display_name().is_none());
    }

    #[test]
    fn test_mark_dirty_from_any_state() {
        let mut doc = DocumentState::new();
        doc.mark_dirty();
        assert!(doc.is_dirty());
        doc.mark_dirty();
        assert!(doc.is_dirty());
    }

    #[test]
    fn test_set_file_clears_dirty() {
        let mut doc = DocumentState::new();
        doc.mark_dirty();
        doc.set_file(PathBuf::from("/tmp/a.txt"));
        assert!(!doc.is_dirty());
        assert_eq!(doc.file_path(), Some(Path::new("/tmp/a.txt")));
        assert_eq!(doc.display_name().as_deref(), Some("a.txt"));
    }

    #[test]
    fn test_reset_clears_path_and_dirty() {
        let mut doc = DocumentState::new();
        doc.set_file(PathBuf::from("/tmp/a.txt"));
        doc.mark_dirty();
        doc.reset();
        assert_eq!(doc, DocumentState::new());
    }

    #[test]
    fn test_title_follows_state() {
        let mut doc = DocumentState::new();
        assert_eq!(doc.title(), "New Document - Simple Text Editor");
        doc.set_file(PathBuf::from("/tmp/notes.txt"));
        doc.mark_dirty();
        assert_eq!(doc.title(), "notes.txt - Simple Text Editor *");
    }
}
