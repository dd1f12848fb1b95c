//! Seams between the editor session and the GUI toolkit.
//!
//! The FLTK implementations live in `crate::ui`; tests drive the session
//! through in-memory fakes.

use std::path::PathBuf;

/// Answer to the "unsaved changes" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsavedChoice {
    Save,
    Discard,
    Cancel,
}

pub trait EditorView {
    /// Full buffer content.
    fn text(&self) -> String;

    /// Replace the buffer content. Must not be reported back as a user edit.
    fn set_text(&mut self, text: &str);

    fn set_title(&mut self, title: &str);

    fn set_status(&mut self, message: &str);
}

/// Modal dialogs. Every call blocks until the user dismisses it.
pub trait EditorDialogs {
    fn ask_unsaved_changes(&mut self) -> UnsavedChoice;

    fn choose_open_path(&mut self) -> Option<PathBuf>;

    /// Pick a save target. Implementations confirm before overwriting.
    fn choose_save_path(&mut self, suggested_name: Option<&str>) -> Option<PathBuf>;

    fn show_error(&mut self, message: &str);
}
