use std::path::{Path, PathBuf};

use fltk::dialog;

use crate::app::view::{EditorDialogs, UnsavedChoice};
use super::file_dialogs::{native_open_dialog, native_save_dialog};

/// Modal FLTK dialogs. Remembers the last directory used by a file chooser.
#[derive(Default)]
pub struct FltkDialogs {
    last_directory: Option<PathBuf>,
}

impl FltkDialogs {
    pub fn new() -> Self {
        Self::default()
    }

    fn remember_directory(&mut self, path: &Path) {
        if let Some(parent) = path.parent() {
            self.last_directory = Some(parent.to_path_buf());
        }
    }
}

impl EditorDialogs for FltkDialogs {
    fn ask_unsaved_changes(&mut self) -> UnsavedChoice {
        let choice = dialog::choice2_default(
            "You have unsaved changes.\nDo you want to save them before continuing?",
            "Save",
            "Discard",
            "Cancel",
        );
        match choice {
            Some(0) => UnsavedChoice::Save,
            Some(1) => UnsavedChoice::Discard,
            _ => UnsavedChoice::Cancel,
        }
    }

    fn choose_open_path(&mut self) -> Option<PathBuf> {
        let path = native_open_dialog(self.last_directory.as_deref())?;
        self.remember_directory(&path);
        Some(path)
    }

    fn choose_save_path(&mut self, suggested_name: Option<&str>) -> Option<PathBuf> {
        let path = native_save_dialog(self.last_directory.as_deref(), suggested_name)?;
        self.remember_directory(&path);
        Some(path)
    }

    fn show_error(&mut self, message: &str) {
        dialog::alert_default(message);
    }
}
