use std::path::{Path, PathBuf};

use super::document::DocumentState;
use super::error::AppError;
use super::file_io::{read_text, write_text};
use super::scratch::ScratchFile;
use super::view::{EditorDialogs, EditorView, UnsavedChoice};

/// Owns the document state and scratch file, and runs the file commands
/// against a view and a set of dialogs.
pub struct EditorSession<V: EditorView, D: EditorDialogs> {
    view: V,
    dialogs: D,
    document: DocumentState,
    scratch: Option<ScratchFile>,
}

impl<V: EditorView, D: EditorDialogs> EditorSession<V, D> {
    /// Start a session with a scratch file in the system temp directory.
    pub fn new(view: V, dialogs: D) -> Self {
        let scratch = match ScratchFile::create() {
            Ok(s) => Some(s),
            Err(e) => {
                tracing::warn!("Failed to create scratch file: {}", e);
                None
            }
        };
        Self::with_scratch(view, dialogs, scratch)
    }

    pub fn with_scratch(view: V, dialogs: D, scratch: Option<ScratchFile>) -> Self {
        let mut session = Self {
            view,
            dialogs,
            document: DocumentState::new(),
            scratch,
        };
        session.refresh_title();
        session
    }

    pub fn document(&self) -> &DocumentState {
        &self.document
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    pub fn scratch_path(&self) -> Option<&Path> {
        self.scratch.as_ref().and_then(|s| s.path())
    }

    pub fn refresh_title(&mut self) {
        let title = self.document.title();
        tracing::debug!("Window title: {}", title);
        self.view.set_title(&title);
    }

    /// The buffer was edited by the user.
    pub fn buffer_changed(&mut self) {
        self.document.mark_dirty();
        self.refresh_title();
    }

    /// Start an empty, untitled document. Returns false if the user backed out.
    pub fn file_new(&mut self) -> bool {
        if !self.resolve_unsaved_changes() {
            return false;
        }

        self.view.set_text("");
        self.document.reset();
        self.regenerate_scratch();
        self.refresh_title();
        self.view.set_status("New document created.");
        true
    }

    pub fn file_open(&mut self) -> bool {
        let Some(path) = self.dialogs.choose_open_path() else {
            return false;
        };
        self.open_path(path)
    }

    /// Load `path` into the buffer. On failure the current state is kept.
    pub fn open_path(&mut self, path: PathBuf) -> bool {
        match read_text(&path) {
            Ok(content) => {
                self.view.set_text(&content);
                tracing::info!("Opened {} ({} bytes)", path.display(), content.len());
                self.document.set_file(path);
                self.refresh_title();
                self.report_status("Opened");
                true
            }
            Err(e) => {
                self.report_error(&e);
                false
            }
        }
    }

    /// Save to the current path, or ask for one. Returns true on success.
    pub fn file_save(&mut self) -> bool {
        let Some(path) = self.document.file_path().map(Path::to_path_buf) else {
            return self.file_save_as();
        };

        match write_text(&path, &self.view.text()) {
            Ok(()) => {
                tracing::info!("Saved {}", path.display());
                self.document.mark_clean();
                self.refresh_title();
                self.report_status("Saved");
                true
            }
            Err(e) => {
                self.report_error(&e);
                false
            }
        }
    }

    pub fn file_save_as(&mut self) -> bool {
        let suggested = self.document.display_name();
        let Some(path) = self.dialogs.choose_save_path(suggested.as_deref()) else {
            return false;
        };

        match write_text(&path, &self.view.text()) {
            Ok(()) => {
                tracing::info!("Saved as {}", path.display());
                self.document.set_file(path);
                self.refresh_title();
                self.report_status("Saved as");
                true
            }
            Err(e) => {
                self.report_error(&e);
                false
            }
        }
    }

    /// Handle a window-close request. Returns true if the window may close.
    pub fn request_close(&mut self) -> bool {
        if !self.resolve_unsaved_changes() {
            return false;
        }

        if let Some(ref mut scratch) = self.scratch {
            if let Err(e) = scratch.remove() {
                tracing::warn!("Failed to remove scratch file: {}", e);
            }
        }
        true
    }

    /// Prompt when dirty. True means the caller may discard the buffer.
    fn resolve_unsaved_changes(&mut self) -> bool {
        if !self.document.is_dirty() {
            return true;
        }
        match self.dialogs.ask_unsaved_changes() {
            UnsavedChoice::Save => self.file_save(),
            UnsavedChoice::Discard => true,
            UnsavedChoice::Cancel => false,
        }
    }

    fn regenerate_scratch(&mut self) {
        let result = match self.scratch.take() {
            Some(mut scratch) => scratch.regenerate().map(|()| scratch),
            None => ScratchFile::create(),
        };
        match result {
            Ok(scratch) => self.scratch = Some(scratch),
            Err(e) => tracing::warn!("Failed to recreate scratch file: {}", e),
        }
    }

    fn report_status(&mut self, verb: &str) {
        if let Some(name) = self.document.display_name() {
            self.view.set_status(&format!("{}: {}", verb, name));
        }
    }

    fn report_error(&mut self, err: &AppError) {
        tracing::warn!("{}", err);
        self.dialogs.show_error(&err.to_string());
    }
}
