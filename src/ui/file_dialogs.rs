use std::path::{Path, PathBuf};

use fltk::dialog::{FileDialogType, NativeFileChooser, NativeFileChooserOptions};

use crate::app::file_filters::{all_files_filter, text_files_filter};

fn run_chooser(mut nfc: NativeFileChooser) -> Option<PathBuf> {
    nfc.show(); // returns (), blocks until close
    let filename = nfc.filename();
    if filename.as_os_str().is_empty() {
        None
    } else {
        Some(filename)
    }
}

fn start_in(nfc: &mut NativeFileChooser, directory: Option<&Path>) {
    if let Some(dir) = directory {
        if let Err(e) = nfc.set_directory(&dir) {
            tracing::debug!("Ignoring start directory {}: {:?}", dir.display(), e);
        }
    }
}

pub fn native_open_dialog(directory: Option<&Path>) -> Option<PathBuf> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseFile);
    nfc.set_title("Open File");
    nfc.set_filter(&text_files_filter());
    start_in(&mut nfc, directory);
    run_chooser(nfc)
}

/// Save picker. The chooser itself asks before replacing an existing file.
pub fn native_save_dialog(directory: Option<&Path>, suggested_name: Option<&str>) -> Option<PathBuf> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseSaveFile);
    nfc.set_title("Save File As");
    nfc.set_option(NativeFileChooserOptions::SaveAsConfirm);
    nfc.set_filter(&all_files_filter());
    start_in(&mut nfc, directory);
    if let Some(name) = suggested_name {
        nfc.set_preset_file(name);
    }
    run_chooser(nfc)
}
