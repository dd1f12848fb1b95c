//! FLTK widgets and the toolkit side of the editor seams.

pub mod dialogs;
pub mod file_dialogs;
pub mod main_window;
pub mod menu;
pub mod theme;
pub mod view;
