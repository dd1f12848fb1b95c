//! Application layer: document state and file commands, independent of FLTK.
//!
//! - `document` - path and dirty flag
//! - `scratch` - per-document temporary file
//! - `session` - file commands run against the `view` seams
//! - `settings` - optional read-only preferences

pub mod document;
pub mod error;
pub mod file_filters;
pub mod file_io;
pub mod messages;
pub mod scratch;
pub mod session;
pub mod settings;
pub mod text_ops;
pub mod view;

pub use document::DocumentState;
pub use error::{AppError, Result};
pub use messages::Message;
pub use session::EditorSession;
pub use settings::AppSettings;
pub use view::{EditorDialogs, EditorView, UnsavedChoice};
