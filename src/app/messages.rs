/// All messages that can be sent through the FLTK channel.
/// Each menu and widget callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // File
    FileNew,
    FileOpen,
    FileSave,
    FileSaveAs,
    FileQuit,
    WindowClose,

    // Editor
    BufferChanged,

    // View
    ToggleLineNumbers,
    ToggleWordWrap,
}
