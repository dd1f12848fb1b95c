use std::path::Path;

pub const APP_NAME: &str = "Simple Text Editor";
pub const UNTITLED_NAME: &str = "New Document";

/// Extract the file name component of a path for display.
///
/// Returns "Unknown" for paths with no usable final component ("/", ".", "").
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Build the window title for a document.
///
/// `"<name> - Simple Text Editor"`, or `"New Document - Simple Text Editor"`
/// when there is no backing file, with `" *"` appended while dirty.
pub fn window_title(path: Option<&Path>, dirty: bool) -> String {
    let name = match path {
        Some(p) => display_name(p),
        None => UNTITLED_NAME.to_string(),
    };
    let mut title = format!("{} - {}", name, APP_NAME);
    if dirty {
        title.push_str(" *");
    }
    title
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_from_path() {
        assert_eq!(display_name(Path::new("/home/user/test.txt")), "test.txt");
        assert_eq!(display_name(Path::new("notes.md")), "notes.md");
        assert_eq!(display_name(Path::new("/path/with/many/levels/file.rs")), "file.rs");
    }

    #[test]
    fn test_display_name_edge_cases() {
        assert_eq!(display_name(Path::new("/home/user/")), "user");
        assert_eq!(display_name(Path::new("")), "Unknown");
        assert_eq!(display_name(Path::new(".")), "Unknown");
        assert_eq!(display_name(Path::new("/")), "Unknown");
    }

    #[test]
    fn test_title_untitled_clean() {
        assert_eq!(window_title(None, false), "New Document - Simple Text Editor");
    }

    #[test]
    fn test_title_untitled_dirty() {
        assert_eq!(window_title(None, true), "New Document - Simple Text Editor *");
    }

    #[test]
    fn test_title_with_path() {
        let path = Path::new("/home/user/todo.txt");
        assert_eq!(window_title(Some(path), false), "todo.txt - Simple Text Editor");
        assert_eq!(window_title(Some(path), true), "todo.txt - Simple Text Editor *");
    }
}
