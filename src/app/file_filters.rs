/// Filter for the Open dialog.
///
/// FLTK format: "Description\tPattern\nDescription2\tPattern2".
/// The native chooser adds "All Files (*)" itself.
pub fn text_files_filter() -> String {
    [
        "Text Files\t*.txt",
        "Markdown Files\t*.{md,markdown}",
        "Log Files\t*.log",
        "Config Files\t*.{json,yaml,yml,toml,ini,cfg,conf}",
    ]
    .join("\n")
}

/// Filter for the Save dialog: any file name is accepted.
pub fn all_files_filter() -> String {
    "*".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_filter_format() {
        let filter = text_files_filter();
        assert!(filter.starts_with("Text Files\t*.txt"));
        assert_eq!(filter.lines().count(), 4);
        assert!(filter.lines().all(|line| line.contains('\t')));
    }

    #[test]
    fn test_all_files_filter() {
        assert_eq!(all_files_filter(), "*");
    }
}
