use std::sync::OnceLock;

use regex_lite::Regex;

/// Extensions accepted as markdown documents. Case-sensitive; `mark.*` also
/// admits the long-tail variants (`markdown`, `markdn`, ...).
const MARKDOWN_EXT_PATTERN: &str = r"\.(md|mdwn|mkdn|mark.*|txt)$";

fn markdown_ext_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(MARKDOWN_EXT_PATTERN).expect("valid extension pattern"))
}

/// Whether a path names a markdown document this editor will open.
pub fn is_markdown_path(path: &str) -> bool {
    markdown_ext_re().is_match(path)
}

/// One named extension filter for a native file dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFilter {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
}

pub const MARKDOWN_OPEN_FILTER: FileFilter = FileFilter {
    name: "Markdown",
    extensions: &["md", "mdwn", "mkd", "mkdn", "mark*", "txt"],
};

pub const MARKDOWN_SAVE_FILTER: FileFilter = FileFilter {
    name: "Markdown",
    extensions: &["md"],
};

pub const HTML_FILTER: FileFilter = FileFilter {
    name: "HTML",
    extensions: &["html"],
};

pub const PDF_FILTER: FileFilter = FileFilter {
    name: "PDF",
    extensions: &["pdf"],
};

impl FileFilter {
    /// FLTK filter string: "Description\tPattern", with brace alternation for
    /// multi-extension filters.
    pub fn fltk_pattern(&self) -> String {
        let pattern = if self.extensions.len() == 1 {
            format!("*.{}", self.extensions[0])
        } else {
            format!("*.{{{}}}", self.extensions.join(","))
        };
        format!("{}\t{}", self.name, pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_extensions_match() {
        for path in [
            "notes.md",
            "notes.mdwn",
            "notes.mkdn",
            "notes.markdown",
            "notes.txt",
            "/abs/dir/readme.md",
        ] {
            assert!(is_markdown_path(path), "{path} should match");
        }
    }

    #[test]
    fn test_non_markdown_extensions_rejected() {
        for path in ["notes.html", "notes.pdf", "notes", "md", "archive.tar.gz"] {
            assert!(!is_markdown_path(path), "{path} should not match");
        }
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert!(!is_markdown_path("NOTES.MD"));
        assert!(is_markdown_path("NOTES.md"));
    }

    #[test]
    fn test_single_extension_pattern() {
        assert_eq!(PDF_FILTER.fltk_pattern(), "PDF\t*.pdf");
    }

    #[test]
    fn test_multi_extension_pattern() {
        assert_eq!(
            MARKDOWN_OPEN_FILTER.fltk_pattern(),
            "Markdown\t*.{md,mdwn,mkd,mkdn,mark*,txt}"
        );
    }
}
