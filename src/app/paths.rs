use std::path::{Path, PathBuf};

/// Base name used for export targets of an untitled document.
pub const UNTITLED_BASENAME: &str = "new_file";

/// Environment variable overriding the bundled resource directory.
pub const RESOURCES_ENV: &str = "SEAPIG_RESOURCES";

/// Derive the default dialog path for save/export flows: the current file's
/// directory and stem, or `<documents>/new_file` for an untitled document.
/// The caller appends the extension it is exporting to.
pub fn default_export_path(current_file: &str) -> PathBuf {
    if current_file.is_empty() {
        return documents_dir().join(UNTITLED_BASENAME);
    }
    let current = Path::new(current_file);
    let stem = current.file_stem().map(ToOwned::to_owned).unwrap_or_default();
    current.parent().unwrap_or(Path::new("")).join(stem)
}

pub fn documents_dir() -> PathBuf {
    dirs::document_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Append `.ext` textually, preserving any dots already in the file name.
pub fn append_extension(path: PathBuf, ext: &str) -> PathBuf {
    let mut name = path.into_os_string();
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}

pub fn resolve_absolute(cwd: &Path, arg: &str) -> PathBuf {
    let path = Path::new(arg);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

pub fn file_url(path: &Path) -> String {
    format!("file://{}", path.display())
}

/// Base href injected into the PDF worker template so relative links in the
/// document resolve against the document's own directory.
pub fn base_href(current_file: &str) -> String {
    file_url(&default_export_path(current_file))
}

/// Directory holding the worker template and export stylesheet.
pub fn resource_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(RESOURCES_ENV) {
        return PathBuf::from(dir);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates")
}

pub fn template_path() -> PathBuf {
    resource_dir().join("template.html")
}

pub fn stylesheet_url() -> String {
    file_url(&resource_dir().join("github.css"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untitled_default_path() {
        let path = default_export_path("");
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(UNTITLED_BASENAME));
        assert_eq!(path.parent().unwrap(), documents_dir());
    }

    #[test]
    fn test_titled_default_path_strips_extension() {
        let path = default_export_path("/a/b/report.md");
        assert_eq!(path, PathBuf::from("/a/b/report"));
    }

    #[test]
    fn test_bare_filename_default_path() {
        let path = default_export_path("report.md");
        assert_eq!(path, PathBuf::from("report"));
    }

    #[test]
    fn test_append_extension_keeps_existing_dots() {
        let path = append_extension(PathBuf::from("/a/b/report.v1"), "pdf");
        assert_eq!(path, PathBuf::from("/a/b/report.v1.pdf"));
    }

    #[test]
    fn test_export_targets_per_extension() {
        let base = default_export_path("/a/b/report.md");
        assert_eq!(append_extension(base.clone(), "html"), PathBuf::from("/a/b/report.html"));
        assert_eq!(append_extension(base, "pdf"), PathBuf::from("/a/b/report.pdf"));
    }

    #[test]
    fn test_resolve_absolute() {
        let cwd = Path::new("/work/dir");
        assert_eq!(resolve_absolute(cwd, "notes.md"), PathBuf::from("/work/dir/notes.md"));
        assert_eq!(resolve_absolute(cwd, "/tmp/notes.md"), PathBuf::from("/tmp/notes.md"));
    }

    #[test]
    fn test_base_href_is_file_url() {
        assert_eq!(base_href("/a/b/report.md"), "file:///a/b/report");
    }
}
