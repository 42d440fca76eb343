use std::path::{Path, PathBuf};

use fltk::dialog;

use crate::app::platform::{OpenDialogOptions, SaveDialogOptions};

/// Native open dialog; `None` means the user cancelled.
pub fn native_open_dialog(opts: &OpenDialogOptions) -> Option<Vec<PathBuf>> {
    let dir = opts.start_dir.to_string_lossy();
    let chosen = dialog::file_chooser(opts.title, &opts.filter.fltk_pattern(), &dir, false)?;
    if chosen.is_empty() {
        return None;
    }
    Some(vec![PathBuf::from(chosen)])
}

/// Native save dialog seeded at the default path's directory; `None` means
/// the user cancelled.
pub fn native_save_dialog(opts: &SaveDialogOptions) -> Option<PathBuf> {
    let dir = opts
        .default_path
        .parent()
        .unwrap_or(Path::new("."))
        .to_string_lossy()
        .to_string();
    let chosen = dialog::file_chooser(opts.title, &opts.filter.fltk_pattern(), &dir, false)?;
    if chosen.is_empty() {
        return None;
    }
    Some(PathBuf::from(chosen))
}
