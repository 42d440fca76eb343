//! The seam between the session layer and the GUI framework. Everything the
//! coordinator needs from the toolkit goes through this trait, so the session
//! logic stays headless and the FLTK shell stays behind the `gui` feature.

use std::path::{Path, PathBuf};

use super::error::Result;
use super::file_filters::FileFilter;
use super::messages::{WindowCommand, WorkerCommand};
use super::registry::WindowId;

/// Parameters for a new editor window, computed by the window factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowOptions {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Set from the debug environment flag: open the inspection surface on
    /// every created window.
    pub open_dev_tools: bool,
}

#[derive(Debug, Clone)]
pub struct OpenDialogOptions {
    pub title: &'static str,
    pub start_dir: PathBuf,
    pub filter: FileFilter,
}

#[derive(Debug, Clone)]
pub struct SaveDialogOptions {
    pub title: &'static str,
    pub default_path: PathBuf,
    pub filter: FileFilter,
}

/// Outcome of the blocking close confirmation. A dismissed dialog counts as
/// `Ok`, matching the destroy-on-default behavior of the close machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseConfirm {
    Ok,
    Cancel,
}

pub trait Platform {
    /// Usable screen area (width, height) for cascade placement.
    fn work_area(&self) -> (i32, i32);

    /// Create a visible editor window and start loading the editor document
    /// into it. The backend reports `FinishedLoading` once the content
    /// process is ready to receive commands.
    fn create_window(&mut self, opts: &WindowOptions) -> WindowId;

    /// Create the hidden PDF worker window and start loading the template.
    fn create_worker_window(&mut self, template: &Path) -> WindowId;

    /// Tear the window down immediately; ends with a `Closed` event.
    fn destroy_window(&mut self, id: WindowId);

    /// Close politely (used for worker replacement); ends with a `Closed`
    /// event for the window.
    fn close_window(&mut self, id: WindowId);

    fn focused_window(&self) -> Option<WindowId>;

    /// Bind the per-window keyboard accelerators. They are released by the
    /// framework when the window dies.
    fn bind_local_shortcuts(&mut self, id: WindowId);

    fn send_to_window(&mut self, id: WindowId, command: WindowCommand);

    fn send_to_worker(&mut self, id: WindowId, command: WorkerCommand);

    /// `None` is cancellation, a normal outcome.
    fn show_open_dialog(&mut self, opts: &OpenDialogOptions) -> Option<Vec<PathBuf>>;

    /// `None` is cancellation, a normal outcome.
    fn show_save_dialog(&mut self, opts: &SaveDialogOptions) -> Option<PathBuf>;

    /// Blocking OK/Cancel confirmation scoped to the given window.
    fn confirm_close(&mut self, id: WindowId, message: &str) -> CloseConfirm;

    fn show_error(&mut self, message: &str);

    /// Single aggregate warning (message plus detail lines).
    fn show_warning(&mut self, message: &str, detail: &str);

    /// Rasterize the worker window's document. `print_background` keeps
    /// background graphics in the output.
    fn print_to_pdf(&mut self, worker: WindowId, print_background: bool) -> Result<Vec<u8>>;

    /// Open a file with the OS default handler.
    fn open_path(&mut self, path: &Path) -> Result<()>;
}
