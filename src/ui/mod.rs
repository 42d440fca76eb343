//! FLTK implementation of the platform seam: editor windows, menus, native
//! dialogs, and the hidden PDF worker window.

pub mod file_dialogs;
pub mod main_window;
pub mod menu;
pub mod platform_fltk;

use crate::app::messages::{WindowEvent, WindowRequest, WorkerEvent};
use crate::app::registry::WindowId;

/// Everything the event loop can receive over the FLTK channel.
#[derive(Debug, Clone)]
pub enum ShellEvent {
    Menu(MenuAction),
    Window(WindowId, WindowEvent),
    Request(WindowId, WindowRequest),
    Worker(WindowId, WorkerEvent),
}

/// Menu and accelerator actions, dispatched to the focused window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    NewFile,
    OpenFile,
    SaveFile,
    SaveAsFile,
    ExportHtml,
    PrintToPdf,
    ToggleFullscreen,
    Quit,
    OpenReadme,
    OpenIssues,
}

pub const README_URL: &str = "https://github.com/yasumichi/seapig/blob/master/README.md";
pub const ISSUES_URL: &str = "https://github.com/yasumichi/seapig/issues";
