//! Scripted platform backend for unit tests: records every framework call
//! and replays queued dialog results.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use super::error::Result;
use super::messages::{WindowCommand, WorkerCommand};
use super::platform::{
    CloseConfirm, OpenDialogOptions, Platform, SaveDialogOptions, WindowOptions,
};
use super::registry::WindowId;

pub struct FakePlatform {
    next_id: u64,
    pub work_area: (i32, i32),
    pub created: Vec<(WindowId, WindowOptions)>,
    pub workers: Vec<WindowId>,
    pub destroyed: Vec<WindowId>,
    pub closed: Vec<WindowId>,
    pub bound_shortcuts: Vec<WindowId>,
    pub window_commands: Vec<(WindowId, WindowCommand)>,
    pub worker_commands: Vec<(WindowId, WorkerCommand)>,
    pub open_dialogs: Vec<OpenDialogOptions>,
    pub open_dialog_results: VecDeque<Option<Vec<PathBuf>>>,
    pub save_dialogs: Vec<SaveDialogOptions>,
    pub save_dialog_results: VecDeque<Option<PathBuf>>,
    pub confirm_results: VecDeque<CloseConfirm>,
    pub errors: Vec<String>,
    pub warnings: Vec<(String, String)>,
    pub pdf_results: VecDeque<Result<Vec<u8>>>,
    pub opened_paths: Vec<PathBuf>,
    pub focused: Option<WindowId>,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            work_area: (1920, 1080),
            created: Vec::new(),
            workers: Vec::new(),
            destroyed: Vec::new(),
            closed: Vec::new(),
            bound_shortcuts: Vec::new(),
            window_commands: Vec::new(),
            worker_commands: Vec::new(),
            open_dialogs: Vec::new(),
            open_dialog_results: VecDeque::new(),
            save_dialogs: Vec::new(),
            save_dialog_results: VecDeque::new(),
            confirm_results: VecDeque::new(),
            errors: Vec::new(),
            warnings: Vec::new(),
            pdf_results: VecDeque::new(),
            opened_paths: Vec::new(),
            focused: None,
        }
    }

    fn next_window_id(&mut self) -> WindowId {
        self.next_id += 1;
        WindowId(self.next_id)
    }
}

impl Platform for FakePlatform {
    fn work_area(&self) -> (i32, i32) {
        self.work_area
    }

    fn create_window(&mut self, opts: &WindowOptions) -> WindowId {
        let id = self.next_window_id();
        self.created.push((id, opts.clone()));
        id
    }

    fn create_worker_window(&mut self, _template: &Path) -> WindowId {
        let id = self.next_window_id();
        self.workers.push(id);
        id
    }

    fn destroy_window(&mut self, id: WindowId) {
        self.destroyed.push(id);
    }

    fn close_window(&mut self, id: WindowId) {
        self.closed.push(id);
    }

    fn focused_window(&self) -> Option<WindowId> {
        self.focused
    }

    fn bind_local_shortcuts(&mut self, id: WindowId) {
        self.bound_shortcuts.push(id);
    }

    fn send_to_window(&mut self, id: WindowId, command: WindowCommand) {
        self.window_commands.push((id, command));
    }

    fn send_to_worker(&mut self, id: WindowId, command: WorkerCommand) {
        self.worker_commands.push((id, command));
    }

    fn show_open_dialog(&mut self, opts: &OpenDialogOptions) -> Option<Vec<PathBuf>> {
        self.open_dialogs.push(opts.clone());
        self.open_dialog_results.pop_front().unwrap_or(None)
    }

    fn show_save_dialog(&mut self, opts: &SaveDialogOptions) -> Option<PathBuf> {
        self.save_dialogs.push(opts.clone());
        self.save_dialog_results.pop_front().unwrap_or(None)
    }

    fn confirm_close(&mut self, _id: WindowId, _message: &str) -> CloseConfirm {
        // No scripted answer means the dialog was dismissed, which the close
        // machine treats as OK.
        self.confirm_results.pop_front().unwrap_or(CloseConfirm::Ok)
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn show_warning(&mut self, message: &str, detail: &str) {
        self.warnings.push((message.to_string(), detail.to_string()));
    }

    fn print_to_pdf(&mut self, _worker: WindowId, _print_background: bool) -> Result<Vec<u8>> {
        self.pdf_results
            .pop_front()
            .unwrap_or_else(|| Ok(b"%PDF-1.4\nfake\n%%EOF\n".to_vec()))
    }

    fn open_path(&mut self, path: &Path) -> Result<()> {
        self.opened_paths.push(path.to_path_buf());
        Ok(())
    }
}
