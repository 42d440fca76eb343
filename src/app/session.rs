//! The process-wide session coordinator: owns the platform backend, the
//! window registry, per-window modification state, and the PDF worker. Every
//! mutation happens on the event-loop thread, so there is no locking.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::args::StartupArguments;
use super::error::AppError;
use super::file_filters::{self, HTML_FILTER, MARKDOWN_OPEN_FILTER, MARKDOWN_SAVE_FILTER, PDF_FILTER};
use super::messages::{WindowCommand, WindowEvent, WindowRequest, WorkerEvent};
use super::paths;
use super::pdf_worker::{PdfJob, PdfWorkerManager};
use super::platform::{
    CloseConfirm, OpenDialogOptions, Platform, SaveDialogOptions, WindowOptions,
};
use super::registry::{self, WindowId, WindowRegistry, WINDOW_HEIGHT, WINDOW_WIDTH};

/// Environment variable that opens the debug surface on every created window.
pub const DEBUG_ENV: &str = "SEAPIG_DEBUG";

const CLOSE_CONFIRM_MESSAGE: &str =
    "The document has not yet been saved.\nAre you sure you want to quit?";
const IGNORED_ARGS_MESSAGE: &str = "Ignoring the arguments below.";

pub struct SessionCoordinator<P: Platform> {
    platform: P,
    registry: WindowRegistry,
    /// Per-window modification state, consulted at that window's close time.
    modified: HashMap<WindowId, bool>,
    /// Files to deliver once their window reports `FinishedLoading`.
    pending_open: HashMap<WindowId, PathBuf>,
    pdf_worker: PdfWorkerManager,
    debug_windows: bool,
}

impl<P: Platform> SessionCoordinator<P> {
    pub fn new(platform: P, debug_windows: bool) -> Self {
        Self {
            platform,
            registry: WindowRegistry::new(),
            modified: HashMap::new(),
            pending_open: HashMap::new(),
            pdf_worker: PdfWorkerManager::new(),
            debug_windows,
        }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    pub fn has_windows(&self) -> bool {
        !self.registry.is_empty()
    }

    pub fn is_modified(&self, id: WindowId) -> bool {
        self.modified.get(&id).copied().unwrap_or(false)
    }

    /// Window factory: compute the cascade slot from the current registry
    /// length and create the window. Callers pair this with a registry push.
    fn create_window(&mut self) -> WindowId {
        let (work_width, work_height) = self.platform.work_area();
        let (x, y) = registry::cascade_position(self.registry.len(), work_width, work_height);
        self.platform.create_window(&WindowOptions {
            x,
            y,
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            open_dev_tools: self.debug_windows,
        })
    }

    /// Create and register an empty editor window.
    pub fn open_new_window(&mut self) -> WindowId {
        let id = self.create_window();
        self.registry.push(id);
        info!(window = ?id, count = self.registry.len(), "window created");
        id
    }

    /// Process the startup file arguments: one window per valid markdown
    /// file, a single default window when none qualify, and one aggregate
    /// warning for everything ignored.
    pub fn startup(&mut self, args: &StartupArguments, cwd: &Path) {
        let mut ignored = Vec::new();
        for arg in &args.paths {
            let full = paths::resolve_absolute(cwd, arg);
            let is_file = fs::metadata(&full).map(|meta| meta.is_file()).unwrap_or(false);
            if is_file && file_filters::is_markdown_path(&full.to_string_lossy()) {
                let id = self.open_new_window();
                self.pending_open.insert(id, full);
            } else {
                ignored.push(format!("{} isn't a file.", full.display()));
            }
        }
        if self.registry.is_empty() {
            self.open_new_window();
        }
        if !ignored.is_empty() {
            warn!(count = ignored.len(), "ignoring startup arguments");
            self.platform
                .show_warning(IGNORED_ARGS_MESSAGE, &ignored.join("\n"));
        }
    }

    pub fn handle_window_event(&mut self, id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::FinishedLoading => {
                if self.pdf_worker.is_worker(id) {
                    self.pdf_worker.on_worker_loaded(&mut self.platform, id);
                    return;
                }
                self.platform.bind_local_shortcuts(id);
                if let Some(path) = self.pending_open.remove(&id) {
                    self.platform.send_to_window(id, WindowCommand::OpenFile { path });
                }
            }
            WindowEvent::CloseRequested => self.handle_close_request(id),
            WindowEvent::Closed => {
                if self.pdf_worker.is_worker(id) {
                    self.pdf_worker.on_worker_closed(id);
                    return;
                }
                self.registry.remove(id);
                self.modified.remove(&id);
                self.pending_open.remove(&id);
                info!(window = ?id, remaining = self.registry.len(), "window closed");
            }
        }
    }

    /// Close state machine: unmodified windows are destroyed immediately;
    /// modified ones get a blocking confirmation whose Cancel fully
    /// suppresses the request. Registry removal happens only on the
    /// subsequent `Closed` event.
    fn handle_close_request(&mut self, id: WindowId) {
        if self.is_modified(id)
            && self.platform.confirm_close(id, CLOSE_CONFIRM_MESSAGE) == CloseConfirm::Cancel
        {
            return;
        }
        self.platform.destroy_window(id);
    }

    /// File/Quit and window-manager quit: run the close machine over every
    /// open window, each with its own confirmation.
    pub fn request_quit(&mut self) {
        for id in self.registry.windows().to_vec() {
            self.handle_close_request(id);
        }
    }

    /// Forward a menu action to whichever window has focus.
    pub fn dispatch_to_focused(&mut self, command: WindowCommand) {
        if let Some(id) = self.platform.focused_window() {
            self.platform.send_to_window(id, command);
        }
    }

    pub fn handle_request(&mut self, from: WindowId, request: WindowRequest) {
        match request {
            WindowRequest::NewFile => {
                self.open_new_window();
            }
            WindowRequest::OpenFileDialog { current_file, new_window } => {
                self.open_file_dialog(from, &current_file, new_window);
            }
            WindowRequest::SaveNewFile => {
                let default_path =
                    paths::append_extension(paths::default_export_path(""), "md");
                let opts = SaveDialogOptions {
                    title: "Save Markdown File",
                    default_path,
                    filter: MARKDOWN_SAVE_FILTER,
                };
                if let Some(path) = self.platform.show_save_dialog(&opts) {
                    self.platform
                        .send_to_window(from, WindowCommand::SelectedSaveFile { path });
                }
            }
            WindowRequest::ExportHtml { current_file } => {
                let default_path =
                    paths::append_extension(paths::default_export_path(&current_file), "html");
                let opts = SaveDialogOptions {
                    title: "Export HTML file",
                    default_path,
                    filter: HTML_FILTER,
                };
                if let Some(path) = self.platform.show_save_dialog(&opts) {
                    self.platform
                        .send_to_window(from, WindowCommand::SelectedHtmlFile { path });
                }
            }
            WindowRequest::ExportPdfFile { current_file, contents } => {
                let default_path =
                    paths::append_extension(paths::default_export_path(&current_file), "pdf");
                let opts = SaveDialogOptions {
                    title: "Export PDF file",
                    default_path,
                    filter: PDF_FILTER,
                };
                let Some(path) = self.platform.show_save_dialog(&opts) else {
                    return;
                };
                let job = PdfJob::new(&current_file, contents, path);
                self.pdf_worker.begin(&mut self.platform, job);
            }
            WindowRequest::ErrorMessage { text } => {
                self.platform.show_error(&text);
            }
            WindowRequest::DocModified { modified } => {
                self.modified.insert(from, modified);
            }
        }
    }

    fn open_file_dialog(&mut self, from: WindowId, current_file: &str, new_window: bool) {
        let start_dir = Path::new(current_file)
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let opts = OpenDialogOptions {
            title: "Open Markdown File",
            start_dir,
            filter: MARKDOWN_OPEN_FILTER,
        };
        let Some(chosen) = self.platform.show_open_dialog(&opts) else {
            return;
        };
        let Some(first) = chosen.first().cloned() else {
            return;
        };
        if new_window {
            let id = self.open_new_window();
            self.pending_open.insert(id, first);
        } else {
            self.platform
                .send_to_window(from, WindowCommand::SelectedFile { paths: chosen });
        }
    }

    pub fn handle_worker_event(&mut self, id: WindowId, event: WorkerEvent) {
        match event {
            WorkerEvent::ReadyPrintToPdf { pdf_path } => {
                match self.pdf_worker.on_ready(&mut self.platform, id, &pdf_path) {
                    Ok(()) => {}
                    // A replaced worker may still deliver its ready signal;
                    // only the active job's failures reach the user.
                    Err(AppError::NoPdfWorker) => {
                        debug!(worker = ?id, "ignoring ready signal from replaced PDF worker");
                    }
                    Err(err) => {
                        warn!(%err, path = %pdf_path.display(), "PDF export failed");
                        self.platform
                            .show_error(&format!("Failed to export PDF: {err}"));
                    }
                }
            }
        }
    }
}
