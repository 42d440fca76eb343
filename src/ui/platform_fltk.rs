use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use fltk::{app::Sender, misc::HelpView, prelude::*, window::Window};
use tracing::{debug, warn};

use crate::app::error::{AppError, Result};
use crate::app::messages::{WindowCommand, WindowEvent, WorkerCommand, WorkerEvent};
use crate::app::pdf_render;
use crate::app::platform::{
    CloseConfirm, OpenDialogOptions, Platform, SaveDialogOptions, WindowOptions,
};
use crate::app::registry::WindowId;

use super::file_dialogs::{native_open_dialog, native_save_dialog};
use super::main_window::{build_editor_window, render_html_with_base, EditorWindow};
use super::ShellEvent;

/// Hidden worker window: a HelpView showing the loaded template, replaced
/// with the injected document when the print command arrives.
struct WorkerWindow {
    window: Window,
    view: HelpView,
    /// Markdown source stashed by the print command, rasterized on the
    /// ready signal.
    contents: Option<String>,
}

pub struct PlatformFltk {
    sender: Sender<ShellEvent>,
    next_id: u64,
    windows: HashMap<WindowId, EditorWindow>,
    workers: HashMap<WindowId, WorkerWindow>,
    focused: Rc<RefCell<Option<WindowId>>>,
}

impl PlatformFltk {
    pub fn new(sender: Sender<ShellEvent>) -> Self {
        Self {
            sender,
            next_id: 0,
            windows: HashMap::new(),
            workers: HashMap::new(),
            focused: Rc::new(RefCell::new(None)),
        }
    }

    fn next_window_id(&mut self) -> WindowId {
        self.next_id += 1;
        WindowId(self.next_id)
    }

    pub fn toggle_fullscreen_focused(&mut self) {
        if let Some(id) = self.focused_window() {
            if let Some(editor) = self.windows.get_mut(&id) {
                let active = editor.window.fullscreen_active();
                editor.window.fullscreen(!active);
            }
        }
    }

    pub fn open_external(&mut self, url: &str) {
        if let Err(err) = open::that(url) {
            warn!(%err, url, "failed to open external URL");
        }
    }
}

impl Platform for PlatformFltk {
    fn work_area(&self) -> (i32, i32) {
        let (width, height) = fltk::app::screen_size();
        (width as i32, height as i32)
    }

    fn create_window(&mut self, opts: &WindowOptions) -> WindowId {
        let id = self.next_window_id();
        let editor = build_editor_window(id, opts, &self.sender);
        self.windows.insert(id, editor);
        // FLTK windows are usable as soon as they are shown; report the load
        // asynchronously so delivery order matches the protocol.
        self.sender.send(ShellEvent::Window(id, WindowEvent::FinishedLoading));
        id
    }

    fn create_worker_window(&mut self, template: &Path) -> WindowId {
        let id = self.next_window_id();
        let mut window = Window::new(0, 0, 800, 600, None);
        let mut view = HelpView::new(0, 0, 800, 600, "");
        window.end();
        // Never shown: the worker exists only to rasterize.

        match fs::read_to_string(template) {
            Ok(markup) => view.set_value(&markup),
            Err(err) => warn!(%err, template = %template.display(), "failed to load worker template"),
        }
        window.set_callback({
            let s = self.sender;
            move |_| s.send(ShellEvent::Window(id, WindowEvent::Closed))
        });

        self.workers.insert(id, WorkerWindow { window, view, contents: None });
        self.sender.send(ShellEvent::Window(id, WindowEvent::FinishedLoading));
        id
    }

    fn destroy_window(&mut self, id: WindowId) {
        if let Some(mut editor) = self.windows.remove(&id) {
            editor.destroy();
            self.sender.send(ShellEvent::Window(id, WindowEvent::Closed));
        }
    }

    fn close_window(&mut self, id: WindowId) {
        if let Some(mut worker) = self.workers.remove(&id) {
            worker.window.hide();
            self.sender.send(ShellEvent::Window(id, WindowEvent::Closed));
            return;
        }
        self.destroy_window(id);
    }

    fn focused_window(&self) -> Option<WindowId> {
        self.focused
            .borrow()
            .filter(|id| self.windows.contains_key(id))
            .or_else(|| self.windows.keys().min().copied())
    }

    fn bind_local_shortcuts(&mut self, id: WindowId) {
        let sender = self.sender;
        let focused = Rc::clone(&self.focused);
        if let Some(editor) = self.windows.get_mut(&id) {
            editor.bind_local_shortcuts(&sender, focused);
        }
    }

    fn send_to_window(&mut self, id: WindowId, command: WindowCommand) {
        if let Some(editor) = self.windows.get_mut(&id) {
            editor.handle_command(command);
        }
    }

    fn send_to_worker(&mut self, id: WindowId, command: WorkerCommand) {
        let Some(worker) = self.workers.get_mut(&id) else {
            return;
        };
        let WorkerCommand::PrintToPdf { contents, base_href, stylesheet, pdf_path } = command;
        debug!(worker = ?id, base = %base_href, "worker received print command");
        worker.view.set_value(&render_html_with_base(&contents, &base_href, &stylesheet));
        worker.contents = Some(contents);
        // Content and styles applied; ask for rasterization.
        self.sender.send(ShellEvent::Worker(id, WorkerEvent::ReadyPrintToPdf { pdf_path }));
    }

    fn show_open_dialog(&mut self, opts: &OpenDialogOptions) -> Option<Vec<PathBuf>> {
        native_open_dialog(opts)
    }

    fn show_save_dialog(&mut self, opts: &SaveDialogOptions) -> Option<PathBuf> {
        native_save_dialog(opts)
    }

    fn confirm_close(&mut self, _id: WindowId, message: &str) -> CloseConfirm {
        match fltk::dialog::choice2_default(message, "OK", "Cancel", "") {
            Some(1) => CloseConfirm::Cancel,
            _ => CloseConfirm::Ok,
        }
    }

    fn show_error(&mut self, message: &str) {
        fltk::dialog::alert_default(message);
    }

    fn show_warning(&mut self, message: &str, detail: &str) {
        fltk::dialog::message_default(&format!("{message}\n\n{detail}"));
    }

    fn print_to_pdf(&mut self, worker: WindowId, _print_background: bool) -> Result<Vec<u8>> {
        let contents = self
            .workers
            .get(&worker)
            .and_then(|w| w.contents.clone())
            .ok_or(AppError::NoPdfWorker)?;
        Ok(pdf_render::render_markdown_pdf(&contents))
    }

    fn open_path(&mut self, path: &Path) -> Result<()> {
        open::that(path).map_err(|err| AppError::Shell(err.to_string()))
    }
}
