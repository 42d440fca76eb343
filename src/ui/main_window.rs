use std::cell::{Cell, RefCell};
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use fltk::{
    app::Sender,
    enums::{Event, EventState, Key},
    group::Flex,
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};
use pulldown_cmark::{html, Options, Parser};
use tracing::debug;

use crate::app::messages::{WindowCommand, WindowEvent, WindowRequest};
use crate::app::paths;
use crate::app::platform::WindowOptions;
use crate::app::registry::WindowId;

use super::menu::build_menu;
use super::{MenuAction, ShellEvent};

const MENU_HEIGHT: i32 = 30;

/// One editor window: the FLTK widgets plus the editor-side message handling
/// that a content process performs in a multi-process shell.
pub struct EditorWindow {
    pub window: Window,
    id: WindowId,
    pane: EditorPane,
}

struct EditorPane {
    id: WindowId,
    buffer: TextBuffer,
    window: Window,
    current_file: String,
    sender: Sender<ShellEvent>,
    dirty: Rc<Cell<bool>>,
}

pub fn build_editor_window(
    id: WindowId,
    opts: &WindowOptions,
    sender: &Sender<ShellEvent>,
) -> EditorWindow {
    let mut window = Window::new(opts.x, opts.y, opts.width, opts.height, None);
    window.set_label("Untitled - SeaPig");
    window.set_xclass("SeaPig");
    window.make_resizable(true);

    let mut flex = Flex::new(0, 0, opts.width, opts.height, None);
    flex.set_type(fltk::group::FlexType::Column);

    let mut menu = MenuBar::new(0, 0, 0, MENU_HEIGHT, "");
    flex.fixed(&menu, MENU_HEIGHT);
    build_menu(&mut menu, sender);

    let mut editor = TextEditor::new(0, 0, 0, 0, "");
    let buffer = TextBuffer::default();
    editor.set_buffer(buffer.clone());
    editor.wrap_mode(fltk::text::WrapMode::AtBounds, 0);

    flex.end();
    window.resizable(&flex);
    window.end();
    window.show();

    // Close request goes through the coordinator's close machine; the window
    // is only torn down when the coordinator decides so.
    window.set_callback({
        let s = *sender;
        move |_| s.send(ShellEvent::Window(id, WindowEvent::CloseRequested))
    });

    // Editor-side modification tracking. Deduplicated so the channel is not
    // flooded on every keystroke.
    let dirty = Rc::new(Cell::new(false));
    buffer.clone().add_modify_callback({
        let s = *sender;
        let dirty = Rc::clone(&dirty);
        move |_, inserted, deleted, _, _| {
            if (inserted > 0 || deleted > 0) && !dirty.replace(true) {
                s.send(ShellEvent::Request(id, WindowRequest::DocModified { modified: true }));
            }
        }
    });

    if opts.open_dev_tools {
        debug!(window = ?id, "debug flag set; no inspector in the FLTK shell");
    }

    EditorWindow {
        window: window.clone(),
        id,
        pane: EditorPane {
            id,
            buffer,
            window,
            current_file: String::new(),
            sender: *sender,
            dirty,
        },
    }
}

impl EditorWindow {
    /// Window-local accelerators mirroring the menu, plus focus tracking for
    /// menu dispatch. Released by FLTK when the window is destroyed.
    pub fn bind_local_shortcuts(
        &mut self,
        sender: &Sender<ShellEvent>,
        focused: Rc<RefCell<Option<WindowId>>>,
    ) {
        let s = *sender;
        let id = self.id;
        self.window.handle(move |_, event| match event {
            Event::Focus | Event::Push => {
                *focused.borrow_mut() = Some(id);
                false
            }
            Event::KeyDown if fltk::app::event_state().contains(EventState::Ctrl) => {
                let action = if fltk::app::event_key() == Key::from_char('n') {
                    Some(MenuAction::NewFile)
                } else if fltk::app::event_key() == Key::from_char('o') {
                    Some(MenuAction::OpenFile)
                } else if fltk::app::event_key() == Key::from_char('p') {
                    Some(MenuAction::PrintToPdf)
                } else if fltk::app::event_key() == Key::from_char('s') {
                    Some(MenuAction::SaveFile)
                } else {
                    None
                };
                match action {
                    Some(action) => {
                        s.send(ShellEvent::Menu(action));
                        true
                    }
                    None => false,
                }
            }
            _ => false,
        });
    }

    pub fn handle_command(&mut self, command: WindowCommand) {
        self.pane.handle_command(command);
    }

    pub fn destroy(&mut self) {
        self.window.hide();
    }
}

impl EditorPane {
    fn request(&self, request: WindowRequest) {
        self.sender.send(ShellEvent::Request(self.id, request));
    }

    fn report_modified(&self, modified: bool) {
        self.dirty.set(modified);
        self.request(WindowRequest::DocModified { modified });
    }

    fn handle_command(&mut self, command: WindowCommand) {
        match command {
            WindowCommand::OpenMenuClick => self.request(WindowRequest::OpenFileDialog {
                current_file: self.current_file.clone(),
                // Anything already on screen keeps its window.
                new_window: !self.current_file.is_empty() || !self.buffer.text().is_empty(),
            }),
            WindowCommand::SaveMenuClick => self.save(),
            WindowCommand::SaveAsMenuClick => self.request(WindowRequest::SaveNewFile),
            WindowCommand::ExportHtmlClick => self.request(WindowRequest::ExportHtml {
                current_file: self.current_file.clone(),
            }),
            WindowCommand::PrintPdfClick => self.request(WindowRequest::ExportPdfFile {
                current_file: self.current_file.clone(),
                contents: self.buffer.text(),
            }),
            WindowCommand::OpenFile { path } => self.load(&path),
            WindowCommand::SelectedFile { paths } => {
                if let Some(path) = paths.first().cloned() {
                    self.load(&path);
                }
            }
            WindowCommand::SelectedSaveFile { path } => self.save_as(&path),
            WindowCommand::SelectedHtmlFile { path } => self.export_html(&path),
        }
    }

    fn load(&mut self, path: &Path) {
        match fs::read_to_string(path) {
            Ok(contents) => {
                self.buffer.set_text(&contents);
                self.set_current_file(path);
                self.report_modified(false);
            }
            Err(err) => self.request(WindowRequest::ErrorMessage {
                text: format!("Failed to open {}: {err}", path.display()),
            }),
        }
    }

    fn save(&mut self) {
        if self.current_file.is_empty() {
            self.request(WindowRequest::SaveNewFile);
            return;
        }
        let path = PathBuf::from(&self.current_file);
        self.write_to(&path);
    }

    fn save_as(&mut self, path: &Path) {
        if self.write_to(path) {
            self.set_current_file(path);
        }
    }

    fn write_to(&mut self, path: &Path) -> bool {
        match fs::write(path, self.buffer.text()) {
            Ok(()) => {
                self.report_modified(false);
                true
            }
            Err(err) => {
                self.request(WindowRequest::ErrorMessage {
                    text: format!("Failed to save {}: {err}", path.display()),
                });
                false
            }
        }
    }

    fn export_html(&mut self, path: &Path) {
        let document = render_html_document(&self.buffer.text(), &self.current_file);
        if let Err(err) = fs::write(path, document) {
            self.request(WindowRequest::ErrorMessage {
                text: format!("Failed to export {}: {err}", path.display()),
            });
        }
    }

    fn set_current_file(&mut self, path: &Path) {
        self.current_file = path.display().to_string();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "Untitled".to_string());
        self.window.set_label(&format!("{name} - SeaPig"));
    }
}

/// Render a standalone HTML document for export, linking the bundled
/// stylesheet and resolving relative links against the document directory.
pub fn render_html_document(markdown: &str, current_file: &str) -> String {
    render_html_with_base(markdown, &paths::base_href(current_file), &paths::stylesheet_url())
}

pub fn render_html_with_base(markdown: &str, base_href: &str, stylesheet: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let mut body = String::new();
    html::push_html(&mut body, Parser::new_ext(markdown, options));

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <base href=\"{base_href}\">\n\
         <link rel=\"stylesheet\" href=\"{stylesheet}\">\n\
         </head>\n<body>\n{body}</body>\n</html>\n"
    )
}
