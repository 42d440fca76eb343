use std::path::PathBuf;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use seapig::app::args::StartupArguments;
use seapig::app::messages::WindowCommand;
use seapig::app::session::{SessionCoordinator, DEBUG_ENV};
use seapig::ui::platform_fltk::PlatformFltk;
use seapig::ui::{MenuAction, ShellEvent, ISSUES_URL, README_URL};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = StartupArguments::classify(std::env::args());
    debug!(?args, "classified startup arguments");
    let debug_windows = std::env::var_os(DEBUG_ENV).is_some();

    let app = fltk::app::App::default();
    let (sender, receiver) = fltk::app::channel::<ShellEvent>();

    let platform = PlatformFltk::new(sender);
    let mut session = SessionCoordinator::new(platform, debug_windows);
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    session.startup(&args, &cwd);

    while app.wait() {
        let Some(event) = receiver.recv() else {
            continue;
        };
        match event {
            ShellEvent::Menu(action) => handle_menu(&mut session, action),
            ShellEvent::Window(id, window_event) => session.handle_window_event(id, window_event),
            ShellEvent::Request(id, request) => session.handle_request(id, request),
            ShellEvent::Worker(id, worker_event) => session.handle_worker_event(id, worker_event),
        }
        // Exit when all windows are closed.
        if !session.has_windows() {
            break;
        }
    }
}

fn handle_menu(session: &mut SessionCoordinator<PlatformFltk>, action: MenuAction) {
    match action {
        MenuAction::NewFile => {
            session.open_new_window();
        }
        MenuAction::OpenFile => session.dispatch_to_focused(WindowCommand::OpenMenuClick),
        MenuAction::SaveFile => session.dispatch_to_focused(WindowCommand::SaveMenuClick),
        MenuAction::SaveAsFile => session.dispatch_to_focused(WindowCommand::SaveAsMenuClick),
        MenuAction::ExportHtml => session.dispatch_to_focused(WindowCommand::ExportHtmlClick),
        MenuAction::PrintToPdf => session.dispatch_to_focused(WindowCommand::PrintPdfClick),
        MenuAction::ToggleFullscreen => session.platform_mut().toggle_fullscreen_focused(),
        MenuAction::Quit => session.request_quit(),
        MenuAction::OpenReadme => session.platform_mut().open_external(README_URL),
        MenuAction::OpenIssues => session.platform_mut().open_external(ISSUES_URL),
    }
}
