use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use super::{MenuAction, ShellEvent};

/// Build the File/View/Help menu. Every action goes through the channel so
/// the coordinator can resolve the focused window; the same actions are also
/// bound as window-local accelerators because native menu accelerators are
/// not reliable on every platform.
pub fn build_menu(menu: &mut MenuBar, sender: &Sender<ShellEvent>) {
    let send = |action: MenuAction| {
        let s = *sender;
        move |_: &mut MenuBar| s.send(ShellEvent::Menu(action))
    };

    menu.add("&File/&New", Shortcut::Ctrl | 'n', MenuFlag::Normal, send(MenuAction::NewFile));
    menu.add("&File/&Open", Shortcut::Ctrl | 'o', MenuFlag::MenuDivider, send(MenuAction::OpenFile));
    menu.add("&File/&Save", Shortcut::Ctrl | 's', MenuFlag::Normal, send(MenuAction::SaveFile));
    menu.add("&File/Save&As", Shortcut::None, MenuFlag::MenuDivider, send(MenuAction::SaveAsFile));
    menu.add(
        "&File/Export as &HTML",
        Shortcut::None,
        MenuFlag::Normal,
        send(MenuAction::ExportHtml),
    );
    menu.add(
        "&File/&Print to PDF",
        Shortcut::Ctrl | 'p',
        MenuFlag::MenuDivider,
        send(MenuAction::PrintToPdf),
    );
    menu.add("&File/&Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, send(MenuAction::Quit));

    menu.add(
        "&View/Toggle &Full Screen",
        Shortcut::None,
        MenuFlag::Normal,
        send(MenuAction::ToggleFullscreen),
    );

    menu.add("&Help/&README", Shortcut::None, MenuFlag::Normal, send(MenuAction::OpenReadme));
    menu.add(
        "&Help/Search &Issues",
        Shortcut::None,
        MenuFlag::Normal,
        send(MenuAction::OpenIssues),
    );
}
