//! The typed message catalog exchanged between the session coordinator and
//! the per-window content processes. Each enum covers one direction; the
//! serde `kind` tags are the channel wire names.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::error::Result;

/// Encode a message for a per-window channel.
pub fn encode<T: Serialize>(message: &T) -> Result<String> {
    Ok(serde_json::to_string(message)?)
}

/// Decode a message received from a per-window channel.
pub fn decode<T: for<'de> Deserialize<'de>>(wire: &str) -> Result<T> {
    Ok(serde_json::from_str(wire)?)
}

/// Commands the coordinator pushes into an editor window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum WindowCommand {
    OpenMenuClick,
    SaveMenuClick,
    #[serde(rename = "saveas-menu-click")]
    SaveAsMenuClick,
    ExportHtmlClick,
    PrintPdfClick,
    /// Load this file into the window. Only valid after the window has
    /// reported `FinishedLoading`.
    OpenFile { path: PathBuf },
    /// Reply to a non-new-window open dialog.
    SelectedFile { paths: Vec<PathBuf> },
    /// Reply to a save dialog for an untitled document.
    SelectedSaveFile { path: PathBuf },
    /// Reply to an HTML export dialog.
    #[serde(rename = "selected-HTML-file")]
    SelectedHtmlFile { path: PathBuf },
}

/// Requests an editor window sends to the coordinator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum WindowRequest {
    NewFile,
    OpenFileDialog {
        current_file: String,
        new_window: bool,
    },
    SaveNewFile,
    #[serde(rename = "export-HTML")]
    ExportHtml { current_file: String },
    ExportPdfFile {
        current_file: String,
        contents: String,
    },
    ErrorMessage { text: String },
    DocModified { modified: bool },
}

/// The single command sent to the hidden PDF worker once its template loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum WorkerCommand {
    PrintToPdf {
        contents: String,
        base_href: String,
        stylesheet: String,
        pdf_path: PathBuf,
    },
}

/// Signals from the PDF worker's content process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum WorkerEvent {
    /// Content and styles are applied; rasterize now.
    ReadyPrintToPdf { pdf_path: PathBuf },
}

/// Window lifecycle notifications from the framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    FinishedLoading,
    CloseRequested,
    Closed,
}
