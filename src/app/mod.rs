//! Application layer: the framework-independent session logic.
//!
//! # Structure
//!
//! - `args` - startup argument classification
//! - `messages` - typed IPC catalog between coordinator and windows
//! - `registry` - ordered window list and cascade placement
//! - `session` - the session coordinator (startup, requests, close machine)
//! - `pdf_worker` / `pdf_render` - hidden-worker PDF export
//! - `platform` - the GUI-framework seam implemented by `ui` and by the
//!   scripted test backend

pub mod args;
pub mod error;
pub mod file_filters;
pub mod messages;
pub mod paths;
pub mod pdf_render;
pub mod pdf_worker;
pub mod platform;
pub mod registry;
pub mod session;
#[cfg(test)]
pub mod testing;

// Re-exports for convenient external access
pub use args::StartupArguments;
pub use error::{AppError, Result};
pub use messages::{WindowCommand, WindowEvent, WindowRequest, WorkerCommand, WorkerEvent};
pub use platform::{CloseConfirm, Platform, WindowOptions};
pub use registry::{WindowId, WindowRegistry};
pub use session::SessionCoordinator;
