//! SeaPig: a multi-window markdown editor shell.
//!
//! The `app` module holds the session coordinator, window registry, message
//! catalog, and PDF export pipeline, all behind the `Platform` trait so they
//! run headlessly. The `ui` module (behind the `gui` feature) implements
//! `Platform` with FLTK windows, menus, and native dialogs.

pub mod app;
#[cfg(feature = "gui")]
pub mod ui;
