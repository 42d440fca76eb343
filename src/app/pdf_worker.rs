//! Lifecycle of the single hidden PDF worker window. At most one worker
//! exists at a time; starting a new job closes the previous worker first.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::error::{AppError, Result};
use super::messages::WorkerCommand;
use super::paths;
use super::platform::Platform;
use super::registry::WindowId;

/// One HTML-to-PDF conversion: the rendered document, the resolution context
/// for relative links, and the chosen output path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfJob {
    pub contents: String,
    pub base_href: String,
    pub stylesheet: String,
    pub pdf_path: PathBuf,
}

impl PdfJob {
    pub fn new(current_file: &str, contents: String, pdf_path: PathBuf) -> Self {
        Self {
            contents,
            base_href: paths::base_href(current_file),
            stylesheet: paths::stylesheet_url(),
            pdf_path,
        }
    }
}

#[derive(Debug, Default)]
pub struct PdfWorkerManager {
    active: Option<(WindowId, PdfJob)>,
}

impl PdfWorkerManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_window(&self) -> Option<WindowId> {
        self.active.as_ref().map(|(id, _)| *id)
    }

    pub fn is_worker(&self, id: WindowId) -> bool {
        self.active_window() == Some(id)
    }

    /// Start a job: replace any live worker, then create the hidden window
    /// and begin loading the template. The job payload is delivered once the
    /// template reports `FinishedLoading`.
    pub fn begin<P: Platform>(&mut self, platform: &mut P, job: PdfJob) -> WindowId {
        if let Some((old, _)) = self.active.take() {
            debug!(worker = ?old, "closing previous PDF worker");
            platform.close_window(old);
        }
        let id = platform.create_worker_window(&paths::template_path());
        debug!(worker = ?id, target = %job.pdf_path.display(), "PDF worker created");
        self.active = Some((id, job));
        id
    }

    /// The template finished loading: push the single print-to-pdf command.
    pub fn on_worker_loaded<P: Platform>(&mut self, platform: &mut P, id: WindowId) {
        let Some((worker, job)) = &self.active else {
            return;
        };
        if *worker != id {
            return;
        }
        platform.send_to_worker(
            id,
            WorkerCommand::PrintToPdf {
                contents: job.contents.clone(),
                base_href: job.base_href.clone(),
                stylesheet: job.stylesheet.clone(),
                pdf_path: job.pdf_path.clone(),
            },
        );
    }

    /// The worker applied content and styles: rasterize, write the bytes,
    /// open the result, close the worker. The worker is closed on failure
    /// too, so a bad export never wedges the at-most-one slot.
    pub fn on_ready<P: Platform>(
        &mut self,
        platform: &mut P,
        id: WindowId,
        pdf_path: &Path,
    ) -> Result<()> {
        let worker = match &self.active {
            Some((worker, _)) if *worker == id => *worker,
            _ => return Err(AppError::NoPdfWorker),
        };
        let outcome = platform
            .print_to_pdf(worker, true)
            .and_then(|data| fs::write(pdf_path, data).map_err(AppError::from))
            .and_then(|()| platform.open_path(pdf_path));
        platform.close_window(worker);
        if outcome.is_ok() {
            info!(path = %pdf_path.display(), "PDF exported");
        }
        outcome
    }

    /// The framework reported the worker window closed.
    pub fn on_worker_closed(&mut self, id: WindowId) {
        if self.is_worker(id) {
            self.active = None;
        }
    }
}
