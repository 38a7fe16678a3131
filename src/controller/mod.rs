//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input,
//! dispatches section fetches and feeds their results back into the model.
//! It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `fetch`: Fetch dispatch onto tokio tasks and response draining

mod input;
mod fetch;

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::model::{CatalogSource, FetchResponse, PageModel, SectionError};

pub struct AppController {
    pub(crate) model: PageModel,
    pub(crate) source: Arc<dyn CatalogSource>,
    responses_tx: mpsc::UnboundedSender<FetchResponse>,
    responses_rx: mpsc::UnboundedReceiver<FetchResponse>,
    cell_width: u32,
}

impl AppController {
    pub fn new(model: PageModel, source: Arc<dyn CatalogSource>, cell_width: u32) -> Self {
        let (responses_tx, responses_rx) = mpsc::unbounded_channel();
        Self {
            model,
            source,
            responses_tx,
            responses_rx,
            cell_width,
        }
    }

    pub fn model(&self) -> &PageModel {
        &self.model
    }

    /// Drop a notice once it has been on screen long enough.
    pub fn clear_expired_notice(&mut self) {
        self.model.auto_clear_old_notices();
    }

    /// Translate a terminal width in columns to carousel viewport units.
    pub fn on_resize(&mut self, columns: u16) {
        let viewport_width = u32::from(columns).saturating_mul(self.cell_width);
        tracing::trace!(columns, viewport_width, "Viewport resized");
        self.model.set_viewport_width(viewport_width);
    }

    pub(crate) fn format_error(error: &SectionError) -> String {
        match error {
            SectionError::CategoriesUnsupported => {
                "Genres are only available in song sections.".to_string()
            }
            SectionError::UnknownCategory(key) => format!("Unknown genre: {}", key),
        }
    }
}
