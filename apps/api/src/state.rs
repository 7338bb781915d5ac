use std::sync::Arc;

use tokio::sync::Mutex;

use crate::data::DefaultData;
use crate::editor::store::ResumeEditor;
use crate::export::Exporter;
use crate::models::portfolio::PortfolioData;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup; read-only.
    pub portfolio: Arc<PortfolioData>,
    /// One lock for all resume edits, so each operation completes before the next starts.
    pub editor: Arc<Mutex<ResumeEditor>>,
    pub exporter: Arc<Exporter>,
}

impl AppState {
    pub fn new(defaults: DefaultData, exporter: Exporter) -> Self {
        Self {
            portfolio: Arc::new(defaults.portfolio),
            editor: Arc::new(Mutex::new(ResumeEditor::new(defaults.resume))),
            exporter: Arc::new(exporter),
        }
    }
}
