use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::export::ExportReport;
use crate::state::AppState;

/// POST /api/v1/resume/export
///
/// Exports whatever is currently displayed. The editor lock is released
/// before conversion starts, so edits are never blocked on the converter
/// and a failed export leaves them untouched.
pub async fn handle_export(State(state): State<AppState>) -> Result<Json<ExportReport>, AppError> {
    let resume = state.editor.lock().await.snapshot();
    let report = state.exporter.export(&resume).await?;
    Ok(Json(report))
}
