use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::editor::store::{EditResult, ResumeEditor};
use crate::errors::AppError;
use crate::models::portfolio::Project;
use crate::models::resume::{Education, Experience, PersonalInfoPatch, ResumeData};
use crate::render::render_resume;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ResumeView {
    pub edit_mode: bool,
    /// Lets the UI disable its export control while a conversion runs.
    pub exporting: bool,
    pub resume: ResumeData,
}

#[derive(Debug, Deserialize)]
pub struct ValueBody {
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct SkillsBody {
    pub skills: Vec<String>,
}

fn view(state: &AppState, edit_mode: bool, resume: Arc<ResumeData>) -> Json<ResumeView> {
    Json(ResumeView {
        edit_mode,
        exporting: state.exporter.is_exporting(),
        resume: ResumeData::clone(&resume),
    })
}

fn require_id(id: &str) -> Result<(), AppError> {
    if id.trim().is_empty() {
        return Err(AppError::Validation("id must not be empty".to_string()));
    }
    Ok(())
}

/// Runs one store operation under the editor lock.
async fn edit<F>(state: &AppState, op: F) -> Result<Json<ResumeView>, AppError>
where
    F: FnOnce(&mut ResumeEditor) -> EditResult,
{
    let mut editor = state.editor.lock().await;
    let resume = op(&mut *editor)?;
    let edit_mode = editor.is_editing();
    drop(editor);
    Ok(view(state, edit_mode, resume))
}

/// GET /api/v1/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<ResumeView> {
    let editor = state.editor.lock().await;
    let (edit_mode, resume) = (editor.is_editing(), editor.snapshot());
    drop(editor);
    view(&state, edit_mode, resume)
}

/// GET /api/v1/resume/document
pub async fn handle_get_document(State(state): State<AppState>) -> Html<String> {
    let resume = state.editor.lock().await.snapshot();
    Html(render_resume(&resume))
}

/// POST /api/v1/resume/edit
pub async fn handle_enter_edit(State(state): State<AppState>) -> Json<ResumeView> {
    let resume = state.editor.lock().await.enter_edit();
    view(&state, true, resume)
}

/// DELETE /api/v1/resume/edit
/// Discards the working copy.
pub async fn handle_exit_edit(State(state): State<AppState>) -> Json<ResumeView> {
    let resume = state.editor.lock().await.exit_edit();
    view(&state, false, resume)
}

/// PATCH /api/v1/resume/personal-info
pub async fn handle_patch_personal_info(
    State(state): State<AppState>,
    Json(patch): Json<PersonalInfoPatch>,
) -> Result<Json<ResumeView>, AppError> {
    edit(&state, |editor| editor.update_personal_info(patch)).await
}

/// PUT /api/v1/resume/skills
pub async fn handle_set_skills(
    State(state): State<AppState>,
    Json(body): Json<SkillsBody>,
) -> Result<Json<ResumeView>, AppError> {
    edit(&state, |editor| editor.set_skills(body.skills)).await
}

/// POST /api/v1/resume/skills
pub async fn handle_add_skill(
    State(state): State<AppState>,
    Json(body): Json<ValueBody>,
) -> Result<Json<ResumeView>, AppError> {
    edit(&state, |editor| editor.add_skill(&body.value)).await
}

/// DELETE /api/v1/resume/skills/:name
pub async fn handle_remove_skill(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ResumeView>, AppError> {
    edit(&state, |editor| editor.remove_skill(&name)).await
}

// ── Experience ─────────────────────────────────────────────────────────────

/// POST /api/v1/resume/experience
pub async fn handle_add_experience(
    State(state): State<AppState>,
) -> Result<Json<ResumeView>, AppError> {
    edit(&state, |editor| editor.add_experience()).await
}

/// PUT /api/v1/resume/experience/:index
pub async fn handle_update_experience(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(record): Json<Experience>,
) -> Result<Json<ResumeView>, AppError> {
    require_id(&record.id)?;
    edit(&state, |editor| editor.update_experience(index, record)).await
}

/// DELETE /api/v1/resume/experience/:index
pub async fn handle_remove_experience(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<ResumeView>, AppError> {
    edit(&state, |editor| editor.remove_experience(index)).await
}

/// POST /api/v1/resume/experience/:index/achievements
pub async fn handle_add_achievement(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(body): Json<ValueBody>,
) -> Result<Json<ResumeView>, AppError> {
    edit(&state, |editor| editor.add_achievement(index, &body.value)).await
}

/// DELETE /api/v1/resume/experience/:index/achievements/:item
pub async fn handle_remove_achievement(
    State(state): State<AppState>,
    Path((index, item)): Path<(usize, usize)>,
) -> Result<Json<ResumeView>, AppError> {
    edit(&state, |editor| editor.remove_achievement(index, item)).await
}

// ── Education ──────────────────────────────────────────────────────────────

/// POST /api/v1/resume/education
pub async fn handle_add_education(
    State(state): State<AppState>,
) -> Result<Json<ResumeView>, AppError> {
    edit(&state, |editor| editor.add_education()).await
}

/// PUT /api/v1/resume/education/:index
pub async fn handle_update_education(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(record): Json<Education>,
) -> Result<Json<ResumeView>, AppError> {
    require_id(&record.id)?;
    edit(&state, |editor| editor.update_education(index, record)).await
}

/// DELETE /api/v1/resume/education/:index
pub async fn handle_remove_education(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<ResumeView>, AppError> {
    edit(&state, |editor| editor.remove_education(index)).await
}

// ── Projects ───────────────────────────────────────────────────────────────

/// POST /api/v1/resume/projects
pub async fn handle_add_project(
    State(state): State<AppState>,
) -> Result<Json<ResumeView>, AppError> {
    edit(&state, |editor| editor.add_project()).await
}

/// PUT /api/v1/resume/projects/:index
pub async fn handle_update_project(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(record): Json<Project>,
) -> Result<Json<ResumeView>, AppError> {
    require_id(&record.id)?;
    edit(&state, |editor| editor.update_project(index, record)).await
}

/// DELETE /api/v1/resume/projects/:index
pub async fn handle_remove_project(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<ResumeView>, AppError> {
    edit(&state, |editor| editor.remove_project(index)).await
}

/// POST /api/v1/resume/projects/:index/technologies
pub async fn handle_add_technology(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(body): Json<ValueBody>,
) -> Result<Json<ResumeView>, AppError> {
    edit(&state, |editor| editor.add_technology(index, &body.value)).await
}

/// DELETE /api/v1/resume/projects/:index/technologies/:tech
pub async fn handle_remove_technology(
    State(state): State<AppState>,
    Path((index, tech)): Path<(usize, String)>,
) -> Result<Json<ResumeView>, AppError> {
    edit(&state, |editor| editor.remove_technology(index, &tech)).await
}
