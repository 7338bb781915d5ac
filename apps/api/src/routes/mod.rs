pub mod health;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::editor::handlers as resume;
use crate::export::handlers as export;
use crate::portfolio::handlers as portfolio;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/portfolio", get(portfolio::handle_get_portfolio))
        .route("/api/v1/resume", get(resume::handle_get_resume))
        .route("/api/v1/resume/document", get(resume::handle_get_document))
        .route(
            "/api/v1/resume/edit",
            post(resume::handle_enter_edit).delete(resume::handle_exit_edit),
        )
        .route(
            "/api/v1/resume/personal-info",
            patch(resume::handle_patch_personal_info),
        )
        .route(
            "/api/v1/resume/skills",
            put(resume::handle_set_skills).post(resume::handle_add_skill),
        )
        .route(
            "/api/v1/resume/skills/:name",
            delete(resume::handle_remove_skill),
        )
        // Experience
        .route(
            "/api/v1/resume/experience",
            post(resume::handle_add_experience),
        )
        .route(
            "/api/v1/resume/experience/:index",
            put(resume::handle_update_experience).delete(resume::handle_remove_experience),
        )
        .route(
            "/api/v1/resume/experience/:index/achievements",
            post(resume::handle_add_achievement),
        )
        .route(
            "/api/v1/resume/experience/:index/achievements/:item",
            delete(resume::handle_remove_achievement),
        )
        // Education
        .route(
            "/api/v1/resume/education",
            post(resume::handle_add_education),
        )
        .route(
            "/api/v1/resume/education/:index",
            put(resume::handle_update_education).delete(resume::handle_remove_education),
        )
        // Projects
        .route("/api/v1/resume/projects", post(resume::handle_add_project))
        .route(
            "/api/v1/resume/projects/:index",
            put(resume::handle_update_project).delete(resume::handle_remove_project),
        )
        .route(
            "/api/v1/resume/projects/:index/technologies",
            post(resume::handle_add_technology),
        )
        .route(
            "/api/v1/resume/projects/:index/technologies/:tech",
            delete(resume::handle_remove_technology),
        )
        // Export
        .route("/api/v1/resume/export", post(export::handle_export))
        .with_state(state)
}
