//! Content document routes
//!
//! Reads are public and pass straight through the store; writes sit
//! behind `RequireAuth`, validate the whole batch, apply the presentation
//! order, and replace the stored document with a single write.

use axum::{
    Json, Router,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::info;

use folio_content::{
    EXPERIENCES_KEY, Experience, PERSONAL_INFO_KEY, PROJECTS_KEY, PersonalInfo, Project,
    SKILLS_KEY, SkillCategory,
    order::{sort_experiences, sort_projects, sort_skills},
    validate::{
        validate_experiences, validate_personal_info, validate_projects,
        validate_skill_categories,
    },
};
use folio_store::write_record;

use crate::error::ApiError;
use crate::state::AppState;

use super::auth::RequireAuth;

/// Serve a stored document verbatim; 404 when it was never written.
async fn get_document(state: &AppState, key: &str) -> Result<Response, ApiError> {
    match state.store.get(key).await? {
        Some(raw) => Ok(([(header::CONTENT_TYPE, "application/json")], raw).into_response()),
        None => Err(ApiError::NotFound(format!("No content at '{}'", key))),
    }
}

// ==================== Personal Info ====================

async fn get_personal_info(State(state): State<AppState>) -> Result<Response, ApiError> {
    get_document(&state, PERSONAL_INFO_KEY).await
}

async fn put_personal_info(
    _auth: RequireAuth,
    State(state): State<AppState>,
    Json(info): Json<PersonalInfo>,
) -> Result<Json<PersonalInfo>, ApiError> {
    validate_personal_info(&info)?;
    write_record(state.store.as_ref(), PERSONAL_INFO_KEY, &info, None).await?;

    info!("Updated personal info");
    metrics::counter!("folio_content_writes_total", "entity" => "personal-info").increment(1);
    Ok(Json(info))
}

// ==================== Experiences ====================

async fn get_experiences(State(state): State<AppState>) -> Result<Response, ApiError> {
    get_document(&state, EXPERIENCES_KEY).await
}

async fn put_experiences(
    _auth: RequireAuth,
    State(state): State<AppState>,
    Json(mut experiences): Json<Vec<Experience>>,
) -> Result<Json<Vec<Experience>>, ApiError> {
    validate_experiences(&experiences)?;
    sort_experiences(&mut experiences);
    write_record(state.store.as_ref(), EXPERIENCES_KEY, &experiences, None).await?;

    info!("Updated {} experiences", experiences.len());
    metrics::counter!("folio_content_writes_total", "entity" => "experiences").increment(1);
    Ok(Json(experiences))
}

// ==================== Projects ====================

async fn get_projects(State(state): State<AppState>) -> Result<Response, ApiError> {
    get_document(&state, PROJECTS_KEY).await
}

async fn put_projects(
    _auth: RequireAuth,
    State(state): State<AppState>,
    Json(mut projects): Json<Vec<Project>>,
) -> Result<Json<Vec<Project>>, ApiError> {
    validate_projects(&projects)?;
    sort_projects(&mut projects);
    write_record(state.store.as_ref(), PROJECTS_KEY, &projects, None).await?;

    info!("Updated {} projects", projects.len());
    metrics::counter!("folio_content_writes_total", "entity" => "projects").increment(1);
    Ok(Json(projects))
}

// ==================== Skills ====================

async fn get_skills(State(state): State<AppState>) -> Result<Response, ApiError> {
    get_document(&state, SKILLS_KEY).await
}

async fn put_skills(
    _auth: RequireAuth,
    State(state): State<AppState>,
    Json(mut categories): Json<Vec<SkillCategory>>,
) -> Result<Json<Vec<SkillCategory>>, ApiError> {
    validate_skill_categories(&categories)?;
    sort_skills(&mut categories);
    write_record(state.store.as_ref(), SKILLS_KEY, &categories, None).await?;

    info!("Updated {} skill categories", categories.len());
    metrics::counter!("folio_content_writes_total", "entity" => "skills").increment(1);
    Ok(Json(categories))
}

/// Create content routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/content/personal-info",
            get(get_personal_info).put(put_personal_info),
        )
        .route(
            "/api/content/experiences",
            get(get_experiences).put(put_experiences),
        )
        .route("/api/content/projects", get(get_projects).put(put_projects))
        .route("/api/content/skills", get(get_skills).put(put_skills))
}
