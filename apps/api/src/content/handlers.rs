use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::content::models::{ContactSubmission, Record};
use crate::content::{list_experiences, list_projects, list_resources, submit_contact};
use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/projects
pub async fn handle_list_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<Record>>, AppError> {
    let rows = list_projects(state.content.as_ref())
        .await
        .map_err(AppError::Query)?;
    Ok(Json(rows))
}

/// GET /api/experiences
pub async fn handle_list_experiences(
    State(state): State<AppState>,
) -> Result<Json<Vec<Record>>, AppError> {
    let rows = list_experiences(state.content.as_ref())
        .await
        .map_err(AppError::Query)?;
    Ok(Json(rows))
}

/// GET /api/resources
pub async fn handle_list_resources(
    State(state): State<AppState>,
) -> Result<Json<Vec<Record>>, AppError> {
    let rows = list_resources(state.content.as_ref())
        .await
        .map_err(AppError::Query)?;
    Ok(Json(rows))
}

/// POST /api/contact
pub async fn handle_submit_contact(
    State(state): State<AppState>,
    Json(submission): Json<ContactSubmission>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    submission.check().map_err(AppError::Validation)?;
    submit_contact(state.content.as_ref(), &submission)
        .await
        .map_err(AppError::Write)?;
    Ok((StatusCode::CREATED, Json(json!({ "status": "sent" }))))
}
