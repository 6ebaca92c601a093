use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::resume::{ResumePatch, ResumeRecord};
use crate::resume::validation::{validate_record, ValidationReport};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub success: bool,
    pub message: String,
}

/// GET /api/curriculo
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<ResumeRecord> {
    Json(state.resume.get().await)
}

/// POST /api/curriculo
pub async fn handle_update_resume(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<UpdateResponse>, AppError> {
    let patch = parse_patch(payload)?;
    if patch.is_empty() {
        debug!("Empty resume update; record unchanged");
    }
    let fields = patch.field_names();

    state.resume.merge(patch).await;
    info!(?fields, "Resume updated");

    Ok(Json(UpdateResponse {
        success: true,
        message: "Resume updated!".to_string(),
    }))
}

/// POST /api/curriculo/validate
///
/// Checks the current record with the patch applied. Nothing is stored.
pub async fn handle_validate_resume(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ValidationReport>, AppError> {
    let patch = parse_patch(payload)?;
    let candidate = state.resume.get().await.merged(patch);
    Ok(Json(validate_record(&candidate)))
}

fn parse_patch(payload: Result<Json<Value>, JsonRejection>) -> Result<ResumePatch, AppError> {
    let Json(body) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    serde_json::from_value(body)
        .map_err(|e| AppError::Validation(format!("Invalid resume data: {e}")))
}
