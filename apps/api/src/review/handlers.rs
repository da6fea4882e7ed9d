//! Axum route handlers for the review API.

use axum::{
    extract::{rejection::JsonRejection, Multipart, State},
    Json,
};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::extract_document;
use crate::llm_client::strip_json_fences;
use crate::review::models::{AugmentRequest, ReviewForm};
use crate::review::prompts::{build_augment_prompt, build_comparison_prompt, build_grade_prompt};
use crate::state::AppState;

/// POST /augment
///
/// Rewrites one resume bullet into three improved options.
/// Model output: `{"options": [string, string, string]}`.
pub async fn handle_augment(
    State(state): State<AppState>,
    payload: Result<Json<AugmentRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload?;
    if request.bullet_point.trim().is_empty() {
        return Err(AppError::Validation(
            "bullet_point cannot be empty".to_string(),
        ));
    }

    info!("Augmenting bullet ({} chars)", request.bullet_point.len());
    let prompt = build_augment_prompt(&request.bullet_point);
    complete_as_json(&state, &prompt).await.map(Json)
}

/// POST /grader
///
/// Grades an uploaded resume (`.pdf`, `.docx`, `.txt`) against the ATS rubric.
pub async fn handle_grade(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    let mut form = ReviewForm::from_multipart(multipart).await?;
    let document = form.require_document()?;
    let format = document.format()?;

    info!("Grading '{}' as {}", document.filename, format.as_str());
    let resume_text = extract_document(format, document).await?;

    let prompt = build_grade_prompt(&resume_text);
    complete_as_json(&state, &prompt).await.map(Json)
}

/// POST /comparison
///
/// Compares an uploaded resume with the `job_application_text` form field.
pub async fn handle_comparison(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    let mut form = ReviewForm::from_multipart(multipart).await?;
    let document = form.require_document()?;
    let format = document.format()?;
    let job_text = form.require_job_text()?;

    info!(
        "Comparing '{}' ({}) against job text ({} chars)",
        document.filename,
        format.as_str(),
        job_text.len()
    );
    let resume_text = extract_document(format, document).await?;

    let prompt = build_comparison_prompt(&resume_text, &job_text);
    complete_as_json(&state, &prompt).await.map(Json)
}

/// Sends `prompt` to the gateway, then decodes the returned text.
async fn complete_as_json(state: &AppState, prompt: &str) -> Result<Value, AppError> {
    let raw = state.llm.generate(prompt, &state.config.gemini_model).await?;
    decode_model_json(&raw)
}

/// Decodes model output as a JSON object. Anything else is a `ResponseFormat` error.
pub fn decode_model_json(raw: &str) -> Result<Value, AppError> {
    let value: Value = serde_json::from_str(strip_json_fences(raw))
        .map_err(|e| AppError::ResponseFormat(e.to_string()))?;

    if !value.is_object() {
        return Err(AppError::ResponseFormat(
            "expected a JSON object at the top level".to_string(),
        ));
    }
    Ok(value)
}
