use axum::extract::Multipart;
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::extraction::UploadedDocument;

pub const FILE_FIELD: &str = "file";
pub const JOB_TEXT_FIELD: &str = "job_application_text";

#[derive(Debug, Deserialize)]
pub struct AugmentRequest {
    pub bullet_point: String,
}

/// Fields collected from a review multipart body.
#[derive(Debug, Default)]
pub struct ReviewForm {
    pub document: Option<UploadedDocument>,
    pub job_application_text: Option<String>,
}

impl ReviewForm {
    /// Drains the multipart stream, keeping the fields the review endpoints use.
    /// Unknown fields are skipped.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = ReviewForm::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                FILE_FIELD => {
                    let filename = field.file_name().unwrap_or_default().to_string();
                    let bytes = field.bytes().await?;
                    debug!("Received upload '{}' ({} bytes)", filename, bytes.len());
                    form.document = Some(UploadedDocument { filename, bytes });
                }
                JOB_TEXT_FIELD => {
                    form.job_application_text = Some(field.text().await?);
                }
                other => debug!("Ignoring multipart field '{other}'"),
            }
        }

        Ok(form)
    }

    pub fn require_document(&mut self) -> Result<UploadedDocument, AppError> {
        self.document
            .take()
            .ok_or_else(|| AppError::Validation(format!("Missing required file field '{FILE_FIELD}'")))
    }

    pub fn require_job_text(&mut self) -> Result<String, AppError> {
        match self.job_application_text.take() {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(AppError::Validation(format!(
                "{JOB_TEXT_FIELD} cannot be empty"
            ))),
        }
    }
}
