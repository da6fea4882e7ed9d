//! Text extraction for uploaded resume documents.
//!
//! The declared file extension selects a `DocumentFormat`; each format has one
//! extractor function. Output is plain text only, layout is discarded.

pub mod docx;
pub mod pdf;
pub mod text;

use std::path::Path;

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

use crate::errors::AppError;

/// Document formats accepted by the upload endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentFormat {
    /// Maps a filename's extension (case-insensitive) to a supported format.
    pub fn from_filename(filename: &str) -> Result<Self, AppError> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("pdf") => Ok(DocumentFormat::Pdf),
            Some("docx") => Ok(DocumentFormat::Docx),
            Some("txt") => Ok(DocumentFormat::PlainText),
            _ => Err(AppError::UnsupportedFormat(
                "Unsupported file type. Only PDF, DOCX, and TXT are supported.".to_string(),
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
            DocumentFormat::PlainText => "txt",
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Error processing PDF: {0}")]
    Pdf(String),

    #[error("Error processing DOCX: {0}")]
    Docx(String),

    #[error("Error processing text file: {0}")]
    Text(#[from] std::string::FromUtf8Error),

    #[error("Error processing {format} document: parser aborted")]
    Aborted { format: &'static str },
}

/// A file received from a multipart upload. Consumed once by extraction.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub filename: String,
    pub bytes: Bytes,
}

impl UploadedDocument {
    pub fn format(&self) -> Result<DocumentFormat, AppError> {
        DocumentFormat::from_filename(&self.filename)
    }
}

/// Dispatches to the extractor for `format`.
pub fn extract_text(format: DocumentFormat, bytes: &[u8]) -> Result<String, ExtractError> {
    match format {
        DocumentFormat::Pdf => pdf::extract(bytes),
        DocumentFormat::Docx => docx::extract(bytes),
        DocumentFormat::PlainText => text::extract(bytes),
    }
}

/// Extracts text from an already-validated upload on the blocking pool.
///
/// Parser panics surface as `ExtractError::Aborted` instead of tearing down
/// the worker.
pub async fn extract_document(
    format: DocumentFormat,
    document: UploadedDocument,
) -> Result<String, AppError> {
    let filename = document.filename.clone();
    let bytes = document.bytes;

    let text = run_blocking(format, move || extract_text(format, &bytes)).await?;

    debug!(
        "Extracted {} chars from '{}' ({})",
        text.len(),
        filename,
        format.as_str()
    );
    Ok(text)
}

/// Runs `extract` on the blocking pool, mapping a panic to `ExtractError::Aborted`.
async fn run_blocking<F>(format: DocumentFormat, extract: F) -> Result<String, AppError>
where
    F: FnOnce() -> Result<String, ExtractError> + Send + 'static,
{
    let text = tokio::task::spawn_blocking(extract)
        .await
        .map_err(|e| {
            if e.is_panic() {
                AppError::from(ExtractError::Aborted {
                    format: format.as_str(),
                })
            } else {
                AppError::Internal(anyhow::anyhow!("Extraction task failed: {e}"))
            }
        })??;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_known_extensions() {
        assert_eq!(
            DocumentFormat::from_filename("resume.pdf").unwrap(),
            DocumentFormat::Pdf
        );
        assert_eq!(
            DocumentFormat::from_filename("resume.docx").unwrap(),
            DocumentFormat::Docx
        );
        assert_eq!(
            DocumentFormat::from_filename("notes.txt").unwrap(),
            DocumentFormat::PlainText
        );
    }

    #[test]
    fn test_format_extension_is_case_insensitive() {
        assert_eq!(
            DocumentFormat::from_filename("RESUME.PDF").unwrap(),
            DocumentFormat::Pdf
        );
    }

    #[test]
    fn test_unsupported_extensions_rejected() {
        for name in ["resume.csv", "resume.doc", "resume", "resume.pdf.exe", ""] {
            let err = DocumentFormat::from_filename(name).unwrap_err();
            assert!(
                matches!(err, AppError::UnsupportedFormat(_)),
                "{name} should be unsupported"
            );
        }
    }

    #[tokio::test]
    async fn test_extract_document_plain_text() {
        let doc = UploadedDocument {
            filename: "resume.txt".to_string(),
            bytes: Bytes::from_static("Jane Doe\nRust engineer".as_bytes()),
        };
        let format = doc.format().unwrap();
        let text = extract_document(format, doc).await.unwrap();
        assert_eq!(text, "Jane Doe\nRust engineer");
    }

    #[tokio::test]
    async fn test_extract_document_invalid_pdf_is_parse_error() {
        let doc = UploadedDocument {
            filename: "resume.pdf".to_string(),
            bytes: Bytes::from_static(b"definitely not a pdf"),
        };
        let err = extract_document(DocumentFormat::Pdf, doc).await.unwrap_err();
        assert!(matches!(err, AppError::DocumentParse(_)));
    }

    #[tokio::test]
    async fn test_parser_panic_becomes_document_parse_error() {
        let err = run_blocking(DocumentFormat::Docx, || -> Result<String, ExtractError> {
            panic!("index out of bounds in parser")
        })
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::DocumentParse(_)));
        assert!(err.to_string().contains("parser aborted"));
        assert!(err.to_string().contains("docx"));
    }

    #[tokio::test]
    async fn test_run_blocking_passes_extractor_errors_through() {
        let err = run_blocking(DocumentFormat::Pdf, || Err(ExtractError::Pdf("bad xref".into())))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::DocumentParse(_)));
        assert!(err.to_string().contains("bad xref"));
    }
}
