//! PDF text extraction via pdf-extract.

use super::ExtractError;

/// Concatenates the text of every page in document order.
/// Pages without extractable text contribute an empty span.
pub fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| ExtractError::Pdf(e.to_string()))?;
    Ok(pages.concat())
}
