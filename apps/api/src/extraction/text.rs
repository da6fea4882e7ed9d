use super::ExtractError;

/// Decodes the upload as UTF-8 verbatim; invalid sequences are an error.
pub fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    Ok(String::from_utf8(bytes.to_vec())?)
}
