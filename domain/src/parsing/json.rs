//! Direct JSON decoding of stage responses
//!
//! Even with JSON output requested, models wrap the object in code fences or
//! prose. The decoder locates the outermost brace pair before handing the
//! slice to serde; missing keys inside the object fall back to the per-field
//! defaults declared on the stage structs. Malformed JSON is an error - no
//! recovery is attempted in this mode.

use crate::core::error::DomainError;
use serde::de::DeserializeOwned;

/// Locate the outermost JSON object in free text.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Decode a stage response into its typed record.
pub fn decode_stage<T: DeserializeOwned>(response: &str) -> Result<T, DomainError> {
    let json = extract_json_object(response).ok_or_else(|| {
        DomainError::MalformedResponse("no JSON object found in response".to_string())
    })?;
    Ok(serde_json::from_str(json)?)
}
