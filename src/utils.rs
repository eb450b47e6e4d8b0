use axum::body::Bytes;
use serde::de::DeserializeOwned;

use crate::error::RelayError;

/// Turns the client's `pageno` into an upstream page number.
///
/// Missing values default to 1 and anything below 1 is raised to 1.
pub fn normalize_page(pageno: Option<i64>) -> u32 {
    match pageno {
        Some(n) if n >= 1 => u32::try_from(n).unwrap_or(u32::MAX),
        _ => 1,
    }
}

/// Parses an optional JSON request body.
///
/// An empty (or whitespace only) body yields `T::default()`, so clients may
/// POST without a body at all.
pub fn parse_body<T>(body: &Bytes) -> Result<T, RelayError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice(body).map_err(|e| RelayError::InvalidBody(e.to_string()))
}

/// Returns the category unchanged, rejecting a missing or blank one.
pub fn require_category(category: Option<String>) -> Result<String, RelayError> {
    category
        .filter(|c| !c.trim().is_empty())
        .ok_or(RelayError::Validation("Category is required"))
}
