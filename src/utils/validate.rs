//! Required-field checks for request payloads.
//!
//! A field counts as present when it is not null, and for strings not empty, for
//! integers not zero. Clients built against this API rely on `0` being rejected
//! the same way an empty string is.

use crate::types::error::AppError;

pub fn required_text(field: &str, value: Option<String>) -> Result<String, AppError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(missing(field)),
    }
}

pub fn required_number(field: &str, value: Option<i64>) -> Result<i64, AppError> {
    match value {
        Some(v) if v != 0 => Ok(v),
        _ => Err(missing(field)),
    }
}

/// Optional text columns are stored as `""` rather than NULL.
pub fn text_or_empty(value: Option<String>) -> String {
    value.unwrap_or_default()
}

pub fn required_object<T>(key: &str, value: Option<T>) -> Result<T, AppError> {
    value.ok_or_else(|| missing(key))
}

fn missing(field: &str) -> AppError {
    AppError::Validation(format!("`{}` is required", field))
}
