use actix_web::{error, web, HttpRequest};
use serde::de::DeserializeOwned;

use crate::types::error::AppError;

/// Malformed or mistyped JSON bodies answer 400 with the usual error body.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: error::JsonPayloadError, _req: &HttpRequest| {
        AppError::BadRequest(err.to_string()).into()
    })
}

/// Ids are integers. Anything else cannot name a row, so it is a 404 like any unknown id.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|_err: error::PathError, _req: &HttpRequest| {
        AppError::NotFound.into()
    })
}

/// Decodes a body that was taken as raw bytes so the path lookup could run first.
/// An empty body reads as an envelope with nothing supplied, which validation then rejects.
pub fn parse_body<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| AppError::BadRequest(e.to_string()))
}
