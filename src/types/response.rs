use actix_web::{body::BoxBody, http::StatusCode, HttpRequest, HttpResponse, Responder};
use serde::Serialize;

use crate::types::error::AppError;

/// Successful handler outcome. Failures travel as `AppError`.
pub enum ApiResponse<T> {
    /// 200 with a JSON body: reads, updates and the employee soft delete.
    Ok(T),
    EmptyOk,
    /// 201 with the row as re-read after the insert.
    Created(T),
    /// 204, used by every hard delete.
    NoContent,
}

impl<T: Serialize> Responder for ApiResponse<T> {
    type Body = BoxBody;

    fn respond_to(self, _: &HttpRequest) -> HttpResponse {
        let (status, body) = match self {
            ApiResponse::Ok(v) => (StatusCode::OK, Some(v)),
            ApiResponse::EmptyOk => (StatusCode::OK, None),
            ApiResponse::Created(v) => (StatusCode::CREATED, Some(v)),
            ApiResponse::NoContent => (StatusCode::NO_CONTENT, None),
        };

        match body {
            Some(v) => HttpResponse::build(status).json(v),
            None => HttpResponse::build(status).finish(),
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

/// Handlers that answer 204 on success.
pub type NoContentResult = ApiResult<()>;
