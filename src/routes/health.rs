use actix_web::{get, web};
use std::sync::Arc;

use crate::db::sqlite_service::SqliteService;
use crate::types::response::{ApiResponse, ApiResult};

/// 200 once the database answers, 500 otherwise.
#[get("")]
pub async fn health(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<SqliteService>>,
) -> ApiResult<()> {
    db.ping().await?;
    Ok(ApiResponse::EmptyOk)
}
