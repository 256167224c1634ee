use actix_web::{post, web};
use std::sync::Arc;

use crate::db::sqlite_service::SqliteService;
use crate::types::menu::{MenuRes, RMenuBody};
use crate::types::response::{ApiResponse, ApiResult};

#[post("")]
pub async fn create_menu(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<SqliteService>>,
    body: web::Json<RMenuBody>,
) -> ApiResult<MenuRes> {
    let payload = body.into_inner().validate()?;
    let menu = db.create_menu(payload).await?;
    Ok(ApiResponse::Created(MenuRes { menu }))
}
