use actix_web::{get, web};
use std::sync::Arc;

use crate::db::sqlite_service::SqliteService;
use crate::types::menu::MenusRes;
use crate::types::response::{ApiResponse, ApiResult};

#[get("")]
pub async fn list_menus(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<SqliteService>>,
) -> ApiResult<MenusRes> {
    let menus = db.list_menus().await?;
    Ok(ApiResponse::Ok(MenusRes { menus }))
}
