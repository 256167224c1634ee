use actix_web::{get, web};
use std::sync::Arc;

use crate::db::sqlite_service::SqliteService;
use crate::types::menu::MenuRes;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/{menu_id}")]
pub async fn get_menu(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<SqliteService>>,
    path: web::Path<i32>,
) -> ApiResult<MenuRes> {
    let menu = db.get_menu(path.into_inner()).await?;
    Ok(ApiResponse::Ok(MenuRes { menu }))
}
