use actix_web::{get, web};
use std::sync::Arc;

use crate::db::sqlite_service::SqliteService;
use crate::types::menu_item::MenuItemsRes;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/{menu_id}/menu-items")]
pub async fn list_menu_items(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<SqliteService>>,
    path: web::Path<i32>,
) -> ApiResult<MenuItemsRes> {
    let menu = db.get_menu(path.into_inner()).await?;
    let menu_items = db.list_menu_items_for(&menu).await?;
    Ok(ApiResponse::Ok(MenuItemsRes { menu_items }))
}
