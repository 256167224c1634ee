use actix_web::{put, web};
use std::sync::Arc;

use crate::db::sqlite_service::SqliteService;
use crate::types::menu_item::{MenuItemRes, RMenuItemBody};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::parse_body;

#[put("/{menu_id}/menu-items/{menu_item_id}")]
pub async fn update_menu_item(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<SqliteService>>,
    path: web::Path<(i32, i32)>,
    body: web::Bytes,
) -> ApiResult<MenuItemRes> {
    let (menu_id, menu_item_id) = path.into_inner();
    db.get_menu(menu_id).await?;
    let current = db.get_menu_item(menu_item_id).await?;
    let payload = parse_body::<RMenuItemBody>(&body)?.validate()?;

    let menu_item = db.update_menu_item(current, payload).await?;
    Ok(ApiResponse::Ok(MenuItemRes { menu_item }))
}
