use actix_web::{delete, web};
use std::sync::Arc;

use crate::db::sqlite_service::SqliteService;
use crate::types::response::{ApiResponse, NoContentResult};

#[delete("/{menu_id}/menu-items/{menu_item_id}")]
pub async fn delete_menu_item(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<SqliteService>>,
    path: web::Path<(i32, i32)>,
) -> NoContentResult {
    let (menu_id, menu_item_id) = path.into_inner();
    db.get_menu(menu_id).await?;
    let menu_item = db.get_menu_item(menu_item_id).await?;

    db.delete_menu_item(menu_item.id).await?;
    Ok(ApiResponse::NoContent)
}
