use actix_web::{delete, web};
use std::sync::Arc;

use crate::db::sqlite_service::SqliteService;
use crate::types::response::{ApiResponse, NoContentResult};

/// 400 while the menu still has items, 204 once it is gone.
#[delete("/{menu_id}")]
pub async fn delete_menu(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<SqliteService>>,
    path: web::Path<i32>,
) -> NoContentResult {
    let menu = db.get_menu(path.into_inner()).await?;
    db.delete_menu_if_empty(menu).await?;
    Ok(ApiResponse::NoContent)
}
