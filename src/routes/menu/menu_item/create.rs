use actix_web::{post, web};
use std::sync::Arc;

use crate::db::sqlite_service::SqliteService;
use crate::types::menu_item::{MenuItemRes, RMenuItemBody};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::parse_body;

#[post("/{menu_id}/menu-items")]
pub async fn create_menu_item(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<SqliteService>>,
    path: web::Path<i32>,
    body: web::Bytes,
) -> ApiResult<MenuItemRes> {
    let menu = db.get_menu(path.into_inner()).await?;
    let payload = parse_body::<RMenuItemBody>(&body)?.validate()?;

    let menu_item = db.create_menu_item(&menu, payload).await?;
    Ok(ApiResponse::Created(MenuItemRes { menu_item }))
}
