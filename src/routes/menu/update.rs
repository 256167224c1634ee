use actix_web::{put, web};
use std::sync::Arc;

use crate::db::sqlite_service::SqliteService;
use crate::types::menu::{MenuRes, RMenuBody};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::parse_body;

#[put("/{menu_id}")]
pub async fn update_menu(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<SqliteService>>,
    path: web::Path<i32>,
    body: web::Bytes,
) -> ApiResult<MenuRes> {
    let current = db.get_menu(path.into_inner()).await?;
    let payload = parse_body::<RMenuBody>(&body)?.validate()?;

    let menu = db.update_menu(current, payload).await?;
    Ok(ApiResponse::Ok(MenuRes { menu }))
}
