use actix_web::{get, web};
use std::sync::Arc;

use crate::db::sqlite_service::SqliteService;
use crate::types::employee::EmployeesRes;
use crate::types::response::{ApiResponse, ApiResult};

#[get("")]
pub async fn list_employees(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<SqliteService>>,
) -> ApiResult<EmployeesRes> {
    let employees = db.list_current_employees().await?;
    Ok(ApiResponse::Ok(EmployeesRes { employees }))
}
