use actix_web::{get, web};
use std::sync::Arc;

use crate::db::sqlite_service::SqliteService;
use crate::types::employee::EmployeeRes;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/{employee_id}")]
pub async fn get_employee(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<SqliteService>>,
    path: web::Path<i32>,
) -> ApiResult<EmployeeRes> {
    let employee = db.get_employee(path.into_inner()).await?;
    Ok(ApiResponse::Ok(EmployeeRes { employee }))
}
