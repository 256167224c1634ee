use actix_web::{delete, web};
use std::sync::Arc;

use crate::db::sqlite_service::SqliteService;
use crate::types::employee::EmployeeRes;
use crate::types::response::{ApiResponse, ApiResult};

/// Soft delete: answers 200 with the retired employee instead of 204.
#[delete("/{employee_id}")]
pub async fn delete_employee(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<SqliteService>>,
    path: web::Path<i32>,
) -> ApiResult<EmployeeRes> {
    let current = db.get_employee(path.into_inner()).await?;
    let employee = db.retire_employee(current).await?;
    Ok(ApiResponse::Ok(EmployeeRes { employee }))
}
