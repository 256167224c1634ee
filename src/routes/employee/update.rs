use actix_web::{put, web};
use std::sync::Arc;

use crate::db::sqlite_service::SqliteService;
use crate::types::employee::{EmployeeRes, REmployeeBody};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::parse_body;

#[put("/{employee_id}")]
pub async fn update_employee(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<SqliteService>>,
    path: web::Path<i32>,
    body: web::Bytes,
) -> ApiResult<EmployeeRes> {
    // body is only decoded once the employee is known: 404 wins over any payload
    let current = db.get_employee(path.into_inner()).await?;
    let payload = parse_body::<REmployeeBody>(&body)?.validate()?;

    let employee = db.update_employee(current, payload).await?;
    Ok(ApiResponse::Ok(EmployeeRes { employee }))
}
