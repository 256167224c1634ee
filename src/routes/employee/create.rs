use actix_web::{post, web};
use std::sync::Arc;

use crate::db::sqlite_service::SqliteService;
use crate::types::employee::{EmployeeRes, REmployeeBody};
use crate::types::response::{ApiResponse, ApiResult};

#[post("")]
pub async fn create_employee(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<SqliteService>>,
    body: web::Json<REmployeeBody>,
) -> ApiResult<EmployeeRes> {
    let payload = body.into_inner().validate()?;
    let employee = db.create_employee(payload).await?;
    Ok(ApiResponse::Created(EmployeeRes { employee }))
}
