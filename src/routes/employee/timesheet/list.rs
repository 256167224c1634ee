use actix_web::{get, web};
use std::sync::Arc;

use crate::db::sqlite_service::SqliteService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::timesheet::TimesheetsRes;

#[get("/{employee_id}/timesheets")]
pub async fn list_timesheets(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<SqliteService>>,
    path: web::Path<i32>,
) -> ApiResult<TimesheetsRes> {
    let employee = db.get_employee(path.into_inner()).await?;
    let timesheets = db.list_timesheets_for(&employee).await?;
    Ok(ApiResponse::Ok(TimesheetsRes { timesheets }))
}
