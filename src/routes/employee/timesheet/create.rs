use actix_web::{post, web};
use std::sync::Arc;

use crate::db::sqlite_service::SqliteService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::timesheet::{RTimesheetBody, TimesheetRes};
use crate::utils::webutils::parse_body;

#[post("/{employee_id}/timesheets")]
pub async fn create_timesheet(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<SqliteService>>,
    path: web::Path<i32>,
    body: web::Bytes,
) -> ApiResult<TimesheetRes> {
    // Former employees can still receive timesheets.
    let employee = db.get_employee(path.into_inner()).await?;
    let payload = parse_body::<RTimesheetBody>(&body)?.validate()?;

    let timesheet = db.create_timesheet(&employee, payload).await?;
    Ok(ApiResponse::Created(TimesheetRes { timesheet }))
}
