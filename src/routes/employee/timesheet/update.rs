use actix_web::{put, web};
use std::sync::Arc;

use crate::db::sqlite_service::SqliteService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::timesheet::{RTimesheetBody, TimesheetRes};
use crate::utils::webutils::parse_body;

#[put("/{employee_id}/timesheets/{timesheet_id}")]
pub async fn update_timesheet(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<SqliteService>>,
    path: web::Path<(i32, i32)>,
    body: web::Bytes,
) -> ApiResult<TimesheetRes> {
    let (employee_id, timesheet_id) = path.into_inner();
    db.get_employee(employee_id).await?;
    let current = db.get_timesheet(timesheet_id).await?;
    let payload = parse_body::<RTimesheetBody>(&body)?.validate()?;

    let timesheet = db.update_timesheet(current, payload).await?;
    Ok(ApiResponse::Ok(TimesheetRes { timesheet }))
}
