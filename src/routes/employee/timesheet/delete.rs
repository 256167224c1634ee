use actix_web::{delete, web};
use std::sync::Arc;

use crate::db::sqlite_service::SqliteService;
use crate::types::response::{ApiResponse, NoContentResult};

#[delete("/{employee_id}/timesheets/{timesheet_id}")]
pub async fn delete_timesheet(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<SqliteService>>,
    path: web::Path<(i32, i32)>,
) -> NoContentResult {
    let (employee_id, timesheet_id) = path.into_inner();
    db.get_employee(employee_id).await?;
    let timesheet = db.get_timesheet(timesheet_id).await?;

    db.delete_timesheet(timesheet.id).await?;
    Ok(ApiResponse::NoContent)
}
