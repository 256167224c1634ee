use crate::db::sqlite_service::SqliteService;
use crate::types::{error::AppError, timesheet::DBTimesheetWrite};
use entity::employee::Model as EmployeeModel;
use entity::timesheet::{ActiveModel as TimesheetActive, Column, Entity as Timesheet, Model as TimesheetModel};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, ModelTrait, QueryOrder, Set};

impl SqliteService {
    pub async fn list_timesheets_for(&self, employee: &EmployeeModel) -> Result<Vec<TimesheetModel>, AppError> {
        Ok(employee
            .find_related(Timesheet)
            .order_by_asc(Column::Id)
            .all(&self.database_connection)
            .await?)
    }

    /// Looks the timesheet up by id alone; ownership by the path employee is not checked.
    pub async fn get_timesheet(&self, id: i32) -> Result<TimesheetModel, AppError> {
        Ok(Timesheet::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Timesheet not found".into()))?)
    }

    pub async fn create_timesheet(
        &self,
        employee: &EmployeeModel,
        payload: DBTimesheetWrite,
    ) -> Result<TimesheetModel, AppError> {
        let res = Timesheet::insert(TimesheetActive {
            hours: Set(payload.hours),
            rate: Set(payload.rate),
            date: Set(payload.date),
            employee_id: Set(employee.id),
            ..Default::default()
        })
        .exec(&self.database_connection)
        .await?;

        self.get_timesheet(res.last_insert_id).await
    }

    pub async fn update_timesheet(
        &self,
        current: TimesheetModel,
        payload: DBTimesheetWrite,
    ) -> Result<TimesheetModel, AppError> {
        let mut am: TimesheetActive = current.into();
        am.hours = Set(payload.hours);
        am.rate = Set(payload.rate);
        am.date = Set(payload.date);
        Ok(am.update(&self.database_connection).await?)
    }

    pub async fn delete_timesheet(&self, id: i32) -> Result<(), AppError> {
        Timesheet::delete_by_id(id).exec(&self.database_connection).await?;
        Ok(())
    }
}
