use crate::db::sqlite_service::SqliteService;
use crate::types::{employee::DBEmployeeWrite, error::AppError};
use entity::employee::{ActiveModel as EmployeeActive, Column, Entity as Employee, Model as EmployeeModel};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set};

const CURRENT: i32 = 1;
const FORMER: i32 = 0;

impl SqliteService {
    /// Current employees only, soft deleted rows are left out.
    pub async fn list_current_employees(&self) -> Result<Vec<EmployeeModel>, AppError> {
        Ok(Employee::find()
            .filter(Column::IsCurrentEmployee.eq(CURRENT))
            .order_by_asc(Column::Id)
            .all(&self.database_connection)
            .await?)
    }

    /// Finds an employee whether or not they are still employed.
    pub async fn get_employee(&self, id: i32) -> Result<EmployeeModel, AppError> {
        Ok(Employee::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Employee not found".into()))?)
    }

    pub async fn create_employee(&self, payload: DBEmployeeWrite) -> Result<EmployeeModel, AppError> {
        let res = Employee::insert(EmployeeActive {
            name: Set(payload.name),
            position: Set(payload.position),
            wage: Set(payload.wage),
            is_current_employee: Set(CURRENT),
            ..Default::default()
        })
        .exec(&self.database_connection)
        .await?;

        self.get_employee(res.last_insert_id).await
    }

    pub async fn update_employee(
        &self,
        current: EmployeeModel,
        payload: DBEmployeeWrite,
    ) -> Result<EmployeeModel, AppError> {
        let mut am: EmployeeActive = current.into();
        am.name = Set(payload.name);
        am.position = Set(payload.position);
        am.wage = Set(payload.wage);
        Ok(am.update(&self.database_connection).await?)
    }

    /// Soft delete. The row and its timesheets stay in place.
    pub async fn retire_employee(&self, current: EmployeeModel) -> Result<EmployeeModel, AppError> {
        let mut am: EmployeeActive = current.into();
        am.is_current_employee = Set(FORMER);
        Ok(am.update(&self.database_connection).await?)
    }
}
