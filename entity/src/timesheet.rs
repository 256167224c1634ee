use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Timesheet")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub hours: i64,
    pub rate: i64,
    pub date: i64,
    pub employee_id: i32,   // -> Employee.id, not enforced by the schema
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeId",
        to   = "super::employee::Column::Id"
    )]
    Employee,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef { Relation::Employee.def() }
}

impl ActiveModelBehavior for ActiveModel {}
