use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Employee")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub position: String,
    pub wage: i64,
    pub is_current_employee: i32,   // 1 = employed, 0 = soft deleted
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::timesheet::Entity")]
    Timesheet,
}

impl Related<super::timesheet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Timesheet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
