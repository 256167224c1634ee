pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_employee_table;
mod m20240101_000002_create_timesheet_table;
mod m20240101_000003_create_menu_table;
mod m20240101_000004_create_menu_item_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_employee_table::Migration),
            Box::new(m20240101_000002_create_timesheet_table::Migration),
            Box::new(m20240101_000003_create_menu_table::Migration),
            Box::new(m20240101_000004_create_menu_item_table::Migration),
        ]
    }
}
