use sea_orm_migration::{prelude::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Timesheet::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Timesheet::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key()
                    )
                    .col(ColumnDef::new(Timesheet::Hours).integer().not_null())
                    .col(ColumnDef::new(Timesheet::Rate).integer().not_null())
                    .col(ColumnDef::new(Timesheet::Date).integer().not_null())
                    .col(ColumnDef::new(Timesheet::EmployeeId).integer().not_null())
                    .to_owned()
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_timesheet_employee")
                    .table(Timesheet::Table)
                    .col(Timesheet::EmployeeId)
                    .if_not_exists()
                    .to_owned()
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Timesheet::Table)
                    .if_exists()
                    .to_owned()
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Timesheet {
    #[sea_orm(iden = "Timesheet")]
    Table,
    Id,
    Hours,
    Rate,
    Date,
    EmployeeId,
}
