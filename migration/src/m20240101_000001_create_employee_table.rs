use sea_orm_migration::{prelude::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // if_not_exists: database files created before the migrator existed already carry the table
        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employee::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(Employee::Name)
                            .text()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Employee::Position)
                            .text()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Employee::Wage)
                            .integer()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Employee::IsCurrentEmployee)
                            .integer()
                            .not_null()
                            .default(1)
                    )
                    .to_owned()
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Employee::Table)
                    .if_exists()
                    .to_owned()
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Employee {
    #[sea_orm(iden = "Employee")]
    Table,
    Id,
    Name,
    Position,
    Wage,
    IsCurrentEmployee,
}
