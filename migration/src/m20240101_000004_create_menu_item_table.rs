use sea_orm_migration::{prelude::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuItem::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MenuItem::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key()
                    )
                    .col(ColumnDef::new(MenuItem::Name).text().not_null())
                    .col(ColumnDef::new(MenuItem::Description).text())
                    .col(ColumnDef::new(MenuItem::Inventory).integer().not_null())
                    .col(ColumnDef::new(MenuItem::Price).integer().not_null())
                    .col(ColumnDef::new(MenuItem::MenuId).integer().not_null())
                    .to_owned()
            )
            .await?;

        // the menu delete guard probes this column
        manager
            .create_index(
                Index::create()
                    .name("idx_menu_item_menu")
                    .table(MenuItem::Table)
                    .col(MenuItem::MenuId)
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
                    .table(MenuItem::Table)
                    .if_exists()
                    .to_owned()
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum MenuItem {
    #[sea_orm(iden = "MenuItem")]
    Table,
    Id,
    Name,
    Description,
    Inventory,
    Price,
    MenuId,
}
