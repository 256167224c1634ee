use crate::db::sqlite_service::SqliteService;
use crate::types::{error::AppError, menu_item::DBMenuItemWrite};
use entity::menu::Model as MenuModel;
use entity::menu_item::{ActiveModel as MenuItemActive, Column, Entity as MenuItem, Model as MenuItemModel};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, ModelTrait, QueryOrder, Set};

impl SqliteService {
    pub async fn list_menu_items_for(&self, menu: &MenuModel) -> Result<Vec<MenuItemModel>, AppError> {
        Ok(menu
            .find_related(MenuItem)
            .order_by_asc(Column::Id)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn get_menu_item(&self, id: i32) -> Result<MenuItemModel, AppError> {
        Ok(MenuItem::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Menu item not found".into()))?)
    }

    pub async fn create_menu_item(
        &self,
        menu: &MenuModel,
        payload: DBMenuItemWrite,
    ) -> Result<MenuItemModel, AppError> {
        let res = MenuItem::insert(MenuItemActive {
            name: Set(payload.name),
            description: Set(Some(payload.description)),
            inventory: Set(payload.inventory),
            price: Set(payload.price),
            menu_id: Set(menu.id),
            ..Default::default()
        })
        .exec(&self.database_connection)
        .await?;

        self.get_menu_item(res.last_insert_id).await
    }

    pub async fn update_menu_item(
        &self,
        current: MenuItemModel,
        payload: DBMenuItemWrite,
    ) -> Result<MenuItemModel, AppError> {
        let mut am: MenuItemActive = current.into();
        am.name = Set(payload.name);
        am.description = Set(Some(payload.description));
        am.inventory = Set(payload.inventory);
        am.price = Set(payload.price);
        Ok(am.update(&self.database_connection).await?)
    }

    pub async fn delete_menu_item(&self, id: i32) -> Result<(), AppError> {
        MenuItem::delete_by_id(id).exec(&self.database_connection).await?;
        Ok(())
    }
}
