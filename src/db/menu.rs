use crate::db::sqlite_service::SqliteService;
use crate::types::{error::AppError, menu::DBMenuWrite};
use entity::menu::{ActiveModel as MenuActive, Column, Entity as Menu, Model as MenuModel};
use entity::menu_item::Entity as MenuItem;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, ModelTrait, PaginatorTrait, QueryOrder, Set};

impl SqliteService {
    pub async fn list_menus(&self) -> Result<Vec<MenuModel>, AppError> {
        Ok(Menu::find()
            .order_by_asc(Column::Id)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn get_menu(&self, id: i32) -> Result<MenuModel, AppError> {
        Ok(Menu::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Menu not found".into()))?)
    }

    pub async fn create_menu(&self, payload: DBMenuWrite) -> Result<MenuModel, AppError> {
        let res = Menu::insert(MenuActive {
            title: Set(payload.title),
            ..Default::default()
        })
        .exec(&self.database_connection)
        .await?;

        self.get_menu(res.last_insert_id).await
    }

    pub async fn update_menu(&self, current: MenuModel, payload: DBMenuWrite) -> Result<MenuModel, AppError> {
        let mut am: MenuActive = current.into();
        am.title = Set(payload.title);
        Ok(am.update(&self.database_connection).await?)
    }

    pub async fn menu_has_items(&self, menu: &MenuModel) -> Result<bool, AppError> {
        Ok(menu
            .find_related(MenuItem)
            .count(&self.database_connection)
            .await?
            > 0)
    }

    /// Refuses while any menu item still points at the menu.
    pub async fn delete_menu_if_empty(&self, menu: MenuModel) -> Result<(), AppError> {
        if self.menu_has_items(&menu).await? {
            return Err(AppError::BadRequest(format!("menu {} has items", menu.id)));
        }
        Menu::delete_by_id(menu.id).exec(&self.database_connection).await?;
        Ok(())
    }
}
