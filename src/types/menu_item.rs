use serde::{Deserialize, Serialize};

use crate::types::error::AppError;
use crate::utils::validate::{required_number, required_object, required_text, text_or_empty};

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RMenuItemBody {
    pub menu_item: Option<RMenuItem>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct RMenuItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub inventory: Option<i64>,
    pub price: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct DBMenuItemWrite {
    pub name: String,
    pub description: String,
    pub inventory: i64,
    pub price: i64,
}

impl RMenuItemBody {
    pub fn validate(self) -> Result<DBMenuItemWrite, AppError> {
        let item = required_object("menuItem", self.menu_item)?;
        Ok(DBMenuItemWrite {
            name: required_text("name", item.name)?,
            description: text_or_empty(item.description),
            inventory: required_number("inventory", item.inventory)?,
            price: required_number("price", item.price)?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemRes {
    pub menu_item: entity::menu_item::Model,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemsRes {
    pub menu_items: Vec<entity::menu_item::Model>,
}
