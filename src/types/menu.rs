use serde::{Deserialize, Serialize};

use crate::types::error::AppError;
use crate::utils::validate::{required_object, required_text};

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct RMenuBody {
    pub menu: Option<RMenu>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct RMenu {
    pub title: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DBMenuWrite {
    pub title: String,
}

impl RMenuBody {
    pub fn validate(self) -> Result<DBMenuWrite, AppError> {
        let menu = required_object("menu", self.menu)?;
        Ok(DBMenuWrite { title: required_text("title", menu.title)? })
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MenuRes {
    pub menu: entity::menu::Model,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MenusRes {
    pub menus: Vec<entity::menu::Model>,
}
