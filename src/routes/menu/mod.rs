pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod menu_item;
pub mod update;
