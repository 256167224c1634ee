pub mod employee;
pub mod error;
pub mod menu;
pub mod menu_item;
pub mod response;
pub mod timesheet;
