pub mod sqlite_service;

mod employee;
mod menu;
mod menu_item;
mod timesheet;
