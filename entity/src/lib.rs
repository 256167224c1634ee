pub mod employee;
pub mod timesheet;
pub mod menu;
pub mod menu_item;

/*
 Employees log timesheets, menus hold menu items.
 Employees are never removed, only flagged with is_current_employee = 0, so their
 timesheets stay reachable. A menu can only be removed once it has no items left.
 */
