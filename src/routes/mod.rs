use crate::utils::webutils::{json_config, path_config};
use actix_web::web;

pub mod employee;
pub mod health;
pub mod menu;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).app_data(path_config());

    cfg.service(
        web::scope("/health").service(health::health)
    );
    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/employees")
                    .service(employee::list::list_employees)
                    .service(employee::create::create_employee)
                    .service(employee::get::get_employee)
                    .service(employee::update::update_employee)
                    .service(employee::delete::delete_employee)
                    .service(employee::timesheet::list::list_timesheets)
                    .service(employee::timesheet::create::create_timesheet)
                    .service(employee::timesheet::update::update_timesheet)
                    .service(employee::timesheet::delete::delete_timesheet)
            )
            .service(
                web::scope("/menus")
                    .service(menu::list::list_menus)
                    .service(menu::create::create_menu)
                    .service(menu::get::get_menu)
                    .service(menu::update::update_menu)
                    .service(menu::delete::delete_menu)
                    .service(menu::menu_item::list::list_menu_items)
                    .service(menu::menu_item::create::create_menu_item)
                    .service(menu::menu_item::update::update_menu_item)
                    .service(menu::menu_item::delete::delete_menu_item)
            )
    );
}
