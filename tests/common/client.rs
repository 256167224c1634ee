use actix_web::{web, App};
use std::sync::Arc;
use canteen_api::db::sqlite_service::SqliteService;
use entity::{employee, menu, menu_item, timesheet};

use super::test_data;

pub struct TestClient {
    pub db: Arc<SqliteService>,
}

#[allow(dead_code)]
impl TestClient {
    pub fn new(db: Arc<SqliteService>) -> Self {
        TestClient { db }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(canteen_api::routes::configure_routes)
    }

    pub async fn create_test_employee(&self) -> employee::Model {
        self.db
            .create_employee(test_data::sample_employee())
            .await
            .expect("Failed to create employee")
    }

    pub async fn create_test_timesheet(&self, owner: &employee::Model) -> timesheet::Model {
        self.db
            .create_timesheet(owner, test_data::sample_timesheet())
            .await
            .expect("Failed to create timesheet")
    }

    pub async fn create_test_menu(&self) -> menu::Model {
        self.db
            .create_menu(test_data::sample_menu())
            .await
            .expect("Failed to create menu")
    }

    pub async fn create_test_menu_item(&self, parent: &menu::Model) -> menu_item::Model {
        self.db
            .create_menu_item(parent, test_data::sample_menu_item())
            .await
            .expect("Failed to create menu item")
    }
}
