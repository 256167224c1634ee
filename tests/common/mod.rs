use std::sync::Arc;
use tempfile::TempDir;
use canteen_api::config::sqlite_url;
use canteen_api::db::sqlite_service::SqliteService;

pub mod client;

pub struct TestContext {
    pub db: Arc<SqliteService>,
    pub _dir: TempDir,
}

impl TestContext {
    pub async fn new() -> TestContext {
        // A fresh database file per test, removed with the directory.
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("database.sqlite");
        let db_url = sqlite_url(&path.to_string_lossy());

        let db = Arc::new(
            SqliteService::new(&db_url)
                .await
                .expect("Failed to initialize SqliteService")
        );

        TestContext {
            db,
            _dir: dir,
        }
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use canteen_api::types::employee::DBEmployeeWrite;
    use canteen_api::types::menu::DBMenuWrite;
    use canteen_api::types::menu_item::DBMenuItemWrite;
    use canteen_api::types::timesheet::DBTimesheetWrite;

    pub fn sample_employee() -> DBEmployeeWrite {
        DBEmployeeWrite {
            name: "Ada Lovelace".to_string(),
            position: "Line Cook".to_string(),
            wage: 18,
        }
    }

    pub fn sample_timesheet() -> DBTimesheetWrite {
        DBTimesheetWrite {
            hours: 8,
            rate: 18,
            date: 1_700_000_000_000,
        }
    }

    pub fn sample_menu() -> DBMenuWrite {
        DBMenuWrite {
            title: "Lunch".to_string(),
        }
    }

    pub fn sample_menu_item() -> DBMenuItemWrite {
        DBMenuItemWrite {
            name: "Soup of the day".to_string(),
            description: "Ask your server".to_string(),
            inventory: 20,
            price: 6,
        }
    }
}
