use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, DbErr};
use tracing::info;

/// The one storage handle of the process. Built once at startup and shared with
/// every handler through `web::Data`.
#[derive(Clone)]
pub struct SqliteService {
    pub(crate) database_connection: DatabaseConnection,
}

impl SqliteService {
    pub async fn new(uri: &str) -> Result<Self, DbErr> {
        info!(uri, "Connecting to SQLite...");
        let database_connection = Database::connect(uri).await?;
        info!("Running migrations...");
        Migrator::up(&database_connection, None).await?;
        info!("Storage ready.");
        Ok(Self { database_connection })
    }
}

impl SqliteService {
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.database_connection.ping().await
    }
}
