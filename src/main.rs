use actix_web::{middleware::Logger, web, App, HttpServer};
use canteen_api::config::EnvConfig;
use canteen_api::db::sqlite_service::SqliteService;
use canteen_api::routes::configure_routes;
use std::sync::Arc;
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = EnvConfig::from_env();
    let addr = ("0.0.0.0", config.port);

    let sqlite_service = Arc::new(
        SqliteService::new(
            &config.db_url,
        )
            .await
            .expect("Failed to initialize SqliteService")
    );

    info!("Starting server on {}:{}", addr.0, addr.1);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(Arc::clone(&sqlite_service)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
