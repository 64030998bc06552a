use actix_web::{web, App, HttpServer};
use shop_account::config::{EnvConfig, CONFIG};
use shop_account::db::postgres_service::PostgresService;
use shop_account::routes::configure_routes;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let postgres_service = Arc::new(
        PostgresService::new(&config.db_url)
            .await
            .expect("Failed to initialize PostgresService"),
    );

    CONFIG.set(config).expect("Config already initialized");

    tracing::info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&postgres_service)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
