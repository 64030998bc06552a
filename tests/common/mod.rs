use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use shop_account::config::{EnvConfig, MailConfig, CONFIG};
use shop_account::db::postgres_service::PostgresService;
use std::sync::Arc;

pub mod client;

pub struct TestContext {
    pub db: Arc<PostgresService>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        // Handlers read the global config (mail, public URL); first test
        // in the binary wins the init, which is fine since all tests use
        // the same values.
        let _ = CONFIG.get_or_init(get_test_config);

        // Single-connection pool so every query sees the same in-memory
        // database.
        let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
        options.max_connections(1);

        let conn = Database::connect(options)
            .await
            .expect("Failed to open in-memory sqlite");
        Migrator::up(&conn, None)
            .await
            .expect("Failed to run migrations");

        TestContext {
            db: Arc::new(PostgresService::from_connection(conn)),
        }
    }
}

pub fn get_test_config() -> EnvConfig {
    EnvConfig {
        port: 8080,
        db_url: "unused-in-tests".to_string(),
        public_url: "http://localhost:8080".to_string(),
        mail: MailConfig {
            // Empty key keeps the mail sender in its log-only mode.
            api_key: String::new(),
            endpoint: String::new(),
            from: "noreply@shop.test".to_string(),
        },
    }
}

// Test data helpers
pub mod test_data {
    use serde_json::{json, Value};

    pub const PASSWORD: &str = "correct horse battery";

    pub fn register_payload(username: &str, email: &str) -> Value {
        json!({
            "username": username,
            "email": email,
            "password": PASSWORD,
        })
    }

    pub fn login_payload(username: &str, password: &str) -> Value {
        json!({
            "username": username,
            "password": password,
        })
    }
}
