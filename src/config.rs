use std::env;
use std::sync::OnceLock;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: i32,
    pub db_url: String,
    /// Base URL confirmation links are built against.
    pub public_url: String,
    pub mail: MailConfig,
}

#[derive(Clone, Debug)]
pub struct MailConfig {
    /// Empty key selects the log-only sender (local dev, tests).
    pub api_key: String,
    pub endpoint: String,
    pub from: String,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let db_url: String = Self::get_env("POSTGRES_URI");

        EnvConfig {
            port: Self::get_env("PORT").parse().unwrap_or(8080),
            db_url,
            public_url: env::var("PUBLIC_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            mail: MailConfig {
                api_key: env::var("MAIL_API_KEY").unwrap_or_default(),
                endpoint: env::var("MAIL_ENDPOINT")
                    .unwrap_or_else(|_| "https://api.resend.com/emails".to_string()),
                from: env::var("MAIL_FROM")
                    .unwrap_or_else(|_| "noreply@shop.example.com".to_string()),
            },
        }
    }
}

pub static CONFIG: OnceLock<EnvConfig> = OnceLock::new();

pub fn config() -> &'static EnvConfig {
    CONFIG.get().expect("Not initialized")
}
