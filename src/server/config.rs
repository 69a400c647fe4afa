use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_TOKEN_TTL_MINUTES: i64 = 30;

pub struct Config {
    pub database_url: String,
    pub secret_key: String,
    pub access_token_ttl_minutes: i64,
    pub bind_addr: String,

    /// Chat bot token; the bot front end is disabled when unset.
    pub bot_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let access_token_ttl_minutes = match std::env::var("ACCESS_TOKEN_TTL_MINUTES") {
            Ok(value) => value.parse::<i64>().map_err(|_| ConfigError::InvalidEnvVar {
                name: "ACCESS_TOKEN_TTL_MINUTES".to_string(),
                value,
            })?,
            Err(_) => DEFAULT_TOKEN_TTL_MINUTES,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            secret_key: std::env::var("SECRET_KEY")
                .map_err(|_| ConfigError::MissingEnvVar("SECRET_KEY".to_string()))?,
            access_token_ttl_minutes,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            bot_token: std::env::var("BOT_TOKEN").ok(),
        })
    }
}
