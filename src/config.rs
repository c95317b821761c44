use std::env;

/// Process configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub bind_port: u16,
    pub db_host: String,
    /// Kept as a raw string: a malformed port surfaces as a connection
    /// failure, not a configuration error.
    pub db_port: String,
    pub db_name: String,
    pub db_username: String,
    pub db_password: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            bind_address: bind_address(env::var("HOST").ok()),
            bind_port: bind_port(env::var("PORT").ok()),
            db_host: env::var("MONGODB_HOST").unwrap_or_default(),
            db_port: env::var("MONGODB_PORT").unwrap_or_default(),
            db_name: env::var("MONGODB_DB").unwrap_or_default(),
            db_username: env::var("MONGODB_USERNAME").unwrap_or_default(),
            db_password: env::var("MONGODB_PASSWORD").unwrap_or_default(),
        }
    }
}

fn bind_address(raw: Option<String>) -> String {
    match raw {
        Some(addr) => addr,
        None => {
            log::warn!("⚠️ No HOST var, using 127.0.0.1");
            "127.0.0.1".to_string()
        }
    }
}

fn bind_port(raw: Option<String>) -> u16 {
    raw.and_then(|p| p.parse().ok()).unwrap_or(8080)
}
