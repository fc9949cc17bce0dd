//! Environment-driven configuration.

/// Runtime settings, read once at startup. `.env` is loaded by the binary
/// before this runs.
#[derive(Debug, Clone)]
pub struct Config {
    /// sqlx connection string. The pool creates the file when missing.
    pub database_url: String,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://entries.db".into()),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into()),
        }
    }
}
