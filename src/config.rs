//! Server configuration from environment variables.

/// Runtime configuration. Defaults match the original deployment: a local
/// `plants.db` file served on port 5555.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://plants.db".into(),
            host: "127.0.0.1".into(),
            port: 5555,
        }
    }
}

impl ServerConfig {
    /// Read `DATABASE_URL`, `HOST`, and `PORT` from the environment,
    /// falling back to the defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            database_url: std::env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
