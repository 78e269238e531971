const DEFAULT_DATABASE_PATH: &str = "swiss_tournament.db";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub path: String,
    pub pool_size: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: DEFAULT_DATABASE_PATH.to_string(),
            pool_size: 8,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub database: DatabaseSettings,
    pub server: ServerSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `DATABASE_PATH` and `DATABASE_POOL_SIZE`.
    pub fn from_env() -> Self {
        let mut config = Self::new();
        if let Ok(path) = std::env::var("DATABASE_PATH") {
            config.database.path = path;
        }
        if let Some(size) = std::env::var("DATABASE_POOL_SIZE")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|&v| v > 0)
        {
            config.database.pool_size = size;
        }
        config
    }

    pub fn with_database_path(mut self, path: impl Into<String>) -> Self {
        self.database.path = path.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.server.port = port;
        self
    }
}

// Passed explicitly to the services that need it; there is no global config.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::new();
        assert_eq!(config.database.path, "swiss_tournament.db");
        assert_eq!(config.server.port, 3000);
        assert!(config.database.pool_size > 0);
    }

    #[test]
    fn test_builder_overrides() {
        let config = AppConfig::new().with_database_path("/tmp/t.db").with_port(8080);
        assert_eq!(config.database.path, "/tmp/t.db");
        assert_eq!(config.server.port, 8080);
    }
}
