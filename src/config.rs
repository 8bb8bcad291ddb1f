use serde::Deserialize;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// PostgreSQL connection URL; the seeded in-memory store is used when unset
    #[serde(default)]
    pub database_url: Option<String>,

    /// Maximum connections in the database pool
    #[serde(default = "default_database_max_connections")]
    pub database_max_connections: u32,

    /// Movie service base URL
    #[serde(default = "default_movie_service_url")]
    pub movie_service_url: String,

    /// Per-request timeout for movie service calls, in seconds
    #[serde(default = "default_movie_service_timeout_secs")]
    pub movie_service_timeout_secs: u64,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_database_max_connections() -> u32 {
    5
}

fn default_movie_service_url() -> String {
    "http://localhost:7070".to_string()
}

fn default_movie_service_timeout_secs() -> u64 {
    5
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn movie_service_timeout(&self) -> Duration {
        Duration::from_secs(self.movie_service_timeout_secs)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: Config = envy::from_iter(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config.database_url, None);
        assert_eq!(config.movie_service_url, "http://localhost:7070");
        assert_eq!(config.movie_service_timeout(), Duration::from_secs(5));
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_overrides() {
        let config: Config = envy::from_iter(vec![
            ("DATABASE_URL".to_string(), "postgres://localhost/customers".to_string()),
            ("MOVIE_SERVICE_URL".to_string(), "http://movies:7070".to_string()),
            ("MOVIE_SERVICE_TIMEOUT_SECS".to_string(), "2".to_string()),
            ("PORT".to_string(), "9090".to_string()),
        ])
        .unwrap();

        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/customers")
        );
        assert_eq!(config.movie_service_url, "http://movies:7070");
        assert_eq!(config.movie_service_timeout_secs, 2);
        assert_eq!(config.port, 9090);
    }
}
