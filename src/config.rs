//! Application configuration module.
//!
//! Handles loading configuration from environment variables.

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Database file path
    pub database_url: String,
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Base URL for generating short links
    pub base_url: String,
    /// Length of generated redirect tokens
    pub token_length: usize,
    /// Enable Prometheus metrics endpoint
    pub metrics_enabled: bool,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// # Environment Variables
    /// - `DATABASE_URL`: Path to SQLite database (default: "shortify.db")
    /// - `HOST`: Server host (default: "127.0.0.1")
    /// - `PORT`: Server port (default: 8080)
    /// - `BASE_URL`: Base URL for short links (default: "http://localhost:8080")
    /// - `TOKEN_LENGTH`: Length of generated tokens (default: 7)
    /// - `METRICS_ENABLED`: Enable Prometheus metrics endpoint (default: true)
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .expect("PORT must be a valid number");

        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| format!("http://{}:{}", host, port));

        Self {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "shortify.db".to_string()),
            host,
            port,
            base_url,
            token_length: env::var("TOKEN_LENGTH")
                .unwrap_or_else(|_| "7".to_string())
                .parse()
                .expect("TOKEN_LENGTH must be a valid number"),
            metrics_enabled: env::var("METRICS_ENABLED")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .unwrap_or(true),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "shortify.db".to_string(),
            host: "127.0.0.1".to_string(),
            port: 8080,
            base_url: "http://localhost:8080".to_string(),
            token_length: 7,
            metrics_enabled: true,
        }
    }
}
