// src/config.rs
use anyhow::{Context, Result};
use tracing::info;

const DEFAULT_ADVISE_API_URL: &str = "http://localhost:8000";
const DEFAULT_PORT: u16 = 3000;

/// Process configuration, read once at startup and injected from there on.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the advice service.
    pub advise_api_url: String,
    /// Port the site listens on.
    pub port: u16,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let advise_api_url = std::env::var("ADVISE_API_URL")
            .unwrap_or_else(|_| DEFAULT_ADVISE_API_URL.to_string());

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            Err(_) => DEFAULT_PORT,
        };

        info!(advise_api_url = %advise_api_url, port, "Loaded configuration");

        Ok(Self {
            advise_api_url,
            port,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            advise_api_url: DEFAULT_ADVISE_API_URL.to_string(),
            port: DEFAULT_PORT,
        }
    }
}
