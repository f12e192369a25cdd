//! Configuration types for the traefik-status service

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::registry::{MonitoredService, Registry};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub traefik: TraefikConfig,
    #[serde(default = "default_services")]
    pub services: Vec<MonitoredService>,
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            traefik: TraefikConfig::default(),
            services: default_services(),
            server: ServerConfig::default(),
        }
    }
}

impl Config {
    /// Build the read-only registry of monitored services
    pub fn registry(&self) -> Registry {
        Registry::new(self.services.clone())
    }

    /// Override Traefik connection settings from `TRAEFIK_API_URL`,
    /// `TRAEFIK_USERNAME` and `TRAEFIK_PASSWORD` when they are set.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(api_url) = lookup("TRAEFIK_API_URL") {
            tracing::debug!("Traefik API URL taken from environment");
            self.traefik.api_url = api_url;
        }
        if let Some(username) = lookup("TRAEFIK_USERNAME") {
            tracing::debug!("Traefik username taken from environment");
            self.traefik.username = username;
        }
        if let Some(password) = lookup("TRAEFIK_PASSWORD") {
            tracing::debug!("Traefik password taken from environment");
            self.traefik.password = password;
        }
    }
}

/// Connection settings for the Traefik API
#[derive(Clone, Serialize, Deserialize)]
pub struct TraefikConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

impl Default for TraefikConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            username: String::new(),
            password: String::new(),
            timeout: default_timeout(),
        }
    }
}

impl std::fmt::Debug for TraefikConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TraefikConfig")
            .field("api_url", &self.api_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Status API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

fn default_api_url() -> String {
    "http://traefik:8080/api/http/services".to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_port() -> u16 {
    11120
}

fn default_services() -> Vec<MonitoredService> {
    vec![
        MonitoredService::new(
            "discovery@docker",
            "Discovery Service",
            "https://discovery.example.com",
        ),
        MonitoredService::new(
            "admin@docker",
            "Administration Panel",
            "https://admin.example.com",
        ),
    ]
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::TraefikStatusError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}
