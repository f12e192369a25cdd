//! Traefik API client: one authenticated GET, parsed into raw service records

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Deserialize;

use crate::config::TraefikConfig;
use crate::error::FetchError;
use crate::io::{Credentials, HttpClient};

/// One entry of Traefik's `/api/http/services` listing.
///
/// Only the fields the classifier needs are typed; the load balancer payload
/// is kept opaque and anything else Traefik reports is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBackendRecord {
    pub name: String,
    /// Replica URL to state, e.g. `"http://10.0.0.5:80": "UP"`
    #[serde(default)]
    pub server_status: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub load_balancer: Option<serde_json::Value>,
}

impl RawBackendRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            server_status: None,
            load_balancer: None,
        }
    }

    pub fn with_server(mut self, server: impl Into<String>, state: impl Into<String>) -> Self {
        self.server_status
            .get_or_insert_with(BTreeMap::new)
            .insert(server.into(), state.into());
        self
    }
}

/// Fetches the raw service list from the Traefik API
pub struct HealthFetcher {
    endpoint: String,
    credentials: Credentials,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for HealthFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HealthFetcher")
            .field("endpoint", &self.endpoint)
            .field("credentials", &self.credentials)
            .finish()
    }
}

impl HealthFetcher {
    pub fn new(
        endpoint: impl Into<String>,
        credentials: Credentials,
        http: Arc<dyn HttpClient>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            credentials,
            http,
        }
    }

    pub fn from_config(config: &TraefikConfig, http: Arc<dyn HttpClient>) -> Self {
        Self::new(
            config.api_url.clone(),
            Credentials::new(config.username.clone(), config.password.clone()),
            http,
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Perform exactly one GET against the configured endpoint.
    ///
    /// No request is made when the endpoint or either credential is empty.
    pub async fn fetch(&self) -> Result<Vec<RawBackendRecord>, FetchError> {
        self.check_preconditions()?;

        let response = self
            .http
            .get_with_basic_auth(&self.endpoint, &self.credentials)
            .await?;

        if !(200..300).contains(&response.status) {
            tracing::debug!(
                "Non-success response from {}: status={}",
                self.endpoint,
                response.status
            );
            return Err(FetchError::UpstreamRejected {
                status_code: response.status,
            });
        }

        let records = parse_records(&response.body)?;
        tracing::debug!(
            "Fetched {} service records from {}",
            records.len(),
            self.endpoint
        );
        Ok(records)
    }

    fn check_preconditions(&self) -> Result<(), FetchError> {
        if self.endpoint.is_empty() {
            return Err(FetchError::ConfigMissing("API URL"));
        }
        if self.credentials.username.is_empty() {
            return Err(FetchError::ConfigMissing("username"));
        }
        if self.credentials.password.is_empty() {
            return Err(FetchError::ConfigMissing("password"));
        }
        Ok(())
    }
}

/// Parse a Traefik service listing body
pub fn parse_records(body: &str) -> Result<Vec<RawBackendRecord>, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::ParseFailure(e.to_string()))
}
