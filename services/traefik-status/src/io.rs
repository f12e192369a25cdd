//! HTTP client abstraction for testability

use std::time::Duration;

use async_trait::async_trait;

use crate::error::FetchError;

/// HTTP response from a request
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Username and password for HTTP Basic authentication
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Abstraction over HTTP client for dependency injection
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait HttpClient: Send + Sync {
    /// Send a GET request authenticated with HTTP Basic auth.
    ///
    /// Any response that arrives is returned regardless of its status code;
    /// only transport failures are errors.
    async fn get_with_basic_auth(
        &self,
        url: &str,
        credentials: &Credentials,
    ) -> Result<HttpResponse, FetchError>;
}

/// Production HTTP client using reqwest
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Build a client whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> crate::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(format!("traefik-status/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| crate::TraefikStatusError::Http(e.to_string()))?;
        Ok(Self { client })
    }

    fn request(&self, url: &str, credentials: &Credentials) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .basic_auth(&credentials.username, Some(&credentials.password))
            .header(reqwest::header::ACCEPT, "application/json")
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get_with_basic_auth(
        &self,
        url: &str,
        credentials: &Credentials,
    ) -> Result<HttpResponse, FetchError> {
        tracing::debug!("GET {} as {}", url, credentials.username);
        let response = self
            .request(url, credentials)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::NetworkFailure(format!("GET {} timed out", url))
                } else {
                    FetchError::NetworkFailure(format!("GET {} failed: {}", url, e))
                }
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            FetchError::NetworkFailure(format!("Reading response body: {}", e))
        })?;

        tracing::debug!("GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(HttpResponse { status, body })
    }
}
