//! HTTP client with retry support
//!
//! Provides the client used for all Confluence API requests:
//! - Basic-auth header installed once, marked sensitive
//! - Automatic retries with capped exponential backoff
//! - Response body parsing into JSON
//! - Error classification for retry decisions

use crate::auth::basic_auth_header;
use crate::error::{is_retryable_status, Error, Result};
use crate::types::{JsonValue, StringMap};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL for all requests
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Maximum number of retries
    pub max_retries: u32,
    /// Initial delay for backoff
    pub initial_backoff: Duration,
    /// Maximum delay for backoff
    pub max_backoff: Duration,
    /// User agent string
    pub user_agent: String,
}

impl HttpClientConfig {
    /// Create a config for the given base URL with default settings
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
            initial_backoff: Duration::from_millis(100),
            max_backoff: Duration::from_secs(60),
            user_agent: format!("confluence-source/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Create a new config builder
    pub fn builder(base_url: impl Into<String>) -> HttpClientConfigBuilder {
        HttpClientConfigBuilder {
            config: Self::new(base_url),
        }
    }
}

/// Builder for HTTP client config
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set max retries
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.config.max_retries = retries;
        self
    }

    /// Set backoff bounds
    pub fn backoff(mut self, initial: Duration, max: Duration) -> Self {
        self.config.initial_backoff = initial;
        self.config.max_backoff = max;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Authenticated HTTP client for one Confluence site
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create an authenticated client
    ///
    /// The `Authorization` header is built once from the credentials and
    /// installed as a default header on every request.
    pub fn new(config: HttpClientConfig, email: &str, api_token: &str) -> Result<Self> {
        let mut auth_value = HeaderValue::from_str(&basic_auth_header(email, api_token))
            .map_err(|e| Error::auth(format!("credentials form an invalid header value: {e}")))?;
        auth_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth_value);

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    /// Make a GET request and parse the JSON response body
    ///
    /// Retries on 429/5xx statuses and on transport timeouts and
    /// connection errors, with capped exponential backoff. Any other
    /// non-2xx status fails immediately with the body captured.
    pub async fn get_json(&self, path: &str, query: &StringMap) -> Result<JsonValue> {
        let url = self.build_url(path);
        let mut attempt = 0;

        loop {
            match self.client.get(&url).query(query).send().await {
                Ok(response) => {
                    let status = response.status();

                    if is_retryable_status(status.as_u16()) && attempt < self.config.max_retries {
                        let delay = self.calculate_backoff(attempt);
                        warn!(
                            "Request failed with {}, attempt {}/{}, retrying in {:?}",
                            status.as_u16(),
                            attempt + 1,
                            self.config.max_retries + 1,
                            delay
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }

                    if !status.is_success() {
                        let body = response.text().await.unwrap_or_default();
                        return Err(Error::http_status(status.as_u16(), body));
                    }

                    debug!("GET {} succeeded", url);
                    let text = response.text().await?;
                    return Ok(serde_json::from_str(&text)?);
                }
                Err(e) => {
                    if (e.is_timeout() || e.is_connect()) && attempt < self.config.max_retries {
                        let delay = self.calculate_backoff(attempt);
                        warn!(
                            "Request error: {}, attempt {}/{}, retrying in {:?}",
                            e,
                            attempt + 1,
                            self.config.max_retries + 1,
                            delay
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }
                    return Err(Error::Http(e));
                }
            }
        }
    }

    /// Build full URL from path
    fn build_url(&self, path: &str) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Calculate backoff delay for a given attempt
    pub fn calculate_backoff(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt);
        let delay = self.config.initial_backoff * factor;
        std::cmp::min(delay, self.config.max_backoff)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
