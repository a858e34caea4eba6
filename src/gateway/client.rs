use std::sync::Arc;

use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::{debug, error, instrument};

use crate::config::Config;
use crate::gateway::{ApiRequest, Outcome};

/// Header carrying the Rocketlane credential
pub const API_KEY_HEADER: &str = "api-key";

const JSON: &str = "application/json";

/// Error building the shared HTTP client
#[derive(Debug, thiserror::Error)]
#[error("failed to build HTTP client: {0}")]
pub struct GatewayInitError(#[from] reqwest::Error);

/// Owns outbound HTTP to the Rocketlane API.
///
/// Holds one pooled `reqwest::Client` for the life of the process. Cloning is
/// cheap and shares the pool.
#[derive(Debug, Clone)]
pub struct Gateway {
    client: Client,
    config: Arc<Config>,
}

impl Gateway {
    /// Build a gateway with the fixed per-call timeout from `config`
    pub fn new(config: Config) -> Result<Self, GatewayInitError> {
        crate::init_crypto();

        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether a credential was configured at startup
    pub fn has_api_key(&self) -> bool {
        self.config.has_api_key()
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(JSON));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON));
        // An unset key still goes out (empty) and is rejected upstream
        let key = self.config.api_key.as_deref().unwrap_or_default();
        let value = HeaderValue::from_str(key).unwrap_or_else(|_| HeaderValue::from_static(""));
        headers.insert(API_KEY_HEADER, value);
        headers
    }

    /// Perform one call. Never retries, never panics; every failure becomes an `Outcome`.
    #[instrument(skip(self, request), fields(method = request.method.as_str(), path = %request.path))]
    pub async fn execute(&self, request: ApiRequest) -> Outcome {
        let url = format!("{}{}", self.config.base_url, request.path);
        debug!("{} {}", request.method.as_str(), url);

        let mut builder = self
            .client
            .request(request.method.into(), &url)
            .headers(self.headers());
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                error!("Request to {} failed: {}", url, e);
                return Outcome::TransportFailure(describe(&e));
            }
        };

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                error!("Reading response from {} failed: {}", url, e);
                return Outcome::TransportFailure(describe(&e));
            }
        };

        if !status.is_success() {
            error!("Upstream returned {} for {}", status.as_u16(), url);
            return Outcome::UpstreamError {
                status: status.as_u16(),
                body: text,
            };
        }

        if text.trim().is_empty() {
            return Outcome::Success {
                status: status.as_u16(),
                body: None,
            };
        }

        match serde_json::from_str(&text) {
            Ok(body) => Outcome::Success {
                status: status.as_u16(),
                body: Some(body),
            },
            Err(e) => {
                error!("Undecodable JSON from {}: {}", url, e);
                Outcome::TransportFailure(format!("invalid JSON in response: {}", e))
            }
        }
    }
}

fn describe(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        format!("request timed out: {}", e)
    } else if e.is_connect() {
        format!("connection failed: {}", e)
    } else {
        e.to_string()
    }
}
