/*
[INPUT]:  Client configuration (API key, base URL, transport options) and API requests
[OUTPUT]: Configured reqwest client and the shared request executor
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing request/response handling
*/

use std::fmt;
use std::path::Path;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Response, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};

use super::error::{ConfigError, DuckWalletError, Result};

/// Base URL of the current Duck Wallet deployment
pub const DEFAULT_BASE_URL: &str = "https://wallet.duckcoin.org/api";
/// Base URL of the older deployment
pub const LEGACY_BASE_URL: &str = "https://api.duckwallet.com";

pub const API_KEY_HEADER: &str = "x-api-key";
pub const API_KEY_ENV: &str = "DUCKWALLET_API_KEY";
pub const BASE_URL_ENV: &str = "DUCKWALLET_BASE_URL";

/// HTTP client configuration
#[derive(Clone, Deserialize)]
pub struct ClientConfig {
    pub api_key: String,
    /// Service root. Unset or empty means [`DEFAULT_BASE_URL`]; one trailing
    /// `/` is trimmed before endpoint paths are appended.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Join `message` arrays in error bodies with ", "
    #[serde(default = "default_join_error_messages")]
    pub join_error_messages: bool,
    #[serde(default, deserialize_with = "deserialize_secs")]
    pub timeout: Option<Duration>,
    #[serde(default, deserialize_with = "deserialize_secs")]
    pub connect_timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
            join_error_messages: default_join_error_messages(),
            timeout: None,
            connect_timeout: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_join_error_messages(mut self, join: bool) -> Self {
        self.join_error_messages = join;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = Some(connect_timeout);
        self
    }

    /// Base URL requests are sent to.
    ///
    /// Falls back to [`DEFAULT_BASE_URL`] when unset or empty. A trailing `/`
    /// is dropped so paths can be appended directly.
    pub fn resolved_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    /// Load from `DUCKWALLET_API_KEY` and optional `DUCKWALLET_BASE_URL`
    pub fn from_env() -> std::result::Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> std::result::Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV).ok_or(ConfigError::MissingEnv(API_KEY_ENV))?;
        let mut config = Self::new(api_key);
        config.base_url = lookup(BASE_URL_ENV);
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> std::result::Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load configuration from YAML file
    pub fn from_file(path: impl AsRef<Path>) -> std::result::Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("join_error_messages", &self.join_error_messages)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

fn default_join_error_messages() -> bool {
    true
}

fn deserialize_secs<'de, D>(deserializer: D) -> std::result::Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.map(Duration::from_secs))
}

/// A single call against the API, relative to the client's base URL
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    /// Merged over the default headers; these win on conflict
    pub headers: HeaderMap,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize `payload` as the JSON body
    pub fn with_json<T: Serialize + ?Sized>(self, payload: &T) -> Result<Self> {
        let body = serde_json::to_string(payload)?;
        Ok(self.with_body(body))
    }
}

/// Client for the Duck Wallet custodial wallet API
///
/// Holds read-only configuration only; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct DuckWalletClient {
    http_client: Client,
    base_url: String,
    default_headers: HeaderMap,
    join_error_messages: bool,
}

impl DuckWalletClient {
    /// Create a new client from configuration
    pub fn new(config: ClientConfig) -> std::result::Result<Self, ConfigError> {
        let base_url = config.resolved_base_url().to_string();
        Url::parse(&base_url)?;

        let mut api_key = HeaderValue::from_str(&config.api_key)?;
        api_key.set_sensitive(true);

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(API_KEY_HEADER, api_key);

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        let http_client = builder.build()?;

        debug!(base_url = %base_url, "duck wallet client created");

        Ok(Self {
            http_client,
            base_url,
            default_headers,
            join_error_messages: config.join_error_messages,
        })
    }

    /// Create a client with only an API key and the default base URL
    pub fn with_api_key(api_key: impl Into<String>) -> std::result::Result<Self, ConfigError> {
        Self::new(ClientConfig::new(api_key))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build full URL for an endpoint path
    fn url(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    /// Send one request, turning any non-2xx status into a normalized error
    async fn send(&self, request: ApiRequest) -> Result<Response> {
        let url = self.url(&request.path)?;

        let mut headers = self.default_headers.clone();
        headers.extend(request.headers);

        debug!(method = %request.method, path = %request.path, "sending request");

        let mut builder = self
            .http_client
            .request(request.method, url)
            .headers(headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), "received response");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.bytes().await.unwrap_or_default();
        let err = DuckWalletError::from_response(status, &body, self.join_error_messages);
        warn!(
            http_status = status.as_u16(),
            status_code = ?err.status_code,
            code = ?err.code,
            message = %err.message,
            "request failed"
        );
        Err(err)
    }

    /// Execute a request and decode the JSON response body as `T`
    pub async fn request<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let response = self.send(request).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Execute a request whose success body carries nothing of interest
    pub async fn request_empty(&self, request: ApiRequest) -> Result<()> {
        let response = self.send(request).await?;
        response.bytes().await?;
        Ok(())
    }
}
