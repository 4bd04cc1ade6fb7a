//! HTTP client for TMDB API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests against the TMDB v3 API root.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{AccessToken, ApiKey, TmdbConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Query parameter carrying the v3 API key.
pub const API_KEY_PARAM: &str = "api_key";

/// HTTP client for making requests to the TMDB API.
///
/// The client handles:
/// - URL construction from the configured [`BaseUrl`](crate::BaseUrl)
/// - Default headers including User-Agent and Accept
/// - Credential injection (`api_key` query parameter or bearer token)
/// - Decoding response bodies and mapping non-2xx statuses to errors
///
/// Each call to [`request`](Self::request) performs exactly one network
/// round trip. Nothing is retried.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use tmdb_api::{HttpClient, HttpRequest, HttpMethod, TmdbConfig, ApiKey};
///
/// let config = TmdbConfig::builder()
///     .api_key(ApiKey::new("my-key").unwrap())
///     .build()?;
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "movie/550").build()?;
/// let response = client.request(request).await?;
/// println!("{}", response.body["title"]);
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// API root without trailing slash (e.g., `https://api.themoviedb.org/3`).
    base_url: String,
    /// Sent as a query parameter when no access token is configured.
    api_key: Option<ApiKey>,
    /// Sent as a bearer token; takes precedence over `api_key`.
    access_token: Option<AccessToken>,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &TmdbConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}TMDB API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let access_token = config.access_token().cloned();
        let api_key = if access_token.is_some() {
            None
        } else {
            config.api_key().cloned()
        };

        Ok(Self {
            client,
            base_url: config.base_url().as_ref().to_string(),
            api_key,
            access_token,
            default_headers,
        })
    }

    /// Returns the API root for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    ///
    /// The bearer credential is added per request and is not part of this map.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns `true` when requests are authenticated with a bearer token.
    #[must_use]
    pub const fn uses_bearer_auth(&self) -> bool {
        self.access_token.is_some()
    }

    /// Sends an HTTP request to the TMDB API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    /// - A 2xx body is not valid JSON (`Decode`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}/{}", self.base_url, request.path);

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(token) = &self.access_token {
            headers.insert(
                "Authorization".to_string(),
                format!("Bearer {}", token.as_ref()),
            );
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(key) = &self.api_key {
            req_builder = req_builder.query(&[(API_KEY_PARAM, key.as_ref())]);
        }
        if let Some(query) = &request.query {
            // The configured credential is the only api_key on the wire.
            let pairs: Vec<(&String, &String)> = query
                .iter()
                .filter(|(key, _)| key.as_str() != API_KEY_PARAM)
                .collect();
            req_builder = req_builder.query(&pairs);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            "Sending TMDB API request"
        );

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        if !(200..=299).contains(&code) {
            let error = HttpResponseError::from_body(code, body_text);
            tracing::warn!(
                method = %request.http_method,
                path = %request.path,
                status = code,
                tmdb_status = ?error.status_code,
                "TMDB API request failed: {}",
                error
            );
            return Err(HttpError::Response(error));
        }

        let body = if body_text.trim().is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(&body_text)
                .map_err(|source| HttpError::Decode { code, source })?
        };

        Ok(HttpResponse::new(code, res_headers, body))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
