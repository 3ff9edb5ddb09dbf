//! HTTP plumbing shared by every Filez operation.
//!
//! [`HttpClient`] owns the `reqwest` client and the service base URL. It
//! sends exactly one request per call and translates the outcome into the
//! [`FilezError`] taxonomy: connection failures, non-200 statuses carrying
//! the raw response body, and undecodable payloads.

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, trace};
use url::Url;

use crate::{configuration::Configuration, error::FilezError};

pub const USER_AGENT: &str = concat!("filez-rs/", env!("CARGO_PKG_VERSION"));

/// HTTP client wrapper bound to one Filez deployment
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client for the service described by `configuration`
    pub fn new(configuration: &Configuration) -> Result<Self, FilezError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = configuration.timeout_secs() {
            builder = builder.timeout(Duration::from_secs(timeout));
        }
        let client = builder
            .build()
            .map_err(|e| FilezError::UnknownError(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: configuration.base_url(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve an endpoint path against the base URL, appending `query`
    /// pairs with proper encoding.
    pub fn url(&self, path: &str, query: &[(&str, String)]) -> Result<Url, FilezError> {
        let raw = format!("{}{}", self.base_url, path);
        let url = if query.is_empty() {
            Url::parse(&raw)
        } else {
            Url::parse_with_params(&raw, query)
        };
        url.map_err(|e| FilezError::UnknownError(format!("invalid URL {}: {}", raw, e)))
    }

    /// Start a request; the caller attaches headers and body.
    pub fn request(&self, method: Method, url: Url) -> RequestBuilder {
        trace!("Preparing {} {}", method, url);
        self.client.request(method, url)
    }

    /// Send the request and parse the 200 response body as JSON
    pub async fn send_json(&self, request: RequestBuilder) -> Result<Value, FilezError> {
        let response = self.send(request).await?;
        let text = response.text().await.map_err(classify_transport_error)?;
        trace!("Raw response text for deserialization: {}", text);

        serde_json::from_str::<Value>(&text).map_err(|e| {
            error!("Failed to deserialize response: {}. Raw response: {}", e, text);
            FilezError::UnknownError(format!("response is not valid JSON: {}", e))
        })
    }

    /// Send the request and return the 200 response body unchanged
    pub async fn send_bytes(&self, request: RequestBuilder) -> Result<Vec<u8>, FilezError> {
        let response = self.send(request).await?;
        let bytes = response.bytes().await.map_err(classify_transport_error)?;
        debug!("Received {} bytes", bytes.len());
        Ok(bytes.to_vec())
    }

    /// Send the request, requiring a 200 OK status
    pub async fn send(&self, request: RequestBuilder) -> Result<Response, FilezError> {
        let response = request.send().await.map_err(classify_transport_error)?;
        let status = response.status();
        debug!("{} {}", status, response.url());

        if status == StatusCode::OK {
            return Ok(response);
        }

        let body = response.text().await.map_err(|e| {
            error!("Failed to read the body of a {} response: {}", status, e);
            classify_transport_error(e)
        })?;
        debug!("Request failed with status {}: {}", status, body);
        Err(FilezError::RemoteError { status, body })
    }
}

/// Map a `reqwest` failure onto the error taxonomy.
pub fn classify_transport_error(e: reqwest::Error) -> FilezError {
    if e.is_connect() || e.is_timeout() {
        error!("Cannot reach Filez service: {}", e);
        FilezError::ConnectivityError(e)
    } else {
        FilezError::UnknownError(e.to_string())
    }
}
