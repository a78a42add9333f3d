//! GraphQL Client
//!
//! Thin client for the bot backend's GraphQL endpoint. Views use it from
//! their content loaders.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use crate::config::ApiConfig;

/// GraphQL client bound to one endpoint
#[derive(Debug, Clone)]
pub struct GraphQlClient {
    client: Client,
    endpoint: String,
}

impl GraphQlClient {
    /// Create a client from the API configuration
    pub fn new(config: &ApiConfig) -> GraphQlResult<Self> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| GraphQlError::InvalidHeader(name.clone()))?;
            let value = HeaderValue::from_str(value)
                .map_err(|_| GraphQlError::InvalidHeader(name.as_str().to_string()))?;
            headers.insert(name, value);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.url.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run a query or mutation and decode its `data` field
    pub async fn request<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Option<&Value>,
    ) -> GraphQlResult<T> {
        let body = GraphQlRequest { query, variables };

        let response = self.client.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(GraphQlError::Status {
                status: status.as_u16(),
                message: text,
            });
        }

        decode_response(&text)
    }
}

/// Decode a GraphQL response body
///
/// Any entry in `errors` fails the request, even when partial data came back.
pub fn decode_response<T: DeserializeOwned>(body: &str) -> GraphQlResult<T> {
    let response: GraphQlResponse<T> = serde_json::from_str(body)?;

    let errors = response.errors.unwrap_or_default();
    if !errors.is_empty() {
        return Err(GraphQlError::Response(
            errors.iter().map(ToString::to_string).collect(),
        ));
    }

    response.data.ok_or(GraphQlError::MissingData)
}

// ============================================
// Wire types
// ============================================

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<&'a Value>,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Option<Vec<GraphQlErrorMessage>>,
}

/// One entry of a response's `errors` array
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlErrorMessage {
    pub message: String,
    #[serde(default)]
    pub path: Option<Vec<Value>>,
}

impl std::fmt::Display for GraphQlErrorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;

        if let Some(path) = self.path.as_deref().filter(|p| !p.is_empty()) {
            let segments: Vec<String> = path
                .iter()
                .map(|segment| match segment {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect();
            write!(f, " (at {})", segments.join("."))?;
        }

        Ok(())
    }
}

// ============================================
// Errors
// ============================================

/// Errors that can occur when talking to the GraphQL endpoint
#[derive(Error, Debug)]
pub enum GraphQlError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP error {status}: {message}")]
    Status { status: u16, message: String },

    #[error("GraphQL errors: {}", .0.join("; "))]
    Response(Vec<String>),

    #[error("Response has no data")]
    MissingData,

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}

/// Result type alias for GraphQL operations
pub type GraphQlResult<T> = Result<T, GraphQlError>;
