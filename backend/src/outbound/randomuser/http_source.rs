//! Reqwest-backed randomuser.me source adapter.
//!
//! This adapter owns transport details only: endpoint parsing, HTTP error
//! mapping, and JSON decoding into canonical records. It performs exactly one
//! GET per fetch and relies on the client's default timeouts.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

use super::dto::RandomUserResponseDto;
use crate::domain::UserRecord;
use crate::domain::ports::{UserSource, UserSourceError};

/// Endpoint used when no override is configured.
pub const DEFAULT_SOURCE_URL: &str = "https://randomuser.me/api/?results=500";

const DEFAULT_USER_AGENT: &str = "mini-etl-backend/0.1";

/// User source that performs HTTP GET requests against one endpoint.
pub struct RandomUserHttpSource {
    client: Client,
    endpoint: String,
}

impl RandomUserHttpSource {
    /// Build an adapter for `endpoint`.
    ///
    /// The endpoint is parsed lazily on each fetch, so a malformed override
    /// surfaces as a fetch failure rather than a startup error.
    /// ```rust,ignore
    /// let source = RandomUserHttpSource::new(DEFAULT_SOURCE_URL);
    /// assert!(source.is_ok() || source.is_err());
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(DEFAULT_USER_AGENT).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl UserSource for RandomUserHttpSource {
    fn source_url(&self) -> String {
        self.endpoint.clone()
    }

    async fn fetch_users(&self) -> Result<Vec<UserRecord>, UserSourceError> {
        let endpoint = Url::parse(&self.endpoint)
            .map_err(|error| UserSourceError::invalid_endpoint(error.to_string()))?;
        let response = self
            .client
            .get(endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        parse_users(body.as_ref())
    }
}

fn parse_users(body: &[u8]) -> Result<Vec<UserRecord>, UserSourceError> {
    let decoded: RandomUserResponseDto = serde_json::from_slice(body).map_err(|error| {
        UserSourceError::decode(format!("invalid randomuser JSON payload: {error}"))
    })?;
    decoded
        .into_domain_users()
        .map_err(UserSourceError::decode)
}

fn map_transport_error(error: reqwest::Error) -> UserSourceError {
    if error.is_timeout() {
        UserSourceError::timeout(error.to_string())
    } else {
        UserSourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> UserSourceError {
    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), body_preview)
    };

    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            UserSourceError::timeout(message)
        }
        _ => UserSourceError::status(status.as_u16(), message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
