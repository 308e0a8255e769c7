//! Domain ports defining the edges of the hexagon.
//!
//! The loader only talks to the outside world through [`UserSource`]. Adapters
//! map their failures into [`UserSourceError`] so the loader can log a
//! predictable variant before falling back to mock data.

use async_trait::async_trait;
use thiserror::Error;

use super::UserRecord;

/// Errors surfaced by a user source adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserSourceError {
    /// The configured endpoint is not a usable URL.
    #[error("user source endpoint is invalid: {message}")]
    InvalidEndpoint { message: String },
    /// Connection, DNS or TLS failure before a response arrived.
    #[error("user source transport failed: {message}")]
    Transport { message: String },
    /// The request did not complete in time.
    #[error("user source timed out: {message}")]
    Timeout { message: String },
    /// Upstream answered with a non-2xx status.
    #[error("user source returned status {status}: {message}")]
    Status { status: u16, message: String },
    /// The body could not be projected into user records.
    #[error("user source payload could not be decoded: {message}")]
    Decode { message: String },
}

impl UserSourceError {
    /// Helper for unusable endpoints.
    pub fn invalid_endpoint(message: impl Into<String>) -> Self {
        Self::InvalidEndpoint {
            message: message.into(),
        }
    }

    /// Helper for transport failures.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Helper for timeouts.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Helper for non-success statuses.
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Helper for payload decoding failures.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Driven port producing one batch of canonical user records per call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Endpoint the source reads from, reported back in load results.
    fn source_url(&self) -> String;

    /// Perform one fetch. No retries; any failure is returned as-is.
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, UserSourceError>;
}
