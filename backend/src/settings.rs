//! Runtime settings loaded via OrthoConfig.
//!
//! Values come from the environment (and any OrthoConfig config file).
//! Every field is optional; accessors supply the defaults.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::outbound::randomuser::DEFAULT_SOURCE_URL;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Upstream user feed settings.
///
/// `RANDOMUSER_API_URL` overrides the endpoint.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "RANDOMUSER")]
pub struct SourceSettings {
    /// Endpoint override for the user feed.
    pub api_url: Option<String>,
}

impl SourceSettings {
    /// Configured endpoint, or the public randomuser.me default.
    pub fn api_url(&self) -> &str {
        self.api_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_SOURCE_URL)
    }
}

/// Errors raised while interpreting server settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// `MINI_ETL_BIND_ADDR` is not a socket address.
    #[error("invalid bind address {value:?}: {source}")]
    BindAddr {
        /// Raw configured value.
        value: String,
        /// Parse failure.
        #[source]
        source: std::net::AddrParseError,
    },
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MINI_ETL")]
pub struct ServerSettings {
    /// Listen address override, e.g. `127.0.0.1:3000`.
    pub bind_addr: Option<String>,
}

impl ServerSettings {
    /// Parsed listen address, defaulting to `0.0.0.0:8080`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::BindAddr`] when the override does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|source| SettingsError::BindAddr {
            value: raw.to_owned(),
            source,
        })
    }
}
