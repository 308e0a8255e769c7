//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use backend::settings::{ServerSettings, SettingsError, SourceSettings};

/// Builder-style configuration for creating the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) source_url: String,
}

impl ServerConfig {
    /// Construct a server configuration bound to `bind_addr`, reading from
    /// `source_url`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, source_url: impl Into<String>) -> Self {
        Self {
            bind_addr,
            source_url: source_url.into(),
        }
    }

    /// Build the configuration from loaded settings.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when the bind address does not parse.
    pub fn from_settings(
        server: &ServerSettings,
        source: &SourceSettings,
    ) -> Result<Self, SettingsError> {
        Ok(Self::new(server.bind_addr()?, source.api_url()))
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
