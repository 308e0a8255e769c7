//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the domain loader and stay testable without network access.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::UserLoader;
use crate::domain::ports::UserSource;

/// State bundle for the ETL endpoints.
#[derive(Clone)]
pub struct HttpState {
    /// Loader behind `GET /api/etl/restart`.
    pub loader: UserLoader<dyn UserSource>,
}

impl HttpState {
    /// Build state around a source and clock.
    pub fn new(source: Arc<dyn UserSource>, clock: Arc<dyn Clock>) -> Self {
        Self {
            loader: UserLoader::new(source, clock),
        }
    }
}
