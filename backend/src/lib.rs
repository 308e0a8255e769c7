//! Mini ETL backend library.
//!
//! Loads a batch of demo users from randomuser.me, substitutes mock users
//! when the feed is unavailable, and aggregates summary metrics.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
