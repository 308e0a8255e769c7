//! Domain types and services for the mini ETL.
//!
//! Purpose: normalise user records, aggregate them, and absorb upstream
//! failures behind a mock fallback. Nothing here knows about HTTP.
//!
//! Public surface:
//! - UserRecord (alias to `user_record::UserRecord`): canonical user shape.
//! - UserLoader (alias to `user_loader::UserLoader`): fetch with fallback.
//! - aggregate / MetricsSnapshot: summary statistics.
//! - EtlReport: one load-and-aggregate cycle.
//! - Error / ErrorCode: transport-agnostic error payload.

pub mod error;
pub mod etl_report;
pub mod metrics;
pub mod ports;
pub mod user_loader;
pub mod user_record;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::etl_report::{EtlReport, fallback_metrics};
pub use self::metrics::{MetricsSnapshot, aggregate};
pub use self::user_loader::{LoadResult, Loaded, UserLoader};
pub use self::user_record::{UserLocation, UserName, UserRecord};
