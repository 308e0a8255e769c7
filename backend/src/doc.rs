//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the ETL and health endpoints together with the
//! domain schemas they return. Swagger UI serves it in debug builds.

use utoipa::OpenApi;

use crate::domain::{
    EtlReport, Error, ErrorCode, LoadResult, MetricsSnapshot, UserLocation, UserName, UserRecord,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mini ETL backend API",
        description = "Loads demo users, falls back to mock data, and reports aggregate metrics."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::etl::restart,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        EtlReport,
        LoadResult,
        MetricsSnapshot,
        UserRecord,
        UserName,
        UserLocation,
        Error,
        ErrorCode
    )),
    tags(
        (name = "etl", description = "Pipeline runs over the demo user feed"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
