//! ETL pipeline endpoint.
//!
//! ```text
//! GET /api/etl/restart
//! ```
//!
//! Each call runs one load-and-aggregate cycle. Upstream failures never
//! surface here; they show up as `fallbackUsed: true` in the body.

use actix_web::http::header::{self, HeaderValue};
use actix_web::{HttpResponse, ResponseError, web};
use tracing::info;

use crate::domain::{EtlReport, Error};
use crate::inbound::http::state::HttpState;

/// Path of the restart endpoint.
pub const RESTART_PATH: &str = "/api/etl/restart";

/// Register the restart resource, answering 405 for anything but GET.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::inbound::http::etl;
///
/// let app = App::new().configure(etl::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(RESTART_PATH)
            .route(web::get().to(restart))
            .default_service(web::to(method_not_allowed)),
    );
}

/// Run the pipeline once and return users, metrics and provenance.
#[utoipa::path(
    get,
    path = "/api/etl/restart",
    responses(
        (status = 200, description = "Pipeline result", body = EtlReport),
        (status = 405, description = "Method not allowed; only GET is supported", body = Error)
    ),
    tags = ["etl"],
    operation_id = "restartPipeline"
)]
pub async fn restart(state: web::Data<HttpState>) -> web::Json<EtlReport> {
    let result = state.loader.load_with_meta().await;
    let report = EtlReport::from_load(result);
    info!(
        user_count = report.users.len(),
        fallback_used = report.fallback_used,
        source_url = %report.source_url,
        "pipeline restarted"
    );
    web::Json(report)
}

async fn method_not_allowed() -> HttpResponse {
    let mut response = Error::method_not_allowed("Method Not Allowed").error_response();
    response
        .headers_mut()
        .insert(header::ALLOW, HeaderValue::from_static("GET"));
    response
}
