use crate::models::{self, CannedResponse};
use crate::routes;

/// ANY /errorplease handler - Always answers with the canned 500 payload
///
/// Method, headers and body of the request are ignored.
#[utoipa::path(
    get,
    path = routes::ERROR_PLEASE,
    responses(
        (status = 500, description = "Canned error payload", body = String, content_type = "text/plain")
    ),
    tag = "fixture"
)]
pub async fn error_please_handler() -> CannedResponse {
    tracing::debug!("Serving canned error response");
    models::ERROR_PLEASE
}
