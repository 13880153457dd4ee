use crate::models::{self, CannedResponse};
use crate::routes;

/// ANY /successyeah handler - Always answers with the canned 200 payload
#[utoipa::path(
    get,
    path = routes::SUCCESS_YEAH,
    responses(
        (status = 200, description = "Canned success payload", body = String, content_type = "text/plain")
    ),
    tag = "fixture"
)]
pub async fn success_yeah_handler() -> CannedResponse {
    tracing::debug!("Serving canned success response");
    models::SUCCESS_YEAH
}
