use utoipa::OpenApi;

use crate::handlers;

/// OpenAPI documentation
///
/// Built in memory only. Mounting it would add paths to the router.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "static-responder API",
        version = "1.0.0",
        description = "HTTP test fixture answering two paths with fixed payloads"
    ),
    paths(
        handlers::error_please::error_please_handler,
        handlers::success_yeah::success_yeah_handler
    ),
    tags(
        (name = "fixture", description = "Canned responses")
    )
)]
pub struct ApiDoc;
