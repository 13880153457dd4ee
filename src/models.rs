use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// A fixed status and body, written verbatim for every request to its route.
///
/// The body is served as `&'static str`, so the response carries
/// `text/plain; charset=utf-8` rather than a JSON content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CannedResponse {
    pub status: StatusCode,
    pub body: &'static str,
}

/// Payload for `/errorplease`. The spacing inside the body is intentional.
pub const ERROR_PLEASE: CannedResponse = CannedResponse {
    status: StatusCode::INTERNAL_SERVER_ERROR,
    body: r#"{"error" : "here it is"}"#,
};

/// Payload for `/successyeah`.
pub const SUCCESS_YEAH: CannedResponse = CannedResponse {
    status: StatusCode::OK,
    body: r#"{"success" : "yeah" }"#,
};

impl IntoResponse for CannedResponse {
    fn into_response(self) -> Response {
        (self.status, self.body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canned_bodies_are_exact() {
        assert_eq!(ERROR_PLEASE.body.as_bytes(), b"{\"error\" : \"here it is\"}");
        assert_eq!(SUCCESS_YEAH.body.as_bytes(), b"{\"success\" : \"yeah\" }");
    }

    #[test]
    fn test_canned_bodies_are_valid_json() {
        let error: serde_json::Value = serde_json::from_str(ERROR_PLEASE.body).unwrap();
        assert_eq!(error["error"], "here it is");

        let success: serde_json::Value = serde_json::from_str(SUCCESS_YEAH.body).unwrap();
        assert_eq!(success["success"], "yeah");
    }

    #[tokio::test]
    async fn test_into_response_keeps_status_and_body() {
        let response = ERROR_PLEASE.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers()["content-type"],
            "text/plain; charset=utf-8"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], ERROR_PLEASE.body.as_bytes());
    }
}
