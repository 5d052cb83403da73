use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::state::AppState;

/// API-key gate.
///
/// Installed on the router only when `auth.enabled` is set; deployments
/// without the gate never pass through here. Checks run in order: the
/// header must be present, and when a secret is configured it must match
/// the header value (ASCII case-insensitive). With no secret provisioned
/// the comparison is skipped and the request proceeds.
pub async fn require_api_key(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let header_name = state.config.auth.header.as_str();

    let Some(provided) = req.headers().get(header_name) else {
        return (StatusCode::UNAUTHORIZED, "API key is missing.").into_response();
    };

    if let Some(expected) = state.config.auth.api_key.as_deref() {
        let provided = provided.to_str().unwrap_or("");
        if !expected.eq_ignore_ascii_case(provided) {
            return (StatusCode::UNAUTHORIZED, "API key is invalid.").into_response();
        }
    }

    next.run(req).await
}
