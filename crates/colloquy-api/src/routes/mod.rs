pub mod conversations;
pub mod health;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use crate::middleware::{api_key, logging};
use crate::state::AppState;

/// Build the API router.
///
/// The API-key gate is installed only when `auth.enabled` is set; in every
/// other deployment mode the middleware simply is not there.
pub fn router(state: Arc<AppState>) -> Router {
    let mut app = Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Conversations
        .route("/conversations", get(conversations::list_conversations))
        .route("/conversations", post(conversations::create_conversation))
        .route("/conversations/:id", get(conversations::get_conversation))
        .route("/conversations/:id", put(conversations::update_conversation))
        .route(
            "/conversations/:id",
            delete(conversations::delete_conversation),
        );

    if state.config.auth.enabled {
        app = app.layer(middleware::from_fn_with_state(
            state.clone(),
            api_key::require_api_key,
        ));
    }

    app.layer(middleware::from_fn(logging::log_request))
        .with_state(state)
}
