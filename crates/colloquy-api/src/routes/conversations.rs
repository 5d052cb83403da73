use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use colloquy_persist::Conversation;

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

/// List every conversation in the collection
pub async fn list_conversations(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Conversation>>> {
    let conversations = state.conversations.list().await?;
    Ok(Json(conversations))
}

/// Get a conversation by its identifier
pub async fn get_conversation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Conversation>> {
    let conversation = state
        .conversations
        .get(&id)
        .await?
        .ok_or_else(|| ApiError::ConversationNotFound(id))?;

    Ok(Json(conversation))
}

/// Create a new conversation
///
/// The store assigns the identifier; any id in the payload is ignored.
pub async fn create_conversation(
    State(state): State<Arc<AppState>>,
    Json(conversation): Json<Conversation>,
) -> ApiResult<impl IntoResponse> {
    let created = state.conversations.create(conversation).await?;
    let location = format!("/conversations/{}", created.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// Replace the conversation at `id` wholesale
pub async fn update_conversation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(conversation): Json<Conversation>,
) -> ApiResult<Json<Conversation>> {
    let updated = state.conversations.update(&id, conversation).await?;
    Ok(Json(updated))
}

/// Delete a conversation by id (idempotent); the body is the id itself
pub async fn delete_conversation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<String>> {
    let deleted = state.conversations.delete(&id).await?;
    Ok(Json(deleted))
}
