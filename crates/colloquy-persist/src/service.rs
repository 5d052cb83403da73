use std::sync::Arc;

use crate::error::{PersistError, Result};
use crate::models::Conversation;
use crate::repositories::ConversationRepository;

/// Business-rule layer between the API surface and the repository.
///
/// Validates request shapes before anything reaches the store, and keeps
/// not-found outcomes distinguishable from malformed requests. Stateless;
/// each call is a single request/response.
#[derive(Clone)]
pub struct ConversationService {
    repository: Arc<dyn ConversationRepository>,
}

impl ConversationService {
    pub fn new(repository: Arc<dyn ConversationRepository>) -> Self {
        Self { repository }
    }

    /// Create a new conversation; the store assigns the identifier.
    pub async fn create(&self, conversation: Conversation) -> Result<Conversation> {
        validate(&conversation)?;
        let created = self.repository.insert(conversation).await?;
        tracing::debug!(id = %created.id, "conversation created");
        Ok(created)
    }

    /// Every conversation in the collection.
    pub async fn list(&self) -> Result<Vec<Conversation>> {
        self.repository.find_all().await
    }

    /// Look up one conversation; `None` when the id is unknown.
    pub async fn get(&self, id: &str) -> Result<Option<Conversation>> {
        self.repository.find_by_id(id).await
    }

    /// Replace the conversation at `id` wholesale. The persisted id is
    /// always `id`, never anything the payload carries.
    pub async fn update(&self, id: &str, conversation: Conversation) -> Result<Conversation> {
        validate(&conversation)?;
        self.repository.replace_by_id(id, conversation).await
    }

    /// Delete by id; idempotent, returns the id either way.
    pub async fn delete(&self, id: &str) -> Result<String> {
        self.repository.delete_by_id(id).await
    }
}

fn validate(conversation: &Conversation) -> Result<()> {
    if conversation.title.trim().is_empty() {
        return Err(PersistError::Validation(
            "title must not be empty".to_string(),
        ));
    }
    Ok(())
}
