use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use bson::oid::ObjectId;

use crate::error::{PersistError, Result};
use crate::models::Conversation;
use crate::repositories::ConversationRepository;

/// In-memory conversation store.
///
/// Backs tests and local runs without a MongoDB instance. Identifiers use
/// the same hex format the Mongo repository produces, so ids are
/// interchangeable between the two implementations.
#[derive(Default)]
pub struct MemoryConversationRepository {
    conversations: Mutex<HashMap<String, Conversation>>,
}

impl MemoryConversationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a conversation under a caller-chosen id.
    pub fn seed(&self, conversation: Conversation) {
        let mut conversations = self.conversations.lock().unwrap();
        conversations.insert(conversation.id.clone(), conversation);
    }
}

#[async_trait]
impl ConversationRepository for MemoryConversationRepository {
    async fn insert(&self, mut conversation: Conversation) -> Result<Conversation> {
        conversation.id = ObjectId::new().to_hex();
        let mut conversations = self.conversations.lock().unwrap();
        conversations.insert(conversation.id.clone(), conversation.clone());
        Ok(conversation)
    }

    async fn find_all(&self) -> Result<Vec<Conversation>> {
        let conversations = self.conversations.lock().unwrap();
        Ok(conversations.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Conversation>> {
        let conversations = self.conversations.lock().unwrap();
        Ok(conversations.get(id).cloned())
    }

    async fn replace_by_id(&self, id: &str, mut conversation: Conversation) -> Result<Conversation> {
        let mut conversations = self.conversations.lock().unwrap();
        if !conversations.contains_key(id) {
            return Err(PersistError::ConversationNotFound(id.to_string()));
        }
        conversation.id = id.to_string();
        conversations.insert(id.to_string(), conversation.clone());
        Ok(conversation)
    }

    async fn delete_by_id(&self, id: &str) -> Result<String> {
        let mut conversations = self.conversations.lock().unwrap();
        conversations.remove(id);
        Ok(id.to_string())
    }
}
