mod memory;

pub use memory::MemoryConversationRepository;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Conversation;

/// Trait for conversation persistence operations
///
/// Implementations translate the five CRUD intents into calls against a
/// backing document collection. Identifiers are opaque strings assigned by
/// the store on insert; callers never supply them.
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// Persist a new conversation, assigning a fresh identifier.
    ///
    /// Any identifier already present on the payload is ignored. Returns
    /// the conversation as stored, with a non-empty `id`.
    async fn insert(&self, conversation: Conversation) -> Result<Conversation>;

    /// Full scan of the collection. Empty collection yields an empty vec.
    async fn find_all(&self) -> Result<Vec<Conversation>>;

    /// Look up a conversation by id. Missing ids (including ids the store
    /// would never have assigned) yield `None`, never an error.
    async fn find_by_id(&self, id: &str) -> Result<Option<Conversation>>;

    /// Overwrite the whole document at `id` with the supplied conversation.
    ///
    /// The stored identifier is always `id`, regardless of any id inside
    /// the payload. Replacing a nonexistent id is a
    /// `ConversationNotFound` error, never an upsert.
    async fn replace_by_id(&self, id: &str, conversation: Conversation) -> Result<Conversation>;

    /// Delete the document at `id` if present. Returns the id whether or
    /// not a document existed (idempotent).
    async fn delete_by_id(&self, id: &str) -> Result<String>;
}
