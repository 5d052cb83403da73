use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::{Conversation, Message};

/// MongoDB-specific conversation model (uses ObjectId)
///
/// The identifier lives in the collection's native `_id` slot; messages are
/// embedded in document order, which is the conversation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoConversation {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl MongoConversation {
    /// Build a document for the given id, discarding any id carried by the
    /// payload itself.
    pub fn from_conversation(id: ObjectId, conversation: Conversation) -> Self {
        Self {
            id,
            title: conversation.title,
            messages: conversation.messages,
        }
    }
}

impl From<MongoConversation> for Conversation {
    fn from(doc: MongoConversation) -> Self {
        Self {
            id: doc.id.to_hex(),
            title: doc.title,
            messages: doc.messages,
        }
    }
}
