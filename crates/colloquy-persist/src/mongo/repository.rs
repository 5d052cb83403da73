use async_trait::async_trait;
use bson::oid::ObjectId;
use futures::TryStreamExt;
use mongodb::{bson::doc, Client, Collection};

use crate::error::{PersistError, Result};
use crate::models::Conversation;
use crate::mongo::models::MongoConversation;
use crate::repositories::ConversationRepository;

/// Conversation repository backed by a MongoDB collection.
///
/// One document per conversation; all lookups key on `_id`. A string that
/// does not parse as an ObjectId can never match a stored document, so
/// reads treat it as absent and deletes as a no-op.
#[derive(Clone)]
pub struct MongoConversationRepository {
    collection: Collection<MongoConversation>,
}

impl MongoConversationRepository {
    pub fn new(client: &Client, db_name: &str, collection_name: &str) -> Self {
        let collection = client.database(db_name).collection(collection_name);
        Self { collection }
    }
}

#[async_trait]
impl ConversationRepository for MongoConversationRepository {
    async fn insert(&self, conversation: Conversation) -> Result<Conversation> {
        let document = MongoConversation::from_conversation(ObjectId::new(), conversation);
        self.collection.insert_one(&document).await?;
        Ok(document.into())
    }

    async fn find_all(&self) -> Result<Vec<Conversation>> {
        let documents: Vec<MongoConversation> = self
            .collection
            .find(doc! {})
            .await?
            .try_collect()
            .await?;
        Ok(documents.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Conversation>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let filter = doc! { "_id": object_id };
        Ok(self.collection.find_one(filter).await?.map(Into::into))
    }

    async fn replace_by_id(&self, id: &str, conversation: Conversation) -> Result<Conversation> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| PersistError::ConversationNotFound(id.to_string()))?;

        let document = MongoConversation::from_conversation(object_id, conversation);
        let filter = doc! { "_id": object_id };
        let result = self.collection.replace_one(filter, &document).await?;

        if result.matched_count == 0 {
            return Err(PersistError::ConversationNotFound(id.to_string()));
        }

        Ok(document.into())
    }

    async fn delete_by_id(&self, id: &str) -> Result<String> {
        if let Ok(object_id) = ObjectId::parse_str(id) {
            let filter = doc! { "_id": object_id };
            self.collection.delete_one(filter).await?;
        }
        Ok(id.to_string())
    }
}
