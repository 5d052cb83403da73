use mongodb::Client;

use crate::error::{PersistError, Result};
use crate::mongo::MongoConversationRepository;

pub struct PersistClient {
    conversation_repo: MongoConversationRepository,
}

impl PersistClient {
    pub async fn new(mongodb_uri: &str, db_name: &str, collection_name: &str) -> Result<Self> {
        let client = Client::with_uri_str(mongodb_uri)
            .await
            .map_err(|e| PersistError::Connection(e.to_string()))?;

        let conversation_repo = MongoConversationRepository::new(&client, db_name, collection_name);

        Ok(Self { conversation_repo })
    }

    pub fn builder() -> PersistClientBuilder {
        PersistClientBuilder::new()
    }

    pub fn conversations(&self) -> &MongoConversationRepository {
        &self.conversation_repo
    }
}

pub struct PersistClientBuilder {
    mongodb_uri: Option<String>,
    database: Option<String>,
    collection: String,
}

impl PersistClientBuilder {
    pub fn new() -> Self {
        Self {
            mongodb_uri: None,
            database: None,
            collection: "conversations".to_string(),
        }
    }

    pub fn mongodb_uri(mut self, uri: impl Into<String>) -> Self {
        self.mongodb_uri = Some(uri.into());
        self
    }

    pub fn database(mut self, db: impl Into<String>) -> Self {
        self.database = Some(db.into());
        self
    }

    pub fn collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    pub async fn build(self) -> Result<PersistClient> {
        let mongodb_uri = self
            .mongodb_uri
            .ok_or_else(|| PersistError::Internal("mongodb_uri is required".to_string()))?;
        let database = self
            .database
            .ok_or_else(|| PersistError::Internal("database is required".to_string()))?;

        PersistClient::new(&mongodb_uri, &database, &self.collection).await
    }
}

impl Default for PersistClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
