mod models;
mod repository;

pub use models::MongoConversation;
pub use repository::MongoConversationRepository;
