pub mod client;
pub mod error;
pub mod models;
pub mod mongo;
pub mod repositories;
pub mod service;

pub use client::{PersistClient, PersistClientBuilder};
pub use error::PersistError;
pub use models::{Conversation, Message, Sender};
pub use mongo::MongoConversationRepository;
pub use repositories::{ConversationRepository, MemoryConversationRepository};
pub use service::ConversationService;
