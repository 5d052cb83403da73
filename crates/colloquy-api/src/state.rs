use std::sync::Arc;

use colloquy_persist::ConversationService;

use crate::config::Config;

/// Shared application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub conversations: ConversationService,
}

impl AppState {
    pub fn new(config: Config, conversations: ConversationService) -> Self {
        Self {
            config: Arc::new(config),
            conversations,
        }
    }
}
