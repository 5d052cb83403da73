use serde::{Deserialize, Serialize};

/// Database-agnostic conversation model.
///
/// `id` is the store-assigned identifier rendered as a string; it is empty
/// on payloads that have never been persisted and populated on everything
/// the store returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub messages: Vec<Message>,
}

/// One turn in a conversation.
///
/// `content` is optional: `None` serializes as an explicit `null`, and an
/// absent field deserializes to `None`. An empty string is a distinct,
/// preserved value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    #[serde(default)]
    pub content: Option<String>,
}

/// Closed set of conversation participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sender {
    User,
    Bot,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sender_serializes_uppercase() {
        assert_eq!(serde_json::to_value(Sender::User).unwrap(), json!("USER"));
        assert_eq!(serde_json::to_value(Sender::Bot).unwrap(), json!("BOT"));

        let sender: Sender = serde_json::from_value(json!("BOT")).unwrap();
        assert_eq!(sender, Sender::Bot);
    }

    #[test]
    fn missing_content_reads_as_none() {
        let message: Message = serde_json::from_value(json!({ "sender": "USER" })).unwrap();
        assert_eq!(message.content, None);
    }

    #[test]
    fn null_content_reads_as_none() {
        let message: Message =
            serde_json::from_value(json!({ "sender": "BOT", "content": null })).unwrap();
        assert_eq!(message.content, None);
    }

    #[test]
    fn empty_content_is_not_none() {
        let message: Message =
            serde_json::from_value(json!({ "sender": "USER", "content": "" })).unwrap();
        assert_eq!(message.content, Some(String::new()));
    }

    #[test]
    fn none_content_writes_explicit_null() {
        let message = Message {
            sender: Sender::Bot,
            content: None,
        };
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value, json!({ "sender": "BOT", "content": null }));
    }

    #[test]
    fn conversation_without_id_defaults_to_empty() {
        let conversation: Conversation = serde_json::from_value(json!({
            "title": "Trip planning",
            "messages": [{ "sender": "USER", "content": "Where should I go?" }]
        }))
        .unwrap();

        assert!(conversation.id.is_empty());
        assert_eq!(conversation.title, "Trip planning");
        assert_eq!(conversation.messages.len(), 1);
        assert_eq!(conversation.messages[0].sender, Sender::User);
    }
}
