// src/models/chat.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Who produced a stored message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One entry in a session's message history. `timestamp` is an ISO-8601
/// string with the UTC `Z` designator, assigned when the exchange lands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredMessage {
    pub sender: Sender,
    pub content: String,
    pub timestamp: String,
}

/// A persisted conversation. `messages` is append-only; `metadata` is set at
/// creation and never changes afterwards.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct ChatSession {
    pub id: Uuid,
    pub messages: Json<Vec<StoredMessage>>,
    pub metadata: Json<Value>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub metadata: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct ChatMessageRequest {
    #[serde(default)]
    pub question: String,
    pub conversation_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct ChatMessageResponse {
    pub answer: String,
    pub conversation_id: String,
    pub user_message: StoredMessage,
    pub bot_message: StoredMessage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Sender::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Sender::Bot).unwrap(), "\"bot\"");

        let parsed: Sender = serde_json::from_str("\"bot\"").unwrap();
        assert_eq!(parsed, Sender::Bot);
    }

    #[test]
    fn test_session_wire_shape() {
        let session = ChatSession {
            id: Uuid::nil(),
            messages: Json(vec![StoredMessage {
                sender: Sender::User,
                content: "hello".to_string(),
                timestamp: "2025-01-01T00:00:00.000000Z".to_string(),
            }]),
            metadata: Json(serde_json::json!({ "page": "chat" })),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let value = serde_json::to_value(&session).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert_eq!(value["messages"][0]["sender"], "user");
        assert_eq!(value["metadata"]["page"], "chat");
        assert_eq!(value["id"], "00000000-0000-0000-0000-000000000000");
    }

    #[test]
    fn test_message_request_defaults_question_to_empty() {
        let req: ChatMessageRequest = serde_json::from_str("{}").unwrap();
        assert!(req.question.is_empty());
        assert!(req.conversation_id.is_none());
    }
}
