//! Conversation page as delivered by the chat endpoint.
//!
//! Field names follow the domain; `serde` renames map them onto the wire
//! shape (`chats`, `from`, `to`, `name`, `status`, `message`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationResponse {
    #[serde(rename = "chats", default)]
    pub messages: Vec<Message>,
    #[serde(rename = "from", default)]
    pub sender_range_from: String,
    #[serde(rename = "to", default)]
    pub sender_range_to: String,
    #[serde(rename = "name", default)]
    pub conversation_name: String,
    #[serde(default)]
    pub status: String,
    #[serde(rename = "message", default)]
    pub status_message: String,
}

impl ConversationResponse {
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Timestamp of the first message, used for the list's date separator.
    pub fn first_timestamp(&self) -> Option<&str> {
        self.messages.first().map(|message| message.timestamp.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    #[serde(rename = "message", default)]
    pub text: String,
    pub sender: SenderInfo,
    #[serde(rename = "time", default)]
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderInfo {
    #[serde(rename = "image", default)]
    pub avatar_url: String,
    #[serde(rename = "is_kyc_verified", default)]
    pub is_verified: bool,
    #[serde(rename = "self", default)]
    pub is_self: bool,
    #[serde(default)]
    pub user_id: String,
}
