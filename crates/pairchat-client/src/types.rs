//! Wire types for the chat server's HTTP surface.
//!
//! The server owns these shapes; the client only consumes them. Field names
//! match the JSON on the wire exactly.

use serde::{Deserialize, Serialize};

/// Search filter posted to `/chat/search`.
///
/// Caller-supplied strings, sent verbatim; the client performs no
/// validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub my_gender: String,
    pub search_gender: String,
    pub topic: String,
}

/// Raw response from the matching endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub status: String,
    #[serde(default)]
    pub room_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Interpreted result of a search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A room is ready; navigate to it.
    Matched { room_id: String },
    /// The server succeeded but produced no room.
    NoRoomFound,
    /// The server rejected the search. Already logged; not a user-facing
    /// notification.
    Rejected { message: Option<String> },
}

/// Body for `/chat/post_message/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostMessageRequest {
    pub room_id: String,
    pub session_id: String,
    pub content: String,
}

/// Acknowledgement for a posted message.
#[derive(Debug, Clone, Deserialize)]
pub struct PostMessageResponse {
    pub status: String,
    #[serde(default)]
    pub message_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A message in room history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomMessage {
    pub session_id: String,
    pub message: String,
    pub timestamp: String,
}

/// Response from `/chat/get_messages/<room_id>/`.
#[derive(Debug, Clone, Deserialize)]
pub struct MessagesResponse {
    pub status: String,
    #[serde(default)]
    pub messages: Vec<RoomMessage>,
    #[serde(default)]
    pub second_user_joined: bool,
}

/// Response from `/chat/api/check_room_status/<room_id>/`.
#[derive(Debug, Clone, Deserialize)]
pub struct RoomStatus {
    pub second_user_joined: bool,
}

/// Body for `/chat/api/end_chat/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndChatRequest {
    pub room_id: String,
}

/// Status-only acknowledgement.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}
