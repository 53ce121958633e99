//! Wire-shape tests — validates that the client's types match the JSON
//! field names the chat server owns.

use pairchat_client::{
    MessagesResponse, PostMessageRequest, RoomStatus, SearchRequest, SearchResponse,
};

/// The search body carries exactly the three filter fields, snake_case.
#[test]
fn test_search_request_shape() {
    let request = SearchRequest {
        my_gender: "male".into(),
        search_gender: "female".into(),
        topic: "chat".into(),
    };

    let value = serde_json::to_value(&request).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 3);
    assert_eq!(value["my_gender"], "male");
    assert_eq!(value["search_gender"], "female");
    assert_eq!(value["topic"], "chat");
}

/// Both shapes the matching endpoint produces parse into SearchResponse.
#[test]
fn test_search_response_variants() {
    let success: SearchResponse =
        serde_json::from_str(r#"{"status": "success", "room_id": "abc123"}"#).unwrap();
    assert_eq!(success.status, "success");
    assert_eq!(success.room_id.as_deref(), Some("abc123"));
    assert!(success.message.is_none());

    let error: SearchResponse =
        serde_json::from_str(r#"{"status": "error", "message": "no match"}"#).unwrap();
    assert_eq!(error.status, "error");
    assert!(error.room_id.is_none());
    assert_eq!(error.message.as_deref(), Some("no match"));
}

/// Posted messages carry room, session, and content under those names.
#[test]
fn test_post_message_request_shape() {
    let request = PostMessageRequest {
        room_id: "abc123".into(),
        session_id: "sess-1".into(),
        content: "hi".into(),
    };

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["room_id"], "abc123");
    assert_eq!(value["session_id"], "sess-1");
    assert_eq!(value["content"], "hi");
}

/// History responses: message list plus the join flag.
#[test]
fn test_messages_response_shape() {
    let raw = serde_json::json!({
        "status": "success",
        "messages": [
            {
                "session_id": "sess-1",
                "message": "hello",
                "timestamp": "2026-01-01 12:00:00",
            }
        ],
        "second_user_joined": true,
    });

    let parsed: MessagesResponse = serde_json::from_value(raw).unwrap();
    assert_eq!(parsed.status, "success");
    assert_eq!(parsed.messages.len(), 1);
    assert_eq!(parsed.messages[0].message, "hello");
    assert!(parsed.second_user_joined);
}

/// Status checks answer with the bare join flag.
#[test]
fn test_room_status_shape() {
    let parsed: RoomStatus = serde_json::from_str(r#"{"second_user_joined": false}"#).unwrap();
    assert!(!parsed.second_user_joined);
}
