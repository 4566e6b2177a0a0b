//! HTTP event endpoint DTOs.

use serde::{Deserialize, Serialize};

/// Fields of a newly created `chatRooms/{chatRoomId}/messages/{messageId}` document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDocumentDto {
    /// A missing id becomes empty and is rejected by `UserId::new`
    #[serde(default)]
    pub sender_id: String,
    #[serde(default)]
    pub receiver_id: String,
    /// A missing `type` is treated as a non-text kind
    #[serde(rename = "type", default)]
    pub kind: String,
    pub content: Option<String>,
    pub chat_room_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DispatchResponseDto {
    Skipped {
        reason: SkipReasonDto,
    },
    #[serde(rename_all = "camelCase")]
    Sent {
        success_count: usize,
        failure_count: usize,
        responses: Vec<SendResponseDto>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReasonDto {
    SelfMessage,
    NoPushTokens,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendResponseDto {
    pub token: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponseDto {
    pub error: String,
}
