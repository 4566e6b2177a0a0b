//! Conversion logic between DTOs and domain entities.

use crate::domain::{
    ChatMessage, MessageCreatedEvent, MessageKind, MulticastMessage, PushToken, SendOutcome,
    SendResponse, UserId, UserProfile, ValidationError,
};
use crate::usecase::{DispatchOutcome, SkipReason};

use super::{fcm, firestore, http};

// ========================================
// DTO → Domain Entity
// ========================================

impl From<firestore::FirestoreDocument> for UserProfile {
    fn from(doc: firestore::FirestoreDocument) -> Self {
        let full_name = doc
            .fields
            .get("fullName")
            .and_then(|v| v.string_value.clone());

        // 文字列以外・空文字列の要素は無視する
        let fcm_tokens = doc
            .fields
            .get("fcmTokens")
            .and_then(|v| v.array_value.as_ref())
            .map(|array| {
                array
                    .values
                    .iter()
                    .filter_map(|v| v.string_value.clone())
                    .filter_map(|s| PushToken::new(s).ok())
                    .collect()
            });

        Self {
            full_name,
            fcm_tokens,
        }
    }
}

/// ドキュメントの内容とパスパラメータからイベントを組み立てる
///
/// ドキュメントに `chatRoomId` が無い場合はパスの値を使う。
pub fn message_created_event(
    chat_room_id: String,
    message_id: String,
    dto: http::MessageDocumentDto,
) -> Result<MessageCreatedEvent, ValidationError> {
    let message = ChatMessage {
        sender_id: UserId::new(dto.sender_id)?,
        receiver_id: UserId::new(dto.receiver_id)?,
        kind: MessageKind::from(dto.kind),
        content: dto.content,
        chat_room_id: dto.chat_room_id.unwrap_or_else(|| chat_room_id.clone()),
    };

    Ok(MessageCreatedEvent {
        chat_room_id,
        message_id,
        message,
    })
}

// ========================================
// Domain Entity → DTO
// ========================================

/// トークンごとの `messages:send` リクエストに展開する（順序はトークン順）
pub fn fcm_send_requests(message: &MulticastMessage) -> Vec<fcm::FcmSendRequest> {
    message
        .tokens
        .iter()
        .map(|token| fcm::FcmSendRequest {
            message: fcm::FcmMessage {
                token: token.as_str().to_string(),
                notification: fcm::FcmNotification {
                    title: message.notification.title.clone(),
                    body: message.notification.body.clone(),
                },
                data: message.data.clone(),
                android: fcm::FcmAndroidConfig {
                    notification: fcm::FcmAndroidNotification {
                        sound: message.notification.sound.clone(),
                    },
                },
                apns: fcm::FcmApnsConfig {
                    payload: fcm::FcmApnsPayload {
                        aps: fcm::FcmAps {
                            sound: message.notification.sound.clone(),
                        },
                    },
                },
            },
        })
        .collect()
}

impl From<SkipReason> for http::SkipReasonDto {
    fn from(reason: SkipReason) -> Self {
        match reason {
            SkipReason::SelfMessage => Self::SelfMessage,
            SkipReason::NoPushTokens => Self::NoPushTokens,
        }
    }
}

impl From<SendResponse> for http::SendResponseDto {
    fn from(model: SendResponse) -> Self {
        let token = model.token.as_str().to_string();
        match model.outcome {
            SendOutcome::Delivered { message_id } => Self {
                token,
                success: true,
                message_id: Some(message_id),
                error_code: None,
                error_message: None,
            },
            SendOutcome::Failed { code, message } => Self {
                token,
                success: false,
                message_id: None,
                error_code: Some(code),
                error_message: Some(message),
            },
        }
    }
}

impl From<DispatchOutcome> for http::DispatchResponseDto {
    fn from(outcome: DispatchOutcome) -> Self {
        match outcome {
            DispatchOutcome::Skipped(reason) => Self::Skipped {
                reason: reason.into(),
            },
            DispatchOutcome::Sent(batch) => Self::Sent {
                success_count: batch.success_count(),
                failure_count: batch.failure_count(),
                responses: batch.responses.into_iter().map(Into::into).collect(),
            },
        }
    }
}
