//! 通知ペイロードの組み立て
//!
//! 副作用のない純粋関数として実装し、UseCase から呼び出す。

use std::collections::BTreeMap;

use super::{
    entity::{ChatMessage, MulticastMessage, Notification},
    value_object::PushToken,
};

/// 送信者の表示名が得られない場合のタイトル
pub const FALLBACK_SENDER_NAME: &str = "Someone";

/// テキスト以外のメッセージの本文
pub const MEDIA_MESSAGE_BODY: &str = "New media message";

/// 通知音
pub const DEFAULT_SOUND: &str = "default";

/// チャットメッセージからマルチキャスト送信の内容を組み立てる
///
/// # Arguments
///
/// * `message` - 作成されたチャットメッセージ
/// * `sender_name` - 送信者の表示名（解決できなかった場合は `None`）
/// * `tokens` - 受信者のプッシュトークン列（全デバイス）
pub fn build_multicast_message(
    message: &ChatMessage,
    sender_name: Option<String>,
    tokens: Vec<PushToken>,
) -> MulticastMessage {
    let title = sender_name.unwrap_or_else(|| FALLBACK_SENDER_NAME.to_string());

    let body = if message.kind.is_text() {
        message.content.clone().unwrap_or_default()
    } else {
        MEDIA_MESSAGE_BODY.to_string()
    };

    let data = BTreeMap::from([
        ("chatRoomId".to_string(), message.chat_room_id.clone()),
        ("senderId".to_string(), message.sender_id.as_str().to_string()),
    ]);

    MulticastMessage {
        notification: Notification {
            title,
            body,
            sound: DEFAULT_SOUND.to_string(),
        },
        data,
        tokens,
    }
}
