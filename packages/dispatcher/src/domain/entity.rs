//! エンティティ
//!
//! 1 回の呼び出しの間だけ存在する読み取り専用のデータ。永続化はしない。

use std::collections::BTreeMap;

use super::value_object::{PushToken, UserId};

/// メッセージ種別
///
/// `text` 以外（image / audio / video / file など）は種別名だけを保持し、一律に扱う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageKind {
    Text,
    Media(String),
}

impl MessageKind {
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text)
    }
}

impl From<String> for MessageKind {
    fn from(value: String) -> Self {
        if value == "text" {
            Self::Text
        } else {
            Self::Media(value)
        }
    }
}

/// 新規作成されたチャットメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender_id: UserId,
    pub receiver_id: UserId,
    pub kind: MessageKind,
    /// `kind == Text` のときの本文
    pub content: Option<String>,
    pub chat_room_id: String,
}

impl ChatMessage {
    /// 送信者と受信者が同一か
    pub fn is_self_message(&self) -> bool {
        self.sender_id == self.receiver_id
    }
}

/// メッセージ作成イベント
///
/// イベントソースから渡されるドキュメントの内容とパスパラメータ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCreatedEvent {
    pub chat_room_id: String,
    pub message_id: String,
    pub message: ChatMessage,
}

/// ユーザープロフィール（通知に必要なフィールドのみ）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    pub full_name: Option<String>,
    pub fcm_tokens: Option<Vec<PushToken>>,
}

impl UserProfile {
    /// プロフィールからプッシュトークン列を解決する
    ///
    /// プロフィールが存在しない、または `fcm_tokens` が無い場合は空。
    pub fn resolve_push_tokens(profile: Option<Self>) -> Vec<PushToken> {
        profile
            .and_then(|profile| profile.fcm_tokens)
            .unwrap_or_default()
    }

    /// プロフィールから表示名を解決する
    ///
    /// プロフィールが存在しない、または `full_name` が無い・空の場合は `None`。
    pub fn resolve_display_name(profile: Option<Self>) -> Option<String> {
        profile
            .and_then(|profile| profile.full_name)
            .filter(|name| !name.is_empty())
    }
}

/// 通知本体
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub sound: String,
}

/// マルチキャスト送信の内容
///
/// 1 つの論理的な通知を受信者の全デバイスへ配信する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MulticastMessage {
    pub notification: Notification,
    pub data: BTreeMap<String, String>,
    pub tokens: Vec<PushToken>,
}

/// トークン単位の送信結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Delivered { message_id: String },
    Failed { code: String, message: String },
}

/// トークン単位の送信レポート
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendResponse {
    pub token: PushToken,
    pub outcome: SendOutcome,
}

impl SendResponse {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, SendOutcome::Delivered { .. })
    }
}

/// マルチキャスト送信の集計結果
///
/// `responses` の順序は送信したトークンの順序と一致する。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResponse {
    pub responses: Vec<SendResponse>,
}

impl BatchResponse {
    pub fn new(responses: Vec<SendResponse>) -> Self {
        Self { responses }
    }

    pub fn success_count(&self) -> usize {
        self.responses.iter().filter(|r| r.is_success()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.responses.len() - self.success_count()
    }
}
