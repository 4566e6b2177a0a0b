//! ドメイン層のエラー型

use thiserror::Error;

/// 値オブジェクトの検証エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("user id must not be empty")]
    EmptyUserId,

    #[error("push token must not be empty")]
    EmptyPushToken,
}

/// ProfileStore のエラー
///
/// プロフィールが存在しないことはエラーではない（`Ok(None)` で表現する）。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileStoreError {
    /// 読み取りリクエストの失敗（ネットワーク・権限・一時的な障害）
    #[error("profile lookup request failed: {0}")]
    RequestFailed(String),

    /// アクセストークンを取得できなかった
    #[error("failed to obtain credentials for profile lookup: {0}")]
    Credentials(String),

    /// ドキュメントを解釈できなかった
    #[error("malformed profile document: {0}")]
    MalformedDocument(String),
}

/// PushGateway のエラー
///
/// 呼び出し全体の失敗を表す。トークン単位の失敗は `BatchResponse` に含まれる。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PushGatewayError {
    /// 送信内容が不正（トークン数が範囲外など）
    #[error("invalid multicast message: {0}")]
    InvalidMessage(String),

    /// 認証・認可エラー
    #[error("push gateway rejected credentials (status {status}): {message}")]
    Unauthorized { status: u16, message: String },

    /// アクセストークンを取得できなかった
    #[error("failed to obtain credentials for push gateway: {0}")]
    Credentials(String),

    /// 通信エラー
    #[error("push gateway request failed: {0}")]
    RequestFailed(String),
}
