//! 値オブジェクト
//!
//! 不変条件（空文字列でないこと）をコンストラクタで保証します。

use std::fmt;

use super::error::ValidationError;

/// ユーザー ID
///
/// ユーザープロフィールを参照する識別子。空文字列は許容しない。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// 新しい UserId を作成
    ///
    /// # Errors
    ///
    /// 空文字列の場合は `ValidationError::EmptyUserId` を返す
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::EmptyUserId);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// プッシュトークン（FCM 登録トークン）
///
/// 中身は不透明な文字列として扱う。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PushToken(String);

impl PushToken {
    /// 新しい PushToken を作成
    ///
    /// # Errors
    ///
    /// 空文字列の場合は `ValidationError::EmptyPushToken` を返す
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::EmptyPushToken);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// ログ出力用に先頭だけを残した表記
    ///
    /// トークンはデバイスへの送信権限そのものなので、全体をログに出さない。
    pub fn redacted(&self) -> String {
        let prefix: String = self.0.chars().take(REDACTED_PREFIX_LEN).collect();
        if prefix.len() == self.0.len() {
            "***".to_string()
        } else {
            format!("{}...", prefix)
        }
    }
}

/// `PushToken::redacted` で残す文字数
const REDACTED_PREFIX_LEN: usize = 8;
