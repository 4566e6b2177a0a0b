//! Google API 認証
//!
//! Firestore / FCM アダプタはリクエストごとに `AccessTokenProvider` からトークンを取得する。
//! トークンの有効期限と更新はプロバイダ側の責務。
//!
//! - `NoAuth`: 認証ヘッダを付けない（エミュレータ向け）
//! - `StaticTokenProvider`: 起動時に与えられたトークンをそのまま使う
//! - `MetadataServerTokenProvider`: GCE / Cloud Run のメタデータサーバから取得し、期限までキャッシュする

pub mod metadata;

use async_trait::async_trait;
use thiserror::Error;

pub use metadata::MetadataServerTokenProvider;

/// アクセストークン取得のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("token endpoint request failed: {0}")]
    RequestFailed(String),

    #[error("token endpoint returned {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("malformed token response: {0}")]
    MalformedResponse(String),
}

/// OAuth2 アクセストークンの供給元
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// 現在有効なアクセストークンを返す
    ///
    /// `Ok(None)` の場合は Authorization ヘッダを付けない。
    async fn access_token(&self) -> Result<Option<String>, AuthError>;
}

/// 認証なし（エミュレータ向け）
pub struct NoAuth;

#[async_trait]
impl AccessTokenProvider for NoAuth {
    async fn access_token(&self) -> Result<Option<String>, AuthError> {
        Ok(None)
    }
}

/// 固定トークン
///
/// 更新されないため、短時間の手動実行向け。
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: String) -> Self {
        Self { token }
    }
}

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Result<Option<String>, AuthError> {
        Ok(Some(self.token.clone()))
    }
}
