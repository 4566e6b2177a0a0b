//! メタデータサーバを使った AccessTokenProvider 実装
//!
//! `GET {base}computeMetadata/v1/instance/service-accounts/default/token`
//! （`Metadata-Flavor: Google` ヘッダ必須）でサービスアカウントのトークンを取得する。
//! 取得したトークンは `expires_in` から `REFRESH_MARGIN` を引いた時刻までキャッシュする。

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use tokio::{sync::Mutex, time::Instant};

use super::{AccessTokenProvider, AuthError};

/// 既定のメタデータサーバ
pub const DEFAULT_METADATA_URL: &str = "http://metadata.google.internal/";

/// 期限のこの時間前になったら更新する
pub const REFRESH_MARGIN: Duration = Duration::from_secs(60);

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

struct CachedToken {
    token: String,
    refresh_at: Instant,
}

/// メタデータサーバから取得したトークンをキャッシュするプロバイダ
pub struct MetadataServerTokenProvider {
    http: reqwest::Client,
    base_url: Url,
    /// 取得中はロックを保持し、同時に呼ばれても取得は 1 回にする
    cached: Mutex<Option<CachedToken>>,
}

impl MetadataServerTokenProvider {
    /// 新しい MetadataServerTokenProvider を作成
    pub fn new(http: reqwest::Client, base_url: Url) -> Self {
        Self {
            http,
            base_url,
            cached: Mutex::new(None),
        }
    }

    /// トークンエンドポイントの URL を組み立てる
    pub fn token_url(&self) -> Result<Url, AuthError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                AuthError::RequestFailed(format!(
                    "metadata base URL cannot have a path: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend([
                "computeMetadata",
                "v1",
                "instance",
                "service-accounts",
                "default",
                "token",
            ]);
        Ok(url)
    }

    async fn fetch(&self) -> Result<TokenResponse, AuthError> {
        let url = self.token_url()?;
        tracing::debug!("Fetching access token from {}", url);

        let resp = self
            .http
            .get(url.clone())
            .header("Metadata-Flavor", "Google")
            .send()
            .await
            .map_err(|e| AuthError::RequestFailed(format!("GET {}: {}", url, e)))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| AuthError::RequestFailed(format!("GET {}: {}", url, e)))?;

        if !status.is_success() {
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                message: body,
            });
        }

        serde_json::from_str(&body).map_err(|e| AuthError::MalformedResponse(e.to_string()))
    }
}

#[async_trait]
impl AccessTokenProvider for MetadataServerTokenProvider {
    async fn access_token(&self) -> Result<Option<String>, AuthError> {
        let mut cached = self.cached.lock().await;

        if let Some(token) = cached.as_ref() {
            if Instant::now() < token.refresh_at {
                return Ok(Some(token.token.clone()));
            }
        }

        let fetched = self.fetch().await?;
        let lifetime = Duration::from_secs(fetched.expires_in).saturating_sub(REFRESH_MARGIN);
        tracing::info!("Obtained access token valid for {}s", fetched.expires_in);

        *cached = Some(CachedToken {
            token: fetched.access_token.clone(),
            refresh_at: Instant::now() + lifetime,
        });

        Ok(Some(fetched.access_token))
    }
}
