//! FCM HTTP v1 API を使った PushGateway 実装
//!
//! ## 責務
//!
//! - マルチキャストをトークンごとの `messages:send` リクエストに展開して並行送信
//! - トークン単位の結果を送信順に `BatchResponse` へ集計
//!
//! ## エラーの扱い
//!
//! - 期限切れトークンなどトークン単位の失敗は `SendOutcome::Failed` として返す
//! - 認証エラー（401、`SENDER_ID_MISMATCH` 以外の 403）と通信エラーは呼び出し全体を失敗させる
//! - リトライはしない

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::join_all;
use reqwest::{StatusCode, Url};

use crate::{
    domain::{
        BatchResponse, MAX_MULTICAST_TOKENS, MulticastMessage, PushGateway, PushGatewayError,
        SendOutcome, SendResponse,
    },
    infrastructure::{
        auth::AccessTokenProvider,
        dto::{
            conversion::fcm_send_requests,
            fcm::{FcmSendRequest, FcmSendResponse},
            google::parse_error_body,
        },
    },
};

/// 403 のうち、トークン単位の失敗として扱うエラーコード
const SENDER_ID_MISMATCH: &str = "SENDER_ID_MISMATCH";

/// FCM HTTP v1 API を使った PushGateway 実装
pub struct FcmPushGateway {
    http: reqwest::Client,
    /// 例: `https://fcm.googleapis.com/v1/`
    base_url: Url,
    project_id: String,
    /// マルチキャストごとにトークンを 1 回取得する
    token_provider: Arc<dyn AccessTokenProvider>,
}

impl FcmPushGateway {
    /// 新しい FcmPushGateway を作成
    pub fn new(
        http: reqwest::Client,
        base_url: Url,
        project_id: String,
        token_provider: Arc<dyn AccessTokenProvider>,
    ) -> Self {
        Self {
            http,
            base_url,
            project_id,
            token_provider,
        }
    }

    /// `projects/{project}/messages:send` の URL を組み立てる
    pub fn send_url(&self) -> Result<Url, PushGatewayError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                PushGatewayError::RequestFailed(format!(
                    "FCM base URL cannot have a path: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(["projects", self.project_id.as_str(), "messages:send"]);
        Ok(url)
    }

    fn validate(message: &MulticastMessage) -> Result<(), PushGatewayError> {
        if message.tokens.is_empty() {
            return Err(PushGatewayError::InvalidMessage(
                "tokens must be a non-empty list".to_string(),
            ));
        }
        if message.tokens.len() > MAX_MULTICAST_TOKENS {
            return Err(PushGatewayError::InvalidMessage(format!(
                "tokens must not contain more than {} items, got {}",
                MAX_MULTICAST_TOKENS,
                message.tokens.len()
            )));
        }
        Ok(())
    }

    async fn send_one(
        &self,
        url: &Url,
        access_token: Option<&str>,
        request: &FcmSendRequest,
    ) -> Result<SendOutcome, PushGatewayError> {
        let mut builder = self.http.post(url.clone()).json(request);
        if let Some(token) = access_token {
            builder = builder.bearer_auth(token);
        }

        let resp = builder
            .send()
            .await
            .map_err(|e| PushGatewayError::RequestFailed(format!("POST {}: {}", url, e)))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| PushGatewayError::RequestFailed(format!("POST {}: {}", url, e)))?;

        if status.is_success() {
            let sent: FcmSendResponse = serde_json::from_str(&body).map_err(|e| {
                PushGatewayError::RequestFailed(format!("unexpected FCM response: {}", e))
            })?;
            return Ok(SendOutcome::Delivered {
                message_id: sent.name,
            });
        }

        let error = parse_error_body(status.as_u16(), &body);
        let code = error.error_code();

        if status == StatusCode::UNAUTHORIZED
            || (status == StatusCode::FORBIDDEN && code != SENDER_ID_MISMATCH)
        {
            return Err(PushGatewayError::Unauthorized {
                status: status.as_u16(),
                message: error.message,
            });
        }

        Ok(SendOutcome::Failed {
            code,
            message: error.message,
        })
    }
}

#[async_trait]
impl PushGateway for FcmPushGateway {
    async fn send_multicast(
        &self,
        message: &MulticastMessage,
    ) -> Result<BatchResponse, PushGatewayError> {
        Self::validate(message)?;

        let url = self.send_url()?;
        let access_token = self
            .token_provider
            .access_token()
            .await
            .map_err(|e| PushGatewayError::Credentials(e.to_string()))?;
        let requests = fcm_send_requests(message);
        tracing::debug!("FCM POST {} for {} tokens", url, requests.len());

        let results = join_all(
            requests
                .iter()
                .map(|r| self.send_one(&url, access_token.as_deref(), r)),
        ).await;

        let mut responses = Vec::with_capacity(results.len());
        for (token, result) in message.tokens.iter().zip(results) {
            let outcome = result?;
            match &outcome {
                SendOutcome::Delivered { message_id } => {
                    tracing::debug!("Delivered to token '{}': {}", token.redacted(), message_id);
                }
                SendOutcome::Failed { code, message } => {
                    tracing::warn!(
                        "Failed to deliver to token '{}': {} ({})",
                        token.redacted(),
                        code,
                        message
                    );
                }
            }
            responses.push(SendResponse {
                token: token.clone(),
                outcome,
            });
        }

        Ok(BatchResponse::new(responses))
    }
}
