//! PushGateway trait 定義
//!
//! マルチキャストのプッシュ送信インターフェース。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{BatchResponse, MulticastMessage, PushGatewayError};

/// 1 回のマルチキャスト送信で指定できるトークン数の上限
pub const MAX_MULTICAST_TOKENS: usize = 500;

/// プッシュ通知ゲートウェイ
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PushGateway: Send + Sync {
    /// 全トークンへ 1 回の呼び出しで送信し、トークン単位の結果を返す
    ///
    /// トークン単位の失敗（期限切れトークンなど）は `Err` ではなく
    /// `BatchResponse` の中に含まれる。
    async fn send_multicast(
        &self,
        message: &MulticastMessage,
    ) -> Result<BatchResponse, PushGatewayError>;
}
