//! UseCase: プッシュ通知の配信
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DispatchNotificationUseCase::execute() メソッド
//! - 自分宛てメッセージ・トークン無しのガード、ペイロード構築、ゲートウェイ呼び出し
//!
//! ### なぜこのテストが必要か
//! - ガード条件では ProfileStore も PushGateway も呼ばれないことを保証
//! - 1 イベントにつきゲートウェイ呼び出しが高々 1 回であることを保証
//! - 依存先のエラーが握りつぶされずに伝播することを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：テキスト / メディアメッセージの配信
//! - 異常系：プロフィール取得失敗、ゲートウェイ失敗
//! - エッジケース：プロフィール無し、fcmTokens 無し、fullName 無し

use std::sync::Arc;

use crate::domain::{
    BatchResponse, MessageCreatedEvent, ProfileStore, PushGateway, UserId, UserProfile,
    build_multicast_message,
};

use super::error::DispatchError;

/// 配信をスキップした理由
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// 送信者と受信者が同一
    SelfMessage,
    /// 受信者にプッシュトークンが無い
    NoPushTokens,
}

/// 配信の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// ガード条件による正常終了（何もしない）
    Skipped(SkipReason),
    /// ゲートウェイへ送信した（トークン単位の結果を含む）
    Sent(BatchResponse),
}

/// プッシュ通知配信のユースケース
pub struct DispatchNotificationUseCase {
    /// ProfileStore（ユーザープロフィール読み取りの抽象化）
    profile_store: Arc<dyn ProfileStore>,
    /// PushGateway（プッシュ送信の抽象化）
    push_gateway: Arc<dyn PushGateway>,
}

impl DispatchNotificationUseCase {
    /// 新しい DispatchNotificationUseCase を作成
    pub fn new(profile_store: Arc<dyn ProfileStore>, push_gateway: Arc<dyn PushGateway>) -> Self {
        Self {
            profile_store,
            push_gateway,
        }
    }

    /// メッセージ作成イベントを処理する
    ///
    /// # Arguments
    ///
    /// * `event` - 作成されたメッセージとパスパラメータ
    ///
    /// # Returns
    ///
    /// * `Ok(DispatchOutcome::Skipped(_))` - ガード条件により何もしなかった
    /// * `Ok(DispatchOutcome::Sent(_))` - ゲートウェイの送信結果
    /// * `Err(DispatchError)` - プロフィール取得またはゲートウェイ呼び出しの失敗
    pub async fn execute(
        &self,
        event: MessageCreatedEvent,
    ) -> Result<DispatchOutcome, DispatchError> {
        let message = event.message;

        // 1. 自分宛てメッセージは通知しない
        if message.is_self_message() {
            tracing::debug!(
                "Message '{}' in room '{}' was sent to self, skipping",
                event.message_id,
                event.chat_room_id
            );
            return Ok(DispatchOutcome::Skipped(SkipReason::SelfMessage));
        }

        // 2. 受信者のプッシュトークンを取得
        let receiver = self.find_profile(&message.receiver_id).await?;
        let tokens = UserProfile::resolve_push_tokens(receiver);
        if tokens.is_empty() {
            tracing::debug!(
                "Receiver '{}' has no push tokens, skipping message '{}'",
                message.receiver_id,
                event.message_id
            );
            return Ok(DispatchOutcome::Skipped(SkipReason::NoPushTokens));
        }

        // 3. 送信者の表示名を取得
        let sender = self.find_profile(&message.sender_id).await?;
        let sender_name = UserProfile::resolve_display_name(sender);

        // 4. ペイロードを構築して送信
        let multicast = build_multicast_message(&message, sender_name, tokens);
        let batch = self.push_gateway.send_multicast(&multicast).await?;

        tracing::info!(
            "Dispatched message '{}' to '{}': {} succeeded, {} failed",
            event.message_id,
            message.receiver_id,
            batch.success_count(),
            batch.failure_count()
        );

        Ok(DispatchOutcome::Sent(batch))
    }

    async fn find_profile(&self, user_id: &UserId) -> Result<Option<UserProfile>, DispatchError> {
        self.profile_store
            .find(user_id)
            .await
            .map_err(|source| DispatchError::ProfileLookup {
                user_id: user_id.as_str().to_string(),
                source,
            })
    }
}
