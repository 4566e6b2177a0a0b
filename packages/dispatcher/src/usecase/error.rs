//! UseCase 層のエラー型

use thiserror::Error;

use crate::domain::{ProfileStoreError, PushGatewayError};

/// 通知配信のエラー
///
/// 依存先の失敗はそのまま呼び出し元へ伝播させる（ローカルでのリトライはしない）。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("failed to look up profile of '{user_id}': {source}")]
    ProfileLookup {
        user_id: String,
        #[source]
        source: ProfileStoreError,
    },

    #[error(transparent)]
    Push(#[from] PushGatewayError),
}
