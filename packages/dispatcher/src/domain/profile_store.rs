//! ProfileStore trait 定義
//!
//! ユーザープロフィールの読み取りインターフェース。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{ProfileStoreError, UserId, UserProfile};

/// ユーザープロフィールの読み取り専用ストア
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// ユーザー ID でプロフィールを取得
    ///
    /// プロフィールが存在しない場合は `Ok(None)` を返す。
    async fn find(&self, user_id: &UserId) -> Result<Option<UserProfile>, ProfileStoreError>;
}
