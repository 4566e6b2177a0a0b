//! InMemory ProfileStore 実装
//!
//! HashMap をインメモリ DB として使用します。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{ProfileStore, ProfileStoreError, UserId, UserProfile};

/// インメモリ ProfileStore 実装
#[derive(Default)]
pub struct InMemoryProfileStore {
    /// Key: user_id
    profiles: RwLock<HashMap<String, UserProfile>>,
}

impl InMemoryProfileStore {
    /// 空の InMemoryProfileStore を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// プロフィールを登録済みの InMemoryProfileStore を作成
    pub fn with_profiles(profiles: impl IntoIterator<Item = (UserId, UserProfile)>) -> Self {
        let profiles = profiles
            .into_iter()
            .map(|(id, profile)| (id.into_string(), profile))
            .collect();
        Self {
            profiles: RwLock::new(profiles),
        }
    }

    /// プロフィールを登録（既存のものは置き換える）
    pub async fn insert(&self, user_id: UserId, profile: UserProfile) {
        let mut profiles = self.profiles.write().await;
        profiles.insert(user_id.into_string(), profile);
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn find(&self, user_id: &UserId) -> Result<Option<UserProfile>, ProfileStoreError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.get(user_id.as_str()).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PushToken;

    #[tokio::test]
    async fn test_find_existing_profile() {
        // テスト項目: 登録済みのプロフィールが取得できる
        // given (前提条件):
        let alice = UserId::new("u1".to_string()).unwrap();
        let profile = UserProfile {
            full_name: Some("Alice".to_string()),
            fcm_tokens: Some(vec![PushToken::new("tokA".to_string()).unwrap()]),
        };
        let store = InMemoryProfileStore::with_profiles([(alice.clone(), profile.clone())]);

        // when (操作):
        let result = store.find(&alice).await;

        // then (期待する結果):
        assert_eq!(result, Ok(Some(profile)));
    }

    #[tokio::test]
    async fn test_find_missing_profile() {
        // テスト項目: 未登録のユーザーは None が返される（エラーではない）
        // given (前提条件):
        let store = InMemoryProfileStore::new();
        let unknown = UserId::new("nobody".to_string()).unwrap();

        // when (操作):
        let result = store.find(&unknown).await;

        // then (期待する結果):
        assert_eq!(result, Ok(None));
    }

    #[tokio::test]
    async fn test_insert_replaces_profile() {
        // テスト項目: insert で既存のプロフィールが置き換えられる
        // given (前提条件):
        let bob = UserId::new("u2".to_string()).unwrap();
        let store = InMemoryProfileStore::new();
        store.insert(bob.clone(), UserProfile::default()).await;

        // when (操作):
        let renamed = UserProfile {
            full_name: Some("Bobby".to_string()),
            fcm_tokens: None,
        };
        store.insert(bob.clone(), renamed.clone()).await;

        // then (期待する結果):
        assert_eq!(store.find(&bob).await, Ok(Some(renamed)));
    }
}
