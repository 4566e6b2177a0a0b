//! Firestore REST API を使った ProfileStore 実装
//!
//! `GET {base}projects/{project}/databases/{database}/documents/{collection}/{userId}`
//! でドキュメントを 1 件読み取る。404 はプロフィール無しとして扱う。

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};

use crate::{
    domain::{ProfileStore, ProfileStoreError, UserId, UserProfile},
    infrastructure::{
        auth::AccessTokenProvider,
        dto::{firestore::FirestoreDocument, google::parse_error_body},
    },
};

/// Firestore の `users` コレクションを読む ProfileStore
pub struct FirestoreProfileStore {
    http: reqwest::Client,
    /// 例: `https://firestore.googleapis.com/v1/`
    base_url: Url,
    project_id: String,
    database_id: String,
    collection: String,
    /// リクエストごとにトークンを取得する
    token_provider: Arc<dyn AccessTokenProvider>,
}

impl FirestoreProfileStore {
    /// 新しい FirestoreProfileStore を作成
    pub fn new(
        http: reqwest::Client,
        base_url: Url,
        project_id: String,
        database_id: String,
        collection: String,
        token_provider: Arc<dyn AccessTokenProvider>,
    ) -> Self {
        Self {
            http,
            base_url,
            project_id,
            database_id,
            collection,
            token_provider,
        }
    }

    /// ユーザーのドキュメント URL を組み立てる
    ///
    /// 各セグメントはパーセントエンコードされる（ID に `/` を含んでもパスが壊れない）。
    pub fn document_url(&self, user_id: &UserId) -> Result<Url, ProfileStoreError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ProfileStoreError::RequestFailed(format!(
                    "Firestore base URL cannot have a path: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend([
                "projects",
                self.project_id.as_str(),
                "databases",
                self.database_id.as_str(),
                "documents",
                self.collection.as_str(),
                user_id.as_str(),
            ]);
        Ok(url)
    }
}

#[async_trait]
impl ProfileStore for FirestoreProfileStore {
    async fn find(&self, user_id: &UserId) -> Result<Option<UserProfile>, ProfileStoreError> {
        let url = self.document_url(user_id)?;
        tracing::debug!("Firestore GET {}", url);

        let access_token = self
            .token_provider
            .access_token()
            .await
            .map_err(|e| ProfileStoreError::Credentials(e.to_string()))?;

        let mut request = self.http.get(url.clone());
        if let Some(token) = &access_token {
            request = request.bearer_auth(token);
        }

        let resp = request
            .send()
            .await
            .map_err(|e| ProfileStoreError::RequestFailed(format!("GET {}: {}", url, e)))?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            tracing::debug!("Profile '{}' not found", user_id);
            return Ok(None);
        }

        let body = resp
            .text()
            .await
            .map_err(|e| ProfileStoreError::RequestFailed(format!("GET {}: {}", url, e)))?;

        if !status.is_success() {
            let error = parse_error_body(status.as_u16(), &body);
            return Err(ProfileStoreError::RequestFailed(format!(
                "GET {} returned {} ({}): {}",
                url,
                status.as_u16(),
                error.status,
                error.message
            )));
        }

        let document: FirestoreDocument = serde_json::from_str(&body)
            .map_err(|e| ProfileStoreError::MalformedDocument(e.to_string()))?;

        Ok(Some(document.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::auth::NoAuth;

    fn create_store(base_url: &str) -> FirestoreProfileStore {
        FirestoreProfileStore::new(
            reqwest::Client::new(),
            Url::parse(base_url).unwrap(),
            "demo-project".to_string(),
            "(default)".to_string(),
            "users".to_string(),
            Arc::new(NoAuth),
        )
    }

    #[test]
    fn test_document_url() {
        // テスト項目: ドキュメント URL が正しく組み立てられる
        // given (前提条件):
        let store = create_store("https://firestore.googleapis.com/v1/");
        let user_id = UserId::new("u1".to_string()).unwrap();

        // when (操作):
        let url = store.document_url(&user_id).unwrap();

        // then (期待する結果):
        assert_eq!(
            url.as_str(),
            "https://firestore.googleapis.com/v1/projects/demo-project/databases/(default)/documents/users/u1"
        );
    }

    #[test]
    fn test_document_url_without_trailing_slash() {
        // テスト項目: ベース URL の末尾スラッシュの有無に関係なく同じ URL になる
        // given (前提条件):
        let store = create_store("http://127.0.0.1:8081/v1");
        let user_id = UserId::new("u1".to_string()).unwrap();

        // when (操作):
        let url = store.document_url(&user_id).unwrap();

        // then (期待する結果):
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8081/v1/projects/demo-project/databases/(default)/documents/users/u1"
        );
    }

    #[test]
    fn test_document_url_encodes_user_id() {
        // テスト項目: ユーザー ID の `/` はエンコードされる
        // given (前提条件):
        let store = create_store("https://firestore.googleapis.com/v1/");
        let user_id = UserId::new("a/b".to_string()).unwrap();

        // when (操作):
        let url = store.document_url(&user_id).unwrap();

        // then (期待する結果):
        assert!(url.as_str().ends_with("/documents/users/a%2Fb"));
    }
}
