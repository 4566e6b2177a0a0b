//! Infrastructure 層
//!
//! ドメイン層のポート（ProfileStore / PushGateway）の具体的な実装と DTO。

pub mod auth;
pub mod dto;
pub mod profile_store;
pub mod push_gateway;
