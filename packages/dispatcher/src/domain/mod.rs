//! ドメイン層
//!
//! プッシュ通知の配信に必要なエンティティ・値オブジェクト・ポート（trait）を定義します。
//! Infrastructure 層・UI 層には依存しません。

pub mod entity;
pub mod error;
pub mod notification;
pub mod profile_store;
pub mod push_gateway;
pub mod value_object;

pub use entity::{
    BatchResponse, ChatMessage, MessageCreatedEvent, MessageKind, MulticastMessage, Notification,
    SendOutcome, SendResponse, UserProfile,
};
pub use error::{ProfileStoreError, PushGatewayError, ValidationError};
pub use notification::{
    DEFAULT_SOUND, FALLBACK_SENDER_NAME, MEDIA_MESSAGE_BODY, build_multicast_message,
};
pub use profile_store::ProfileStore;
pub use push_gateway::{MAX_MULTICAST_TOKENS, PushGateway};
pub use value_object::{PushToken, UserId};

#[cfg(test)]
pub use profile_store::MockProfileStore;
#[cfg(test)]
pub use push_gateway::MockPushGateway;
