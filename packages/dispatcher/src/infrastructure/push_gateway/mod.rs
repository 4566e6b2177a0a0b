//! PushGateway の実装
//!
//! - `fcm`: FCM HTTP v1 API を使った実装

pub mod fcm;

pub use fcm::FcmPushGateway;
