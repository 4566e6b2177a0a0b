//! FCM HTTP v1 `messages:send` DTOs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FcmSendRequest {
    pub message: FcmMessage,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FcmMessage {
    pub token: String,
    pub notification: FcmNotification,
    pub data: BTreeMap<String, String>,
    pub android: FcmAndroidConfig,
    pub apns: FcmApnsConfig,
}

/// The v1 API has no platform-independent sound; it lives in `android` and `apns`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FcmNotification {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FcmAndroidConfig {
    pub notification: FcmAndroidNotification,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FcmAndroidNotification {
    pub sound: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FcmApnsConfig {
    pub payload: FcmApnsPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FcmApnsPayload {
    pub aps: FcmAps,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FcmAps {
    pub sound: String,
}

/// Successful response: `{"name": "projects/{p}/messages/{id}"}`.
#[derive(Debug, Clone, Deserialize)]
pub struct FcmSendResponse {
    pub name: String,
}
