//! Data Transfer Objects (DTOs) for external systems.
//!
//! DTOs are organized by protocol:
//! - `firestore`: Firestore REST document DTOs
//! - `fcm`: FCM HTTP v1 request/response DTOs
//! - `google`: Google API error envelope shared by Firestore and FCM
//! - `http`: HTTP event endpoint DTOs

pub mod conversion;
pub mod fcm;
pub mod firestore;
pub mod google;
pub mod http;
